//! Strategies deciding which class a stored document is loaded as.
//!
//! A selector answers two questions for a family of classes sharing one
//! collection: given a raw document, which class should be instantiated, and
//! given a class, which filter scopes the collection to its documents.

mod discriminator;
pub use discriminator::{Discriminator, Tag};

mod exists;
pub use exists::FieldExistence;

mod single;
pub use single::Single;

use docmap_core::schema::{Class, Entity};
use docmap_core::{Filter, Map};
use std::fmt;

/// Polymorphic class resolution for one collection.
///
/// Implementations must keep the two operations consistent: every raw
/// document matching `filters(class)` instantiates as `class`.
pub trait Select: Send + Sync + fmt::Debug {
    /// Constructs a default instance of the class `raw` should be loaded as.
    fn instantiate(&self, raw: &Map) -> Box<dyn Entity>;

    /// The filter selecting stored documents of `class`.
    fn filters(&self, class: &Class) -> Filter;
}
