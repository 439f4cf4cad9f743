//! Ahead-of-time descriptions of document classes.
//!
//! A [`Class`] records what a type declares: its fields and their declared
//! types, its parent class, and how to construct a fresh instance. Classes are
//! built once, usually by `#[derive(Document)]`, and are read-only afterwards.

mod catalog;
pub use catalog::Catalog;

mod class;
pub use class::{Class, DeclaredField, DeclaredType};

mod entity;
pub use entity::{extract, fill, Document, Entity, Identifiable};

mod property;
pub use property::{load_embedded, Bytes, Property};
