//! Reading and writing the store-generated identifier of an instance.

mod field;
pub use field::FieldAccessor;

mod methods;
pub use methods::MethodsAccessor;

use docmap_core::schema::Entity;
use docmap_core::{Result, Value};
use std::fmt;

/// Accesses the identifier of an instance, whatever its shape.
pub trait AccessId: Send + Sync + fmt::Debug {
    fn read_id(&self, entity: &dyn Entity) -> Result<Option<Value>>;

    /// Writes the identifier. `None` clears it.
    fn write_id(&self, entity: &mut dyn Entity, id: Option<Value>) -> Result<()>;
}
