use super::AccessId;
use docmap_core::schema::{Class, Entity};
use docmap_core::{Error, Result, Value};

/// Accesses the identifier through the [`Identifiable`] methods the document
/// type exposes.
///
/// [`Identifiable`]: docmap_core::schema::Identifiable
#[derive(Debug, Default, Clone, Copy)]
pub struct MethodsAccessor;

impl AccessId for MethodsAccessor {
    fn read_id(&self, entity: &dyn Entity) -> Result<Option<Value>> {
        match entity.as_identifiable() {
            Some(identifiable) => Ok(identifiable.id()),
            None => Err(not_identifiable(entity.class())),
        }
    }

    fn write_id(&self, entity: &mut dyn Entity, id: Option<Value>) -> Result<()> {
        let class = entity.class();

        match entity.as_identifiable_mut() {
            Some(identifiable) => {
                identifiable.set_id(id);
                Ok(())
            }
            None => Err(not_identifiable(class)),
        }
    }
}

fn not_identifiable(class: &Class) -> Error {
    Error::configuration(format!(
        "`{}` does not expose identifier methods",
        class.name
    ))
}
