use super::AccessId;
use docmap_core::schema::{Class, Entity};
use docmap_core::{Error, Result, Value};
use std::sync::OnceLock;

/// Accesses the identifier through a declared field, `_id` by default.
///
/// The declaring class is located on first use by walking the ancestors of
/// the configured class, then cached. Using the accessor on a class family
/// where no ancestor declares the field is a configuration error.
#[derive(Debug)]
pub struct FieldAccessor {
    class: &'static Class,
    field: String,

    /// Class declaring `field`, once located
    declaring: OnceLock<Option<&'static Class>>,
}

impl FieldAccessor {
    /// Field holding the identifier unless configured otherwise.
    pub const DEFAULT_FIELD: &'static str = "_id";

    pub fn new(class: &'static Class) -> FieldAccessor {
        FieldAccessor::with_field(class, Self::DEFAULT_FIELD)
    }

    pub fn with_field(class: &'static Class, field: impl Into<String>) -> FieldAccessor {
        FieldAccessor {
            class,
            field: field.into(),
            declaring: OnceLock::new(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    fn locate(&self) -> Result<&'static Class> {
        let declaring = self.declaring.get_or_init(|| {
            let declaring = self
                .class
                .ancestors()
                .find(|class| class.fields.iter().any(|field| field.name == self.field));

            tracing::debug!(
                class = self.class.name,
                field = %self.field,
                found = declaring.is_some(),
                "located identifier field"
            );

            declaring
        });

        declaring.ok_or_else(|| {
            Error::configuration(format!(
                "identifier field `{}` not declared on `{}` or its ancestors",
                self.field, self.class.name
            ))
        })
    }
}

impl AccessId for FieldAccessor {
    fn read_id(&self, entity: &dyn Entity) -> Result<Option<Value>> {
        self.locate()?;

        Ok(entity.read(&self.field).filter(|id| !id.is_null()))
    }

    fn write_id(&self, entity: &mut dyn Entity, id: Option<Value>) -> Result<()> {
        self.locate()?;

        entity.write(&self.field, id.unwrap_or_default())
    }
}
