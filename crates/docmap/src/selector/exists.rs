use super::Select;
use docmap_core::schema::{Catalog, Class, Entity};
use docmap_core::{Filter, Map, Result};

/// Selects the class from the fields present in the stored document.
///
/// Entries are evaluated in declaration order and the first class whose
/// fields are all present wins. A field holding null is present. When field
/// sets overlap, declare the more specific class first.
#[derive(Debug, Clone)]
pub struct FieldExistence {
    base: &'static Class,
    entries: Vec<(&'static Class, Vec<String>)>,
}

impl FieldExistence {
    pub fn new(base: &'static Class) -> FieldExistence {
        FieldExistence {
            base,
            entries: vec![],
        }
    }

    /// Appends an entry selecting `class` when every one of `fields` is
    /// present.
    pub fn with<S: Into<String>>(
        mut self,
        class: &'static Class,
        fields: impl IntoIterator<Item = S>,
    ) -> FieldExistence {
        self.entries
            .push((class, fields.into_iter().map(Into::into).collect()));
        self
    }

    /// Builds a field-existence selector from class names, resolved through
    /// `catalog`.
    pub fn from_catalog<'a>(
        catalog: &Catalog,
        base: &str,
        entries: impl IntoIterator<Item = (&'a str, &'a [&'a str])>,
    ) -> Result<FieldExistence> {
        let mut selector = FieldExistence::new(catalog.resolve(base)?);

        for (name, fields) in entries {
            selector = selector.with(catalog.resolve(name)?, fields.iter().copied());
        }

        Ok(selector)
    }

    pub fn base(&self) -> &'static Class {
        self.base
    }

    /// The fields selecting `class`, if it has an entry.
    pub fn fields(&self, class: &Class) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == class)
            .map(|(_, fields)| fields.as_slice())
    }
}

impl Select for FieldExistence {
    fn instantiate(&self, raw: &Map) -> Box<dyn Entity> {
        let selected = self
            .entries
            .iter()
            .find(|(_, fields)| fields.iter().all(|field| raw.contains_key(field)));

        match selected {
            Some((class, _)) => class.instantiate(),
            None => {
                tracing::debug!(base = self.base.name, "no field set matched; using base class");
                self.base.instantiate()
            }
        }
    }

    fn filters(&self, class: &Class) -> Filter {
        self.fields(class)
            .unwrap_or_default()
            .iter()
            .fold(Filter::all(), |filter, field| filter.and(Filter::exists(field)))
    }
}
