use docmap_core::Filter;
use indexmap::IndexMap;

/// Named, reusable filters of a document class.
#[derive(Debug, Default, Clone)]
pub struct Scopes {
    filters: IndexMap<String, Filter>,
}

impl Scopes {
    pub fn new() -> Scopes {
        Scopes::default()
    }

    pub fn with(mut self, name: impl Into<String>, filter: Filter) -> Scopes {
        self.filters.insert(name.into(), filter);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Filter> {
        self.filters.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.filters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
