use super::Select;
use docmap_core::schema::{Class, Entity};
use docmap_core::{Filter, Map};

/// Selects one class for every document. Used when a collection holds a
/// single concrete type.
#[derive(Debug, Clone, Copy)]
pub struct Single {
    class: &'static Class,
}

impl Single {
    pub fn new(class: &'static Class) -> Single {
        Single { class }
    }

    pub fn class(&self) -> &'static Class {
        self.class
    }
}

impl Select for Single {
    fn instantiate(&self, _raw: &Map) -> Box<dyn Entity> {
        self.class.instantiate()
    }

    fn filters(&self, _class: &Class) -> Filter {
        Filter::all()
    }
}
