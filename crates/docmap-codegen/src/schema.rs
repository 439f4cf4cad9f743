mod document;
pub(crate) use document::Document;

mod document_attr;
pub(crate) use document_attr::DocumentAttr;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldAttr};
