use super::Error;

/// Error when a document is asked to store a field its class does not
/// declare.
#[derive(Debug, Clone)]
pub(super) struct UndeclaredFieldError {
    class: Box<str>,
    field: Box<str>,
}

impl std::error::Error for UndeclaredFieldError {}

impl core::fmt::Display for UndeclaredFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` is not declared on `{}`",
            self.field, self.class
        )
    }
}

impl Error {
    /// Creates an undeclared field error.
    pub fn undeclared_field(class: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UndeclaredField(UndeclaredFieldError {
            class: class.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an undeclared
    /// field error.
    pub fn is_undeclared_field(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UndeclaredField(_)))
    }
}
