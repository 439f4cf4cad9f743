use super::Error;

/// Error when a mapper or one of its collaborators is misconfigured.
///
/// This occurs when:
/// - The identifier field is not declared by the class or any ancestor
/// - Identifier methods or a dynamic document are required but missing
/// - A selector references a class name that cannot be resolved
///
/// These errors are fatal and are never retried.
#[derive(Debug, Clone)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "configuration error: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a configuration
    /// error.
    pub fn is_configuration(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Configuration(_)))
    }
}
