mod adhoc;
mod configuration;
mod type_conversion;
mod undeclared_field;
mod unknown_type;

use adhoc::AdhocError;
use configuration::ConfigurationError;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use undeclared_field::UndeclaredFieldError;
use unknown_type::UnknownTypeError;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while mapping documents.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let Some(inner) = consequent.inner else {
            return Error {
                inner: Some(Arc::new(ErrorInner {
                    kind: ErrorKind::Unknown,
                    cause: Some(self),
                })),
            };
        };

        let (kind, cause) = match Arc::try_unwrap(inner) {
            Ok(inner) => (inner.kind, inner.cause),
            Err(shared) => (shared.kind.duplicate(), shared.cause.clone()),
        };

        // A consequent carrying its own cause keeps it; `self` goes to the end
        // of that chain.
        let cause = match cause {
            Some(cause) => self.context_impl(cause),
            None => self,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(cause),
            })),
        }
    }

    /// Creates an ad-hoc error from format arguments. Used by [`bail!`] and
    /// [`err!`].
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if any error in the chain matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Configuration(ConfigurationError),
    TypeConversion(TypeConversionError),
    UndeclaredField(UndeclaredFieldError),
    UnknownType(UnknownTypeError),
    Unknown,
}

impl ErrorKind {
    /// Copies the kind out of a shared error. `anyhow` errors are not
    /// clonable and are copied by message.
    fn duplicate(&self) -> ErrorKind {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => Adhoc(AdhocError::new(format!("{err:#}"))),
            Adhoc(err) => Adhoc(err.clone()),
            Configuration(err) => Configuration(err.clone()),
            TypeConversion(err) => TypeConversion(err.clone()),
            UndeclaredField(err) => UndeclaredField(err.clone()),
            UnknownType(err) => UnknownType(err.clone()),
            Unknown => Unknown,
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Configuration(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UndeclaredField(err) => core::fmt::Display::fmt(err, f),
            UnknownType(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown docmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<bson::oid::Error> for Error {
    fn from(err: bson::oid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self.to_string())))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}
