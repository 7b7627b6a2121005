use thiserror::Error;

/// A convenient type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while resolving options or rendering a value.
///
/// Rendering never produces partial output, any error aborts the whole call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value has a shape that cannot be rendered in this position.
    #[error("{context}: expected {expected}, found {found}")]
    ValueKind {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// An option was given an invalid value.
    #[error("invalid option `{option}`: {reason}")]
    Config { option: String, reason: String },

    /// The value is nested deeper than the configured maximum.
    #[error("reached maximum nesting depth ({max})")]
    DepthExceeded { max: usize },

    /// A value could not be converted to or from serde.
    #[error("{0}")]
    Serialize(String),
}

impl Error {
    pub(crate) fn value_kind(
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::ValueKind {
            context,
            expected,
            found,
        }
    }

    pub(crate) fn config(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: std::fmt::Display,
    {
        Self::Serialize(msg.to_string())
    }
}
