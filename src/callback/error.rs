//! Errors raised while resolving or running callbacks.

use serde_json::Value;
use thiserror::Error;

/// Boxed error produced by host code inside a callback.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when invoking hooks, actions and guards.
#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("No method named '{name}' is exposed by the machine")]
    MethodNotFound { name: String },

    #[error("Guard '{name}' returned {value}, expected a boolean")]
    NotBoolean { name: String, value: Value },

    #[error("Event argument {index} is missing")]
    MissingArgument { index: usize },

    #[error("Event argument {index} could not be decoded: {source}")]
    InvalidArgument {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Error raised by the callback itself, passed through untouched.
    #[error(transparent)]
    Failed(BoxError),
}

impl CallbackError {
    /// Wrap an error raised by host code.
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Failed(error.into())
    }

    /// Borrow the host error, if this is one.
    pub fn host_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Failed(source) => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("door is jammed")]
    struct Jammed;

    #[test]
    fn failed_preserves_host_error() {
        let error = CallbackError::failed(Jammed);

        assert_eq!(error.to_string(), "door is jammed");
        assert!(error
            .host_error()
            .is_some_and(|source| source.downcast_ref::<Jammed>().is_some()));
    }

    #[test]
    fn engine_errors_have_no_host_error() {
        let error = CallbackError::MethodNotFound {
            name: "inc_on".to_string(),
        };

        assert!(error.host_error().is_none());
        assert_eq!(
            error.to_string(),
            "No method named 'inc_on' is exposed by the machine"
        );
    }
}
