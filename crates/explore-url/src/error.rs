//! Error types for explore URL operations.

use thiserror::Error;

use explore_model::ModelError;

/// Errors raised by the explore URL codec.
///
/// Malformed URL content never surfaces here: invalid path segments become
/// redirects and malformed query values fall back to defaults. These errors
/// signal misuse by the caller.
#[derive(Debug, Error)]
pub enum ExploreUrlError {
    /// A setter was called while the current location is not a complete
    /// explore path.
    #[error("expected {expected}, but the current location is {path}")]
    PreconditionViolated { expected: &'static str, path: String },

    /// Input could not be read as a URL or path.
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// A value could not be built.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type alias for explore URL operations.
pub type Result<T> = std::result::Result<T, ExploreUrlError>;

impl ExploreUrlError {
    pub fn precondition(expected: &'static str, path: impl Into<String>) -> Self {
        Self::PreconditionViolated {
            expected,
            path: path.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExploreUrlError::precondition("a complete explore path", "/explore/World");
        assert_eq!(
            format!("{err}"),
            "expected a complete explore path, but the current location is /explore/World"
        );

        let err: ExploreUrlError = ModelError::EmptyLocationName.into();
        assert_eq!(format!("{err}"), "location name must not be empty");
    }
}
