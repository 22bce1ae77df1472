use thiserror::Error;

/// Errors that can occur while loading the menu configuration.
///
/// None of these ever reach the page: [`MenuRenderer::initialize`] downgrades
/// every variant to the fallback menu and only the log line keeps the
/// distinction.
///
/// [`MenuRenderer::initialize`]: crate::MenuRenderer::initialize
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The request never produced a response (network unreachable, CORS, ...).
    #[error("failed to fetch '{url}': {message}")]
    Transport {
        /// URL that was requested
        url: String,
        /// Error message from the transport layer
        message: String,
    },

    /// A response arrived but its status is outside 200..=299.
    #[error("HTTP {status}: {status_text}")]
    HttpStatus {
        /// Numeric status code
        status: u16,
        /// Reason phrase sent with the status
        status_text: String,
    },

    /// The body is not JSON or has no `menuItems` collection.
    #[error("malformed menu configuration: {message}")]
    Parse {
        /// Error message from the deserializer
        message: String,
    },
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        NavError::Parse {
            message: err.to_string(),
        }
    }
}
