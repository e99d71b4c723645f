use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Raised when text cannot be turned into a key/value mapping.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The text is not well-formed JSON (truncated, bad tokens, trailing garbage).
    #[error("Malformed config text: {source} {location}")]
    InvalidSyntax {
        /// The underlying JSON parse error.
        #[source]
        source: serde_json::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// The text is valid JSON but its top level is not an object.
    #[error("Config text is not a key/value mapping (found {found}) {location}")]
    NotAMapping {
        /// JSON kind found at the top level.
        found: &'static str,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Cannot use #[from] because it does not support extra fields.
impl From<serde_json::Error> for FormatError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        FormatError::InvalidSyntax {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `FormatError`.
pub type Result<T> = StdResult<T, FormatError>;
