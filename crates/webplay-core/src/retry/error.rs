//! Transport error wrapper for retry classification.

use std::fmt;

/// Error from a single HEAD probe or page GET attempt.
/// Wrapped so we can classify and decide retries before logging.
#[derive(Debug)]
pub struct FetchError(pub curl::Error);

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        Self(e)
    }
}
