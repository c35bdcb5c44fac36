//! Retry and backoff policy for HTTP probes and page fetches.
//!
//! Transport failures (timeouts, connection errors) are classified and
//! retried with exponential backoff; anything else fails fast. Callers
//! convert exhaustion into the boolean/empty sentinels the scan pipeline
//! works with, so no transport error escapes past the probe layer.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
