//! Page fetch: GET with bounded retry, body collected as text.

use crate::http::HttpTimeouts;
use crate::retry::{run_with_retry, FetchError, RetryPolicy};

/// Performs one GET and returns the body as (lossily decoded) text.
///
/// Follows redirects. HTTP status is not checked; an error page still gets
/// scanned for links, matching what a browser-visible fetch would show.
/// Runs in the current thread; call from `spawn_blocking` if used from
/// async code.
pub fn fetch_page(url: &str, timeouts: &HttpTimeouts) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    timeouts.apply(&mut easy)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// GET with the probe retry budget; `None` is the "no content" sentinel
/// returned once transport attempts are exhausted.
pub fn fetch_page_with_retry(
    url: &str,
    timeouts: &HttpTimeouts,
    policy: &RetryPolicy,
) -> Option<String> {
    match run_with_retry(policy, || fetch_page(url, timeouts)) {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!("could not fetch {}: {}", url, e);
            None
        }
    }
}
