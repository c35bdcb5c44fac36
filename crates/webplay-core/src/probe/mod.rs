//! HTTP HEAD probing: is a URL playable media?
//!
//! Uses the curl crate (libcurl) to fetch response headers and inspect the
//! final `Content-Type`. HTTP status is irrelevant here; whatever response
//! comes back decides playability. Only transport failures count as errors,
//! and those are retried then swallowed into a `false` classification.

mod parse;

use crate::http::HttpTimeouts;
use crate::retry::{run_with_retry, FetchError, RetryPolicy};

/// Content-type tokens accepted as playable media (substring match).
pub const MEDIA_CONTENT_TYPES: [&str; 4] = ["video", "audio", "ogg", "octet-stream"];

/// True if `content_type` contains one of the media tokens, or one of the
/// caller-supplied extras (e.g. `mpegurl` for HLS playlists).
pub fn is_media_content_type(content_type: &str, extra: &[String]) -> bool {
    let ct = content_type.to_ascii_lowercase();
    MEDIA_CONTENT_TYPES.iter().any(|t| ct.contains(t))
        || extra
            .iter()
            .filter(|t| !t.is_empty())
            .any(|t| ct.contains(&t.to_ascii_lowercase()))
}

/// Performs one HEAD request and returns the final response's content-type.
///
/// Follows redirects. Runs in the current thread; call from `spawn_blocking`
/// if used from async code.
pub fn head_content_type(url: &str, timeouts: &HttpTimeouts) -> Result<Option<String>, FetchError> {
    let mut header_lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    timeouts.apply(&mut easy)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = std::str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform()?;
    }

    Ok(parse::content_type(&header_lines))
}

/// Probes one URL with bounded retries; `true` means playable media.
///
/// Transport exhaustion and a missing or non-matching content-type all
/// collapse to `false`; a persistently erroring server is treated the same
/// as "not media".
pub fn is_media_url(
    url: &str,
    timeouts: &HttpTimeouts,
    policy: &RetryPolicy,
    extra: &[String],
) -> bool {
    let playable = probe_outcome(policy, extra, || head_content_type(url, timeouts));
    tracing::debug!("probe {} -> {}", url, playable);
    playable
}

/// Retry wrapper behind [`is_media_url`], generic over the attempt so the
/// retry behaviour is testable without a network.
fn probe_outcome<F>(policy: &RetryPolicy, extra: &[String], attempt: F) -> bool
where
    F: FnMut() -> Result<Option<String>, FetchError>,
{
    match run_with_retry(policy, attempt) {
        Ok(Some(content_type)) => is_media_content_type(&content_type, extra),
        Ok(None) => false,
        Err(e) => {
            tracing::warn!("probe failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
        }
    }

    // 7 = couldn't connect
    fn transport_error() -> FetchError {
        FetchError(curl::Error::new(7))
    }

    #[test]
    fn media_content_types_match() {
        assert!(is_media_content_type("video/mp4", &[]));
        assert!(is_media_content_type("audio/mpeg", &[]));
        assert!(is_media_content_type("application/ogg", &[]));
        assert!(is_media_content_type("application/octet-stream", &[]));
        assert!(!is_media_content_type("text/html; charset=utf-8", &[]));
        assert!(!is_media_content_type("image/png", &[]));
    }

    #[test]
    fn media_content_type_case_insensitive() {
        assert!(is_media_content_type("Video/MP4", &[]));
    }

    #[test]
    fn extra_tokens_extend_the_allow_list() {
        let extra = vec!["mpegurl".to_string()];
        assert!(is_media_content_type("application/vnd.apple.mpegurl", &extra));
        assert!(!is_media_content_type("application/vnd.apple.mpegurl", &[]));
    }

    #[test]
    fn matching_type_on_first_attempt_needs_no_retry() {
        let mut calls = 0u32;
        let playable = probe_outcome(&fast_policy(), &[], || {
            calls += 1;
            Ok(Some("video/mp4".to_string()))
        });
        assert!(playable);
        assert_eq!(calls, 1);
    }

    #[test]
    fn non_media_type_is_false_without_retry() {
        let mut calls = 0u32;
        let playable = probe_outcome(&fast_policy(), &[], || {
            calls += 1;
            Ok(Some("text/html".to_string()))
        });
        assert!(!playable);
        assert_eq!(calls, 1);
    }

    #[test]
    fn transport_failures_then_match_within_budget() {
        let mut calls = 0u32;
        let playable = probe_outcome(&fast_policy(), &[], || {
            calls += 1;
            if calls < 3 {
                Err(transport_error())
            } else {
                Ok(Some("video/mp4".to_string()))
            }
        });
        assert!(playable);
        assert_eq!(calls, 3);
    }

    #[test]
    fn exhausted_budget_is_not_media() {
        let mut calls = 0u32;
        let playable = probe_outcome(&fast_policy(), &[], || {
            calls += 1;
            Err(transport_error())
        });
        assert!(!playable);
        assert_eq!(calls, 3);
    }

    #[test]
    fn missing_content_type_is_not_media() {
        let playable = probe_outcome(&fast_policy(), &[], || Ok(None));
        assert!(!playable);
    }
}
