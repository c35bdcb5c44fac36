//! End-to-end scan: probe the URL itself, else fetch, extract, classify.

use anyhow::{Context, Result};

use crate::classifier::classify_urls;
use crate::extract;
use crate::fetch::fetch_page_with_retry;
use crate::http::HttpTimeouts;
use crate::probe::is_media_url;
use crate::retry::RetryPolicy;

/// Everything the scan pipeline needs besides the URL.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub timeouts: HttpTimeouts,
    pub retry: RetryPolicy,
    pub extra_content_types: Vec<String>,
}

/// Returns the playable media URLs found at `page_url`, in page order.
///
/// A URL that itself probes as media short-circuits the page fetch and
/// comes back as a singleton. An unreachable page yields an empty list,
/// not an error.
pub async fn scan_media_urls(page_url: &str, opts: &ScanOptions) -> Result<Vec<String>> {
    let probe_opts = opts.clone();
    let fetch_opts = opts.clone();
    scan_with(
        page_url,
        move |url: &str| {
            is_media_url(
                url,
                &probe_opts.timeouts,
                &probe_opts.retry,
                &probe_opts.extra_content_types,
            )
        },
        move |url: &str| fetch_page_with_retry(url, &fetch_opts.timeouts, &fetch_opts.retry),
    )
    .await
}

/// Pipeline generic over its probe and fetch steps, so the short-circuit,
/// no-content sentinel, and ordering behaviour are testable without a
/// network.
async fn scan_with<P, G>(page_url: &str, probe: P, fetch: G) -> Result<Vec<String>>
where
    P: Fn(&str) -> bool + Clone + Send + Sync + 'static,
    G: FnOnce(&str) -> Option<String> + Send + 'static,
{
    let page_url = page_url.strip_suffix('/').unwrap_or(page_url).to_string();

    let direct = tokio::task::spawn_blocking({
        let url = page_url.clone();
        let probe = probe.clone();
        move || probe(&url)
    })
    .await
    .context("probe task join")?;
    if direct {
        return Ok(vec![page_url]);
    }

    let body = tokio::task::spawn_blocking({
        let url = page_url.clone();
        move || fetch(&url)
    })
    .await
    .context("fetch task join")?;
    let Some(body) = body else {
        return Ok(Vec::new());
    };

    let candidates = extract::extract_and_resolve(&page_url, &body);
    tracing::debug!("extracted {} candidate links from {}", candidates.len(), page_url);

    let flags = classify_urls(&candidates, probe).await?;

    Ok(candidates
        .into_iter()
        .zip(flags)
        .filter_map(|(url, is_media)| is_media.then_some(url))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn direct_media_url_short_circuits_the_page_fetch() {
        // The trailing slash is stripped before probing, as typed URLs often
        // carry one; the fetch step must never run for a direct media URL.
        let result = scan_with(
            "https://x.com/v.mp4/",
            |url: &str| url.ends_with(".mp4"),
            |_: &str| panic!("page fetch should not run for a direct media URL"),
        )
        .await
        .unwrap();
        assert_eq!(result, vec!["https://x.com/v.mp4"]);
    }

    #[tokio::test]
    async fn unreachable_page_yields_an_empty_list_not_an_error() {
        let result = scan_with("https://x.com/page", |_: &str| false, |_: &str| None)
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn matched_urls_keep_page_order() {
        let body = "a.mp4 notes.txt b.mp4".to_string();
        let result = scan_with(
            "https://x.com/dir",
            |url: &str| url.ends_with(".mp4"),
            move |_: &str| Some(body),
        )
        .await
        .unwrap();
        assert_eq!(
            result,
            vec!["https://x.com/dir/a.mp4", "https://x.com/dir/b.mp4"]
        );
    }

    #[tokio::test]
    async fn page_with_no_matches_yields_an_empty_list() {
        let body = "readme.txt style.css".to_string();
        let result = scan_with(
            "https://x.com/dir",
            |url: &str| url.ends_with(".mp4"),
            move |_: &str| Some(body),
        )
        .await
        .unwrap();
        assert!(result.is_empty());
    }
}
