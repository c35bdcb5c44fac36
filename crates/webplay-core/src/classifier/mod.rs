//! Concurrent media classification: one probe task per URL.
//!
//! Flat fan-out with no worker pool; each probe owns its own retry loop and
//! connection, so there is no shared mutable state between tasks. Results
//! are joined by input index, never by completion order.

use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Runs `probe` for every URL concurrently and returns one flag per URL,
/// same length and same order as the input. Blocks until every probe has
/// finished; a slow probe delays the batch, bounded only by the per-probe
/// timeouts and retry budget.
pub async fn classify_urls<F>(urls: &[String], probe: F) -> Result<Vec<bool>>
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let probe = Arc::new(probe);
    let mut join_set = JoinSet::new();
    for (index, url) in urls.iter().enumerate() {
        let url = url.clone();
        let probe = Arc::clone(&probe);
        // curl probes are blocking; run each on the blocking pool.
        join_set.spawn_blocking(move || (index, (*probe)(&url)));
    }

    let mut flags = vec![false; urls.len()];
    while let Some(res) = join_set.join_next().await {
        let (index, is_media) = res.map_err(|e| anyhow::anyhow!("probe task join: {}", e))?;
        flags[index] = is_media;
    }
    Ok(flags)
}
