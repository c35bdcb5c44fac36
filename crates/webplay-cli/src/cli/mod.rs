//! CLI for webplay: scan a page for playable media and queue it in the player.

use anyhow::{Context, Result};
use clap::Parser;
use webplay_core::config;
use webplay_core::player::{launch_configured, launch_playlist, locate_player, PlayerPathStore};
use webplay_core::range::{select, RangeSelection};
use webplay_core::scan::scan_media_urls;

/// Scan a web page for playable media links and queue them in a local player.
#[derive(Debug, Parser)]
#[command(name = "webplay")]
#[command(about = "Scan a page for playable media and queue it in VLC", long_about = None)]
pub struct Cli {
    /// Page URL to scan, or a direct media URL.
    pub url: String,

    /// 1-based inclusive selection of matched URLs: `N` or `N-M`.
    pub range: Option<String>,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        Cli::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        // Validate the range before any network work.
        let selection = self
            .range
            .as_deref()
            .map(RangeSelection::parse)
            .transpose()?;

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let urls = scan_media_urls(&self.url, &cfg.scan_options()).await?;
        if urls.is_empty() {
            println!("No playable media found at {}", self.url);
            return Ok(());
        }

        let selected = select(&urls, selection.as_ref());
        if selected.is_empty() {
            println!("Range selects none of the {} matched URLs", urls.len());
            return Ok(());
        }

        // A configured player is used as-is: no discovery fallback, and a
        // launch failure surfaces instead of being discovered around.
        match cfg.player_path.as_deref() {
            Some(path) => {
                println!("Playing {} of {} matched URLs", selected.len(), urls.len());
                launch_configured(path, selected).await?;
            }
            None => {
                let store = PlayerPathStore::open_default()?;
                let player = locate_player(&store).context(
                    "no media player found; install VLC or set player_path in the config",
                )?;
                println!("Playing {} of {} matched URLs", selected.len(), urls.len());
                launch_playlist(&store, &player, selected).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
