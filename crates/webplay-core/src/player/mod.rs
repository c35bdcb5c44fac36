//! Media player discovery, persisted path, and playlist launch.
//!
//! The only state this tool keeps between runs is the resolved player
//! executable path, a single-line file the [`PlayerPathStore`] owns. Core
//! logic never touches the file system implicitly; the store is passed in.

mod launch;
mod locate;
mod store;

pub use launch::{launch_configured, launch_playlist};
pub use locate::locate_player;
pub use store::PlayerPathStore;

use thiserror::Error;

/// Flags passed ahead of the URL list so the player enqueues instead of
/// replacing, and exits when the playlist ends.
pub(crate) const PLAYLIST_ARGS: [&str; 2] = ["--playlist-enqueue", "--play-and-exit"];

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no media player found; install VLC or set player_path in the config")]
    NotFound,
    #[error("failed to launch player at {path}: {source}")]
    Launch {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
