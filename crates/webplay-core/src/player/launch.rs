//! Launch the player with the matched URLs as an enqueued playlist.

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use super::locate::locate_player;
use super::store::PlayerPathStore;
use super::{PlayerError, PLAYLIST_ARGS};

/// How long to wait for the player to exit before declaring success.
/// An interactive player normally outlives this; timing out is not an error.
const LAUNCH_WAIT: Duration = Duration::from_secs(3);

/// Spawns the player with the playlist-enqueue flags and the URL list.
///
/// A `NotFound` spawn failure means the cached executable has gone missing:
/// the persisted path is invalidated, discovery runs once more, and the
/// launch is retried with the fresh path.
pub async fn launch_playlist(
    store: &PlayerPathStore,
    player: &str,
    urls: &[String],
) -> Result<(), PlayerError> {
    match try_launch(player, urls).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("player {} missing, re-running discovery", player);
            store.invalidate();
            let player = locate_player(store).ok_or(PlayerError::NotFound)?;
            try_launch(&player, urls)
                .await
                .map_err(|source| PlayerError::Launch { path: player, source })
        }
        Err(source) => Err(PlayerError::Launch {
            path: player.to_string(),
            source,
        }),
    }
}

/// Launches a player named explicitly in the config. No discovery fallback
/// and no store invalidation: a bad configured path is the user's to fix,
/// not ours to route around.
pub async fn launch_configured(player: &str, urls: &[String]) -> Result<(), PlayerError> {
    try_launch(player, urls)
        .await
        .map_err(|source| PlayerError::Launch {
            path: player.to_string(),
            source,
        })
}

async fn try_launch(player: &str, urls: &[String]) -> Result<(), std::io::Error> {
    let mut child = Command::new(player)
        .args(PLAYLIST_ARGS)
        .args(urls)
        .stderr(Stdio::null())
        .spawn()?;

    // A timeout means the player is up and showing the playlist; leave the
    // child running (no kill_on_drop).
    match tokio::time::timeout(LAUNCH_WAIT, child.wait()).await {
        Ok(status) => status.map(|_| ()),
        Err(_) => Ok(()),
    }
}
