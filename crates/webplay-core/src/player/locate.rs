//! Locate the player executable: persisted path, PATH lookup, then
//! well-known install locations.

use std::path::Path;
use std::process::{Command, Stdio};

use super::store::PlayerPathStore;

#[cfg(windows)]
const WELL_KNOWN_PATHS: [&str; 2] = [
    "C:\\Program Files\\VideoLAN\\VLC\\vlc.exe",
    "C:\\Program Files (x86)\\VideoLAN\\VLC\\vlc.exe",
];
#[cfg(not(windows))]
const WELL_KNOWN_PATHS: [&str; 2] = ["/usr/bin/vlc", "/usr/local/bin/vlc"];

#[cfg(windows)]
const PATH_LOOKUP: [&str; 2] = ["where", "vlc"];
#[cfg(not(windows))]
const PATH_LOOKUP: [&str; 2] = ["which", "vlc"];

/// True if `vlc` resolves on the PATH.
fn on_path() -> bool {
    Command::new(PATH_LOOKUP[0])
        .arg(PATH_LOOKUP[1])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn first_well_known() -> Option<String> {
    WELL_KNOWN_PATHS
        .iter()
        .find(|p| Path::new(p).exists())
        .map(|p| p.to_string())
}

/// Finds the player executable.
///
/// The persisted path wins; otherwise a PATH lookup, then well-known
/// install locations. A fresh discovery is persisted for later runs.
pub fn locate_player(store: &PlayerPathStore) -> Option<String> {
    if let Some(path) = store.load() {
        tracing::debug!("using persisted player path {}", path);
        return Some(path);
    }

    let found = if on_path() {
        Some("vlc".to_string())
    } else {
        first_well_known()
    };

    match found {
        Some(path) => {
            if let Err(e) = store.save(&path) {
                tracing::warn!("could not persist player path: {}", e);
            }
            Some(path)
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_path_wins_over_discovery() {
        let dir = tempfile::tempdir().unwrap();
        let store = PlayerPathStore::new(dir.path().join("player_path"));
        store.save("/opt/custom/vlc").unwrap();
        assert_eq!(locate_player(&store).as_deref(), Some("/opt/custom/vlc"));
    }

    #[test]
    fn discovery_persists_its_result() {
        let dir = tempfile::tempdir().unwrap();
        let store = PlayerPathStore::new(dir.path().join("player_path"));
        // Whatever discovery finds (if anything) must land in the store.
        if let Some(found) = locate_player(&store) {
            assert_eq!(store.load().as_deref(), Some(found.as_str()));
        } else {
            assert!(store.load().is_none());
        }
    }
}
