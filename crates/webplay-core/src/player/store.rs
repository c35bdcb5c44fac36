//! Persisted player path: a single-line plain-text file.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Load/save/invalidate wrapper around the persisted player path file.
/// The location is injected so callers (and tests) decide where state lives;
/// [`PlayerPathStore::open_default`] puts it under the XDG state dir.
#[derive(Debug, Clone)]
pub struct PlayerPathStore {
    path: PathBuf,
}

impl PlayerPathStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store at `~/.local/state/webplay/player_path`.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("webplay")?;
        Ok(Self::new(xdg_dirs.place_state_file("player_path")?))
    }

    /// Returns the persisted path, if the file exists and is non-empty.
    pub fn load(&self) -> Option<String> {
        let data = fs::read_to_string(&self.path).ok()?;
        let line = data.lines().next()?.trim();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    }

    pub fn save(&self, player_path: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, player_path)?;
        tracing::debug!("persisted player path {} at {}", player_path, self.path.display());
        Ok(())
    }

    /// Deletes the persisted path. Called when a cached executable has gone
    /// missing so the next run re-discovers.
    pub fn invalidate(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("could not remove {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PlayerPathStore {
        PlayerPathStore::new(dir.path().join("player_path"))
    }

    #[test]
    fn load_returns_none_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("/usr/bin/vlc").unwrap();
        assert_eq!(store.load().as_deref(), Some("/usr/bin/vlc"));
    }

    #[test]
    fn load_takes_the_first_line_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("player_path"), " /usr/bin/vlc \nstale\n").unwrap();
        assert_eq!(store.load().as_deref(), Some("/usr/bin/vlc"));
    }

    #[test]
    fn empty_file_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("player_path"), "").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn invalidate_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("/usr/bin/vlc").unwrap();
        store.invalidate();
        assert!(store.load().is_none());
        // Idempotent on a missing file.
        store.invalidate();
    }
}
