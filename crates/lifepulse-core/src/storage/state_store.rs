//! JSON persistence for [`CheckInState`].
//!
//! The whole state is rewritten on every save. Writes go to a sibling `.tmp`
//! file which is then renamed over the target, so an interrupted save leaves
//! the previous state in place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::streak::CheckInState;

/// File-backed store for the check-in state singleton.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state, or zero-valued defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// `StorageUnavailable` if the file exists but cannot be read,
    /// `MalformedState` if it cannot be parsed.
    pub fn load(&self) -> Result<CheckInState> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no state file yet, starting fresh");
                return Ok(CheckInState::default());
            }
            Err(e) => return Err(CoreError::storage(&self.path, e)),
        };

        let state: CheckInState =
            serde_json::from_str(&content).map_err(|source| CoreError::MalformedState {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            total_check_ins = state.total_check_ins,
            "loaded check-in state"
        );
        Ok(state)
    }

    /// Persist the full state.
    ///
    /// # Errors
    ///
    /// `StorageUnavailable` if the temp file cannot be written or renamed.
    pub fn save(&self, state: &CheckInState) -> Result<()> {
        let data = serde_json::to_string_pretty(state)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CoreError::storage(parent, e))?;
        }

        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, data).map_err(|e| CoreError::storage(&tmp_path, e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp_path);
            CoreError::storage(&self.path, e)
        })?;

        debug!(path = %self.path.display(), "saved check-in state");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "state.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::{EnergyPhase, Feeling};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_file_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("state.json"));

        let state = store.load().unwrap();
        assert_eq!(state, CheckInState::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_load_preserves_state() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("state.json"));

        let mut state = CheckInState::default();
        state.record_check_in(Feeling::Calm, EnergyPhase::Deepen, date(2024, 3, 1));
        state.record_check_in(Feeling::Tired, EnergyPhase::Rest, date(2024, 3, 2));
        store.save(&state).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
        assert!(!temp_dir.path().join("state.json.tmp").exists());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("nested").join("state.json"));

        store.save(&CheckInState::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_is_reported_not_reset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = StateStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CoreError::MalformedState { .. }));
        // The corrupt file is left untouched for inspection
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn unknown_feeling_in_file_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(
            &path,
            r#"{"current_streak":1,"last_check_in":"2024-01-01","highest_streak":1,
               "total_check_ins":1,"feelings_log":[{"date":"2024-01-01","feeling":"Grumpy"}],
               "phases_log":[{"date":"2024-01-01","phase":"Build"}]}"#,
        )
        .unwrap();

        let err = StateStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CoreError::MalformedState { .. }));
    }

    #[test]
    fn unreadable_path_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the state file should be
        let path = temp_dir.path().join("state.json");
        std::fs::create_dir(&path).unwrap();

        let err = StateStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CoreError::StorageUnavailable { .. }));
    }
}
