// SPDX-License-Identifier: MPL-2.0
//! Session state persisted across launches in CBOR format.
//!
//! Holds ambient UI flags that are not user preferences: the sign-in stub,
//! the safe-search toggle, and the last comparison layout. User preferences
//! live in `settings.toml` (see [`crate::config`]).
//!
//! All mutations go through [`SessionStore::update`], which writes the file
//! after every change.

use super::paths;
use crate::ui::compare::Orientation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Ambient flags remembered between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    #[serde(default)]
    pub signed_in: bool,

    #[serde(default = "default_safe_search")]
    pub safe_search: bool,

    /// Orientation of the last comparison, restored on the next mount.
    #[serde(default)]
    pub last_orientation: Option<Orientation>,

    #[serde(default)]
    pub last_swap: bool,
}

fn default_safe_search() -> bool {
    true
}

impl SessionState {
    /// State used when nothing has been saved yet.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            safe_search: default_safe_search(),
            ..Self::default()
        }
    }
}

/// Owner of the [`SessionState`] injected into the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    state: SessionState,
    base_dir: Option<PathBuf>,
}

impl SessionStore {
    /// Loads the store from the default data directory.
    ///
    /// Returns the store and an optional i18n warning key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the store from `base_dir`, or the default data directory.
    ///
    /// A missing file yields [`SessionState::initial`] without a warning; an
    /// unreadable one yields it with a warning.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (state, warning) = Self::read(base_dir.clone());
        if let Some(key) = &warning {
            log::warn!("Session state not restored ({key})");
        }
        (Self { state, base_dir }, warning)
    }

    fn read(base_dir: Option<PathBuf>) -> (SessionState, Option<String>) {
        let Some(path) = state_file_path(base_dir) else {
            return (SessionState::initial(), None);
        };

        if !path.exists() {
            return (SessionState::initial(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(_) => (
                    SessionState::initial(),
                    Some("notification-state-parse-error".to_string()),
                ),
            },
            Err(_) => (
                SessionState::initial(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Applies `change` and persists the result.
    ///
    /// The in-memory state is updated even when writing fails; the returned
    /// i18n warning key reports the failure. Unchanged state is not written.
    pub fn update(&mut self, change: impl FnOnce(&mut SessionState)) -> Option<String> {
        let before = self.state.clone();
        change(&mut self.state);
        if self.state == before {
            return None;
        }

        let warning = self.save();
        if let Some(key) = &warning {
            log::warn!("Session state not saved ({key})");
        }
        warning
    }

    fn save(&self) -> Option<String> {
        let Some(path) = state_file_path(self.base_dir.clone()) else {
            return Some("notification-state-write-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-create-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(&self.state, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-write-error".to_string()),
        }
    }
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STATE_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn initial_state_has_safe_search_on() {
        let state = SessionState::initial();
        assert!(state.safe_search);
        assert!(!state.signed_in);
        assert!(state.last_orientation.is_none());
    }

    #[test]
    fn load_from_empty_directory_returns_initial_state() {
        let temp_dir = tempdir().expect("create temp dir");
        let (store, warning) = SessionStore::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(store.state(), &SessionState::initial());
    }

    #[test]
    fn update_persists_and_reloads() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (mut store, _) = SessionStore::load_from(Some(base_dir.clone()));
        let warning = store.update(|state| {
            state.signed_in = true;
            state.safe_search = false;
            state.last_orientation = Some(Orientation::Horizontal);
            state.last_swap = true;
        });
        assert!(warning.is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (reloaded, warning) = SessionStore::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(reloaded.state(), store.state());
    }

    #[test]
    fn unchanged_update_does_not_write() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (mut store, _) = SessionStore::load_from(Some(base_dir.clone()));
        store.update(|_| {});
        assert!(!base_dir.join(STATE_FILE).exists());
    }

    #[test]
    fn corrupted_file_returns_initial_state_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (store, warning) = SessionStore::load_from(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(store.state(), &SessionState::initial());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let (mut store, _) = SessionStore::load_from(Some(nested_dir.clone()));
        let warning = store.update(|state| state.signed_in = true);
        assert!(warning.is_none());
        assert!(nested_dir.join(STATE_FILE).exists());
    }

    #[test]
    fn failed_write_keeps_state_in_memory() {
        let temp_dir = tempdir().expect("create temp dir");
        // A regular file where the data directory should be
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").expect("write file");

        let (mut store, _) = SessionStore::load_from(Some(blocker.join("data")));
        let warning = store.update(|state| state.safe_search = false);
        assert_eq!(
            warning.as_deref(),
            Some("notification-state-create-dir-error")
        );
        assert!(!store.state().safe_search);
    }
}
