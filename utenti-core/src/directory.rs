//! The user directory state machine: one-shot load, live filter, single
//! selection.

use tracing::{debug, warn};

use crate::error::UtentiError;
use crate::user::{User, UserId};

/// Load lifecycle of the directory.
///
/// `Loading` is the initial state; the fetch resolves it exactly once to
/// either `Loaded` or `Failed`. The original UI left failures invisible
/// (an empty list forever); here the failure message is recorded so the
/// front end can render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetch in flight, no records yet
    Loading,
    /// Fetch resolved; records are read-only for the rest of the
    /// instance's lifetime
    Loaded(Vec<User>),
    /// Fetch failed; carries the error message to display
    Failed(String),
}

/// Directory state: load phase, filter term, selection.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    phase: LoadPhase,
    search_term: String,
    selected: Option<UserId>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory {
    /// Create an empty directory in the `Loading` phase
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            search_term: String::new(),
            selected: None,
        }
    }

    /// Current load phase
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Commit the fetch result. Only the first result counts: the
    /// Loading → Loaded/Failed transition happens once per instance, so
    /// a late or duplicate delivery is dropped.
    pub fn finish_load(&mut self, result: Result<Vec<User>, UtentiError>) {
        if self.phase != LoadPhase::Loading {
            warn!("ignoring fetch result delivered after load already resolved");
            return;
        }

        match result {
            Ok(users) => {
                debug!(count = users.len(), "user directory loaded");
                self.phase = LoadPhase::Loaded(users);
            }
            Err(err) => {
                warn!(error = %err, "user directory load failed");
                self.phase = LoadPhase::Failed(err.to_string());
            }
        }
    }

    /// All loaded users in fetch order; empty unless `Loaded`
    pub fn users(&self) -> &[User] {
        match &self.phase {
            LoadPhase::Loaded(users) => users,
            LoadPhase::Loading | LoadPhase::Failed(_) => &[],
        }
    }

    /// Current filter term
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replace the filter term unconditionally. No validation, no
    /// debouncing; `filtered()` picks it up on the next call.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Append one character to the filter term (TUI keystroke path)
    pub fn search_push(&mut self, c: char) {
        self.search_term.push(c);
    }

    /// Remove the last character of the filter term
    pub fn search_pop(&mut self) {
        self.search_term.pop();
    }

    /// Currently selected user id, if any
    pub fn selected(&self) -> Option<UserId> {
        self.selected
    }

    /// Mark a user as selected, replacing any previous selection.
    /// Re-selecting the same id is a no-op in effect (no toggle-off).
    pub fn select(&mut self, id: UserId) {
        self.selected = Some(id);
    }

    /// Whether the given id is the selected one
    pub fn is_selected(&self, id: UserId) -> bool {
        self.selected == Some(id)
    }

    /// Derive the filtered view: users whose name contains the term
    /// case-insensitively, in fetch order. Recomputed on every call;
    /// cheap and pure for collections this size.
    pub fn filtered(&self) -> Vec<&User> {
        let needle = self.search_term.to_lowercase();
        self.users()
            .iter()
            .filter(|u| u.name_matches(&needle))
            .collect()
    }
}
