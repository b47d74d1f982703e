//! User records as served by the remote directory endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a user record. Assigned upstream; uniqueness is
/// the source's responsibility, not enforced locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user record. The upstream payload carries many more fields
/// (address, company, geo coordinates); serde skips whatever we don't name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Case-insensitive substring match of `needle` against the display name.
    ///
    /// `needle` must already be lowercased; the caller lowers it once per
    /// filter pass instead of once per record.
    pub fn name_matches(&self, lowercase_needle: &str) -> bool {
        self.name.to_lowercase().contains(lowercase_needle)
    }

    /// Secondary line for list rendering: "username · email" with either
    /// half omitted when absent.
    pub fn subtitle(&self) -> Option<String> {
        match (self.username.as_deref(), self.email.as_deref()) {
            (Some(u), Some(e)) => Some(format!("{} · {}", u, e)),
            (Some(u), None) => Some(u.to_string()),
            (None, Some(e)) => Some(e.to_string()),
            (None, None) => None,
        }
    }
}
