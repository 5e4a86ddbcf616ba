//! Reaction records attached to a message.

use super::UserId;
use serde::{Deserialize, Serialize};

/// A reaction left on a message by one or more users.
///
/// Reactions are carried and persisted but never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    /// Reaction name, e.g. `thumbs_up`.
    pub reaction: String,
    /// Unicode rendering of the reaction.
    pub reaction_unicode: String,
    /// Users who left this reaction.
    #[serde(default)]
    pub user_ids: Vec<UserId>,
}

impl Reaction {
    /// Creates a reaction with no users attached.
    #[must_use]
    pub fn new(reaction: impl Into<String>, reaction_unicode: impl Into<String>) -> Self {
        Self {
            reaction: reaction.into(),
            reaction_unicode: reaction_unicode.into(),
            user_ids: Vec::new(),
        }
    }

    /// Sets the users who left the reaction.
    #[must_use]
    pub fn with_user_ids(mut self, user_ids: impl IntoIterator<Item = UserId>) -> Self {
        self.user_ids = user_ids.into_iter().collect();
        self
    }
}
