//! Soft-delete lifecycle state.

use serde::{Deserialize, Serialize};

/// Soft-delete state of a message.
///
/// `Active` is the initial state and `Deleted` is terminal. Serialises as the
/// boolean `deleted` flag of the response contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum DeletionState {
    /// The message is visible to normal reads.
    #[default]
    Active,
    /// The message has been soft-deleted.
    Deleted,
}

impl DeletionState {
    /// Returns a lowercase label for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deleted => "deleted",
        }
    }

    /// Returns `true` once the message has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Applies the only permitted transition.
    ///
    /// Calling this on an already deleted state is a no-op.
    #[must_use]
    pub const fn delete(self) -> Self {
        Self::Deleted
    }
}

impl From<bool> for DeletionState {
    fn from(deleted: bool) -> Self {
        if deleted { Self::Deleted } else { Self::Active }
    }
}

impl From<DeletionState> for bool {
    fn from(state: DeletionState) -> Self {
        state.is_deleted()
    }
}
