//! Per-recipient outcomes of a share request.
//!
//! A share request never fails because one recipient cannot be resolved;
//! each requested username gets its own [`RecipientOutcome`] instead.

use serde::Serialize;

use crate::types::DbId;

/// Why a recipient was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No user with that username exists.
    UnknownUser,
    /// The recipient is the note owner.
    SelfShare,
}

/// Result of sharing with a single recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShareStatus {
    /// A new share relation was recorded.
    Shared { recipient_id: DbId },
    /// The recipient already had this note; nothing was stored.
    AlreadyShared { recipient_id: DbId },
    /// No relation was recorded.
    Skipped { reason: SkipReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipientOutcome {
    pub username: String,
    #[serde(flatten)]
    pub status: ShareStatus,
}

impl RecipientOutcome {
    pub fn shared(username: &str, recipient_id: DbId) -> Self {
        Self {
            username: username.to_string(),
            status: ShareStatus::Shared { recipient_id },
        }
    }

    pub fn already_shared(username: &str, recipient_id: DbId) -> Self {
        Self {
            username: username.to_string(),
            status: ShareStatus::AlreadyShared { recipient_id },
        }
    }

    pub fn skipped(username: &str, reason: SkipReason) -> Self {
        Self {
            username: username.to_string(),
            status: ShareStatus::Skipped { reason },
        }
    }

    /// True when the recipient can see the note after this request.
    pub fn is_visible_to_recipient(&self) -> bool {
        !matches!(self.status, ShareStatus::Skipped { .. })
    }
}

/// Drop repeated usernames, keeping the first occurrence and request order.
pub fn distinct_recipients(recipients: &[String]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    recipients
        .iter()
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .collect()
}
