//! Identifiers used throughout Tradegate.
//!
//! Client identities are small integers handed out by the server's
//! registry, starting at [`constants::FIRST_CLIENT_ID`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, constants};

// ---------------------------------------------------------------------------
// ClientId
// ---------------------------------------------------------------------------

/// Server-assigned handle identifying a registered client.
///
/// Assigned monotonically and never reused for the lifetime of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub u64);

impl ClientId {
    /// The first ID a fresh registry assigns.
    pub const FIRST: Self = Self(constants::FIRST_CLIENT_ID);

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Numeric wire form of a registration outcome: the ID itself on
    /// success, [`constants::REGISTRATION_REJECTED_CODE`] on failure.
    #[must_use]
    pub fn wire_code(outcome: &Result<Self>) -> i64 {
        match outcome {
            Ok(id) => i64::try_from(id.0).unwrap_or(constants::REGISTRATION_REJECTED_CODE),
            Err(_) => constants::REGISTRATION_REJECTED_CODE,
        }
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
