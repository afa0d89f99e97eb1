//! Server outcomes for accepted messages.
//!
//! An accepted order produces a [`Receipt`] and an [`OrderEntry`] in the
//! order log. An accepted `GetOrders` query returns a snapshot of the
//! sender's own entries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{ClientId, Message, constants};

/// One accepted order, as recorded in the order log.
///
/// Immutable once appended. `sequence` is its 0-based position in the log,
/// which equals the order in which acceptances completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub sequence: u64,
    pub client_id: ClientId,
    pub message: Message,
    pub accepted_at: DateTime<Utc>,
}

/// Acknowledgement returned for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Log position of the accepted order.
    pub sequence: u64,
    /// The sender the order was attributed to.
    pub client_id: ClientId,
    /// Echo of the accepted message.
    pub message: Message,
    /// SHA-256 over the receipt domain and the signed payload.
    pub payload_digest: [u8; 32],
    pub accepted_at: DateTime<Utc>,
}

impl Receipt {
    /// Build the receipt for a freshly appended entry.
    #[must_use]
    pub fn for_entry(entry: &OrderEntry, payload: &[u8]) -> Self {
        Self {
            sequence: entry.sequence,
            client_id: entry.client_id,
            message: entry.message.clone(),
            payload_digest: Self::digest(payload),
            accepted_at: entry.accepted_at,
        }
    }

    /// Domain-separated SHA-256 of a signed payload.
    #[must_use]
    pub fn digest(payload: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(constants::RECEIPT_DOMAIN);
        hasher.update(payload);
        hasher.finalize().into()
    }

    /// Opaque confirmation token handed back to the client.
    #[must_use]
    pub fn token(&self) -> String {
        format!("{}-{}", self.sequence, hex::encode(&self.payload_digest[..8]))
    }
}

/// Result of an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acceptance {
    /// A buy or sell order was appended to the log.
    Acknowledged(Receipt),
    /// The sender's prior orders, oldest first.
    Orders(Vec<OrderEntry>),
}

impl Acceptance {
    #[must_use]
    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            Self::Acknowledged(receipt) => Some(receipt),
            Self::Orders(_) => None,
        }
    }

    #[must_use]
    pub fn orders(&self) -> Option<&[OrderEntry]> {
        match self {
            Self::Acknowledged(_) => None,
            Self::Orders(entries) => Some(entries),
        }
    }
}

impl fmt::Display for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acknowledged(receipt) => write!(f, "ACK {}", receipt.token()),
            Self::Orders(entries) => write!(f, "ORDERS [{}]", entries.len()),
        }
    }
}
