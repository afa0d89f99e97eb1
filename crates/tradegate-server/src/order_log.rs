//! Append-only order log.
//!
//! Orders are appended in the order their acceptance completes. The
//! sequence number is assigned under the same write lock as the push, so
//! sequences are dense and match log positions. Readers take a read lock
//! and copy out whole entries; they never see a half-written append.

use chrono::Utc;
use parking_lot::RwLock;
use tradegate_types::{ClientId, Message, OrderEntry};

/// Thread-safe, append-only record of accepted orders.
#[derive(Debug, Default)]
pub struct OrderLog {
    entries: RwLock<Vec<OrderEntry>>,
}

impl OrderLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted order and return the stored entry.
    pub fn append(&self, client_id: ClientId, message: Message) -> OrderEntry {
        let mut entries = self.entries.write();
        let entry = OrderEntry {
            sequence: entries.len() as u64,
            client_id,
            message,
            accepted_at: Utc::now(),
        };
        entries.push(entry.clone());
        entry
    }

    /// All entries from `client_id`, oldest first, from one consistent snapshot.
    #[must_use]
    pub fn entries_for(&self, client_id: ClientId) -> Vec<OrderEntry> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.client_id == client_id)
            .cloned()
            .collect()
    }

    /// Copy of the whole log.
    #[must_use]
    pub fn snapshot(&self) -> Vec<OrderEntry> {
        self.entries.read().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
