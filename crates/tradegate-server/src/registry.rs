//! Client registry: `ClientId → PublicKey`.
//!
//! IDs are allocated and entries published under a single write lock, so
//! two concurrent registrations can never share an ID and a reader never
//! sees an ID without its key. Entries are immutable once written.

use std::collections::HashMap;

use parking_lot::RwLock;
use tradegate_types::{ClientId, PublicKey, Result, TradegateError};

#[derive(Debug)]
struct RegistryState {
    /// Verification key per registered client.
    keys: HashMap<ClientId, PublicKey>,
    /// Reverse index making re-registration of a known key idempotent.
    ids_by_key: HashMap<PublicKey, ClientId>,
    /// Next ID to hand out.
    next_id: ClientId,
    /// Set by [`ClientRegistry::close`].
    closed: bool,
}

/// Thread-safe registry of client verification keys.
#[derive(Debug)]
pub struct ClientRegistry {
    state: RwLock<RegistryState>,
}

impl ClientRegistry {
    /// Create an empty, open registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState {
                keys: HashMap::new(),
                ids_by_key: HashMap::new(),
                next_id: ClientId::FIRST,
                closed: false,
            }),
        }
    }

    /// Register `public_key` and return its ClientId.
    ///
    /// The registry stores its own copy of the key. Registering a key that
    /// is already present returns the existing ID.
    ///
    /// # Errors
    /// Returns `RegistryClosed` after [`close`](Self::close).
    pub fn register(&self, public_key: &PublicKey) -> Result<ClientId> {
        let mut state = self.state.write();
        if state.closed {
            return Err(TradegateError::RegistryClosed);
        }

        if let Some(&existing) = state.ids_by_key.get(public_key) {
            tracing::debug!(client = %existing, key = %public_key.short(), "Key already registered");
            return Ok(existing);
        }

        let id = state.next_id;
        state.next_id = id.next();
        state.keys.insert(id, public_key.clone());
        state.ids_by_key.insert(public_key.clone(), id);

        tracing::debug!(client = %id, key = %public_key.short(), "Client registered");
        Ok(id)
    }

    /// The key registered under `id`, if any.
    #[must_use]
    pub fn lookup(&self, id: ClientId) -> Option<PublicKey> {
        self.state.read().keys.get(&id).cloned()
    }

    /// Stop accepting registrations. Existing entries stay resolvable.
    pub fn close(&self) {
        self.state.write().closed = true;
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.read().closed
    }

    /// Number of registered clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().keys.is_empty()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}
