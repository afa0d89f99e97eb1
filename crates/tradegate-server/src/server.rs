//! The venue server: registration and signed-message acceptance.
//!
//! ## Acceptance pipeline
//!
//! 1. Resolve the claimed sender's key. No key: `UnknownClient`.
//! 2. Verify the signature over the exact payload bytes. Failure: `InvalidSignature`.
//! 3. Decode the payload. Failure: `MalformedPayload`.
//! 4. `GetOrders` answers from a snapshot; buy/sell orders are appended.
//!
//! A rejected envelope leaves no trace in the order log. Rejections are
//! returned to the caller as `Err` values and logged; nothing is dropped
//! silently.
//!
//! Registry entries are immutable, so verifying outside the log lock cannot
//! race with the append that follows it.

use tradegate_types::{
    Acceptance, ClientId, Message, OrderEntry, PublicKey, Receipt, Result, SignedEnvelope,
    TradegateError,
};

use crate::{ClientRegistry, OrderLog};

/// Owns the registry and the order log. Share it across tasks with `Arc`.
#[derive(Debug, Default)]
pub struct Server {
    registry: ClientRegistry,
    log: OrderLog,
}

impl Server {
    /// Create a server with an empty registry and order log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client's public key. The only registration entry point.
    ///
    /// # Errors
    /// Returns `RegistryClosed` after [`shutdown`](Self::shutdown).
    pub fn register_client(&self, public_key: &PublicKey) -> Result<ClientId> {
        self.registry.register(public_key).inspect_err(|err| {
            tracing::warn!(key = %public_key.short(), error = %err, "Registration rejected");
        })
    }

    /// Verify and process one signed envelope.
    ///
    /// # Errors
    /// - `UnknownClient` if the envelope's ClientId is not registered
    /// - `InvalidSignature` if the signature does not cover the payload
    ///   under the registered key
    /// - `MalformedPayload` if the verified payload is not a valid message
    pub fn accept_message(&self, envelope: SignedEnvelope) -> Result<Acceptance> {
        let client_id = envelope.client_id;
        self.process(&envelope).inspect_err(|err| {
            tracing::warn!(
                client = %client_id,
                reason = ?err.rejection(),
                error = %err,
                "Message rejected"
            );
        })
    }

    fn process(&self, envelope: &SignedEnvelope) -> Result<Acceptance> {
        let client_id = envelope.client_id;
        let key = self
            .registry
            .lookup(client_id)
            .ok_or(TradegateError::UnknownClient(client_id))?;

        if !envelope.verify_with(&key) {
            return Err(TradegateError::InvalidSignature(client_id));
        }

        match envelope.message()? {
            Message::GetOrders => {
                let entries = self.log.entries_for(client_id);
                tracing::debug!(client = %client_id, orders = entries.len(), "Orders listed");
                Ok(Acceptance::Orders(entries))
            }
            order @ (Message::BuyStock { .. } | Message::SellStock { .. }) => {
                let entry = self.log.append(client_id, order);
                tracing::debug!(
                    client = %client_id,
                    sequence = entry.sequence,
                    order = %entry.message,
                    "Order accepted"
                );
                Ok(Acceptance::Acknowledged(Receipt::for_entry(
                    &entry,
                    &envelope.payload,
                )))
            }
        }
    }

    /// Stop accepting registrations. Registered clients can still send.
    pub fn shutdown(&self) {
        self.registry.close();
        tracing::info!(clients = self.registry.len(), orders = self.log.len(), "Registry closed");
    }

    /// The key registered for `client_id`.
    #[must_use]
    pub fn lookup(&self, client_id: ClientId) -> Option<PublicKey> {
        self.registry.lookup(client_id)
    }

    #[must_use]
    pub fn client_count(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn order_count(&self) -> usize {
        self.log.len()
    }

    /// Copy of the full order log.
    #[must_use]
    pub fn orders(&self) -> Vec<OrderEntry> {
        self.log.snapshot()
    }

    /// Orders accepted from `client_id`, oldest first.
    #[must_use]
    pub fn orders_for(&self, client_id: ClientId) -> Vec<OrderEntry> {
        self.log.entries_for(client_id)
    }
}
