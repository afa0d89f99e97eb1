//! The client actor.
//!
//! A `Client` exists only after a successful registration, so every client
//! value holds a usable ID. Construction generates a fresh Ed25519 pair and
//! hands the server a copy of the public half.

use base64::{Engine, engine::general_purpose::STANDARD};
use tradegate_server::Server;
use tradegate_types::{
    Acceptance, ClientId, KeyUseCase, Message, PrivateKey, Result, SignedEnvelope,
    TradegateError, generate_key_pair, sign,
};

/// One registered participant and its private signing key.
#[derive(Debug)]
pub struct Client {
    id: ClientId,
    private_key: PrivateKey,
}

impl Client {
    /// Generate a keypair and register its public key with `server`.
    ///
    /// # Errors
    /// - `KeyGeneration` if no signing keypair can be produced
    /// - `Registration` if the server refuses the key
    pub fn register(server: &Server) -> Result<Self> {
        let (public_key, private_key) = generate_key_pair(KeyUseCase::Signing)?;
        let id = server
            .register_client(&public_key)
            .map_err(|err| TradegateError::Registration {
                reason: err.to_string(),
            })?;

        tracing::info!(client = %id, key = %public_key.short(), "Registered with server");
        Ok(Self { id, private_key })
    }

    #[must_use]
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Encode `message` canonically and sign exactly those bytes.
    ///
    /// # Errors
    /// Returns `Serialization` or `Signing` from the encoding and crypto steps.
    pub fn build_signed_envelope(&self, message: &Message) -> Result<SignedEnvelope> {
        let payload = message.encode()?;
        let signature = sign(&payload, &self.private_key)?;
        tracing::debug!(
            client = %self.id,
            signature = %STANDARD.encode(signature.as_bytes()),
            "Signed message"
        );
        Ok(SignedEnvelope::new(self.id, payload, signature))
    }

    /// Sign `message` and submit it. The server's verdict is returned as-is;
    /// there is no retry.
    ///
    /// # Errors
    /// Crypto failures from envelope construction, or the server's rejection.
    pub fn send(&self, server: &Server, message: Message) -> Result<Acceptance> {
        tracing::debug!(client = %self.id, %message, "Sending");
        let envelope = self.build_signed_envelope(&message)?;
        let result = server.accept_message(envelope);
        match &result {
            Ok(acceptance) => tracing::info!(client = %self.id, result = %acceptance, "Server accepted"),
            Err(err) => tracing::warn!(client = %self.id, error = %err, "Server rejected"),
        }
        result
    }
}
