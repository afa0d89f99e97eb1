//! Signed envelope: the transmittable unit from client to server.
//!
//! An envelope binds a claimed sender, the canonical message bytes, and a
//! signature over exactly those bytes. The server checks the binding; it
//! never assumes it.
//!
//! ## Wire form
//!
//! ```text
//! {"clientId":3,"payload":"7b2274797065...","signature":"9f1c..."}
//! ```
//!
//! `payload` and `signature` are hex-encoded.

use serde::{Deserialize, Serialize};

use crate::{ClientId, Message, PublicKey, Result, Signature, verify};

/// `{client_id, payload, signature}` as sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedEnvelope {
    /// The sender this envelope claims to come from.
    pub client_id: ClientId,
    /// Canonical encoding of a [`Message`].
    #[serde(with = "hex_bytes")]
    pub payload: Vec<u8>,
    /// Signature over `payload` by the sender's private key.
    pub signature: Signature,
}

impl SignedEnvelope {
    #[must_use]
    pub fn new(client_id: ClientId, payload: Vec<u8>, signature: Signature) -> Self {
        Self {
            client_id,
            payload,
            signature,
        }
    }

    /// Whether `signature` covers `payload` under `key`.
    #[must_use]
    pub fn verify_with(&self, key: &PublicKey) -> bool {
        verify(&self.payload, &self.signature, key)
    }

    /// Decode the payload.
    ///
    /// # Errors
    /// Returns `MalformedPayload` if the payload is not a valid message.
    pub fn message(&self) -> Result<Message> {
        Message::decode(&self.payload)
    }

    /// Serialize to the JSON wire form.
    ///
    /// # Errors
    /// Returns `Serialization` if encoding fails.
    pub fn to_wire(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the JSON wire form.
    ///
    /// # Errors
    /// Returns `Serialization` if the text is not a valid envelope.
    pub fn from_wire(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Tampering fixtures for tests. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl SignedEnvelope {
    /// Flip the low bit of one payload byte, keeping the original signature.
    #[must_use]
    pub fn with_flipped_payload_byte(mut self, index: usize) -> Self {
        self.payload[index] ^= 0x01;
        self
    }

    /// Claim a different sender, keeping payload and signature.
    #[must_use]
    pub fn reattributed_to(mut self, client_id: ClientId) -> Self {
        self.client_id = client_id;
        self
    }
}

/// Serde adapter storing byte vectors as lowercase hex strings.
pub(crate) mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        hex::decode(text).map_err(D::Error::custom)
    }
}
