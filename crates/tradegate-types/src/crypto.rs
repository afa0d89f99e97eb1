//! # Crypto capability: key generation, signing, verification
//!
//! Ed25519 (via `ed25519-dalek`) behind three free functions:
//!
//! - [`generate_key_pair`]: fresh `(PublicKey, PrivateKey)` for a use case
//! - [`sign`]: sign arbitrary bytes with a private key
//! - [`verify`]: pure predicate, `true` only for a valid signature
//!
//! Keys travel as opaque byte strings. A [`PublicKey`] is copied into the
//! server's registry at registration. A [`PrivateKey`] is not `Clone` and
//! never leaves the client that generated it.

use std::fmt;

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::{Result, TradegateError, constants};

/// What a generated keypair is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyUseCase {
    /// Ed25519 signing keys.
    Signing,
    /// Recognised but not offered by this venue.
    AsymmetricEncryption,
}

impl fmt::Display for KeyUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signing => write!(f, "SIGNING"),
            Self::AsymmetricEncryption => write!(f, "ASYMMETRIC_ENCRYPTION"),
        }
    }
}

// ---------------------------------------------------------------------------
// Key material
// ---------------------------------------------------------------------------

/// Verification key, as raw bytes.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(#[serde(with = "crate::envelope::hex_bytes")] Vec<u8>);

impl PublicKey {
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// First four bytes in hex, for log lines.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..self.0.len().min(4)])
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(&self.0))
    }
}

/// Signing key, as raw bytes. Owned by exactly one client.
pub struct PrivateKey(Vec<u8>);

impl PrivateKey {
    /// Wrap existing key material. Its validity is checked at signing time.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Detached signature bytes.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature(#[serde(with = "crate::envelope::hex_bytes")] Vec<u8>);

impl Signature {
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(&self.0))
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Generate a fresh keypair for `use_case`.
///
/// # Errors
/// Returns `KeyGeneration` if no algorithm is available for the use case.
pub fn generate_key_pair(use_case: KeyUseCase) -> Result<(PublicKey, PrivateKey)> {
    match use_case {
        KeyUseCase::Signing => {
            let signing_key = SigningKey::generate(&mut OsRng);
            let public = PublicKey(signing_key.verifying_key().to_bytes().to_vec());
            let private = PrivateKey(signing_key.to_bytes().to_vec());
            Ok((public, private))
        }
        KeyUseCase::AsymmetricEncryption => Err(TradegateError::KeyGeneration {
            reason: format!("no algorithm available for {use_case}"),
        }),
    }
}

/// Sign `message` with `key`.
///
/// # Errors
/// Returns `Signing` if the key material is not a 32-byte Ed25519 secret.
pub fn sign(message: &[u8], key: &PrivateKey) -> Result<Signature> {
    let secret: [u8; constants::PRIVATE_KEY_LEN] =
        key.0.as_slice().try_into().map_err(|_| TradegateError::Signing {
            reason: format!(
                "expected {} bytes of key material, got {}",
                constants::PRIVATE_KEY_LEN,
                key.0.len()
            ),
        })?;
    let signing_key = SigningKey::from_bytes(&secret);
    Ok(Signature(signing_key.sign(message).to_bytes().to_vec()))
}

/// Check `signature` over `message` against `key`.
///
/// Returns `false` for a wrong signature and for malformed signature or key
/// bytes. Never errors and never panics.
#[must_use]
pub fn verify(message: &[u8], signature: &Signature, key: &PublicKey) -> bool {
    let Ok(key_bytes) = <[u8; constants::PUBLIC_KEY_LEN]>::try_from(key.as_bytes()) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&key_bytes) else {
        return false;
    };
    let Ok(sig) = ed25519_dalek::Signature::from_slice(signature.as_bytes()) else {
        return false;
    };
    verifying_key.verify_strict(message, &sig).is_ok()
}
