//! Error types for the Tradegate venue.
//!
//! All errors use the `TG_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Crypto capability errors
//! - 2xx: Registration errors
//! - 3xx: Message rejection errors (returned to the sender)
//! - 9xx: General / internal errors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ClientId;

/// Central error enum for all Tradegate operations.
#[derive(Debug, Error)]
pub enum TradegateError {
    // =================================================================
    // Crypto Errors (1xx)
    // =================================================================
    /// No keypair could be produced for the requested use case.
    #[error("TG_ERR_100: Key generation failed: {reason}")]
    KeyGeneration { reason: String },

    /// The private key material could not be used for signing.
    #[error("TG_ERR_101: Signing failed: {reason}")]
    Signing { reason: String },

    // =================================================================
    // Registration Errors (2xx)
    // =================================================================
    /// The client never obtained a usable ClientID.
    #[error("TG_ERR_200: Registration failed: {reason}")]
    Registration { reason: String },

    /// The registry has been closed and accepts no new clients.
    #[error("TG_ERR_201: Client registry is closed")]
    RegistryClosed,

    // =================================================================
    // Rejection Errors (3xx)
    // =================================================================
    /// The envelope names a ClientID with no registered key.
    #[error("TG_ERR_300: Unknown client: {0}")]
    UnknownClient(ClientId),

    /// The signature does not verify against the claimed sender's key.
    #[error("TG_ERR_301: Invalid signature for client {0}")]
    InvalidSignature(ClientId),

    /// The signed payload is not a valid message encoding.
    #[error("TG_ERR_302: Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("TG_ERR_900: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, bad values, etc.).
    #[error("TG_ERR_901: Configuration error: {0}")]
    Configuration(String),

    /// I/O error.
    #[error("TG_ERR_902: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, TradegateError>;

/// Why the server refused a submitted envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    UnknownClient,
    InvalidSignature,
    MalformedPayload,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownClient => write!(f, "UNKNOWN_CLIENT"),
            Self::InvalidSignature => write!(f, "INVALID_SIGNATURE"),
            Self::MalformedPayload => write!(f, "MALFORMED_PAYLOAD"),
        }
    }
}

impl TradegateError {
    /// The structured rejection this error represents, if it is one the
    /// server returns for a submitted envelope.
    #[must_use]
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::UnknownClient(_) => Some(RejectionReason::UnknownClient),
            Self::InvalidSignature(_) => Some(RejectionReason::InvalidSignature),
            Self::MalformedPayload { .. } => Some(RejectionReason::MalformedPayload),
            _ => None,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for TradegateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TradegateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
