//! # tradegate-types
//!
//! Shared types, errors, and configuration for the **Tradegate** venue
//! simulation.
//!
//! This crate is the leaf dependency of the workspace. Every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ClientId`]
//! - **Message model**: [`Message`], [`MessageKind`]
//! - **Envelope model**: [`SignedEnvelope`]
//! - **Crypto capability**: [`generate_key_pair`], [`sign`], [`verify`],
//!   [`PublicKey`], [`PrivateKey`], [`Signature`], [`KeyUseCase`]
//! - **Server outcomes**: [`Receipt`], [`OrderEntry`], [`Acceptance`]
//! - **Configuration**: [`SimulationConfig`]
//! - **Errors**: [`TradegateError`] with `TG_ERR_` prefix codes
//! - **Constants**: system-wide defaults

pub mod config;
pub mod constants;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod message;
pub mod receipt;

// Re-export all primary types at crate root for ergonomic imports:
//   use tradegate_types::{ClientId, Message, SignedEnvelope, ...};

pub use config::*;
pub use crypto::*;
pub use envelope::*;
pub use error::*;
pub use ids::*;
pub use message::*;
pub use receipt::*;

// Constants are accessed via `tradegate_types::constants::FOO`
// (not re-exported to avoid name collisions).
