//! # tradegate-server
//!
//! **Venue server**: client registration, signature-checked message
//! acceptance, and the append-only order log.
//!
//! ## Architecture
//!
//! The [`Server`] sits behind the simulated network boundary and owns the
//! only shared mutable state in the system:
//! 1. **ClientRegistry**: assigns `ClientId`s and stores each client's public key
//! 2. **OrderLog**: append-only record of accepted buy/sell orders
//!
//! Each structure has its own lock. Clients never touch either directly;
//! every mutation goes through the server's `&self` methods.
//!
//! ## Message Flow
//!
//! ```text
//! SignedEnvelope → ClientRegistry.lookup() → verify(payload, signature)
//!     → Message::decode() → OrderLog.append() | OrderLog.entries_for()
//! ```
//!
//! Every accepted order is traceable to a registered identity.

pub mod order_log;
pub mod registry;
pub mod server;

pub use order_log::OrderLog;
pub use registry::ClientRegistry;
pub use server::Server;
