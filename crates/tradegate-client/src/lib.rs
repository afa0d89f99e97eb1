//! # tradegate-client
//!
//! **Client actor**: holds one private key and its server-assigned
//! [`ClientId`](tradegate_types::ClientId), signs outbound messages, and
//! submits them to the [`Server`](tradegate_server::Server).
//!
//! ## Components
//!
//! 1. **Client**: registration, envelope construction, `send`
//! 2. **OrderGenerator**: random buy/sell/query content
//! 3. **Session**: one actor's paced run of buy → sell → query rounds
//!
//! The private key never leaves the [`Client`]. The only thing a client
//! shares with the server is its public key, once, at registration.

pub mod client;
pub mod generator;
pub mod session;

pub use client::Client;
pub use generator::OrderGenerator;
pub use session::{SessionReport, run_session};
