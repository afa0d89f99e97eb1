//! System-wide constants for the Tradegate venue simulation.

/// First ClientID handed out by a fresh registry.
pub const FIRST_CLIENT_ID: u64 = 0;

/// Wire code reported when the server refuses a registration.
pub const REGISTRATION_REJECTED_CODE: i64 = -1;

/// Default number of simulated clients.
pub const DEFAULT_CLIENTS: usize = 1;

/// Default upper bound of a client's think delay before sending (milliseconds).
pub const DEFAULT_MAX_SEND_DELAY_MS: u64 = 5000;

/// Default number of buy/sell/query rounds per client session.
pub const DEFAULT_ROUNDS: usize = 1;

/// Length of generated stock identifiers.
pub const DEFAULT_STOCK_ID_LEN: usize = 12;

/// Digits in a generated buy quantity.
pub const DEFAULT_BUY_QUANTITY_DIGITS: usize = 3;

/// Digits in a generated sell quantity.
pub const DEFAULT_SELL_QUANTITY_DIGITS: usize = 10;

/// Alphabet for generated stock identifiers.
pub const STOCK_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Alphabet for generated quantities.
pub const QUANTITY_ALPHABET: &[u8] = b"0123456789";

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Ed25519 secret key length in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// Domain prefix hashed into receipt digests.
pub const RECEIPT_DOMAIN: &[u8] = b"tradegate:receipt:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Venue name.
pub const VENUE_NAME: &str = "Tradegate";
