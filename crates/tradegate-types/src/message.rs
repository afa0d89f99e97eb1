//! Messages a client can submit to the venue.
//!
//! `quantity` stays a digit string end to end. It is never parsed into a
//! bounded integer, so arbitrarily large or zero quantities pass through
//! untouched.
//!
//! ## Canonical encoding
//!
//! Compact JSON, internally tagged by `"type"`, fields in declaration order:
//!
//! ```text
//! {"type":"BuyStock","stockId":"ABC123456789","quantity":"003"}
//! {"type":"GetOrders"}
//! ```
//!
//! Signing and verification both operate on the exact bytes produced by
//! [`Message::encode`], and those bytes are what travels in the envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, TradegateError};

/// One request from a client to the venue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    /// Buy `quantity` units of `stock_id`.
    BuyStock {
        #[serde(rename = "stockId")]
        stock_id: String,
        quantity: String,
    },
    /// Sell `quantity` units of `stock_id`.
    SellStock {
        #[serde(rename = "stockId")]
        stock_id: String,
        quantity: String,
    },
    /// List the sender's previously accepted orders.
    GetOrders,
}

/// The variant tag of a [`Message`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    BuyStock,
    SellStock,
    GetOrders,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuyStock => write!(f, "BUY_STOCK"),
            Self::SellStock => write!(f, "SELL_STOCK"),
            Self::GetOrders => write!(f, "GET_ORDERS"),
        }
    }
}

impl Message {
    #[must_use]
    pub fn buy_stock(stock_id: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self::BuyStock {
            stock_id: stock_id.into(),
            quantity: quantity.into(),
        }
    }

    #[must_use]
    pub fn sell_stock(stock_id: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self::SellStock {
            stock_id: stock_id.into(),
            quantity: quantity.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::BuyStock { .. } => MessageKind::BuyStock,
            Self::SellStock { .. } => MessageKind::SellStock,
            Self::GetOrders => MessageKind::GetOrders,
        }
    }

    /// Whether accepting this message appends to the order log.
    #[must_use]
    pub fn is_order(&self) -> bool {
        match self {
            Self::BuyStock { .. } | Self::SellStock { .. } => true,
            Self::GetOrders => false,
        }
    }

    /// Canonical byte encoding. Deterministic: the same message always
    /// yields the same bytes.
    ///
    /// # Errors
    /// Returns `Serialization` if JSON encoding fails.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a payload produced by [`Message::encode`].
    ///
    /// # Errors
    /// Returns `MalformedPayload` if the bytes are not a valid message.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| TradegateError::MalformedPayload {
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuyStock { stock_id, quantity } => write!(f, "BUY {quantity} x {stock_id}"),
            Self::SellStock { stock_id, quantity } => write!(f, "SELL {quantity} x {stock_id}"),
            Self::GetOrders => write!(f, "GET_ORDERS"),
        }
    }
}
