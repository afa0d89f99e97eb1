//! Configuration for a Tradegate simulation run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, TradegateError, constants};

/// Shape of one simulation: how many clients, how they pace themselves,
/// and what the generated orders look like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of client actors to register and run.
    pub clients: usize,
    /// Upper bound of each client's think delay before a round (ms).
    pub max_send_delay_ms: u64,
    /// Buy/sell/query rounds per client.
    pub rounds: usize,
    /// Length of generated stock identifiers.
    pub stock_id_len: usize,
    /// Digits in a generated buy quantity.
    pub buy_quantity_digits: usize,
    /// Digits in a generated sell quantity.
    pub sell_quantity_digits: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            clients: constants::DEFAULT_CLIENTS,
            max_send_delay_ms: constants::DEFAULT_MAX_SEND_DELAY_MS,
            rounds: constants::DEFAULT_ROUNDS,
            stock_id_len: constants::DEFAULT_STOCK_ID_LEN,
            buy_quantity_digits: constants::DEFAULT_BUY_QUANTITY_DIGITS,
            sell_quantity_digits: constants::DEFAULT_SELL_QUANTITY_DIGITS,
        }
    }
}

impl SimulationConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `Configuration` if the text is not valid TOML for this shape.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| TradegateError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Configuration` if it is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject configurations that cannot produce a meaningful run.
    ///
    /// # Errors
    /// Returns `Configuration` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.clients == 0 {
            return Err(TradegateError::Configuration(
                "clients must be at least 1".into(),
            ));
        }
        if self.rounds == 0 {
            return Err(TradegateError::Configuration(
                "rounds must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Total orders (buys plus sells) a fully successful run logs.
    #[must_use]
    pub fn expected_orders(&self) -> usize {
        self.clients * self.rounds * 2
    }
}
