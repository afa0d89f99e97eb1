//! Random order content.
//!
//! Stock IDs are drawn from `A-Z0-9` and quantities from `0-9`. Leading
//! zeros are kept, since the quantity is a digit string.

use rand::Rng;
use tradegate_types::{Message, MessageKind, SimulationConfig, constants};

/// Produces random messages of a requested kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderGenerator {
    stock_id_len: usize,
    buy_quantity_digits: usize,
    sell_quantity_digits: usize,
}

impl OrderGenerator {
    #[must_use]
    pub fn new(stock_id_len: usize, buy_quantity_digits: usize, sell_quantity_digits: usize) -> Self {
        Self {
            stock_id_len,
            buy_quantity_digits,
            sell_quantity_digits,
        }
    }

    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.stock_id_len,
            config.buy_quantity_digits,
            config.sell_quantity_digits,
        )
    }

    /// A random message of `kind`.
    pub fn generate<R: Rng + ?Sized>(&self, kind: MessageKind, rng: &mut R) -> Message {
        match kind {
            MessageKind::BuyStock => Message::BuyStock {
                stock_id: random_string(rng, constants::STOCK_ID_ALPHABET, self.stock_id_len),
                quantity: random_string(rng, constants::QUANTITY_ALPHABET, self.buy_quantity_digits),
            },
            MessageKind::SellStock => Message::SellStock {
                stock_id: random_string(rng, constants::STOCK_ID_ALPHABET, self.stock_id_len),
                quantity: random_string(rng, constants::QUANTITY_ALPHABET, self.sell_quantity_digits),
            },
            MessageKind::GetOrders => Message::GetOrders,
        }
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

fn random_string<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}
