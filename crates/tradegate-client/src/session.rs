//! One client actor's run against the server.
//!
//! Each round waits a random think delay, then sends a buy, a sell, and an
//! orders query. Server rejections are counted and the session continues.
//! Crypto or encoding failures end the session with an error.

use std::{sync::Arc, time::Duration};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tradegate_server::Server;
use tradegate_types::{Acceptance, ClientId, MessageKind, Result, SimulationConfig};

use crate::{Client, OrderGenerator};

/// Message kinds sent per round, in order.
const ROUND: [MessageKind; 3] = [
    MessageKind::BuyStock,
    MessageKind::SellStock,
    MessageKind::GetOrders,
];

/// What one session achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub client_id: ClientId,
    /// Buy/sell orders acknowledged by the server.
    pub orders_accepted: usize,
    /// `GetOrders` queries answered.
    pub queries_answered: usize,
    /// Orders listed by the most recent answered query.
    pub orders_last_listed: usize,
    /// Envelopes the server refused.
    pub rejections: usize,
}

impl SessionReport {
    fn new(client_id: ClientId) -> Self {
        Self {
            client_id,
            orders_accepted: 0,
            queries_answered: 0,
            orders_last_listed: 0,
            rejections: 0,
        }
    }
}

/// Drive `client` through `config.rounds` rounds against `server`.
///
/// # Errors
/// Returns the first non-rejection failure (signing, encoding). Server
/// rejections are tallied in the report instead.
pub async fn run_session(
    client: Client,
    server: Arc<Server>,
    config: SimulationConfig,
) -> Result<SessionReport> {
    let generator = OrderGenerator::from_config(&config);
    let mut rng = StdRng::from_entropy();
    let mut report = SessionReport::new(client.id());

    for round in 0..config.rounds {
        let delay_ms = rng.gen_range(1..=config.max_send_delay_ms.max(1));
        tracing::debug!(client = %client.id(), round, delay_ms, "Thinking");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        for kind in ROUND {
            let message = generator.generate(kind, &mut rng);
            match client.send(&server, message) {
                Ok(Acceptance::Acknowledged(_)) => report.orders_accepted += 1,
                Ok(Acceptance::Orders(entries)) => {
                    report.queries_answered += 1;
                    report.orders_last_listed = entries.len();
                }
                Err(err) if err.rejection().is_some() => report.rejections += 1,
                Err(err) => return Err(err),
            }
        }
    }

    tracing::info!(
        client = %report.client_id,
        accepted = report.orders_accepted,
        queries = report.queries_answered,
        rejections = report.rejections,
        "Session finished"
    );
    Ok(report)
}
