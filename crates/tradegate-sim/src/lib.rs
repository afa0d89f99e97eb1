//! # tradegate-sim
//!
//! Simulation driver: starts one server task, registers N client actors
//! concurrently, runs one session task per client, and waits for all of
//! them.
//!
//! ## Lifecycle
//!
//! ```text
//! server task: ready ──────────────────────────────── shutdown → counts
//! clients:        register ×N (concurrent) → session ×N (concurrent)
//! ```
//!
//! Actors share nothing but an `Arc<Server>`. Every interaction goes
//! through the server's public methods.

use std::{fmt, sync::Arc};

use tokio::{sync::Notify, task::JoinSet};
use tradegate_client::{Client, SessionReport, run_session};
use tradegate_server::Server;
use tradegate_types::{Result, SimulationConfig};

/// Outcome of a full simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub clients_registered: usize,
    pub registration_failures: usize,
    pub orders_logged: usize,
    pub queries_answered: usize,
    pub rejections: usize,
    pub session_failures: usize,
}

impl SimulationReport {
    fn absorb(&mut self, session: &SessionReport) {
        self.queries_answered += session.queries_answered;
        self.rejections += session.rejections;
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clients={} registration_failures={} orders={} queries={} rejections={} session_failures={}",
            self.clients_registered,
            self.registration_failures,
            self.orders_logged,
            self.queries_answered,
            self.rejections,
            self.session_failures
        )
    }
}

/// Run one simulation to completion.
///
/// # Errors
/// Returns `Configuration` if `config` fails validation. Failures of
/// individual actors are logged and counted in the report.
pub async fn run(config: SimulationConfig) -> Result<SimulationReport> {
    config.validate()?;
    tracing::info!(
        clients = config.clients,
        rounds = config.rounds,
        max_delay_ms = config.max_send_delay_ms,
        "Starting simulation"
    );

    let server = Arc::new(Server::new());
    let finished = Arc::new(Notify::new());
    let server_task = tokio::spawn(serve(Arc::clone(&server), Arc::clone(&finished)));

    let mut report = SimulationReport::default();
    let clients = register_clients(&server, config.clients, &mut report).await;

    let mut sessions = JoinSet::new();
    for client in clients {
        sessions.spawn(run_session(client, Arc::clone(&server), config.clone()));
    }
    while let Some(joined) = sessions.join_next().await {
        match joined {
            Ok(Ok(session)) => report.absorb(&session),
            Ok(Err(err)) => {
                tracing::error!(error = %err, "Client session aborted");
                report.session_failures += 1;
            }
            Err(err) => {
                tracing::error!(error = %err, "Client task failed");
                report.session_failures += 1;
            }
        }
    }

    finished.notify_one();
    match server_task.await {
        Ok(orders) => report.orders_logged = orders,
        Err(err) => {
            tracing::error!(error = %err, "Server task failed");
            report.orders_logged = server.order_count();
        }
    }

    tracing::info!(%report, "Simulation finished");
    Ok(report)
}

/// The server actor: announces readiness, then closes registration once
/// every client is done and reports how many orders it logged.
async fn serve(server: Arc<Server>, finished: Arc<Notify>) -> usize {
    tracing::info!("Server ready");
    finished.notified().await;
    server.shutdown();
    server.order_count()
}

async fn register_clients(
    server: &Arc<Server>,
    count: usize,
    report: &mut SimulationReport,
) -> Vec<Client> {
    let mut registrations = JoinSet::new();
    for _ in 0..count {
        let server = Arc::clone(server);
        registrations.spawn(async move { Client::register(&server) });
    }

    let mut clients = Vec::with_capacity(count);
    while let Some(joined) = registrations.join_next().await {
        match joined {
            Ok(Ok(client)) => clients.push(client),
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "Client could not register");
                report.registration_failures += 1;
            }
            Err(err) => {
                tracing::error!(error = %err, "Registration task failed");
                report.registration_failures += 1;
            }
        }
    }
    report.clients_registered = clients.len();
    clients
}
