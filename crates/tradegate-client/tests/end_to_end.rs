//! End-to-end scenarios: real client actors against a real server.
//!
//! Clients register, sign, and submit through their public API only; the
//! server's own accessors are used afterwards to check what was recorded.

use std::{collections::HashSet, sync::Arc};

use tradegate_client::{Client, run_session};
use tradegate_server::Server;
use tradegate_types::*;

#[test]
fn buy_then_list_returns_exactly_that_order() {
    let server = Server::new();
    let c = Client::register(&server).unwrap();
    let buy = Message::buy_stock("ABC123456789", "003");

    let ack = c.send(&server, buy.clone()).unwrap();
    assert!(ack.receipt().is_some());
    assert_eq!(server.order_count(), 1);

    let listed = c.send(&server, Message::GetOrders).unwrap();
    let orders = listed.orders().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].message, buy);
    assert_eq!(orders[0].client_id, c.id());
    assert_eq!(server.order_count(), 1, "GetOrders must not be logged");
}

#[test]
fn get_orders_never_leaks_other_clients() {
    let server = Server::new();
    let alice = Client::register(&server).unwrap();
    let bob = Client::register(&server).unwrap();

    alice.send(&server, Message::buy_stock("AAA", "1")).unwrap();
    bob.send(&server, Message::sell_stock("BBB", "2")).unwrap();
    alice.send(&server, Message::sell_stock("AAA", "3")).unwrap();

    let alice_orders = alice.send(&server, Message::GetOrders).unwrap();
    let alice_orders = alice_orders.orders().unwrap();
    assert_eq!(alice_orders.len(), 2);
    assert!(alice_orders.iter().all(|e| e.client_id == alice.id()));

    let bob_orders = bob.send(&server, Message::GetOrders).unwrap();
    assert_eq!(bob_orders.orders().map(<[OrderEntry]>::len), Some(1));
}

#[test]
fn receipts_carry_log_positions_in_completion_order() {
    let server = Server::new();
    let c = Client::register(&server).unwrap();
    let mut sequences = Vec::new();
    for i in 0..5 {
        let ack = c
            .send(&server, Message::buy_stock(format!("S{i}"), "010"))
            .unwrap();
        sequences.push(ack.receipt().unwrap().sequence);
    }
    assert_eq!(sequences, vec![0, 1, 2, 3, 4]);
}

#[test]
fn zero_and_huge_quantities_are_accepted_verbatim() {
    let server = Server::new();
    let c = Client::register(&server).unwrap();
    let huge = "9".repeat(64);

    c.send(&server, Message::buy_stock("ABC", "000")).unwrap();
    c.send(&server, Message::sell_stock("ABC", huge.clone())).unwrap();

    let log = server.orders();
    assert_eq!(log[0].message, Message::buy_stock("ABC", "000"));
    assert_eq!(log[1].message, Message::sell_stock("ABC", huge));
}

#[test]
fn fifty_concurrent_actors_log_one_hundred_orders() {
    let server = Server::new();
    let shared = &server;

    std::thread::scope(|s| {
        for i in 0..50 {
            s.spawn(move || {
                let me = Client::register(shared).unwrap();
                me.send(shared, Message::buy_stock(format!("B{i:011}"), "001"))
                    .unwrap();
                me.send(shared, Message::sell_stock(format!("S{i:011}"), "0000000002"))
                    .unwrap();
            });
        }
    });

    let log = server.orders();
    assert_eq!(log.len(), 100);
    let sequences: HashSet<u64> = log.iter().map(|e| e.sequence).collect();
    assert_eq!(sequences.len(), 100);
    let distinct: HashSet<&Message> = log.iter().map(|e| &e.message).collect();
    assert_eq!(distinct.len(), 100, "duplicate entry in the order log");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sessions_on_a_shared_server() {
    let server = Arc::new(Server::new());
    let config = SimulationConfig {
        clients: 20,
        max_send_delay_ms: 5,
        rounds: 2,
        ..SimulationConfig::default()
    };

    let mut handles = Vec::new();
    for _ in 0..config.clients {
        let client = Client::register(&server).unwrap();
        handles.push(tokio::spawn(run_session(
            client,
            Arc::clone(&server),
            config.clone(),
        )));
    }

    for handle in handles {
        let report = handle.await.unwrap().unwrap();
        assert_eq!(report.orders_accepted, 4);
        assert_eq!(report.orders_last_listed, 4);
        assert_eq!(report.rejections, 0);
    }
    assert_eq!(server.order_count(), config.expected_orders());
}
