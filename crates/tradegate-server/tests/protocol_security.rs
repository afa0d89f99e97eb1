//! # Protocol security tests
//!
//! Every accepted order must be traceable to a registered identity through
//! a verifiable signature. These tests play an attacker who knows the wire
//! format and the ID scheme, and check that each attack is rejected with
//! the right reason and leaves the order log untouched.
//!
//! They also run registration and submission from many OS threads at once
//! to check that no ID is handed out twice and no append is lost.

use std::collections::HashSet;

use tradegate_server::Server;
use tradegate_types::*;

struct Identity {
    id: ClientId,
    key: PrivateKey,
}

fn register(server: &Server) -> Identity {
    let (public, key) = generate_key_pair(KeyUseCase::Signing).unwrap();
    let id = server.register_client(&public).unwrap();
    Identity { id, key }
}

fn seal(id: ClientId, key: &PrivateKey, msg: &Message) -> SignedEnvelope {
    let payload = msg.encode().unwrap();
    let signature = sign(&payload, key).unwrap();
    SignedEnvelope::new(id, payload, signature)
}

// ═══════════════════════════════════════════════════════════════════
// Forgery
// ═══════════════════════════════════════════════════════════════════

#[test]
fn cross_client_forgery_is_rejected() {
    let server = Server::new();
    let alice = register(&server);
    let mallory = register(&server);

    // Mallory signs with her own key but claims to be Alice.
    let forged = seal(mallory.id, &mallory.key, &Message::buy_stock("ABC123456789", "999"))
        .reattributed_to(alice.id);

    let err = server.accept_message(forged).unwrap_err();
    assert!(
        matches!(err, TradegateError::InvalidSignature(id) if id == alice.id),
        "Expected InvalidSignature for Alice, got: {err:?}"
    );
    assert_eq!(server.order_count(), 0);
    assert!(server.orders_for(alice.id).is_empty());
}

#[test]
fn every_ordered_pair_of_clients_is_protected() {
    let server = Server::new();
    let clients: Vec<Identity> = (0..5).map(|_| register(&server)).collect();

    for signer in &clients {
        for victim in &clients {
            if signer.id == victim.id {
                continue;
            }
            let forged = seal(victim.id, &signer.key, &Message::sell_stock("XYZ", "1"));
            let err = server.accept_message(forged).unwrap_err();
            assert_eq!(err.rejection(), Some(RejectionReason::InvalidSignature));
        }
    }
    assert_eq!(server.order_count(), 0);
}

#[test]
fn unregistered_id_with_valid_signature_is_unknown_client() {
    let server = Server::new();
    let alice = register(&server);

    // A perfectly valid signature, but under an ID nobody holds.
    let stray = seal(ClientId(1_000), &alice.key, &Message::buy_stock("ABC", "1"));
    let err = server.accept_message(stray).unwrap_err();
    assert!(matches!(err, TradegateError::UnknownClient(ClientId(1_000))));
    assert_eq!(server.order_count(), 0);
}

#[test]
fn unregistered_client_on_empty_server_is_unknown_client() {
    let server = Server::new();
    let (_, key) = generate_key_pair(KeyUseCase::Signing).unwrap();
    let err = server
        .accept_message(seal(ClientId::FIRST, &key, &Message::GetOrders))
        .unwrap_err();
    assert_eq!(err.rejection(), Some(RejectionReason::UnknownClient));
}

#[test]
fn tampering_any_single_byte_is_detected() {
    let server = Server::new();
    let alice = register(&server);
    let original = seal(alice.id, &alice.key, &Message::buy_stock("ABC123456789", "003"));

    for index in 0..original.payload.len() {
        let tampered = original.clone().with_flipped_payload_byte(index);
        let err = server.accept_message(tampered).unwrap_err();
        assert!(
            matches!(err, TradegateError::InvalidSignature(_)),
            "byte {index}: expected InvalidSignature, got {err:?}"
        );
    }
    assert_eq!(server.order_count(), 0);

    // The untouched original still goes through.
    assert!(server.accept_message(original).is_ok());
    assert_eq!(server.order_count(), 1);
}

#[test]
fn empty_signature_is_rejected() {
    let server = Server::new();
    let alice = register(&server);
    let payload = Message::buy_stock("ABC", "1").encode().unwrap();
    let env = SignedEnvelope::new(alice.id, payload, Signature::from_bytes(Vec::new()));
    let err = server.accept_message(env).unwrap_err();
    assert_eq!(err.rejection(), Some(RejectionReason::InvalidSignature));
}

#[test]
fn replay_through_wire_form_is_still_bound_to_sender() {
    let server = Server::new();
    let alice = register(&server);
    let bob = register(&server);

    let wire = seal(alice.id, &alice.key, &Message::buy_stock("ABC", "5"))
        .to_wire()
        .unwrap();
    // Rewrite the claimed sender on the wire.
    let hijacked = wire.replacen(
        &format!("\"clientId\":{}", alice.id.0),
        &format!("\"clientId\":{}", bob.id.0),
        1,
    );
    let env = SignedEnvelope::from_wire(&hijacked).unwrap();
    assert_eq!(env.client_id, bob.id);
    let err = server.accept_message(env).unwrap_err();
    assert_eq!(err.rejection(), Some(RejectionReason::InvalidSignature));
}

// ═══════════════════════════════════════════════════════════════════
// Concurrency
// ═══════════════════════════════════════════════════════════════════

#[test]
fn concurrent_registration_yields_distinct_resolvable_ids() {
    let server = Server::new();
    let keys: Vec<PublicKey> = (0..100)
        .map(|_| generate_key_pair(KeyUseCase::Signing).unwrap().0)
        .collect();

    let shared = &server;
    let ids: Vec<ClientId> = std::thread::scope(|s| {
        let handles: Vec<_> = keys
            .iter()
            .map(|k| s.spawn(move || shared.register_client(k).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let unique: HashSet<ClientId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 100, "duplicate ClientId handed out");
    assert_eq!(server.client_count(), 100);
    for (key, id) in keys.iter().zip(&ids) {
        assert_eq!(server.lookup(*id).as_ref(), Some(key));
    }
}

#[test]
fn fifty_clients_two_orders_each_logs_exactly_one_hundred() {
    let server = Server::new();
    let shared = &server;

    std::thread::scope(|s| {
        for _ in 0..50 {
            s.spawn(move || {
                let me = register(shared);
                std::thread::scope(|inner| {
                    let key = &me.key;
                    let id = me.id;
                    inner.spawn(move || {
                        shared
                            .accept_message(seal(id, key, &Message::buy_stock("BUY", "001")))
                            .unwrap()
                    });
                    inner.spawn(move || {
                        shared
                            .accept_message(seal(id, key, &Message::sell_stock("SELL", "002")))
                            .unwrap()
                    });
                });
            });
        }
    });

    let log = server.orders();
    assert_eq!(log.len(), 100);
    assert_eq!(server.client_count(), 50);

    // Dense, duplicate-free sequences.
    let sequences: HashSet<u64> = log.iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, (0..100).collect());

    // Each client has exactly one buy and one sell.
    let clients: HashSet<ClientId> = log.iter().map(|e| e.client_id).collect();
    assert_eq!(clients.len(), 50);
    for client in clients {
        let mine = server.orders_for(client);
        assert_eq!(mine.len(), 2);
        let kinds: HashSet<MessageKind> = mine.iter().map(|e| e.message.kind()).collect();
        assert!(kinds.contains(&MessageKind::BuyStock));
        assert!(kinds.contains(&MessageKind::SellStock));
    }
}

#[test]
fn queries_during_appends_see_whole_entries() {
    let server = Server::new();
    let writer = register(&server);
    let reader = register(&server);
    let shared = &server;

    std::thread::scope(|s| {
        let (wid, wkey) = (writer.id, &writer.key);
        s.spawn(move || {
            for i in 0..200 {
                shared
                    .accept_message(seal(wid, wkey, &Message::buy_stock(format!("S{i}"), "1")))
                    .unwrap();
            }
        });

        let (rid, rkey) = (reader.id, &reader.key);
        s.spawn(move || {
            for _ in 0..50 {
                let snapshot = shared.orders();
                for (pos, entry) in snapshot.iter().enumerate() {
                    assert_eq!(entry.sequence, pos as u64);
                    assert_eq!(entry.client_id, wid);
                }
                // The reader's own query never includes the writer's orders.
                let own = shared
                    .accept_message(seal(rid, rkey, &Message::GetOrders))
                    .unwrap();
                assert_eq!(own.orders().map(<[OrderEntry]>::len), Some(0));
            }
        });
    });

    assert_eq!(server.order_count(), 200);
}
