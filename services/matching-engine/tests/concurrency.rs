//! Concurrency tests
//!
//! Verifies the producer/consumer envelope: no submission is lost or
//! duplicated under concurrent producers, program order is preserved per
//! producer, shutdown drains everything, and matching stays deterministic.

use matching_engine::{ChannelSink, CollectingSink, Engine, MatchingEngine};
use std::collections::HashSet;
use std::sync::mpsc;
use std::thread;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

fn order(id: u64, side: Side, price: u64, quantity: u32) -> Order {
    Order::new(
        OrderId::new(id),
        side,
        Price::from_u64(price),
        Quantity::new(quantity),
        id,
    )
}

#[test]
fn test_concurrent_producers_no_loss_no_duplication() {
    let producers: u64 = 4;
    let pairs_per_producer: u64 = 250;

    let sink = CollectingSink::new();
    let trades = sink.handle();

    let mut engine = Engine::new(sink);
    engine.start();

    // Every producer submits matched sell/buy pairs at one price, so the
    // total trade count equals the total pair count
    thread::scope(|s| {
        let engine = &engine;
        for p in 0..producers {
            s.spawn(move || {
                let base = p * pairs_per_producer * 2;
                for i in 0..pairs_per_producer {
                    engine
                        .submit(order(base + 2 * i, Side::SELL, 100, 1))
                        .unwrap();
                    engine
                        .submit(order(base + 2 * i + 1, Side::BUY, 100, 1))
                        .unwrap();
                }
            });
        }
    });

    engine.stop();

    let trades = trades.lock().unwrap();
    let expected = (producers * pairs_per_producer) as usize;
    assert_eq!(trades.len(), expected);

    // Each submitted order participates in exactly one trade
    let mut buys = HashSet::new();
    let mut sells = HashSet::new();
    for trade in trades.iter() {
        assert_eq!(trade.quantity, Quantity::new(1));
        assert!(buys.insert(trade.buy_order_id), "buy matched twice");
        assert!(sells.insert(trade.sell_order_id), "sell matched twice");
    }
    assert_eq!(buys.len(), expected);
    assert_eq!(sells.len(), expected);
}

#[test]
fn test_single_producer_program_order_is_time_priority() {
    let resting_sells: u64 = 100;

    let (sender, receiver) = mpsc::channel();
    let mut engine = Engine::new(ChannelSink::new(sender));
    engine.start();

    // Sells all rest at one price; the sweeping buy must consume them in
    // submission order
    for i in 1..=resting_sells {
        engine.submit(order(i, Side::SELL, 100, 1)).unwrap();
    }
    engine
        .submit(order(1000, Side::BUY, 100, resting_sells as u32))
        .unwrap();
    engine.stop();

    let sells: Vec<u64> = receiver.iter().map(|t| t.sell_order_id.as_u64()).collect();
    let expected: Vec<u64> = (1..=resting_sells).collect();
    assert_eq!(sells, expected);
}

#[test]
fn test_graceful_shutdown_processes_everything_submitted() {
    let pairs: u64 = 1000;

    let sink = CollectingSink::new();
    let trades = sink.handle();

    let mut engine = Engine::new(sink);
    engine.start();

    for i in 0..pairs {
        engine.submit(order(2 * i, Side::SELL, 100, 1)).unwrap();
        engine.submit(order(2 * i + 1, Side::BUY, 100, 1)).unwrap();
    }
    // The queue is almost certainly still draining here
    engine.stop();

    assert_eq!(trades.lock().unwrap().len(), pairs as usize);
}

#[test]
fn test_trades_delivered_in_production_order() {
    let (sender, receiver) = mpsc::channel();
    let mut engine = Engine::new(ChannelSink::new(sender));
    engine.start();

    for i in 0..500_u64 {
        engine.submit(order(2 * i, Side::SELL, 100, 1)).unwrap();
        engine.submit(order(2 * i + 1, Side::BUY, 100, 1)).unwrap();
    }
    engine.stop();

    let sequences: Vec<u64> = receiver.iter().map(|t| t.sequence).collect();
    assert_eq!(sequences.len(), 500);
    for (i, seq) in sequences.iter().enumerate() {
        assert_eq!(*seq, i as u64, "trade sequence out of order");
    }
}

#[test]
fn test_identical_inputs_match_identically() {
    let submissions: Vec<Order> = (0..200_u64)
        .map(|i| {
            let side = if i % 3 == 0 { Side::SELL } else { Side::BUY };
            let price = 95 + (i * 7) % 11;
            let quantity = 1 + (i % 9) as u32;
            order(i, side, price, quantity)
        })
        .collect();

    // Run the same sequence twice in parallel on independent engines
    let run = |orders: Vec<Order>| {
        thread::spawn(move || {
            let mut engine = MatchingEngine::new();
            let mut trades = Vec::new();
            for order in orders {
                engine.submit(order);
                trades.extend(engine.poll_trades());
            }
            trades
        })
    };

    let h1 = run(submissions.clone());
    let h2 = run(submissions);

    let r1 = h1.join().unwrap();
    let r2 = h2.join().unwrap();
    assert_eq!(r1, r2, "parallel runs must produce identical trades");
}
