//! Matching logic module
//!
//! Trade production for the price-time priority matching loop. Crossing
//! detection itself is a single price comparison and lives inline in
//! [`OrderBook::match_orders`](crate::book::OrderBook::match_orders).

pub mod executor;

pub use executor::MatchExecutor;
