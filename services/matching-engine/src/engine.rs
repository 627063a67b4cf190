//! Matching engine facade
//!
//! A thin service wrapper over a single [`OrderBook`]. Keeping `submit`
//! and `poll_trades` separate lets a caller batch several submissions
//! before running one matching pass; the engine loop polls after every
//! submission to keep latency minimal.

use types::numeric::Price;
use types::order::Order;
use types::trade::Trade;

use crate::book::OrderBook;
use crate::config::EngineConfig;

/// Matching engine for a single instrument
#[derive(Debug, Default)]
pub struct MatchingEngine {
    book: OrderBook,
}

impl MatchingEngine {
    /// Create a new matching engine with default configuration
    pub fn new() -> Self {
        Self {
            book: OrderBook::new(),
        }
    }

    /// Create a new matching engine from a configuration
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            book: OrderBook::with_trade_capacity(config.trade_buffer_capacity),
        }
    }

    /// Add an order to the book. Does **not** run matching.
    ///
    /// Caller contract violations (zero quantity, non-positive price)
    /// cannot reach this point: [`Order`] construction rejects them.
    pub fn submit(&mut self, order: Order) {
        self.book.add_order(order);
    }

    /// Run one matching pass and return the trades it produced
    pub fn poll_trades(&mut self) -> Vec<Trade> {
        self.book.match_orders()
    }

    /// True iff no orders rest on either side
    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    /// Get the best bid as (price, total level quantity)
    pub fn best_bid(&self) -> Option<(Price, u64)> {
        self.book.best_bid()
    }

    /// Get the best ask as (price, total level quantity)
    pub fn best_ask(&self) -> Option<(Price, u64)> {
        self.book.best_ask()
    }

    /// Get depth snapshot of the bid side (top N levels, best first)
    pub fn bid_depth(&self, depth: usize) -> Vec<(Price, u64)> {
        self.book.bid_depth(depth)
    }

    /// Get depth snapshot of the ask side (top N levels, best first)
    pub fn ask_depth(&self, depth: usize) -> Vec<(Price, u64)> {
        self.book.ask_depth(depth)
    }

    /// Total number of resting orders
    pub fn order_count(&self) -> usize {
        self.book.order_count()
    }
}
