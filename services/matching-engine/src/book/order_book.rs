//! Two-sided order book with batch matching
//!
//! Pure data structure: single-threaded, no synchronization of its own.
//! All mutation reaches it through the engine's consumer thread.

use tracing::{debug, error};
use types::errors::MatchError;
use types::numeric::Price;
use types::order::{Order, Side};
use types::trade::Trade;

use super::ask_book::AskBook;
use super::bid_book::BidBook;
use crate::config::EngineConfig;
use crate::matching::executor::MatchExecutor;

/// Order book for a single instrument
///
/// Matching repeatedly pairs the best bid with the best ask until the
/// market no longer crosses. Trades print at the price of the resting ask
/// at the head of the book. Note that this holds even when the buy order
/// rested first; an engine pricing at the maker's price would use the
/// price of whichever order arrived earlier.
#[derive(Debug)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
    executor: MatchExecutor,
    trade_buffer_capacity: usize,
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new() -> Self {
        Self::with_trade_capacity(EngineConfig::default().trade_buffer_capacity)
    }

    /// Create a new empty order book with a pre-sized trade batch buffer
    pub fn with_trade_capacity(trade_buffer_capacity: usize) -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            executor: MatchExecutor::new(0),
            trade_buffer_capacity,
        }
    }

    /// Append an order to the tail of its side's queue at its price.
    /// No matching is performed.
    pub fn add_order(&mut self, order: Order) {
        debug!(
            order_id = %order.order_id,
            side = ?order.side,
            price = %order.price,
            quantity = %order.quantity,
            "order added to book"
        );

        match order.side {
            Side::BUY => self.bids.insert(order),
            Side::SELL => self.asks.insert(order),
        }
    }

    /// Match crossing orders and return the trades produced, in order.
    ///
    /// Afterwards either one half-book is empty or the best bid is strictly
    /// below the best ask. An internal invariant violation aborts the batch;
    /// trades already produced are still returned.
    pub fn match_orders(&mut self) -> Vec<Trade> {
        let mut trades = Vec::with_capacity(self.trade_buffer_capacity);

        loop {
            let (bid_price, ask_price) =
                match (self.bids.best_bid_price(), self.asks.best_ask_price()) {
                    (Some(bid), Some(ask)) => (bid, ask),
                    _ => break,
                };

            // A bid at or above the best ask crosses; below it, nothing
            // left to match
            if bid_price < ask_price {
                break;
            }

            match self.cross_best_levels(bid_price, ask_price) {
                Ok(trade) => trades.push(trade),
                Err(err) => {
                    error!(%err, "matching batch aborted");
                    break;
                }
            }
        }

        trades
    }

    /// Execute one trade between the heads of the two best levels.
    ///
    /// The trade prints at the ask level's price for the full overlap of
    /// the two head quantities; each head is decremented, removed when
    /// exhausted, and its level dropped when its queue empties.
    fn cross_best_levels(&mut self, bid_price: Price, ask_price: Price) -> Result<Trade, MatchError> {
        let (buy_id, buy_quantity) = self
            .bids
            .best_order()
            .map(|order| (order.order_id, order.quantity))
            .ok_or(MatchError::EmptyLevel {
                side: Side::BUY,
                price: bid_price,
            })?;

        let (sell_id, sell_quantity) = self
            .asks
            .best_order()
            .map(|order| (order.order_id, order.quantity))
            .ok_or(MatchError::EmptyLevel {
                side: Side::SELL,
                price: ask_price,
            })?;

        let quantity = buy_quantity.min(sell_quantity);
        let trade = self.executor.execute_trade(buy_id, sell_id, ask_price, quantity);

        self.bids.consume_best(bid_price, quantity)?;
        self.asks.consume_best(ask_price, quantity)?;

        Ok(trade)
    }

    /// True iff both half-books contain no resting orders
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Get the best bid as (price, total level quantity)
    pub fn best_bid(&self) -> Option<(Price, u64)> {
        self.bids.best_bid()
    }

    /// Get the best ask as (price, total level quantity)
    pub fn best_ask(&self) -> Option<(Price, u64)> {
        self.asks.best_ask()
    }

    /// Get depth snapshot of the bid side (top N levels, best first)
    pub fn bid_depth(&self, depth: usize) -> Vec<(Price, u64)> {
        self.bids.depth_snapshot(depth)
    }

    /// Get depth snapshot of the ask side (top N levels, best first)
    pub fn ask_depth(&self, depth: usize) -> Vec<(Price, u64)> {
        self.asks.depth_snapshot(depth)
    }

    /// Total number of resting orders on both sides
    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
