//! Trade production
//!
//! Mints trade records with a monotonically increasing sequence number,
//! so every trade the book produces over its lifetime is totally ordered.

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::trade::Trade;

/// Match executor for handling trade generation
#[derive(Debug)]
pub struct MatchExecutor {
    sequence_counter: u64,
}

impl MatchExecutor {
    /// Create a new match executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Produce a trade between the resting buy and sell at the heads of
    /// their levels. The quantity is positive by construction.
    pub fn execute_trade(
        &mut self,
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        price: Price,
        quantity: Quantity,
    ) -> Trade {
        let sequence = self.next_sequence();
        Trade::new(sequence, buy_order_id, sell_order_id, price, quantity)
    }
}
