//! Trade execution types

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An executed match between a resting buy and a resting sell
///
/// `sequence` is assigned by the book, monotonically increasing over its
/// lifetime; trades within one matching batch carry consecutive sequences
/// in the order they were produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub sequence: u64,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    /// Create a new trade record
    pub fn new(
        sequence: u64,
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            sequence,
            buy_order_id,
            sell_order_id,
            price,
            quantity,
        }
    }

    /// Calculate trade value (price × quantity)
    pub fn trade_value(&self) -> Decimal {
        self.price.as_decimal() * Decimal::from(self.quantity.get())
    }
}
