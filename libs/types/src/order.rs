//! Order submission types
//!
//! An order is an immutable submission record; only the resting copy's
//! quantity changes, decremented as partial fills consume it.

use crate::errors::OrderError;
use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// A limit order submission
///
/// `timestamp` is supplied by the caller and never interpreted by matching;
/// arrival order at the queue's serialization point is the authoritative
/// time for price-time priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub timestamp: u64,
}

impl Order {
    /// Create a new order from already-validated parts
    pub fn new(order_id: OrderId, side: Side, price: Price, quantity: Quantity, timestamp: u64) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
            timestamp,
        }
    }

    /// Validate raw submission values and build an order
    ///
    /// This is the submission boundary for caller contract checks: a
    /// non-positive price or zero quantity is rejected here, never
    /// silently accepted downstream.
    pub fn try_new(
        order_id: OrderId,
        side: Side,
        price: Decimal,
        quantity: u32,
        timestamp: u64,
    ) -> Result<Self, OrderError> {
        let price = Price::try_new(price)
            .ok_or_else(|| OrderError::InvalidPrice(price.to_string()))?;
        let quantity = Quantity::try_new(quantity)
            .ok_or_else(|| OrderError::InvalidQuantity(quantity.to_string()))?;
        Ok(Self::new(order_id, side, price, quantity, timestamp))
    }

    /// Whether this is a buy order
    pub fn is_buy(&self) -> bool {
        self.side == Side::BUY
    }

    /// Consume part of the remaining quantity on a partial fill
    ///
    /// A full fill removes the order from its queue instead, so the
    /// remainder here is always positive.
    ///
    /// # Panics
    /// Panics if the fill would exhaust or exceed the remaining quantity
    pub fn fill(&mut self, quantity: Quantity) {
        match self.quantity.checked_sub(quantity) {
            Some(remaining) => self.quantity = remaining,
            None => panic!(
                "fill of {} exhausts remaining quantity {} of order {}",
                quantity, self.quantity, self.order_id
            ),
        }
    }
}
