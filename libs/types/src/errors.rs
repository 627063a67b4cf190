//! Error types for the matching engine
//!
//! Three classes of conditions, none retried internally: caller contract
//! violations rejected at the submission boundary, internal invariant
//! violations fatal to the current matching batch, and lifecycle misuse.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// The engine is not accepting submissions (stopped, or never started)
    #[error("Engine is not running")]
    NotRunning,
}

/// Caller contract violations, rejected at the submission boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}

/// Internal invariant violations observed during matching
///
/// These indicate a bug, not a recoverable condition. The current matching
/// batch aborts; trades already produced remain valid and are surfaced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("empty order queue at live {side:?} level {price}")]
    EmptyLevel { side: Side, price: Price },

    #[error("fill of {fill} overruns remaining quantity {remaining} of resting order {order_id}")]
    OverFill {
        order_id: OrderId,
        fill: Quantity,
        remaining: Quantity,
    },
}
