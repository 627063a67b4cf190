//! Unique identifier types for engine entities
//!
//! Order identifiers are supplied by the caller at submission time. The
//! engine assumes they are unique and does not enforce it; a duplicate id
//! is accepted silently and only muddies the resulting trade audit trail.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order
///
/// Caller-assigned. The engine never interprets the value beyond carrying
/// it into the trades the order participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create an OrderId from a raw caller-supplied value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
