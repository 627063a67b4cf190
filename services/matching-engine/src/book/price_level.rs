//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at a specific price point,
//! in strict FIFO order to enforce time priority. The level is the sole
//! owner of its orders; no reference to a resting order escapes it, so
//! quantities can be decremented in place without aliasing concerns.

use std::collections::VecDeque;
use types::errors::MatchError;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

/// A price level containing resting orders at a specific price
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    /// Queue of orders at this price level (FIFO order)
    orders: VecDeque<Order>,
    /// Total quantity available at this level
    total_quantity: u64,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: 0,
        }
    }

    /// Append an order at the back of the queue (time priority)
    pub fn push_back(&mut self, order: Order) {
        self.total_quantity += u64::from(order.quantity.get());
        self.orders.push_back(order);
    }

    /// The order at the head of the queue, next in line to match
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Consume `quantity` from the head order.
    ///
    /// A fill that exactly exhausts the head removes it from the queue;
    /// a smaller fill decrements it in place. `side` and `price` are only
    /// used to label diagnostics.
    pub fn consume_front(
        &mut self,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<(), MatchError> {
        let Some(front) = self.orders.front_mut() else {
            return Err(MatchError::EmptyLevel { side, price });
        };

        if quantity == front.quantity {
            self.orders.pop_front();
        } else if quantity > front.quantity {
            return Err(MatchError::OverFill {
                order_id: front.order_id,
                fill: quantity,
                remaining: front.quantity,
            });
        } else {
            front.fill(quantity);
        }

        self.total_quantity -= u64::from(quantity.get());
        Ok(())
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity at this price level
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;

    fn order(id: u64, quantity: u32) -> Order {
        Order::new(
            OrderId::new(id),
            Side::BUY,
            Price::from_u64(100),
            Quantity::new(quantity),
            0,
        )
    }

    #[test]
    fn test_push_back() {
        let mut level = PriceLevel::new();
        level.push_back(order(1, 10));

        assert_eq!(level.order_count(), 1);
        assert_eq!(level.total_quantity(), 10);
        assert!(!level.is_empty());
    }

    #[test]
    fn test_fifo_order() {
        let mut level = PriceLevel::new();
        level.push_back(order(1, 10));
        level.push_back(order(2, 20));
        level.push_back(order(3, 30));

        assert_eq!(level.front().unwrap().order_id, OrderId::new(1));
        assert_eq!(level.total_quantity(), 60);
    }

    #[test]
    fn test_consume_front_partial() {
        let mut level = PriceLevel::new();
        level.push_back(order(1, 10));

        level
            .consume_front(Side::BUY, Price::from_u64(100), Quantity::new(4))
            .unwrap();

        let front = level.front().unwrap();
        assert_eq!(front.order_id, OrderId::new(1));
        assert_eq!(front.quantity, Quantity::new(6));
        assert_eq!(level.total_quantity(), 6);
    }

    #[test]
    fn test_consume_front_exact_removes_order() {
        let mut level = PriceLevel::new();
        level.push_back(order(1, 10));
        level.push_back(order(2, 5));

        level
            .consume_front(Side::BUY, Price::from_u64(100), Quantity::new(10))
            .unwrap();

        assert_eq!(level.front().unwrap().order_id, OrderId::new(2));
        assert_eq!(level.total_quantity(), 5);
    }

    #[test]
    fn test_consume_front_empty_level() {
        let mut level = PriceLevel::new();
        let result = level.consume_front(Side::BUY, Price::from_u64(100), Quantity::new(1));
        assert!(matches!(result, Err(MatchError::EmptyLevel { .. })));
    }

    #[test]
    fn test_consume_front_overfill() {
        let mut level = PriceLevel::new();
        level.push_back(order(1, 10));

        let result = level.consume_front(Side::BUY, Price::from_u64(100), Quantity::new(11));
        assert!(matches!(result, Err(MatchError::OverFill { .. })));
        // Level untouched by the rejected fill
        assert_eq!(level.total_quantity(), 10);
    }
}
