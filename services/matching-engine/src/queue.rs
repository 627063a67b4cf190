//! Order submission queue
//!
//! An unbounded multi-producer, single-consumer FIFO with cooperative
//! shutdown. Its internal mutex is the serialization point whose order is
//! the authoritative "time" for price-time priority: submissions from one
//! producer keep program order, submissions from different producers are
//! linearized in whatever order they acquire the lock.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use tracing::{info, warn};
use types::order::Order;

#[derive(Debug, Default)]
struct QueueState {
    orders: VecDeque<Order>,
    shutdown: bool,
}

/// Unbounded MPSC order queue with graceful shutdown
///
/// `pop` returns `None` only once the queue is both shut down **and**
/// drained, so no order enqueued before `shutdown` is ever lost.
#[derive(Debug, Default)]
pub struct SubmissionQueue {
    state: Mutex<QueueState>,
    available: Condvar,
}

impl SubmissionQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState::default()),
            available: Condvar::new(),
        }
    }

    /// Append an order at the tail and wake one waiting consumer.
    ///
    /// Never blocks on capacity. After `shutdown` the order is dropped
    /// with a warning; submissions racing a shutdown must not crash.
    pub fn push(&self, order: Order) {
        {
            let mut state = self.state.lock().expect("submission queue mutex poisoned");
            if state.shutdown {
                warn!(order_id = %order.order_id, "submission after shutdown dropped");
                return;
            }
            state.orders.push_back(order);
        }
        self.available.notify_one();
    }

    /// Remove the order at the head, blocking while the queue is empty
    /// and not shut down. Returns `None` iff the queue is empty and
    /// shutdown has been signaled.
    pub fn pop(&self) -> Option<Order> {
        let mut state = self.state.lock().expect("submission queue mutex poisoned");
        loop {
            if let Some(order) = state.orders.pop_front() {
                return Some(order);
            }
            if state.shutdown {
                return None;
            }
            state = self
                .available
                .wait(state)
                .expect("submission queue mutex poisoned");
        }
    }

    /// Mark the queue shut down and wake all waiters. Idempotent.
    pub fn shutdown(&self) {
        {
            let mut state = self.state.lock().expect("submission queue mutex poisoned");
            if state.shutdown {
                return;
            }
            state.shutdown = true;
            info!(pending = state.orders.len(), "submission queue shut down");
        }
        self.available.notify_all();
    }

    /// Number of orders currently queued
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .expect("submission queue mutex poisoned")
            .orders
            .len()
    }

    /// Whether the queue is currently empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
