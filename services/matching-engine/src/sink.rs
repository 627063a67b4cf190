//! Trade delivery sinks
//!
//! The engine loop publishes every trade to an injected sink, on the
//! consumer thread, in the order trades were produced. A sink is either a
//! wrapped callback or one of the channel/log/collecting implementations.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use tracing::{error, info};
use types::trade::Trade;

/// Destination for executed trades
///
/// `accept` is invoked only on the engine's consumer thread, so
/// implementations need no synchronization of their own.
pub trait TradeSink: Send {
    fn accept(&mut self, trade: Trade);
}

/// Sink invoking a callback for each trade
pub struct CallbackSink<F> {
    callback: F,
}

impl<F> CallbackSink<F>
where
    F: FnMut(Trade) + Send,
{
    /// Wrap a callback as a sink
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> TradeSink for CallbackSink<F>
where
    F: FnMut(Trade) + Send,
{
    fn accept(&mut self, trade: Trade) {
        (self.callback)(trade)
    }
}

/// Sink forwarding trades over an mpsc channel
///
/// A send failure means the receiving side hung up; the trade is logged
/// and dropped rather than crashing the engine loop.
#[derive(Debug)]
pub struct ChannelSink {
    sender: mpsc::Sender<Trade>,
}

impl ChannelSink {
    /// Create a sink forwarding to `sender`
    pub fn new(sender: mpsc::Sender<Trade>) -> Self {
        Self { sender }
    }
}

impl TradeSink for ChannelSink {
    fn accept(&mut self, trade: Trade) {
        if let Err(err) = self.sender.send(trade) {
            error!(sequence = err.0.sequence, "trade receiver disconnected, trade dropped");
        }
    }
}

/// Sink logging each trade as a structured event
#[derive(Debug, Default)]
pub struct LogSink;

impl TradeSink for LogSink {
    fn accept(&mut self, trade: Trade) {
        info!(
            sequence = trade.sequence,
            buy_order_id = %trade.buy_order_id,
            sell_order_id = %trade.sell_order_id,
            price = %trade.price,
            quantity = %trade.quantity,
            "trade executed"
        );
    }
}

/// Sink collecting trades into shared memory, for tests and embedders
/// that want to inspect the full trade history after a run
#[derive(Debug, Default)]
pub struct CollectingSink {
    trades: Arc<Mutex<Vec<Trade>>>,
}

impl CollectingSink {
    /// Create an empty collecting sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for reading the collected trades from another thread
    pub fn handle(&self) -> Arc<Mutex<Vec<Trade>>> {
        Arc::clone(&self.trades)
    }
}

impl TradeSink for CollectingSink {
    fn accept(&mut self, trade: Trade) {
        self.trades
            .lock()
            .expect("collecting sink mutex poisoned")
            .push(trade);
    }
}
