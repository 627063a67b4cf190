//! Concurrent engine runtime
//!
//! Owns the submission queue and the single consumer thread through which
//! every book mutation flows. The book itself is not thread-safe and does
//! not need to be: producers only ever touch the queue, and the queue's
//! linearization order is the matching order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};
use types::errors::EngineError;
use types::order::Order;

use crate::config::EngineConfig;
use crate::engine::MatchingEngine;
use crate::queue::SubmissionQueue;
use crate::sink::TradeSink;

/// Concurrent matching engine with a dedicated consumer thread
///
/// Producers call [`submit`](Engine::submit) from any thread; the consumer
/// pops orders one at a time, hands each to the matching engine, and
/// publishes resulting trades to the injected sink. [`stop`](Engine::stop)
/// drains every order enqueued before it and joins the consumer; dropping
/// the engine stops it.
pub struct Engine {
    config: EngineConfig,
    queue: Arc<SubmissionQueue>,
    running: Arc<AtomicBool>,
    started: bool,
    consumer: Option<JoinHandle<()>>,
    // Held only until start() hands it to the consumer thread; the mutex
    // keeps the engine shareable across producer threads
    sink: Mutex<Option<Box<dyn TradeSink>>>,
}

impl Engine {
    /// Create an engine publishing trades to `sink`, with defaults
    pub fn new(sink: impl TradeSink + 'static) -> Self {
        Self::with_config(sink, EngineConfig::default())
    }

    /// Create an engine publishing trades to `sink`
    pub fn with_config(sink: impl TradeSink + 'static, config: EngineConfig) -> Self {
        Self {
            config,
            queue: Arc::new(SubmissionQueue::new()),
            running: Arc::new(AtomicBool::new(false)),
            started: false,
            consumer: None,
            sink: Mutex::new(Some(Box::new(sink))),
        }
    }

    /// Spawn the consumer thread and begin accepting submissions.
    ///
    /// # Panics
    /// Panics on a second call; starting twice is a programmer error.
    pub fn start(&mut self) {
        assert!(!self.started, "Engine::start called more than once");
        self.started = true;

        let queue = Arc::clone(&self.queue);
        let engine = MatchingEngine::with_config(&self.config);
        let sink = self
            .sink
            .lock()
            .expect("engine sink mutex poisoned")
            .take()
            .expect("trade sink present until start");

        let consumer = thread::Builder::new()
            .name(self.config.consumer_thread_name.clone())
            .spawn(move || engine_loop(queue, engine, sink))
            .expect("failed to spawn engine consumer thread");

        self.consumer = Some(consumer);
        self.running.store(true, Ordering::SeqCst);
        info!(thread = %self.config.consumer_thread_name, "engine started");
    }

    /// Enqueue an order for matching.
    ///
    /// Rejected once the engine has stopped (or before it started);
    /// otherwise the order is processed even if `stop` is called
    /// immediately afterwards.
    pub fn submit(&self, order: Order) -> Result<(), EngineError> {
        if !self.running.load(Ordering::SeqCst) {
            return Err(EngineError::NotRunning);
        }
        self.queue.push(order);
        Ok(())
    }

    /// Shut the queue down, drain it, and join the consumer thread.
    /// Idempotent: a second call is a no-op.
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }

        self.queue.shutdown();
        if let Some(consumer) = self.consumer.take() {
            if consumer.join().is_err() {
                error!("engine consumer thread panicked");
            }
        }
        info!("engine stopped");
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The consumer loop: pop, submit, poll, publish.
///
/// Exits only when `pop` returns `None`, which the queue guarantees
/// happens after every order enqueued before shutdown has been drained.
fn engine_loop(queue: Arc<SubmissionQueue>, mut engine: MatchingEngine, mut sink: Box<dyn TradeSink>) {
    info!("engine loop started");

    while let Some(order) = queue.pop() {
        debug!(
            order_id = %order.order_id,
            side = ?order.side,
            "processing submission"
        );
        engine.submit(order);
        for trade in engine.poll_trades() {
            sink.accept(trade);
        }
    }

    info!(
        resting_orders = engine.order_count(),
        "engine loop drained and exited"
    );
}
