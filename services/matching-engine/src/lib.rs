//! Matching Engine Service
//!
//! Price-time priority order matching for a single instrument: a two-sided
//! limit order book, a batch matching algorithm, and a concurrency envelope
//! that serializes concurrent submitters into one deterministic matching
//! stream with graceful shutdown.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Conservation of quantity across every trade
//! - After matching, no crossed market remains
//!
//! All book mutation happens on the single consumer thread owned by
//! [`Engine`]; producers only ever touch the [`SubmissionQueue`].

pub mod book;
pub mod config;
pub mod engine;
pub mod matching;
pub mod queue;
pub mod runtime;
pub mod sink;

pub use book::OrderBook;
pub use config::EngineConfig;
pub use engine::MatchingEngine;
pub use queue::SubmissionQueue;
pub use runtime::Engine;
pub use sink::{CallbackSink, ChannelSink, CollectingSink, LogSink, TradeSink};
