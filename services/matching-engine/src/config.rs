//! Engine configuration

/// Configuration for the engine and its consumer loop.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Initial capacity of the trade batch returned by each matching pass.
    /// Matching allocates nothing else on the steady-state path.
    pub trade_buffer_capacity: usize,
    /// Name given to the consumer thread.
    pub consumer_thread_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trade_buffer_capacity: 128,
            consumer_thread_name: "matching-engine".to_string(),
        }
    }
}
