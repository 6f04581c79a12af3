//! In-memory sink

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use subsweep_common::{ProbeResult, ResultSink};

/// Keeps recorded results in a shared vector. Clones share the same storage,
/// so a caller can hand one clone to the collector and inspect another.
#[derive(Clone, Default)]
pub struct MemorySink {
    results: Arc<Mutex<Vec<ProbeResult>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in arrival order.
    pub async fn results(&self) -> Vec<ProbeResult> {
        self.results.lock().await.clone()
    }

    /// Recorded results rendered as log lines.
    pub async fn lines(&self) -> Vec<String> {
        self.results
            .lock()
            .await
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn record(&mut self, result: &ProbeResult) -> Result<()> {
        self.results.lock().await.push(result.clone());
        Ok(())
    }
}
