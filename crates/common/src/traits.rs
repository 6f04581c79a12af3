//! Seams between the pipeline and its collaborators.

use crate::types::{Candidate, ProbeOutcome, ProbeResult};
use anyhow::Result;
use async_trait::async_trait;

/// Probes one candidate and classifies the endpoint.
///
/// Implementations never fail as a whole: transport problems are part of
/// the returned outcome.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, candidate: &Candidate) -> ProbeOutcome;

    /// Prober name/identifier
    fn name(&self) -> &str;
}

/// Durable destination for live results. Owned by exactly one collector.
#[async_trait]
pub trait ResultSink: Send {
    /// Append one result as a single write.
    async fn record(&mut self, result: &ProbeResult) -> Result<()>;

    /// Flush buffered data before the sink is dropped.
    async fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysLive;

    #[async_trait]
    impl Prober for AlwaysLive {
        async fn probe(&self, candidate: &Candidate) -> ProbeOutcome {
            ProbeOutcome::from_status(candidate.as_str(), 200)
        }

        fn name(&self) -> &str {
            "always-live"
        }
    }

    struct CountingSink(usize);

    #[async_trait]
    impl ResultSink for CountingSink {
        async fn record(&mut self, _result: &ProbeResult) -> Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_prober_trait() {
        let prober = AlwaysLive;
        let outcome = prober.probe(&Candidate::new("x.example.net")).await;
        assert!(outcome.is_live());
    }

    #[tokio::test]
    async fn test_sink_trait_default_flush() {
        let mut sink = CountingSink(0);
        sink.record(&ProbeResult::new("x.example.net", 302)).await.unwrap();
        sink.flush().await.unwrap();
        assert_eq!(sink.0, 1);
    }
}
