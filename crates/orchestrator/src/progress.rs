//! Progress tracking

use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

use subsweep_common::{ProbeOutcome, SweepSummary};

/// Emit a debug progress line every this many probes.
const REPORT_EVERY: usize = 1000;

/// Lock-free outcome counters shared by every prober.
pub struct ProgressTracker {
    total: AtomicUsize,
    probed: AtomicUsize,
    live: AtomicUsize,
    not_live: AtomicUsize,
    failed: AtomicUsize,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            total: AtomicUsize::new(0),
            probed: AtomicUsize::new(0),
            live: AtomicUsize::new(0),
            not_live: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        }
    }

    /// Expected number of candidates, when known up front.
    pub fn set_total(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
    }

    pub fn record(&self, outcome: &ProbeOutcome) {
        match outcome {
            ProbeOutcome::Live(_) => self.live.fetch_add(1, Ordering::Relaxed),
            ProbeOutcome::NotLive(_) => self.not_live.fetch_add(1, Ordering::Relaxed),
            ProbeOutcome::Failed(_) => self.failed.fetch_add(1, Ordering::Relaxed),
        };
        let probed = self.probed.fetch_add(1, Ordering::Relaxed) + 1;
        if probed % REPORT_EVERY == 0 {
            debug!(
                probed,
                total = self.total.load(Ordering::Relaxed),
                live = self.live.load(Ordering::Relaxed),
                "progress"
            );
        }
    }

    pub fn probed(&self) -> usize {
        self.probed.load(Ordering::Relaxed)
    }

    /// Copy the counters into `summary`.
    pub fn fill(&self, summary: &mut SweepSummary) {
        summary.probed = self.probed.load(Ordering::Relaxed);
        summary.live = self.live.load(Ordering::Relaxed);
        summary.not_live = self.not_live.load(Ordering::Relaxed);
        summary.failed = self.failed.load(Ordering::Relaxed);
    }

    pub fn log_summary(&self) {
        let total = self.total.load(Ordering::Relaxed);
        let probed = self.probed.load(Ordering::Relaxed);

        info!("Sweep Summary:");
        info!("  Candidates: {}", total);
        info!("  Probed: {}", probed);
        info!("  Live: {}", self.live.load(Ordering::Relaxed));
        info!("  Not live: {}", self.not_live.load(Ordering::Relaxed));
        info!("  Probe errors: {}", self.failed.load(Ordering::Relaxed));
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
