// crates/orchestrator/src/orchestrator.rs
//! Orchestrator - producer, prober pool and collector wiring

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use subsweep_common::{Candidate, ProbeResult, Prober, ResultSink, SweepConfig, SweepResult, SweepSummary};

use crate::collector::collect;
use crate::progress::ProgressTracker;

/// Drives one sweep: candidates flow through a bounded work queue to a fixed
/// pool of probers, and live results flow through a bounded result queue to
/// a single collector.
pub struct Orchestrator {
    prober: Arc<dyn Prober>,
    concurrency: usize,
    work_capacity: usize,
    result_capacity: usize,
}

impl Orchestrator {
    /// Validate `config` and capture the pool and queue sizes from it.
    pub fn new(config: &SweepConfig, prober: Arc<dyn Prober>) -> SweepResult<Self> {
        config.validate()?;
        Ok(Self {
            prober,
            concurrency: config.worker_count,
            work_capacity: config.work_queue_capacity,
            result_capacity: config.result_queue_capacity,
        })
    }

    /// Probe every candidate and record every live result, then shut down.
    ///
    /// Shutdown is ordered: the work queue closes after the last candidate,
    /// every prober drains it and exits, and only then does the result queue
    /// close and the collector finish. Live results are echoed to stdout.
    pub async fn run<I, S>(&self, candidates: I, sink: S) -> Result<SweepSummary>
    where
        I: IntoIterator<Item = Candidate>,
        S: ResultSink + 'static,
    {
        self.run_with_console(candidates, sink, std::io::stdout()).await
    }

    /// Same as [`Orchestrator::run`], echoing live results to `console`.
    pub async fn run_with_console<I, S, W>(&self, candidates: I, sink: S, console: W) -> Result<SweepSummary>
    where
        I: IntoIterator<Item = Candidate>,
        S: ResultSink + 'static,
        W: Write + Send + 'static,
    {
        let mut summary = SweepSummary::new(Uuid::new_v4());
        let span = info_span!("sweep", run_id = %summary.run_id);
        self.execute(candidates.into_iter(), sink, console, &mut summary)
            .instrument(span)
            .await?;
        Ok(summary)
    }

    async fn execute<I, S, W>(&self, candidates: I, sink: S, console: W, summary: &mut SweepSummary) -> Result<()>
    where
        I: Iterator<Item = Candidate>,
        S: ResultSink + 'static,
        W: Write + Send + 'static,
    {
        let started = Instant::now();
        let progress = Arc::new(ProgressTracker::new());
        progress.set_total(candidates.size_hint().0);

        let (work_tx, work_rx) = mpsc::channel::<Candidate>(self.work_capacity);
        let work_rx = Arc::new(Mutex::new(work_rx));
        let (result_tx, result_rx) = mpsc::channel::<ProbeResult>(self.result_capacity);

        let collector = tokio::spawn(collect(result_rx, sink, console).in_current_span());

        // Every prober is running before the first candidate is generated.
        let workers: Vec<JoinHandle<()>> = (0..self.concurrency)
            .map(|id| {
                tokio::spawn(
                    probe_loop(
                        id,
                        work_rx.clone(),
                        result_tx.clone(),
                        self.prober.clone(),
                        progress.clone(),
                    )
                    .in_current_span(),
                )
            })
            .collect();
        // Only the probers hold queue ends from here on.
        drop(work_rx);
        drop(result_tx);
        info!("Started {} probers", self.concurrency);

        let mut enqueued = 0usize;
        for candidate in candidates {
            if work_tx.send(candidate).await.is_err() {
                warn!("All probers exited; stopped after {} candidates", enqueued);
                break;
            }
            enqueued += 1;
        }
        drop(work_tx);
        summary.candidates = enqueued;
        progress.set_total(enqueued);
        debug!(enqueued, "work queue closed");

        for (id, worker) in workers.into_iter().enumerate() {
            if let Err(e) = worker.await {
                error!(worker = id, "Prober task failed: {}", e);
                summary.worker_failures += 1;
            }
        }
        debug!(probed = progress.probed(), "all probers exited");

        let report = collector.await.context("Collector task failed")?;
        summary.written = report.written;
        summary.write_errors = report.write_errors;
        summary.echo_errors = report.echo_errors;

        progress.fill(summary);
        summary.elapsed = started.elapsed();
        progress.log_summary();
        Ok(())
    }
}

/// One prober: take a candidate, probe it, forward a live result, repeat
/// until the work queue is closed and empty.
async fn probe_loop(
    id: usize,
    queue: Arc<Mutex<Receiver<Candidate>>>,
    results: Sender<ProbeResult>,
    prober: Arc<dyn Prober>,
    progress: Arc<ProgressTracker>,
) {
    loop {
        let next = {
            let mut rx = queue.lock().await;
            rx.recv().await
        };
        let candidate = match next {
            Some(c) => c,
            None => break,
        };

        let outcome = prober.probe(&candidate).await;
        progress.record(&outcome);
        if let Some(result) = outcome.into_live() {
            if results.send(result).await.is_err() {
                warn!(worker = id, "Result queue closed early; prober exiting");
                break;
            }
        }
    }
    debug!(worker = id, "prober exiting");
}
