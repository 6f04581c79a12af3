// runner.rs
use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};

use subsweep_candidates::{load_wordlist, CandidateGenerator};
use subsweep_common::{Prober, SweepConfig, SweepSummary};
use subsweep_orchestrator::Orchestrator;
use subsweep_prober::HttpsProber;
use subsweep_storage::AppendFileSink;

/// Run a sweep against live HTTPS endpoints.
pub async fn run_sweep(config: SweepConfig) -> Result<SweepSummary> {
    config.validate()?;
    let prober = HttpsProber::new(config.request_timeout).context("Failed to build HTTP client")?;
    run_sweep_with(config, Arc::new(prober)).await
}

/// Run a sweep with an explicit prober.
///
/// Startup failures (wordlist, output file) are returned before any probe is
/// issued.
pub async fn run_sweep_with(config: SweepConfig, prober: Arc<dyn Prober>) -> Result<SweepSummary> {
    info!("Starting sweep...");
    info!("Company: {}", config.company);
    info!("Wordlist: {}", config.wordlist_path.display());
    info!("Workers: {}", config.worker_count);
    info!("Timeout: {:?}", config.request_timeout);
    info!("Suffixes: {}", config.base_suffixes.join(", "));
    info!("Prober: {}", prober.name());

    let words = load_wordlist(&config.wordlist_path).await?;
    let generator = CandidateGenerator::from_config(&config, words);
    let orchestrator = Orchestrator::new(&config, prober)?;
    let sink = AppendFileSink::open(&config.output_path).await?;

    if let Err(e) = write_progress_line(&mut std::io::stdout().lock(), generator.count()) {
        warn!("Failed to print progress line: {}", e);
    }
    orchestrator.run(&generator, sink).await
}

/// Console line announcing how many candidates are about to be probed.
pub fn write_progress_line<W: Write>(out: &mut W, count: usize) -> std::io::Result<()> {
    writeln!(out, "[*] Testing {} subdomains...", count)?;
    out.flush()
}
