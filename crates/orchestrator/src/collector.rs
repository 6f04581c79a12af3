//! Collector - the single owner of the result sink

use std::io::Write;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, error};

use subsweep_common::{ProbeResult, ResultSink};

/// What the collector managed to write.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectorReport {
    pub written: usize,
    pub write_errors: usize,
    pub echo_errors: usize,
}

/// Drain `results` until every sender is gone.
///
/// Each result is appended to `sink` first and then echoed to `console`.
/// Failures on either side are logged and counted; the collector keeps going.
pub(crate) async fn collect<S, W>(
    mut results: Receiver<ProbeResult>,
    mut sink: S,
    mut console: W,
) -> CollectorReport
where
    S: ResultSink,
    W: Write + Send,
{
    let mut report = CollectorReport::default();

    while let Some(result) = results.recv().await {
        match sink.record(&result).await {
            Ok(()) => report.written += 1,
            Err(e) => {
                error!("Failed to record {}: {:#}", result.hostname, e);
                report.write_errors += 1;
            }
        }
        if let Err(e) = writeln!(console, "{result}").and_then(|()| console.flush()) {
            error!("Failed to echo {}: {}", result.hostname, e);
            report.echo_errors += 1;
        }
    }

    if let Err(e) = sink.flush().await {
        error!("Failed to flush result sink: {:#}", e);
    }
    debug!(
        written = report.written,
        write_errors = report.write_errors,
        echo_errors = report.echo_errors,
        "collector drained"
    );
    report
}
