//! Append-only text log of live results

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use subsweep_common::{ProbeResult, ResultSink, SweepError, SweepResult};

/// Appends `[VALID] <hostname> (<status>)` lines to a file.
///
/// The file is opened once in create+append mode and never truncated. The
/// handle is released when the sink is dropped.
pub struct AppendFileSink {
    path: PathBuf,
    file: File,
}

impl AppendFileSink {
    pub async fn open(path: &Path) -> SweepResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|source| SweepError::Output {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Appending results to {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResultSink for AppendFileSink {
    async fn record(&mut self, result: &ProbeResult) -> Result<()> {
        let line = format!("{result}\n");
        self.file
            .write_all(line.as_bytes())
            .await
            .with_context(|| format!("write to {}", self.path.display()))?;
        // tokio buffers writes on a blocking thread; flush surfaces errors now
        self.file
            .flush()
            .await
            .with_context(|| format!("flush {}", self.path.display()))
    }

    async fn flush(&mut self) -> Result<()> {
        self.file
            .sync_data()
            .await
            .with_context(|| format!("sync {}", self.path.display()))
    }
}
