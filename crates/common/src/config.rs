//! Sweep configuration.
//!
//! Built once at startup and handed to the pipeline by value; nothing in the
//! workspace reads process-wide settings after that.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{SweepError, SweepResult};
use crate::types::Permutation;

pub const DEFAULT_WORDLIST: &str =
    "/usr/share/seclists/Discovery/DNS/subdomains-top1million-110000.txt";
pub const DEFAULT_OUTPUT: &str = "valid_subdomains.txt";
pub const DEFAULT_WORKERS: usize = 50;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_WORK_QUEUE: usize = 1000;
pub const DEFAULT_RESULT_QUEUE: usize = 100;

/// Azure service domains probed by default.
pub const AZURE_SUFFIXES: [&str; 6] = [
    "azurewebsites.net",
    "blob.core.windows.net",
    "queue.core.windows.net",
    "file.core.windows.net",
    "table.core.windows.net",
    "scm.azurewebsites.net",
];

#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub company: String,
    pub wordlist_path: PathBuf,
    pub output_path: PathBuf,
    pub worker_count: usize,
    pub request_timeout: Duration,
    pub base_suffixes: Vec<String>,
    pub permutations: Vec<Permutation>,
    /// Tuning only: bounds producer lead over the probers.
    pub work_queue_capacity: usize,
    pub result_queue_capacity: usize,
}

impl SweepConfig {
    #[must_use]
    pub fn new<S: Into<String>>(company: S) -> Self {
        Self {
            company: company.into(),
            wordlist_path: PathBuf::from(DEFAULT_WORDLIST),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            worker_count: DEFAULT_WORKERS,
            request_timeout: DEFAULT_TIMEOUT,
            base_suffixes: AZURE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            permutations: Permutation::ALL.to_vec(),
            work_queue_capacity: DEFAULT_WORK_QUEUE,
            result_queue_capacity: DEFAULT_RESULT_QUEUE,
        }
    }

    #[must_use]
    pub fn with_wordlist<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.wordlist_path = path.into();
        self
    }

    #[must_use]
    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.worker_count = workers;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_permutations(mut self, permutations: Vec<Permutation>) -> Self {
        self.permutations = permutations;
        self
    }

    #[must_use]
    pub fn with_queue_capacities(mut self, work: usize, results: usize) -> Self {
        self.work_queue_capacity = work;
        self.result_queue_capacity = results;
        self
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> SweepResult<()> {
        if self.company.trim().is_empty() {
            return Err(SweepError::Config("company name must not be empty".into()));
        }
        if self.worker_count == 0 {
            return Err(SweepError::Config("worker count must be at least 1".into()));
        }
        if self.request_timeout.is_zero() {
            return Err(SweepError::Config("request timeout must be non-zero".into()));
        }
        if self.work_queue_capacity == 0 || self.result_queue_capacity == 0 {
            return Err(SweepError::Config("queue capacities must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_azure_profile() {
        let cfg = SweepConfig::new("acme");
        assert_eq!(cfg.worker_count, 50);
        assert_eq!(cfg.request_timeout, Duration::from_secs(5));
        assert_eq!(cfg.base_suffixes.len(), 6);
        assert_eq!(cfg.permutations.len(), 4);
        assert_eq!(cfg.output_path, PathBuf::from("valid_subdomains.txt"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_workers() {
        let cfg = SweepConfig::new("acme").with_workers(0);
        assert!(matches!(cfg.validate(), Err(SweepError::Config(_))));
    }

    #[test]
    fn validate_rejects_blank_company_and_zero_capacity() {
        assert!(SweepConfig::new("  ").validate().is_err());
        assert!(SweepConfig::new("acme").with_queue_capacities(0, 10).validate().is_err());
        assert!(SweepConfig::new("acme").with_timeout(Duration::ZERO).validate().is_err());
    }

    #[test]
    fn suffix_override_keeps_order() {
        let cfg = SweepConfig::new("acme").with_suffixes(["b.net", "a.net"]);
        assert_eq!(cfg.base_suffixes, vec!["b.net", "a.net"]);
    }
}
