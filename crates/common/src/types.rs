//! Core data types flowing through the sweep pipeline.
//!
//! Candidates and results are small immutable values moved between tasks
//! over channels; none of them are shared behind locks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Word/company combination rules used to build the leftmost label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permutation {
    /// `{word}-{company}`
    WordDashCompany,
    /// `{company}-{word}`
    CompanyDashWord,
    /// `{word}{company}`
    WordCompany,
    /// `{company}{word}`
    CompanyWord,
}

impl Permutation {
    /// All templates in generation order.
    pub const ALL: [Permutation; 4] = [
        Permutation::WordDashCompany,
        Permutation::CompanyDashWord,
        Permutation::WordCompany,
        Permutation::CompanyWord,
    ];

    #[must_use]
    pub fn apply(self, word: &str, company: &str) -> String {
        match self {
            Permutation::WordDashCompany => format!("{word}-{company}"),
            Permutation::CompanyDashWord => format!("{company}-{word}"),
            Permutation::WordCompany => format!("{word}{company}"),
            Permutation::CompanyWord => format!("{company}{word}"),
        }
    }
}

/// A single speculative hostname waiting to be probed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub hostname: String,
}

impl Candidate {
    #[inline]
    #[must_use]
    pub fn new<S: Into<String>>(hostname: S) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }

    /// Build `permutation(word, company).suffix`.
    #[must_use]
    pub fn from_parts(word: &str, company: &str, suffix: &str, permutation: Permutation) -> Self {
        let mut hostname = permutation.apply(word, company);
        hostname.push('.');
        hostname.push_str(suffix);
        Self { hostname }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.hostname
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hostname)
    }
}

/// A candidate confirmed live (HTTP 200 or 302).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProbeResult {
    pub hostname: String,
    pub status_code: u16,
}

impl ProbeResult {
    #[inline]
    #[must_use]
    pub fn new<S: Into<String>>(hostname: S, status_code: u16) -> Self {
        Self {
            hostname: hostname.into(),
            status_code,
        }
    }
}

/// Renders the operator-facing line, `[VALID] <hostname> (<status>)`.
impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[VALID] {} ({})", self.hostname, self.status_code)
    }
}

/// Why a probe could not produce a status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeError {
    Timeout,
    Connect(String),
    Transport(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Timeout => f.write_str("timed out"),
            ProbeError::Connect(detail) => write!(f, "connect failed: {detail}"),
            ProbeError::Transport(detail) => write!(f, "transport error: {detail}"),
        }
    }
}

/// Classification of a single probe. Only `Live` leaves the worker pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Live(ProbeResult),
    NotLive(u16),
    Failed(ProbeError),
}

impl ProbeOutcome {
    /// Status codes that count as a live endpoint.
    pub const LIVE_STATUSES: [u16; 2] = [200, 302];

    /// Classify an HTTP status for `hostname`.
    #[must_use]
    pub fn from_status(hostname: &str, status: u16) -> Self {
        if Self::LIVE_STATUSES.contains(&status) {
            ProbeOutcome::Live(ProbeResult::new(hostname, status))
        } else {
            ProbeOutcome::NotLive(status)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, ProbeOutcome::Live(_))
    }

    /// Consume the outcome, keeping only a live result.
    #[inline]
    #[must_use]
    pub fn into_live(self) -> Option<ProbeResult> {
        match self {
            ProbeOutcome::Live(result) => Some(result),
            _ => None,
        }
    }
}

/// End-of-run accounting produced by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub candidates: usize,
    pub probed: usize,
    pub live: usize,
    pub not_live: usize,
    pub failed: usize,
    pub worker_failures: usize,
    pub written: usize,
    pub write_errors: usize,
    pub echo_errors: usize,
    pub elapsed: Duration,
}

impl SweepSummary {
    #[must_use]
    pub fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            candidates: 0,
            probed: 0,
            live: 0,
            not_live: 0,
            failed: 0,
            worker_failures: 0,
            written: 0,
            write_errors: 0,
            echo_errors: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Probes per second over the whole run.
    #[must_use]
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.probed as f64 / secs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_cover_all_four_shapes() {
        let shapes: Vec<String> = Permutation::ALL
            .iter()
            .map(|p| p.apply("admin", "acme"))
            .collect();
        assert_eq!(shapes, vec!["admin-acme", "acme-admin", "adminacme", "acmeadmin"]);
    }

    #[test]
    fn candidate_from_parts_appends_suffix() {
        let c = Candidate::from_parts("dev", "contoso", "blob.core.windows.net", Permutation::CompanyDashWord);
        assert_eq!(c.as_str(), "contoso-dev.blob.core.windows.net");
    }

    #[test]
    fn only_200_and_302_are_live() {
        for status in [200u16, 302] {
            let outcome = ProbeOutcome::from_status("a.example.net", status);
            assert_eq!(outcome.into_live(), Some(ProbeResult::new("a.example.net", status)));
        }
        for status in [201u16, 301, 304, 401, 403, 404, 500, 503] {
            assert_eq!(ProbeOutcome::from_status("a.example.net", status), ProbeOutcome::NotLive(status));
        }
    }

    #[test]
    fn probe_result_line_format() {
        let r = ProbeResult::new("admin-acme.example.net", 200);
        assert_eq!(r.to_string(), "[VALID] admin-acme.example.net (200)");
    }

    #[test]
    fn summary_rate_handles_zero_elapsed() {
        let mut s = SweepSummary::new(Uuid::new_v4());
        assert_eq!(s.rate(), 0.0);
        s.probed = 10;
        s.elapsed = Duration::from_secs(2);
        assert!((s.rate() - 5.0).abs() < f64::EPSILON);
    }
}
