//! Subsweep Common - Shared types and traits
//!
//! This crate provides the candidate/result model, the sweep configuration,
//! the error type and the `Prober` / `ResultSink` seams used across the
//! subsweep workspace.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{SweepConfig, AZURE_SUFFIXES};
pub use error::{SweepError, SweepResult};
pub use traits::{Prober, ResultSink};
pub use types::{
    Candidate, Permutation, ProbeError, ProbeOutcome, ProbeResult, SweepSummary,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
