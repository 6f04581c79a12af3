//! Orchestrator - bounded work distribution, prober pool and result collection

mod collector;
mod orchestrator;
mod progress;

pub use collector::CollectorReport;
pub use orchestrator::Orchestrator;
pub use progress::ProgressTracker;
