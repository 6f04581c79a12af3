//! HTTPS prober - one GET per candidate, classified into a `ProbeOutcome`

mod https;

pub use https::{HttpsProber, HttpsProberBuilder};
