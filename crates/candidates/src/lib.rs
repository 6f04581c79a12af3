//! Candidate Generator - wordlist loading and hostname permutation
//!
//! Turns a company name, a wordlist, a list of base suffixes and the
//! permutation templates into a lazy, deterministic sequence of hostnames.

mod generator;
mod wordlist;

pub use generator::{CandidateGenerator, Candidates};
pub use wordlist::{load_wordlist, parse_wordlist};
