//! Lazy candidate generation over suffixes × words × permutations.

use std::iter::FusedIterator;

use subsweep_common::{Candidate, Permutation, SweepConfig};

/// Inputs for a sweep's candidate space.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    company: String,
    words: Vec<String>,
    suffixes: Vec<String>,
    permutations: Vec<Permutation>,
}

impl CandidateGenerator {
    pub fn new(
        company: impl Into<String>,
        words: Vec<String>,
        suffixes: Vec<String>,
        permutations: Vec<Permutation>,
    ) -> Self {
        Self {
            company: company.into(),
            words,
            suffixes,
            permutations,
        }
    }

    /// Generator for `config` over an already loaded wordlist.
    pub fn from_config(config: &SweepConfig, words: Vec<String>) -> Self {
        Self::new(
            config.company.clone(),
            words,
            config.base_suffixes.clone(),
            config.permutations.clone(),
        )
    }

    /// Number of candidates `iter()` will yield.
    pub fn count(&self) -> usize {
        self.suffixes.len() * self.words.len() * self.permutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Iterate suffixes outer, words middle, permutations inner.
    pub fn iter(&self) -> Candidates<'_> {
        Candidates {
            generator: self,
            suffix: 0,
            word: 0,
            permutation: 0,
            remaining: self.count(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidateGenerator {
    type Item = Candidate;
    type IntoIter = Candidates<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`CandidateGenerator::iter`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    generator: &'a CandidateGenerator,
    suffix: usize,
    word: usize,
    permutation: usize,
    remaining: usize,
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.remaining == 0 {
            return None;
        }
        let g = self.generator;
        let candidate = Candidate::from_parts(
            &g.words[self.word],
            &g.company,
            &g.suffixes[self.suffix],
            g.permutations[self.permutation],
        );

        self.remaining -= 1;
        self.permutation += 1;
        if self.permutation == g.permutations.len() {
            self.permutation = 0;
            self.word += 1;
            if self.word == g.words.len() {
                self.word = 0;
                self.suffix += 1;
            }
        }
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Candidates<'_> {}
impl FusedIterator for Candidates<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_order_and_hostnames() {
        let gen = CandidateGenerator::new(
            "acme",
            words(&["admin", "test"]),
            vec!["example.net".into()],
            Permutation::ALL.to_vec(),
        );
        let hosts: Vec<String> = gen.iter().map(|c| c.hostname).collect();
        assert_eq!(
            hosts,
            vec![
                "admin-acme.example.net",
                "acme-admin.example.net",
                "adminacme.example.net",
                "acmeadmin.example.net",
                "test-acme.example.net",
                "acme-test.example.net",
                "testacme.example.net",
                "acmetest.example.net",
            ]
        );
    }

    #[test]
    fn test_suffixes_are_outermost() {
        let gen = CandidateGenerator::new(
            "c",
            words(&["a", "b"]),
            vec!["one.net".into(), "two.net".into()],
            vec![Permutation::WordCompany],
        );
        let hosts: Vec<String> = gen.iter().map(|c| c.hostname).collect();
        assert_eq!(hosts, vec!["ac.one.net", "bc.one.net", "ac.two.net", "bc.two.net"]);
    }

    #[test]
    fn test_count_matches_product() {
        let config = SweepConfig::new("acme");
        let gen = CandidateGenerator::from_config(&config, words(&["a", "b", "c"]));
        assert_eq!(gen.count(), 6 * 3 * 4);
        assert_eq!(gen.iter().len(), 72);
        assert_eq!(gen.iter().count(), 72);
    }

    #[test]
    fn test_empty_wordlist_yields_nothing() {
        let gen = CandidateGenerator::from_config(&SweepConfig::new("acme"), Vec::new());
        assert!(gen.is_empty());
        assert_eq!(gen.iter().next(), None);
    }

    #[test]
    fn test_empty_permutations_yield_nothing() {
        let gen = CandidateGenerator::new("acme", words(&["a"]), vec!["x.net".into()], Vec::new());
        assert_eq!(gen.iter().count(), 0);
    }

    #[test]
    fn test_deterministic_across_iterations() {
        let gen = CandidateGenerator::from_config(&SweepConfig::new("acme"), words(&["dev", "qa"]));
        let first: Vec<Candidate> = gen.iter().collect();
        let second: Vec<Candidate> = (&gen).into_iter().collect();
        assert_eq!(first, second);
    }
}
