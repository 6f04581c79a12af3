//! Wordlist loading

use std::path::Path;
use tracing::debug;

use subsweep_common::{SweepError, SweepResult};

/// Split wordlist text into words.
///
/// Lines end at `\n` with an optional `\r` before it. Empty lines are
/// skipped; everything else, surrounding whitespace included, is a word.
pub fn parse_wordlist(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Read and parse the wordlist at `path`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected so a
/// single odd entry does not abort the sweep.
pub async fn load_wordlist(path: &Path) -> SweepResult<Vec<String>> {
    let bytes = tokio::fs::read(path).await.map_err(|source| SweepError::Wordlist {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_wordlist(&String::from_utf8_lossy(&bytes));
    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
