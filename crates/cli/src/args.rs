use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use subsweep_common::config::{DEFAULT_OUTPUT, DEFAULT_WORDLIST, DEFAULT_WORKERS};
use subsweep_common::SweepConfig;

#[derive(Parser, Debug)]
#[command(name = "subsweep")]
#[command(version = "0.1.0")]
#[command(about = "Enumerate and probe cloud-hosted subdomains for a company name", long_about = None)]
pub struct Cli {
    /// Company name combined with every wordlist entry. Example: contoso
    pub company: String,

    /// Newline-delimited wordlist
    #[arg(short, long, default_value = DEFAULT_WORDLIST)]
    pub wordlist: PathBuf,

    /// Number of concurrent probers
    #[arg(short = 'c', long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "5")]
    pub timeout: u64,

    /// Append-only file receiving live results
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Base suffixes to probe instead of the Azure set. Example: azurewebsites.net,blob.core.windows.net
    #[arg(long, value_delimiter = ',')]
    pub suffixes: Vec<String>,

    /// End-of-run summary format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub summary: SummaryFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
}

/// Process exit code for a failed parse: help and version succeed, every
/// usage error exits 1 rather than clap's 2.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

impl Cli {
    /// Sweep configuration described by these arguments.
    pub fn to_config(&self) -> SweepConfig {
        let mut config = SweepConfig::new(self.company.clone())
            .with_wordlist(self.wordlist.clone())
            .with_output(self.output.clone())
            .with_workers(self.workers)
            .with_timeout(Duration::from_secs(self.timeout));

        let suffixes: Vec<&str> = self
            .suffixes
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if !suffixes.is_empty() {
            config = config.with_suffixes(suffixes);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_only_uses_defaults() {
        let cli = Cli::try_parse_from(["subsweep", "acme"]).unwrap();
        let config = cli.to_config();
        assert_eq!(config.company, "acme");
        assert_eq!(config.worker_count, 50);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.base_suffixes.len(), 6);
        assert_eq!(config.output_path, PathBuf::from("valid_subdomains.txt"));
    }

    #[test]
    fn test_missing_company_is_usage_error() {
        let err = Cli::try_parse_from(["subsweep"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_positional_is_usage_error() {
        let err = Cli::try_parse_from(["subsweep", "acme", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "subsweep",
            "acme",
            "-w",
            "/tmp/words.txt",
            "-c",
            "8",
            "--timeout",
            "2",
            "--suffixes",
            "a.net, b.net,",
            "--summary",
            "json",
        ])
        .unwrap();
        let config = cli.to_config();
        assert_eq!(config.wordlist_path, PathBuf::from("/tmp/words.txt"));
        assert_eq!(config.worker_count, 8);
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.base_suffixes, vec!["a.net", "b.net"]);
        assert_eq!(cli.summary, SummaryFormat::Json);
    }

    #[test]
    fn test_unknown_summary_format_rejected() {
        let err = Cli::try_parse_from(["subsweep", "acme", "--summary", "xml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_usage_errors_exit_one() {
        let missing = Cli::try_parse_from(["subsweep"]).unwrap_err();
        assert_eq!(exit_code(&missing), 1);
        let extra = Cli::try_parse_from(["subsweep", "acme", "extra"]).unwrap_err();
        assert_eq!(exit_code(&extra), 1);
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let help = Cli::try_parse_from(["subsweep", "--help"]).unwrap_err();
        assert_eq!(exit_code(&help), 0);
        let version = Cli::try_parse_from(["subsweep", "--version"]).unwrap_err();
        assert_eq!(exit_code(&version), 0);
    }
}
