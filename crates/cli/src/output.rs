//! End-of-run summary output

use anyhow::Result;
use std::time::Duration;
use subsweep_common::SweepSummary;

use crate::args::SummaryFormat;

/// Print the run summary in the requested format
pub fn print_summary(summary: &SweepSummary, format: SummaryFormat) -> Result<()> {
    match format {
        SummaryFormat::Json => print_json(summary)?,
        SummaryFormat::Text => print_text(summary),
    }
    Ok(())
}

fn print_text(summary: &SweepSummary) {
    println!("{}", render_text(summary));
}

fn render_text(summary: &SweepSummary) -> String {
    let mut out = format!(
        "[*] Sweep complete: {} of {} candidates probed in {} ({:.1}/s)\n",
        summary.probed,
        summary.candidates,
        format_duration(summary.elapsed),
        summary.rate()
    );
    out.push_str(&format!("[+] Live: {}\n", summary.live));
    out.push_str(&format!("[-] Not live: {}\n", summary.not_live));
    out.push_str(&format!("[-] Unreachable: {}", summary.failed));
    if summary.write_errors > 0 {
        out.push_str(&format!("\n[!] Results not written: {}", summary.write_errors));
    }
    if summary.echo_errors > 0 {
        out.push_str(&format!("\n[!] Results not echoed: {}", summary.echo_errors));
    }
    if summary.worker_failures > 0 {
        out.push_str(&format!("\n[!] Probers crashed: {}", summary.worker_failures));
    }
    out
}

fn print_json(summary: &SweepSummary) -> Result<()> {
    use serde_json::json;

    let output = json!({
        "summary": summary,
        "duration_formatted": format_duration(summary.elapsed),
        "rate_per_second": summary.rate(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Format duration in a human-readable way
fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs == 0 {
        format!("{}ms", millis)
    } else if total_secs < 60 {
        if millis > 0 {
            format!("{}.{:03}s", total_secs, millis)
        } else {
            format!("{}s", total_secs)
        }
    } else {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        if secs > 0 {
            format!("{}m {}s", mins, secs)
        } else {
            format!("{}m", mins)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subsweep_common::SweepSummary;

    fn sample() -> SweepSummary {
        let mut s = SweepSummary::new(Default::default());
        s.candidates = 8;
        s.probed = 8;
        s.live = 1;
        s.not_live = 5;
        s.failed = 2;
        s.written = 1;
        s.elapsed = Duration::from_secs(2);
        s
    }

    #[test]
    fn test_text_summary_lines() {
        let text = render_text(&sample());
        assert!(text.starts_with("[*] Sweep complete: 8 of 8 candidates probed in 2s (4.0/s)"));
        assert!(text.contains("[+] Live: 1"));
        assert!(text.contains("[-] Unreachable: 2"));
        assert!(!text.contains("[!]"));
    }

    #[test]
    fn test_text_summary_flags_write_errors() {
        let mut s = sample();
        s.write_errors = 1;
        assert!(render_text(&s).contains("[!] Results not written: 1"));
    }

    #[test]
    fn test_text_summary_flags_echo_errors() {
        let mut s = sample();
        s.echo_errors = 2;
        let text = render_text(&s);
        assert!(text.contains("[!] Results not echoed: 2"));
        assert!(!text.contains("Results not written"));
    }

    #[test]
    fn test_print_summary_json() {
        assert!(print_summary(&sample(), SummaryFormat::Json).is_ok());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5s");
        assert_eq!(format_duration(Duration::from_millis(5500)), "5.500s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
        assert_eq!(format_duration(Duration::from_secs(120)), "2m");
    }
}
