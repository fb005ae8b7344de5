//! Output formatting for CLI commands.

use std::io::Write;

use crate::benchmark::BenchmarkReport;
use crate::cli::args::{OutputFormat, WordbenchArgs};
use crate::error::Result;

/// Write `report` to `out` in the format selected by `args`.
pub fn output_report<W: Write>(
    out: &mut W,
    report: &BenchmarkReport,
    args: &WordbenchArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(out, report, args),
        OutputFormat::Json => output_json(out, report, args),
    }
}

/// Output in human-readable format.
///
/// The leading newline ends the in-place progress line.
fn output_human<W: Write>(
    out: &mut W,
    report: &BenchmarkReport,
    args: &WordbenchArgs,
) -> Result<()> {
    writeln!(out)?;
    if args.verbosity() > 1 {
        writeln!(out, "Method:      {}", report.method)?;
        writeln!(out, "Words:       {}", report.total_count)?;
        writeln!(out, "Corpus size: {}", report.corpus_len)?;
    }
    writeln!(out, "{}", report.total_time_line())?;
    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write>(
    out: &mut W,
    report: &BenchmarkReport,
    args: &WordbenchArgs,
) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, report)?;
    } else {
        serde_json::to_writer(&mut *out, report)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;

    use super::*;
    use crate::corpus::CorpusKind;

    fn report() -> BenchmarkReport {
        BenchmarkReport {
            method: CorpusKind::Uthash,
            wordlist_file: PathBuf::from("words.txt"),
            total_count: 4,
            inserted_count: 3,
            corpus_len: 3,
            bytes_read: 7,
            ingest_duration: Duration::from_micros(10),
            query_duration: Duration::new(0, 1_234),
        }
    }

    #[test]
    fn test_human_output() {
        let args = WordbenchArgs::try_parse_from(["wordbench"]).unwrap();
        let mut out = Vec::new();
        output_report(&mut out, &report(), &args).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nTotal Time: 0.000001234 seconds\n"
        );
    }

    #[test]
    fn test_verbose_human_output() {
        let args = WordbenchArgs::try_parse_from(["wordbench", "-vv"]).unwrap();
        let mut out = Vec::new();
        output_report(&mut out, &report(), &args).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Method:      uthash"));
        assert!(text.contains("Corpus size: 3"));
    }

    #[test]
    fn test_json_output() {
        let args = WordbenchArgs::try_parse_from(["wordbench", "--format", "json"]).unwrap();
        let mut out = Vec::new();
        output_report(&mut out, &report(), &args).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["method"], "uthash");
        assert_eq!(value["total_count"], 4);
        assert_eq!(value["query_duration"]["nanos"], 1_234);
    }
}
