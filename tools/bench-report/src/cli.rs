//! Command-line interface definitions for bench-report.

use std::path::PathBuf;

use bench_table::PairingStrategy;
use clap::{Parser, ValueEnum};

/// Run criterion benchmarks and print a comparison table.
#[derive(Parser)]
#[command(name = "bench-report", version, about)]
pub struct Cli {
    /// Path to the Cargo.toml of the benchmarked crate (default: ./Cargo.toml,
    /// then ../Cargo.toml).
    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    /// Read captured benchmark output from a file (`-` for stdin) instead of
    /// running cargo.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Variant whose row carries the speedup annotation (label suffix after
    /// the last `/`).
    #[arg(long, short = 'c')]
    pub candidate: Option<String>,

    /// How result lines are paired: `grouped` (by workload) or `sorted`.
    #[arg(long)]
    pub pairing: Option<PairingStrategy>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Omit the host information and attribution footer.
    #[arg(long)]
    pub no_footer: bool,

    /// Only print the report and errors.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output with stage timings.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Extra arguments passed to `cargo bench` after `--`.
    #[arg(last = true)]
    pub extra_args: Vec<String>,
}

/// Report output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width markdown table followed by the footer.
    Table,
    /// Comparison rows as pretty-printed JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_trailing_args() {
        let cli = Cli::try_parse_from([
            "bench-report",
            "--pairing",
            "sorted",
            "--candidate",
            "fast_qr",
            "--format",
            "json",
            "--",
            "--bench",
            "qr",
        ])
        .unwrap();
        assert_eq!(cli.pairing, Some(PairingStrategy::Sorted));
        assert_eq!(cli.candidate.as_deref(), Some("fast_qr"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.extra_args, ["--bench", "qr"]);
    }

    #[test]
    fn rejects_unknown_pairing() {
        assert!(Cli::try_parse_from(["bench-report", "--pairing", "random"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["bench-report", "-q", "-v"]).is_err());
    }
}
