//! Benchmark comparison reporter.
//!
//! Runs a crate's criterion benchmarks (or replays captured output) and
//! prints a markdown table comparing the two implementations measured for
//! every workload, followed by a short description of the host.
//!
//! Pipeline: resolve config → build check → measurement run →
//!           parse, pair and compare → print.

mod cli;
mod config;
mod platform;
mod runner;
mod verbose;

use anyhow::{Context, Result};
use bench_table::Report;
use clap::Parser;

use crate::cli::OutputFormat;
use crate::runner::{BenchRunner, CapturedRunner, CargoRunner};
use crate::verbose::{Timer, dprintln, vprintln};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    verbose::init(cli.quiet, cli.verbose);

    let config = config::resolve(&cli)?;
    let source = make_runner(&cli, &config)?;
    let output = runner::run_benchmarks(source.as_ref())?;

    let report = {
        let _t = Timer::start("report generation");
        bench_table::generate_report(&output, &config.options)
            .context("failed to build comparison report")?
    };
    log_summary(&report);

    match cli.format {
        OutputFormat::Table => {
            print!("{}", report.to_table());
            if !cli.no_footer {
                print!("{}", platform::HostInfo::detect().footer());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.rows)
                .context("serializing comparison rows to JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Pick the output source: replayed text when `--input` is given, otherwise
/// cargo against the resolved manifest.
fn make_runner(cli: &cli::Cli, config: &config::ReportConfig) -> Result<Box<dyn BenchRunner>> {
    if let Some(path) = &cli.input {
        vprintln!("Reading captured output from {}", path.display());
        return Ok(Box::new(CapturedRunner::from_path(path)?));
    }

    let manifest = config
        .manifest
        .clone()
        .context("no manifest resolved for cargo bench")?;
    Ok(Box::new(CargoRunner::new(manifest, cli.extra_args.clone())))
}

/// Log what the pipeline found, warning about anything left out of the table.
fn log_summary(report: &Report) {
    vprintln!("Found {} benchmark name(s)", report.names.len());
    vprintln!("Selected {} result line(s)", report.result_lines);
    vprintln!("Formed {} comparison(s)", report.rows.len());

    if report.names.is_empty() {
        dprintln!("Warning: no `Benchmarking <name>: Analyzing` lines found; the table is empty.");
    }
    for line in &report.dropped {
        dprintln!("Warning: no partner for result line, left out of the table: {line}");
    }
}
