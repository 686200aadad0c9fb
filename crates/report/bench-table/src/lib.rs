//! Comparison tables from criterion console output.
//!
//! Turns the captured text of a `cargo bench` run into a markdown table that
//! puts two competing implementations of every workload side by side, with
//! their confidence bounds and the speedup of one over the other.
//!
//! Pipeline: discover names → select result lines → pair → parse records →
//!           normalize and compute ratios → render.
//!
//! Everything here is pure: the caller supplies the captured text and an
//! explicit [`ReportOptions`].

pub mod duration;
pub mod error;
pub mod grammar;
pub mod pair;
pub mod ratio;
pub mod record;
pub mod scan;
pub mod table;

pub use duration::{DurationToken, NormalizedDuration, TimeUnit};
pub use error::ReportError;
pub use pair::{ComparisonPair, PairingStrategy};
pub use ratio::ComparisonRow;
pub use record::{BenchmarkRecord, parse_record};

/// Options controlling how comparisons are built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Variant name whose row carries the speedup annotation. When `None`,
    /// the lexicographically first record of each pair is the candidate.
    pub candidate: Option<String>,
    /// How result lines are matched into pairs.
    pub pairing: PairingStrategy,
}

/// The outcome of processing one benchmark run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Benchmark names announced by marker lines.
    pub names: Vec<String>,
    /// Number of result lines selected for those names.
    pub result_lines: usize,
    /// One row per compared workload, in report order.
    pub rows: Vec<ComparisonRow>,
    /// Result lines left without a partner by sorted pairing.
    pub dropped: Vec<String>,
}

impl Report {
    /// Render the markdown table.
    pub fn to_table(&self) -> String {
        table::render(&self.rows)
    }
}

/// Build a report from captured benchmark output.
///
/// Every announced benchmark must have a result line, or the report fails
/// with [`ReportError::MissingResult`]. Every selected result line is parsed
/// before pairing, so a malformed line fails with [`ReportError::Parse`]
/// whatever the pairing strategy. Any error aborts the whole report; no
/// partial table is produced.
pub fn generate_report(text: &str, options: &ReportOptions) -> Result<Report, ReportError> {
    let names = scan::extract_names(text);
    let selected = scan::filter_result_lines(text, &names);
    if let Some(&name) = scan::unmatched_names(&names, &selected).first() {
        return Err(ReportError::MissingResult {
            name: name.to_string(),
        });
    }

    let lines: Vec<&str> = selected.iter().map(AsRef::as_ref).collect();
    for line in &lines {
        parse_record(line)?;
    }

    let paired = pair::pair_lines(&lines, options.pairing)?;

    let rows = paired
        .pairs
        .iter()
        .map(|&[first, second]| {
            let pair = ComparisonPair::new(
                parse_record(first)?,
                parse_record(second)?,
                options.candidate.as_deref(),
            )?;
            ComparisonRow::new(pair)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Report {
        result_lines: lines.len(),
        names,
        rows,
        dropped: paired.dropped.iter().map(ToString::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "\
Benchmarking seg: Analyzing
seg/fast_qr time: [120.0 ns 121.0 ns 122.0 ns]
seg/qrcode  time: [200.0 ns 205.0 ns 210.0 ns]
";

    #[test]
    fn end_to_end_scenario() {
        let report = generate_report(SCENARIO, &ReportOptions::default()).unwrap();
        assert_eq!(report.names, ["seg"]);
        assert_eq!(report.rows.len(), 1);

        let lines: Vec<String> = report.to_table().lines().map(str::to_string).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("| seg/qrcode "));
        assert!(lines[2].trim_end().ends_with("|                          |"));
        assert!(lines[3].starts_with("| seg/fast_qr "));
        assert!(lines[3].contains("| fast_qr is 1.69x faster  |"));
    }

    #[test]
    fn no_markers_gives_header_only() {
        let text = "running 0 tests\ntest result: ok.\nseg/fast_qr time: [1 ns 2 ns 3 ns]\n";
        let report = generate_report(text, &ReportOptions::default()).unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.to_table().lines().count(), 2);
    }

    #[test]
    fn malformed_line_is_a_parse_error_with_either_strategy() {
        let text = "Benchmarking seg: Analyzing\nseg/x time: [120.0 ns 121.0 ns]\n";
        for pairing in [PairingStrategy::Grouped, PairingStrategy::Sorted] {
            let options = ReportOptions {
                pairing,
                ..ReportOptions::default()
            };
            let err = generate_report(text, &options).unwrap_err();
            assert!(matches!(err, ReportError::Parse { found: 2, .. }), "{pairing}");
        }
    }

    #[test]
    fn ascii_micro_unit_is_rejected() {
        let text = "Benchmarking seg: Analyzing\n\
                    seg/fast_qr time: [120.0 us 121.0 us 122.0 us]\n\
                    seg/qrcode time: [200.0 ns 205.0 ns 210.0 ns]\n";
        let err = generate_report(text, &ReportOptions::default()).unwrap_err();
        assert!(matches!(err, ReportError::UnrecognizedUnit { .. }));
    }

    #[test]
    fn sorted_pairing_reports_dropped_line() {
        let text = format!("{SCENARIO}Benchmarking zz: Analyzing\nzz/only time: [1 ns 2 ns 3 ns]\n");
        let options = ReportOptions {
            pairing: PairingStrategy::Sorted,
            ..ReportOptions::default()
        };
        let report = generate_report(&text, &options).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.dropped, ["zz/only time: [1 ns 2 ns 3 ns]"]);

        let err = generate_report(&text, &ReportOptions::default()).unwrap_err();
        assert!(matches!(err, ReportError::IncompleteGroup { count: 1, .. }));
    }

    #[test]
    fn configured_candidate_inverts_ratio() {
        let options = ReportOptions {
            candidate: Some("qrcode".into()),
            ..ReportOptions::default()
        };
        let report = generate_report(SCENARIO, &options).unwrap();
        let row = &report.rows[0];
        assert_eq!(row.pair.candidate.variant(), "qrcode");
        assert_eq!(row.annotation(), "qrcode is 0.59x faster");
    }

    #[test]
    fn wrapped_long_labels_are_compared() {
        let text = format!(
            "{SCENARIO}\
Benchmarking encode_version_40_large/fast_qr: Analyzing
encode_version_40_large/fast_qr
                        time:   [498.12 µs 501.44 µs 505.02 µs]
Benchmarking encode_version_40_large/qrcode: Analyzing
encode_version_40_large/qrcode
                        time:   [2.4812 ms 2.5073 ms 2.5350 ms]
"
        );
        let report = generate_report(&text, &ReportOptions::default()).unwrap();
        assert_eq!(report.result_lines, 4);
        let workloads: Vec<&str> = report.rows.iter().map(|r| r.workload.as_str()).collect();
        assert_eq!(workloads, ["encode_version_40_large", "seg"]);
        assert_eq!(report.rows[0].annotation(), "fast_qr is 5.00x faster");
    }

    #[test]
    fn announced_benchmark_without_result_fails() {
        let text = format!("{SCENARIO}Benchmarking enc/fast_qr: Analyzing\n");
        let err = generate_report(&text, &ReportOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ReportError::MissingResult {
                name: "enc/fast_qr".into(),
            }
        );
    }

    #[test]
    fn multiple_workloads_in_order() {
        let text = "\
Benchmarking version: Analyzing
Benchmarking encode: Analyzing
version/qrcode  time: [3.1 µs 3.2 µs 3.3 µs]
version/fast_qr time: [1.0 µs 1.1 µs 1.2 µs]
encode/fast_qr  time: [10.0 ms 10.5 ms 11.0 ms]
encode/qrcode   time: [20.1 ms 21.0 ms 22.3 ms]
";
        let report = generate_report(text, &ReportOptions::default()).unwrap();
        let workloads: Vec<&str> = report.rows.iter().map(|r| r.workload.as_str()).collect();
        assert_eq!(workloads, ["encode", "version"]);
        assert!((report.rows[0].ratio - 2.0).abs() < 1e-12);
        assert_eq!(report.result_lines, 4);
    }
}
