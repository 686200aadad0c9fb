//! Fixed-width markdown table rendering.
//!
//! Cells are left-aligned and padded to fixed widths. Overlong content is
//! never truncated; the affected row simply misaligns.

use crate::ratio::ComparisonRow;
use crate::record::BenchmarkRecord;

/// Width of the benchmark label column.
pub const LABEL_WIDTH: usize = 24;
/// Width of each duration column.
pub const DURATION_WIDTH: usize = 9;
/// Width of the ratio column.
pub const RATIO_WIDTH: usize = 24;

/// Header cells.
pub const HEADER: [&str; 5] = ["Benchmark", "Lower", "Estimate", "Upper", "Ratio"];
/// Markdown separator cells (label left-aligned, durations centered).
pub const SEPARATOR: [&str; 5] = [":--", ":--:", ":--:", ":--:", "--"];

/// Render one pipe-delimited row.
pub fn format_row(cells: [&str; 5]) -> String {
    let [label, lower, estimate, upper, ratio] = cells;
    format!(
        "| {:<lw$} | {:<dw$} | {:<dw$} | {:<dw$} | {:<rw$} |",
        label,
        lower,
        estimate,
        upper,
        ratio,
        lw = LABEL_WIDTH,
        dw = DURATION_WIDTH,
        rw = RATIO_WIDTH
    )
}

fn record_row(record: &BenchmarkRecord, ratio: &str) -> String {
    format_row([
        &record.label,
        record.lower.text(),
        record.estimate.text(),
        record.upper.text(),
        ratio,
    ])
}

/// Render the full table: header, separator, then two rows per comparison.
///
/// For each comparison the baseline row comes first with an empty ratio
/// cell, followed by the candidate row carrying the speedup annotation.
pub fn render(rows: &[ComparisonRow]) -> String {
    let mut lines = vec![format_row(HEADER), format_row(SEPARATOR)];
    for row in rows {
        lines.push(record_row(&row.pair.baseline, ""));
        lines.push(record_row(&row.pair.candidate, &row.annotation()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::ComparisonPair;
    use crate::record::parse_record;

    #[test]
    fn header_and_separator_layout() {
        let table = render(&[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines,
            [
                "| Benchmark                | Lower     | Estimate  | Upper     | Ratio                    |",
                "| :--                      | :--:      | :--:      | :--:      | --                       |",
            ]
        );
    }

    #[test]
    fn pair_renders_baseline_then_candidate() {
        let pair = ComparisonPair::new(
            parse_record("seg/fast_qr time: [120.0 ns 121.0 ns 122.0 ns]").unwrap(),
            parse_record("seg/qrcode  time: [200.0 ns 205.0 ns 210.0 ns]").unwrap(),
            None,
        )
        .unwrap();
        let row = ComparisonRow::new(pair).unwrap();
        let table = render(&[row]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[2],
            "| seg/qrcode               | 200.0 ns  | 205.0 ns  | 210.0 ns  |                          |"
        );
        assert_eq!(
            lines[3],
            "| seg/fast_qr              | 120.0 ns  | 121.0 ns  | 122.0 ns  | fast_qr is 1.69x faster  |"
        );
    }

    #[test]
    fn overlong_cells_are_not_truncated() {
        let label = "a_really_long_workload_name/with_variant";
        let row = format_row([label, "1.2345 µs", "1.2400 µs", "1.2456 µs", ""]);
        assert!(row.starts_with(&format!("| {label} | 1.2345 µs | ")));
    }
}
