//! Line grammars for criterion console output.
//!
//! Criterion's human-readable output is the only wire format this crate
//! understands. Two kinds of line matter:
//!
//! - **Marker lines**: `Benchmarking <name>: Analyzing` (case-insensitive),
//!   printed once per benchmark once sampling has finished.
//! - **Result lines**: `<label> time: [<lower> <estimate> <upper>]`, where
//!   each bound is a magnitude followed by a time unit. A label too long for
//!   criterion's label column is printed on a line of its own, and the
//!   timing triple follows on the next line, indented past the column.
//!
//! Everything that depends on the exact shape of those lines lives here.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Delimiter separating a result line's label from its timing triple.
pub const TIME_DELIMITER: &str = "time:";

/// Separator between the workload and variant parts of a label.
pub const VARIANT_SEPARATOR: char = '/';

/// Fields of a marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerLine<'a> {
    /// Benchmark name being analyzed.
    pub name: &'a str,
}

/// Fields of a result line, before token extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLine<'a> {
    /// Label preceding the delimiter, trimmed.
    pub label: &'a str,
    /// Everything after the delimiter.
    pub timing: &'a str,
}

/// A magnitude/unit token as matched in the timing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    /// The whole match, e.g. `121.0 ns`.
    pub text: &'a str,
    /// The numeric part, e.g. `121.0`.
    pub magnitude: &'a str,
    /// The unit suffix, e.g. `ns`.
    pub unit: &'a str,
}

fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^Benchmarking (.+): Analyzing$").expect("marker regex must compile")
    })
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The unit group accepts any non-numeric run so that unsupported units
    // reach the normalizer and get rejected there instead of vanishing.
    RE.get_or_init(|| {
        Regex::new(r"(?P<magnitude>\d+(?:\.\d*)?)\s*(?P<unit>[^\s\d\[\].]+)")
            .expect("duration token regex must compile")
    })
}

/// Match a marker line, returning the benchmark name it announces.
pub fn parse_marker(line: &str) -> Option<MarkerLine<'_>> {
    let caps = marker_regex().captures(line.trim())?;
    let name = caps.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    Some(MarkerLine { name })
}

/// Trim every line of `text`, rejoining result lines that criterion wrapped.
///
/// A non-empty line without a [`TIME_DELIMITER`] that is directly followed by
/// a line starting with one is a wrapped label; the two come back as a single
/// `<label> time: [...]` line.
pub fn logical_lines(text: &str) -> Vec<Cow<'_, str>> {
    let mut out = Vec::new();
    let mut lines = text.lines().map(str::trim).peekable();
    while let Some(line) = lines.next() {
        let wrapped_label = !line.is_empty()
            && !line.contains(TIME_DELIMITER)
            && lines
                .peek()
                .is_some_and(|next| next.starts_with(TIME_DELIMITER));
        match lines.next_if(|_| wrapped_label) {
            Some(timing) => out.push(Cow::Owned(format!("{line} {timing}"))),
            None => out.push(Cow::Borrowed(line)),
        }
    }
    out
}

/// Split a result line at the [`TIME_DELIMITER`].
///
/// Returns `None` if the line carries no timing triple at all.
pub fn split_result(line: &str) -> Option<ResultLine<'_>> {
    let (label, timing) = line.split_once(TIME_DELIMITER)?;
    Some(ResultLine {
        label: label.trim(),
        timing,
    })
}

/// Extract every magnitude/unit token from timing text, in order.
pub fn duration_tokens(timing: &str) -> Vec<RawToken<'_>> {
    token_regex()
        .captures_iter(timing)
        .filter_map(|caps| {
            Some(RawToken {
                text: caps.get(0)?.as_str(),
                magnitude: caps.name("magnitude")?.as_str(),
                unit: caps.name("unit")?.as_str(),
            })
        })
        .collect()
}

/// Workload identifier of a label: everything before the last `/`.
///
/// A label without a separator is its own workload.
pub fn workload_of(label: &str) -> &str {
    label
        .rsplit_once(VARIANT_SEPARATOR)
        .map_or(label, |(workload, _)| workload)
}

/// Variant (implementation) name of a label: everything after the last `/`.
pub fn variant_of(label: &str) -> &str {
    label
        .rsplit_once(VARIANT_SEPARATOR)
        .map_or(label, |(_, variant)| variant)
}
