//! Benchmark name discovery and result line selection.

use std::borrow::Cow;

use crate::grammar;

/// Collect the benchmark names announced by marker lines, in first-seen order.
///
/// Duplicate announcements are collapsed. Text without any marker yields an
/// empty list, which makes [`filter_result_lines`] select nothing.
pub fn extract_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for marker in text.lines().filter_map(grammar::parse_marker) {
        if !names.iter().any(|n| n == marker.name) {
            names.push(marker.name.to_string());
        }
    }
    names
}

/// Select, in original order, every result line that starts with a known name.
///
/// Lines are compared after trimming and must carry a timing triple; a label
/// criterion wrapped onto its own line is rejoined with its timing first. A
/// line is kept once even if several names prefix it.
pub fn filter_result_lines<'a>(text: &'a str, names: &[String]) -> Vec<Cow<'a, str>> {
    grammar::logical_lines(text)
        .into_iter()
        .filter(|line| grammar::split_result(line).is_some())
        .filter(|line| names.iter().any(|name| line.starts_with(name.as_str())))
        .collect()
}

/// Names that no selected result line starts with.
pub fn unmatched_names<'n, S: AsRef<str>>(names: &'n [String], lines: &[S]) -> Vec<&'n str> {
    names
        .iter()
        .map(String::as_str)
        .filter(|name| !lines.iter().any(|line| line.as_ref().starts_with(name)))
        .collect()
}
