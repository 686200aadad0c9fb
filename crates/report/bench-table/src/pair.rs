//! Pairing of result lines into per-workload comparisons.
//!
//! Each workload is expected to report exactly two variants. Two strategies
//! find them:
//!
//! - [`PairingStrategy::Sorted`] sorts every line and takes consecutive
//!   pairs. It trusts that sorting puts both variants of a workload next to
//!   each other; an odd trailing line is dropped.
//! - [`PairingStrategy::Grouped`] groups lines by the workload part of their
//!   label and requires exactly two lines per group.
//!
//! Either way the resulting records are checked by [`ComparisonPair::new`],
//! so a pair spanning two workloads is rejected instead of printed.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::grammar;
use crate::record::BenchmarkRecord;

/// How result lines are matched up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingStrategy {
    /// Group by workload identifier, exactly two lines per workload.
    #[default]
    Grouped,
    /// Sort lines and take consecutive pairs.
    Sorted,
}

impl FromStr for PairingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grouped" => Ok(Self::Grouped),
            "sorted" => Ok(Self::Sorted),
            other => Err(format!(
                "unknown pairing strategy '{other}' (expected: grouped, sorted)"
            )),
        }
    }
}

impl fmt::Display for PairingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Grouped => "grouped",
            Self::Sorted => "sorted",
        })
    }
}

/// Result lines matched into pairs, in report order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LinePairs<'a> {
    /// Pairs in output order; within a pair, lines are in sorted order.
    pub pairs: Vec<[&'a str; 2]>,
    /// Lines left without a partner.
    pub dropped: Vec<&'a str>,
}

/// Pair lines with the given strategy.
pub fn pair_lines<'a>(
    lines: &[&'a str],
    strategy: PairingStrategy,
) -> Result<LinePairs<'a>, ReportError> {
    match strategy {
        PairingStrategy::Sorted => Ok(pair_sorted(lines)),
        PairingStrategy::Grouped => pair_grouped(lines),
    }
}

/// Stable-sort lines by full text and split into consecutive pairs.
pub fn pair_sorted<'a>(lines: &[&'a str]) -> LinePairs<'a> {
    let mut sorted = lines.to_vec();
    sorted.sort();

    let mut chunks = sorted.chunks_exact(2);
    let pairs = chunks.by_ref().map(|c| [c[0], c[1]]).collect();
    let dropped = chunks.remainder().to_vec();
    LinePairs { pairs, dropped }
}

/// Group lines by workload identifier; every group must hold two lines.
///
/// Groups come out ordered by workload identifier.
pub fn pair_grouped<'a>(lines: &[&'a str]) -> Result<LinePairs<'a>, ReportError> {
    let mut groups: BTreeMap<&'a str, Vec<&'a str>> = BTreeMap::new();
    for &line in lines {
        let label = grammar::split_result(line).map_or(line.trim(), |r| r.label);
        groups
            .entry(grammar::workload_of(label))
            .or_default()
            .push(line);
    }

    let pairs = groups
        .into_iter()
        .map(|(workload, mut members)| {
            members.sort();
            match members[..] {
                [first, second] => Ok([first, second]),
                _ => Err(ReportError::IncompleteGroup {
                    workload: workload.to_string(),
                    count: members.len(),
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LinePairs {
        pairs,
        dropped: Vec::new(),
    })
}

/// Two records measuring the same workload with different implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonPair {
    /// The implementation being promoted; its row carries the ratio.
    pub candidate: BenchmarkRecord,
    /// The implementation compared against.
    pub baseline: BenchmarkRecord,
}

impl ComparisonPair {
    /// Build a pair from two records in sorted order.
    ///
    /// The candidate is the record whose variant equals `candidate` if one is
    /// given, otherwise the first record.
    pub fn new(
        first: BenchmarkRecord,
        second: BenchmarkRecord,
        candidate: Option<&str>,
    ) -> Result<Self, ReportError> {
        if first.workload() != second.workload() {
            return Err(ReportError::PairingMismatch {
                first: first.label,
                second: second.label,
            });
        }

        match candidate {
            None => Ok(Self {
                candidate: first,
                baseline: second,
            }),
            Some(name) if first.variant() == name => Ok(Self {
                candidate: first,
                baseline: second,
            }),
            Some(name) if second.variant() == name => Ok(Self {
                candidate: second,
                baseline: first,
            }),
            Some(name) => Err(ReportError::CandidateNotFound {
                workload: first.workload().to_string(),
                candidate: name.to_string(),
            }),
        }
    }

    /// Workload identifier shared by both records.
    pub fn workload(&self) -> &str {
        self.candidate.workload()
    }
}
