//! Error types for report generation.

use std::fmt;

/// Errors that can occur while turning benchmark output into a report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportError {
    /// A benchmark was announced but no result line was found for it.
    MissingResult {
        /// The announced benchmark name.
        name: String,
    },
    /// A result line did not yield exactly three duration tokens.
    Parse {
        /// The offending line, trimmed.
        line: String,
        /// Number of duration tokens actually found.
        found: usize,
    },
    /// A duration token carries a unit outside `ns`, `µs`, `ms`, `s`.
    UnrecognizedUnit {
        /// The full token as it appeared in the text.
        token: String,
        /// The rejected unit suffix.
        unit: String,
    },
    /// The magnitude part of a token is not a finite decimal number.
    InvalidMagnitude {
        /// The full token as it appeared in the text.
        token: String,
    },
    /// The candidate estimate normalized to zero, so no ratio exists.
    Computation {
        /// Workload identifier of the pair.
        workload: String,
        /// Label of the record with the zero estimate.
        candidate: String,
    },
    /// Two paired records do not measure the same workload.
    PairingMismatch {
        /// Label of the first record.
        first: String,
        /// Label of the second record.
        second: String,
    },
    /// A workload did not produce exactly two result lines.
    IncompleteGroup {
        /// Workload identifier.
        workload: String,
        /// Number of result lines found for it.
        count: usize,
    },
    /// The configured candidate variant is absent from a pair.
    CandidateNotFound {
        /// Workload identifier of the pair.
        workload: String,
        /// The configured candidate variant.
        candidate: String,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingResult { name } => {
                write!(f, "no result line found for benchmark `{name}`")
            }
            Self::Parse { line, found } => {
                write!(f, "expected 3 duration tokens, found {found}: `{line}`")
            }
            Self::UnrecognizedUnit { token, unit } => {
                write!(f, "unrecognized time unit `{unit}` in `{token}`")
            }
            Self::InvalidMagnitude { token } => write!(f, "invalid magnitude in `{token}`"),
            Self::Computation { workload, candidate } => write!(
                f,
                "cannot compute ratio for `{workload}`: estimate of `{candidate}` is zero"
            ),
            Self::PairingMismatch { first, second } => write!(
                f,
                "paired results measure different workloads: `{first}` and `{second}`"
            ),
            Self::IncompleteGroup { workload, count } => write!(
                f,
                "workload `{workload}` has {count} result line(s), expected exactly 2"
            ),
            Self::CandidateNotFound { workload, candidate } => write!(
                f,
                "candidate `{candidate}` not found among results for `{workload}`"
            ),
        }
    }
}

impl std::error::Error for ReportError {}
