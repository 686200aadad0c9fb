//! Parsed benchmark result lines.

use serde::Serialize;

use crate::duration::{DurationToken, NormalizedDuration};
use crate::error::ReportError;
use crate::grammar;

/// One measured variant of a workload, parsed from a single result line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkRecord {
    /// Workload name plus variant, e.g. `segment_count/fast_qr`.
    pub label: String,
    /// Lower confidence bound.
    pub lower: DurationToken,
    /// Point estimate.
    pub estimate: DurationToken,
    /// Upper confidence bound.
    pub upper: DurationToken,
}

impl BenchmarkRecord {
    /// Workload identifier shared by both variants of a comparison.
    pub fn workload(&self) -> &str {
        grammar::workload_of(&self.label)
    }

    /// Implementation variant, the label's last path segment.
    pub fn variant(&self) -> &str {
        grammar::variant_of(&self.label)
    }

    /// Normalize lower, estimate and upper, failing on the first bad token.
    pub fn normalized(&self) -> Result<[NormalizedDuration; 3], ReportError> {
        Ok([
            self.lower.normalize()?,
            self.estimate.normalize()?,
            self.upper.normalize()?,
        ])
    }
}

/// Parse `<label> time: [<lower> <estimate> <upper>]`.
///
/// Fails with [`ReportError::Parse`] unless the timing text holds exactly
/// three duration tokens.
pub fn parse_record(line: &str) -> Result<BenchmarkRecord, ReportError> {
    let parse_error = |found| ReportError::Parse {
        line: line.trim().to_string(),
        found,
    };

    let fields = grammar::split_result(line).ok_or_else(|| parse_error(0))?;
    let tokens = grammar::duration_tokens(fields.timing);
    let [lower, estimate, upper] = tokens[..] else {
        return Err(parse_error(tokens.len()));
    };

    Ok(BenchmarkRecord {
        label: fields.label.to_string(),
        lower: lower.into(),
        estimate: estimate.into(),
        upper: upper.into(),
    })
}
