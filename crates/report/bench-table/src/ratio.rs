//! Speedup ratio between the two records of a comparison.

use serde::Serialize;

use crate::error::ReportError;
use crate::pair::ComparisonPair;

/// A comparison pair with its computed speedup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Workload identifier.
    pub workload: String,
    /// The compared records.
    #[serde(flatten)]
    pub pair: ComparisonPair,
    /// Candidate estimate in nanoseconds.
    pub candidate_estimate_ns: f64,
    /// Baseline estimate in nanoseconds.
    pub baseline_estimate_ns: f64,
    /// Baseline estimate divided by candidate estimate.
    pub ratio: f64,
}

impl ComparisonRow {
    /// Compute the ratio for `pair`.
    ///
    /// Every bound of both records must carry a supported unit, not only the
    /// estimates the ratio is computed from.
    pub fn new(pair: ComparisonPair) -> Result<Self, ReportError> {
        let [_, candidate_estimate, _] = pair.candidate.normalized()?;
        let [_, baseline_estimate, _] = pair.baseline.normalized()?;
        let candidate_estimate_ns = candidate_estimate.as_nanos();
        let baseline_estimate_ns = baseline_estimate.as_nanos();
        let ratio = ratio_of(&pair, candidate_estimate_ns, baseline_estimate_ns)?;
        Ok(Self {
            workload: pair.workload().to_string(),
            pair,
            candidate_estimate_ns,
            baseline_estimate_ns,
            ratio,
        })
    }

    /// Human-readable annotation for the candidate row.
    pub fn annotation(&self) -> String {
        format!("{} is {:.2}x faster", self.pair.candidate.variant(), self.ratio)
    }
}

/// How many times faster the candidate's estimate is than the baseline's.
///
/// Both estimates are normalized to nanoseconds first, so mixed units
/// compare correctly. A zero candidate estimate is a
/// [`ReportError::Computation`].
pub fn speedup(pair: &ComparisonPair) -> Result<f64, ReportError> {
    let candidate = pair.candidate.estimate.normalize()?.as_nanos();
    let baseline = pair.baseline.estimate.normalize()?.as_nanos();
    ratio_of(pair, candidate, baseline)
}

fn ratio_of(pair: &ComparisonPair, candidate: f64, baseline: f64) -> Result<f64, ReportError> {
    if candidate == 0.0 {
        return Err(ReportError::Computation {
            workload: pair.workload().to_string(),
            candidate: pair.candidate.label.clone(),
        });
    }
    Ok(baseline / candidate)
}
