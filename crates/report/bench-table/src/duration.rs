//! Duration tokens and their conversion to nanoseconds.
//!
//! A [`DurationToken`] keeps the text exactly as criterion printed it so the
//! report can show it unchanged. Arithmetic goes through
//! [`DurationToken::normalize`], which yields a [`NormalizedDuration`] in
//! nanoseconds.

use std::fmt;

use serde::Serialize;

use crate::error::ReportError;
use crate::grammar::RawToken;

/// Supported time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// `ns`
    Nanos,
    /// `µs`
    Micros,
    /// `ms`
    Millis,
    /// `s`
    Seconds,
}

impl TimeUnit {
    /// Parse a unit suffix. Both the micro sign and Greek mu spell `µs`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "ns" => Some(Self::Nanos),
            "\u{b5}s" | "\u{3bc}s" => Some(Self::Micros),
            "ms" => Some(Self::Millis),
            "s" => Some(Self::Seconds),
            _ => None,
        }
    }

    /// Nanoseconds per one of this unit.
    pub const fn nanos_per_unit(self) -> f64 {
        match self {
            Self::Nanos => 1.0,
            Self::Micros => 1_000.0,
            Self::Millis => 1_000_000.0,
            Self::Seconds => 1_000_000_000.0,
        }
    }

    /// Canonical suffix.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Micros => "\u{b5}s",
            Self::Millis => "ms",
            Self::Seconds => "s",
        }
    }
}

/// A magnitude and unit exactly as they appeared in benchmark output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationToken {
    text: String,
    magnitude: String,
    unit: String,
}

impl DurationToken {
    /// Build a token from its parts, rendering the display text as
    /// `<magnitude> <unit>`.
    pub fn new(magnitude: impl Into<String>, unit: impl Into<String>) -> Self {
        let magnitude = magnitude.into();
        let unit = unit.into();
        Self {
            text: format!("{magnitude} {unit}"),
            magnitude,
            unit,
        }
    }

    /// Text as printed by the benchmark tool.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Numeric part of the token, without its unit.
    pub fn magnitude(&self) -> &str {
        &self.magnitude
    }

    /// Unit suffix of the token.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Convert to nanoseconds.
    ///
    /// Only the magnitude field is parsed as a number; the unit is matched
    /// separately and must be one of `ns`, `µs`, `ms`, `s`.
    pub fn normalize(&self) -> Result<NormalizedDuration, ReportError> {
        let unit = TimeUnit::from_suffix(&self.unit).ok_or_else(|| {
            ReportError::UnrecognizedUnit {
                token: self.text.clone(),
                unit: self.unit.clone(),
            }
        })?;
        let magnitude: f64 = self
            .magnitude
            .parse()
            .ok()
            .filter(|m: &f64| m.is_finite())
            .ok_or_else(|| ReportError::InvalidMagnitude {
                token: self.text.clone(),
            })?;
        Ok(NormalizedDuration::from_nanos(magnitude * unit.nanos_per_unit()))
    }
}

impl From<RawToken<'_>> for DurationToken {
    fn from(raw: RawToken<'_>) -> Self {
        Self {
            text: raw.text.to_string(),
            magnitude: raw.magnitude.to_string(),
            unit: raw.unit.to_string(),
        }
    }
}

impl fmt::Display for DurationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward padding so table cells can use `{:<9}` on the token.
        f.pad(&self.text)
    }
}

/// A duration in nanoseconds, used only for arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct NormalizedDuration(f64);

impl NormalizedDuration {
    /// Wrap a nanosecond count.
    pub const fn from_nanos(nanos: f64) -> Self {
        Self(nanos)
    }

    /// Nanosecond count.
    pub const fn as_nanos(self) -> f64 {
        self.0
    }

    /// Re-serialize as a token in the canonical unit (`ns`).
    pub fn to_token(self) -> DurationToken {
        DurationToken::new(self.0.to_string(), TimeUnit::Nanos.suffix())
    }
}
