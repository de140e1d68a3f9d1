//! Wire length values with unit-suffix parsing.

use std::fmt;

/// How the unit of a parsed [`WireLength`] was determined.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LengthUnit {
    /// An explicit `mm` suffix.
    Millimeter,
    /// An explicit `um` suffix.
    Micrometer,
    /// An explicit `nm` suffix.
    Nanometer,
    /// No unit at all; the value was taken as micrometres.
    Unspecified,
    /// Something metre-like that is not `mm`, `um` or `nm`; the length is
    /// treated as zero.
    Unrecognized,
}

/// A wire length normalized to micrometres.
///
/// Parsed from strings such as `"1mm"`, `"250um"`, `"800nm"` or a bare
/// `"120"` (micrometres). Any string that contains an `m` is taken to carry
/// a unit; the suffixes are tried in the order `mm`, `um`, `nm` and the
/// number is whatever precedes the first occurrence of the suffix. A string
/// with an `m` but none of those suffixes parses to zero with
/// [`LengthUnit::Unrecognized`] so the caller can warn instead of failing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WireLength {
    um: f64,
    unit: LengthUnit,
}

impl WireLength {
    /// Returns the length in micrometres.
    pub fn um(&self) -> f64 {
        self.um
    }

    /// Returns how the unit was determined.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Parses a length string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseLengthError`] if the numeric part is not a number.
    pub fn parse(s: &str) -> Result<Self, ParseLengthError> {
        let err = || ParseLengthError {
            input: s.to_string(),
        };
        let number = |text: &str| -> Result<f64, ParseLengthError> {
            text.trim().parse::<f64>().map_err(|_| err())
        };

        if !s.contains('m') {
            return Ok(Self {
                um: number(s)?,
                unit: LengthUnit::Unspecified,
            });
        }

        let split = |suffix: &str| s.split(suffix).next().unwrap_or_default();
        let (um, unit) = if s.contains("mm") {
            (number(split("mm"))? * 1e3, LengthUnit::Millimeter)
        } else if s.contains("um") {
            (number(split("um"))?, LengthUnit::Micrometer)
        } else if s.contains("nm") {
            (number(split("nm"))? * 1e-3, LengthUnit::Nanometer)
        } else {
            (0.0, LengthUnit::Unrecognized)
        };
        Ok(Self { um, unit })
    }
}

impl fmt::Display for WireLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}um", self.um)
    }
}

/// Error type for wire length strings whose numeric part does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLengthError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid wire length: '{}'", self.input)
    }
}

impl std::error::Error for ParseLengthError {}
