//! Estimated quantities tagged with their physical unit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The unit of an [`Estimate`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Unit {
    /// Energy in picojoules.
    PicoJoules,
    /// Area in square micrometres.
    SquareMicrons,
}

impl Unit {
    /// Returns the unit symbol understood by the hosting framework.
    ///
    /// The framework expects a bare SI prefix for energy (`"p"` for pJ) and a
    /// prefixed square for area (`"u^2"` for um²).
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::PicoJoules => "p",
            Unit::SquareMicrons => "u^2",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::PicoJoules => write!(f, "pJ"),
            Unit::SquareMicrons => write!(f, "um^2"),
        }
    }
}

/// A numeric estimate with its unit.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Estimate {
    /// The estimated value.
    pub value: f64,
    /// The unit of `value`.
    pub unit: Unit,
}

impl Estimate {
    /// Creates an energy estimate in picojoules.
    pub fn energy(pj: f64) -> Self {
        Self {
            value: pj,
            unit: Unit::PicoJoules,
        }
    }

    /// Creates an area estimate in square micrometres.
    pub fn area(um2: f64) -> Self {
        Self {
            value: um2,
            unit: Unit::SquareMicrons,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
