//! Diagnostic codes with category prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Degraded estimates, prefixed with `W`.
    Warning,
    /// Support gate rejections, prefixed with `S`.
    Support,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Warning => 'W',
            Category::Support => 'S',
        }
    }
}

/// A diagnostic code combining a category prefix and a numeric identifier.
///
/// Displayed as the prefix followed by a zero-padded 3-digit number, e.g.
/// `S101` or `W201`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// The primitive class is not one this estimator models.
    pub const UNSUPPORTED_CLASS: Self = Self::new(Category::Support, 101);
    /// The technology node is not one the tables were characterized for.
    pub const UNSUPPORTED_TECHNOLOGY: Self = Self::new(Category::Support, 102);
    /// The SRAM is too large to be approximated as a register file.
    pub const SRAM_OUT_OF_RANGE: Self = Self::new(Category::Support, 103);
    /// A wire length carried no unit and was taken as micrometres.
    pub const WIRE_LENGTH_NO_UNIT: Self = Self::new(Category::Warning, 201);
    /// A wire length carried a unit that is not `mm`, `um` or `nm`.
    pub const WIRE_LENGTH_BAD_UNIT: Self = Self::new(Category::Warning, 202);

    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
