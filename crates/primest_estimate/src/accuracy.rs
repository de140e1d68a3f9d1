//! Accuracy scores reported to the hosting framework.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How confident the estimator is about a query, in percent.
///
/// The framework compares accuracies across competing estimators and
/// routes each query to the most confident one. Zero means the query is
/// not supported at all.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accuracy(u8);

impl Accuracy {
    /// The query is not supported.
    pub const UNSUPPORTED: Accuracy = Accuracy(0);

    /// Creates an accuracy, saturating at 100.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    /// Returns the accuracy in percent.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Returns `true` unless this is [`Accuracy::UNSUPPORTED`].
    pub fn is_supported(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
