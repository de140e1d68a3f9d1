//! Error types for estimation queries.

use primest_common::{InternalError, ParseLengthError};
use primest_tables::TableError;

/// Errors raised by a query that misuses the estimator interface.
///
/// Unsupported-but-well-formed queries are not errors: the support gate
/// answers them with a zero accuracy. Everything here means the caller
/// broke the query contract (or the table data is unusable) and the query
/// cannot be answered at all.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// A required attribute is absent.
    #[error("{class_name}: missing required attribute '{attribute}'")]
    MissingAttribute {
        /// The primitive class of the query.
        class_name: String,
        /// The missing attribute name.
        attribute: &'static str,
    },

    /// An attribute or argument has a value the estimator cannot use.
    #[error("{class_name}: invalid value {value} for '{name}': {reason}")]
    InvalidAttribute {
        /// The primitive class of the query.
        class_name: String,
        /// The attribute or argument name.
        name: String,
        /// The offending value as supplied.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An energy query carries no action.
    #[error("{0}: energy query has no action")]
    MissingAction(String),

    /// A wire length whose numeric part is not a number.
    #[error("{class_name}: {source}")]
    InvalidLength {
        /// The primitive class of the query.
        class_name: String,
        /// The parse failure.
        #[source]
        source: ParseLengthError,
    },

    /// An estimate was requested for a class this estimator does not model.
    #[error("no estimator for primitive class '{0}'")]
    UnsupportedPrimitive(String),

    /// A characterization table could not be used.
    #[error(transparent)]
    Table(#[from] TableError),

    /// An internal invariant was broken.
    #[error(transparent)]
    Internal(#[from] InternalError),
}
