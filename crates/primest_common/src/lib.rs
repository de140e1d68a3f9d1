//! Shared foundational types used across the primest estimator.
//!
//! This crate provides the loosely-typed attribute values carried by queries,
//! unit-tagged estimates, wire length parsing, and common result types.

#![warn(missing_docs)]

pub mod estimate;
pub mod length;
pub mod result;
pub mod value;

pub use estimate::{Estimate, Unit};
pub use length::{LengthUnit, ParseLengthError, WireLength};
pub use result::{InternalError, PrimestResult};
pub use value::AttrValue;
