//! Table-driven energy and area estimation for hardware primitives.
//!
//! A query names a primitive class (`"regfile"`, `"intmac"`, `"wire"`, ...),
//! its attributes and, for energy, an action. The [`gate`] decides whether
//! the query is in scope and how confident the estimate is; the [`energy`]
//! and [`area`] models then scale characterized table values to the
//! queried size. [`TableEstimator`] ties these together behind the
//! [`EstimatorPlugIn`] trait the hosting framework calls.
//!
//! ```
//! use primest_diagnostics::DiagnosticSink;
//! use primest_estimate::{EstimatorPlugIn, Query, TableEstimator};
//!
//! let estimator = TableEstimator::new().unwrap();
//! let sink = DiagnosticSink::new();
//! let query = Query::new("intadder")
//!     .with_attribute("technology", 45)
//!     .with_attribute("width", 32)
//!     .with_action("access");
//!
//! assert_eq!(estimator.supports_energy(&query, &sink).unwrap().percent(), 70);
//! let energy = estimator.estimate_energy(&query, &sink).unwrap();
//! assert!(energy.value > 0.0);
//! ```

#![warn(missing_docs)]

pub mod accuracy;
pub mod area;
pub mod energy;
pub mod error;
pub mod gate;
pub mod interpolate;
pub mod manifest;
pub mod plugin;
pub mod primitive;
pub mod query;

pub use accuracy::Accuracy;
pub use area::{AreaModel, AreaRequest};
pub use energy::{AccessDeltas, Clock, EnergyModel, EnergyRequest};
pub use error::EstimateError;
pub use interpolate::Interpolation;
pub use manifest::{supported_components, SupportedComponent};
pub use plugin::{EstimatorPlugIn, TableEstimator};
pub use primitive::{FpFormat, Primitive};
pub use query::{Action, PrimitiveClass, Query};
