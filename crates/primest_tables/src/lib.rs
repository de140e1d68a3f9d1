//! Characterization tables and latency bucketing for the primest estimator.
//!
//! Each primitive family has one table of rows keyed by a discretized cycle
//! latency, giving idle energy, dynamic energy and area at a reference
//! configuration. The store is built once (from the tables compiled into the
//! crate, or from a directory) and is read-only afterwards, so a single
//! [`TableStore`] can serve concurrent queries without locking.
//!
//! # Usage
//!
//! ```
//! use primest_tables::{bucket_latency, Metric, TableId, TableStore};
//!
//! let store = TableStore::embedded().unwrap();
//! let bucket = bucket_latency(5e-9, 1.0);
//! let hit = store.lookup(TableId::Adder, bucket, Metric::DynamicEnergy).unwrap();
//! assert_eq!(bucket.key(), "5");
//! assert!(hit.value > 0.0);
//! ```

#![warn(missing_docs)]

pub mod bucket;
pub mod error;
pub mod store;
pub mod table;

pub use bucket::{bucket_latency, format_general, LatencyBucket};
pub use error::TableError;
pub use store::{TableId, TableLookup, TableStore};
pub use table::{CharacterizationRow, CharacterizationTable, Metric};
