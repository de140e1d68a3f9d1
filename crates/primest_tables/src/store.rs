//! The read-only table store and latency-keyed lookups.

use crate::bucket::LatencyBucket;
use crate::error::TableError;
use crate::table::{CharacterizationTable, Metric};
use primest_common::{InternalError, PrimestResult};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Identifies one characterization table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TableId {
    /// One-bit register.
    Reg,
    /// 1-input, 4-output, 32-bit crossbar.
    Crossbar,
    /// 32-bit counter.
    Counter,
    /// 32-bit comparator.
    Comparator,
    /// One-bit bitwise gate.
    Bitwise,
    /// 32-bit integer adder.
    Adder,
    /// 32-bit integer multiplier.
    Multiplier,
    /// Single-precision (32-bit) floating-point adder.
    FpSpAdder,
    /// Double-precision (64-bit) floating-point adder.
    FpDpAdder,
    /// Single-precision (32-bit) floating-point multiplier.
    FpSpMultiplier,
    /// Double-precision (64-bit) floating-point multiplier.
    FpDpMultiplier,
}

impl TableId {
    /// Every table, in declaration order.
    pub const ALL: [TableId; 11] = [
        TableId::Reg,
        TableId::Crossbar,
        TableId::Counter,
        TableId::Comparator,
        TableId::Bitwise,
        TableId::Adder,
        TableId::Multiplier,
        TableId::FpSpAdder,
        TableId::FpDpAdder,
        TableId::FpSpMultiplier,
        TableId::FpDpMultiplier,
    ];

    /// Returns the table name, which is also its file stem.
    pub fn name(self) -> &'static str {
        match self {
            TableId::Reg => "reg",
            TableId::Crossbar => "crossbar",
            TableId::Counter => "counter",
            TableId::Comparator => "comparator",
            TableId::Bitwise => "bitwise",
            TableId::Adder => "adder",
            TableId::Multiplier => "multiplier",
            TableId::FpSpAdder => "fp_sp_adder",
            TableId::FpDpAdder => "fp_dp_adder",
            TableId::FpSpMultiplier => "fp_sp_multiplier",
            TableId::FpDpMultiplier => "fp_dp_multiplier",
        }
    }

    /// Returns the file name of this table inside a table directory.
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    fn embedded_text(self) -> &'static str {
        match self {
            TableId::Reg => include_str!("../data/reg.csv"),
            TableId::Crossbar => include_str!("../data/crossbar.csv"),
            TableId::Counter => include_str!("../data/counter.csv"),
            TableId::Comparator => include_str!("../data/comparator.csv"),
            TableId::Bitwise => include_str!("../data/bitwise.csv"),
            TableId::Adder => include_str!("../data/adder.csv"),
            TableId::Multiplier => include_str!("../data/multiplier.csv"),
            TableId::FpSpAdder => include_str!("../data/fp_sp_adder.csv"),
            TableId::FpDpAdder => include_str!("../data/fp_dp_adder.csv"),
            TableId::FpSpMultiplier => include_str!("../data/fp_sp_multiplier.csv"),
            TableId::FpDpMultiplier => include_str!("../data/fp_dp_multiplier.csv"),
        }
    }
}

/// The result of a latency-keyed lookup.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TableLookup {
    /// The looked-up value.
    pub value: f64,
    /// The latency the value was characterized at, in seconds.
    ///
    /// Equal to the requested bucket on an exact match, or to the first
    /// row's own latency when the lookup fell back.
    pub latency_seconds: f64,
}

/// An immutable set of characterization tables.
#[derive(Debug)]
pub struct TableStore {
    tables: BTreeMap<TableId, CharacterizationTable>,
}

static EMBEDDED: OnceLock<Result<TableStore, String>> = OnceLock::new();

impl TableStore {
    /// Returns the store of tables compiled into this crate.
    ///
    /// The tables are parsed on first use and shared for the lifetime of
    /// the process.
    ///
    /// # Errors
    ///
    /// Returns [`InternalError`] if a compiled-in table is malformed.
    pub fn embedded() -> PrimestResult<&'static TableStore> {
        EMBEDDED
            .get_or_init(|| {
                Self::from_sources(|id| Ok(id.embedded_text().to_string()))
                    .map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|message| InternalError::new(format!("embedded tables: {message}")))
    }

    /// Loads every table from `<dir>/<name>.csv`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if a file is missing, unreadable or malformed.
    pub fn load_dir(dir: &Path) -> Result<Self, TableError> {
        Self::from_sources(|id| {
            let path = dir.join(id.file_name());
            std::fs::read_to_string(&path).map_err(|source| TableError::Io { path, source })
        })
    }

    fn from_sources(
        mut read: impl FnMut(TableId) -> Result<String, TableError>,
    ) -> Result<Self, TableError> {
        let mut tables = BTreeMap::new();
        for id in TableId::ALL {
            let text = read(id)?;
            tables.insert(id, CharacterizationTable::parse(id.name(), &text)?);
        }
        Ok(Self { tables })
    }

    /// Returns a table by id.
    pub fn table(&self, id: TableId) -> &CharacterizationTable {
        // Both constructors insert every `TableId::ALL` entry.
        &self.tables[&id]
    }

    /// Looks up a metric at a latency bucket.
    ///
    /// If no row's latency key equals the bucket's key, the first row is
    /// used and its own latency is reported as the effective latency.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingColumn`] if the table lacks the metric.
    pub fn lookup(
        &self,
        id: TableId,
        bucket: LatencyBucket,
        metric: Metric,
    ) -> Result<TableLookup, TableError> {
        let table = self.table(id);
        let (row, latency_seconds) = match table.find(&bucket.key()) {
            Some(row) => (row, bucket.seconds()),
            None => {
                let row = table.first();
                (row, row.latency_ns * 1e-9)
            }
        };
        let value = row.get(metric).ok_or_else(|| TableError::MissingColumn {
            table: table.name().to_string(),
            column: metric.column(),
        })?;
        Ok(TableLookup {
            value,
            latency_seconds,
        })
    }
}
