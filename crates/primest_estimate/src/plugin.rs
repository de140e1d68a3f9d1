//! The plug-in surface the hosting framework talks to.

use crate::accuracy::Accuracy;
use crate::area::{AreaModel, AreaRequest};
use crate::energy::{EnergyModel, EnergyRequest};
use crate::error::EstimateError;
use crate::gate;
use crate::manifest::{supported_components, SupportedComponent};
use crate::query::Query;
use primest_common::Estimate;
use primest_config::EstimatorConfig;
use primest_diagnostics::DiagnosticSink;
use primest_tables::TableStore;

/// An energy and area estimator the framework can query.
///
/// The framework asks every registered estimator for its accuracy on a
/// query and calls `estimate_*` only on the most accurate one. Queries are
/// independent, so implementations must be shareable across threads.
pub trait EstimatorPlugIn: Send + Sync {
    /// Returns the estimator's registered name.
    fn name(&self) -> &str;

    /// Returns the accuracy for an energy query, or zero if unsupported.
    fn supports_energy(&self, query: &Query, sink: &DiagnosticSink)
        -> Result<Accuracy, EstimateError>;

    /// Returns the energy of the query's action in pJ.
    fn estimate_energy(&self, query: &Query, sink: &DiagnosticSink)
        -> Result<Estimate, EstimateError>;

    /// Returns the accuracy for an area query, or zero if unsupported.
    fn supports_area(&self, query: &Query, sink: &DiagnosticSink)
        -> Result<Accuracy, EstimateError>;

    /// Returns the area of the queried component in um².
    fn estimate_area(&self, query: &Query, sink: &DiagnosticSink)
        -> Result<Estimate, EstimateError>;

    /// Lists the components and actions this estimator models.
    fn supported_components(&self) -> Vec<SupportedComponent>;
}

#[derive(Debug)]
enum Tables {
    Embedded(&'static TableStore),
    Loaded(TableStore),
}

impl Tables {
    fn store(&self) -> &TableStore {
        match self {
            Tables::Embedded(store) => *store,
            Tables::Loaded(store) => store,
        }
    }
}

/// The table-driven estimator.
///
/// Holds an immutable configuration and table store; every method takes
/// `&self`, so one instance can serve concurrent queries.
#[derive(Debug)]
pub struct TableEstimator {
    config: EstimatorConfig,
    tables: Tables,
}

impl TableEstimator {
    /// The name the estimator registers under.
    pub const NAME: &'static str = "Aladdin_table";

    /// Creates an estimator with the default configuration and the
    /// compiled-in tables.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Internal`] if the compiled-in tables are
    /// malformed.
    pub fn new() -> Result<Self, EstimateError> {
        Self::from_config(EstimatorConfig::default())
    }

    /// Creates an estimator from a configuration, loading tables from
    /// `config.tables.dir` when set.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Table`] if the table directory cannot be
    /// loaded.
    pub fn from_config(config: EstimatorConfig) -> Result<Self, EstimateError> {
        let tables = match &config.tables.dir {
            Some(dir) => Tables::Loaded(TableStore::load_dir(dir)?),
            None => Tables::Embedded(TableStore::embedded()?),
        };
        Ok(Self { config, tables })
    }

    /// Creates an estimator over an already-loaded table store.
    pub fn with_tables(config: EstimatorConfig, tables: TableStore) -> Self {
        Self {
            config,
            tables: Tables::Loaded(tables),
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Returns the table store in use.
    pub fn tables(&self) -> &TableStore {
        self.tables.store()
    }

    fn default_cycle_seconds(&self) -> f64 {
        self.config.estimator.default_cycle_seconds
    }
}

impl EstimatorPlugIn for TableEstimator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn supports_energy(
        &self,
        query: &Query,
        sink: &DiagnosticSink,
    ) -> Result<Accuracy, EstimateError> {
        gate::supports_energy(query, &self.config, sink)
    }

    fn estimate_energy(
        &self,
        query: &Query,
        sink: &DiagnosticSink,
    ) -> Result<Estimate, EstimateError> {
        let request = EnergyRequest::from_query(query, self.default_cycle_seconds())?;
        let pj = EnergyModel::new(self.tables()).estimate(&request, sink)?;
        Ok(Estimate::energy(pj))
    }

    fn supports_area(
        &self,
        query: &Query,
        sink: &DiagnosticSink,
    ) -> Result<Accuracy, EstimateError> {
        gate::supports_area(query, &self.config, sink)
    }

    fn estimate_area(
        &self,
        query: &Query,
        _sink: &DiagnosticSink,
    ) -> Result<Estimate, EstimateError> {
        let request = AreaRequest::from_query(query, self.default_cycle_seconds())?;
        let um2 = AreaModel::new(self.tables(), self.default_cycle_seconds()).estimate(&request)?;
        Ok(Estimate::area(um2))
    }

    fn supported_components(&self) -> Vec<SupportedComponent> {
        supported_components()
    }
}
