//! Configuration types deserialized from `primest.toml`.

use serde::Deserialize;
use std::path::PathBuf;

/// The top-level estimator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstimatorConfig {
    /// Accuracy, clock and technology settings.
    #[serde(default)]
    pub estimator: EstimatorSettings,
    /// Where characterization tables come from.
    #[serde(default)]
    pub tables: TableSettings,
    /// Capacity caps for approximating SRAMs as register files.
    #[serde(default)]
    pub sram: SramLimits,
}

/// Core estimator settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimatorSettings {
    /// The accuracy reported for every accepted query, in percent.
    #[serde(default = "default_accuracy")]
    pub accuracy: u8,
    /// Clock period assumed when a query has no `global_cycle_seconds`.
    #[serde(default = "default_cycle_seconds")]
    pub default_cycle_seconds: f64,
    /// Technology nodes in nanometres the tables are valid for.
    #[serde(default = "default_technologies")]
    pub technologies: Vec<u32>,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            accuracy: default_accuracy(),
            default_cycle_seconds: default_cycle_seconds(),
            technologies: default_technologies(),
        }
    }
}

/// Characterization table source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableSettings {
    /// Directory holding `reg.csv`, `adder.csv`, ...; the tables compiled
    /// into the binary are used when absent.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// SRAM dimensions that can still be approximated as a register file.
#[derive(Debug, Clone, Deserialize)]
pub struct SramLimits {
    /// Largest supported depth, for both energy and area.
    #[serde(default = "default_sram_max_depth")]
    pub max_depth: u32,
    /// Largest supported width for energy queries.
    #[serde(default = "default_sram_max_energy_width")]
    pub max_energy_width: u32,
    /// Largest supported width for area queries.
    #[serde(default = "default_sram_max_area_width")]
    pub max_area_width: u32,
}

impl Default for SramLimits {
    fn default() -> Self {
        Self {
            max_depth: default_sram_max_depth(),
            max_energy_width: default_sram_max_energy_width(),
            max_area_width: default_sram_max_area_width(),
        }
    }
}

fn default_accuracy() -> u8 {
    70
}

fn default_cycle_seconds() -> f64 {
    5e-9
}

fn default_technologies() -> Vec<u32> {
    vec![40, 45]
}

fn default_sram_max_depth() -> u32 {
    128
}

fn default_sram_max_energy_width() -> u32 {
    32
}

fn default_sram_max_area_width() -> u32 {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EstimatorConfig::default();
        assert_eq!(config.estimator.accuracy, 70);
        assert_eq!(config.estimator.default_cycle_seconds, 5e-9);
        assert_eq!(config.estimator.technologies, vec![40, 45]);
        assert!(config.tables.dir.is_none());
        assert_eq!(config.sram.max_depth, 128);
        assert_eq!(config.sram.max_energy_width, 32);
        assert_eq!(config.sram.max_area_width, 16);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: EstimatorConfig = toml::from_str("[sram]\nmax_depth = 64\n").unwrap();
        assert_eq!(config.sram.max_depth, 64);
        assert_eq!(config.sram.max_energy_width, 32);
        assert_eq!(config.estimator.accuracy, 70);
    }
}
