//! Shared plumbing for subcommands: configuration, estimator construction,
//! query input and diagnostic output.

use std::io::Read;
use std::path::{Path, PathBuf};

use primest_config::EstimatorConfig;
use primest_diagnostics::{Diagnostic, DiagnosticRenderer, TerminalRenderer};
use primest_estimate::{Query, TableEstimator};

use crate::GlobalArgs;

/// Loads the estimator configuration.
///
/// With `--config`, that file is loaded; otherwise `primest.toml` in the
/// current directory, or the defaults if there is none. `--tables`
/// overrides the configured table directory.
pub fn load_config(global: &GlobalArgs) -> Result<EstimatorConfig, Box<dyn std::error::Error>> {
    let mut config = match &global.config {
        Some(path) => primest_config::load_config_from_file(Path::new(path))?,
        None => primest_config::load_config(&std::env::current_dir()?)?,
    };
    if let Some(dir) = &global.tables {
        config.tables.dir = Some(PathBuf::from(dir));
    }
    Ok(config)
}

/// Builds the estimator for this invocation.
pub fn build_estimator(global: &GlobalArgs) -> Result<TableEstimator, Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    Ok(TableEstimator::from_config(config)?)
}

/// Reads a JSON query from a file, or from stdin when `path` is `-`.
pub fn read_query(path: &str) -> Result<Query, Box<dyn std::error::Error>> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("cannot read query {path}: {e}"))?
    };
    parse_query(&text).map_err(|e| format!("invalid query {path}: {e}").into())
}

/// Parses a JSON query.
pub fn parse_query(text: &str) -> Result<Query, serde_json::Error> {
    serde_json::from_str(text)
}

/// Renders diagnostics for the terminal; nothing when quiet.
///
/// Diagnostics are notes and warnings only. Failures are returned as
/// errors and reported by `main` regardless of `--quiet`.
pub fn render_diagnostics(diagnostics: &[Diagnostic], global: &GlobalArgs) -> String {
    if global.quiet {
        return String::new();
    }
    let renderer = TerminalRenderer::new(global.color);
    diagnostics.iter().map(|d| renderer.render(d)).collect()
}
