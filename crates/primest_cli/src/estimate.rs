//! `primest energy` and `primest area`: estimate a query.
//!
//! The query is gated first, as the hosting framework would: an
//! unsupported query is refused with its diagnostics instead of being
//! estimated.

use primest_common::Estimate;
use primest_diagnostics::DiagnosticSink;
use primest_estimate::{EstimatorPlugIn, Query};

use crate::context::{build_estimator, read_query, render_diagnostics};
use crate::supports::check;
use crate::{EstimateKind, GlobalArgs, QueryArgs, ReportFormat};

/// The outcome of gating and estimating one query.
#[derive(Debug)]
pub enum Outcome {
    /// The query was supported and estimated.
    Estimated {
        /// Claimed accuracy in percent.
        accuracy: u8,
        /// The estimate.
        estimate: Estimate,
    },
    /// The gate returned zero accuracy.
    Refused,
}

/// Runs the `primest energy` or `primest area` command.
///
/// Returns exit code 0 with the estimate on stdout, or 1 if the query is
/// not supported.
pub fn run(
    args: &QueryArgs,
    kind: EstimateKind,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let estimator = build_estimator(global)?;
    let query = read_query(&args.query)?;
    let sink = DiagnosticSink::new();

    let outcome = evaluate(&estimator, &query, kind, &sink)?;
    let diagnostics = sink.take_all();

    match global.format {
        ReportFormat::Text => {
            eprint!("{}", render_diagnostics(&diagnostics, global));
            match &outcome {
                Outcome::Estimated { estimate, .. } => println!("{estimate}"),
                Outcome::Refused => eprintln!(
                    "error: {} does not support this {} query",
                    estimator.name(),
                    kind_name(kind)
                ),
            }
        }
        ReportFormat::Json => {
            let json = match &outcome {
                Outcome::Estimated { accuracy, estimate } => serde_json::json!({
                    "class_name": query.class_name,
                    "accuracy": accuracy,
                    "value": estimate.value,
                    "unit": estimate.unit.symbol(),
                    "diagnostics": diagnostics,
                }),
                Outcome::Refused => serde_json::json!({
                    "class_name": query.class_name,
                    "accuracy": 0,
                    "diagnostics": diagnostics,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    match outcome {
        Outcome::Estimated { .. } => Ok(0),
        Outcome::Refused => Ok(1),
    }
}

/// Gates a query and estimates it if supported.
pub fn evaluate(
    estimator: &dyn EstimatorPlugIn,
    query: &Query,
    kind: EstimateKind,
    sink: &DiagnosticSink,
) -> Result<Outcome, Box<dyn std::error::Error>> {
    let accuracy = check(estimator, query, kind, sink)?;
    if !accuracy.is_supported() {
        return Ok(Outcome::Refused);
    }
    let estimate = match kind {
        EstimateKind::Energy => estimator.estimate_energy(query, sink)?,
        EstimateKind::Area => estimator.estimate_area(query, sink)?,
    };
    Ok(Outcome::Estimated {
        accuracy: accuracy.percent(),
        estimate,
    })
}

fn kind_name(kind: EstimateKind) -> &'static str {
    match kind {
        EstimateKind::Energy => "energy",
        EstimateKind::Area => "area",
    }
}
