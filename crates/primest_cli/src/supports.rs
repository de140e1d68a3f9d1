//! `primest supports`: report the accuracy claimed for a query.

use primest_diagnostics::DiagnosticSink;
use primest_estimate::{Accuracy, EstimatorPlugIn, Query};

use crate::context::{build_estimator, read_query, render_diagnostics};
use crate::{EstimateKind, GlobalArgs, ReportFormat, SupportsArgs};

/// Runs the `primest supports` command.
///
/// Prints the accuracy and any diagnostics explaining a zero. The exit code
/// is 0 whether or not the query is supported; only a malformed query or
/// configuration fails.
pub fn run(args: &SupportsArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let estimator = build_estimator(global)?;
    let query = read_query(&args.query)?;
    let sink = DiagnosticSink::new();

    let accuracy = check(&estimator, &query, args.kind, &sink)?;
    let diagnostics = sink.take_all();

    match global.format {
        ReportFormat::Text => {
            eprint!("{}", render_diagnostics(&diagnostics, global));
            println!("{}", accuracy.percent());
        }
        ReportFormat::Json => {
            let json = serde_json::json!({
                "estimator": estimator.name(),
                "class_name": query.class_name,
                "accuracy": accuracy,
                "diagnostics": diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(0)
}

/// Runs the support gate for one kind of estimate.
pub fn check(
    estimator: &dyn EstimatorPlugIn,
    query: &Query,
    kind: EstimateKind,
    sink: &DiagnosticSink,
) -> Result<Accuracy, Box<dyn std::error::Error>> {
    let accuracy = match kind {
        EstimateKind::Energy => estimator.supports_energy(query, sink)?,
        EstimateKind::Area => estimator.supports_area(query, sink)?,
    };
    Ok(accuracy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::parse_query;
    use primest_estimate::TableEstimator;

    #[test]
    fn sram_caps_differ_by_kind() {
        let est = TableEstimator::new().unwrap();
        let sink = DiagnosticSink::new();
        let q = parse_query(
            r#"{"class_name": "SRAM", "attributes": {"technology": 40, "width": 24, "depth": 64}}"#,
        )
        .unwrap();
        assert_eq!(check(&est, &q, EstimateKind::Energy, &sink).unwrap().percent(), 70);
        assert_eq!(check(&est, &q, EstimateKind::Area, &sink).unwrap().percent(), 0);
        assert_eq!(sink.take_all().len(), 1);
    }

    #[test]
    fn missing_technology_fails() {
        let est = TableEstimator::new().unwrap();
        let sink = DiagnosticSink::new();
        let q = parse_query(r#"{"class_name": "reg", "attributes": {"width": 8}}"#).unwrap();
        let err = check(&est, &q, EstimateKind::Energy, &sink).unwrap_err();
        assert!(err.to_string().contains("technology"));
    }
}
