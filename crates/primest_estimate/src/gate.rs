//! Deciding whether a query is in scope, and how confidently.
//!
//! The gate runs before any estimate. An out-of-scope query is answered
//! with [`Accuracy::UNSUPPORTED`] plus a note explaining why, so the hosting
//! framework can route it to another estimator. Only a query that breaks
//! the interface contract (no technology, non-numeric SRAM dimensions) is an
//! error.

use crate::accuracy::Accuracy;
use crate::error::EstimateError;
use crate::query::{PrimitiveClass, Query};
use primest_common::AttrValue;
use primest_config::EstimatorConfig;
use primest_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};

/// Which estimate a support check is for. The SRAM width cap differs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Purpose {
    /// Energy per action.
    Energy,
    /// Silicon area.
    Area,
}

/// Checks an energy query.
///
/// # Errors
///
/// Returns [`EstimateError::MissingAttribute`] if the query has no
/// technology, or an SRAM query lacks its width or depth.
pub fn supports_energy(
    query: &Query,
    config: &EstimatorConfig,
    sink: &DiagnosticSink,
) -> Result<Accuracy, EstimateError> {
    check(query, config, sink, Purpose::Energy)
}

/// Checks an area query.
///
/// # Errors
///
/// Same as [`supports_energy`].
pub fn supports_area(
    query: &Query,
    config: &EstimatorConfig,
    sink: &DiagnosticSink,
) -> Result<Accuracy, EstimateError> {
    check(query, config, sink, Purpose::Area)
}

fn check(
    query: &Query,
    config: &EstimatorConfig,
    sink: &DiagnosticSink,
    purpose: Purpose,
) -> Result<Accuracy, EstimateError> {
    let technology = query.technology()?;

    let Ok(class) = query.class_name.parse::<PrimitiveClass>() else {
        let supported: Vec<&str> = PrimitiveClass::ALL.iter().map(|c| c.name()).collect();
        sink.emit(
            Diagnostic::note(
                DiagnosticCode::UNSUPPORTED_CLASS,
                format!("primitive class '{}' is not supported", query.class_name),
            )
            .with_class(&query.class_name)
            .with_note(format!("supported classes: {}", supported.join(", "))),
        );
        return Ok(Accuracy::UNSUPPORTED);
    };

    let nodes = &config.estimator.technologies;
    if !nodes.iter().any(|&node| technology_matches(technology, node)) {
        sink.emit(
            Diagnostic::note(
                DiagnosticCode::UNSUPPORTED_TECHNOLOGY,
                format!("technology {technology} is not supported"),
            )
            .with_class(&query.class_name)
            .with_note(format!("accepted forms: {}", accepted_forms(nodes).join(", "))),
        );
        return Ok(Accuracy::UNSUPPORTED);
    }

    if class == PrimitiveClass::Sram {
        let limits = &config.sram;
        let max_width = match purpose {
            Purpose::Energy => limits.max_energy_width,
            Purpose::Area => limits.max_area_width,
        };
        let width = query.number("width")?;
        let depth = query.number("depth")?;
        if depth > f64::from(limits.max_depth) || width > f64::from(max_width) {
            sink.emit(
                Diagnostic::note(
                    DiagnosticCode::SRAM_OUT_OF_RANGE,
                    format!("SRAM of depth {depth} and width {width} is too large to model as a register file"),
                )
                .with_class(&query.class_name)
                .with_help(format!(
                    "{} estimates support depth <= {} and width <= {max_width}",
                    match purpose {
                        Purpose::Energy => "energy",
                        Purpose::Area => "area",
                    },
                    limits.max_depth,
                )),
            );
            return Ok(Accuracy::UNSUPPORTED);
        }
    }

    Ok(Accuracy::new(config.estimator.accuracy))
}

/// Returns `true` if `value` names the node `nm` in an accepted form:
/// `40`, `40.0`, `"40"` or `"40nm"`.
fn technology_matches(value: &AttrValue, nm: u32) -> bool {
    match value {
        AttrValue::Int(v) => *v == i64::from(nm),
        AttrValue::Float(v) => *v == f64::from(nm),
        AttrValue::Str(s) => {
            let plain = nm.to_string();
            *s == plain || *s == format!("{plain}nm")
        }
        AttrValue::Bool(_) | AttrValue::Null => false,
    }
}

fn accepted_forms(nodes: &[u32]) -> Vec<String> {
    nodes
        .iter()
        .flat_map(|nm| [nm.to_string(), format!("\"{nm}\""), format!("\"{nm}nm\"")])
        .collect()
}
