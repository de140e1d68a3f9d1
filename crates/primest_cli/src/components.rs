//! `primest components`: print the component manifest.

use primest_estimate::{EstimatorPlugIn, SupportedComponent};

use crate::context::build_estimator;
use crate::{GlobalArgs, ReportFormat};

/// Runs the `primest components` command.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let estimator = build_estimator(global)?;
    let components = estimator.supported_components();
    match global.format {
        ReportFormat::Text => {
            for component in &components {
                println!("{}", format_component(component));
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&components)?);
        }
    }
    Ok(0)
}

/// Formats one manifest entry as `class(attr, ...): action, ...`.
pub fn format_component(component: &SupportedComponent) -> String {
    format!(
        "{}({}): {}",
        component.class_name,
        component.attributes.join(", "),
        component.actions.join(", ")
    )
}
