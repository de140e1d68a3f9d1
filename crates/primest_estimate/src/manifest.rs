//! The list of components this estimator advertises.

use crate::query::PrimitiveClass;
use serde::Serialize;

/// Attributes every component accepts, listed before its own.
pub const COMMON_ATTRIBUTES: [&str; 2] = ["technology", "global_cycle_seconds"];

const WIDTH: &[&str] = &["width"];
const WIDTH_DEPTH: &[&str] = &["width", "depth"];
const CROSSBAR: &[&str] = &["n_inputs", "n_outputs", "width"];
const WIRE: &[&str] = &["length", "width"];
const FLOAT: &[&str] = &["exponent", "mantissa"];
const LEAK_ACCESS: &[&str] = &["leak", "access"];
const TRANSFERS: &[&str] = &["transfer", "transfer_random"];

/// One advertised component class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SupportedComponent {
    /// The class name as the framework spells it.
    pub class_name: &'static str,
    /// Accepted attributes, common ones first.
    pub attributes: Vec<&'static str>,
    /// Actions with an energy model.
    pub actions: Vec<&'static str>,
}

/// Returns the manifest, one entry per class in [`PrimitiveClass::ALL`] order.
pub fn supported_components() -> Vec<SupportedComponent> {
    PrimitiveClass::ALL
        .into_iter()
        .map(|class| {
            let (own, actions) = match class {
                PrimitiveClass::RegFile | PrimitiveClass::Sram | PrimitiveClass::Fifo => {
                    (WIDTH_DEPTH, LEAK_ACCESS)
                }
                PrimitiveClass::Crossbar => (CROSSBAR, LEAK_ACCESS),
                PrimitiveClass::Wire => (WIRE, TRANSFERS),
                PrimitiveClass::FpAdder | PrimitiveClass::FpMultiplier | PrimitiveClass::FpMac => {
                    (FLOAT, LEAK_ACCESS)
                }
                PrimitiveClass::Counter
                | PrimitiveClass::Comparator
                | PrimitiveClass::Bitwise
                | PrimitiveClass::IntAdder
                | PrimitiveClass::IntMultiplier
                | PrimitiveClass::IntMac
                | PrimitiveClass::Reg => (WIDTH, LEAK_ACCESS),
            };
            SupportedComponent {
                class_name: class.name(),
                attributes: COMMON_ATTRIBUTES.iter().chain(own).copied().collect(),
                actions: actions.to_vec(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_class() {
        let manifest = supported_components();
        assert_eq!(manifest.len(), 15);
        assert_eq!(manifest[0].class_name, "regfile");
        assert_eq!(manifest[14].class_name, "reg");
    }

    #[test]
    fn common_attributes_first() {
        for component in supported_components() {
            assert_eq!(&component.attributes[..2], &COMMON_ATTRIBUTES);
        }
    }

    #[test]
    fn wire_entry() {
        let wire = supported_components()
            .into_iter()
            .find(|c| c.class_name == "wire")
            .unwrap();
        assert_eq!(
            wire.attributes,
            vec!["technology", "global_cycle_seconds", "length", "width"]
        );
        assert_eq!(wire.actions, vec!["transfer", "transfer_random"]);
    }

    #[test]
    fn crossbar_entry() {
        let xbar = supported_components()
            .into_iter()
            .find(|c| c.class_name == "crossbar")
            .unwrap();
        assert_eq!(
            &xbar.attributes[2..],
            &["n_inputs", "n_outputs", "width"]
        );
        assert_eq!(xbar.actions, vec!["leak", "access"]);
    }

    #[test]
    fn serializes() {
        let json = serde_json::to_value(&supported_components()[1]).unwrap();
        assert_eq!(json["class_name"], "SRAM");
        assert_eq!(json["actions"][0], "leak");
    }
}
