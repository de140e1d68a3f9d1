//! Queries submitted by the hosting framework.

use crate::error::EstimateError;
use primest_common::AttrValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single estimation request.
///
/// Queries are values: the `with_*` builders consume and return a query, so
/// a derived query is written `query.clone().with_action("leak")` rather
/// than by mutating a shared copy.
///
/// ```
/// use primest_estimate::Query;
///
/// let query = Query::new("intadder")
///     .with_attribute("technology", 45)
///     .with_attribute("width", 32)
///     .with_action("access");
/// assert_eq!(query.class_name, "intadder");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// The primitive class name, e.g. `"regfile"` or `"fpmac"`.
    pub class_name: String,
    /// Declared attributes of the component instance.
    #[serde(default)]
    pub attributes: BTreeMap<String, AttrValue>,
    /// The requested action; area queries carry none.
    #[serde(default)]
    pub action_name: Option<String>,
    /// Optional arguments of the action.
    #[serde(default)]
    pub arguments: Option<BTreeMap<String, AttrValue>>,
}

impl Query {
    /// Creates a query with no attributes, action or arguments.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            attributes: BTreeMap::new(),
            action_name: None,
            arguments: None,
        }
    }

    /// Returns this query with an attribute set.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns this query with its action replaced.
    pub fn with_action(mut self, action_name: impl Into<String>) -> Self {
        self.action_name = Some(action_name.into());
        self
    }

    /// Returns this query with an action argument set.
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.arguments
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Returns an attribute value, if present.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Returns an action argument value, if present.
    pub fn argument(&self, name: &str) -> Option<&AttrValue> {
        self.arguments.as_ref().and_then(|args| args.get(name))
    }

    /// Returns the technology attribute.
    ///
    /// # Errors
    ///
    /// Every query must name its technology; a missing one is
    /// [`EstimateError::MissingAttribute`].
    pub fn technology(&self) -> Result<&AttrValue, EstimateError> {
        self.attribute("technology")
            .ok_or_else(|| self.missing("technology"))
    }

    /// Returns a required non-negative numeric attribute.
    ///
    /// Numeric strings such as `"32"` are accepted.
    pub fn number(&self, name: &'static str) -> Result<f64, EstimateError> {
        let value = self.attribute(name).ok_or_else(|| self.missing(name))?;
        self.non_negative(name, value)
    }

    /// Returns an optional numeric attribute, or `default` when absent.
    pub fn number_or(&self, name: &'static str, default: f64) -> Result<f64, EstimateError> {
        match self.attribute(name) {
            Some(value) => self.non_negative(name, value),
            None => Ok(default),
        }
    }

    /// Returns an optional numeric action argument, or `default` when absent.
    pub fn argument_or(&self, name: &'static str, default: f64) -> Result<f64, EstimateError> {
        match self.argument(name) {
            Some(value) => self.non_negative(name, value),
            None => Ok(default),
        }
    }

    /// Returns an optional numeric action argument of either sign, or
    /// `default` when absent.
    pub fn signed_argument_or(&self, name: &'static str, default: f64) -> Result<f64, EstimateError> {
        match self.argument(name) {
            Some(value) => self.finite(name, value),
            None => Ok(default),
        }
    }

    /// Returns the flattened view older framework interfaces expect.
    ///
    /// The result is an object with the keys `class_name`, `attributes`,
    /// `action_name` and `arguments`; absent optional parts are `null`.
    pub fn legacy_interface(&self) -> serde_json::Value {
        serde_json::json!({
            "class_name": self.class_name,
            "attributes": self.attributes,
            "action_name": self.action_name,
            "arguments": self.arguments,
        })
    }

    fn non_negative(&self, name: &str, value: &AttrValue) -> Result<f64, EstimateError> {
        let number = self.finite(name, value)?;
        if number < 0.0 {
            return Err(self.invalid(name, value, "must be a non-negative number"));
        }
        Ok(number)
    }

    fn finite(&self, name: &str, value: &AttrValue) -> Result<f64, EstimateError> {
        let number = value
            .as_f64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
            .ok_or_else(|| self.invalid(name, value, "must be a number"))?;
        if !number.is_finite() {
            return Err(self.invalid(name, value, "must be a finite number"));
        }
        Ok(number)
    }

    fn missing(&self, attribute: &'static str) -> EstimateError {
        EstimateError::MissingAttribute {
            class_name: self.class_name.clone(),
            attribute,
        }
    }

    fn invalid(&self, name: &str, value: &AttrValue, reason: &'static str) -> EstimateError {
        EstimateError::InvalidAttribute {
            class_name: self.class_name.clone(),
            name: name.to_string(),
            value: value.to_string(),
            reason,
        }
    }
}

/// The primitive classes this estimator models.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PrimitiveClass {
    /// Register file.
    RegFile,
    /// Small SRAM, modeled as a register file.
    Sram,
    /// Counter.
    Counter,
    /// Comparator.
    Comparator,
    /// Crossbar interconnect.
    Crossbar,
    /// On-chip wire.
    Wire,
    /// FIFO queue.
    Fifo,
    /// Bitwise logic unit.
    Bitwise,
    /// Integer adder.
    IntAdder,
    /// Integer multiplier.
    IntMultiplier,
    /// Integer multiply-accumulate unit.
    IntMac,
    /// Floating-point adder.
    FpAdder,
    /// Floating-point multiplier.
    FpMultiplier,
    /// Floating-point multiply-accumulate unit.
    FpMac,
    /// Register.
    Reg,
}

impl PrimitiveClass {
    /// Every class, in manifest order.
    pub const ALL: [PrimitiveClass; 15] = [
        PrimitiveClass::RegFile,
        PrimitiveClass::Sram,
        PrimitiveClass::Counter,
        PrimitiveClass::Comparator,
        PrimitiveClass::Crossbar,
        PrimitiveClass::Wire,
        PrimitiveClass::Fifo,
        PrimitiveClass::Bitwise,
        PrimitiveClass::IntAdder,
        PrimitiveClass::IntMultiplier,
        PrimitiveClass::IntMac,
        PrimitiveClass::FpAdder,
        PrimitiveClass::FpMultiplier,
        PrimitiveClass::FpMac,
        PrimitiveClass::Reg,
    ];

    /// Returns the class name as the framework spells it.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveClass::RegFile => "regfile",
            PrimitiveClass::Sram => "SRAM",
            PrimitiveClass::Counter => "counter",
            PrimitiveClass::Comparator => "comparator",
            PrimitiveClass::Crossbar => "crossbar",
            PrimitiveClass::Wire => "wire",
            PrimitiveClass::Fifo => "FIFO",
            PrimitiveClass::Bitwise => "bitwise",
            PrimitiveClass::IntAdder => "intadder",
            PrimitiveClass::IntMultiplier => "intmultiplier",
            PrimitiveClass::IntMac => "intmac",
            PrimitiveClass::FpAdder => "fpadder",
            PrimitiveClass::FpMultiplier => "fpmultiplier",
            PrimitiveClass::FpMac => "fpmac",
            PrimitiveClass::Reg => "reg",
        }
    }
}

impl fmt::Display for PrimitiveClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveClass {
    type Err = EstimateError;

    /// Class names are matched exactly; `"sram"` is not `"SRAM"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveClass::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| EstimateError::UnsupportedPrimitive(s.to_string()))
    }
}

/// An action a primitive performs.
///
/// Only `leak` reads idle energy; every other action, including ones this
/// estimator has no name for, reads dynamic energy.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    /// Static leakage over one cycle.
    Leak,
    /// A generic access.
    Access,
    /// A wire transfer.
    Transfer,
    /// A wire transfer of random data.
    TransferRandom,
    /// A multiply whose operands are gated off.
    MultGated,
    /// A multiply reusing the previous operands.
    MultReused,
    /// A multiply of random operands.
    MultRandom,
    /// A gated multiply-accumulate.
    MacGated,
    /// A multiply-accumulate reusing the previous operands.
    MacReused,
    /// A multiply-accumulate of random operands.
    MacRandom,
    /// Any other action name.
    Other(String),
}

impl Action {
    /// Parses an action name. Unknown names become [`Action::Other`].
    pub fn parse(name: &str) -> Self {
        match name {
            "leak" => Action::Leak,
            "access" => Action::Access,
            "transfer" => Action::Transfer,
            "transfer_random" => Action::TransferRandom,
            "mult_gated" => Action::MultGated,
            "mult_reused" => Action::MultReused,
            "mult_random" => Action::MultRandom,
            "mac_gated" => Action::MacGated,
            "mac_reused" => Action::MacReused,
            "mac_random" => Action::MacRandom,
            other => Action::Other(other.to_string()),
        }
    }

    /// Returns the action name.
    pub fn name(&self) -> &str {
        match self {
            Action::Leak => "leak",
            Action::Access => "access",
            Action::Transfer => "transfer",
            Action::TransferRandom => "transfer_random",
            Action::MultGated => "mult_gated",
            Action::MultReused => "mult_reused",
            Action::MultRandom => "mult_random",
            Action::MacGated => "mac_gated",
            Action::MacReused => "mac_reused",
            Action::MacRandom => "mac_random",
            Action::Other(name) => name,
        }
    }

    /// Returns `true` for the leak action.
    pub fn is_leak(&self) -> bool {
        *self == Action::Leak
    }

    /// Returns `true` for the actions that move data along a wire.
    pub fn is_transfer(&self) -> bool {
        matches!(self, Action::Transfer | Action::TransferRandom)
    }

    /// Maps a multiply-accumulate action to the multiplier action it implies.
    pub fn mac_to_mult(&self) -> Action {
        match self {
            Action::MacGated => Action::MultGated,
            Action::MacReused => Action::MultReused,
            Action::Leak => Action::Leak,
            _ => Action::MultRandom,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
