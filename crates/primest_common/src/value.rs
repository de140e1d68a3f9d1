//! Loosely-typed attribute and argument values carried by queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute or argument value as supplied by the hosting framework.
///
/// The framework passes whatever its input files contained, so the same
/// attribute may arrive as an integer (`40`), a float (`40.0`) or a string
/// (`"40nm"`). Attributes this estimator never reads may be flags or
/// `null`; they must still deserialize. Deserialization is untagged and
/// tries the variants in declaration order.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A string value, possibly carrying a unit suffix.
    Str(String),
    /// A boolean flag.
    Bool(bool),
    /// An explicit `null`.
    Null,
}

impl AttrValue {
    /// Returns the numeric value, if this is an integer or a float.
    ///
    /// Strings are never coerced; a string that happens to contain a number
    /// is still a string.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Float(v) => Some(*v),
            AttrValue::Str(_) | AttrValue::Bool(_) | AttrValue::Null => None,
        }
    }

    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(v) => write!(f, "Int({v})"),
            AttrValue::Float(v) => write!(f, "Float({v})"),
            AttrValue::Str(s) => write!(f, "Str({s:?})"),
            AttrValue::Bool(v) => write!(f, "Bool({v})"),
            AttrValue::Null => f.write_str("Null"),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Str(s) => write!(f, "{s}"),
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::Null => f.write_str("null"),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_accessors() {
        assert_eq!(AttrValue::Int(32).as_f64(), Some(32.0));
        assert_eq!(AttrValue::Float(1e-9).as_f64(), Some(1e-9));
        assert_eq!(AttrValue::from("32").as_f64(), None);
        assert_eq!(AttrValue::from("45nm").as_str(), Some("45nm"));
        assert_eq!(AttrValue::Int(45).as_str(), None);
        assert_eq!(AttrValue::Bool(true).as_f64(), None);
        assert_eq!(AttrValue::Null.as_f64(), None);
        assert_eq!(AttrValue::Null.as_str(), None);
    }

    #[test]
    fn untagged_deserialization() {
        let v: AttrValue = serde_json::from_str("40").unwrap();
        assert_eq!(v, AttrValue::Int(40));
        let v: AttrValue = serde_json::from_str("5e-9").unwrap();
        assert_eq!(v, AttrValue::Float(5e-9));
        let v: AttrValue = serde_json::from_str("\"40nm\"").unwrap();
        assert_eq!(v, AttrValue::Str("40nm".to_string()));
        let v: AttrValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, AttrValue::Bool(true));
        let v: AttrValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, AttrValue::Null);
    }

    #[test]
    fn flags_and_null_serialize_back() {
        assert_eq!(serde_json::to_string(&AttrValue::Bool(false)).unwrap(), "false");
        assert_eq!(serde_json::to_string(&AttrValue::Null).unwrap(), "null");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", AttrValue::Int(45)), "45");
        assert_eq!(format!("{}", AttrValue::from("1mm")), "1mm");
        assert_eq!(format!("{:?}", AttrValue::from("1mm")), "Str(\"1mm\")");
        assert_eq!(format!("{}", AttrValue::from(true)), "true");
        assert_eq!(format!("{}", AttrValue::Null), "null");
    }
}
