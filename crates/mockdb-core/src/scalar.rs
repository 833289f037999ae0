//! Scalar property values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A plain (non-relational) property value
///
/// The variant is decided once, when the caller builds the value, rather
/// than re-derived from runtime shape on every parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
}

impl Scalar {
    /// The kind of this value
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Text(_) => ScalarKind::Text,
            Scalar::Number(_) => ScalarKind::Number,
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::DateTime(_) => ScalarKind::DateTime,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(dt: DateTime<Utc>) -> Self {
        Scalar::DateTime(dt)
    }
}

/// Closed enumeration of scalar kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Text,
    Number,
    Bool,
    DateTime,
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ScalarKind::Text => "text",
            ScalarKind::Number => "number",
            ScalarKind::Bool => "bool",
            ScalarKind::DateTime => "datetime",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Scalar::from("hello"), Scalar::Text("hello".to_string()));
        assert_eq!(Scalar::from(42), Scalar::Number(42.0));
        assert_eq!(Scalar::from(1.5), Scalar::Number(1.5));
        assert_eq!(Scalar::from(true), Scalar::Bool(true));
    }

    #[test]
    fn test_scalar_kind() {
        assert_eq!(Scalar::from("x").kind(), ScalarKind::Text);
        assert_eq!(Scalar::from(0.0).kind(), ScalarKind::Number);
        assert_eq!(Scalar::from(false).kind(), ScalarKind::Bool);
        assert_eq!(Scalar::from(Utc::now()).kind(), ScalarKind::DateTime);
    }

    #[test]
    fn test_scalar_kind_display() {
        assert_eq!(ScalarKind::DateTime.to_string(), "datetime");
        assert_eq!(ScalarKind::Text.to_string(), "text");
    }
}
