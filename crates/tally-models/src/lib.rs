use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two value kinds a numeric mapping may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    Int64,
    Float64,
}

impl NumericKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericKind::Int64 => "int64",
            NumericKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry point that produced a sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SumVariant {
    /// `sum_ints` / `sum_floats`
    NonGeneric,
    /// `sum_ints_or_floats::<K, V>` with explicit type arguments
    GenericExplicit,
    /// `sum_ints_or_floats` with inferred type arguments
    GenericInferred,
    /// `sum_numbers`, bounded by the `Number` trait
    Constraint,
}

impl SumVariant {
    pub const ALL: [SumVariant; 4] = [
        SumVariant::NonGeneric,
        SumVariant::GenericExplicit,
        SumVariant::GenericInferred,
        SumVariant::Constraint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SumVariant::NonGeneric => "non-generic",
            SumVariant::GenericExplicit => "generic-explicit",
            SumVariant::GenericInferred => "generic-inferred",
            SumVariant::Constraint => "constraint",
        }
    }

    /// Heading used by the `demo` listing
    pub fn heading(&self) -> &'static str {
        match self {
            SumVariant::NonGeneric => "Non-Generic Sums",
            SumVariant::GenericExplicit => "Generic Sums",
            SumVariant::GenericInferred => "Generic Sums, type parameters inferred",
            SumVariant::Constraint => "Generic Sums with Constraint",
        }
    }
}

impl fmt::Display for SumVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sum that remembers which numeric kind it came from.
///
/// Displays exactly like the wrapped primitive, so `46` stays `46` and
/// `62.97` stays `62.97`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SumValue {
    Int(i64),
    Float(f64),
}

impl SumValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            SumValue::Int(_) => NumericKind::Int64,
            SumValue::Float(_) => NumericKind::Float64,
        }
    }
}

impl fmt::Display for SumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumValue::Int(v) => write!(f, "{v}"),
            SumValue::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for SumValue {
    fn from(v: i64) -> Self {
        SumValue::Int(v)
    }
}

impl From<f64> for SumValue {
    fn from(v: f64) -> Self {
        SumValue::Float(v)
    }
}

/// Result of one summation, as printed by `tally sum --json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumReport {
    pub variant: SumVariant,
    pub kind: NumericKind,
    pub value: SumValue,
    /// Number of key/value pairs that were summed
    pub entries: usize,
}

/// Greeting produced for a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub name: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_value_displays_like_primitive() {
        assert_eq!(SumValue::Int(46).to_string(), "46");
        assert_eq!(SumValue::Float(62.5).to_string(), "62.5");
        assert_eq!(SumValue::Float(0.0).to_string(), "0");
        assert_eq!(SumValue::Int(-3).kind(), NumericKind::Int64);
        assert_eq!(SumValue::from(1.5).kind(), NumericKind::Float64);
    }

    #[test]
    fn report_json_shape() {
        let report = SumReport {
            variant: SumVariant::GenericInferred,
            kind: NumericKind::Int64,
            value: SumValue::Int(46),
            entries: 2,
        };
        let s = serde_json::to_string(&report).unwrap();
        assert_eq!(
            s,
            r#"{"variant":"generic-inferred","kind":"int64","value":46,"entries":2}"#
        );

        let got: SumReport = serde_json::from_str(&s).unwrap();
        assert_eq!(got, report);
    }

    #[test]
    fn float_report_keeps_float_value() {
        let s = r#"{"variant":"constraint","kind":"float64","value":62.97,"entries":2}"#;
        let got: SumReport = serde_json::from_str(s).unwrap();
        assert_eq!(got.value, SumValue::Float(62.97));
        assert_eq!(got.variant, SumVariant::Constraint);
    }

    #[test]
    fn variant_names_and_headings() {
        let names: Vec<&str> = SumVariant::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(
            names,
            vec!["non-generic", "generic-explicit", "generic-inferred", "constraint"]
        );
        assert_eq!(SumVariant::NonGeneric.heading(), "Non-Generic Sums");
        assert_eq!(
            SumVariant::Constraint.heading(),
            "Generic Sums with Constraint"
        );
    }

    #[test]
    fn greeting_json() {
        let g = Greeting {
            name: "Gladys".into(),
            message: "Hi, Gladys. Welcome!".into(),
        };
        let s = serde_json::to_string(&g).unwrap();
        assert_eq!(s, r#"{"name":"Gladys","message":"Hi, Gladys. Welcome!"}"#);
    }
}
