//! Numeric mappings that arrive as untyped JSON.
//!
//! The compile-time bounds on [`crate::sum_numbers`] cannot help when the
//! values come from a file, so the kind is checked once here, on entry, and
//! anything that is not cleanly `i64` or `f64` is refused.

use std::collections::HashMap;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{Number as JsonNumber, Value};
use tally_models::{NumericKind, SumReport, SumValue, SumVariant};

use crate::number::Number;
use crate::sum::{sum_floats, sum_ints, sum_ints_or_floats, sum_numbers};

/// Which kind the caller expects the values to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindHint {
    /// Integers if every value is an integer, floats if every value is a float
    #[default]
    Auto,
    Int64,
    Float64,
}

impl From<NumericKind> for KindHint {
    fn from(kind: NumericKind) -> Self {
        match kind {
            NumericKind::Int64 => KindHint::Int64,
            NumericKind::Float64 => KindHint::Float64,
        }
    }
}

/// A validated mapping with a single value kind
#[derive(Debug, Clone, PartialEq)]
pub enum NumericMap {
    Int(HashMap<String, i64>),
    Float(HashMap<String, f64>),
}

impl NumericMap {
    pub fn from_json_str(text: &str, hint: KindHint) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("invalid JSON")?;
        Self::from_json(&value, hint)
    }

    pub fn from_json(value: &Value, hint: KindHint) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            anyhow!(
                "expected a JSON object mapping keys to numbers, found {}",
                json_type(value)
            )
        })?;

        let mut numbers: Vec<(&str, &JsonNumber)> = Vec::with_capacity(obj.len());
        for (key, v) in obj {
            match v {
                Value::Number(n) => numbers.push((key.as_str(), n)),
                other => bail!(
                    "value for key '{}' is {}, not a number",
                    key,
                    json_type(other)
                ),
            }
        }

        let map = match hint {
            KindHint::Int64 => NumericMap::Int(collect_ints(&numbers)?),
            KindHint::Float64 => NumericMap::Float(collect_floats(&numbers)?),
            KindHint::Auto => {
                let int_count = numbers.iter().filter(|(_, n)| !n.is_f64()).count();
                if int_count == numbers.len() {
                    NumericMap::Int(collect_ints(&numbers)?)
                } else if int_count == 0 {
                    NumericMap::Float(collect_floats(&numbers)?)
                } else {
                    bail!(
                        "mixed numeric kinds: {} of {} values are integers, the rest are floats; \
                         choose int64 or float64 explicitly",
                        int_count,
                        numbers.len()
                    )
                }
            }
        };

        log::debug!(
            "validated mapping: {} entries of kind {}",
            map.len(),
            map.kind()
        );
        Ok(map)
    }

    pub fn kind(&self) -> NumericKind {
        match self {
            NumericMap::Int(_) => NumericKind::Int64,
            NumericMap::Float(_) => NumericKind::Float64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NumericMap::Int(m) => m.len(),
            NumericMap::Float(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sums through the entry point named by `variant`
    pub fn sum(&self, variant: SumVariant) -> SumValue {
        self.report(variant).value
    }

    pub fn report(&self, variant: SumVariant) -> SumReport {
        match self {
            NumericMap::Int(m) => report_of(m, variant, sum_ints),
            NumericMap::Float(m) => report_of(m, variant, sum_floats),
        }
    }

    /// Runs every entry point over the same mapping
    pub fn sum_all(&self) -> Vec<SumReport> {
        SumVariant::ALL.iter().map(|&v| self.report(v)).collect()
    }
}

/// Returns the shared value if every report agrees, an error naming the
/// first disagreement otherwise.
///
/// The entry points walk the same `HashMap` in the same order, so even float
/// results are compared exactly.
pub fn verify_agreement(reports: &[SumReport]) -> Result<SumValue> {
    let first = reports
        .first()
        .ok_or_else(|| anyhow!("no sums to compare"))?;
    for r in &reports[1..] {
        if r.value.kind() != first.value.kind() || r.kind != first.kind {
            bail!(
                "entry points disagree on kind: {} gave {}, {} gave {}",
                first.variant,
                first.value.kind(),
                r.variant,
                r.value.kind()
            );
        }
        let same = match (first.value, r.value) {
            (SumValue::Int(a), SumValue::Int(b)) => a == b,
            (SumValue::Float(a), SumValue::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => false,
        };
        if !same {
            bail!(
                "entry points disagree: {} gave {}, {} gave {}",
                first.variant,
                first.value,
                r.variant,
                r.value
            );
        }
    }
    Ok(first.value)
}

/// Sums `m` with one entry point. `non_generic` is the fixed-type function
/// for `V`; the generic entry points are instantiated at `V` directly.
fn report_of<V: Number>(
    m: &HashMap<String, V>,
    variant: SumVariant,
    non_generic: fn(&HashMap<String, V>) -> V,
) -> SumReport {
    let value = match variant {
        SumVariant::NonGeneric => non_generic(m),
        SumVariant::GenericExplicit => sum_ints_or_floats::<String, V>(m),
        SumVariant::GenericInferred => sum_ints_or_floats(m),
        SumVariant::Constraint => sum_numbers(m),
    };
    SumReport {
        variant,
        kind: V::KIND,
        value: value.into(),
        entries: m.len(),
    }
}

fn collect_ints(numbers: &[(&str, &JsonNumber)]) -> Result<HashMap<String, i64>> {
    let mut out = HashMap::with_capacity(numbers.len());
    for (key, n) in numbers {
        let v = match n.as_i64() {
            Some(v) => v,
            None if n.is_u64() => bail!(
                "value for key '{}' ({}) does not fit in a 64-bit signed integer",
                key,
                n
            ),
            None => bail!("value for key '{}' ({}) is not an integer", key, n),
        };
        out.insert(key.to_string(), v);
    }
    Ok(out)
}

fn collect_floats(numbers: &[(&str, &JsonNumber)]) -> Result<HashMap<String, f64>> {
    let mut out = HashMap::with_capacity(numbers.len());
    for (key, n) in numbers {
        let v = n
            .as_f64()
            .with_context(|| format!("value for key '{}' ({}) is not representable as f64", key, n))?;
        out.insert(key.to_string(), v);
    }
    Ok(out)
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
