use std::collections::HashMap;
use std::hash::Hash;

use crate::number::{IntOrFloat, Number};

/// Sums the `i64` values of `m`. Overflow wraps.
pub fn sum_ints(m: &HashMap<String, i64>) -> i64 {
    let mut s: i64 = 0;
    for v in m.values() {
        s = s.wrapping_add(*v);
    }
    s
}

/// Sums the `f64` values of `m`.
pub fn sum_floats(m: &HashMap<String, f64>) -> f64 {
    let mut s: f64 = 0.0;
    for v in m.values() {
        s += v;
    }
    s
}

/// Sums the values of `m`, which may be `i64` or `f64`.
///
/// Type arguments can be spelled out or left to inference:
///
/// ```
/// use std::collections::HashMap;
/// use tally_core::sum_ints_or_floats;
///
/// let ints = HashMap::from([("first".to_string(), 34i64), ("second".to_string(), 12)]);
/// assert_eq!(sum_ints_or_floats::<String, i64>(&ints), 46);
/// assert_eq!(sum_ints_or_floats(&ints), 46);
/// ```
///
/// Any other value type does not compile:
///
/// ```compile_fail
/// use std::collections::HashMap;
///
/// let m: HashMap<&str, u64> = HashMap::from([("a", 1)]);
/// tally_core::sum_ints_or_floats(&m);
/// ```
///
/// ```compile_fail
/// use std::collections::HashMap;
///
/// let m: HashMap<&str, String> = HashMap::from([("a", "1".to_string())]);
/// tally_core::sum_ints_or_floats::<&str, String>(&m);
/// ```
pub fn sum_ints_or_floats<K, V>(m: &HashMap<K, V>) -> V
where
    K: Eq + Hash,
    V: IntOrFloat,
{
    let mut s = V::ZERO;
    for &v in m.values() {
        s = s.accumulate(v);
    }
    s
}

/// Sums the values of `m`, for any value type satisfying [`Number`].
///
/// Other value types are rejected at compile time:
///
/// ```compile_fail
/// use std::collections::HashMap;
///
/// let m: HashMap<&str, i32> = HashMap::from([("a", 1)]);
/// tally_core::sum_numbers(&m);
/// ```
///
/// ```compile_fail
/// use std::collections::HashMap;
///
/// let m: HashMap<&str, f32> = HashMap::from([("a", 1.0)]);
/// tally_core::sum_numbers(&m);
/// ```
///
/// ```compile_fail
/// use std::collections::HashMap;
///
/// let m: HashMap<&str, String> = HashMap::from([("a", "1".to_string())]);
/// tally_core::sum_numbers(&m);
/// ```
///
/// So are keys that cannot be hashed:
///
/// ```compile_fail
/// use std::collections::HashMap;
///
/// let m: HashMap<f64, i64> = HashMap::new();
/// tally_core::sum_numbers(&m);
/// ```
pub fn sum_numbers<K, V>(m: &HashMap<K, V>) -> V
where
    K: Eq + Hash,
    V: Number,
{
    let mut s = V::ZERO;
    for &v in m.values() {
        s = s.accumulate(v);
    }
    s
}
