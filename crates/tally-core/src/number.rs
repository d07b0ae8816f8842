use tally_models::{NumericKind, SumValue};

mod private {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// Value types a mapping may be summed over: `i64` or `f64`, nothing else.
///
/// Sealed, so no other crate can widen the set.
///
/// ```compile_fail
/// #[derive(Clone, Copy)]
/// struct Meters(i64);
///
/// impl tally_core::IntOrFloat for Meters {
///     const ZERO: Self = Meters(0);
///     fn accumulate(self, rhs: Self) -> Self {
///         Meters(self.0 + rhs.0)
///     }
/// }
/// ```
pub trait IntOrFloat: private::Sealed + Copy {
    /// Additive identity
    const ZERO: Self;

    /// `self + rhs`. Integers wrap on overflow, floats round per IEEE-754.
    fn accumulate(self, rhs: Self) -> Self;
}

impl IntOrFloat for i64 {
    const ZERO: Self = 0;

    fn accumulate(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl IntOrFloat for f64 {
    const ZERO: Self = 0.0;

    fn accumulate(self, rhs: Self) -> Self {
        self + rhs
    }
}

/// Reusable numeric constraint, bound by `sum_numbers` and by the per-kind
/// reporting in `NumericMap`.
///
/// Implemented for `i64` and `f64` only.
pub trait Number: IntOrFloat + Into<SumValue> {
    const KIND: NumericKind;
}

impl Number for i64 {
    const KIND: NumericKind = NumericKind::Int64;
}

impl Number for f64 {
    const KIND: NumericKind = NumericKind::Float64;
}
