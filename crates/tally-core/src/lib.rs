//! # tally-core
//!
//! Sums the values of a key-to-number mapping.
//!
//! ## Entry points
//! - [`sum_ints`] / [`sum_floats`]: one function per value kind
//! - [`sum_ints_or_floats`]: generic over key and value, value bounded to `i64` or `f64`
//! - [`sum_numbers`]: generic, value bounded by the reusable [`Number`] constraint
//!
//! All four start from zero and add every value once. Integer sums wrap on
//! overflow; float sums carry ordinary IEEE-754 rounding.
//!
//! Mappings that arrive as JSON are validated by [`NumericMap`] before any
//! of the above is called.

pub mod mapping;
pub mod number;
pub mod sum;

pub use mapping::{verify_agreement, KindHint, NumericMap};
pub use number::{IntOrFloat, Number};
pub use sum::{sum_floats, sum_ints, sum_ints_or_floats, sum_numbers};
