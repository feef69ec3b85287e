// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision issues that `assert_eq!` cannot. Exact scenarios that are
//! representable in binary floating point still use `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

/// Tolerance for rectangles checked against hand-computed decimal expectations,
/// which are only given to a few decimal places.
pub const SCENARIO_EPSILON: f64 = 1e-3;
