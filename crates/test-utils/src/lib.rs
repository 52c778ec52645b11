//! Shared test utilities for the wind field builder workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Canned mesonet CSV responses
//! - Scattered sample generators
//! - Approximate float assertions
//!
//! Generators return plain `(x, y, value)` tuples so that this crate does not
//! depend on the crates under test.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of `(u, v)` or `(x, y)` pairs.
///
/// # Usage
///
/// ```
/// use test_utils::assert_pair_approx_eq;
///
/// assert_pair_approx_eq!((1.0001, -2.0001), (1.0, -2.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_pair_approx_eq {
    (($a1:expr, $b1:expr), ($a2:expr, $b2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($a1, $a2, $epsilon);
        $crate::assert_approx_eq!($b1, $b2, $epsilon);
    }};
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (a1, b1) = $left;
        let (a2, b2) = $right;
        $crate::assert_approx_eq!(a1, a2, $epsilon);
        $crate::assert_approx_eq!(b1, b2, $epsilon);
    }};
}
