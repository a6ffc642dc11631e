// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core value types (carton, unit of measure).
//!
//! Rounding notes:
//! - Edges are stored unrounded in meters; accessors round to 3 decimals,
//!   volume to 9 and surface area to 6.
//! - Midpoints round half-to-even so that `x.xxx5` edges settle the same way
//!   on every platform.

#[doc = "Rectangular box with validated edges."]
pub mod carton;
#[doc = "Units of length accepted at the API boundary."]
pub mod unit;

/// Rounds `value` to `digits` decimal places, ties to even.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}
