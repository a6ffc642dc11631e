// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Carton geometry primitives.

This crate provides:
- A validated rectangular box value (`Carton`) with rounded edge accessors,
  volume, surface area, and a positional bounding combination.
- Units of length at the API boundary (`UnitOfMeasure`); meters internally.
- A text grammar (`1 m × 2 m × 3 m`) for formatting and parsing, with a choice of
  how unit tokens are applied (`UnitPolicy`).

Design notes:
- Values are immutable and `Copy`; every operation yields a new value or a view.
- Equality ignores axis order: two cartons are equal when their sorted rounded
  edges match, and `Hash` is computed over the same sorted key.
- Text output never depends on the process locale.
"]

/// Error kinds for construction and text handling.
pub mod error;
/// Formatting and parsing of the `A u × B u × C u` grammar.
pub mod text;
/// Foundational value types.
pub mod types;

pub use error::{CartonError, FormatError, RangeError};
pub use text::{DisplayIn, UnitPolicy, SEPARATOR};
pub use types::carton::{combine, Carton, CartonBuilder, Edges, DEFAULT_EDGE_M, MAX_EDGE_M};
pub use types::unit::UnitOfMeasure;
