// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Construction and text errors.
//!
//! Validation failures ([`RangeError`]) and grammar failures ([`FormatError`]) are
//! separate types so callers can tell them apart without string matching.
//! [`CartonError`] wraps both for operations (parsing) that can hit either.

use thiserror::Error;

/// An edge fell outside `(0, 10]` meters after unit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("edge {index} is out of range: {meters} m (must be in (0, 10] m)")]
pub struct RangeError {
    /// 1-based position of the offending edge (1 = a, 2 = b, 3 = c).
    pub index: usize,
    /// The rejected value, already converted to meters.
    pub meters: f64,
}

/// A format specifier or textual input did not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format specifier was not one of `m`, `cm`, `mm`.
    #[error("unknown format specifier: {0:?}")]
    UnknownSpec(String),
    /// Input did not split into exactly six tokens.
    #[error("expected 6 tokens (number unit × 3), found {0}")]
    TokenCount(usize),
    /// A numeric token could not be parsed.
    #[error("invalid number: {0:?}")]
    Number(String),
    /// A unit token was not one of `m`, `cm`, `mm`.
    #[error("unknown unit of measure: {0:?}")]
    UnknownUnit(String),
    /// A unit policy name was not `per-term` or `trailing`.
    #[error("unknown unit policy: {0:?}")]
    UnknownPolicy(String),
}

/// Any failure from building a [`crate::Carton`] out of text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartonError {
    /// The text was well formed but an edge violated the range invariant.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// The text did not match the grammar.
    #[error(transparent)]
    Format(#[from] FormatError),
}
