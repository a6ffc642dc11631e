// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use tracing::debug;

use super::round_to;
use super::unit::UnitOfMeasure;
use crate::error::RangeError;

/// Edge length used when a builder leaves an edge unset (meters).
pub const DEFAULT_EDGE_M: f64 = 0.1;
/// Largest admissible edge (meters, inclusive).
pub const MAX_EDGE_M: f64 = 10.0;

/// Rigid rectangular box with three validated edges.
///
/// Invariants:
/// - Every edge is in `(0, MAX_EDGE_M]` meters; checked once, at construction.
/// - Edges are stored unrounded, in meters, in the order given.
///
/// Equality and hashing use the ascending rounded edges, so a carton lying on
/// its side equals the same carton standing up.
#[derive(Debug, Copy, Clone)]
pub struct Carton {
    a: f64,
    b: f64,
    c: f64,
}

impl Carton {
    /// Builds a carton from edges expressed in `unit`.
    ///
    /// Each edge is converted to meters and then checked against `(0, 10]`,
    /// in order `a`, `b`, `c`.
    ///
    /// # Errors
    /// Returns a [`RangeError`] carrying the 1-based index of the first edge that
    /// is non-positive, greater than 10 m, or not a number.
    pub fn new(a: f64, b: f64, c: f64, unit: UnitOfMeasure) -> Result<Self, RangeError> {
        Self::from_meters(unit.to_meters(a), unit.to_meters(b), unit.to_meters(c))
    }

    /// Builds a carton from edges already expressed in meters.
    ///
    /// # Errors
    /// See [`Carton::new`].
    pub fn from_meters(a: f64, b: f64, c: f64) -> Result<Self, RangeError> {
        let edges = [a, b, c];
        for (i, &meters) in edges.iter().enumerate() {
            // NaN fails both comparisons.
            let in_range = meters > 0.0 && meters <= MAX_EDGE_M;
            if !in_range {
                debug!(index = i + 1, meters, "rejected carton edge");
                return Err(RangeError {
                    index: i + 1,
                    meters,
                });
            }
        }
        Ok(Self { a, b, c })
    }

    /// Compact literal: integer edges in millimeters.
    ///
    /// # Errors
    /// See [`Carton::new`].
    pub fn from_millimeters((a, b, c): (i32, i32, i32)) -> Result<Self, RangeError> {
        Self::new(
            f64::from(a),
            f64::from(b),
            f64::from(c),
            UnitOfMeasure::Millimeter,
        )
    }

    /// Starts a builder whose unset edges default to [`DEFAULT_EDGE_M`].
    #[must_use]
    pub fn builder() -> CartonBuilder {
        CartonBuilder::default()
    }

    /// First edge in meters, rounded to 3 decimals.
    #[must_use]
    pub fn a(&self) -> f64 {
        round_to(self.a, 3)
    }

    /// Second edge in meters, rounded to 3 decimals.
    #[must_use]
    pub fn b(&self) -> f64 {
        round_to(self.b, 3)
    }

    /// Third edge in meters, rounded to 3 decimals.
    #[must_use]
    pub fn c(&self) -> f64 {
        round_to(self.c, 3)
    }

    /// Volume in cubic meters, rounded to 9 decimals.
    #[must_use]
    pub fn volume(&self) -> f64 {
        round_to(self.a * self.b * self.c, 9)
    }

    /// Surface area in square meters, rounded to 6 decimals.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        round_to(2.0 * (self.a * self.b + self.a * self.c + self.b * self.c), 6)
    }

    /// Rounded edges in declared order.
    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        [self.a(), self.b(), self.c()]
    }

    /// Rounded edges in ascending order; the key behind `Eq` and `Hash`.
    #[must_use]
    pub fn sorted_edges(&self) -> [f64; 3] {
        let mut edges = self.to_array();
        edges.sort_by(f64::total_cmp);
        edges
    }

    /// Rounded edges scaled into `unit`, at millimeter resolution.
    #[must_use]
    pub fn edges_in(&self, unit: UnitOfMeasure) -> [f64; 3] {
        self.to_array()
            .map(|m| round_to(unit.from_meters(m), unit.mm_decimals()))
    }

    /// Iterates the rounded edges in order `a`, `b`, `c`.
    #[must_use]
    pub fn edges(&self) -> Edges {
        Edges {
            inner: self.to_array().into_iter(),
        }
    }

    /// Smallest carton at least as large as both inputs, compared positionally.
    ///
    /// Takes the componentwise maximum of the rounded edges (a with a, b with b,
    /// c with c; nothing is sorted) and revalidates the result.
    ///
    /// # Errors
    /// Returns a [`RangeError`] if a resulting edge rounds to zero.
    pub fn combine(&self, other: &Self) -> Result<Self, RangeError> {
        Self::from_meters(
            self.a().max(other.a()),
            self.b().max(other.b()),
            self.c().max(other.c()),
        )
    }
}

/// Free-function form of [`Carton::combine`].
///
/// # Errors
/// See [`Carton::combine`].
pub fn combine(first: &Carton, second: &Carton) -> Result<Carton, RangeError> {
    first.combine(second)
}

impl Default for Carton {
    /// A 0.1 m cube.
    fn default() -> Self {
        Self {
            a: DEFAULT_EDGE_M,
            b: DEFAULT_EDGE_M,
            c: DEFAULT_EDGE_M,
        }
    }
}

impl PartialEq for Carton {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_edges() == other.sorted_edges()
    }
}

// Rounded edges of a valid carton are finite, so equality is total.
impl Eq for Carton {}

impl Hash for Carton {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for edge in self.sorted_edges() {
            edge.to_bits().hash(state);
        }
    }
}

impl From<Carton> for [f64; 3] {
    fn from(carton: Carton) -> Self {
        carton.to_array()
    }
}

impl From<&Carton> for [f64; 3] {
    fn from(carton: &Carton) -> Self {
        carton.to_array()
    }
}

impl TryFrom<(i32, i32, i32)> for Carton {
    type Error = RangeError;

    fn try_from(mm: (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::from_millimeters(mm)
    }
}

impl TryFrom<[f64; 3]> for Carton {
    type Error = RangeError;

    /// Edges in meters.
    fn try_from([a, b, c]: [f64; 3]) -> Result<Self, Self::Error> {
        Self::from_meters(a, b, c)
    }
}

impl IntoIterator for &Carton {
    type Item = f64;
    type IntoIter = Edges;

    fn into_iter(self) -> Self::IntoIter {
        self.edges()
    }
}

/// Fixed-length iterator over a carton's rounded edges.
#[derive(Debug, Clone)]
pub struct Edges {
    inner: std::array::IntoIter<f64, 3>,
}

impl Iterator for Edges {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Edges {
    fn next_back(&mut self) -> Option<f64> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Edges {}
impl FusedIterator for Edges {}

/// Builder with per-edge defaults of [`DEFAULT_EDGE_M`] and a default unit of meters.
///
/// Unset edges are 0.1 m whatever unit is chosen; only explicit edges are
/// read in `unit`.
#[derive(Debug, Default, Copy, Clone)]
pub struct CartonBuilder {
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    unit: UnitOfMeasure,
}

impl CartonBuilder {
    /// Sets the first edge, in the builder's unit.
    #[must_use]
    pub fn a(mut self, value: f64) -> Self {
        self.a = Some(value);
        self
    }

    /// Sets the second edge, in the builder's unit.
    #[must_use]
    pub fn b(mut self, value: f64) -> Self {
        self.b = Some(value);
        self
    }

    /// Sets the third edge, in the builder's unit.
    #[must_use]
    pub fn c(mut self, value: f64) -> Self {
        self.c = Some(value);
        self
    }

    /// Sets the unit explicit edges are expressed in.
    #[must_use]
    pub fn unit(mut self, unit: UnitOfMeasure) -> Self {
        self.unit = unit;
        self
    }

    /// Converts and validates the edges.
    ///
    /// # Errors
    /// See [`Carton::new`].
    pub fn build(self) -> Result<Carton, RangeError> {
        let meters = |edge: Option<f64>| edge.map_or(DEFAULT_EDGE_M, |v| self.unit.to_meters(v));
        Carton::from_meters(meters(self.a), meters(self.b), meters(self.c))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Carton;

    impl Serialize for Carton {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            [self.a, self.b, self.c].serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Carton {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = <[f64; 3]>::deserialize(deserializer)?;
            Self::try_from(raw).map_err(D::Error::custom)
        }
    }
}
