// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text grammar: `A u × B u × C u`.
//!
//! Output always uses `.` as the decimal point with no digit grouping, and
//! the input side accepts the same, so text produced on one machine parses on
//! any other. Tokens are separated by spaces and/or `×` (U+00D7); empty
//! tokens are dropped, so `1 m 2 m 3 m` and `1 m×2 m×3 m` are both valid.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{CartonError, FormatError};
use crate::types::carton::Carton;
use crate::types::unit::UnitOfMeasure;

/// Multiplication sign placed between terms.
pub const SEPARATOR: char = '\u{00D7}';

const TOKENS: usize = 6;

/// How the three unit tokens of a parsed string are applied.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum UnitPolicy {
    /// Each number is read in the unit that follows it.
    #[default]
    PerTerm,
    /// Every number is read in the last unit token; the first two are only
    /// validated. Matches text written for older tooling that behaved this way.
    Trailing,
}

impl UnitPolicy {
    /// Name used on the command line and in stored preferences.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PerTerm => "per-term",
            Self::Trailing => "trailing",
        }
    }
}

impl fmt::Display for UnitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitPolicy {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::PerTerm, Self::Trailing]
            .into_iter()
            .find(|policy| s.eq_ignore_ascii_case(policy.name()))
            .ok_or_else(|| FormatError::UnknownPolicy(s.to_owned()))
    }
}

/// Display adapter returned by [`Carton::display_in`].
#[derive(Debug, Copy, Clone)]
pub struct DisplayIn<'a> {
    carton: &'a Carton,
    unit: UnitOfMeasure,
}

impl fmt::Display for DisplayIn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.carton.edges_in(self.unit);
        let u = self.unit;
        write!(f, "{a} {u} {SEPARATOR} {b} {u} {SEPARATOR} {c} {u}")
    }
}

impl Carton {
    /// Formats the carton in the unit named by `spec` (`m`, `cm`, `mm`; any
    /// case; empty means `m`).
    ///
    /// ```
    /// # use carton_geom::Carton;
    /// let c = Carton::from_meters(1.0, 2.0, 3.0)?;
    /// assert_eq!(c.format("cm")?, "100 cm × 200 cm × 300 cm");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`FormatError::UnknownSpec`] for any other specifier.
    pub fn format(&self, spec: &str) -> Result<String, FormatError> {
        let unit = if spec.is_empty() {
            UnitOfMeasure::Meter
        } else {
            spec.parse::<UnitOfMeasure>()
                .map_err(|_| FormatError::UnknownSpec(spec.to_owned()))?
        };
        Ok(self.display_in(unit).to_string())
    }

    /// Borrowing display adapter that renders in `unit`.
    #[must_use]
    pub fn display_in(&self, unit: UnitOfMeasure) -> DisplayIn<'_> {
        DisplayIn { carton: self, unit }
    }

    /// Parses `A u × B u × C u`, reading each number in its own unit.
    ///
    /// # Errors
    /// [`CartonError::Format`] when the text does not match the grammar;
    /// [`CartonError::Range`] when an edge is out of range.
    pub fn parse(input: &str) -> Result<Self, CartonError> {
        Self::parse_with(input, UnitPolicy::PerTerm)
    }

    /// Parses with an explicit [`UnitPolicy`].
    ///
    /// # Errors
    /// See [`Carton::parse`].
    pub fn parse_with(input: &str, policy: UnitPolicy) -> Result<Self, CartonError> {
        let tokens: Vec<&str> = input
            .split([' ', SEPARATOR])
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.len() != TOKENS {
            debug!(input, found = tokens.len(), "wrong token count");
            return Err(FormatError::TokenCount(tokens.len()).into());
        }

        let mut values = [0.0; 3];
        let mut units = [UnitOfMeasure::Meter; 3];
        for (i, term) in tokens.chunks_exact(2).enumerate() {
            values[i] = parse_number(term[0])?;
            units[i] = term[1].parse::<UnitOfMeasure>().inspect_err(|err| {
                debug!(input, %err, "bad unit token");
            })?;
        }

        let carton = match policy {
            UnitPolicy::PerTerm => Self::from_meters(
                units[0].to_meters(values[0]),
                units[1].to_meters(values[1]),
                units[2].to_meters(values[2]),
            )?,
            UnitPolicy::Trailing => Self::new(values[0], values[1], values[2], units[2])?,
        };
        trace!(input, ?carton, %policy, "parsed carton");
        Ok(carton)
    }
}

fn parse_number(token: &str) -> Result<f64, FormatError> {
    token.parse::<f64>().map_err(|_| {
        debug!(token, "bad numeric token");
        FormatError::Number(token.to_owned())
    })
}

impl fmt::Display for Carton {
    /// Meters: `1 m × 2 m × 3 m`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_in(UnitOfMeasure::Meter), f)
    }
}

impl FromStr for Carton {
    type Err = CartonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
