// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Unit of length used when constructing, formatting, or parsing a carton.
///
/// Units only exist at the boundary; a `Carton` always stores meters.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitOfMeasure {
    /// 1/1000 of a meter.
    #[cfg_attr(feature = "serde", serde(rename = "mm"))]
    Millimeter,
    /// 1/100 of a meter.
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeter,
    /// The canonical internal unit.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Meter,
}

impl UnitOfMeasure {
    /// All units, smallest first.
    pub const ALL: [Self; 3] = [Self::Millimeter, Self::Centimeter, Self::Meter];

    /// How many of this unit make up one meter (1000, 100, 1).
    #[must_use]
    pub fn per_meter(self) -> f64 {
        match self {
            Self::Millimeter => 1000.0,
            Self::Centimeter => 100.0,
            Self::Meter => 1.0,
        }
    }

    /// Decimal places this unit needs to keep millimeter resolution.
    #[must_use]
    pub(crate) fn mm_decimals(self) -> i32 {
        match self {
            Self::Millimeter => 0,
            Self::Centimeter => 1,
            Self::Meter => 3,
        }
    }

    /// Converts `value` expressed in this unit to meters.
    #[must_use]
    pub fn to_meters(self, value: f64) -> f64 {
        value / self.per_meter()
    }

    /// Converts `meters` into this unit.
    #[must_use]
    pub fn from_meters(self, meters: f64) -> f64 {
        meters * self.per_meter()
    }

    /// Short symbol used in text: `mm`, `cm`, or `m`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitOfMeasure {
    type Err = FormatError;

    /// Case-insensitive match on `m`, `cm`, `mm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| s.eq_ignore_ascii_case(unit.symbol()))
            .ok_or_else(|| FormatError::UnknownUnit(s.to_owned()))
    }
}
