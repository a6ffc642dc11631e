// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stored preferences for the `carton` command-line tool.

use carton_geom::{UnitOfMeasure, UnitPolicy};
use serde::{Deserialize, Serialize};

/// Saved defaults for the CLI; command-line flags take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CliPrefs {
    /// Unit used when printing cartons.
    pub unit: UnitOfMeasure,
    /// How unit tokens in parsed input are applied.
    pub parse_policy: UnitPolicy,
}

impl CliPrefs {
    /// Config key the preferences are stored under.
    pub const KEY: &'static str = "carton_cli";

    /// Returns a copy with any provided overrides applied.
    #[must_use]
    pub fn with_overrides(self, unit: Option<UnitOfMeasure>, policy: Option<UnitPolicy>) -> Self {
        Self {
            unit: unit.unwrap_or(self.unit),
            parse_policy: policy.unwrap_or(self.parse_policy),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let prefs: CliPrefs = serde_json::from_str(r#"{"unit":"cm"}"#).unwrap();
        assert_eq!(prefs.unit, UnitOfMeasure::Centimeter);
        assert_eq!(prefs.parse_policy, UnitPolicy::PerTerm);
    }

    #[test]
    fn overrides_win() {
        let stored = CliPrefs {
            unit: UnitOfMeasure::Millimeter,
            parse_policy: UnitPolicy::Trailing,
        };
        let merged = stored.with_overrides(Some(UnitOfMeasure::Meter), None);
        assert_eq!(merged.unit, UnitOfMeasure::Meter);
        assert_eq!(merged.parse_policy, UnitPolicy::Trailing);
    }
}
