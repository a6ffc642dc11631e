// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand bodies. Each returns the text to print so it can be tested
//! without spawning the binary.

use anyhow::{Context, Result};
use carton_app_core::CliPrefs;
use carton_geom::Carton;
use tracing::info;

fn parse(input: &str, prefs: &CliPrefs) -> Result<Carton> {
    Carton::parse_with(input, prefs.parse_policy)
        .with_context(|| format!("cannot read carton {input:?}"))
}

/// Formatted carton followed by its volume and surface area.
pub fn show(input: &str, prefs: &CliPrefs) -> Result<String> {
    let carton = parse(input, prefs)?;
    info!(?carton, "showing carton");
    Ok(format!(
        "{}\nvolume: {} m³\nsurface area: {} m²",
        carton.display_in(prefs.unit),
        carton.volume(),
        carton.surface_area()
    ))
}

/// Folds the bounding combination over `inputs`, left to right.
pub fn combine(inputs: &[String], prefs: &CliPrefs) -> Result<String> {
    let (first, rest) = inputs
        .split_first()
        .context("combine needs at least one carton")?;
    let mut acc = parse(first, prefs)?;
    for input in rest {
        let next = parse(input, prefs)?;
        acc = acc
            .combine(&next)
            .with_context(|| format!("cannot combine {acc} with {next}"))?;
    }
    info!(result = ?acc, count = inputs.len(), "combined cartons");
    Ok(acc.display_in(prefs.unit).to_string())
}

/// Whether two cartons are equal regardless of orientation.
pub fn compare(first: &str, second: &str, prefs: &CliPrefs) -> Result<bool> {
    Ok(parse(first, prefs)? == parse(second, prefs)?)
}

/// Human-readable listing of the effective preferences.
pub fn describe_prefs(prefs: &CliPrefs) -> String {
    format!("unit: {}\npolicy: {}", prefs.unit, prefs.parse_policy)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use carton_geom::{UnitOfMeasure, UnitPolicy};

    fn cm() -> CliPrefs {
        CliPrefs {
            unit: UnitOfMeasure::Centimeter,
            parse_policy: UnitPolicy::PerTerm,
        }
    }

    #[test]
    fn show_reports_derived_values() {
        let out = show("2 m × 3 m × 4 m", &cm()).unwrap();
        assert_eq!(
            out,
            "200 cm × 300 cm × 400 cm\nvolume: 24 m³\nsurface area: 52 m²"
        );
    }

    #[test]
    fn combine_folds_left_to_right() {
        let inputs = [
            "1 m × 5 m × 2 m".to_owned(),
            "3 m × 1 m × 4 m".to_owned(),
            "1 m × 1 m × 6 m".to_owned(),
        ];
        assert_eq!(
            combine(&inputs, &CliPrefs::default()).unwrap(),
            "3 m × 5 m × 6 m"
        );
    }

    #[test]
    fn compare_respects_policy() {
        let per_term = CliPrefs::default();
        let trailing = per_term.with_overrides(None, Some(UnitPolicy::Trailing));
        let a = "3 m × 1 m × 2000 mm";
        let b = "3 m × 1 m × 2 m";
        assert!(compare(a, b, &per_term).unwrap());
        assert!(!compare(a, b, &trailing).unwrap());
    }

    #[test]
    fn parse_errors_name_the_input() {
        let err = show("1 m × 2 m", &cm()).unwrap_err();
        assert!(format!("{err:#}").contains("\"1 m × 2 m\""));
    }

    #[test]
    fn prefs_listing() {
        assert_eq!(describe_prefs(&cm()), "unit: cm\npolicy: per-term");
    }
}
