// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![cfg(feature = "serde")]
#![allow(missing_docs, clippy::unwrap_used)]
//! Serde representation of `Carton`, `UnitOfMeasure`, and `UnitPolicy`.

use carton_geom::{Carton, UnitOfMeasure, UnitPolicy};

#[test]
fn carton_serializes_as_unrounded_meter_array() {
    let c = Carton::from_meters(1.0, 0.2504, 3.0).unwrap();
    assert_eq!(serde_json::to_string(&c).unwrap(), "[1.0,0.2504,3.0]");
    let back: Carton = serde_json::from_str("[1.0,0.2504,3.0]").unwrap();
    assert_eq!(back, c);
}

#[test]
fn deserialization_validates_edges() {
    let err = serde_json::from_str::<Carton>("[1.0,0.0,3.0]").unwrap_err();
    assert!(err.to_string().contains("edge 2"));
    assert!(serde_json::from_str::<Carton>("[1.0,2.0]").is_err());
}

#[test]
fn units_and_policies_use_their_text_names() {
    assert_eq!(
        serde_json::to_string(&UnitOfMeasure::Centimeter).unwrap(),
        "\"cm\""
    );
    assert_eq!(
        serde_json::from_str::<UnitPolicy>("\"per-term\"").unwrap(),
        UnitPolicy::PerTerm
    );
    assert_eq!(
        serde_json::to_string(&UnitPolicy::Trailing).unwrap(),
        "\"trailing\""
    );
}
