//! Test that a missing optional property leaves the field empty instead of
//! dropping the record.

use crate::configuration::{ConfigurationMapper, Engine};
use crate::e2e_tests::helpers::*;

#[test]
fn test_engine_without_power_is_kept() {
    let ontology = ontology(vec![
        is_a("e1", "Engine"),
        has("e1", "hasEnginePower", "500HP"),
        is_a("e3", "Engine"),
        has("e3", "engineHasModel", "C220d"),
    ]);
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let engines = mapper.engines();
    assert_eq!(engines.len(), 2);

    let e3 = engines
        .iter()
        .find(|engine| engine.model == "C220d")
        .expect("e3 should be listed");
    assert!(e3.power.is_none());
    assert!(e3.fuel_consumption.is_none());
}

#[test]
fn test_all_optional_fields_present() {
    let ontology = ontology(vec![
        is_a("C300d", "Engine"),
        has("C300d", "engineHasModel", "C300d"),
        has("C300d", "hasEnginePower", "265HP"),
        has("C300d", "hasFuelConsumption", "5.3 l/100km"),
    ]);
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    assert_eq!(
        mapper.engines(),
        vec![Engine {
            model: "C300d".to_owned(),
            power: Some("265HP".to_owned()),
            fuel_consumption: Some("5.3 l/100km".to_owned()),
        }]
    );
}

#[test]
fn test_missing_mandatory_field_drops_instance() {
    let ontology = ontology(vec![
        is_a("Artico", "Upholstery"),
        has("Artico", "hasUpholsteryColor", "Beige"),
        is_a("LeatherBlack", "Upholstery"),
        has("LeatherBlack", "hasUpholsteryColor", "Black"),
        has("LeatherBlack", "hasUpholsteryMaterial", "Leather"),
    ]);
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let upholstery = mapper.upholstery();
    assert_eq!(upholstery.len(), 1);
    assert_eq!(upholstery[0].model, "LeatherBlack");
}
