//! Test that categories with no instances come back empty.

use crate::configuration::ConfigurationMapper;
use crate::e2e_tests::helpers::*;

#[test]
fn test_every_category_empty_on_empty_ontology() {
    let ontology = ontology(Vec::new());
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    assert!(mapper.engines().is_empty());
    assert!(mapper.paints().is_empty());
    assert!(mapper.wheels().is_empty());
    assert!(mapper.headlights().is_empty());
    assert!(mapper.transmissions().is_empty());
    assert!(mapper.upholstery().is_empty());
    assert!(mapper.ambient_lighting().is_empty());
    assert!(mapper.safety_packages().is_empty());
    assert!(mapper.steering_wheels().is_empty());
    assert!(mapper.seats().is_empty());
    assert!(mapper.driving_assistants().is_empty());
}

#[test]
fn test_declared_class_without_instances() {
    let ontology = ontology(vec![
        sub_class_of("Wheels", "Exterior"),
        is_a("ClasseCBerlina", "Car"),
    ]);
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    assert!(mapper.wheels().is_empty());

    let car = mapper
        .default_configuration("ClasseCBerlina")
        .expect("configuration");
    assert!(car.exterior().wheels.is_none());
}
