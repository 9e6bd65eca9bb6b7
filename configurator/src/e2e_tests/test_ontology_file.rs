//! Test the sample ontology shipped with the crate, loaded from disk.

use crate::configuration::ConfigurationMapper;
use crate::constants::DEFAULT_PRODUCT_ID;
use crate::e2e_tests::helpers::*;
use crate::ontology::Ontology;
use crate::source::FileSource;

fn sample() -> Ontology {
    Ontology::bootstrap(&FileSource::new(sample_ontology_path())).expect("sample ontology loads")
}

#[test]
fn test_category_counts() {
    let ontology = sample();
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    assert_eq!(mapper.engines().len(), 3);
    assert_eq!(mapper.transmissions().len(), 2);
    assert_eq!(mapper.paints().len(), 3);
    assert_eq!(mapper.headlights().len(), 2);
    assert_eq!(mapper.wheels().len(), 2);
    assert_eq!(mapper.seats().len(), 2);
    assert_eq!(mapper.upholstery().len(), 2);
    assert_eq!(mapper.ambient_lighting().len(), 1);
    assert_eq!(mapper.steering_wheels().len(), 1);
    assert_eq!(mapper.safety_packages().len(), 1);
    assert_eq!(mapper.driving_assistants().len(), 3);
}

#[test]
fn test_engines_reached_through_subclasses() {
    let ontology = sample();
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let hybrid = mapper
        .engines()
        .into_iter()
        .find(|engine| engine.model == "C300e")
        .expect("hybrid engine listed");
    assert_eq!(hybrid.power.as_deref(), Some("313HP"));
    assert!(hybrid.fuel_consumption.is_none());

    assert!(ontology.snapshot().contains(&is_a("C220d", "Component")));
}

#[test]
fn test_engine_data_propagates_to_parent_property() {
    let ontology = sample();

    assert!(ontology.snapshot().contains(&has(
        "C220d",
        "hasTechnicalData",
        "4.9 l/100km"
    )));
}

#[test]
fn test_default_configuration() {
    let ontology = sample();
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let car = mapper
        .default_configuration(DEFAULT_PRODUCT_ID)
        .expect("configuration");

    assert_eq!(car.model(), "ClasseCBerlina");
    assert!(car.engine().is_some());
    assert!(car.transmission().is_some());
    assert!(car.exterior().paint.is_some());
    assert!(car.exterior().headlights.is_some());
    assert!(car.exterior().wheels.is_some());
    assert!(car.interior().upholstery.is_some());
    assert!(car.interior().ambient.is_some());
    assert!(car.interior().steering_wheel.is_some());
    assert!(car.optionals().safety.is_some());
    assert_eq!(car.interior().seats.len(), 1);
    assert_eq!(car.optionals().driving_assistants.len(), 1);

    let summary = car.to_string();
    assert!(summary.starts_with("Car ClasseCBerlina\n"));
    assert!(!summary.contains("not selected"));
}
