//! Test the full flow from raw triples to a configured car.

use crate::configuration::{ConfigurationMapper, Engine, Paint, Seats};
use crate::constants::DEFAULT_PRODUCT_ID;
use crate::e2e_tests::helpers::*;
use crate::types::Triple;

fn classe_c_facts() -> Vec<Triple> {
    vec![
        is_a("ClasseCBerlina", "Car"),
        is_a("C220d", "Engine"),
        has("C220d", "hasEnginePower", "500HP"),
        is_a("BlackMatte", "Paint"),
        has("BlackMatte", "hasPaintColor", "Black"),
        has("BlackMatte", "hasPaintType", "Matte"),
        is_a("LuxurySeats", "Seats"),
        has("LuxurySeats", "hasSeatOptional", "Leather"),
    ]
}

#[test]
fn test_classe_c_berlina() {
    let ontology = ontology(classe_c_facts());
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let car = mapper
        .resolve_product(DEFAULT_PRODUCT_ID)
        .expect("product should resolve");
    assert_eq!(car.model(), "ClasseCBerlina");

    let engines = mapper.engines();
    assert_eq!(
        engines,
        vec![Engine {
            model: "C220d".to_owned(),
            power: Some("500HP".to_owned()),
            fuel_consumption: None,
        }]
    );

    let paints = mapper.paints();
    assert_eq!(
        paints,
        vec![Paint {
            color: "Black".to_owned(),
            paint_type: "Matte".to_owned(),
        }]
    );

    let seats = mapper.seats();
    assert_eq!(
        seats,
        vec![Seats {
            model: "LuxurySeats".to_owned(),
            optional: "Leather".to_owned(),
        }]
    );
}

#[test]
fn test_caller_builds_configuration() {
    let ontology = ontology(classe_c_facts());
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let mut car = mapper
        .resolve_product(DEFAULT_PRODUCT_ID)
        .expect("product should resolve");
    for engine in mapper.engines() {
        car.set_engine(engine);
    }
    for paint in mapper.paints() {
        car.set_paint(paint);
    }
    for seat in mapper.seats() {
        car.add_seat(seat);
    }

    assert_eq!(car.engine().map(|e| e.model.as_str()), Some("C220d"));
    assert_eq!(
        car.exterior().paint.as_ref().map(|p| p.paint_type.as_str()),
        Some("Matte")
    );
    assert_eq!(car.interior().seats.len(), 1);
    assert!(car.transmission().is_none());

    let summary = car.to_string();
    assert!(summary.contains("Engine: C220d, power 500HP"));
    assert!(summary.contains("Paint: Black Matte"));
}

#[test]
fn test_default_configuration_matches_manual_picks() {
    let ontology = ontology(classe_c_facts());
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let car = mapper
        .default_configuration(DEFAULT_PRODUCT_ID)
        .expect("configuration");

    let json = serde_json::to_value(&car).expect("serialize");
    assert_eq!(json["model"], "ClasseCBerlina");
    assert_eq!(json["engine"]["power"], "500HP");
    assert_eq!(json["exterior"]["paint"]["color"], "Black");
    assert_eq!(json["interior"]["seats"][0]["model"], "LuxurySeats");
    assert!(json["transmission"].is_null());
}
