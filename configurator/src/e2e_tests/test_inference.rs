//! Test that categories see instances only reachable through inference.

use crate::configuration::ConfigurationMapper;
use crate::e2e_tests::helpers::*;
use crate::inference::{InferenceError, Reasoner};
use crate::ontology::{Ontology, OntologyError};
use crate::source::MemorySource;

#[test]
fn test_subclass_instances_are_listed() {
    let ontology = ontology(vec![
        sub_class_of("DieselEngine", "Engine"),
        sub_class_of("TurboDieselEngine", "DieselEngine"),
        is_a("C220d", "TurboDieselEngine"),
        has("C220d", "hasEnginePower", "200HP"),
        is_a("C300e", "Engine"),
    ]);
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let mut models: Vec<_> = mapper.engines().into_iter().map(|e| e.model).collect();
    models.sort();
    assert_eq!(models, vec!["C220d".to_owned(), "C300e".to_owned()]);
}

#[test]
fn test_subproperty_values_fill_parent_property() {
    // `hasLedModel` refines the headlight model property.
    let ontology = ontology(vec![
        sub_property_of("hasLedModel", "hasHeadlightModel"),
        is_a("LEDHighPerformance", "Headlights"),
        has("LEDHighPerformance", "hasLedModel", "LED High Performance"),
    ]);
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let headlights = mapper.headlights();
    assert_eq!(headlights.len(), 1);
    assert_eq!(headlights[0].model, "LEDHighPerformance");
    assert_eq!(headlights[0].descr, "LED High Performance");
}

#[test]
fn test_cyclic_hierarchy_terminates() {
    let ontology = ontology(vec![
        sub_class_of("Seats", "Comfort"),
        sub_class_of("Comfort", "Seats"),
        is_a("LuxurySeats", "Comfort"),
        has("LuxurySeats", "hasSeatOptional", "Massage"),
    ]);
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    assert_eq!(mapper.seats().len(), 1);
}

#[test]
fn test_inferred_facts_are_in_snapshot() {
    let ontology = ontology(vec![
        sub_class_of("Paint", "Exterior"),
        is_a("PolarWhite", "Paint"),
    ]);

    assert!(ontology.snapshot().contains(&is_a("PolarWhite", "Exterior")));
    assert!(ontology.snapshot().contains(&sub_class_of("Paint", "Paint")));
    assert!(ontology.report().passes >= 2);
}

#[test]
fn test_pass_limit_stops_bootstrap() {
    let source = MemorySource::new(vec![
        sub_class_of("DieselEngine", "Engine"),
        is_a("C220d", "DieselEngine"),
    ]);

    let err = Ontology::bootstrap_with(&source, Reasoner::new(1)).expect_err("limit of one pass");
    assert_eq!(
        err,
        OntologyError::Inference(InferenceError::PassLimitExceeded { passes: 1 })
    );
}
