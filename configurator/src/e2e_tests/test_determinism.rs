//! Test that the same ontology produces identical results across runs.

use crate::configuration::ConfigurationMapper;
use crate::constants::DEFAULT_PRODUCT_ID;
use crate::e2e_tests::helpers::*;
use crate::ontology::Ontology;
use crate::source::FileSource;

fn run() -> (usize, usize, String) {
    let ontology =
        Ontology::bootstrap(&FileSource::new(sample_ontology_path())).expect("sample ontology");
    let mapper = ConfigurationMapper::new(ontology.snapshot());
    let car = mapper
        .default_configuration(DEFAULT_PRODUCT_ID)
        .expect("configuration");
    let json = serde_json::to_string(&car).expect("serialize");
    (ontology.snapshot().len(), ontology.report().inferred, json)
}

#[test]
fn test_deterministic_bootstrap() {
    let run1 = run();
    let run2 = run();

    assert_eq!(run1.0, run2.0, "snapshot size mismatch");
    assert_eq!(run1.1, run2.1, "inferred count mismatch");
    assert_eq!(run1.2, run2.2, "configuration mismatch");
}

#[test]
fn test_listing_order_is_stable() {
    let first = {
        let ontology = ontology(vec![
            is_a("a", "DrivingAssistant"),
            has("a", "hasDrivingAssistantType", "Lane keeping"),
            is_a("b", "DrivingAssistant"),
            has("b", "hasDrivingAssistantType", "Parking"),
        ]);
        ConfigurationMapper::new(ontology.snapshot()).driving_assistants()
    };
    assert_eq!(first[0].model, "a");
    assert_eq!(first[1].model, "b");
}
