//! Test that every engine instance yields exactly one record, whatever the
//! order the facts were loaded in.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::configuration::ConfigurationMapper;
use crate::e2e_tests::helpers::*;
use crate::types::Triple;

fn engine_facts() -> Vec<Triple> {
    vec![
        is_a("e1", "Engine"),
        has("e1", "hasEnginePower", "500HP"),
        is_a("e2", "Engine"),
        has("e2", "hasEnginePower", "150HP"),
    ]
}

fn engine_powers(facts: Vec<Triple>) -> Vec<(String, Option<String>)> {
    let ontology = ontology(facts);
    let mapper = ConfigurationMapper::new(ontology.snapshot());
    let mut powers: Vec<_> = mapper
        .engines()
        .into_iter()
        .map(|engine| (engine.model, engine.power))
        .collect();
    powers.sort();
    powers
}

#[test]
fn test_two_instances_two_records() {
    assert_eq!(
        engine_powers(engine_facts()),
        vec![
            ("e1".to_owned(), Some("500HP".to_owned())),
            ("e2".to_owned(), Some("150HP".to_owned())),
        ]
    );
}

#[test]
fn test_insertion_order_does_not_matter() {
    let expected = engine_powers(engine_facts());

    for seed in 0..16 {
        let mut facts = engine_facts();
        facts.shuffle(&mut StdRng::seed_from_u64(seed));
        assert_eq!(engine_powers(facts), expected, "seed {seed}");
    }
}

#[test]
fn test_duplicate_facts_do_not_duplicate_records() {
    let mut facts = engine_facts();
    facts.extend(engine_facts());

    assert_eq!(engine_powers(facts).len(), 2);
}
