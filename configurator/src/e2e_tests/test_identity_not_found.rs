//! Test the identity query when the product instance is missing.

use crate::configuration::{ConfigurationMapper, MapperError};
use crate::constants::DEFAULT_PRODUCT_ID;
use crate::e2e_tests::helpers::*;

#[test]
fn test_missing_product_is_reported() {
    let ontology = ontology(vec![is_a("ClasseG", "Car")]);
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let err = mapper
        .resolve_product(DEFAULT_PRODUCT_ID)
        .expect_err("product should be missing");
    assert_eq!(
        err,
        MapperError::IdentityNotFound {
            identifier: DEFAULT_PRODUCT_ID.to_owned()
        }
    );
    assert_eq!(
        err.to_string(),
        "no matching product instance: ClasseCBerlina"
    );
}

#[test]
fn test_empty_ontology_has_no_product() {
    let ontology = ontology(Vec::new());
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    assert!(mapper.resolve_product(DEFAULT_PRODUCT_ID).is_err());
    assert!(mapper.default_configuration(DEFAULT_PRODUCT_ID).is_err());
}

#[test]
fn test_instance_of_subclass_resolves() {
    let ontology = ontology(vec![
        sub_class_of("Sedan", "Car"),
        is_a("ClasseCBerlina", "Sedan"),
    ]);
    let mapper = ConfigurationMapper::new(ontology.snapshot());

    let car = mapper
        .resolve_product("ClasseCBerlina")
        .expect("resolved through inference");
    assert_eq!(car.model(), "ClasseCBerlina");
}
