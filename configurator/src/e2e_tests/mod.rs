//! End-to-end tests from raw triples to typed configuration records.
//!
//! Each test file covers a specific scenario, running the full bootstrap
//! (load, inference, freeze) before querying through the mapper.

#![cfg(test)]

mod helpers;

mod test_determinism;
mod test_empty_category;
mod test_end_to_end;
mod test_engine_completeness;
mod test_identity_not_found;
mod test_inference;
mod test_load_failure;
mod test_ontology_file;
mod test_optional_fields;
