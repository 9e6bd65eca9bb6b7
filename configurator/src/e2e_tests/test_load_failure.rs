//! Test that unreadable ontology files never produce a store.

use tempfile::tempdir;

use crate::e2e_tests::helpers::*;
use crate::ontology::{Ontology, OntologyError};
use crate::source::{FileSource, LoadError};

#[test]
fn test_missing_file() {
    let dir = tempdir().expect("create temp dir");
    let source = FileSource::new(dir.path().join("OntologiaMercedes.rdf"));

    let err = Ontology::bootstrap(&source).expect_err("file is missing");
    assert!(matches!(
        err,
        OntologyError::Load(LoadError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_malformed_file() {
    let dir = tempdir().expect("create temp dir");
    let path = write_file(
        dir.path(),
        "broken.ttl",
        "@prefix car: <urn:car#> .\ncar:C220d car:hasEnginePower",
    );

    let err = Ontology::bootstrap(&FileSource::new(path)).expect_err("file is malformed");
    assert!(matches!(err, OntologyError::Load(LoadError::Parse { .. })));
}

#[test]
fn test_unknown_extension() {
    let dir = tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "ontology.docx", "");

    let err = Ontology::bootstrap(&FileSource::new(path)).expect_err("unknown format");
    assert!(matches!(
        err,
        OntologyError::Load(LoadError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_empty_file_is_valid() {
    let dir = tempdir().expect("create temp dir");
    let path = write_file(dir.path(), "empty.nt", "");

    let ontology = Ontology::bootstrap(&FileSource::new(path)).expect("empty ontology");
    assert!(ontology.snapshot().is_empty());
}
