//! Common helpers for end-to-end tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::{CAR_NAMESPACE, RDF_TYPE, RDFS_SUB_CLASS_OF, RDFS_SUB_PROPERTY_OF};
use crate::ontology::Ontology;
use crate::source::MemorySource;
use crate::types::{Node, Triple};

/// A node in the car ontology namespace.
pub fn car(local: &str) -> Node {
    Node::iri(format!("{CAR_NAMESPACE}{local}"))
}

/// `subject rdf:type class`, both in the car namespace.
pub fn is_a(subject: &str, class: &str) -> Triple {
    Triple::new(car(subject), Node::iri(RDF_TYPE), car(class))
}

/// `subject property "value"`, with a plain string literal.
pub fn has(subject: &str, property: &str, value: &str) -> Triple {
    Triple::new(car(subject), car(property), Node::literal(value))
}

pub fn sub_class_of(class: &str, parent: &str) -> Triple {
    Triple::new(car(class), Node::iri(RDFS_SUB_CLASS_OF), car(parent))
}

pub fn sub_property_of(property: &str, parent: &str) -> Triple {
    Triple::new(car(property), Node::iri(RDFS_SUB_PROPERTY_OF), car(parent))
}

/// Bootstrap an ontology from in-memory triples.
pub fn ontology(triples: Vec<Triple>) -> Ontology {
    #[allow(clippy::expect_used)]
    Ontology::bootstrap(&MemorySource::new(triples)).expect("bootstrap should succeed")
}

/// Write `content` to `dir/name` and return the path.
#[allow(clippy::expect_used)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create ontology file");
    file.write_all(content.as_bytes())
        .expect("write ontology file");
    path
}

/// Path of the sample ontology shipped with the crate.
pub fn sample_ontology_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("ontology/car.ttl")
}
