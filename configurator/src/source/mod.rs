//! Ontology sources.
//!
//! A `TripleSource` produces the full set of facts the store is bulk loaded
//! from. A missing or unreadable source is always an error; an empty but
//! readable source is a valid, empty ontology.

pub mod file;

pub use file::FileSource;

use crate::types::Triple;

/// Error returned when an ontology source cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source could not be opened or read.
    SourceUnavailable { location: String, message: String },
    /// The source was read but is not well-formed.
    Parse { location: String, message: String },
    /// The serialization format could not be determined.
    UnsupportedFormat { location: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceUnavailable { location, message } => {
                write!(f, "ontology source {location} is unavailable: {message}")
            }
            Self::Parse { location, message } => {
                write!(f, "failed to parse ontology {location}: {message}")
            }
            Self::UnsupportedFormat { location } => {
                write!(f, "cannot determine RDF format of {location}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// A provider of ontology facts.
pub trait TripleSource {
    /// Human-readable location, used in logs and errors.
    fn describe(&self) -> String;

    /// Read every fact from the source.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source is missing, unreadable or malformed.
    /// Never returns an empty vector in place of an error.
    fn load(&self) -> Result<Vec<Triple>, LoadError>;
}

/// A source backed by triples already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    triples: Vec<Triple>,
}

impl MemorySource {
    #[must_use]
    pub const fn new(triples: Vec<Triple>) -> Self {
        Self { triples }
    }
}

impl FromIterator<Triple> for MemorySource {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TripleSource for MemorySource {
    fn describe(&self) -> String {
        format!("memory ({} triples)", self.triples.len())
    }

    fn load(&self) -> Result<Vec<Triple>, LoadError> {
        Ok(self.triples.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Node;

    #[test]
    fn test_memory_source_returns_its_triples() {
        let triple = Triple::new(Node::iri("urn:a"), Node::iri("urn:b"), Node::literal("c"));
        let source: MemorySource = std::iter::once(triple.clone()).collect();

        assert_eq!(source.load(), Ok(vec![triple]));
        assert_eq!(source.describe(), "memory (1 triples)");
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::SourceUnavailable {
            location: "car.rdf".to_owned(),
            message: "not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "ontology source car.rdf is unavailable: not found"
        );
    }
}
