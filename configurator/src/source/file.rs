//! File-backed ontology source.
//!
//! The serialization is picked from the file extension: `.rdf`, `.owl` and
//! `.xml` are RDF/XML, `.ttl` is Turtle, `.nt` is N-Triples; anything else is
//! resolved through `RdfFormat::from_extension`. Parsing is delegated to the
//! oxigraph I/O parser, which reads the file as a stream.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::{NamedOrBlankNode, Quad, Term};

use super::{LoadError, TripleSource};
use crate::types::{LiteralType, Node, Triple};

/// An ontology stored in a local RDF file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: Option<RdfFormat>,
}

impl FileSource {
    /// Create a source whose format is inferred from the extension.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
        }
    }

    /// Create a source with an explicit format.
    #[must_use]
    pub fn with_format(path: impl Into<PathBuf>, format: RdfFormat) -> Self {
        Self {
            path: path.into(),
            format: Some(format),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Result<RdfFormat, LoadError> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("rdf" | "owl" | "xml") => Ok(RdfFormat::RdfXml),
            Some("ttl") => Ok(RdfFormat::Turtle),
            Some("nt") => Ok(RdfFormat::NTriples),
            Some(other) => RdfFormat::from_extension(other).ok_or_else(|| self.unsupported()),
            None => Err(self.unsupported()),
        }
    }

    fn unsupported(&self) -> LoadError {
        LoadError::UnsupportedFormat {
            location: self.describe(),
        }
    }
}

impl TripleSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Triple>, LoadError> {
        let format = self.format()?;
        let file = File::open(&self.path).map_err(|e| LoadError::SourceUnavailable {
            location: self.describe(),
            message: e.to_string(),
        })?;

        let mut triples = Vec::new();
        for quad in RdfParser::from_format(format).for_reader(BufReader::new(file)) {
            let quad = quad.map_err(|e| LoadError::Parse {
                location: self.describe(),
                message: e.to_string(),
            })?;
            triples.push(quad_to_triple(quad));
        }

        tracing::debug!(
            path = %self.path.display(),
            format = format.name(),
            triples = triples.len(),
            "ontology file parsed"
        );
        Ok(triples)
    }
}

/// Convert a parsed quad to a triple; the graph name is dropped.
fn quad_to_triple(quad: Quad) -> Triple {
    let subject = match quad.subject {
        NamedOrBlankNode::NamedNode(node) => Node::iri(node.into_string()),
        NamedOrBlankNode::BlankNode(node) => Node::blank(node.into_string()),
    };
    let predicate = Node::iri(quad.predicate.into_string());
    Triple::new(subject, predicate, term_to_node(quad.object))
}

#[allow(unreachable_patterns)] // Term grows a variant when RDF 1.2 support is enabled
fn term_to_node(term: Term) -> Node {
    match term {
        Term::NamedNode(node) => Node::iri(node.into_string()),
        Term::BlankNode(node) => Node::blank(node.into_string()),
        Term::Literal(literal) => {
            let datatype = match literal.language() {
                Some(tag) => LiteralType::lang(tag),
                None => LiteralType::from_iri(literal.datatype().as_str()),
            };
            Node::typed_literal(literal.value(), datatype)
        }
        other => Node::literal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).expect("create file");
        file.write_all(content.as_bytes()).expect("write file");
        path
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FileSource::new("car.rdf").format(), Ok(RdfFormat::RdfXml));
        assert_eq!(FileSource::new("car.OWL").format(), Ok(RdfFormat::RdfXml));
        assert_eq!(FileSource::new("car.ttl").format(), Ok(RdfFormat::Turtle));
        assert_eq!(FileSource::new("car.nt").format(), Ok(RdfFormat::NTriples));
        assert!(matches!(
            FileSource::new("car").format(),
            Err(LoadError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            FileSource::new("car.docx").format(),
            Err(LoadError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_turtle() {
        let dir = tempdir().expect("create temp dir");
        let path = write_file(
            dir.path(),
            "car.ttl",
            r#"@prefix car: <urn:car#> .
car:C220d a car:Engine ;
    car:hasEnginePower "500HP" ;
    car:cylinders 4 .
"#,
        );

        let triples = FileSource::new(&path).load().expect("load");
        assert_eq!(triples.len(), 3);
        assert!(triples.contains(&Triple::new(
            Node::iri("urn:car#C220d"),
            Node::iri("urn:car#hasEnginePower"),
            Node::literal("500HP"),
        )));
        assert!(triples.contains(&Triple::new(
            Node::iri("urn:car#C220d"),
            Node::iri("urn:car#cylinders"),
            Node::integer(4),
        )));
    }

    #[test]
    fn test_language_tagged_literals_stay_distinct() {
        let dir = tempdir().expect("create temp dir");
        let path = write_file(
            dir.path(),
            "upholstery.ttl",
            r#"@prefix car: <urn:car#> .
car:Pelle car:hasUpholsteryMaterial "Pelle"@it , "Pelle"@en , "Pelle" .
"#,
        );

        let triples = FileSource::new(&path).load().expect("load");
        assert_eq!(triples.len(), 3);
        assert!(triples.contains(&Triple::new(
            Node::iri("urn:car#Pelle"),
            Node::iri("urn:car#hasUpholsteryMaterial"),
            Node::typed_literal("Pelle", LiteralType::lang("it")),
        )));

        let mut store = crate::store::TripleStore::new();
        assert_eq!(store.extend(triples), 3);
    }

    #[test]
    fn test_load_rdf_xml() {
        let dir = tempdir().expect("create temp dir");
        let path = write_file(
            dir.path(),
            "car.rdf",
            r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:car="urn:car#">
  <rdf:Description rdf:about="urn:car#BlackMatte">
    <rdf:type rdf:resource="urn:car#Paint"/>
    <car:hasPaintColor>Black</car:hasPaintColor>
  </rdf:Description>
</rdf:RDF>
"#,
        );

        let triples = FileSource::new(&path).load().expect("load");
        assert_eq!(triples.len(), 2);
        assert!(triples.contains(&Triple::new(
            Node::iri("urn:car#BlackMatte"),
            Node::iri("urn:car#hasPaintColor"),
            Node::literal("Black"),
        )));
    }

    #[test]
    fn test_blank_nodes_are_kept() {
        let dir = tempdir().expect("create temp dir");
        let path = write_file(
            dir.path(),
            "blank.nt",
            "_:b0 <urn:car#hasPaintColor> \"Red\" .\n",
        );

        let triples = FileSource::new(&path).load().expect("load");
        assert_eq!(triples.len(), 1);
        assert!(triples[0].subject.is_blank());
    }

    #[test]
    fn test_empty_file_is_empty_ontology() {
        let dir = tempdir().expect("create temp dir");
        let path = write_file(dir.path(), "empty.ttl", "");

        assert_eq!(FileSource::new(&path).load(), Ok(Vec::new()));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempdir().expect("create temp dir");
        let err = FileSource::new(dir.path().join("missing.rdf"))
            .load()
            .expect_err("missing file");
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().expect("create temp dir");
        let path = write_file(dir.path(), "broken.ttl", "this is not turtle");

        let err = FileSource::new(&path).load().expect_err("malformed");
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let dir = tempdir().expect("create temp dir");
        let path = write_file(
            dir.path(),
            "ontology.data",
            "<urn:a> <urn:b> <urn:c> .\n",
        );

        let triples = FileSource::with_format(&path, RdfFormat::NTriples)
            .load()
            .expect("load");
        assert_eq!(triples.len(), 1);
    }
}
