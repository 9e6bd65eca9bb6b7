//! Graph node values.
//!
//! Provides the closed `Node` variant (IRI, literal, blank node) and the
//! `LiteralType` discriminant carried by literals.

use std::fmt;

use crate::constants::{
    RDF_LANG_STRING, XSD_BOOLEAN, XSD_DECIMAL, XSD_DOUBLE, XSD_FLOAT, XSD_INT, XSD_INTEGER,
    XSD_LONG, XSD_STRING,
};

/// Datatype of a literal node.
///
/// The lexical value of a literal is always kept as a string; the datatype
/// only takes part in equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralType {
    String,
    /// A language-tagged string; the tag is part of the literal's identity.
    LangString(String),
    Boolean,
    Integer,
    Decimal,
    /// Any other datatype, kept as its IRI.
    Other(String),
}

impl LiteralType {
    /// Classify a datatype IRI.
    ///
    /// `rdf:langString` is not accepted here since the IRI alone carries no
    /// tag; use [`LiteralType::lang`] instead.
    #[must_use]
    pub fn from_iri(iri: &str) -> Self {
        match iri {
            XSD_STRING => Self::String,
            XSD_BOOLEAN => Self::Boolean,
            XSD_INTEGER | XSD_INT | XSD_LONG => Self::Integer,
            XSD_DECIMAL | XSD_DOUBLE | XSD_FLOAT => Self::Decimal,
            other => Self::Other(other.to_owned()),
        }
    }

    /// A language-tagged string type. Tags compare case-insensitively, so
    /// they are stored lowercased.
    #[must_use]
    pub fn lang(tag: &str) -> Self {
        Self::LangString(tag.to_ascii_lowercase())
    }

    /// The datatype IRI.
    #[must_use]
    pub fn iri(&self) -> &str {
        match self {
            Self::String => XSD_STRING,
            Self::LangString(_) => RDF_LANG_STRING,
            Self::Boolean => XSD_BOOLEAN,
            Self::Integer => XSD_INTEGER,
            Self::Decimal => XSD_DECIMAL,
            Self::Other(iri) => iri,
        }
    }
}

/// A node in the graph.
///
/// Nodes are immutable and compared by exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A global identifier naming a class, instance or property.
    Iri(String),
    /// A data value.
    Literal { value: String, datatype: LiteralType },
    /// An anonymous node, scoped to the source it was loaded from.
    Blank(String),
}

impl Node {
    /// Create an IRI node.
    #[must_use]
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// Create a plain string literal.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::typed_literal(value, LiteralType::String)
    }

    /// Create a literal with an explicit datatype.
    #[must_use]
    pub fn typed_literal(value: impl Into<String>, datatype: LiteralType) -> Self {
        Self::Literal {
            value: value.into(),
            datatype,
        }
    }

    /// Create a boolean literal.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::typed_literal(value.to_string(), LiteralType::Boolean)
    }

    /// Create an integer literal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::typed_literal(value.to_string(), LiteralType::Integer)
    }

    /// Create a blank node.
    #[must_use]
    pub fn blank(label: impl Into<String>) -> Self {
        Self::Blank(label.into())
    }

    #[must_use]
    pub const fn is_iri(&self) -> bool {
        matches!(self, Self::Iri(_))
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }

    /// Get the IRI if this is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Get the lexical value if this is a literal.
    #[must_use]
    pub fn literal_value(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The short, human-facing name of this node.
    ///
    /// For an IRI this is the text after the last `#`, `/` or `:`; a blank
    /// node yields its label and a literal its lexical value.
    #[must_use]
    pub fn local_name(&self) -> &str {
        match self {
            Self::Iri(iri) => match iri.rsplit(['#', '/', ':']).next() {
                Some(name) if !name.is_empty() => name,
                _ => iri,
            },
            Self::Literal { value, .. } => value,
            Self::Blank(label) => label,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::Literal {
                value,
                datatype: LiteralType::String,
            } => write!(f, "{value:?}"),
            Self::Literal {
                value,
                datatype: LiteralType::LangString(tag),
            } => write!(f, "{value:?}@{tag}"),
            Self::Literal { value, datatype } => write!(f, "{value:?}^^<{}>", datatype.iri()),
            Self::Blank(label) => write!(f, "_:{label}"),
        }
    }
}
