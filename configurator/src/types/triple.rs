use std::fmt;

use super::node::Node;

/// A fact: (subject, predicate, object).
///
/// INVARIANT: triples are the only unit of fact; schema statements are
/// ordinary triples using reserved predicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
}

impl Triple {
    #[must_use]
    pub const fn new(subject: Node, predicate: Node, object: Node) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A borrowed view of a stored triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripleRef<'a> {
    pub subject: &'a Node,
    pub predicate: &'a Node,
    pub object: &'a Node,
}

impl TripleRef<'_> {
    /// Copy the referenced nodes into an owned triple.
    #[must_use]
    pub fn to_owned_triple(&self) -> Triple {
        Triple::new(
            self.subject.clone(),
            self.predicate.clone(),
            self.object.clone(),
        )
    }
}
