//! In-memory triple store.
//!
//! The store is built in two phases:
//! 1. `TripleStore` is mutable. The ontology is bulk loaded into it and the
//!    inference pass adds implied facts.
//! 2. `TripleStore::freeze` consumes it and returns a `Snapshot`, which only
//!    exposes read operations. Nothing can be inserted after that point.
//!
//! Duplicates collapse: re-asserting a fact never changes the store.

pub mod dictionary;
pub mod indexes;

use indexmap::IndexSet;

use crate::types::{Node, Triple, TripleRef};
use dictionary::{Dictionary, NodeId};
use indexes::{EncodedTriple, TripleIndexes};

/// A mutable set of triples with SPO, POS and OSP indexes.
#[derive(Debug, Default)]
pub struct TripleStore {
    dictionary: Dictionary,
    triples: IndexSet<EncodedTriple>,
    indexes: TripleIndexes,
}

impl TripleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fact.
    ///
    /// Returns `true` if the fact was not already present. All indexes are
    /// updated before this returns.
    pub fn insert(&mut self, triple: Triple) -> bool {
        let encoded = EncodedTriple::new(
            self.dictionary.intern(triple.subject),
            self.dictionary.intern(triple.predicate),
            self.dictionary.intern(triple.object),
        );
        self.insert_encoded(encoded)
    }

    /// Insert many facts, returning how many were new.
    pub fn extend<I>(&mut self, triples: I) -> usize
    where
        I: IntoIterator<Item = Triple>,
    {
        triples
            .into_iter()
            .map(|triple| self.insert(triple))
            .filter(|inserted| *inserted)
            .count()
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Check whether a fact is present.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.encode(triple)
            .is_some_and(|encoded| self.triples.contains(&encoded))
    }

    /// Find all triples matching a pattern; `None` is a wildcard.
    pub fn query_pattern<'a>(
        &'a self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Box<dyn Iterator<Item = TripleRef<'a>> + 'a> {
        let (Some(s), Some(p), Some(o)) = (
            self.encode_position(subject),
            self.encode_position(predicate),
            self.encode_position(object),
        ) else {
            // A bound node the store has never seen cannot match anything.
            return Box::new(std::iter::empty());
        };
        Box::new(self.matching(s, p, o).map(move |triple| self.decode(triple)))
    }

    /// Close the store for writing.
    #[must_use]
    pub fn freeze(self) -> Snapshot {
        tracing::debug!(
            triples = self.triples.len(),
            nodes = self.dictionary.len(),
            "triple store frozen"
        );
        Snapshot { store: self }
    }

    pub(crate) fn insert_encoded(&mut self, triple: EncodedTriple) -> bool {
        if !self.triples.insert(triple) {
            return false;
        }
        self.indexes.insert(triple);
        true
    }

    pub(crate) fn intern(&mut self, node: Node) -> NodeId {
        self.dictionary.intern(node)
    }

    pub(crate) fn lookup(&self, node: &Node) -> Option<NodeId> {
        self.dictionary.lookup(node)
    }

    pub(crate) fn resolve(&self, id: NodeId) -> &Node {
        self.dictionary.resolve(id)
    }

    /// Encoded pattern lookup.
    ///
    /// Picks the index keyed on the bound positions; only the all-wildcard
    /// pattern falls back to a full scan.
    pub(crate) fn matching(
        &self,
        subject: Option<NodeId>,
        predicate: Option<NodeId>,
        object: Option<NodeId>,
    ) -> Box<dyn Iterator<Item = EncodedTriple> + '_> {
        match (subject, predicate, object) {
            (Some(s), Some(p), Some(o)) => {
                let triple = EncodedTriple::new(s, p, o);
                Box::new(self.triples.contains(&triple).then_some(triple).into_iter())
            }
            (Some(s), Some(p), None) => Box::new(
                self.indexes
                    .objects(s, p)
                    .map(move |o| EncodedTriple::new(s, p, o)),
            ),
            (None, Some(p), Some(o)) => Box::new(
                self.indexes
                    .subjects(p, o)
                    .map(move |s| EncodedTriple::new(s, p, o)),
            ),
            (Some(s), None, Some(o)) => Box::new(
                self.indexes
                    .predicates(o, s)
                    .map(move |p| EncodedTriple::new(s, p, o)),
            ),
            (Some(s), None, None) => Box::new(
                self.indexes
                    .by_subject(s)
                    .map(move |(p, o)| EncodedTriple::new(s, p, o)),
            ),
            (None, Some(p), None) => Box::new(
                self.indexes
                    .by_predicate(p)
                    .map(move |(o, s)| EncodedTriple::new(s, p, o)),
            ),
            (None, None, Some(o)) => Box::new(
                self.indexes
                    .by_object(o)
                    .map(move |(s, p)| EncodedTriple::new(s, p, o)),
            ),
            (None, None, None) => Box::new(self.triples.iter().copied()),
        }
    }

    /// Encode an optional pattern position.
    ///
    /// Returns `None` when the node is bound but unknown, `Some(None)` for a
    /// wildcard.
    fn encode_position(&self, node: Option<&Node>) -> Option<Option<NodeId>> {
        match node {
            Some(node) => self.lookup(node).map(Some),
            None => Some(None),
        }
    }

    fn encode(&self, triple: &Triple) -> Option<EncodedTriple> {
        Some(EncodedTriple::new(
            self.lookup(&triple.subject)?,
            self.lookup(&triple.predicate)?,
            self.lookup(&triple.object)?,
        ))
    }

    fn decode(&self, triple: EncodedTriple) -> TripleRef<'_> {
        TripleRef {
            subject: self.resolve(triple.subject),
            predicate: self.resolve(triple.predicate),
            object: self.resolve(triple.object),
        }
    }
}

/// A frozen, read-only triple store.
///
/// Produced by `TripleStore::freeze` once inference is done. Holds no
/// interior mutability, so it can be shared freely between readers.
#[derive(Debug)]
pub struct Snapshot {
    store: TripleStore,
}

impl Snapshot {
    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Check whether a fact is present.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.store.contains(triple)
    }

    /// Find all triples matching a pattern; `None` is a wildcard.
    pub fn query_pattern<'a>(
        &'a self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Box<dyn Iterator<Item = TripleRef<'a>> + 'a> {
        self.store.query_pattern(subject, predicate, object)
    }

    pub(crate) fn lookup(&self, node: &Node) -> Option<NodeId> {
        self.store.lookup(node)
    }

    pub(crate) fn resolve(&self, id: NodeId) -> &Node {
        self.store.resolve(id)
    }

    pub(crate) fn matching(
        &self,
        subject: Option<NodeId>,
        predicate: Option<NodeId>,
        object: Option<NodeId>,
    ) -> Box<dyn Iterator<Item = EncodedTriple> + '_> {
        self.store.matching(subject, predicate, object)
    }
}
