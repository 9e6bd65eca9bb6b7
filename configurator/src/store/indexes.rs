//! Index implementations for the triple store.
//!
//! Three two-level indexes cover every access pattern with at least one
//! bound position:
//! - SPO: `subject` -> `predicate` -> [`object`]
//! - POS: `predicate` -> `object` -> [`subject`]
//! - OSP: `object` -> `subject` -> [`predicate`]
//!
//! Two bound positions are answered by a point lookup on the index keyed on
//! exactly that pair; a single bound position by a scan of the index whose
//! leading key it is.
//!
//! All levels are insertion ordered, so iteration order is a function of
//! load order only.

use indexmap::{IndexMap, IndexSet};

use super::dictionary::NodeId;

/// A stored triple in dictionary-encoded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedTriple {
    pub subject: NodeId,
    pub predicate: NodeId,
    pub object: NodeId,
}

impl EncodedTriple {
    #[must_use]
    pub const fn new(subject: NodeId, predicate: NodeId, object: NodeId) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// One two-level index: `first` -> `second` -> [`third`].
#[derive(Debug, Default)]
pub struct PairIndex {
    entries: IndexMap<NodeId, IndexMap<NodeId, IndexSet<NodeId>>>,
}

impl PairIndex {
    /// Record `(first, second, third)`.
    ///
    /// Returns `false` if the entry was already present.
    pub fn insert(&mut self, first: NodeId, second: NodeId, third: NodeId) -> bool {
        self.entries
            .entry(first)
            .or_default()
            .entry(second)
            .or_default()
            .insert(third)
    }

    /// All `third` values stored under `(first, second)`.
    pub fn get(&self, first: NodeId, second: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.entries
            .get(&first)
            .and_then(|seconds| seconds.get(&second))
            .into_iter()
            .flat_map(|thirds| thirds.iter().copied())
    }

    /// All `(second, third)` pairs stored under `first`.
    pub fn prefix(&self, first: NodeId) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.entries
            .get(&first)
            .into_iter()
            .flat_map(|seconds| {
                seconds.iter().flat_map(|(second, thirds)| {
                    let second = *second;
                    thirds.iter().map(move |third| (second, *third))
                })
            })
    }
}

/// The three derived indexes of a store.
///
/// INVARIANT: every triple in the store is present in all three indexes.
/// `insert` updates them together.
#[derive(Debug, Default)]
pub struct TripleIndexes {
    spo: PairIndex,
    pos: PairIndex,
    osp: PairIndex,
}

impl TripleIndexes {
    /// Add a triple to all three indexes.
    pub fn insert(&mut self, triple: EncodedTriple) {
        let EncodedTriple {
            subject,
            predicate,
            object,
        } = triple;
        self.spo.insert(subject, predicate, object);
        self.pos.insert(predicate, object, subject);
        self.osp.insert(object, subject, predicate);
    }

    pub fn objects(&self, subject: NodeId, predicate: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.spo.get(subject, predicate)
    }

    pub fn subjects(&self, predicate: NodeId, object: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.pos.get(predicate, object)
    }

    pub fn predicates(&self, object: NodeId, subject: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.osp.get(object, subject)
    }

    /// `(predicate, object)` pairs of a subject.
    pub fn by_subject(&self, subject: NodeId) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.spo.prefix(subject)
    }

    /// `(object, subject)` pairs of a predicate.
    pub fn by_predicate(&self, predicate: NodeId) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.pos.prefix(predicate)
    }

    /// `(subject, predicate)` pairs of an object.
    pub fn by_object(&self, object: NodeId) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.osp.prefix(object)
    }
}
