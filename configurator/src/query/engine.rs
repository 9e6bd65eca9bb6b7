//! Query engine implementation.
//!
//! The `QueryEngine` evaluates pattern queries against a frozen snapshot.
//! It supports:
//! - pre-bound variables (seeded into the initial binding)
//! - WHERE patterns (required matches)
//! - OPTIONAL patterns (left join)
//! - Filters (predicate functions)

#![allow(clippy::option_if_let_else)] // if-let is clearer for mutable pattern matching

use super::context::Binding;
use super::types::{Pattern, PatternElement, Query, QueryResult, QueryRow, Variable};
use crate::store::Snapshot;
use crate::store::dictionary::NodeId;
use crate::store::indexes::EncodedTriple;

/// A pattern position after substituting the current binding.
enum Slot<'p> {
    /// A concrete node, or a variable already bound to one.
    Bound(NodeId),
    /// A variable with no value yet.
    Free(&'p Variable),
    /// A concrete node the snapshot has never seen.
    Absent,
}

impl Slot<'_> {
    const fn id(&self) -> Option<NodeId> {
        match self {
            Self::Bound(id) => Some(*id),
            Self::Free(_) | Self::Absent => None,
        }
    }
}

/// The query engine evaluates queries against a snapshot.
pub struct QueryEngine<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine for a snapshot.
    #[must_use]
    pub const fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Execute a query and return results.
    ///
    /// Queries cannot fail: a pattern that matches nothing just produces an
    /// empty result.
    #[must_use]
    pub fn execute(&self, query: &Query) -> QueryResult {
        let columns: Vec<String> = query.find.iter().map(|v| v.name.clone()).collect();

        let Some(seed) = self.seed(query) else {
            return QueryResult::with_columns(columns);
        };
        let mut bindings = vec![seed];

        // Process WHERE patterns (required)
        for pattern in &query.where_patterns {
            bindings = self.match_pattern_all(pattern, bindings);
            if bindings.is_empty() {
                return QueryResult::with_columns(columns);
            }
        }

        // Process OPTIONAL patterns (left join)
        for pattern in &query.optional_patterns {
            bindings = self.match_optional_pattern(pattern, bindings);
        }

        // Apply filters
        for filter in &query.filters {
            bindings.retain(|binding| {
                let node = binding
                    .get(&filter.selector)
                    .map(|id| self.snapshot.resolve(id));
                filter.apply(node)
            });
        }

        let mut result = QueryResult::with_columns(columns);
        for binding in bindings {
            let row: QueryRow = query
                .find
                .iter()
                .map(|var| binding.get(var).map(|id| self.snapshot.resolve(id).clone()))
                .collect();
            result.push(row);
        }

        tracing::trace!(rows = result.len(), "query executed");
        result
    }

    /// Build the initial binding from the query's pre-bound variables.
    ///
    /// Returns `None` if a pre-bound node is unknown to the snapshot, or if
    /// one variable is pre-bound to two different nodes.
    fn seed(&self, query: &Query) -> Option<Binding> {
        let mut binding = Binding::new();
        for (var, node) in &query.bound {
            let id = self.snapshot.lookup(node)?;
            if !binding.unify(var, id) {
                return None;
            }
        }
        Some(binding)
    }

    /// Match a pattern against every binding, collecting all extensions.
    fn match_pattern_all(&self, pattern: &Pattern, bindings: Vec<Binding>) -> Vec<Binding> {
        bindings
            .into_iter()
            .flat_map(|binding| self.match_pattern(pattern, &binding))
            .collect()
    }

    /// Match a pattern with the given binding.
    fn match_pattern(&self, pattern: &Pattern, binding: &Binding) -> Vec<Binding> {
        let subject = Self::resolve_slot(self.snapshot, &pattern.subject, binding);
        let predicate = Self::resolve_slot(self.snapshot, &pattern.predicate, binding);
        let object = Self::resolve_slot(self.snapshot, &pattern.object, binding);

        if [&subject, &predicate, &object]
            .iter()
            .any(|slot| matches!(slot, Slot::Absent))
        {
            return Vec::new();
        }

        self.snapshot
            .matching(subject.id(), predicate.id(), object.id())
            .filter_map(|triple| Self::try_match_triple(&subject, &predicate, &object, triple, binding))
            .collect()
    }

    /// Substitute the binding into one pattern position.
    fn resolve_slot<'p>(
        snapshot: &Snapshot,
        element: &'p PatternElement,
        binding: &Binding,
    ) -> Slot<'p> {
        match element {
            PatternElement::Node(node) => match snapshot.lookup(node) {
                Some(id) => Slot::Bound(id),
                None => Slot::Absent,
            },
            PatternElement::Variable(var) => match binding.get(var) {
                Some(id) => Slot::Bound(id),
                None => Slot::Free(var),
            },
        }
    }

    /// Extend the binding with a matched triple.
    ///
    /// A variable that appears in more than one position must take the same
    /// node in each of them; otherwise the candidate is rejected.
    fn try_match_triple(
        subject: &Slot<'_>,
        predicate: &Slot<'_>,
        object: &Slot<'_>,
        triple: EncodedTriple,
        binding: &Binding,
    ) -> Option<Binding> {
        let mut extended = binding.clone();
        for (slot, value) in [
            (subject, triple.subject),
            (predicate, triple.predicate),
            (object, triple.object),
        ] {
            match slot {
                Slot::Bound(id) if *id != value => return None,
                Slot::Free(var) if !extended.unify(var, value) => return None,
                _ => {}
            }
        }
        Some(extended)
    }

    /// Match an optional pattern (left join).
    fn match_optional_pattern(&self, pattern: &Pattern, bindings: Vec<Binding>) -> Vec<Binding> {
        let mut results = Vec::new();

        for binding in bindings {
            let matches = self.match_pattern(pattern, &binding);
            if matches.is_empty() {
                // No matches - keep original binding (left join behavior)
                results.push(binding);
            } else {
                results.extend(matches);
            }
        }

        results
    }
}
