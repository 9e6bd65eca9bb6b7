//! Reflexive-transitive closure of a hierarchy relation.
//!
//! Used for both `rdfs:subClassOf` and `rdfs:subPropertyOf`. The closure is
//! computed by a depth-first walk with a visited set, so cycles in the
//! declared hierarchy terminate and simply make their members ancestors of
//! each other.

use indexmap::{IndexMap, IndexSet};

use crate::store::TripleStore;
use crate::store::dictionary::NodeId;

/// The ancestors (including itself) of every member of a hierarchy.
#[derive(Debug, Default)]
pub struct Hierarchy {
    ancestors: IndexMap<NodeId, IndexSet<NodeId>>,
}

impl Hierarchy {
    /// Build the closure of `relation` over the store.
    ///
    /// Members are every node on either side of a `relation` statement, plus
    /// every node typed (via `rdf_type`) as one of `member_types`.
    #[must_use]
    pub fn build(
        store: &TripleStore,
        relation: NodeId,
        rdf_type: NodeId,
        member_types: &[NodeId],
    ) -> Self {
        let mut parents: IndexMap<NodeId, Vec<NodeId>> = IndexMap::new();

        for statement in store.matching(None, Some(relation), None) {
            parents
                .entry(statement.subject)
                .or_default()
                .push(statement.object);
            parents.entry(statement.object).or_default();
        }

        for member_type in member_types {
            for declaration in store.matching(None, Some(rdf_type), Some(*member_type)) {
                parents.entry(declaration.subject).or_default();
            }
        }

        let ancestors = parents
            .keys()
            .map(|member| (*member, reachable(*member, &parents)))
            .collect();

        Self { ancestors }
    }

    /// Ancestors of `node`, including `node` itself if it is a member.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.ancestors
            .get(&node)
            .into_iter()
            .flat_map(|ancestors| ancestors.iter().copied())
    }

    /// Whether `node` has any ancestor other than itself.
    #[must_use]
    pub fn has_proper_ancestors(&self, node: NodeId) -> bool {
        self.ancestors(node).any(|ancestor| ancestor != node)
    }

    /// Iterate `(member, ancestors)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &IndexSet<NodeId>)> {
        self.ancestors
            .iter()
            .map(|(member, ancestors)| (*member, ancestors))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ancestors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ancestors.is_empty()
    }
}

fn reachable(start: NodeId, parents: &IndexMap<NodeId, Vec<NodeId>>) -> IndexSet<NodeId> {
    let mut visited = IndexSet::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(next) = parents.get(&node) {
            stack.extend(next.iter().copied().filter(|n| !visited.contains(n)));
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Node, Triple};

    struct Fixture {
        store: TripleStore,
        sub_class_of: NodeId,
        rdf_type: NodeId,
        owl_class: NodeId,
    }

    fn fixture(edges: &[(&str, &str)]) -> Fixture {
        let mut store = TripleStore::new();
        for (child, parent) in edges {
            store.insert(Triple::new(
                Node::iri(*child),
                Node::iri("urn:subClassOf"),
                Node::iri(*parent),
            ));
        }
        let sub_class_of = store.intern(Node::iri("urn:subClassOf"));
        let rdf_type = store.intern(Node::iri("urn:type"));
        let owl_class = store.intern(Node::iri("urn:Class"));
        Fixture {
            store,
            sub_class_of,
            rdf_type,
            owl_class,
        }
    }

    fn id(store: &TripleStore, iri: &str) -> NodeId {
        store.lookup(&Node::iri(iri)).expect("node should be interned")
    }

    #[test]
    fn test_chain_is_transitive_and_reflexive() {
        let f = fixture(&[("urn:A", "urn:B"), ("urn:B", "urn:C")]);
        let hierarchy = Hierarchy::build(&f.store, f.sub_class_of, f.rdf_type, &[f.owl_class]);

        let a = id(&f.store, "urn:A");
        let ancestors: Vec<_> = hierarchy.ancestors(a).collect();
        assert_eq!(ancestors.len(), 3);
        assert!(ancestors.contains(&a));
        assert!(ancestors.contains(&id(&f.store, "urn:C")));

        let c = id(&f.store, "urn:C");
        assert_eq!(hierarchy.ancestors(c).collect::<Vec<_>>(), vec![c]);
        assert!(!hierarchy.has_proper_ancestors(c));
    }

    #[test]
    fn test_cycle_terminates() {
        let f = fixture(&[("urn:A", "urn:B"), ("urn:B", "urn:A")]);
        let hierarchy = Hierarchy::build(&f.store, f.sub_class_of, f.rdf_type, &[f.owl_class]);

        let a = id(&f.store, "urn:A");
        let b = id(&f.store, "urn:B");
        assert_eq!(hierarchy.ancestors(a).count(), 2);
        assert!(hierarchy.ancestors(b).any(|n| n == a));
    }

    #[test]
    fn test_declared_members_are_included() {
        let mut f = fixture(&[]);
        f.store.insert(Triple::new(
            Node::iri("urn:Lonely"),
            Node::iri("urn:type"),
            Node::iri("urn:Class"),
        ));
        let hierarchy = Hierarchy::build(&f.store, f.sub_class_of, f.rdf_type, &[f.owl_class]);

        assert_eq!(hierarchy.len(), 1);
        let lonely = id(&f.store, "urn:Lonely");
        assert_eq!(hierarchy.ancestors(lonely).collect::<Vec<_>>(), vec![lonely]);
    }

    #[test]
    fn test_unknown_node_has_no_ancestors() {
        let f = fixture(&[("urn:A", "urn:B")]);
        let hierarchy = Hierarchy::build(&f.store, f.sub_class_of, f.rdf_type, &[f.owl_class]);
        assert_eq!(hierarchy.ancestors(f.owl_class).count(), 0);
    }
}
