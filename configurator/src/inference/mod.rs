//! Forward-chaining inference over the triple store.
//!
//! Materializes the facts implied by the class and property hierarchy so
//! queries never need to walk it themselves. Each pass:
//! 1. closes `rdfs:subClassOf` reflexively and transitively,
//! 2. propagates every `rdf:type` assertion to all superclasses,
//! 3. closes `rdfs:subPropertyOf` the same way and re-asserts every fact
//!    made with a sub-property under each of its super-properties.
//!
//! Passes repeat until one adds nothing. The steps feed each other (a
//! sub-property of `rdfs:subClassOf` creates new subclass edges), so a single
//! pass is not always enough. The pass count is capped; a hierarchy that
//! keeps producing facts past the cap is reported as a data-integrity error.

pub mod hierarchy;

use crate::constants::{
    DEFAULT_MAX_INFERENCE_PASSES, OWL_ANNOTATION_PROPERTY, OWL_CLASS, OWL_DATATYPE_PROPERTY,
    OWL_OBJECT_PROPERTY, RDF_PROPERTY, RDF_TYPE, RDFS_CLASS, RDFS_SUB_CLASS_OF,
    RDFS_SUB_PROPERTY_OF,
};
use crate::store::TripleStore;
use crate::store::dictionary::NodeId;
use crate::store::indexes::EncodedTriple;
use crate::types::Node;
use hierarchy::Hierarchy;

/// Errors that can occur during inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// The fixed point was not reached within the pass limit.
    PassLimitExceeded { passes: usize },
}

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PassLimitExceeded { passes } => write!(
                f,
                "inference did not reach a fixed point after {passes} passes; \
                 check the ontology for runaway hierarchy declarations"
            ),
        }
    }
}

impl std::error::Error for InferenceError {}

/// Outcome of a successful inference run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceReport {
    /// Passes run, including the final pass that added nothing.
    pub passes: usize,
    /// Facts added across all passes.
    pub inferred: usize,
}

/// Reserved vocabulary, interned into the store being reasoned over.
struct Schema {
    rdf_type: NodeId,
    sub_class_of: NodeId,
    sub_property_of: NodeId,
    class_types: [NodeId; 2],
    property_types: [NodeId; 4],
}

impl Schema {
    fn intern(store: &mut TripleStore) -> Self {
        let mut iri = |s: &str| store.intern(Node::iri(s));
        Self {
            rdf_type: iri(RDF_TYPE),
            sub_class_of: iri(RDFS_SUB_CLASS_OF),
            sub_property_of: iri(RDFS_SUB_PROPERTY_OF),
            class_types: [iri(RDFS_CLASS), iri(OWL_CLASS)],
            property_types: [
                iri(RDF_PROPERTY),
                iri(OWL_OBJECT_PROPERTY),
                iri(OWL_DATATYPE_PROPERTY),
                iri(OWL_ANNOTATION_PROPERTY),
            ],
        }
    }
}

/// Fixed-point forward chainer for class and property hierarchies.
#[derive(Debug, Clone, Copy)]
pub struct Reasoner {
    max_passes: usize,
}

impl Default for Reasoner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INFERENCE_PASSES)
    }
}

impl Reasoner {
    /// Create a reasoner that gives up after `max_passes` passes.
    ///
    /// A limit of zero is raised to one: the pass that confirms the fixed
    /// point always has to run.
    #[must_use]
    pub const fn new(max_passes: usize) -> Self {
        let max_passes = if max_passes == 0 { 1 } else { max_passes };
        Self { max_passes }
    }

    #[must_use]
    pub const fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Run inference to a fixed point, mutating the store in place.
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::PassLimitExceeded` if a pass still adds facts
    /// once `max_passes` passes have run.
    pub fn run(&self, store: &mut TripleStore) -> Result<InferenceReport, InferenceError> {
        let schema = Schema::intern(store);
        let mut passes = 0;
        let mut inferred = 0;

        loop {
            if passes >= self.max_passes {
                tracing::error!(passes, inferred, "inference pass limit exceeded");
                return Err(InferenceError::PassLimitExceeded { passes });
            }
            passes += 1;

            let added = Self::pass(store, &schema);
            tracing::debug!(pass = passes, added, "inference pass complete");
            inferred += added;

            if added == 0 {
                break;
            }
        }

        tracing::info!(passes, inferred, total = store.len(), "inference reached fixed point");
        Ok(InferenceReport { passes, inferred })
    }

    /// Run one pass, returning the number of new facts.
    fn pass(store: &mut TripleStore, schema: &Schema) -> usize {
        let mut pending = Vec::new();

        let classes = Hierarchy::build(
            store,
            schema.sub_class_of,
            schema.rdf_type,
            &schema.class_types,
        );
        for (class, ancestors) in classes.iter() {
            pending.extend(
                ancestors
                    .iter()
                    .map(|ancestor| EncodedTriple::new(class, schema.sub_class_of, *ancestor)),
            );
        }
        for assertion in store.matching(None, Some(schema.rdf_type), None) {
            if !classes.has_proper_ancestors(assertion.object) {
                continue;
            }
            pending.extend(classes.ancestors(assertion.object).map(|ancestor| {
                EncodedTriple::new(assertion.subject, schema.rdf_type, ancestor)
            }));
        }

        let properties = Hierarchy::build(
            store,
            schema.sub_property_of,
            schema.rdf_type,
            &schema.property_types,
        );
        for (property, ancestors) in properties.iter() {
            pending.extend(
                ancestors
                    .iter()
                    .map(|ancestor| EncodedTriple::new(property, schema.sub_property_of, *ancestor)),
            );
            if !properties.has_proper_ancestors(property) {
                continue;
            }
            for fact in store.matching(None, Some(property), None) {
                pending.extend(
                    ancestors
                        .iter()
                        .filter(|ancestor| **ancestor != property)
                        .map(|ancestor| EncodedTriple::new(fact.subject, *ancestor, fact.object)),
                );
            }
        }

        pending
            .into_iter()
            .filter(|triple| store.insert_encoded(*triple))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Triple;

    fn car(local: &str) -> Node {
        Node::iri(format!("urn:car#{local}"))
    }

    fn rdf_type() -> Node {
        Node::iri(RDF_TYPE)
    }

    fn sub_class_of() -> Node {
        Node::iri(RDFS_SUB_CLASS_OF)
    }

    fn sub_property_of() -> Node {
        Node::iri(RDFS_SUB_PROPERTY_OF)
    }

    #[test]
    fn test_type_propagates_through_subclass_chain() {
        let mut store = TripleStore::new();
        store.insert(Triple::new(car("DieselEngine"), sub_class_of(), car("Engine")));
        store.insert(Triple::new(car("Engine"), sub_class_of(), car("Component")));
        store.insert(Triple::new(car("C220d"), rdf_type(), car("DieselEngine")));

        let report = Reasoner::default().run(&mut store).expect("inference");

        assert!(store.contains(&Triple::new(car("C220d"), rdf_type(), car("Engine"))));
        assert!(store.contains(&Triple::new(car("C220d"), rdf_type(), car("Component"))));
        assert!(store.contains(&Triple::new(
            car("DieselEngine"),
            sub_class_of(),
            car("Component")
        )));
        assert!(store.contains(&Triple::new(car("Engine"), sub_class_of(), car("Engine"))));
        assert!(report.inferred > 0);
        assert!(report.passes >= 2);
    }

    #[test]
    fn test_declared_class_is_reflexive() {
        let mut store = TripleStore::new();
        store.insert(Triple::new(car("Paint"), rdf_type(), Node::iri(OWL_CLASS)));

        Reasoner::default().run(&mut store).expect("inference");

        assert!(store.contains(&Triple::new(car("Paint"), sub_class_of(), car("Paint"))));
    }

    #[test]
    fn test_subproperty_facts_are_propagated() {
        let mut store = TripleStore::new();
        store.insert(Triple::new(
            car("hasEnginePower"),
            sub_property_of(),
            car("hasTechnicalData"),
        ));
        store.insert(Triple::new(
            car("C220d"),
            car("hasEnginePower"),
            Node::literal("500HP"),
        ));

        Reasoner::default().run(&mut store).expect("inference");

        assert!(store.contains(&Triple::new(
            car("C220d"),
            car("hasTechnicalData"),
            Node::literal("500HP")
        )));
    }

    #[test]
    fn test_subproperty_of_subclass_feeds_type_propagation() {
        // `narrowerThan` behaves like subClassOf only once the property
        // hierarchy has been applied, so this needs more than one pass.
        let mut store = TripleStore::new();
        store.insert(Triple::new(car("narrowerThan"), sub_property_of(), sub_class_of()));
        store.insert(Triple::new(car("SportSeats"), car("narrowerThan"), car("Seats")));
        store.insert(Triple::new(car("RaceSeat"), rdf_type(), car("SportSeats")));

        let report = Reasoner::default().run(&mut store).expect("inference");

        assert!(store.contains(&Triple::new(car("RaceSeat"), rdf_type(), car("Seats"))));
        assert!(report.passes >= 3);
    }

    #[test]
    fn test_cyclic_hierarchy_terminates() {
        let mut store = TripleStore::new();
        store.insert(Triple::new(car("A"), sub_class_of(), car("B")));
        store.insert(Triple::new(car("B"), sub_class_of(), car("A")));
        store.insert(Triple::new(car("x"), rdf_type(), car("A")));

        Reasoner::default().run(&mut store).expect("inference");

        assert!(store.contains(&Triple::new(car("x"), rdf_type(), car("B"))));
        assert!(store.contains(&Triple::new(car("A"), sub_class_of(), car("A"))));
    }

    #[test]
    fn test_second_run_adds_nothing() {
        let mut store = TripleStore::new();
        store.insert(Triple::new(car("DieselEngine"), sub_class_of(), car("Engine")));
        store.insert(Triple::new(car("C220d"), rdf_type(), car("DieselEngine")));

        Reasoner::default().run(&mut store).expect("first run");
        let size = store.len();
        let report = Reasoner::default().run(&mut store).expect("second run");

        assert_eq!(report, InferenceReport { passes: 1, inferred: 0 });
        assert_eq!(store.len(), size);
    }

    #[test]
    fn test_empty_store_needs_one_pass() {
        let mut store = TripleStore::new();
        let report = Reasoner::new(1).run(&mut store).expect("inference");
        assert_eq!(report, InferenceReport { passes: 1, inferred: 0 });
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_pass_limit_is_raised_to_one() {
        let reasoner = Reasoner::new(0);
        assert_eq!(reasoner.max_passes(), 1);

        let mut store = TripleStore::new();
        let report = reasoner.run(&mut store).expect("empty store closes in one pass");
        assert_eq!(report, InferenceReport { passes: 1, inferred: 0 });
    }

    #[test]
    fn test_pass_limit_is_reported() {
        let mut store = TripleStore::new();
        store.insert(Triple::new(car("DieselEngine"), sub_class_of(), car("Engine")));
        store.insert(Triple::new(car("C220d"), rdf_type(), car("DieselEngine")));

        let err = Reasoner::new(1).run(&mut store).expect_err("should hit the limit");
        assert_eq!(err, InferenceError::PassLimitExceeded { passes: 1 });
        assert!(err.to_string().contains("1 passes"));
    }
}
