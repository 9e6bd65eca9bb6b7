//! Data-driven category queries.
//!
//! Every configuration category is described by a `CategoryTemplate`: the
//! class its instances belong to, the properties every instance must carry
//! and the properties it may carry. The template expands into a pattern
//! query; `OptionFields` gives a record constructor typed access to one row.

use crate::constants::{CAR_NAMESPACE, RDF_TYPE};
use crate::query::{Filter, Pattern, PatternElement, Query, Solution, Variable};
use crate::types::Node;

/// Variable every category query binds the instance to.
pub const ITEM_VARIABLE: &str = "item";

/// Prefix that resolves local names to IRIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace(String);

impl Namespace {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The IRI node for `local` in this namespace.
    #[must_use]
    pub fn node(&self, local: &str) -> Node {
        Node::iri(format!("{}{local}", self.0))
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(CAR_NAMESPACE)
    }
}

/// Shape of one configuration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTemplate {
    /// Local name of the category class.
    pub class: &'static str,
    /// Properties an instance must have, each bound to a literal.
    pub mandatory: &'static [&'static str],
    /// Properties that are left unbound when missing.
    pub optional: &'static [&'static str],
}

impl CategoryTemplate {
    /// Build the query listing every instance of the category.
    ///
    /// Each property is bound to a variable named after the property, so
    /// rows are read back with the property's local name.
    #[must_use]
    pub fn query(&self, namespace: &Namespace) -> Query {
        let item = || PatternElement::var(ITEM_VARIABLE);

        let mut query = Query::new().find(ITEM_VARIABLE).where_pattern(Pattern::new(
            item(),
            PatternElement::iri(RDF_TYPE),
            PatternElement::Node(namespace.node(self.class)),
        ));

        for property in self.mandatory {
            query = query
                .find(*property)
                .where_pattern(Pattern::new(
                    item(),
                    PatternElement::Node(namespace.node(property)),
                    PatternElement::var(*property),
                ))
                .filter(Filter::is_literal(Variable::new(*property)));
        }

        for property in self.optional {
            query = query.find(*property).optional(Pattern::new(
                item(),
                PatternElement::Node(namespace.node(property)),
                PatternElement::var(*property),
            ));
        }

        query
    }
}

/// One result row of a category query.
#[derive(Debug, Clone, Copy)]
pub struct OptionFields<'a> {
    item: &'a Node,
    solution: Solution<'a>,
}

impl<'a> OptionFields<'a> {
    /// Wrap a row; `None` if the row has no instance binding.
    #[must_use]
    pub fn from_solution(solution: Solution<'a>) -> Option<Self> {
        let item = solution.get(ITEM_VARIABLE)?;
        Some(Self { item, solution })
    }

    /// The instance node.
    #[must_use]
    pub const fn item(&self) -> &'a Node {
        self.item
    }

    /// The instance's local name, used as its stable identifier.
    #[must_use]
    pub fn local_name(&self) -> String {
        self.item.local_name().to_owned()
    }

    /// Lexical value of `property`; `None` if unbound or not a literal.
    #[must_use]
    pub fn value(&self, property: &str) -> Option<String> {
        self.solution.literal(property).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAINT: CategoryTemplate = CategoryTemplate {
        class: "Paint",
        mandatory: &["hasPaintColor", "hasPaintType"],
        optional: &["hasPaintCode"],
    };

    #[test]
    fn test_namespace_node() {
        let ns = Namespace::new("urn:car#");
        assert_eq!(ns.node("Engine"), Node::iri("urn:car#Engine"));
        assert_eq!(Namespace::default().as_str(), CAR_NAMESPACE);
    }

    #[test]
    fn test_template_query_shape() {
        let query = PAINT.query(&Namespace::new("urn:car#"));

        let columns: Vec<_> = query.find.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            columns,
            vec!["item", "hasPaintColor", "hasPaintType", "hasPaintCode"]
        );
        assert_eq!(query.where_patterns.len(), 3);
        assert_eq!(query.optional_patterns.len(), 1);
        assert_eq!(query.filters.len(), 2);
        assert_eq!(
            query.where_patterns[0].object,
            PatternElement::iri("urn:car#Paint")
        );
    }
}
