//! Query types for the pattern query engine.
//!
//! This module defines the core types used in the query system:
//! - `Variable` - A placeholder in query patterns
//! - `PatternElement` - A concrete node or a variable
//! - `Pattern` - A triple pattern
//! - `Filter` - A predicate over one variable's binding
//! - `Query` - Required patterns, optional patterns, pre-bound variables and filters
//! - `QueryResult` - Projected rows, in discovery order

#![allow(clippy::type_complexity)] // Boxed filter predicates

use std::fmt;

use crate::types::Node;

/// A query variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    /// The variable name, without the leading `?`.
    pub name: String,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

/// A pattern element - either a concrete node or a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternElement {
    Node(Node),
    Variable(Variable),
}

impl PatternElement {
    /// Create a variable pattern element.
    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(Variable::new(name))
    }

    /// Create an IRI pattern element.
    #[must_use]
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Node(Node::iri(iri))
    }

    /// Create a string literal pattern element.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Node(Node::literal(value))
    }

    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Get the variable if this is one.
    #[must_use]
    pub const fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(v) => Some(v),
            Self::Node(_) => None,
        }
    }
}

impl From<Node> for PatternElement {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Variable> for PatternElement {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}

impl fmt::Display for PatternElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => write!(f, "{node}"),
            Self::Variable(var) => write!(f, "{var}"),
        }
    }
}

/// A query pattern - a triple where any position can be a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub subject: PatternElement,
    pub predicate: PatternElement,
    pub object: PatternElement,
}

impl Pattern {
    #[must_use]
    pub const fn new(
        subject: PatternElement,
        predicate: PatternElement,
        object: PatternElement,
    ) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Create a pattern from anything convertible to pattern elements.
    #[must_use]
    pub fn from_parts(
        subject: impl Into<PatternElement>,
        predicate: impl Into<PatternElement>,
        object: impl Into<PatternElement>,
    ) -> Self {
        Self::new(subject.into(), predicate.into(), object.into())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A filter that can be applied to query results.
pub struct Filter {
    /// The variable to filter on.
    pub selector: Variable,
    /// The filter predicate; receives `None` when the variable is unbound.
    pub predicate: Box<dyn Fn(Option<&Node>) -> bool + Send + Sync>,
}

impl Filter {
    pub fn new<F>(selector: Variable, predicate: F) -> Self
    where
        F: Fn(Option<&Node>) -> bool + Send + Sync + 'static,
    {
        Self {
            selector,
            predicate: Box::new(predicate),
        }
    }

    /// Keep only rows where the variable is bound to a literal.
    #[must_use]
    pub fn is_literal(selector: Variable) -> Self {
        Self::new(selector, |node| node.is_some_and(Node::is_literal))
    }

    #[must_use]
    pub fn apply(&self, node: Option<&Node>) -> bool {
        (self.predicate)(node)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("selector", &self.selector)
            .field("predicate", &"<fn>")
            .finish()
    }
}

/// A complete query.
#[derive(Debug, Default)]
pub struct Query {
    /// Variables to return in results.
    pub find: Vec<Variable>,
    /// Required patterns (conjunction), evaluated in order.
    pub where_patterns: Vec<Pattern>,
    /// Optional patterns (left join), evaluated in order after the required ones.
    pub optional_patterns: Vec<Pattern>,
    /// Variables fixed before evaluation starts.
    pub bound: Vec<(Variable, Node)>,
    /// Filters to apply.
    pub filters: Vec<Filter>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the find clause.
    #[must_use]
    pub fn find(mut self, var: impl Into<String>) -> Self {
        self.find.push(Variable::new(var));
        self
    }

    /// Add a where pattern.
    #[must_use]
    pub fn where_pattern(mut self, pattern: Pattern) -> Self {
        self.where_patterns.push(pattern);
        self
    }

    /// Add an optional pattern.
    #[must_use]
    pub fn optional(mut self, pattern: Pattern) -> Self {
        self.optional_patterns.push(pattern);
        self
    }

    /// Restrict a variable to exactly one node.
    ///
    /// The variable starts out bound, so every pattern mentioning it is
    /// evaluated with that position fixed.
    #[must_use]
    pub fn bind(mut self, var: impl Into<String>, node: Node) -> Self {
        self.bound.push((Variable::new(var), node));
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }
}

/// A row of query results, one slot per `find` variable.
pub type QueryRow = Vec<Option<Node>>;

/// Query results.
#[derive(Debug, Default)]
pub struct QueryResult {
    /// The variable names in order.
    pub columns: Vec<String>,
    /// The result rows.
    pub rows: Vec<QueryRow>,
}

impl QueryResult {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: QueryRow) {
        self.rows.push(row);
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows with access by column name.
    pub fn solutions(&self) -> impl Iterator<Item = Solution<'_>> {
        self.rows.iter().map(|row| Solution {
            columns: &self.columns,
            values: row,
        })
    }
}

/// One result row, addressable by variable name.
#[derive(Debug, Clone, Copy)]
pub struct Solution<'a> {
    columns: &'a [String],
    values: &'a [Option<Node>],
}

impl<'a> Solution<'a> {
    /// The node bound to `name`, or `None` if unbound or not projected.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Node> {
        self.columns
            .iter()
            .position(|column| column == name)
            .and_then(|index| self.values.get(index))
            .and_then(Option::as_ref)
    }

    /// The lexical value bound to `name`, if it is a literal.
    #[must_use]
    pub fn literal(&self, name: &str) -> Option<&'a str> {
        self.get(name).and_then(Node::literal_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = Query::new()
            .find("engine")
            .find("power")
            .where_pattern(Pattern::new(
                PatternElement::var("engine"),
                PatternElement::iri("urn:type"),
                PatternElement::iri("urn:Engine"),
            ))
            .optional(Pattern::new(
                PatternElement::var("engine"),
                PatternElement::iri("urn:power"),
                PatternElement::var("power"),
            ))
            .bind("engine", Node::iri("urn:C220d"));

        assert_eq!(query.find.len(), 2);
        assert_eq!(query.where_patterns.len(), 1);
        assert_eq!(query.optional_patterns.len(), 1);
        assert_eq!(query.bound[0].0, Variable::new("engine"));
    }

    #[test]
    fn test_pattern_display() {
        let pattern = Pattern::from_parts(
            Variable::new("x"),
            Node::iri("urn:p"),
            Node::literal("v"),
        );
        assert_eq!(pattern.to_string(), "?x <urn:p> \"v\" .");
    }

    #[test]
    fn test_solution_lookup() {
        let mut result = QueryResult::with_columns(vec!["a".to_owned(), "b".to_owned()]);
        result.push(vec![Some(Node::literal("x")), None]);

        let solution = result.solutions().next().expect("one row");
        assert_eq!(solution.literal("a"), Some("x"));
        assert!(solution.get("b").is_none());
        assert!(solution.get("missing").is_none());
    }

    #[test]
    fn test_literal_filter() {
        let filter = Filter::is_literal(Variable::new("v"));
        assert!(filter.apply(Some(&Node::literal("x"))));
        assert!(!filter.apply(Some(&Node::iri("urn:x"))));
        assert!(!filter.apply(None));
    }
}
