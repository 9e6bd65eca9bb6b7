//! Variable bindings during query evaluation.
//!
//! A `Binding` holds the current assignment of query variables to stored
//! nodes. It is copied for every branch the evaluation explores.

use std::collections::HashMap;

use super::types::Variable;
use crate::store::dictionary::NodeId;

/// A partial or complete assignment of variables to nodes.
///
/// Values are dictionary ids of the snapshot being queried; the engine
/// resolves them to nodes when it builds result rows.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    bindings: HashMap<String, NodeId>,
}

impl Binding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable, replacing any previous value.
    pub fn set(&mut self, variable: &Variable, value: NodeId) {
        self.bindings.insert(variable.name.clone(), value);
    }

    /// Get the value bound to a variable.
    #[must_use]
    pub fn get(&self, variable: &Variable) -> Option<NodeId> {
        self.bindings.get(&variable.name).copied()
    }

    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<NodeId> {
        self.bindings.get(name).copied()
    }

    #[must_use]
    pub fn has(&self, variable: &Variable) -> bool {
        self.bindings.contains_key(&variable.name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bind `variable` to `value`, or check it against the existing binding.
    ///
    /// Returns `false` if the variable is already bound to a different node;
    /// this is how shared variables act as join keys.
    pub fn unify(&mut self, variable: &Variable, value: NodeId) -> bool {
        match self.get(variable) {
            Some(bound) => bound == value,
            None => {
                self.set(variable, value);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::dictionary::Dictionary;
    use crate::types::Node;

    #[test]
    fn test_binding_basic() {
        let mut dictionary = Dictionary::new();
        let id = dictionary.intern(Node::literal("hello"));

        let mut binding = Binding::new();
        let var_x = Variable::new("x");
        let var_y = Variable::new("y");

        assert!(binding.is_empty());
        binding.set(&var_x, id);
        assert!(binding.has(&var_x));
        assert!(!binding.has(&var_y));
        assert_eq!(binding.len(), 1);
        assert_eq!(binding.get_by_name("x"), Some(id));
    }

    #[test]
    fn test_unify() {
        let mut dictionary = Dictionary::new();
        let a = dictionary.intern(Node::iri("urn:a"));
        let b = dictionary.intern(Node::iri("urn:b"));
        let var = Variable::new("x");

        let mut binding = Binding::new();
        assert!(binding.unify(&var, a));
        assert!(binding.unify(&var, a));
        assert!(!binding.unify(&var, b));
        assert_eq!(binding.get(&var), Some(a));
    }

    #[test]
    fn test_clone_branches_independently() {
        let mut dictionary = Dictionary::new();
        let a = dictionary.intern(Node::iri("urn:a"));
        let var = Variable::new("x");

        let base = Binding::new();
        let mut branch = base.clone();
        branch.set(&var, a);

        assert!(base.is_empty());
        assert!(branch.has(&var));
    }
}
