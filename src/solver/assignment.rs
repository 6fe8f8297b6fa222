use crate::solver::value::{ValueEquality, VariableKey};

/// A partial or complete mapping from variables to chosen values.
///
/// Assignments are append-only along a search branch and backed by a
/// persistent map: [`Assignment::assign`] produces an extended copy, so a
/// failed branch leaves the parent assignment exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<V: VariableKey, X: ValueEquality>(im::HashMap<V, X>);

impl<V: VariableKey, X: ValueEquality> Assignment<V, X> {
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    pub fn get(&self, variable: &V) -> Option<&X> {
        self.0.get(variable)
    }

    pub fn contains(&self, variable: &V) -> bool {
        self.0.contains_key(variable)
    }

    /// Returns a new assignment extended with `variable = value`.
    pub fn assign(&self, variable: V, value: X) -> Self {
        Self(self.0.update(variable, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A complete assignment binds every problem variable.
    pub fn is_complete(&self, variables: &[V]) -> bool {
        variables.iter().all(|v| self.0.contains_key(v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &X)> {
        self.0.iter()
    }
}

impl<V: VariableKey, X: ValueEquality> Default for Assignment<V, X> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn assign_extends_a_copy() {
        let empty: Assignment<&str, i32> = Assignment::new();
        let one = empty.assign("x", 1);
        let two = one.assign("y", 2);

        assert!(empty.is_empty());
        assert_eq!(one.get(&"x"), Some(&1));
        assert_eq!(one.get(&"y"), None);
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn completeness_checks_every_variable() {
        let assignment = Assignment::new().assign("x", 1);

        assert!(assignment.is_complete(&["x"]));
        assert!(!assignment.is_complete(&["x", "y"]));
        assert!(Assignment::<&str, i32>::new().is_complete(&[]));
    }
}
