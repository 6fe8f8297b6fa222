use im::Vector;

use crate::solver::value::{ValueEquality, VariableKey};

/// The ordered set of values a variable may still take.
///
/// Order is significant: it is the caller's original domain order, and it is
/// the tie-break order for the value-ordering heuristics. A domain only ever
/// shrinks — the producing operations are construction, [`Domain::retain`],
/// and collapsing to a [`Domain::singleton`] when a variable is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain<X: ValueEquality>(Vector<X>);

impl<X: ValueEquality> Domain<X> {
    pub fn from_values(values: impl IntoIterator<Item = X>) -> Self {
        Self(values.into_iter().collect())
    }

    pub fn singleton(value: X) -> Self {
        Self(Vector::unit(value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    pub fn first(&self) -> Option<&X> {
        self.0.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &X> {
        self.0.iter()
    }

    /// Returns a new domain keeping only the values that satisfy `keep`,
    /// preserving their relative order. The receiver is untouched.
    pub fn retain(&self, keep: impl Fn(&X) -> bool) -> Self {
        Self(self.0.iter().filter(|v| keep(v)).cloned().collect())
    }
}

/// The working per-variable domains for one branch of the search.
///
/// Backed by a persistent map, so the clone-per-branch the search relies on is
/// cheap structural sharing: pruning on one branch can never leak into a
/// sibling branch or into the caller's [`Problem`].
///
/// [`Problem`]: crate::solver::problem::Problem
#[derive(Debug, Clone, PartialEq)]
pub struct DomainStore<V: VariableKey, X: ValueEquality>(im::HashMap<V, Domain<X>>);

impl<V: VariableKey, X: ValueEquality> DomainStore<V, X> {
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    /// Returns a new store with `variable` bound to `domain`.
    pub fn with(&self, variable: V, domain: Domain<X>) -> Self {
        Self(self.0.update(variable, domain))
    }

    pub fn get(&self, variable: &V) -> Option<&Domain<X>> {
        self.0.get(variable)
    }

    /// The current domain size of `variable`, or 0 if it has no entry.
    pub fn len_of(&self, variable: &V) -> usize {
        self.0.get(variable).map_or(0, Domain::len)
    }

    /// Iterates the current values of `variable`; empty if it has no entry.
    pub fn values<'a>(&'a self, variable: &V) -> impl Iterator<Item = &'a X> {
        self.0.get(variable).into_iter().flat_map(Domain::iter)
    }
}

impl<V: VariableKey, X: ValueEquality> Default for DomainStore<V, X> {
    fn default() -> Self {
        Self::new()
    }
}
