use std::collections::{HashMap, HashSet};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use crate::{
    error::{Result, SolveError},
    solver::{
        assignment::Assignment,
        domain::{Domain, DomainStore},
        value::{ValueEquality, VariableKey},
    },
};

/// The rule a pair of adjacent variables must satisfy.
///
/// Implementations must be pure and symmetric: `satisfied(a, x, b, y)` must
/// equal `satisfied(b, y, a, x)` and must not depend on anything but its
/// arguments. The engine does not verify either property; violating them
/// silently corrupts results. Any matching closure implements this trait.
pub trait BinaryConstraint<V, X> {
    fn satisfied(&self, a: &V, a_value: &X, b: &V, b_value: &X) -> bool;
}

impl<V, X, F> BinaryConstraint<V, X> for F
where
    F: Fn(&V, &X, &V, &X) -> bool,
{
    fn satisfied(&self, a: &V, a_value: &X, b: &V, b_value: &X) -> bool {
        self(a, a_value, b, b_value)
    }
}

/// A snapshot handed to the progress callback after every consistent
/// extension and its propagation pass, in depth-first left-to-right order.
///
/// The views are backed by persistent structures the engine never mutates in
/// place, so nothing the engine does afterwards can change what the callback
/// observed. `time_step` is the problem's pacing hint, forwarded untouched.
pub struct Progress<'a, V: VariableKey, X: ValueEquality> {
    pub assignment: &'a Assignment<V, X>,
    pub domains: &'a DomainStore<V, X>,
    pub time_step: Option<Duration>,
}

/// A complete description of one binary CSP.
///
/// Immutable to the engine: solving builds a working [`DomainStore`] from the
/// declared domains once at entry and never touches the problem afterwards,
/// so the same problem can be solved repeatedly (or concurrently, if the
/// constraint is pure) with identical results.
pub struct Problem<V: VariableKey, X: ValueEquality> {
    variables: Vec<V>,
    domains: HashMap<V, Vec<X>>,
    neighbors: HashMap<V, Vec<V>>,
    constraint: Option<Box<dyn BinaryConstraint<V, X>>>,
    callback: Option<Box<dyn Fn(Progress<'_, V, X>)>>,
    time_step: Option<Duration>,
}

impl<V: VariableKey, X: ValueEquality> Problem<V, X> {
    pub fn builder() -> ProblemBuilder<V, X> {
        ProblemBuilder {
            variables: Vec::new(),
            domains: HashMap::new(),
            neighbors: HashMap::new(),
            constraint: None,
            callback: None,
            time_step: None,
        }
    }

    /// The problem's variables in declaration order.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// The outgoing arcs of `variable`; empty if none were declared.
    pub fn neighbors(&self, variable: &V) -> &[V] {
        self.neighbors.get(variable).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Evaluates the constraint predicate for one pair of tentative bindings.
    ///
    /// A problem without a predicate fails validation before any check is
    /// made, so the permissive fallback here is unreachable during a solve.
    pub fn check(&self, a: &V, a_value: &X, b: &V, b_value: &X) -> bool {
        self.constraint
            .as_ref()
            .map_or(true, |c| c.satisfied(a, a_value, b, b_value))
    }

    pub fn time_step(&self) -> Option<Duration> {
        self.time_step
    }

    /// Notifies the progress callback, if any.
    ///
    /// The callback is best-effort instrumentation for visualization and
    /// telemetry: a panic inside it is caught and discarded so a buggy
    /// observer can never corrupt the search, and its return value (it has
    /// none) is never consulted.
    pub(crate) fn notify(&self, assignment: &Assignment<V, X>, domains: &DomainStore<V, X>) {
        if let Some(callback) = &self.callback {
            let progress = Progress {
                assignment,
                domains,
                time_step: self.time_step,
            };
            let _ = catch_unwind(AssertUnwindSafe(|| callback(progress)));
        }
    }

    /// Validates the problem shape and builds the working domain store.
    ///
    /// Structural violations surface as [`SolveError::InvalidProblem`]; an
    /// initially empty domain means no assignment can ever exist, which is
    /// [`SolveError::Unsatisfiable`] with no search.
    pub(crate) fn validate(&self) -> Result<DomainStore<V, X>> {
        if self.constraint.is_none() {
            return Err(SolveError::InvalidProblem(
                "no constraint predicate was supplied".into(),
            ));
        }

        let mut known: HashSet<&V> = HashSet::with_capacity(self.variables.len());
        for variable in &self.variables {
            if !known.insert(variable) {
                return Err(SolveError::InvalidProblem(format!(
                    "variable {variable:?} is declared more than once"
                )));
            }
        }
        for variable in self.domains.keys() {
            if !known.contains(variable) {
                return Err(SolveError::InvalidProblem(format!(
                    "domain declared for unknown variable {variable:?}"
                )));
            }
        }
        for (variable, arcs) in &self.neighbors {
            if !known.contains(variable) {
                return Err(SolveError::InvalidProblem(format!(
                    "neighbors declared for unknown variable {variable:?}"
                )));
            }
            for neighbor in arcs {
                if !known.contains(neighbor) {
                    return Err(SolveError::InvalidProblem(format!(
                        "arc from {variable:?} targets unknown variable {neighbor:?}"
                    )));
                }
            }
        }

        let mut store = DomainStore::new();
        for variable in &self.variables {
            let Some(values) = self.domains.get(variable) else {
                return Err(SolveError::InvalidProblem(format!(
                    "variable {variable:?} has no domain"
                )));
            };
            if values.is_empty() {
                return Err(SolveError::Unsatisfiable);
            }
            store = store.with(variable.clone(), Domain::from_values(values.iter().cloned()));
        }
        Ok(store)
    }
}

impl<V: VariableKey, X: ValueEquality> fmt::Debug for Problem<V, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("variables", &self.variables)
            .field("domains", &self.domains)
            .field("neighbors", &self.neighbors)
            .field("time_step", &self.time_step)
            .finish_non_exhaustive()
    }
}

/// Incrementally assembles a [`Problem`].
///
/// Construction never fails; shape errors are reported when the problem is
/// solved, so building stays infallible and chainable.
pub struct ProblemBuilder<V: VariableKey, X: ValueEquality> {
    variables: Vec<V>,
    domains: HashMap<V, Vec<X>>,
    neighbors: HashMap<V, Vec<V>>,
    constraint: Option<Box<dyn BinaryConstraint<V, X>>>,
    callback: Option<Box<dyn Fn(Progress<'_, V, X>)>>,
    time_step: Option<Duration>,
}

impl<V: VariableKey, X: ValueEquality> ProblemBuilder<V, X> {
    /// Declares a variable together with its ordered domain.
    ///
    /// Domain order matters: it is the tie-break order the value-ordering
    /// heuristic falls back to.
    pub fn variable(mut self, variable: V, domain: impl IntoIterator<Item = X>) -> Self {
        self.domains
            .insert(variable.clone(), domain.into_iter().collect());
        self.variables.push(variable);
        self
    }

    /// Adds one directed arc `from -> to`.
    ///
    /// Propagation only travels along declared arcs. For an undirected
    /// constraint both directions must be present (see [`Self::edge`]); a
    /// missing direction silently weakens propagation, it is not an error.
    pub fn arc(mut self, from: V, to: V) -> Self {
        self.neighbors.entry(from).or_default().push(to);
        self
    }

    /// Adds both directions of an undirected constraint edge.
    pub fn edge(self, a: V, b: V) -> Self {
        self.arc(a.clone(), b.clone()).arc(b, a)
    }

    /// Sets the constraint predicate shared by every arc.
    pub fn constraint(mut self, predicate: impl BinaryConstraint<V, X> + 'static) -> Self {
        self.constraint = Some(Box::new(predicate));
        self
    }

    /// Installs a progress callback observing every consistent extension.
    pub fn callback(mut self, callback: impl Fn(Progress<'_, V, X>) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Attaches a pacing hint forwarded to the callback, ignored by the engine.
    pub fn time_step(mut self, time_step: Duration) -> Self {
        self.time_step = Some(time_step);
        self
    }

    pub fn build(self) -> Problem<V, X> {
        Problem {
            variables: self.variables,
            domains: self.domains,
            neighbors: self.neighbors,
            constraint: self.constraint,
            callback: self.callback,
            time_step: self.time_step,
        }
    }
}
