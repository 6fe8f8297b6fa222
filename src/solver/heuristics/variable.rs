//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{
    assignment::Assignment,
    domain::DomainStore,
    problem::Problem,
    value::{ValueEquality, VariableKey},
};

/// A trait for variable-selection heuristics.
///
/// Implementors define which unassigned variable the solver branches on next.
/// The driver only calls this when at least one variable is unassigned, so a
/// correct implementation never returns `None` for an incomplete assignment.
pub trait VariableSelectionHeuristic<V: VariableKey, X: ValueEquality> {
    fn select_variable(
        &self,
        problem: &Problem<V, X>,
        assignment: &Assignment<V, X>,
        domains: &DomainStore<V, X>,
    ) -> Option<V>;
}

/// Selects the first unassigned variable in declaration order.
///
/// A basic, deterministic baseline, mostly useful in tests.
pub struct SelectFirstHeuristic;

impl<V: VariableKey, X: ValueEquality> VariableSelectionHeuristic<V, X> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<V, X>,
        assignment: &Assignment<V, X>,
        _domains: &DomainStore<V, X>,
    ) -> Option<V> {
        problem
            .variables()
            .iter()
            .find(|v| !assignment.contains(v))
            .cloned()
    }
}

/// Minimum Remaining Values with a degree tie-break.
///
/// A "fail-first" strategy: branch on the unassigned variable with the fewest
/// values left so dead ends are discovered early. Equal domain sizes are
/// broken in favour of the higher degree — the variable constraining more
/// still-unassigned neighbors. Remaining ties keep the earlier variable in
/// declaration order, and the scan stops as soon as the best candidate has a
/// single value left, since nothing can beat it.
pub struct MinimumRemainingValuesHeuristic;

impl<V: VariableKey, X: ValueEquality> VariableSelectionHeuristic<V, X>
    for MinimumRemainingValuesHeuristic
{
    fn select_variable(
        &self,
        problem: &Problem<V, X>,
        assignment: &Assignment<V, X>,
        domains: &DomainStore<V, X>,
    ) -> Option<V> {
        // (candidate, domain size, degree); degree is only computed when a
        // variable becomes the best or ties with it.
        let mut best: Option<(V, usize, usize)> = None;

        for variable in problem.variables() {
            if assignment.contains(variable) {
                continue;
            }
            let size = domains.len_of(variable);
            match &best {
                Some((_, best_size, _)) if size > *best_size => {}
                Some((_, best_size, best_degree)) if size == *best_size => {
                    let degree = unassigned_degree(problem, assignment, variable);
                    if degree > *best_degree {
                        best = Some((variable.clone(), size, degree));
                    }
                }
                _ => {
                    let degree = unassigned_degree(problem, assignment, variable);
                    best = Some((variable.clone(), size, degree));
                    if size <= 1 {
                        break;
                    }
                }
            }
        }

        best.map(|(variable, _, _)| variable)
    }
}

fn unassigned_degree<V: VariableKey, X: ValueEquality>(
    problem: &Problem<V, X>,
    assignment: &Assignment<V, X>,
    variable: &V,
) -> usize {
    problem
        .neighbors(variable)
        .iter()
        .filter(|n| !assignment.contains(n))
        .count()
}
