//! Heuristics for ordering the candidate values of the variable being
//! branched on.

use crate::solver::{
    assignment::Assignment,
    domain::DomainStore,
    problem::Problem,
    value::{ValueEquality, VariableKey},
};

/// A trait for value-ordering heuristics.
///
/// Given the variable chosen for branching, implementors return its current
/// candidate values in the order the driver should try them.
pub trait ValueOrderingHeuristic<V: VariableKey, X: ValueEquality> {
    fn order_values(
        &self,
        variable: &V,
        problem: &Problem<V, X>,
        assignment: &Assignment<V, X>,
        domains: &DomainStore<V, X>,
    ) -> Vec<X>;
}

/// Returns values in their domain order, unchanged.
pub struct IdentityValueHeuristic;

impl<V: VariableKey, X: ValueEquality> ValueOrderingHeuristic<V, X> for IdentityValueHeuristic {
    fn order_values(
        &self,
        variable: &V,
        _problem: &Problem<V, X>,
        _assignment: &Assignment<V, X>,
        domains: &DomainStore<V, X>,
    ) -> Vec<X> {
        domains.values(variable).cloned().collect()
    }
}

/// Least Constraining Value.
///
/// Scores each candidate by how many options it rules out across the
/// variable's neighbors: one per assigned neighbor it conflicts with, plus
/// every domain value of each unassigned neighbor it is inconsistent with.
/// Values are then tried in ascending score order; the sort is stable, so
/// ties keep the caller's domain order and the search stays deterministic.
pub struct LeastConstrainingValueHeuristic;

impl<V: VariableKey, X: ValueEquality> ValueOrderingHeuristic<V, X>
    for LeastConstrainingValueHeuristic
{
    fn order_values(
        &self,
        variable: &V,
        problem: &Problem<V, X>,
        assignment: &Assignment<V, X>,
        domains: &DomainStore<V, X>,
    ) -> Vec<X> {
        let candidates: Vec<X> = domains.values(variable).cloned().collect();
        if candidates.len() <= 1 {
            return candidates;
        }

        let mut scored: Vec<(usize, X)> = candidates
            .into_iter()
            .map(|value| {
                let ruled_out = ruled_out_count(variable, &value, problem, assignment, domains);
                (ruled_out, value)
            })
            .collect();
        scored.sort_by_key(|(ruled_out, _)| *ruled_out);
        scored.into_iter().map(|(_, value)| value).collect()
    }
}

fn ruled_out_count<V: VariableKey, X: ValueEquality>(
    variable: &V,
    value: &X,
    problem: &Problem<V, X>,
    assignment: &Assignment<V, X>,
    domains: &DomainStore<V, X>,
) -> usize {
    let mut ruled_out = 0;
    for neighbor in problem.neighbors(variable) {
        match assignment.get(neighbor) {
            Some(assigned) => {
                if !problem.check(variable, value, neighbor, assigned) {
                    ruled_out += 1;
                }
            }
            None => {
                ruled_out += domains
                    .values(neighbor)
                    .filter(|y| !problem.check(variable, value, neighbor, y))
                    .count();
            }
        }
    }
    ruled_out
}
