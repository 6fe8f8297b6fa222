use std::collections::VecDeque;

use tracing::debug;

use crate::solver::{
    domain::DomainStore,
    problem::Problem,
    stats::SearchStats,
    value::{ValueEquality, VariableKey},
};

/// Enforces arc consistency with the AC-3 algorithm.
///
/// Maintains a FIFO worklist of directed arcs `(xi, xj)` seeded with every arc
/// in the neighbor graph. Revising an arc keeps a value of `xi` only if some
/// value of `xj` supports it; when `xi`'s domain shrinks, every arc `(xk, xi)`
/// with `xk != xj` is re-enqueued so the loss of support propagates. The
/// worklist is not deduplicated: re-revising an already-pending arc is cheap,
/// and processing arcs strictly in FIFO order keeps the downstream heuristic
/// tie-breaking (and therefore which solution is found first) stable.
///
/// Returns the pruned store at the fixpoint, or `None` if some domain was
/// wiped out. `None` only condemns the current branch, never the whole solve.
///
/// On success every surviving value has at least one support in each neighbor
/// — necessary for a global solution, not sufficient. Worst case
/// O(arcs × d³) for maximum domain size d.
pub fn arc_consistency<V: VariableKey, X: ValueEquality>(
    problem: &Problem<V, X>,
    mut store: DomainStore<V, X>,
    stats: &mut SearchStats,
) -> Option<DomainStore<V, X>> {
    let mut worklist: VecDeque<(V, V)> = VecDeque::new();
    for variable in problem.variables() {
        for neighbor in problem.neighbors(variable) {
            worklist.push_back((variable.clone(), neighbor.clone()));
        }
    }

    while let Some((xi, xj)) = worklist.pop_front() {
        stats.arcs_processed += 1;
        stats.revise_calls += 1;

        let Some(target) = store.get(&xi) else {
            continue;
        };
        let before = target.len();
        let revised = target.retain(|x| {
            store
                .values(&xj)
                .any(|y| problem.check(&xi, x, &xj, y))
        });
        if revised.len() == before {
            continue;
        }

        stats.values_pruned += (before - revised.len()) as u64;
        if revised.is_empty() {
            debug!(variable = ?xi, "domain wiped out during propagation");
            return None;
        }

        store = store.with(xi.clone(), revised);
        for xk in problem.neighbors(&xi) {
            if *xk != xj {
                worklist.push_back((xk.clone(), xi.clone()));
            }
        }
    }

    debug!(
        arcs = stats.arcs_processed,
        pruned = stats.values_pruned,
        "propagation reached a fixpoint"
    );
    Some(store)
}
