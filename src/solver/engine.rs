use tracing::debug;

use crate::{
    error::{Result, SolveError},
    solver::{
        assignment::Assignment,
        domain::{Domain, DomainStore},
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
        },
        problem::Problem,
        propagate::arc_consistency,
        stats::SearchStats,
        value::{ValueEquality, VariableKey},
    },
};

/// The backtracking driver.
///
/// Orchestrates variable selection, value ordering, propagation, and
/// recursive assignment with undo-by-discard: every branch works on its own
/// persistent domain store, so abandoning a branch is simply dropping it.
///
/// The solve is synchronous and single-threaded, recursion depth is bounded
/// by the variable count, and no state outlives the call, so independent
/// solves on separate problems can run concurrently when the constraint
/// predicate is pure.
pub struct Solver<V: VariableKey, X: ValueEquality> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V, X>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V, X>>,
}

impl<V: VariableKey, X: ValueEquality> Solver<V, X> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V, X>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<V, X>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Finds the first complete consistent assignment, if one exists.
    ///
    /// Validates the problem, builds the working domain store, runs one
    /// global propagation pass, then searches. First-solution semantics: the
    /// depth-first, left-to-right search stops at the first accept.
    pub fn solve(&self, problem: &Problem<V, X>) -> Result<Assignment<V, X>> {
        self.solve_with_stats(problem).0
    }

    /// Like [`Solver::solve`], but also reports search statistics, whether or
    /// not a solution was found.
    pub fn solve_with_stats(
        &self,
        problem: &Problem<V, X>,
    ) -> (Result<Assignment<V, X>>, SearchStats) {
        let mut stats = SearchStats::default();

        let store = match problem.validate() {
            Ok(store) => store,
            Err(err) => return (Err(err), stats),
        };
        debug!(variables = problem.variables().len(), "starting solve");

        let Some(store) = arc_consistency(problem, store, &mut stats) else {
            return (Err(SolveError::Unsatisfiable), stats);
        };

        match self.search(problem, Assignment::new(), store, &mut stats) {
            Some(solution) => {
                debug!(nodes = stats.nodes_visited, "solution found");
                (Ok(solution), stats)
            }
            None => {
                debug!(nodes = stats.nodes_visited, "search space exhausted");
                (Err(SolveError::Unsatisfiable), stats)
            }
        }
    }

    fn search(
        &self,
        problem: &Problem<V, X>,
        assignment: Assignment<V, X>,
        store: DomainStore<V, X>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<V, X>> {
        stats.nodes_visited += 1;

        if assignment.is_complete(problem.variables()) {
            return Some(assignment);
        }

        // Never None here: an incomplete assignment leaves something to pick.
        let variable = self
            .variable_heuristic
            .select_variable(problem, &assignment, &store)?;

        for value in self
            .value_heuristic
            .order_values(&variable, problem, &assignment, &store)
        {
            // Cheap pre-check against already-assigned neighbors before
            // paying for a propagation pass.
            let conflicts = problem.neighbors(&variable).iter().any(|neighbor| {
                assignment
                    .get(neighbor)
                    .is_some_and(|bound| !problem.check(&variable, &value, neighbor, bound))
            });
            if conflicts {
                continue;
            }

            let extended = assignment.assign(variable.clone(), value.clone());
            let branch = store.with(variable.clone(), Domain::singleton(value));

            let Some(propagated) = arc_consistency(problem, branch, stats) else {
                stats.backtracks += 1;
                continue;
            };

            problem.notify(&extended, &propagated);

            if let Some(found) = self.search(problem, extended, propagated, stats) {
                return Some(found);
            }
            stats.backtracks += 1;
        }

        None
    }
}

/// MRV with degree tie-break for variables, LCV for values.
impl<V: VariableKey, X: ValueEquality> Default for Solver<V, X> {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn not_equal<V>(_: &V, x: &i32, _: &V, y: &i32) -> bool {
        x != y
    }

    #[test]
    fn unconstrained_problem_takes_first_domain_values() {
        let problem = Problem::builder()
            .variable("a", [10, 20])
            .variable("b", [30, 40])
            .edge("a", "b")
            .constraint(|_: &&str, _: &i32, _: &&str, _: &i32| true)
            .build();

        let solution = Solver::default().solve(&problem).unwrap();
        assert_eq!(solution.get(&"a"), Some(&10));
        assert_eq!(solution.get(&"b"), Some(&30));
    }

    #[test]
    fn forced_conflict_is_unsatisfiable() {
        let problem = Problem::builder()
            .variable("x", [1])
            .variable("y", [1])
            .edge("x", "y")
            .constraint(not_equal)
            .build();

        assert_eq!(
            Solver::default().solve(&problem),
            Err(SolveError::Unsatisfiable)
        );
    }

    #[test]
    fn always_false_constraint_is_unsatisfiable() {
        let problem = Problem::builder()
            .variable("x", [1, 2, 3])
            .variable("y", [1, 2, 3])
            .edge("x", "y")
            .constraint(|_: &&str, _: &i32, _: &&str, _: &i32| false)
            .build();

        assert_eq!(
            Solver::default().solve(&problem),
            Err(SolveError::Unsatisfiable)
        );
    }

    #[test]
    fn zero_variables_solve_to_the_empty_assignment() {
        let problem: Problem<&str, i32> = Problem::builder()
            .constraint(|_: &&str, _: &i32, _: &&str, _: &i32| true)
            .build();

        let solution = Solver::default().solve(&problem).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn solving_twice_is_idempotent() {
        let solver = Solver::default();
        let problem = australia();

        let first = solver.solve(&problem);
        let second = solver.solve(&problem);
        assert_eq!(first, second);
    }

    fn australia() -> Problem<&'static str, &'static str> {
        let regions = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
        let adjacent = [
            ("WA", "NT"),
            ("WA", "SA"),
            ("NT", "SA"),
            ("NT", "Q"),
            ("SA", "Q"),
            ("SA", "NSW"),
            ("SA", "V"),
            ("Q", "NSW"),
            ("NSW", "V"),
        ];

        let mut builder = Problem::builder()
            .constraint(|_: &&str, x: &&str, _: &&str, y: &&str| x != y);
        for region in regions {
            builder = builder.variable(region, ["red", "green", "blue"]);
        }
        for (a, b) in adjacent {
            builder = builder.edge(a, b);
        }
        builder.build()
    }

    #[test]
    fn australia_gets_a_proper_colouring() {
        let problem = australia();
        let solution = Solver::default().solve(&problem).unwrap();

        assert!(solution.is_complete(problem.variables()));
        for region in problem.variables() {
            for neighbor in problem.neighbors(region) {
                assert_ne!(solution.get(region), solution.get(neighbor));
            }
        }
    }

    fn four_queens() -> Problem<u32, i64> {
        let mut builder = Problem::builder().constraint(|a: &u32, x: &i64, b: &u32, y: &i64| {
            x != y && (x - y).abs() != (i64::from(*a) - i64::from(*b)).abs()
        });
        for row in 0u32..4 {
            builder = builder.variable(row, 0..4);
        }
        for a in 0u32..4 {
            for b in 0u32..4 {
                if a != b {
                    builder = builder.arc(a, b);
                }
            }
        }
        builder.build()
    }

    #[test]
    fn four_queens_finds_a_known_solution() {
        let solution = Solver::default().solve(&four_queens()).unwrap();
        let columns: Vec<i64> = (0u32..4).map(|row| *solution.get(&row).unwrap()).collect();

        // The 4-queens board has exactly two solutions.
        assert!(columns == vec![1, 3, 0, 2] || columns == vec![2, 0, 3, 1]);
    }

    #[test]
    fn callback_sees_each_consistent_extension_in_depth_first_order() {
        let depths: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let observed = depths.clone();

        let problem = Problem::builder()
            .variable("a", [1, 2])
            .variable("b", [2])
            .edge("a", "b")
            .constraint(not_equal)
            .callback(move |progress| {
                observed.borrow_mut().push(progress.assignment.len());
            })
            .build();

        let solution = Solver::default().solve(&problem).unwrap();
        assert_eq!(solution.get(&"a"), Some(&1));
        assert_eq!(*depths.borrow(), vec![1, 2]);
    }

    #[test]
    fn panicking_callback_does_not_corrupt_the_search() {
        let problem = Problem::builder()
            .variable("a", [1, 2])
            .variable("b", [2])
            .edge("a", "b")
            .constraint(not_equal)
            .callback(|_| panic!("observer bug"))
            .build();

        let solution = Solver::default().solve(&problem).unwrap();
        assert_eq!(solution.get(&"a"), Some(&1));
        assert_eq!(solution.get(&"b"), Some(&2));
    }

    proptest! {
        /// Soundness: whatever colouring comes back satisfies every arc.
        #[test]
        fn returned_assignments_satisfy_every_arc(
            n in 2usize..6,
            raw_edges in proptest::collection::vec((0usize..6, 0usize..6), 0..12),
            palette in 1i32..4,
        ) {
            let mut builder = Problem::builder().constraint(not_equal);
            for v in 0..n as u32 {
                builder = builder.variable(v, 0..palette);
            }
            let mut seen = std::collections::HashSet::new();
            for (a, b) in raw_edges {
                let (a, b) = (a % n, b % n);
                if a != b && seen.insert((a.min(b), a.max(b))) {
                    builder = builder.edge(a as u32, b as u32);
                }
            }
            let problem = builder.build();

            if let Ok(solution) = Solver::default().solve(&problem) {
                prop_assert!(solution.is_complete(problem.variables()));
                for variable in problem.variables() {
                    for neighbor in problem.neighbors(variable) {
                        prop_assert_ne!(solution.get(variable), solution.get(neighbor));
                    }
                }
            }
        }
    }
}
