//! Vincula is a generic solver for binary constraint satisfaction problems (CSPs).
//!
//! The engine combines backtracking search with AC-3 constraint propagation and
//! the classic MRV (minimum remaining values) and LCV (least constraining value)
//! ordering heuristics. It is problem-agnostic: callers describe their problem
//! with a [`Problem`] boundary object and get back either a complete assignment
//! or a [`SolveError`] explaining why none exists.
//!
//! # Core Concepts
//!
//! - **[`Problem`]**: the boundary object holding your variables, their ordered
//!   value domains, the neighbor graph of directed arcs, and a single binary
//!   constraint predicate. Built with [`Problem::builder`].
//! - **[`BinaryConstraint`]**: the rule every adjacent pair of assigned
//!   variables must satisfy. Any matching closure implements it. The predicate
//!   must be pure and symmetric; the engine does not verify this.
//! - **[`Solver`]**: the backtracking driver. [`Solver::default`] wires up the
//!   MRV and LCV heuristics; [`Solver::new`] accepts custom ones.
//!
//! Constraints between more than two variables must be binarized by the caller,
//! and both directions of every undirected constraint must be listed in the
//! neighbor graph ([`ProblemBuilder::edge`] does this for you). A missing
//! direction weakens propagation silently.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `a != b` where `a` can be `1` or `2` and `b` can only be `1`. The
//! solver must deduce that `a` is `2`.
//!
//! ```
//! use vincula::solver::engine::Solver;
//! use vincula::solver::problem::Problem;
//!
//! let problem = Problem::builder()
//!     .variable("a", [1, 2])
//!     .variable("b", [1])
//!     .edge("a", "b")
//!     .constraint(|_: &&str, x: &i32, _: &&str, y: &i32| x != y)
//!     .build();
//!
//! let solution = Solver::default().solve(&problem).unwrap();
//! assert_eq!(solution.get(&"a"), Some(&2));
//! assert_eq!(solution.get(&"b"), Some(&1));
//! ```
//!
//! [`Problem`]: crate::solver::problem::Problem
//! [`Problem::builder`]: crate::solver::problem::Problem::builder
//! [`ProblemBuilder::edge`]: crate::solver::problem::ProblemBuilder::edge
//! [`BinaryConstraint`]: crate::solver::problem::BinaryConstraint
//! [`Solver`]: crate::solver::engine::Solver
//! [`Solver::default`]: crate::solver::engine::Solver::default
//! [`Solver::new`]: crate::solver::engine::Solver::new
//! [`SolveError`]: crate::error::SolveError

pub mod error;
pub mod solver;
