pub type Result<T, E = SolveError> = core::result::Result<T, E>;

/// The ways a solve can fail.
///
/// Ordinary search failure is a core-path outcome for a CSP solver, so it is
/// reported through this enum rather than by panicking: an unsatisfiable
/// problem and a structurally broken one are both expected results, but
/// callers usually want to treat them differently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The problem definition is structurally broken: a variable is listed
    /// twice, has no domain, a `domains` or `neighbors` entry names an unknown
    /// variable, or no constraint predicate was supplied. Detected before any
    /// search runs.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// Every branch of the search space was exhausted without finding a
    /// complete consistent assignment. Also reported when a variable starts
    /// with an empty domain, since no search could ever succeed.
    #[error("no assignment satisfies every constraint")]
    Unsatisfiable,
}
