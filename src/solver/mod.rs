pub mod assignment;
pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod problem;
pub mod propagate;
pub mod stats;
pub mod value;
