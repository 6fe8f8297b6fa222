//! Place n queens on an n x n board so none attacks another.
//!
//! One variable per row, one column value per queen. Column and diagonal
//! attacks are both expressed through the single binary predicate, with the
//! row identifiers supplying the diagonal offsets.
//!
//! Run with `cargo run --example n_queens -- --n 8`; `--trace` prints a line
//! for every consistent extension the solver explores.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vincula::solver::{engine::Solver, problem::Problem, stats::render_stats_table};

#[derive(Parser)]
#[command(about = "Solve the n-queens puzzle")]
struct Args {
    /// Board size.
    #[arg(long, default_value_t = 8)]
    n: u32,
    /// Print a line for every consistent extension the solver explores.
    #[arg(long)]
    trace: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let n = args.n;

    let mut builder = Problem::builder().constraint(|a: &u32, x: &i64, b: &u32, y: &i64| {
        x != y && (x - y).abs() != (i64::from(*a) - i64::from(*b)).abs()
    });
    for row in 0..n {
        builder = builder.variable(row, 0..i64::from(n));
    }
    for a in 0..n {
        for b in 0..n {
            if a != b {
                builder = builder.arc(a, b);
            }
        }
    }
    if args.trace {
        let total = n as usize;
        builder = builder.callback(move |progress| {
            println!("placed {} of {total} queens", progress.assignment.len());
        });
    }
    let problem = builder.build();

    let (outcome, stats) = Solver::default().solve_with_stats(&problem);
    match outcome {
        Ok(placement) => {
            for row in 0..n {
                let column = placement.get(&row).copied().unwrap_or(-1);
                for c in 0..i64::from(n) {
                    print!("{}", if c == column { " Q" } else { " ." });
                }
                println!();
            }
            println!("{}", render_stats_table(&stats));
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
