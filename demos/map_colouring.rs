//! Colour the map of Australia so no two adjacent regions share a colour.
//!
//! Run with `cargo run --example map_colouring`, add `--json` for
//! machine-readable output, or `RUST_LOG=debug` to watch propagation.

use std::collections::BTreeMap;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vincula::solver::{engine::Solver, problem::Problem, stats::render_stats_table};

#[derive(Parser)]
#[command(about = "Colour the map of Australia with three colours")]
struct Args {
    /// Emit the colouring and search statistics as JSON.
    #[arg(long)]
    json: bool,
}

const REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
const COLOURS: [&str; 3] = ["red", "green", "blue"];
const ADJACENT: [(&str, &str); 9] = [
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

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut builder =
        Problem::builder().constraint(|_: &&str, x: &&str, _: &&str, y: &&str| x != y);
    for region in REGIONS {
        builder = builder.variable(region, COLOURS);
    }
    for (a, b) in ADJACENT {
        builder = builder.edge(a, b);
    }
    let problem = builder.build();

    let (outcome, stats) = Solver::default().solve_with_stats(&problem);
    match outcome {
        Ok(colouring) => {
            if args.json {
                let by_region: BTreeMap<&str, &str> =
                    colouring.iter().map(|(r, c)| (*r, *c)).collect();
                println!(
                    "{}",
                    serde_json::json!({ "colouring": by_region, "stats": stats })
                );
            } else {
                for region in problem.variables() {
                    println!("{region:>4}: {}", colouring.get(region).unwrap_or(&"?"));
                }
                println!("{}", render_stats_table(&stats));
            }
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
