use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vincula::solver::{engine::Solver, problem::Problem};

fn n_queens_problem(n: u32) -> Problem<u32, i64> {
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
    builder.build()
}

fn australia_problem() -> Problem<&'static str, &'static str> {
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

    let mut builder = Problem::builder().constraint(|_: &&str, x: &&str, _: &&str, y: &&str| x != y);
    for region in regions {
        builder = builder.variable(region, ["red", "green", "blue"]);
    }
    for (a, b) in adjacent {
        builder = builder.edge(a, b);
    }
    builder.build()
}

fn bench_n_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens");
    for n in [4u32, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let problem = n_queens_problem(n);
            let solver = Solver::default();
            b.iter(|| black_box(solver.solve(&problem)));
        });
    }
    group.finish();
}

fn bench_map_colouring(c: &mut Criterion) {
    c.bench_function("australia_map_colouring", |b| {
        let problem = australia_problem();
        let solver = Solver::default();
        b.iter(|| black_box(solver.solve(&problem)));
    });
}

criterion_group!(benches, bench_n_queens, bench_map_colouring);
criterion_main!(benches);
