//! Wall-clock timing of the four basic container phases.
//!
//! Each selected container starts empty and runs, in order:
//! `count` appends, `count` prepends, `count` erases at `begin()`,
//! `count` erases at `end() - 1`.
//!
//! Run with:
//!   cargo run --release --features cli --bin linear_bench -- 100000
//!   RUST_LOG=trace cargo run --release --features cli --bin linear_bench -- 20 --container vector

use std::hint::black_box;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use nexus_linear::{LinkedList, Sequence, Vector};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const ITEM: &str = "DONE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Container {
    List,
    Vector,
    All,
}

#[derive(Debug, Parser)]
#[command(about = "Times append/prepend/erase phases on the nexus-linear containers")]
struct Args {
    /// Operations per phase.
    #[arg(default_value_t = 10_000)]
    count: usize,

    /// Which container to run.
    #[arg(long, value_enum, default_value_t = Container::All)]
    container: Container,
}

fn timed(mut phase: impl FnMut()) -> Duration {
    let start = Instant::now();
    phase();
    start.elapsed()
}

fn run<S>(name: &str, mut seq: S, count: usize) -> nexus_linear::Result<()>
where
    S: Sequence<Item = String>,
{
    let report = |phase: &str, elapsed: Duration| {
        println!("{name:<16}{phase:<20}{:.6}s", elapsed.as_secs_f64());
        info!(container = name, phase, count, elapsed_s = elapsed.as_secs_f64());
    };

    report(
        "Append time:",
        timed(|| {
            for _ in 0..count {
                seq.append(ITEM.to_owned());
            }
        }),
    );

    report(
        "Prepend time:",
        timed(|| {
            for _ in 0..count {
                seq.prepend(ITEM.to_owned());
            }
        }),
    );

    let mut failure = None;

    report(
        "EraseBegin time:",
        timed(|| {
            for _ in 0..count {
                match seq.erase(seq.begin()) {
                    Ok(item) => drop(black_box(item)),
                    Err(err) => {
                        failure.get_or_insert(err);
                    }
                }
            }
        }),
    );

    report(
        "EraseEnd time:",
        timed(|| {
            for _ in 0..count {
                let last = seq.offset(seq.end(), -1).and_then(|pos| seq.erase(pos));
                match last {
                    Ok(item) => drop(black_box(item)),
                    Err(err) => {
                        failure.get_or_insert(err);
                    }
                }
            }
        }),
    );

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(count = args.count, container = ?args.container, "starting");

    let mut results = Vec::new();
    if matches!(args.container, Container::List | Container::All) {
        results.push(run("LinkedList", LinkedList::<String>::new(), args.count));
    }
    if matches!(args.container, Container::Vector | Container::All) {
        results.push(run("Vector", Vector::<String>::new(), args.count));
    }

    for err in results.into_iter().filter_map(Result::err) {
        warn!(%err, "phase failed");
        std::process::exit(1);
    }
}
