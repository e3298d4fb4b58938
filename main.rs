use std::io::Write;

use clap::{Parser, Subcommand};
use log::{error, info};

use mo_engine::config::{EngineConfig, Order};
use mo_engine::error::Result;
use mo_engine::io;
use mo_engine::problems::{bitset, distinct, frequency, pairs, xor};

/// Reads one task instance from stdin and prints one answer per query.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Query ordering for the static, signed and tree-path engines.
    #[arg(long, value_enum, default_value_t = Order::Snake, global = true)]
    order: Order,

    /// Overrides the computed block length.
    #[arg(long, global = true)]
    block_len: Option<usize>,

    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Task {
    /// Number of distinct values in [l, r].
    Distinct,
    /// Chance that two positions drawn from [l, r] hold equal values, as A/B.
    Socks,
    /// Subarrays of [l, r] whose xor equals k.
    XorPairs,
    /// Equal-value pairs across two disjoint ranges.
    CrossPairs,
    /// Difference, sum or product of two values in [l, r] hitting x.
    PairFinder,
    /// Highest multiplicity in [l, r].
    MaxFrequency,
    /// Highest value * multiplicity in [l, r].
    Importance,
    /// Distinct count with point updates.
    TimelineDistinct,
    /// Distinct count on tree paths.
    TreeDistinct,
}

fn run(task: Task, input: &[u8], out: &mut impl Write, config: &EngineConfig) -> Result<()> {
    match task {
        Task::Distinct => distinct::run(input, out, config),
        Task::Socks => pairs::run_socks(input, out, config),
        Task::XorPairs => xor::run(input, out, config),
        Task::CrossPairs => pairs::run_cross(input, out, config),
        Task::PairFinder => bitset::run(input, out, config),
        Task::MaxFrequency => frequency::run_max_frequency(input, out, config),
        Task::Importance => frequency::run_importance(input, out, config),
        Task::TimelineDistinct => distinct::run_timeline(input, out, config),
        Task::TreeDistinct => distinct::run_tree(input, out, config),
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let config = EngineConfig {
        order: args.order,
        block_len: args.block_len,
    };
    info!("{:?} with {:?}", args.task, config);

    let result = io::read_all(std::io::stdin().lock()).and_then(|input| {
        let mut output = io::stdout();
        run(args.task, &input, &mut output, &config)?;
        output.flush()?;
        Ok(())
    });
    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
