use std::error::Error as StdError;

use rand::{rngs::SmallRng, SeedableRng};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use collbench::{
    ConsoleReporter, Kind, Reporter, Runner, TableReporter, Workload,
};

/// Average per-operation latency of standard containers.
#[derive(StructOpt)]
#[structopt(name = "collbench")]
struct Opt {
    /// Elements loaded into every container
    #[structopt(short = "n", long = "elements", default_value = "100000")]
    elements: usize,
    /// Timed trials per operation
    #[structopt(short = "t", long = "trials", default_value = "100")]
    trials: usize,
    /// Inclusive upper bound of random values
    #[structopt(short = "m", long = "max-value", default_value = "99999")]
    max_value: u32,
    /// Seed for a reproducible random stream
    #[structopt(short = "s", long = "seed")]
    seed: Option<u64>,
    /// One row per container instead of one block
    #[structopt(long = "table")]
    table: bool,
    /// Containers to run (default: all but the Fnv variants)
    #[structopt(name = "KIND")]
    kinds: Vec<Kind>,
}

fn main() -> Result<(), Box<dyn StdError>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("collbench=warn")),
        )
        .init();

    let opt = Opt::from_args();
    let workload = Workload::new(opt.elements, opt.trials, opt.max_value)?;
    let kinds = if opt.kinds.is_empty() {
        Kind::DEFAULT_SUITE.to_vec()
    } else {
        opt.kinds
    };

    let mut reporter: Box<dyn Reporter> = if opt.table {
        Box::new(TableReporter::stdout())
    } else {
        Box::new(ConsoleReporter::stdout())
    };

    let mut runner = match opt.seed {
        Some(seed) => {
            Runner::with_source(workload, SmallRng::seed_from_u64(seed))
        }
        None => Runner::new(workload),
    };
    let failures = runner.run_all(&kinds, &mut *reporter);

    if failures.is_empty() {
        Ok(())
    } else {
        let msg =
            format!("{} of {} containers failed", failures.len(), kinds.len());
        Err(msg.into())
    }
}
