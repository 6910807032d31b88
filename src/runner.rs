use rand::{rngs::SmallRng, SeedableRng};
use tracing::{debug, error, info};

use crate::container::{self, Container, Kind};
use crate::error::{Error, Result};
use crate::loader::load;
use crate::operation::Operation;
use crate::random::RandomSource;
use crate::report::{Averages, Reporter};
use crate::workload::Workload;

/// Summed trial times of one kind's run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    kind: Kind,
    trial_count: usize,
    add_total_ns: i64,
    remove_total_ns: i64,
    contains_total_ns: i64,
    clear_total_ns: i64,
}

impl OperationResult {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    pub fn total_ns(&self, operation: Operation) -> i64 {
        match operation {
            Operation::Insert => self.add_total_ns,
            Operation::Remove => self.remove_total_ns,
            Operation::Contains => self.contains_total_ns,
            Operation::Clear => self.clear_total_ns,
        }
    }

    /// Totals divided by the trial count.
    pub fn averages(&self) -> Averages {
        let n = self.trial_count as f64;
        Averages {
            insert: self.add_total_ns as f64 / n,
            contains: self.contains_total_ns as f64 / n,
            remove: self.remove_total_ns as f64 / n,
            clear: self.clear_total_ns as f64 / n,
        }
    }
}

/// Drives containers through loading and the four timed benchmarks.
pub struct Runner<R> {
    workload: Workload,
    rng: R,
}

impl Runner<SmallRng> {
    /// A runner drawing from an unseeded `SmallRng`.
    pub fn new(workload: Workload) -> Runner<SmallRng> {
        Runner::with_source(workload, SmallRng::from_entropy())
    }
}

impl<R: RandomSource> Runner<R> {
    pub fn with_source(workload: Workload, rng: R) -> Runner<R> {
        Runner { workload, rng }
    }

    /// Benchmark a fresh, empty container of `kind`.
    pub fn run(&mut self, kind: Kind) -> Result<OperationResult> {
        match kind {
            Kind::HashSet => self.run_fresh::<container::HashSet>(kind),
            Kind::TreeSet => self.run_fresh::<container::TreeSet>(kind),
            Kind::LinkedHashSet => {
                self.run_fresh::<container::LinkedHashSet>(kind)
            }
            Kind::ArrayList => self.run_fresh::<container::ArrayList>(kind),
            Kind::LinkedList => self.run_fresh::<container::LinkedList>(kind),
            Kind::ArrayDeque => self.run_fresh::<container::ArrayDeque>(kind),
            Kind::PriorityQueue => {
                self.run_fresh::<container::PriorityQueue>(kind)
            }
            Kind::HashMap => self.run_fresh::<container::HashMap>(kind),
            Kind::TreeMap => self.run_fresh::<container::TreeMap>(kind),
            Kind::LinkedHashMap => {
                self.run_fresh::<container::LinkedHashMap>(kind)
            }
            Kind::FnvHashSet => self.run_fresh::<container::FnvHashSet>(kind),
            Kind::FnvHashMap => self.run_fresh::<container::FnvHashMap>(kind),
        }
    }

    fn run_fresh<C: Container>(
        &mut self,
        kind: Kind,
    ) -> Result<OperationResult> {
        let mut container = C::default();
        self.measure(kind, &mut container)
    }

    /// Load `container` and run Insert, Remove, Contains and Clear on it, in
    /// that order.
    ///
    /// `container` should start empty. Afterwards it holds what the last
    /// Clear trial reloaded.
    pub fn measure<C: Container>(
        &mut self,
        kind: Kind,
        container: &mut C,
    ) -> Result<OperationResult> {
        debug_assert_eq!(kind.family(), C::FAMILY);

        load(container, &self.workload, &mut self.rng);
        info!(%kind, len = container.len(), "loaded");

        let mut totals = [0i64; 4];
        for (total, &operation) in totals.iter_mut().zip(&Operation::ORDER) {
            *total = operation
                .benchmark(container, &self.workload, &mut self.rng)
                .ok_or(Error::Overflow { kind, operation })?;
            debug!(%kind, %operation, total_ns = *total, "benchmark finished");
        }

        let [add_total_ns, remove_total_ns, contains_total_ns, clear_total_ns] =
            totals;
        info!(%kind, len = container.len(), "finished");
        Ok(OperationResult {
            kind,
            trial_count: self.workload.trial_count(),
            add_total_ns,
            remove_total_ns,
            contains_total_ns,
            clear_total_ns,
        })
    }

    /// Run every kind in order, reporting each result as soon as it is ready.
    ///
    /// A failed kind is logged and skipped; the remaining kinds still run.
    /// Returns the failures.
    pub fn run_all<P>(&mut self, kinds: &[Kind], mut reporter: P) -> Vec<Error>
    where
        P: Reporter,
    {
        let mut failures = Vec::new();
        for &kind in kinds {
            let outcome = self.run(kind).and_then(|result| {
                reporter
                    .report(result.name(), &result.averages())
                    .map_err(Error::from)
            });
            if let Err(e) = outcome {
                error!(%kind, error = %e, "run failed");
                failures.push(e);
            }
        }
        failures
    }
}
