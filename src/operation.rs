//! The four timed operation benchmarks.
//!
//! Every benchmark runs `trial_count` trials against one already loaded
//! container. A trial draws one value from `[0, max_value]`, times exactly one
//! container call, then runs a compensating action outside the timed window:
//!
//! | Benchmark | Timed call | Compensation |
//! |---|---|---|
//! | Insert | insert the probe `element_count` (maps: key `element_count`, value = draw) | remove the probe if the insert grew the container |
//! | Remove | sets and sequences: remove `trial_count - 1`; maps: remove key = draw | if something was removed, insert the draw |
//! | Contains | membership (maps: key) test of the draw | none |
//! | Clear | clear everything | reload through [`load`](crate::loader::load) |
//!
//! Insert, Contains and Clear leave the container at its pre-trial size.
//! Remove keeps the size on average only: the value taken out does not
//! depend on the draw, and the draw is what goes back in.
//!
//! The Insert undo on a sequence removes the first stored copy of the probe.
//! Contents stay unchanged only while the loaded values are all below
//! `element_count` (`max_value < element_count`); otherwise an earlier copy
//! of the probe moves to the back.
use std::fmt;

use crate::container::{Container, Family};
use crate::loader::load;
use crate::random::RandomSource;
use crate::timer::{time, Total};
use crate::workload::Workload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    Remove,
    Contains,
    Clear,
}

impl Operation {
    /// The order in which a run measures the operations.
    pub const ORDER: [Operation; 4] = [
        Operation::Insert,
        Operation::Remove,
        Operation::Contains,
        Operation::Clear,
    ];

    /// Run this operation's benchmark, returning the summed nanoseconds.
    ///
    /// Returns `None` if the sum overflows an `i64`.
    pub fn benchmark<C, R>(
        self,
        container: &mut C,
        workload: &Workload,
        rng: &mut R,
    ) -> Option<i64>
    where
        C: Container,
        R: RandomSource + ?Sized,
    {
        match self {
            Operation::Insert => insert(container, workload, rng),
            Operation::Remove => remove(container, workload, rng),
            Operation::Contains => contains(container, workload, rng),
            Operation::Clear => clear(container, workload, rng),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Insert => "insert",
            Operation::Remove => "remove",
            Operation::Contains => "contains",
            Operation::Clear => "clear",
        })
    }
}

pub fn insert<C, R>(
    container: &mut C,
    workload: &Workload,
    rng: &mut R,
) -> Option<i64>
where
    C: Container,
    R: RandomSource + ?Sized,
{
    let probe = workload.probe();
    let mut total = Total::default();
    for _ in 0..workload.trial_count() {
        let draw = rng.next_bounded(workload.max_value());

        let (grew, elapsed) = time(|| container.insert(probe, draw));
        total.add(elapsed)?;

        if grew {
            container.remove(probe);
        }
    }
    Some(total.nanos())
}

pub fn remove<C, R>(
    container: &mut C,
    workload: &Workload,
    rng: &mut R,
) -> Option<i64>
where
    C: Container,
    R: RandomSource + ?Sized,
{
    let mut total = Total::default();
    for _ in 0..workload.trial_count() {
        let draw = rng.next_bounded(workload.max_value());
        let key = match C::FAMILY {
            Family::Map => draw,
            Family::Set | Family::Sequence => workload.remove_target(),
        };

        let (removed, elapsed) = time(|| container.remove(key));
        total.add(elapsed)?;

        if removed {
            container.insert(draw, draw);
        }
    }
    Some(total.nanos())
}

pub fn contains<C, R>(
    container: &C,
    workload: &Workload,
    rng: &mut R,
) -> Option<i64>
where
    C: Container,
    R: RandomSource + ?Sized,
{
    let mut total = Total::default();
    for _ in 0..workload.trial_count() {
        let draw = rng.next_bounded(workload.max_value());

        let (_, elapsed) = time(|| container.contains(draw));
        total.add(elapsed)?;
    }
    Some(total.nanos())
}

pub fn clear<C, R>(
    container: &mut C,
    workload: &Workload,
    rng: &mut R,
) -> Option<i64>
where
    C: Container,
    R: RandomSource + ?Sized,
{
    let mut total = Total::default();
    for _ in 0..workload.trial_count() {
        let ((), elapsed) = time(|| container.clear());
        total.add(elapsed)?;

        load(container, workload, rng);
    }
    Some(total.nanos())
}
