use crate::error::{Error, Result};

/// Fixed shape of one benchmark suite.
///
/// A workload is built once and shared read-only by every run, so two kinds
/// measured under the same workload see the same container size and value
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    element_count: usize,
    trial_count: usize,
    max_value: u32,
}

impl Workload {
    pub const DEFAULT_ELEMENT_COUNT: usize = 100_000;
    pub const DEFAULT_TRIAL_COUNT: usize = 100;
    pub const DEFAULT_MAX_VALUE: u32 = 99_999;

    pub fn new(
        element_count: usize,
        trial_count: usize,
        max_value: u32,
    ) -> Result<Workload> {
        if trial_count == 0 {
            return Err(Error::InvalidWorkload("trial count must be positive"));
        }
        Ok(Workload {
            element_count,
            trial_count,
            max_value,
        })
    }

    /// Number of elements the loader inserts.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Number of timed trials per operation.
    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Inclusive upper bound of random values.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// The value timed by the insert benchmark.
    ///
    /// Saturates for element counts past `u32::MAX`.
    pub fn probe(&self) -> u32 {
        saturate(self.element_count)
    }

    /// The value the remove benchmark takes out of sets and sequences.
    pub fn remove_target(&self) -> u32 {
        saturate(self.trial_count - 1)
    }
}

impl Default for Workload {
    fn default() -> Self {
        Workload {
            element_count: Workload::DEFAULT_ELEMENT_COUNT,
            trial_count: Workload::DEFAULT_TRIAL_COUNT,
            max_value: Workload::DEFAULT_MAX_VALUE,
        }
    }
}

pub(crate) fn saturate(n: usize) -> u32 {
    if n > u32::max_value() as usize {
        u32::max_value()
    } else {
        n as u32
    }
}
