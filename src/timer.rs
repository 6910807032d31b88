use std::convert::TryFrom;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Time a single call of `op`.
///
/// The result goes through `black_box` before the end timestamp so the
/// measured call cannot be optimized away.
#[inline]
pub fn time<T, F>(op: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = black_box(op());
    let elapsed = start.elapsed();
    (out, elapsed)
}

/// Sum of trial times in nanoseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Total {
    nanos: i64,
}

impl Total {
    /// Add one trial. Returns `None` once the sum no longer fits an `i64`.
    pub fn add(&mut self, elapsed: Duration) -> Option<()> {
        let nanos = i64::try_from(elapsed.as_nanos()).ok()?;
        self.nanos = self.nanos.checked_add(nanos)?;
        Some(())
    }

    pub fn nanos(self) -> i64 {
        self.nanos
    }
}
