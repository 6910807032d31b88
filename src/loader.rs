use crate::container::{Container, Family};
use crate::random::RandomSource;
use crate::workload::{saturate, Workload};

/// Fill `container` with `workload.element_count()` insertions.
///
/// Sets draw from `[0, element_count]`, a range narrow enough that loading
/// hits duplicates at a realistic rate. Sequences draw from
/// `[0, max_value]`. Maps get the sequential keys `0..element_count` paired
/// with values drawn from `[0, max_value]`.
pub fn load<C, R>(container: &mut C, workload: &Workload, rng: &mut R)
where
    C: Container,
    R: RandomSource + ?Sized,
{
    let n = workload.element_count();
    match C::FAMILY {
        Family::Set => {
            let bound = saturate(n);
            container.bulk_insert((0..n).map(|_| {
                let v = rng.next_bounded(bound);
                (v, v)
            }));
        }
        Family::Sequence => {
            let bound = workload.max_value();
            container.bulk_insert((0..n).map(|_| {
                let v = rng.next_bounded(bound);
                (v, v)
            }));
        }
        Family::Map => {
            let bound = workload.max_value();
            container.bulk_insert(
                (0..n).map(|key| (saturate(key), rng.next_bounded(bound))),
            );
        }
    }
}
