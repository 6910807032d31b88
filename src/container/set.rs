use std::collections::{BTreeSet, HashSet as StdHashSet};
use std::hash::BuildHasher;

use indexmap::IndexSet;

use super::{Container, Family};

pub type HashSet = StdHashSet<u32>;
pub type TreeSet = BTreeSet<u32>;
/// Iterates in insertion order.
pub type LinkedHashSet = IndexSet<u32>;
pub type FnvHashSet = fnv::FnvHashSet<u32>;

impl<S: BuildHasher + Default> Container for StdHashSet<u32, S> {
    const FAMILY: Family = Family::Set;

    fn len(&self) -> usize {
        StdHashSet::len(self)
    }

    fn insert(&mut self, key: u32, _value: u32) -> bool {
        StdHashSet::insert(self, key)
    }

    fn remove(&mut self, key: u32) -> bool {
        StdHashSet::remove(self, &key)
    }

    fn contains(&self, key: u32) -> bool {
        StdHashSet::contains(self, &key)
    }

    fn clear(&mut self) {
        StdHashSet::clear(self)
    }

    fn bulk_insert<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        self.extend(entries.into_iter().map(|(key, _)| key));
    }

    fn entries(&self) -> Vec<(u32, u32)> {
        self.iter().map(|&k| (k, k)).collect()
    }
}

impl Container for BTreeSet<u32> {
    const FAMILY: Family = Family::Set;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn insert(&mut self, key: u32, _value: u32) -> bool {
        BTreeSet::insert(self, key)
    }

    fn remove(&mut self, key: u32) -> bool {
        BTreeSet::remove(self, &key)
    }

    fn contains(&self, key: u32) -> bool {
        BTreeSet::contains(self, &key)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self)
    }

    fn bulk_insert<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        self.extend(entries.into_iter().map(|(key, _)| key));
    }

    fn entries(&self) -> Vec<(u32, u32)> {
        self.iter().map(|&k| (k, k)).collect()
    }
}

impl<S: BuildHasher + Default> Container for IndexSet<u32, S> {
    const FAMILY: Family = Family::Set;

    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn insert(&mut self, key: u32, _value: u32) -> bool {
        IndexSet::insert(self, key)
    }

    /// Shifts later elements down so the remaining ones keep their
    /// insertion order.
    fn remove(&mut self, key: u32) -> bool {
        self.shift_remove(&key)
    }

    fn contains(&self, key: u32) -> bool {
        IndexSet::contains(self, &key)
    }

    fn clear(&mut self) {
        IndexSet::clear(self)
    }

    fn bulk_insert<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        self.extend(entries.into_iter().map(|(key, _)| key));
    }

    fn entries(&self) -> Vec<(u32, u32)> {
        self.iter().map(|&k| (k, k)).collect()
    }
}
