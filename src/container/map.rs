use std::collections::{BTreeMap, HashMap as StdHashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::{Container, Family};

pub type HashMap = StdHashMap<u32, u32>;
pub type TreeMap = BTreeMap<u32, u32>;
/// Iterates in key insertion order.
pub type LinkedHashMap = IndexMap<u32, u32>;
pub type FnvHashMap = fnv::FnvHashMap<u32, u32>;

impl<S: BuildHasher + Default> Container for StdHashMap<u32, u32, S> {
    const FAMILY: Family = Family::Map;

    fn len(&self) -> usize {
        StdHashMap::len(self)
    }

    fn insert(&mut self, key: u32, value: u32) -> bool {
        StdHashMap::insert(self, key, value).is_none()
    }

    fn remove(&mut self, key: u32) -> bool {
        StdHashMap::remove(self, &key).is_some()
    }

    fn contains(&self, key: u32) -> bool {
        self.contains_key(&key)
    }

    fn clear(&mut self) {
        StdHashMap::clear(self)
    }

    fn bulk_insert<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        self.extend(entries);
    }

    fn entries(&self) -> Vec<(u32, u32)> {
        self.iter().map(|(&k, &v)| (k, v)).collect()
    }
}

impl Container for BTreeMap<u32, u32> {
    const FAMILY: Family = Family::Map;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn insert(&mut self, key: u32, value: u32) -> bool {
        BTreeMap::insert(self, key, value).is_none()
    }

    fn remove(&mut self, key: u32) -> bool {
        BTreeMap::remove(self, &key).is_some()
    }

    fn contains(&self, key: u32) -> bool {
        self.contains_key(&key)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn bulk_insert<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        self.extend(entries);
    }

    fn entries(&self) -> Vec<(u32, u32)> {
        self.iter().map(|(&k, &v)| (k, v)).collect()
    }
}

impl<S: BuildHasher + Default> Container for IndexMap<u32, u32, S> {
    const FAMILY: Family = Family::Map;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn insert(&mut self, key: u32, value: u32) -> bool {
        IndexMap::insert(self, key, value).is_none()
    }

    /// Shifts later entries down so the rest keep their insertion order.
    fn remove(&mut self, key: u32) -> bool {
        self.shift_remove(&key).is_some()
    }

    fn contains(&self, key: u32) -> bool {
        self.contains_key(&key)
    }

    fn clear(&mut self) {
        IndexMap::clear(self)
    }

    fn bulk_insert<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        self.extend(entries);
    }

    fn entries(&self) -> Vec<(u32, u32)> {
        self.iter().map(|(&k, &v)| (k, v)).collect()
    }
}
