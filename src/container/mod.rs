mod map;
mod sequence;
mod set;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub use map::{FnvHashMap, HashMap, LinkedHashMap, TreeMap};
pub use sequence::{ArrayDeque, ArrayList, LinkedList, PriorityQueue};
pub use set::{FnvHashSet, HashSet, LinkedHashSet, TreeSet};

/// Category of a container, which decides how it is loaded and probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Set,
    Sequence,
    Map,
}

/// The capability set every container under test exposes.
///
/// Sets and sequences store `key` only and ignore `value`; maps store both.
pub trait Container: Default {
    const FAMILY: Family;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert an element (or a key/value pair).
    ///
    /// Returns whether the container grew. Inserting an element a set already
    /// holds, or a key a map already holds, returns false.
    fn insert(&mut self, key: u32, value: u32) -> bool;

    /// Remove one occurrence of an element (or the entry for a key).
    ///
    /// Returns whether anything was removed.
    fn remove(&mut self, key: u32) -> bool;

    /// Membership test for sets and sequences, key test for maps.
    fn contains(&self, key: u32) -> bool;

    fn clear(&mut self);

    fn bulk_insert<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    /// Snapshot of the contents in iteration order.
    ///
    /// Sets and sequences report each element as both key and value. The
    /// benchmarks never call this; it lets callers check what a benchmark
    /// left behind without knowing the concrete type.
    fn entries(&self) -> Vec<(u32, u32)>;
}

/// One concrete container implementation under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    HashSet,
    TreeSet,
    LinkedHashSet,
    ArrayList,
    LinkedList,
    ArrayDeque,
    PriorityQueue,
    HashMap,
    TreeMap,
    LinkedHashMap,
    FnvHashSet,
    FnvHashMap,
}

impl Kind {
    pub const ALL: [Kind; 12] = [
        Kind::HashSet,
        Kind::TreeSet,
        Kind::LinkedHashSet,
        Kind::ArrayList,
        Kind::LinkedList,
        Kind::ArrayDeque,
        Kind::PriorityQueue,
        Kind::HashMap,
        Kind::TreeMap,
        Kind::LinkedHashMap,
        Kind::FnvHashSet,
        Kind::FnvHashMap,
    ];

    /// Kinds run when none are named explicitly, in report order.
    pub const DEFAULT_SUITE: [Kind; 10] = [
        Kind::HashSet,
        Kind::TreeSet,
        Kind::LinkedHashSet,
        Kind::ArrayList,
        Kind::LinkedList,
        Kind::ArrayDeque,
        Kind::PriorityQueue,
        Kind::HashMap,
        Kind::TreeMap,
        Kind::LinkedHashMap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Kind::HashSet => "HashSet",
            Kind::TreeSet => "TreeSet",
            Kind::LinkedHashSet => "LinkedHashSet",
            Kind::ArrayList => "ArrayList",
            Kind::LinkedList => "LinkedList",
            Kind::ArrayDeque => "ArrayDeque",
            Kind::PriorityQueue => "PriorityQueue",
            Kind::HashMap => "HashMap",
            Kind::TreeMap => "TreeMap",
            Kind::LinkedHashMap => "LinkedHashMap",
            Kind::FnvHashSet => "FnvHashSet",
            Kind::FnvHashMap => "FnvHashMap",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Kind::HashSet
            | Kind::TreeSet
            | Kind::LinkedHashSet
            | Kind::FnvHashSet => Family::Set,
            Kind::ArrayList
            | Kind::LinkedList
            | Kind::ArrayDeque
            | Kind::PriorityQueue => Family::Sequence,
            Kind::HashMap
            | Kind::TreeMap
            | Kind::LinkedHashMap
            | Kind::FnvHashMap => Family::Map,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Kind, Error> {
        Kind::ALL
            .iter()
            .cloned()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
