use std::cmp::Reverse;
use std::collections::{
    BinaryHeap, LinkedList as StdLinkedList, VecDeque,
};

use super::{Container, Family};

pub type ArrayList = Vec<u32>;
pub type LinkedList = StdLinkedList<u32>;
pub type ArrayDeque = VecDeque<u32>;
/// Min-heap: the smallest element sits at the head.
pub type PriorityQueue = BinaryHeap<Reverse<u32>>;

impl Container for Vec<u32> {
    const FAMILY: Family = Family::Sequence;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn insert(&mut self, key: u32, _value: u32) -> bool {
        self.push(key);
        true
    }

    /// Removes the first occurrence, shifting the tail down.
    fn remove(&mut self, key: u32) -> bool {
        match self.iter().position(|&x| x == key) {
            Some(i) => {
                Vec::remove(self, i);
                true
            }
            None => false,
        }
    }

    fn contains(&self, key: u32) -> bool {
        <[u32]>::contains(self, &key)
    }

    fn clear(&mut self) {
        Vec::clear(self)
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

impl Container for StdLinkedList<u32> {
    const FAMILY: Family = Family::Sequence;

    fn len(&self) -> usize {
        StdLinkedList::len(self)
    }

    fn insert(&mut self, key: u32, _value: u32) -> bool {
        self.push_back(key);
        true
    }

    /// Unlinks the first occurrence.
    fn remove(&mut self, key: u32) -> bool {
        match self.iter().position(|&x| x == key) {
            Some(i) => {
                let mut tail = self.split_off(i);
                tail.pop_front();
                self.append(&mut tail);
                true
            }
            None => false,
        }
    }

    fn contains(&self, key: u32) -> bool {
        StdLinkedList::contains(self, &key)
    }

    fn clear(&mut self) {
        StdLinkedList::clear(self)
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

impl Container for VecDeque<u32> {
    const FAMILY: Family = Family::Sequence;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn insert(&mut self, key: u32, _value: u32) -> bool {
        self.push_back(key);
        true
    }

    fn remove(&mut self, key: u32) -> bool {
        match self.iter().position(|&x| x == key) {
            Some(i) => VecDeque::remove(self, i).is_some(),
            None => false,
        }
    }

    fn contains(&self, key: u32) -> bool {
        VecDeque::contains(self, &key)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
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

impl Container for BinaryHeap<Reverse<u32>> {
    const FAMILY: Family = Family::Sequence;

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn insert(&mut self, key: u32, _value: u32) -> bool {
        self.push(Reverse(key));
        true
    }

    /// A heap has no positional removal, so this scans for any one
    /// occurrence and re-heapifies what is left.
    fn remove(&mut self, key: u32) -> bool {
        let position = match self.iter().position(|x| x.0 == key) {
            Some(i) => i,
            None => return false,
        };

        let mut items = std::mem::take(self).into_vec();
        items.swap_remove(position);
        *self = BinaryHeap::from(items);
        true
    }

    fn contains(&self, key: u32) -> bool {
        self.iter().any(|x| x.0 == key)
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self)
    }

    fn bulk_insert<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        self.extend(entries.into_iter().map(|(key, _)| Reverse(key)));
    }

    fn entries(&self) -> Vec<(u32, u32)> {
        self.iter().map(|x| (x.0, x.0)).collect()
    }
}
