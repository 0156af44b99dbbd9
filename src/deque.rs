//! Double-ended queue on an index arena.
//!
//! Nodes live in a `Vec` and link to each other by slot index; removed slots
//! go on a free list and are reused by later insertions. Iterators borrow the
//! deque, so it cannot be modified while one is alive.

use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct Node<T> {
    item: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Clone)]
pub struct Deque<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    first: Option<usize>,
    last: Option<usize>,
    size: usize,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Deque {
            nodes: Vec::new(),
            free: Vec::new(),
            first: None,
            last: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    fn alloc(&mut self, item: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node {
            item: Some(item),
            prev,
            next,
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Take the item out of a slot and recycle it
    fn release(&mut self, slot: usize) -> Option<T> {
        let node = &mut self.nodes[slot];
        node.prev = None;
        node.next = None;
        self.free.push(slot);
        node.item.take()
    }

    pub fn add_first(&mut self, item: T) {
        let old_first = self.first;
        let slot = self.alloc(item, None, old_first);
        match old_first {
            Some(old) => self.nodes[old].prev = Some(slot),
            None => self.last = Some(slot),
        }
        self.first = Some(slot);
        self.size += 1;
    }

    pub fn add_last(&mut self, item: T) {
        let old_last = self.last;
        let slot = self.alloc(item, old_last, None);
        match old_last {
            Some(old) => self.nodes[old].next = Some(slot),
            None => self.first = Some(slot),
        }
        self.last = Some(slot);
        self.size += 1;
    }

    pub fn remove_first(&mut self) -> Result<T> {
        let slot = self.first.ok_or(Error::EmptyContainer("deque"))?;
        let next = self.nodes[slot].next;
        match next {
            Some(n) => self.nodes[n].prev = None,
            None => self.last = None,
        }
        self.first = next;
        self.size -= 1;
        self.release(slot).ok_or(Error::EmptyContainer("deque"))
    }

    pub fn remove_last(&mut self) -> Result<T> {
        let slot = self.last.ok_or(Error::EmptyContainer("deque"))?;
        let prev = self.nodes[slot].prev;
        match prev {
            Some(p) => self.nodes[p].next = None,
            None => self.first = None,
        }
        self.last = prev;
        self.size -= 1;
        self.release(slot).ok_or(Error::EmptyContainer("deque"))
    }

    pub fn peek_first(&self) -> Option<&T> {
        self.first.and_then(|slot| self.nodes[slot].item.as_ref())
    }

    pub fn peek_last(&self) -> Option<&T> {
        self.last.and_then(|slot| self.nodes[slot].item.as_ref())
    }

    /// Front-to-back iterator
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            cursor: self.first,
            remaining: self.size,
        }
    }
}

pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let deque: &'a Deque<T> = self.deque;
        let node = &deque.nodes[slot];
        self.cursor = node.next;
        self.remaining -= 1;
        node.item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning front-to-back iterator
pub struct IntoIter<T>(Deque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(deque: &Deque<T>) -> Vec<T> {
        deque.iter().cloned().collect()
    }

    #[test]
    fn add_both_ends_then_remove_first() {
        let mut deque = Deque::new();
        deque.add_first(1);
        deque.add_last(2);
        assert_eq!(deque.remove_first().unwrap(), 1);
        assert_eq!(deque.size(), 1);
        assert_eq!(collect(&deque), vec![2]);
    }

    #[test]
    fn empty_removal_fails() {
        let mut deque: Deque<i32> = Deque::new();
        assert!(deque.is_empty());
        assert!(matches!(deque.remove_first(), Err(Error::EmptyContainer(_))));
        assert!(matches!(deque.remove_last(), Err(Error::EmptyContainer(_))));
        assert_eq!(deque.peek_first(), None);
    }

    #[test]
    fn drains_from_either_end() {
        let mut deque = Deque::new();
        for i in 0..5 {
            deque.add_first(i);
        }
        assert_eq!(collect(&deque), vec![4, 3, 2, 1, 0]);
        assert_eq!(deque.remove_last().unwrap(), 0);
        assert_eq!(deque.remove_first().unwrap(), 4);
        assert_eq!(deque.peek_first(), Some(&3));
        assert_eq!(deque.peek_last(), Some(&1));
        assert_eq!(deque.remove_last().unwrap(), 1);
        assert_eq!(deque.remove_last().unwrap(), 2);
        assert_eq!(deque.remove_last().unwrap(), 3);
        assert!(deque.is_empty());
        assert_eq!(deque.iter().count(), 0);
    }

    #[test]
    fn single_element_from_both_sides() {
        let mut deque = Deque::new();
        deque.add_last("a");
        assert_eq!(deque.remove_first().unwrap(), "a");
        deque.add_first("b");
        assert_eq!(deque.remove_last().unwrap(), "b");
        assert!(deque.is_empty());
        deque.add_last("c");
        assert_eq!(collect(&deque), vec!["c"]);
    }

    #[test]
    fn slots_are_reused() {
        let mut deque = Deque::new();
        for round in 0..10 {
            deque.add_last(round);
            deque.add_first(round);
            deque.remove_last().unwrap();
        }
        assert_eq!(deque.size(), 10);
        assert!(deque.nodes.len() <= 11);
        assert_eq!(collect(&deque), (0..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn iterators_are_independent() {
        let deque: Deque<i32> = (1..=3).collect();
        let mut a = deque.iter();
        let b = deque.iter();
        assert_eq!(a.next(), Some(&1));
        assert_eq!(b.len(), 3);
        assert_eq!(a.collect::<Vec<_>>(), vec![&2, &3]);
    }

    #[test]
    fn owning_iteration() {
        let deque: Deque<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format!("{deque:?}"), r#"["x", "y"]"#);
        assert_eq!(deque.into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
