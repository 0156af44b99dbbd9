//! Queue that removes a uniformly random item.
//!
//! Items sit in the first `size` slots of a fixed-capacity slot array.
//! Capacity doubles when the array is full and halves once occupancy falls to
//! a quarter, so a run of alternating enqueue/dequeue at a boundary never
//! thrashes.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

const INITIAL_CAPACITY: usize = 1;

#[derive(Debug, Clone)]
pub struct RandomizedQueue<T, R = StdRng> {
    slots: Vec<Option<T>>,
    size: usize,
    rng: R,
}

impl<T> RandomizedQueue<T, StdRng> {
    /// Empty queue drawing from an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Empty queue with a reproducible draw sequence
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T> Default for RandomizedQueue<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    pub fn with_rng(rng: R) -> Self {
        RandomizedQueue {
            slots: empty_slots(INITIAL_CAPACITY),
            size: 0,
            rng,
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

    /// Number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.size);
        let mut slots = empty_slots(capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.size].iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
    }

    pub fn enqueue(&mut self, item: T) {
        if self.size == self.slots.len() {
            self.resize(2 * self.slots.len());
        }
        self.slots[self.size] = Some(item);
        self.size += 1;
    }

    /// Remove and return a uniformly random item
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer("randomized queue"));
        }
        let index = self.rng.gen_range(0..self.size);
        let last = self.size - 1;
        self.slots.swap(index, last);
        let item = self.slots[last].take();
        self.size -= 1;

        if self.size > 0 && self.size == self.slots.len() / 4 {
            self.resize(self.slots.len() / 2);
        }

        item.ok_or(Error::EmptyContainer("randomized queue"))
    }

    /// Return a uniformly random item without removing it
    pub fn sample(&mut self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer("randomized queue"));
        }
        let index = self.rng.gen_range(0..self.size);
        self.slots[index]
            .as_ref()
            .ok_or(Error::EmptyContainer("randomized queue"))
    }

    /// Iterator over a random permutation fixed at creation time
    pub fn iter(&mut self) -> Iter<'_, T> {
        let mut order: Vec<usize> = (0..self.size).collect();
        order.shuffle(&mut self.rng);
        Iter {
            slots: &self.slots[..self.size],
            order: order.into_iter(),
        }
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    order: std::vec::IntoIter<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.order.next()?;
        let slots: &'a [Option<T>] = self.slots;
        slots[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T, R: Rng> Extend<T> for RandomizedQueue<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}
