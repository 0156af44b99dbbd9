//! Uniform sample of `k` tokens from a stream of unknown length.

use std::io::BufRead;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::randomized_queue::RandomizedQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationConfig {
    pub k: usize,
    pub seed: Option<u64>,
}

/// Reservoir of at most `k` items backed by a [`RandomizedQueue`].
///
/// The first `k` items are kept. The i-th item after that (1-based over the
/// whole stream) replaces a random held item with probability `k / i`, which
/// keeps every item equally likely to be in the final sample.
pub struct Reservoir<T, R: Rng = StdRng> {
    queue: RandomizedQueue<T, StdRng>,
    k: usize,
    seen: usize,
    rng: R,
}

impl<T, R: Rng> Reservoir<T, R> {
    pub fn new(k: usize, mut rng: R) -> Self {
        let queue = RandomizedQueue::with_rng(StdRng::seed_from_u64(rng.gen()));
        Reservoir {
            queue,
            k,
            seen: 0,
            rng,
        }
    }

    /// Number of items offered so far
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn offer(&mut self, item: T) -> Result<()> {
        self.seen += 1;
        if self.queue.size() < self.k {
            self.queue.enqueue(item);
        } else if self.k > 0 && self.rng.gen_range(0..self.seen) < self.k {
            self.queue.dequeue()?;
            self.queue.enqueue(item);
        }
        Ok(())
    }

    /// Drain the sample in random order; fails if fewer than `k` items arrived
    pub fn into_sample(mut self) -> Result<Vec<T>> {
        if self.queue.size() < self.k {
            return Err(Error::InvalidArgument(format!(
                "requested {} items but the input only has {}",
                self.k, self.seen
            )));
        }
        (0..self.k).map(|_| self.queue.dequeue()).collect()
    }
}

/// Sample `k` whitespace-delimited tokens from `reader`
pub fn sample_tokens<B: BufRead, R: Rng>(reader: B, k: usize, rng: R) -> Result<Vec<String>> {
    if k == 0 {
        return Ok(Vec::new());
    }
    let mut reservoir = Reservoir::new(k, rng);

    for line in reader.lines() {
        for token in line?.split_whitespace() {
            reservoir.offer(token.to_string())?;
        }
    }
    debug!("sampled {k} of {} tokens", reservoir.seen());

    reservoir.into_sample()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn returns_k_distinct_tokens() {
        let input = "A B C D E F G H I\n";
        let sample = sample_tokens(input.as_bytes(), 3, StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(sample.len(), 3);
        let unique: HashSet<_> = sample.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(sample.iter().all(|t| input.contains(t.as_str())));
    }

    #[test]
    fn zero_reads_nothing() {
        let sample = sample_tokens("a b".as_bytes(), 0, StdRng::seed_from_u64(0)).unwrap();
        assert!(sample.is_empty());
    }

    #[test]
    fn whole_input_is_a_permutation() {
        let mut sample =
            sample_tokens("x\ny  z\n".as_bytes(), 3, StdRng::seed_from_u64(2)).unwrap();
        sample.sort();
        assert_eq!(sample, vec!["x", "y", "z"]);
    }

    #[test]
    fn too_few_tokens() {
        assert!(matches!(
            sample_tokens("only two".as_bytes(), 3, StdRng::seed_from_u64(1)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn every_item_is_equally_likely() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut counts = [0usize; 10];
        for _ in 0..5000 {
            let mut reservoir = Reservoir::new(2, &mut rng);
            for item in 0..10usize {
                reservoir.offer(item).unwrap();
            }
            for item in reservoir.into_sample().unwrap() {
                counts[item] += 1;
            }
        }
        // Expected 1000 each
        for count in counts {
            assert!((850..1150).contains(&count), "counts {counts:?}");
        }
    }
}
