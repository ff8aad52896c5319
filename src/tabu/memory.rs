//! Bounded FIFO memory of recently visited tours.

use crate::tour::Tour;
use std::collections::{HashMap, VecDeque};

/// Tabu list over whole tours.
///
/// Insertion order lives in a ring buffer; membership is answered by a
/// hash map counting how many queued entries hold each tour, so a tour
/// pushed twice stays tabu until both copies are evicted.
#[derive(Debug, Clone, Default)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<Tour>,
    counts: HashMap<Tour, usize>,
}

impl TabuMemory {
    /// Creates an empty memory holding at most `capacity` tours.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Records `tour`, evicting the oldest entries beyond capacity.
    ///
    /// With capacity 0 nothing is ever stored.
    pub fn push(&mut self, tour: &[usize]) {
        if self.capacity == 0 {
            return;
        }
        let entry = tour.to_vec();
        *self.counts.entry(entry.clone()).or_insert(0) += 1;
        self.queue.push_back(entry);

        while self.queue.len() > self.capacity {
            if let Some(evicted) = self.queue.pop_front() {
                self.forget(evicted);
            }
        }
    }

    /// Whether `tour` is currently tabu. O(n) in the tour length.
    pub fn contains(&self, tour: &[usize]) -> bool {
        self.counts.contains_key(tour)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn forget(&mut self, tour: Tour) {
        if let Some(count) = self.counts.get_mut(&tour) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&tour);
            }
        }
    }
}
