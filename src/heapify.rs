//! Level-order value redistribution ("heapify").
//!
//! Node positions stay where they are; only values move. After the operation a
//! breadth-first read-out is sorted ascending, which is the array layout of a min-heap.
//! The operation is a full sort, O(n log n); it has to be repeated after structural
//! changes if heap order must hold again.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use tracing::{debug, instrument};

use crate::arena::{NodeId, Tree};

/// Heap entry ordered by a caller supplied comparison, reversed so `BinaryHeap`
/// (a max-heap) pops the smallest value first.
struct Ranked<'c, T, F> {
    value: T,
    cmp: &'c F,
}

impl<T, F> PartialEq for Ranked<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn eq(&self, other: &Self) -> bool {
        (self.cmp)(&self.value, &other.value) == Ordering::Equal
    }
}

impl<T, F> Eq for Ranked<'_, T, F> where F: Fn(&T, &T) -> Ordering {}

impl<T, F> PartialOrd for Ranked<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, F> Ord for Ranked<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cmp)(&other.value, &self.value)
    }
}

impl<T, const K: usize> Tree<T, K> {
    /// Redistributes values so a breadth-first read-out is non-decreasing.
    ///
    /// Values that cannot be compared (e.g. `NaN`) rank as equal to everything.
    #[instrument(level = "debug", skip(self))]
    pub fn heapify(&mut self)
    where
        T: PartialOrd + Clone,
    {
        self.heapify_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }

    /// Like [`heapify`](Tree::heapify) with an explicit ordering of the values.
    #[instrument(level = "debug", skip_all)]
    pub fn heapify_by<F>(&mut self, cmp: F)
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        let Some(root) = self.root else {
            return;
        };

        let mut heap = BinaryHeap::with_capacity(self.len());
        let mut queue = VecDeque::from([root]);
        while let Some(idx) = queue.pop_front() {
            if let Some(node) = self.arena.get(idx) {
                heap.push(Ranked {
                    value: node.value().clone(),
                    cmp: &cmp,
                });
                queue.extend(node.children().iter());
            }
        }
        debug!(values = heap.len(), "collected values");

        let mut queue: VecDeque<NodeId> = VecDeque::from([root]);
        while let Some(idx) = queue.pop_front() {
            let Some(node) = self.arena.get_mut(idx) else {
                continue;
            };
            if let Some(smallest) = heap.pop() {
                node.set_value(smallest.value);
            }
            queue.extend(node.children().iter());
        }
    }
}
