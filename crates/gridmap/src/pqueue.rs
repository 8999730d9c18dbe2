use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::path::Path;

/// Heap entry ordered by path cost, then insertion sequence.
#[derive(Debug)]
struct Entry {
    path: Path,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first; equal
        // costs pop in insertion order.
        other
            .path
            .cost()
            .total_cmp(&self.path.cost())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority frontier of [`Path`]s keyed on cumulative cost.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: Path) {
        self.heap.push(Entry {
            path,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Remove and return the cheapest path.
    pub fn pop(&mut self) -> Option<Path> {
        self.heap.pop().map(|e| e.path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmap_core::Point;

    fn single(x: i32, cost: f64) -> Path {
        Path::new().fork(Point::new(x, 0), cost)
    }

    #[test]
    fn pops_in_ascending_cost() {
        let mut q = Frontier::new();
        for (x, c) in [(0, 5.0), (1, 1.0), (2, 3.0), (3, 0.5), (4, 4.0)] {
            q.push(single(x, c));
        }
        assert_eq!(q.len(), 5);

        let mut costs = Vec::new();
        while let Some(p) = q.pop() {
            costs.push(p.cost());
        }
        assert_eq!(costs, vec![0.5, 1.0, 3.0, 4.0, 5.0]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        let mut q = Frontier::new();
        q.push(single(0, 2.0));
        q.push(single(1, 1.0));
        q.push(single(2, 2.0));
        q.push(single(3, 1.0));

        let order: Vec<i32> = std::iter::from_fn(|| q.pop())
            .filter_map(|p| p.last())
            .map(|p| p.x)
            .collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn empty_pop() {
        let mut q = Frontier::new();
        assert!(q.pop().is_none());
    }
}
