use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `(priority, item)` pairs.
///
/// Entries pop in ascending priority order; equal priorities pop in
/// ascending item order, which makes frontier selection deterministic when
/// items are vertex indices.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item with the given priority
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes and returns the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, item))| (item, priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_priority_order() {
        let mut queue = MinQueue::new();
        queue.push(0usize, 30);
        queue.push(1usize, 10);
        queue.push(2usize, 20);

        assert_eq!(queue.pop(), Some((1, 10)));
        assert_eq!(queue.pop(), Some((2, 20)));
        assert_eq!(queue.pop(), Some((0, 30)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn breaks_priority_ties_by_lowest_item() {
        let mut queue = MinQueue::new();
        queue.push(7usize, 5);
        queue.push(2usize, 5);
        queue.push(4usize, 5);

        assert_eq!(queue.pop(), Some((2, 5)));
        assert_eq!(queue.pop(), Some((4, 5)));
        assert_eq!(queue.pop(), Some((7, 5)));
        assert!(queue.is_empty());
    }
}
