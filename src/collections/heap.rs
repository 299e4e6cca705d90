use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A payload paired with the priority it is ordered by.
#[derive(Clone, Debug)]
pub struct HeapEntry<T> {
    pub priority: f64,
    pub payload: T,
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal
    }
}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap from std pops the smallest priority first
        other.priority.total_cmp(&self.priority)
    }
}

/// Binary min-heap keyed by a floating point priority. The order in which entries of equal
/// priority are popped is unspecified.
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    entries: BinaryHeap<HeapEntry<T>>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> MinHeap<T> {
        MinHeap::new()
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> MinHeap<T> {
        MinHeap {
            entries: BinaryHeap::new(),
        }
    }
    pub fn push(&mut self, priority: f64, payload: T) {
        self.entries.push(HeapEntry { priority, payload });
    }
    /// Removes and returns the entry with the smallest priority.
    ///
    /// # Panics
    /// Panics if the heap is empty.
    pub fn pop(&mut self) -> HeapEntry<T> {
        match self.entries.pop() {
            Some(entry) => entry,
            None => panic!("pop called on an empty MinHeap"),
        }
    }
    pub fn try_pop(&mut self) -> Option<HeapEntry<T>> {
        self.entries.pop()
    }
    pub fn peek(&self) -> Option<&HeapEntry<T>> {
        self.entries.peek()
    }
    pub fn size(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
