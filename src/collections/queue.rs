use std::collections::VecDeque;

/// First-in first-out queue.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Queue<T> {
        Queue::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            items: VecDeque::new(),
        }
    }
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }
    /// Removes and returns the oldest item.
    ///
    /// # Panics
    /// Panics if the queue is empty; check [size](Self::size) first or use
    /// [try_pop](Self::try_pop).
    pub fn pop(&mut self) -> T {
        match self.items.pop_front() {
            Some(item) => item,
            None => panic!("pop called on an empty Queue"),
        }
    }
    pub fn try_pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }
    pub fn size(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Queue<T> {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}
