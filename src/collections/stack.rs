/// Last-in first-out stack.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { items: Vec::new() }
    }
    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
    /// Removes and returns the most recently pushed item.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(item) => item,
            None => panic!("pop called on an empty Stack"),
        }
    }
    pub fn try_pop(&mut self) -> Option<T> {
        self.items.pop()
    }
    pub fn size(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
