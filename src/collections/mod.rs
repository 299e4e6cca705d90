//! Ordered containers used as traversal scaffolding: a FIFO [Queue] for the graph builder, a
//! LIFO [Stack] for reversing search chains and a [MinHeap] for the A* frontier.
//!
//! Calling `pop` on an empty container is a programmer error and panics; loops inside the crate
//! use `try_pop` instead.
mod heap;
mod queue;
mod stack;

pub use heap::{HeapEntry, MinHeap};
pub use queue::Queue;
pub use stack::Stack;
