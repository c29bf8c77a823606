use std::collections::VecDeque;

use thiserror::Error;

/// Removal or peek was attempted on an empty frontier. The traversal
/// engines never do this while a maze is being carved, so hitting it
/// means a caller (or an engine bug) broke the frontier discipline.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("frontier container is empty")]
pub struct EmptyContainer;

/// LIFO frontier used by the depth-first engine.
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn has_nodes(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.items.pop().ok_or(EmptyContainer)
    }

    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.items.last().ok_or(EmptyContainer)
    }
}

/// FIFO frontier used by the breadth-first engine.
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn has_nodes(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        self.items.pop_front().ok_or(EmptyContainer)
    }

    pub fn front(&self) -> Result<&T, EmptyContainer> {
        self.items.front().ok_or(EmptyContainer)
    }
}

#[cfg(test)]
mod tests {
    use super::{EmptyContainer, Queue, Stack};

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(!stack.has_nodes());
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        queue.enqueue('a');
        queue.enqueue('b');
        queue.enqueue('c');

        assert_eq!(queue.size(), 3);
        assert_eq!(queue.front(), Ok(&'a'));
        assert_eq!(queue.dequeue(), Ok('a'));
        assert_eq!(queue.dequeue(), Ok('b'));
        assert_eq!(queue.dequeue(), Ok('c'));
        assert!(!queue.has_nodes());
    }

    #[test]
    fn empty_containers_fail_on_removal_and_peek() {
        let mut stack = Stack::<u32>::new();
        assert_eq!(stack.pop(), Err(EmptyContainer));
        assert_eq!(stack.peek(), Err(EmptyContainer));

        let mut queue = Queue::<u32>::new();
        assert_eq!(queue.dequeue(), Err(EmptyContainer));
        assert_eq!(queue.front(), Err(EmptyContainer));
    }

    #[test]
    fn seeded_stack_does_not_fail() {
        let mut stack = Stack::new();
        stack.push(0usize);
        assert!(stack.has_nodes());
        assert_eq!(stack.pop(), Ok(0));
        assert_eq!(stack.pop(), Err(EmptyContainer));
    }
}
