//! Pending-expansion collection with a fixed discipline.
//!
//! The discipline is chosen once per search call: a stack gives depth-first
//! exploration, a queue gives breadth-first exploration. The frontier does
//! no duplicate detection; that is the search loop's job.

use std::collections::VecDeque;

use crate::policy::Traversal;

/// Stack (LIFO) or queue (FIFO) of pending entries.
#[derive(Debug, Clone)]
pub enum Frontier<T> {
    /// Most recently pushed entry pops first.
    Stack(Vec<T>),
    /// Earliest pushed entry pops first.
    Queue(VecDeque<T>),
}

impl<T> Frontier<T> {
    /// Create an empty frontier for `traversal`.
    #[must_use]
    pub fn for_traversal(traversal: Traversal) -> Self {
        match traversal {
            Traversal::DepthFirst => Self::Stack(Vec::new()),
            Traversal::BreadthFirst => Self::Queue(VecDeque::new()),
        }
    }

    /// Add an entry.
    pub fn push(&mut self, item: T) {
        match self {
            Self::Stack(items) => items.push(item),
            Self::Queue(items) => items.push_back(item),
        }
    }

    /// Remove the next entry according to the discipline.
    pub fn pop(&mut self) -> Option<T> {
        match self {
            Self::Stack(items) => items.pop(),
            Self::Queue(items) => items.pop_front(),
        }
    }

    /// Current number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Stack(items) => items.len(),
            Self::Queue(items) => items.len(),
        }
    }

    /// Whether no entries remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The traversal order this frontier implements.
    #[must_use]
    pub fn traversal(&self) -> Traversal {
        match self {
            Self::Stack(_) => Traversal::DepthFirst,
            Self::Queue(_) => Traversal::BreadthFirst,
        }
    }
}
