//! Path nodes and the per-search arena that owns them.
//!
//! A node records the action that produced it, the resulting state, and a
//! back-reference to its parent. Back-references are arena indices, and a
//! node's parent is always an older entry, so every chain is finite and
//! acyclic by construction. Siblings share a parent index; nothing is ever
//! mutated after insertion.

/// An ordered sequence of `(action, state)` pairs from the root to a node.
///
/// The first element is always `(None, initial_state)`.
pub type Path<A, S> = Vec<(Option<A>, S)>;

/// Index of a node within its [`PathArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in creation order (root = 0).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
#[derive(Debug, Clone)]
pub struct PathNode<A, S> {
    /// The action that produced this node (`None` for the root).
    pub action: Option<A>,
    /// The state reached.
    pub state: S,
    /// The parent node (`None` for the root).
    pub parent: Option<NodeId>,
}

/// Append-only storage for the nodes of one search call.
#[derive(Debug, Clone)]
pub struct PathArena<A, S> {
    nodes: Vec<PathNode<A, S>>,
}

impl<A, S> PathArena<A, S> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert the root node.
    pub fn root(&mut self, state: S) -> NodeId {
        self.insert(PathNode {
            action: None,
            state,
            parent: None,
        })
    }

    /// Insert a node reached from `parent` via `action`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this arena.
    pub fn child(&mut self, parent: NodeId, action: A, state: S) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "parent {parent:?} not in arena");
        self.insert(PathNode {
            action: Some(action),
            state,
            parent: Some(parent),
        })
    }

    fn insert(&mut self, node: PathNode<A, S>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &PathNode<A, S> {
        &self.nodes[id.0]
    }

    /// Number of nodes constructed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate `id` and its ancestors, leaf first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &PathNode<A, S>> {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let node = self.get(next?);
            next = node.parent;
            Some(node)
        })
    }

    /// Number of actions between the root and `id`.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count() - 1
    }
}

impl<A: Clone, S: Clone> PathArena<A, S> {
    /// Reconstruct the path from the root to `id`, inclusive.
    ///
    /// O(depth); the result is rebuilt on every call.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Path<A, S> {
        let mut path: Path<A, S> = self
            .ancestors(id)
            .map(|n| (n.action.clone(), n.state.clone()))
            .collect();
        path.reverse();
        path
    }
}

impl<A, S: PartialEq> PathArena<A, S> {
    /// Whether `state` is the state of `id` or of any ancestor.
    #[must_use]
    pub fn in_path(&self, id: NodeId, state: &S) -> bool {
        self.ancestors(id).any(|n| n.state == *state)
    }
}

impl<A, S> Default for PathArena<A, S> {
    fn default() -> Self {
        Self::new()
    }
}
