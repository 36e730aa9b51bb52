//! The `Traversal` trait: one interface over every algorithm so a run owner
//! can start any of them against its snapshot type.

use algoviz_core::TraceLevel;
use algoviz_structures::{Bst, Graph, NodeId, NodeValue, TreePath, TreeSnapshot};
use serde::{Deserialize, Serialize};

use crate::graph::{GraphAlgorithm, bfs, dfs};
use crate::pseudocode::Pseudocode;
use crate::search::bst_search_steps;
use crate::step::StepSequence;
use crate::tree::{TreeOrder, tree_steps};

/// An algorithm that turns a snapshot of `S` into a step sequence.
///
/// Implementations must be pure: the same snapshot and level always give
/// the same sequence.
pub trait Traversal<S>: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str {
        self.pseudocode().name
    }

    /// The listing the emitted steps point into.
    fn pseudocode(&self) -> &'static Pseudocode;

    /// Compute the full step sequence for `snapshot`.
    fn steps(&self, snapshot: &S, level: TraceLevel) -> StepSequence;
}

/// A depth-first order over any tree, starting at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeTraversal {
    pub order: TreeOrder,
    pub start: TreePath,
}

impl TreeTraversal {
    /// Traverse the whole tree in `order`.
    #[must_use]
    pub const fn new(order: TreeOrder) -> Self {
        Self {
            order,
            start: TreePath::root(),
        }
    }

    #[must_use]
    pub fn starting_at(mut self, start: TreePath) -> Self {
        self.start = start;
        self
    }
}

impl<S: TreeSnapshot> Traversal<S> for TreeTraversal {
    fn pseudocode(&self) -> &'static Pseudocode {
        self.order.pseudocode()
    }

    fn steps(&self, snapshot: &S, _level: TraceLevel) -> StepSequence {
        tree_steps(snapshot.root(), self.order, &self.start)
    }
}

/// Look up `target` in a BST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstSearch {
    pub target: NodeValue,
}

impl BstSearch {
    #[must_use]
    pub const fn new(target: NodeValue) -> Self {
        Self { target }
    }
}

impl Traversal<Bst> for BstSearch {
    fn pseudocode(&self) -> &'static Pseudocode {
        &crate::pseudocode::BST_SEARCH
    }

    fn steps(&self, snapshot: &Bst, _level: TraceLevel) -> StepSequence {
        bst_search_steps(snapshot, self.target)
    }
}

/// DFS or BFS from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphTraversal {
    pub algorithm: GraphAlgorithm,
    pub start: NodeId,
}

impl GraphTraversal {
    #[must_use]
    pub const fn dfs(start: NodeId) -> Self {
        Self {
            algorithm: GraphAlgorithm::Dfs,
            start,
        }
    }

    #[must_use]
    pub const fn bfs(start: NodeId) -> Self {
        Self {
            algorithm: GraphAlgorithm::Bfs,
            start,
        }
    }
}

impl Traversal<Graph> for GraphTraversal {
    fn pseudocode(&self) -> &'static Pseudocode {
        self.algorithm.pseudocode()
    }

    fn steps(&self, snapshot: &Graph, level: TraceLevel) -> StepSequence {
        match self.algorithm {
            GraphAlgorithm::Dfs => dfs(snapshot, self.start, level),
            GraphAlgorithm::Bfs => bfs(snapshot, self.start),
        }
    }
}
