//! Pseudocode listings shown next to a running traversal.
//!
//! Every [`crate::Step`] points at one line of its algorithm's listing.

use serde::Serialize;

/// A named pseudocode listing.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Pseudocode {
    pub name: &'static str,
    pub lines: &'static [&'static str],
}

impl Pseudocode {
    /// Text of line `index`, empty if out of range.
    #[must_use]
    pub fn line(&self, index: usize) -> &'static str {
        self.lines.get(index).copied().unwrap_or("")
    }
}

pub static PREORDER: Pseudocode = Pseudocode {
    name: "preorder",
    lines: &[
        "preorder(node):",
        "  if node is empty: return",
        "  visit(node)",
        "  preorder(node.left)",
        "  preorder(node.right)",
    ],
};

pub static INORDER: Pseudocode = Pseudocode {
    name: "inorder",
    lines: &[
        "inorder(node):",
        "  if node is empty: return",
        "  inorder(node.left)",
        "  visit(node)",
        "  inorder(node.right)",
    ],
};

pub static POSTORDER: Pseudocode = Pseudocode {
    name: "postorder",
    lines: &[
        "postorder(node):",
        "  if node is empty: return",
        "  postorder(node.left)",
        "  postorder(node.right)",
        "  visit(node)",
    ],
};

pub static BST_SEARCH: Pseudocode = Pseudocode {
    name: "bst-search",
    lines: &[
        "search(node, target):",
        "  if node is empty: return not found",
        "  compare target with node.value",
        "  if equal: return node",
        "  if target < node.value: search(node.left, target)",
        "  else: search(node.right, target)",
    ],
};

pub static DFS: Pseudocode = Pseudocode {
    name: "dfs",
    lines: &[
        "dfs(node):",
        "  mark node visited",
        "  for each neighbor in ascending id order:",
        "    if neighbor is not visited: dfs(neighbor)",
        "  return to caller",
    ],
};

pub static BFS: Pseudocode = Pseudocode {
    name: "bfs",
    lines: &[
        "bfs(start):",
        "  mark start seen, enqueue start",
        "  while queue is not empty:",
        "    node = dequeue(); visit(node)",
        "    for each unseen neighbor in ascending id order:",
        "      mark neighbor seen, enqueue neighbor",
    ],
};

// Line numbers referenced by the algorithms.
pub(crate) const PREORDER_VISIT: usize = 2;
pub(crate) const INORDER_VISIT: usize = 3;
pub(crate) const POSTORDER_VISIT: usize = 4;
pub(crate) const BST_COMPARE: usize = 2;
pub(crate) const BST_FOUND: usize = 3;
pub(crate) const DFS_VISIT: usize = 1;
pub(crate) const DFS_BACKTRACK: usize = 4;
pub(crate) const BFS_VISIT: usize = 3;
