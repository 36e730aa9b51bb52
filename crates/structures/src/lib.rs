//! Immutable tree and graph snapshots.
//!
//! Every mutation is a pure function from the current snapshot to the next
//! one; the input snapshot stays valid and unchanged. Trees share untouched
//! subtrees through `Arc`, graphs through persistent `im` collections.
//!
//! # Example
//!
//! ```
//! use algoviz_structures::{BinaryTree, InsertPosition, NodeValue, TreeSnapshot};
//!
//! let tree = BinaryTree::new()
//!     .insert(NodeValue::from(1), InsertPosition::Auto)
//!     .and_then(|t| t.insert(NodeValue::from(2), InsertPosition::Auto));
//! assert_eq!(tree.map(|t| t.len()), Ok(2));
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod bst;
pub mod graph;
pub mod node;
pub mod tree;
pub mod value;

pub use bst::Bst;
pub use graph::{Edge, Graph, GraphNode, Layout, NodeId, Point};
pub use node::{Branch, Side, TreeNode, TreePath};
pub use tree::{BinaryTree, InsertPosition, TreeSnapshot};
pub use value::NodeValue;
