//! Plain binary trees.
//!
//! Values are placed where the user asks, with no ordering. Deleting a node
//! empties its slot and discards the whole subtree below it; descendants are
//! never reattached. [`crate::Bst`] deletes differently.

use std::collections::VecDeque;

use algoviz_core::{Error, OptionExt, Result};
use serde::Serialize;
use tracing::debug;

use crate::node::{Side, TreeNode, TreePath};
use crate::value::NodeValue;

/// Where a new value goes in a plain binary tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// First empty slot in breadth-first, left-before-right order.
    Auto,
    /// Left slot of the first node holding `parent`.
    Left { parent: NodeValue },
    /// Right slot of the first node holding `parent`.
    Right { parent: NodeValue },
}

impl InsertPosition {
    /// Build a position from the raw selector the controls send.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for an unknown selector, or for `left`/`right`
    /// without a parent value.
    pub fn parse(kind: &str, parent: Option<NodeValue>) -> Result<Self> {
        match (kind.trim().to_lowercase().as_str(), parent) {
            ("auto", _) => Ok(Self::Auto),
            ("left", Some(parent)) => Ok(Self::Left { parent }),
            ("right", Some(parent)) => Ok(Self::Right { parent }),
            ("left" | "right", None) => Err(Error::validation(format!(
                "position '{kind}' requires a parent value"
            ))),
            _ => Err(Error::validation(format!("unknown insert position '{kind}'"))),
        }
    }
}

/// Snapshot operations shared by [`BinaryTree`] and [`crate::Bst`].
///
/// Every mutation returns a new snapshot and leaves `self` untouched.
pub trait TreeSnapshot: Clone + Send + Sync + 'static {
    /// The root slot.
    fn root(&self) -> &TreeNode;

    /// Insert a value.
    ///
    /// # Errors
    ///
    /// `NotFound` for an absent parent, `NoOp` when the target slot is taken
    /// or the value would be a BST duplicate.
    fn insert(&self, value: NodeValue, position: InsertPosition) -> Result<Self>;

    /// Delete the node holding `value`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no node holds `value`.
    fn delete(&self, value: NodeValue) -> Result<Self>;

    /// Replace `old` with `new`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no node holds `old`, `NoOp` if the values are equal,
    /// `InvariantViolation` if the result would be an invalid structure.
    fn update(&self, old: NodeValue, new: NodeValue) -> Result<Self>;

    /// Number of occupied nodes.
    fn len(&self) -> usize {
        self.root().len()
    }

    /// Check if the tree has no occupied node.
    fn is_empty(&self) -> bool {
        self.root().is_empty()
    }

    /// Number of levels.
    fn height(&self) -> usize {
        self.root().height()
    }

    /// Check if some node holds `value`.
    fn contains(&self, value: NodeValue) -> bool {
        self.root().find(value).is_some()
    }

    /// All values in preorder.
    fn values(&self) -> Vec<NodeValue> {
        self.root().preorder().into_iter().map(|(_, v)| v).collect()
    }
}

/// An unordered binary tree snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BinaryTree {
    root: TreeNode,
}

impl BinaryTree {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree by auto-inserting each value in turn.
    ///
    /// # Errors
    ///
    /// Propagates the first insertion error.
    pub fn from_values(values: impl IntoIterator<Item = NodeValue>) -> Result<Self> {
        values
            .into_iter()
            .try_fold(Self::new(), |tree, value| tree.insert(value, InsertPosition::Auto))
    }

    /// First empty child slot in breadth-first, left-before-right order.
    fn first_free_slot(&self) -> TreePath {
        let mut queue = VecDeque::from([(TreePath::root(), &self.root)]);
        while let Some((path, node)) = queue.pop_front() {
            if node.is_empty() {
                return path;
            }
            for side in Side::BOTH {
                let child = node.child(side);
                if child.is_empty() {
                    return path.child(side);
                }
                queue.push_back((path.child(side), child));
            }
        }
        TreePath::root()
    }

    fn rebuilt(&self, path: &TreePath, replacement: TreeNode) -> Result<Self> {
        self.root
            .replace_at(path, replacement)
            .map(|root| Self { root })
            .or_not_found(|| format!("slot {path}"))
    }
}

impl From<TreeNode> for BinaryTree {
    fn from(root: TreeNode) -> Self {
        Self { root }
    }
}

impl TreeSnapshot for BinaryTree {
    fn root(&self) -> &TreeNode {
        &self.root
    }

    fn insert(&self, value: NodeValue, position: InsertPosition) -> Result<Self> {
        if self.root.is_empty() {
            debug!(%value, "Inserting root");
            return Ok(Self {
                root: TreeNode::leaf(value),
            });
        }

        let slot = match position {
            InsertPosition::Auto => self.first_free_slot(),
            InsertPosition::Left { parent } | InsertPosition::Right { parent } => {
                let side = if matches!(position, InsertPosition::Left { .. }) {
                    Side::Left
                } else {
                    Side::Right
                };
                let parent_path = self
                    .root
                    .find(parent)
                    .or_not_found(|| format!("parent value {parent}"))?;
                let slot = parent_path.child(side);
                if self.root.get(&slot).is_some_and(|node| !node.is_empty()) {
                    return Err(Error::noop(format!(
                        "{} child of {parent} is already occupied",
                        side_name(side)
                    )));
                }
                slot
            }
        };

        debug!(%value, slot = %slot, "Inserting value");
        self.rebuilt(&slot, TreeNode::leaf(value))
    }

    fn delete(&self, value: NodeValue) -> Result<Self> {
        let path = self
            .root
            .find(value)
            .or_not_found(|| format!("value {value}"))?;
        debug!(%value, slot = %path, "Deleting subtree");
        self.rebuilt(&path, TreeNode::Empty)
    }

    fn update(&self, old: NodeValue, new: NodeValue) -> Result<Self> {
        let path = self
            .root
            .find(old)
            .or_not_found(|| format!("value {old}"))?;
        if old == new {
            return Err(Error::noop(format!("value {old} is unchanged")));
        }
        let node = self
            .root
            .get(&path)
            .or_not_found(|| format!("slot {path}"))?
            .with_value(new);
        debug!(%old, %new, slot = %path, "Updating value");
        self.rebuilt(&path, node)
    }
}

const fn side_name(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
    }
}
