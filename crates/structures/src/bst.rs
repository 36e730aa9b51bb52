//! Binary search trees.
//!
//! Every occupied node satisfies `left subtree < value < right subtree`.
//! Insertion position selectors are ignored: values go where the ordering
//! puts them, and duplicates are rejected as a no-op.

use std::cmp::Ordering;

use algoviz_core::{Error, OptionExt, Result};
use serde::Serialize;
use tracing::debug;

use crate::node::{Side, TreeNode, TreePath};
use crate::tree::{InsertPosition, TreeSnapshot};
use crate::value::NodeValue;

/// A binary search tree snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bst {
    root: TreeNode,
}

impl Bst {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree by inserting each value in turn. Duplicates are skipped.
    pub fn from_values(values: impl IntoIterator<Item = NodeValue>) -> Self {
        values.into_iter().fold(Self::new(), |tree, value| {
            tree.insert(value, InsertPosition::Auto).unwrap_or(tree)
        })
    }

    /// Adopt an existing node structure if it satisfies the ordering invariant.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` if the structure is not a valid BST.
    pub fn try_from_root(root: TreeNode) -> Result<Self> {
        if is_ordered(&root, None, None) {
            Ok(Self { root })
        } else {
            Err(Error::invariant_violation(
                "tree does not satisfy the search ordering",
            ))
        }
    }

    /// Check the ordering invariant over the whole tree.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_ordered(&self.root, None, None)
    }

    /// The slots visited when looking up `value`, ending at the match or at
    /// the empty slot where it would be inserted.
    #[must_use]
    pub fn search_path(&self, value: NodeValue) -> Vec<(TreePath, Option<NodeValue>)> {
        let mut out = Vec::new();
        let mut path = TreePath::root();
        let mut node = &self.root;
        loop {
            let current = node.value();
            out.push((path.clone(), current));
            let side = match current.map(|c| value.cmp(&c)) {
                Some(Ordering::Less) => Side::Left,
                Some(Ordering::Greater) => Side::Right,
                Some(Ordering::Equal) | None => return out,
            };
            path = path.child(side);
            node = node.child(side);
        }
    }

    /// Smallest value, if any.
    #[must_use]
    pub fn min(&self) -> Option<NodeValue> {
        leftmost(&self.root)
    }

    /// Largest value, if any.
    #[must_use]
    pub fn max(&self) -> Option<NodeValue> {
        let mut node = &self.root;
        let mut best = None;
        while let Some(value) = node.value() {
            best = Some(value);
            node = node.right();
        }
        best
    }
}

impl TreeSnapshot for Bst {
    fn root(&self) -> &TreeNode {
        &self.root
    }

    fn insert(&self, value: NodeValue, _position: InsertPosition) -> Result<Self> {
        let slot = self
            .search_path(value)
            .pop()
            .map(|(path, found)| (path, found.is_some()));
        let (slot, occupied) = slot.unwrap_or((TreePath::root(), false));
        if occupied {
            return Err(Error::noop(format!("value {value} is already in the tree")));
        }
        debug!(%value, slot = %slot, "Inserting value");
        self.root
            .replace_at(&slot, TreeNode::leaf(value))
            .map(|root| Self { root })
            .or_not_found(|| format!("slot {slot}"))
    }

    fn delete(&self, value: NodeValue) -> Result<Self> {
        debug!(%value, "Deleting value");
        delete_from(&self.root, value).map(|root| Self { root })
    }

    fn update(&self, old: NodeValue, new: NodeValue) -> Result<Self> {
        let (path, found) = self
            .search_path(old)
            .pop()
            .unwrap_or((TreePath::root(), None));
        if found.is_none() {
            return Err(Error::not_found(format!("value {old}")));
        }
        if old == new {
            return Err(Error::noop(format!("value {old} is unchanged")));
        }

        let node = self
            .root
            .get(&path)
            .or_not_found(|| format!("slot {path}"))?
            .with_value(new);
        let root = self
            .root
            .replace_at(&path, node)
            .or_not_found(|| format!("slot {path}"))?;

        if !is_ordered(&root, None, None) {
            return Err(Error::invariant_violation(format!(
                "replacing {old} with {new} would break the search ordering"
            )));
        }
        debug!(%old, %new, slot = %path, "Updating value");
        Ok(Self { root })
    }
}

/// Standard deletion: a leaf disappears, a single child takes the slot, and
/// a node with two children takes its in-order successor's value while the
/// successor is removed from the right subtree by the same rule.
fn delete_from(node: &TreeNode, value: NodeValue) -> Result<TreeNode> {
    let current = node
        .value()
        .or_not_found(|| format!("value {value}"))?;

    match value.cmp(&current) {
        Ordering::Less => Ok(node.with_child(Side::Left, delete_from(node.left(), value)?)),
        Ordering::Greater => Ok(node.with_child(Side::Right, delete_from(node.right(), value)?)),
        Ordering::Equal => match (node.left().is_empty(), node.right().is_empty()) {
            (true, true) => Ok(TreeNode::Empty),
            (false, true) => Ok(node.left().clone()),
            (true, false) => Ok(node.right().clone()),
            (false, false) => {
                let successor = leftmost(node.right())
                    .or_not_found(|| format!("successor of {value}"))?;
                let right = delete_from(node.right(), successor)?;
                Ok(TreeNode::branch(successor, node.left().clone(), right))
            }
        },
    }
}

fn leftmost(node: &TreeNode) -> Option<NodeValue> {
    let mut node = node;
    let mut best = None;
    while let Some(value) = node.value() {
        best = Some(value);
        node = node.left();
    }
    best
}

fn is_ordered(node: &TreeNode, low: Option<NodeValue>, high: Option<NodeValue>) -> bool {
    let Some(value) = node.value() else {
        return true;
    };
    if low.is_some_and(|low| value <= low) || high.is_some_and(|high| value >= high) {
        return false;
    }
    is_ordered(node.left(), low, Some(value)) && is_ordered(node.right(), Some(value), high)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn v(n: i32) -> NodeValue {
        NodeValue::from(n)
    }

    fn bst(values: &[i32]) -> Bst {
        Bst::from_values(values.iter().copied().map(v))
    }

    fn inorder(tree: &Bst) -> Vec<NodeValue> {
        fn walk(node: &TreeNode, out: &mut Vec<NodeValue>) {
            if let Some(value) = node.value() {
                walk(node.left(), out);
                out.push(value);
                walk(node.right(), out);
            }
        }
        let mut out = Vec::new();
        walk(tree.root(), &mut out);
        out
    }

    #[test]
    fn test_insert_into_empty() {
        let tree = Bst::new().insert(v(8), InsertPosition::Auto).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.root().left().is_empty());
        assert!(tree.root().right().is_empty());
    }

    #[test]
    fn test_insert_ignores_position() {
        let tree = bst(&[5]);
        let tree = tree
            .insert(v(9), InsertPosition::Left { parent: v(5) })
            .unwrap();
        assert_eq!(tree.root().right().value(), Some(v(9)));
        assert!(tree.root().left().is_empty());
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let tree = bst(&[5, 3]);
        assert!(matches!(
            tree.insert(v(3), InsertPosition::Auto),
            Err(Error::NoOp { .. })
        ));
    }

    #[test]
    fn test_delete_leaf() {
        let tree = bst(&[5, 3, 8]).delete(v(3)).unwrap();
        assert_eq!(inorder(&tree), vec![v(5), v(8)]);
    }

    #[test]
    fn test_delete_one_child_promotes_child() {
        let tree = bst(&[5, 3, 2]).delete(v(3)).unwrap();
        assert_eq!(tree.root().left().value(), Some(v(2)));
        assert!(tree.is_valid());
    }

    #[test]
    fn test_delete_two_children_promotes_successor() {
        //      5
        //    3   8
        //       7  9
        //      6
        let tree = bst(&[5, 3, 8, 7, 9, 6]);
        let tree = tree.delete(v(5)).unwrap();
        assert_eq!(tree.root().value(), Some(v(6)));
        assert_eq!(inorder(&tree), vec![v(3), v(6), v(7), v(8), v(9)]);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_delete_keeps_descendants_unlike_binary_tree() {
        let tree = bst(&[5, 3, 8, 1, 4]).delete(v(3)).unwrap();
        assert!(tree.contains(v(1)));
        assert!(tree.contains(v(4)));
    }

    #[test]
    fn test_delete_missing() {
        assert!(matches!(
            bst(&[5]).delete(v(6)),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_within_bounds() {
        let tree = bst(&[5, 3, 8]).update(v(3), v(4)).unwrap();
        assert_eq!(inorder(&tree), vec![v(4), v(5), v(8)]);
    }

    #[test]
    fn test_update_breaking_order_is_rejected() {
        let tree = bst(&[5, 3, 8]);
        let result = tree.update(v(3), v(6));
        assert!(matches!(result, Err(Error::InvariantViolation { .. })));
        assert_eq!(inorder(&tree), vec![v(3), v(5), v(8)]);
    }

    #[test]
    fn test_update_to_existing_value_is_rejected() {
        let result = bst(&[5, 3, 8]).update(v(3), v(5));
        assert!(matches!(result, Err(Error::InvariantViolation { .. })));
    }

    #[test]
    fn test_search_path() {
        let tree = bst(&[5, 3, 8, 7]);
        let path: Vec<_> = tree.search_path(v(7)).into_iter().map(|(_, v)| v).collect();
        assert_eq!(path, vec![Some(v(5)), Some(v(8)), Some(v(7))]);

        let miss: Vec<_> = tree.search_path(v(4)).into_iter().map(|(_, v)| v).collect();
        assert_eq!(miss, vec![Some(v(5)), Some(v(3)), None]);
    }

    #[test]
    fn test_min_max() {
        let tree = bst(&[5, 3, 8, 1, 9]);
        assert_eq!(tree.min(), Some(v(1)));
        assert_eq!(tree.max(), Some(v(9)));
        assert_eq!(Bst::new().min(), None);
    }

    #[test]
    fn test_try_from_root() {
        let valid = TreeNode::branch(v(2), TreeNode::leaf(v(1)), TreeNode::leaf(v(3)));
        assert!(Bst::try_from_root(valid).is_ok());

        let invalid = TreeNode::branch(v(2), TreeNode::leaf(v(3)), TreeNode::Empty);
        assert!(matches!(
            Bst::try_from_root(invalid),
            Err(Error::InvariantViolation { .. })
        ));
    }
}
