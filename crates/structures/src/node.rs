//! Persistent tree nodes shared by the binary tree and the BST.
//!
//! A [`TreeNode`] is either the empty sentinel or an occupied branch with a
//! value and exactly two child slots. Branches are reference counted, so
//! rebuilding the path to one slot shares every other subtree with the
//! previous snapshot.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::value::NodeValue;

static EMPTY: TreeNode = TreeNode::Empty;

/// Which child slot of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Slot index in `children`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
        }
    }
}

/// The route from the root to a tree slot.
///
/// Displayed as `root`, `root/L`, `root/L/R`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath(Vec<Side>);

impl TreePath {
    /// The path of the root slot.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from a sequence of turns.
    pub fn from_sides(sides: impl IntoIterator<Item = Side>) -> Self {
        Self(sides.into_iter().collect())
    }

    /// The path of one of this slot's children.
    #[must_use]
    pub fn child(&self, side: Side) -> Self {
        let mut sides = self.0.clone();
        sides.push(side);
        Self(sides)
    }

    /// The turns from the root.
    #[must_use]
    pub fn sides(&self) -> &[Side] {
        &self.0
    }

    /// Number of edges between the root and this slot.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for side in &self.0 {
            write!(f, "/{side}")?;
        }
        Ok(())
    }
}

impl Serialize for TreePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An occupied tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    value: NodeValue,
    children: [TreeNode; 2],
}

impl Branch {
    /// The stored value.
    #[must_use]
    pub const fn value(&self) -> NodeValue {
        self.value
    }

    /// The child in the given slot.
    #[must_use]
    pub fn child(&self, side: Side) -> &TreeNode {
        match side {
            Side::Left => &self.children[0],
            Side::Right => &self.children[1],
        }
    }

    /// A copy of this branch with one child replaced.
    fn with_child(&self, side: Side, child: TreeNode) -> TreeNode {
        let mut children = self.children.clone();
        match side {
            Side::Left => children[0] = child,
            Side::Right => children[1] = child,
        }
        TreeNode::Occupied(Arc::new(Self {
            value: self.value,
            children,
        }))
    }
}

/// A slot in a binary tree: the empty sentinel or an occupied branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TreeNode {
    /// The empty sentinel. Its children are empty as well.
    #[default]
    Empty,
    /// An occupied node with two child slots.
    Occupied(Arc<Branch>),
}

impl TreeNode {
    /// A node with two empty children.
    #[must_use]
    pub fn leaf(value: NodeValue) -> Self {
        Self::branch(value, Self::Empty, Self::Empty)
    }

    /// A node with the given children.
    #[must_use]
    pub fn branch(value: NodeValue, left: Self, right: Self) -> Self {
        Self::Occupied(Arc::new(Branch {
            value,
            children: [left, right],
        }))
    }

    /// The stored value, `None` for the empty sentinel.
    #[must_use]
    pub fn value(&self) -> Option<NodeValue> {
        match self {
            Self::Empty => None,
            Self::Occupied(branch) => Some(branch.value),
        }
    }

    /// Check if this is the empty sentinel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The child in the given slot. The empty sentinel yields empty children.
    #[must_use]
    pub fn child(&self, side: Side) -> &Self {
        match self {
            Self::Empty => &EMPTY,
            Self::Occupied(branch) => branch.child(side),
        }
    }

    /// The left child.
    #[must_use]
    pub fn left(&self) -> &Self {
        self.child(Side::Left)
    }

    /// The right child.
    #[must_use]
    pub fn right(&self) -> &Self {
        self.child(Side::Right)
    }

    /// Both children, left first.
    #[must_use]
    pub fn children(&self) -> [&Self; 2] {
        [self.left(), self.right()]
    }

    /// A copy of this node holding a different value. The sentinel stays empty.
    #[must_use]
    pub fn with_value(&self, value: NodeValue) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Occupied(branch) => Self::Occupied(Arc::new(Branch {
                value,
                children: branch.children.clone(),
            })),
        }
    }

    /// The slot at `path`, if every step before the last passes through an occupied node.
    #[must_use]
    pub fn get(&self, path: &TreePath) -> Option<&Self> {
        path.sides().iter().try_fold(self, |node, side| match node {
            Self::Empty => None,
            Self::Occupied(branch) => Some(branch.child(*side)),
        })
    }

    /// Rebuild the path to `path` with `replacement` in that slot.
    ///
    /// Returns `None` if the path leads through the empty sentinel.
    #[must_use]
    pub fn replace_at(&self, path: &TreePath, replacement: Self) -> Option<Self> {
        self.replace_sides(path.sides(), replacement)
    }

    fn replace_sides(&self, sides: &[Side], replacement: Self) -> Option<Self> {
        match sides.split_first() {
            None => Some(replacement),
            Some((side, rest)) => match self {
                Self::Empty => None,
                Self::Occupied(branch) => {
                    let child = branch.child(*side).replace_sides(rest, replacement)?;
                    Some(branch.with_child(*side, child))
                }
            },
        }
    }

    /// Replace one child of an occupied node. The sentinel stays empty.
    #[must_use]
    pub fn with_child(&self, side: Side, child: Self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Occupied(branch) => branch.with_child(side, child),
        }
    }

    /// Occupied nodes with their paths, in preorder.
    #[must_use]
    pub fn preorder(&self) -> Vec<(TreePath, NodeValue)> {
        let mut out = Vec::new();
        let mut stack = vec![(TreePath::root(), self)];
        while let Some((path, node)) = stack.pop() {
            if let Some(value) = node.value() {
                stack.push((path.child(Side::Right), node.right()));
                stack.push((path.child(Side::Left), node.left()));
                out.push((path, value));
            }
        }
        out
    }

    /// Occupied nodes with their paths, in breadth-first order.
    #[must_use]
    pub fn level_order(&self) -> Vec<(TreePath, NodeValue)> {
        let mut out = Vec::new();
        let mut queue = VecDeque::from([(TreePath::root(), self)]);
        while let Some((path, node)) = queue.pop_front() {
            if let Some(value) = node.value() {
                queue.push_back((path.child(Side::Left), node.left()));
                queue.push_back((path.child(Side::Right), node.right()));
                out.push((path, value));
            }
        }
        out
    }

    /// Path of the first node in preorder holding `value`.
    #[must_use]
    pub fn find(&self, value: NodeValue) -> Option<TreePath> {
        self.preorder()
            .into_iter()
            .find_map(|(path, v)| (v == value).then_some(path))
    }

    /// Number of occupied nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Occupied(branch) => branch
                .children
                .iter()
                .map(Self::len)
                .fold(1, usize::saturating_add),
        }
    }

    /// Number of levels, 0 for the empty sentinel.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Occupied(branch) => branch
                .children
                .iter()
                .map(Self::height)
                .max()
                .unwrap_or(0)
                .saturating_add(1),
        }
    }
}

/// Occupied nodes serialize as `{"value": n, "children": [left, right]}`,
/// the sentinel as `{"value": null, "children": []}`.
impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TreeNode", 2)?;
        match self {
            Self::Empty => {
                state.serialize_field("value", &Option::<NodeValue>::None)?;
                state.serialize_field("children", &[] as &[Self])?;
            }
            Self::Occupied(branch) => {
                state.serialize_field("value", &Some(branch.value))?;
                state.serialize_field("children", &branch.children)?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn v(n: i32) -> NodeValue {
        NodeValue::from(n)
    }

    fn sample() -> TreeNode {
        // 2
        // ├── 1
        // └── 3
        //     └── (L) 4
        TreeNode::branch(
            v(2),
            TreeNode::leaf(v(1)),
            TreeNode::branch(v(3), TreeNode::leaf(v(4)), TreeNode::Empty),
        )
    }

    #[test]
    fn test_empty_sentinel_children_are_empty() {
        let empty = TreeNode::Empty;
        assert!(empty.left().is_empty());
        assert!(empty.right().is_empty());
        assert!(empty.left().left().is_empty());
    }

    #[test]
    fn test_path_display() {
        let path = TreePath::root().child(Side::Left).child(Side::Right);
        assert_eq!(path.to_string(), "root/L/R");
        assert_eq!(TreePath::root().to_string(), "root");
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn test_get() {
        let tree = sample();
        let path = TreePath::from_sides([Side::Right, Side::Left]);
        assert_eq!(tree.get(&path).and_then(TreeNode::value), Some(v(4)));

        // An empty slot under an occupied parent exists.
        let empty_slot = TreePath::from_sides([Side::Left, Side::Left]);
        assert_eq!(tree.get(&empty_slot), Some(&TreeNode::Empty));

        // A path through the sentinel does not.
        let beyond = TreePath::from_sides([Side::Left, Side::Left, Side::Left]);
        assert_eq!(tree.get(&beyond), None);
    }

    #[test]
    fn test_replace_at_shares_untouched_subtrees() {
        let tree = sample();
        let path = TreePath::from_sides([Side::Right, Side::Right]);
        let updated = tree.replace_at(&path, TreeNode::leaf(v(5))).unwrap_or_default();

        assert_eq!(updated.get(&path).and_then(TreeNode::value), Some(v(5)));
        assert_eq!(tree.get(&path), Some(&TreeNode::Empty));

        let shared = matches!(
            (tree.left(), updated.left()),
            (TreeNode::Occupied(before), TreeNode::Occupied(after)) if Arc::ptr_eq(before, after)
        );
        assert!(shared, "untouched left subtree should be shared");
    }

    #[test]
    fn test_orders() {
        let tree = sample();
        let pre: Vec<_> = tree.preorder().into_iter().map(|(_, v)| v).collect();
        assert_eq!(pre, vec![v(2), v(1), v(3), v(4)]);

        let level: Vec<_> = tree.level_order().into_iter().map(|(_, v)| v).collect();
        assert_eq!(level, vec![v(2), v(1), v(3), v(4)]);
    }

    #[test]
    fn test_len_and_height() {
        assert_eq!(TreeNode::Empty.len(), 0);
        assert_eq!(TreeNode::Empty.height(), 0);
        assert_eq!(sample().len(), 4);
        assert_eq!(sample().height(), 3);
    }

    #[test]
    fn test_find_first_in_preorder() {
        let tree = TreeNode::branch(v(1), TreeNode::leaf(v(9)), TreeNode::leaf(v(9)));
        assert_eq!(tree.find(v(9)), Some(TreePath::root().child(Side::Left)));
        assert_eq!(tree.find(v(4)), None);
    }

    #[test]
    fn test_serializes_empty_sentinel() {
        let json = serde_json::to_string(&TreeNode::leaf(v(5))).unwrap();
        assert_eq!(
            json,
            r#"{"value":5.0,"children":[{"value":null,"children":[]},{"value":null,"children":[]}]}"#
        );
        let path = serde_json::to_string(&TreePath::root().child(Side::Right)).unwrap();
        assert_eq!(path, r#""root/R""#);
    }
}
