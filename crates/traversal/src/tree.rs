//! Depth-first tree orders.

use std::fmt;
use std::str::FromStr;

use algoviz_core::Error;
use algoviz_structures::{Side, TreeNode, TreePath};
use serde::{Deserialize, Serialize};

use crate::pseudocode::{
    INORDER, INORDER_VISIT, POSTORDER, POSTORDER_VISIT, PREORDER, PREORDER_VISIT, Pseudocode,
};
use crate::step::{NodeRef, Phase, Step, StepSequence};

/// Where a node is visited relative to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeOrder {
    Preorder,
    Inorder,
    Postorder,
}

impl TreeOrder {
    #[must_use]
    pub const fn pseudocode(self) -> &'static Pseudocode {
        match self {
            Self::Preorder => &PREORDER,
            Self::Inorder => &INORDER,
            Self::Postorder => &POSTORDER,
        }
    }

    const fn visit_line(self) -> usize {
        match self {
            Self::Preorder => PREORDER_VISIT,
            Self::Inorder => INORDER_VISIT,
            Self::Postorder => POSTORDER_VISIT,
        }
    }
}

impl fmt::Display for TreeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pseudocode().name)
    }
}

impl FromStr for TreeOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preorder" | "pre" => Ok(Self::Preorder),
            "inorder" | "in" => Ok(Self::Inorder),
            "postorder" | "post" => Ok(Self::Postorder),
            other => Err(Error::validation(format!("unknown tree order '{other}'"))),
        }
    }
}

/// Visit every occupied node of the subtree at `start` in `order`.
///
/// An empty tree or a `start` that names no occupied slot yields an empty
/// sequence.
#[must_use]
pub fn tree_steps(root: &TreeNode, order: TreeOrder, start: &TreePath) -> StepSequence {
    let mut steps = Vec::new();
    if let Some(node) = root.get(start) {
        walk(node, start, order, &mut steps);
    }
    tracing::debug!(%order, %start, steps = steps.len(), "computed tree traversal");
    StepSequence::new(order.pseudocode(), steps)
}

fn walk(node: &TreeNode, path: &TreePath, order: TreeOrder, out: &mut Vec<Step>) {
    let Some(value) = node.value() else {
        return;
    };
    let visit = || {
        Step::new(
            NodeRef::Tree(path.clone()),
            value,
            Phase::Visit,
            order.pseudocode(),
            order.visit_line(),
        )
    };
    let descend = |side: Side, out: &mut Vec<Step>| {
        walk(node.child(side), &path.child(side), order, out);
    };

    match order {
        TreeOrder::Preorder => {
            out.push(visit());
            descend(Side::Left, out);
            descend(Side::Right, out);
        }
        TreeOrder::Inorder => {
            descend(Side::Left, out);
            out.push(visit());
            descend(Side::Right, out);
        }
        TreeOrder::Postorder => {
            descend(Side::Left, out);
            descend(Side::Right, out);
            out.push(visit());
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use algoviz_structures::NodeValue;

    fn v(n: i32) -> NodeValue {
        NodeValue::from(n)
    }

    fn two_one_three() -> TreeNode {
        TreeNode::branch(v(2), TreeNode::leaf(v(1)), TreeNode::leaf(v(3)))
    }

    fn values(order: TreeOrder) -> Vec<NodeValue> {
        tree_steps(&two_one_three(), order, &TreePath::root()).visited_values()
    }

    #[test]
    fn test_orders_on_small_tree() {
        assert_eq!(values(TreeOrder::Preorder), vec![v(2), v(1), v(3)]);
        assert_eq!(values(TreeOrder::Inorder), vec![v(1), v(2), v(3)]);
        assert_eq!(values(TreeOrder::Postorder), vec![v(1), v(3), v(2)]);
    }

    #[test]
    fn test_steps_name_their_slots() {
        let seq = tree_steps(&two_one_three(), TreeOrder::Preorder, &TreePath::root());
        let paths: Vec<String> = seq.iter().map(|s| s.node.to_string()).collect();
        assert_eq!(paths, vec!["root", "root/L", "root/R"]);
        assert!(seq.iter().all(|s| s.line == PREORDER_VISIT));
        assert_eq!(seq.pseudocode().name, "preorder");
    }

    #[test]
    fn test_subtree_start() {
        let root = TreeNode::branch(
            v(5),
            TreeNode::branch(v(3), TreeNode::leaf(v(1)), TreeNode::Empty),
            TreeNode::leaf(v(8)),
        );
        let start = TreePath::root().child(Side::Left);
        let seq = tree_steps(&root, TreeOrder::Inorder, &start);
        assert_eq!(seq.visited_values(), vec![v(1), v(3)]);
    }

    #[test]
    fn test_empty_tree_and_absent_start_yield_nothing() {
        assert!(tree_steps(&TreeNode::Empty, TreeOrder::Preorder, &TreePath::root()).is_empty());

        let missing = TreePath::root().child(Side::Left).child(Side::Left);
        assert!(tree_steps(&two_one_three(), TreeOrder::Postorder, &missing).is_empty());
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("Inorder".parse::<TreeOrder>().unwrap(), TreeOrder::Inorder);
        assert_eq!(" post ".parse::<TreeOrder>().unwrap(), TreeOrder::Postorder);
        assert!("levelorder".parse::<TreeOrder>().is_err());
    }
}
