//! Steps and step sequences.

use std::fmt;

use algoviz_structures::{NodeId, NodeValue, TreePath};
use serde::Serialize;

use crate::pseudocode::Pseudocode;

/// What happens to a node in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The node is visited (emitted once per node).
    Visit,
    /// The node's value is compared against a target.
    Compare,
    /// The algorithm is done with the node and returns to its caller.
    Backtrack,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visit => write!(f, "visit"),
            Self::Compare => write!(f, "compare"),
            Self::Backtrack => write!(f, "backtrack"),
        }
    }
}

/// Identifies the node a step refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum NodeRef {
    /// A tree slot.
    Tree(TreePath),
    /// A graph node.
    Graph(NodeId),
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree(path) => write!(f, "{path}"),
            Self::Graph(id) => write!(f, "node {id}"),
        }
    }
}

/// One discrete event of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The node the step refers to.
    pub node: NodeRef,
    /// The node's value at the time the sequence was computed.
    pub value: NodeValue,
    /// What happens to the node.
    pub phase: Phase,
    /// Index of the pseudocode line this step corresponds to.
    pub line: usize,
    /// Text of that line.
    pub label: &'static str,
}

impl Step {
    /// Create a step pointing at `line` of `code`.
    #[must_use]
    pub fn new(
        node: NodeRef,
        value: NodeValue,
        phase: Phase,
        code: &'static Pseudocode,
        line: usize,
    ) -> Self {
        Self {
            node,
            value,
            phase,
            line,
            label: code.line(line),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) at line {}",
            self.phase, self.node, self.value, self.line
        )
    }
}

/// The full, ordered output of one traversal over one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSequence {
    pseudocode: &'static Pseudocode,
    steps: Vec<Step>,
}

impl StepSequence {
    #[must_use]
    pub const fn new(pseudocode: &'static Pseudocode, steps: Vec<Step>) -> Self {
        Self { pseudocode, steps }
    }

    /// A sequence with no steps.
    #[must_use]
    pub const fn empty(pseudocode: &'static Pseudocode) -> Self {
        Self::new(pseudocode, Vec::new())
    }

    /// The listing every step's `line` refers to.
    #[must_use]
    pub const fn pseudocode(&self) -> &'static Pseudocode {
        self.pseudocode
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Only the `visit` steps, in order.
    pub fn visits(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| s.phase == Phase::Visit)
    }

    /// Values of the visited nodes, in visit order.
    #[must_use]
    pub fn visited_values(&self) -> Vec<NodeValue> {
        self.visits().map(|s| s.value).collect()
    }

    /// Visited nodes, in visit order.
    #[must_use]
    pub fn visited_nodes(&self) -> Vec<NodeRef> {
        self.visits().map(|s| s.node.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl IntoIterator for StepSequence {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
