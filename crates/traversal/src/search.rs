//! Binary search tree lookup.

use algoviz_structures::{Bst, NodeValue};

use crate::pseudocode::{BST_COMPARE, BST_FOUND, BST_SEARCH};
use crate::step::{NodeRef, Phase, Step, StepSequence};

/// Look up `target`, emitting one `compare` step per node on the
/// comparison path and a final `visit` step when the target is found.
#[must_use]
pub fn bst_search_steps(tree: &Bst, target: NodeValue) -> StepSequence {
    let mut steps = Vec::new();
    let mut found = None;

    for (path, value) in tree.search_path(target) {
        // The path ends at an empty slot when the target is absent.
        let Some(value) = value else { break };
        steps.push(Step::new(
            NodeRef::Tree(path.clone()),
            value,
            Phase::Compare,
            &BST_SEARCH,
            BST_COMPARE,
        ));
        if value == target {
            found = Some((path, value));
        }
    }

    if let Some((path, value)) = found {
        steps.push(Step::new(
            NodeRef::Tree(path),
            value,
            Phase::Visit,
            &BST_SEARCH,
            BST_FOUND,
        ));
    }

    tracing::debug!(%target, steps = steps.len(), "computed bst search");
    StepSequence::new(&BST_SEARCH, steps)
}
