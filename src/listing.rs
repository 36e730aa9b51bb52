//! Plain-text rendering of pseudocode and traversal progress.
//!
//! A view shows the algorithm's listing with the active line marked, plus
//! the values visited so far.

use algoviz_traversal::{Highlight, Phase, Pseudocode, Step, StepSequence};
use itertools::Itertools;
use tap::Pipe;

const ACTIVE: &str = ">";
const IDLE: &str = " ";

/// The listing, one numbered line per row, with `active` marked.
#[must_use]
pub fn render_listing(code: &Pseudocode, active: Option<usize>) -> String {
    code.lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let marker = if active == Some(index) { ACTIVE } else { IDLE };
            format!("{marker} {index:>2} {line}")
        })
        .join("\n")
}

/// The listing as it looks under `highlight`.
#[must_use]
pub fn render_highlight(code: &Pseudocode, highlight: &Highlight) -> String {
    render_listing(code, highlight.line())
}

/// One human-readable line describing `step`.
#[must_use]
pub fn narrate(step: &Step) -> String {
    let verb = match step.phase {
        Phase::Visit => "visit",
        Phase::Compare => "compare with",
        Phase::Backtrack => "leave",
    };
    format!("{verb} {} ({}): {}", step.value, step.node, step.label.trim())
}

/// Visited values in order, e.g. `1 -> 2 -> 3`.
#[must_use]
pub fn visit_trail(steps: &StepSequence) -> String {
    steps
        .visited_values()
        .iter()
        .join(" -> ")
        .pipe(|trail| if trail.is_empty() { "(nothing visited)".to_owned() } else { trail })
}

/// Every step narrated, one per line.
#[must_use]
pub fn transcript(steps: &StepSequence) -> String {
    steps.iter().map(narrate).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_structures::{NodeValue, TreeNode, TreePath};
    use algoviz_traversal::{TreeOrder, pseudocode::INORDER, tree_steps};

    fn sample() -> StepSequence {
        let root = TreeNode::branch(
            NodeValue::from(2),
            TreeNode::leaf(NodeValue::from(1)),
            TreeNode::leaf(NodeValue::from(3)),
        );
        tree_steps(&root, TreeOrder::Inorder, &TreePath::root())
    }

    #[test]
    fn test_listing_marks_active_line() {
        let listing = render_listing(&INORDER, Some(3));
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), INORDER.lines.len());
        assert_eq!(lines.get(3), Some(&">  3   visit(node)"));
        assert_eq!(lines.iter().filter(|l| l.starts_with(ACTIVE)).count(), 1);
    }

    #[test]
    fn test_highlight_follows_last_step() {
        let seq = sample();
        let highlight: Highlight = seq.iter().collect();
        assert_eq!(render_highlight(&INORDER, &highlight), render_listing(&INORDER, Some(3)));
        assert_eq!(render_listing(&INORDER, None).matches(ACTIVE).count(), 0);
    }

    #[test]
    fn test_trail_and_transcript() {
        let seq = sample();
        assert_eq!(visit_trail(&seq), "1 -> 2 -> 3");
        assert_eq!(visit_trail(&StepSequence::empty(&INORDER)), "(nothing visited)");

        let transcript = transcript(&seq);
        assert_eq!(transcript.lines().next(), Some("visit 1 (root/L): visit(node)"));
        assert_eq!(transcript.lines().count(), 3);
    }
}
