//! End-to-end tests through the public facade.
//!
//! Edits go through a `Visualizer`, traversals are started against its
//! snapshot, and results are observed the way a view would observe them.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use algoviz::listing::{render_highlight, visit_trail};
use algoviz::prelude::*;
use serde_json::json;

fn fast() -> EngineConfig {
    EngineConfig::default().with_step_delay(Duration::from_millis(1))
}

fn v(n: i32) -> NodeValue {
    NodeValue::from(n)
}

#[test]
fn test_first_insert_yields_single_node_with_empty_children() {
    for tree in [
        BinaryTree::new().insert(v(7), InsertPosition::Auto).unwrap(),
        BinaryTree::new()
            .insert(v(7), InsertPosition::Left { parent: v(99) })
            .unwrap(),
    ] {
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({
                "value": 7.0,
                "children": [
                    {"value": null, "children": []},
                    {"value": null, "children": []}
                ]
            })
        );
    }

    let bst = Bst::new().insert(v(7), InsertPosition::Auto).unwrap();
    assert_eq!(bst.len(), 1);
    assert!(bst.root().left().is_empty() && bst.root().right().is_empty());
}

#[test]
fn test_auto_insert_fills_breadth_first() {
    let mut viz = Visualizer::new(BinaryTree::new(), fast());
    for n in 1..=4 {
        viz.apply(|t| t.insert(v(n), InsertPosition::Auto)).unwrap();
    }
    let root = viz.snapshot().root();
    assert_eq!(root.value(), Some(v(1)));
    assert_eq!(root.left().value(), Some(v(2)));
    assert_eq!(root.right().value(), Some(v(3)));
    assert_eq!(root.left().left().value(), Some(v(4)));
}

#[test]
fn test_tree_delete_and_bst_delete_differ() {
    // Plain tree: deleting 2 drops its whole subtree.
    let tree = BinaryTree::from_values([1, 2, 3, 4, 5].map(v)).unwrap();
    let pruned = tree.delete(v(2)).unwrap();
    assert_eq!(pruned.values(), vec![v(1), v(3)]);

    // BST: deleting a node with two children promotes its successor.
    let bst = Bst::from_values([8, 3, 10, 1, 6, 14].map(v));
    let promoted = bst.delete(v(3)).unwrap();
    assert!(promoted.is_valid());
    assert_eq!(promoted.root().left().value(), Some(v(6)));
    assert_eq!(promoted.len(), 5);

    // The source snapshots are untouched.
    assert_eq!(tree.len(), 5);
    assert_eq!(bst.len(), 6);
}

#[test]
fn test_noop_edits_can_be_folded_into_success() {
    let bst = Bst::from_values([5].map(v));
    let same = bst
        .insert(v(5), InsertPosition::Auto)
        .or_unchanged(&bst)
        .unwrap();
    assert_eq!(same, bst);
}

#[test]
fn test_graph_remove_node_through_visualizer() {
    let mut viz = Visualizer::new(Graph::new(), fast());
    let ids: Vec<NodeId> = (0..4).map(|n| viz.add_node(v(n)).unwrap()).collect();
    for (a, b) in ids.iter().zip(ids.iter().cycle().skip(1)) {
        viz.apply(|g| g.add_edge(*a, *b)).unwrap();
    }
    assert_eq!(viz.snapshot().edge_count(), 4);

    let victim = ids.get(1).copied().unwrap();
    viz.apply(|g| g.remove_node(victim)).unwrap();

    let graph = viz.snapshot();
    assert!(!graph.contains(victim));
    assert!(graph.edges().all(|e| !e.touches(victim)));
    assert!(graph.nodes().all(|n| !n.neighbors().contains(&victim)));
    assert_eq!(graph.edge_count(), 2);

    let again = viz.apply(|g| g.remove_node(victim));
    assert!(matches!(again, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn test_traversal_run_with_live_highlight() {
    let viz = Visualizer::new(
        BinaryTree::from_values([2, 1, 3].map(v)).unwrap(),
        fast(),
    );
    let recorder = Arc::new(RecordingObserver::new());
    let (observer, highlight) = HighlightObserver::new(Arc::clone(&recorder));

    let traversal = TreeTraversal::new(TreeOrder::Postorder);
    let report = viz
        .start(&traversal, Arc::new(observer))
        .await
        .finished()
        .await
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::Completed);
    let steps = recorder.steps().await;
    let values: Vec<NodeValue> = steps.iter().map(|s| s.value).collect();
    assert_eq!(values, [1, 3, 2].map(v).to_vec());

    let final_highlight = highlight.borrow().clone();
    assert_eq!(final_highlight.visited().len(), 3);
    assert_eq!(
        final_highlight.current(),
        Some(&NodeRef::Tree(TreePath::root()))
    );

    let expected = traversal.steps(viz.snapshot(), TraceLevel::Visits);
    assert_eq!(visit_trail(&expected), "1 -> 3 -> 2");
    let listing = render_highlight(expected.pseudocode(), &final_highlight);
    assert!(listing.lines().any(|l| l.starts_with('>') && l.contains("visit(node)")));
}

#[tokio::test]
async fn test_graph_walks_through_visualizer() {
    let mut viz = Visualizer::new(Graph::new(), fast());
    let ids: Vec<NodeId> = (0..4).map(|n| viz.add_node(v(n * 10)).unwrap()).collect();
    for (a, b) in [(0usize, 1usize), (1, 2), (2, 3), (3, 0)] {
        let (a, b) = (ids.get(a).copied().unwrap(), ids.get(b).copied().unwrap());
        viz.apply(|g| g.add_edge(a, b)).unwrap();
    }

    let start = ids.first().copied().unwrap();
    for (traversal, expected) in [
        (GraphTraversal::bfs(start), [0, 10, 30, 20]),
        (GraphTraversal::dfs(start), [0, 10, 20, 30]),
    ] {
        let recorder = Arc::new(RecordingObserver::new());
        let report = viz
            .start(&traversal, Arc::clone(&recorder) as Arc<dyn StepObserver>)
            .await
            .finished()
            .await
            .unwrap();
        assert!(report.is_completed());
        let values: Vec<NodeValue> = recorder.steps().await.iter().map(|s| s.value).collect();
        assert_eq!(values, expected.map(v).to_vec());
    }
}

#[tokio::test]
async fn test_bst_search_run() {
    let viz = Visualizer::new(Bst::from_values([50, 30, 70, 60].map(v)), fast());
    let recorder = Arc::new(RecordingObserver::new());

    let report = viz
        .start(&BstSearch::new(v(60)), Arc::clone(&recorder) as Arc<dyn StepObserver>)
        .await
        .finished()
        .await
        .unwrap();

    assert_eq!(report.total, 4);
    let trace: Vec<(Phase, NodeValue)> = recorder
        .steps()
        .await
        .iter()
        .map(|s| (s.phase, s.value))
        .collect();
    assert_eq!(
        trace,
        vec![
            (Phase::Compare, v(50)),
            (Phase::Compare, v(70)),
            (Phase::Compare, v(60)),
            (Phase::Visit, v(60)),
        ]
    );
}

#[tokio::test]
async fn test_detailed_config_from_file_drives_backtracks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("algoviz.toml");
    std::fs::write(&path, "step_delay = 1\ntrace_level = \"detailed\"\n").unwrap();
    let config = VisualizerConfig::from_file(&path).unwrap();
    assert_eq!(config.trace_level, TraceLevel::Detailed);

    let mut viz = Visualizer::from_config(Graph::new(), &config);
    let a = viz.add_node(v(1)).unwrap();
    let b = viz.add_node(v(2)).unwrap();
    viz.apply(|g| g.add_edge(a, b)).unwrap();

    let recorder = Arc::new(RecordingObserver::new());
    viz.start(&GraphTraversal::dfs(a), Arc::clone(&recorder) as Arc<dyn StepObserver>)
        .await
        .finished()
        .await
        .unwrap();

    let phases: Vec<Phase> = recorder.steps().await.iter().map(|s| s.phase).collect();
    assert_eq!(
        phases,
        vec![Phase::Visit, Phase::Visit, Phase::Backtrack, Phase::Backtrack]
    );
}
