//! The visualizer: owner of the current snapshot and its run controller.

use std::sync::Arc;

use algoviz_core::{Result, VisualizerConfig};
use algoviz_structures::{Graph, NodeId, NodeValue};
use algoviz_traversal::Traversal;
use tracing::{debug, info, warn};

use crate::controller::{RunController, RunTicket};
use crate::engine::{EngineConfig, StepEngine};
use crate::observer::StepObserver;
use crate::report::RunReport;

/// Holds the current snapshot of one structure and runs traversals over it.
///
/// Edits replace the snapshot; a running traversal keeps working on the
/// snapshot it was started with.
pub struct Visualizer<S> {
    snapshot: S,
    config: EngineConfig,
    controller: RunController,
}

impl<S> Visualizer<S>
where
    S: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new(snapshot: S, config: EngineConfig) -> Self {
        Self {
            snapshot,
            config,
            controller: RunController::new(StepEngine::new(config)),
        }
    }

    #[must_use]
    pub fn from_config(snapshot: S, config: &VisualizerConfig) -> Self {
        Self::new(snapshot, EngineConfig::from(config))
    }

    /// The current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &S {
        &self.snapshot
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn controller(&self) -> &RunController {
        &self.controller
    }

    /// Apply an edit to the current snapshot.
    ///
    /// On success the result becomes the current snapshot. On any error,
    /// `NoOp` included, the current snapshot is kept and the error returned.
    pub fn apply<F>(&mut self, edit: F) -> Result<&S>
    where
        F: FnOnce(&S) -> Result<S>,
    {
        match edit(&self.snapshot) {
            Ok(next) => {
                self.snapshot = next;
                debug!("Applied edit");
                Ok(&self.snapshot)
            }
            Err(e) if e.is_noop() => {
                debug!(reason = %e, "Edit left the structure unchanged");
                Err(e)
            }
            Err(e) => {
                warn!(error = %e, "Rejected edit");
                Err(e)
            }
        }
    }

    /// Start `traversal` over a frozen copy of the current snapshot.
    ///
    /// Any run already in flight is cancelled and awaited first.
    pub async fn start<T>(&self, traversal: &T, observer: Arc<dyn StepObserver>) -> RunTicket
    where
        T: Traversal<S> + ?Sized,
    {
        let frozen = self.snapshot.clone();
        let steps = traversal.steps(&frozen, self.config.trace_level);
        info!(
            algorithm = traversal.name(),
            steps = steps.len(),
            trace_level = %self.config.trace_level,
            "Starting traversal"
        );
        self.controller.start(steps, observer).await
    }

    /// Cancel the in-flight run, if any.
    pub async fn cancel(&self) -> Option<RunReport> {
        self.controller.cancel().await
    }
}

impl Visualizer<Graph> {
    /// Add a node and return its id.
    pub fn add_node(&mut self, value: NodeValue) -> Result<NodeId> {
        let (next, id) = self
            .snapshot
            .add_node(value)
            .inspect_err(|e| warn!(error = %e, "Rejected node"))?;
        self.snapshot = next;
        debug!(node = %id, %value, "Added node");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::observer::RecordingObserver;
    use algoviz_core::Error;
    use algoviz_structures::{Bst, InsertPosition, TreeSnapshot};
    use algoviz_traversal::{GraphTraversal, TreeOrder, TreeTraversal};
    use std::time::Duration;

    fn config() -> EngineConfig {
        EngineConfig::default().with_step_delay(Duration::from_millis(1))
    }

    fn insert(n: i32) -> impl FnOnce(&Bst) -> Result<Bst> {
        move |tree| tree.insert(NodeValue::from(n), InsertPosition::Auto)
    }

    #[test]
    fn test_apply_keeps_snapshot_on_noop_and_error() {
        let mut viz = Visualizer::new(Bst::new(), config());
        viz.apply(insert(5)).unwrap();
        viz.apply(insert(3)).unwrap();

        let before = viz.snapshot().clone();
        let dup = viz.apply(insert(5));
        assert!(dup.unwrap_err().is_noop());
        assert_eq!(viz.snapshot(), &before);

        let missing = viz.apply(|t| t.delete(NodeValue::from(42)));
        assert!(matches!(missing, Err(Error::NotFound { .. })));
        assert_eq!(viz.snapshot(), &before);
    }

    #[test]
    fn test_graph_add_node_returns_ids() {
        let mut viz = Visualizer::new(Graph::new(), config());
        let a = viz.add_node(NodeValue::from(1)).unwrap();
        let b = viz.add_node(NodeValue::from(1)).unwrap();
        assert_ne!(a, b);
        assert_eq!(viz.snapshot().len(), 2);

        viz.apply(|g| g.add_edge(a, b)).unwrap();
        assert!(viz.snapshot().has_edge(b, a));
    }

    #[tokio::test]
    async fn test_start_runs_on_frozen_snapshot() {
        let mut viz = Visualizer::new(
            Bst::from_values([2, 1, 3].map(NodeValue::from)),
            EngineConfig::default().with_step_delay(Duration::from_millis(30)),
        );
        let recorder = Arc::new(RecordingObserver::new());

        let ticket = viz
            .start(&TreeTraversal::new(TreeOrder::Inorder), Arc::clone(&recorder) as Arc<dyn StepObserver>)
            .await;
        // Edit while the run is in flight.
        viz.apply(insert(4)).unwrap();

        let report = ticket.finished().await.unwrap();
        assert!(report.is_completed());
        assert_eq!(report.total, 3);
        let values: Vec<NodeValue> = recorder.steps().await.iter().map(|s| s.value).collect();
        assert_eq!(values, [1, 2, 3].map(NodeValue::from).to_vec());
        assert_eq!(viz.snapshot().len(), 4);
    }

    #[tokio::test]
    async fn test_start_on_absent_graph_node_completes_empty() {
        let viz = Visualizer::new(Graph::new(), config());
        let report = viz
            .start(&GraphTraversal::dfs(NodeId::new(9)), Arc::new(RecordingObserver::new()))
            .await
            .finished()
            .await
            .unwrap();
        assert!(report.is_completed());
        assert_eq!(report.total, 0);
    }
}
