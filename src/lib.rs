//! # algoviz
//!
//! Tree and graph structures with step-by-step traversal playback.
//!
//! Structures are immutable snapshots edited through a [`Visualizer`];
//! traversals compute a deterministic [`StepSequence`] which the engine
//! delivers to a [`StepObserver`] at the configured pace.
//!
//! ```no_run
//! use std::sync::Arc;
//! use algoviz::prelude::*;
//!
//! # async fn demo() -> algoviz::Result<()> {
//! let mut viz = Visualizer::from_config(BinaryTree::new(), &VisualizerConfig::default());
//! for n in [1, 2, 3] {
//!     viz.apply(|t| t.insert(NodeValue::from(n), InsertPosition::Auto))?;
//! }
//! let report = viz
//!     .start(&TreeTraversal::new(TreeOrder::Inorder), Arc::new(NullObserver))
//!     .await
//!     .finished()
//!     .await;
//! assert!(report.is_some_and(|r| r.is_completed()));
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod listing;
pub mod prelude;
pub mod telemetry;

// Re-export all crates
pub use algoviz_core;
pub use algoviz_engine;
pub use algoviz_structures;
pub use algoviz_traversal;

pub use algoviz_core::{Error, MutationExt, Result, TraceLevel, VisualizerConfig};
pub use algoviz_engine::{
    CancelHandle, CancelSignal, ChannelObserver, EngineConfig, FnObserver, HighlightObserver,
    NullObserver, RecordingObserver, RunController, RunId, RunOutcome, RunReport, RunTicket,
    StepEngine, StepObserver, Visualizer,
};
pub use algoviz_structures::{
    BinaryTree, Bst, Graph, InsertPosition, NodeId, NodeValue, TreePath, TreeSnapshot,
};
pub use algoviz_traversal::{
    BstSearch, GraphTraversal, Highlight, Step, StepSequence, Traversal, TreeOrder, TreeTraversal,
};
