//! Prelude module - common imports for algoviz
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use algoviz::prelude::*;
//! ```

// Re-export functional utilities
pub use itertools::Itertools;
pub use tap::{Pipe, Tap};

// Re-export error types
pub use algoviz_core::{Error, MutationExt, OptionExt, Result};

// Re-export configuration
pub use algoviz_core::{TraceLevel, VisualizerConfig};

// Re-export structures
pub use algoviz_structures::{
    BinaryTree, Bst, Edge, Graph, InsertPosition, Layout, NodeId, NodeValue, Point, Side,
    TreeNode, TreePath, TreeSnapshot,
};

// Re-export traversals
pub use algoviz_traversal::{
    BstSearch, GraphAlgorithm, GraphTraversal, Highlight, NodeRef, Phase, Pseudocode, Step,
    StepSequence, Traversal, TreeOrder, TreeTraversal,
};

// Re-export the engine
pub use algoviz_engine::{
    CancelHandle, CancelSignal, ChannelObserver, EngineConfig, FnObserver, HighlightObserver,
    NullObserver, RecordingObserver, RunController, RunOutcome, RunReport, RunTicket, StepEngine,
    StepObserver, Visualizer,
};
