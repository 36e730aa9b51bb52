//! Traversal algorithms that turn a snapshot into a deterministic,
//! fully materialised sequence of steps.
//!
//! Computing the sequence is pure and separate from pacing it out; the
//! engine crate takes care of delivery and cancellation.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod algorithm;
pub mod graph;
pub mod highlight;
pub mod pseudocode;
pub mod search;
pub mod step;
pub mod tree;

pub use algorithm::{BstSearch, GraphTraversal, Traversal, TreeTraversal};
pub use graph::{GraphAlgorithm, bfs, dfs};
pub use highlight::Highlight;
pub use pseudocode::Pseudocode;
pub use search::bst_search_steps;
pub use step::{NodeRef, Phase, Step, StepSequence};
pub use tree::{TreeOrder, tree_steps};
