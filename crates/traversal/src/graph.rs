//! Graph traversals.
//!
//! Both walks look at neighbours in ascending id order so that a given
//! snapshot and start always produce the same sequence.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use algoviz_core::{Error, TraceLevel};
use algoviz_structures::{Graph, NodeId};
use serde::{Deserialize, Serialize};

use crate::pseudocode::{BFS, BFS_VISIT, DFS, DFS_BACKTRACK, DFS_VISIT, Pseudocode};
use crate::step::{NodeRef, Phase, Step, StepSequence};

/// The graph walks on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphAlgorithm {
    Dfs,
    Bfs,
}

impl GraphAlgorithm {
    #[must_use]
    pub const fn pseudocode(self) -> &'static Pseudocode {
        match self {
            Self::Dfs => &DFS,
            Self::Bfs => &BFS,
        }
    }
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pseudocode().name)
    }
}

impl FromStr for GraphAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Self::Dfs),
            "bfs" => Ok(Self::Bfs),
            other => Err(Error::validation(format!(
                "unknown graph algorithm '{other}'"
            ))),
        }
    }
}

fn step_for(
    graph: &Graph,
    id: NodeId,
    phase: Phase,
    code: &'static Pseudocode,
    line: usize,
) -> Option<Step> {
    graph
        .node(id)
        .map(|node| Step::new(NodeRef::Graph(id), node.value(), phase, code, line))
}

/// Depth-first search from `start`.
///
/// Emits a `visit` the first time each node is reached. With
/// [`TraceLevel::Detailed`] a `backtrack` step follows once a node's
/// neighbours are exhausted.
#[must_use]
pub fn dfs(graph: &Graph, start: NodeId, level: TraceLevel) -> StepSequence {
    let mut steps = Vec::new();
    let Some(first) = step_for(graph, start, Phase::Visit, &DFS, DFS_VISIT) else {
        return StepSequence::empty(&DFS);
    };
    steps.push(first);

    let mut visited = HashSet::from([start]);
    // Explicit stack of (node, remaining neighbours) mirrors the recursion.
    let mut stack = vec![(start, graph.sorted_neighbors(start).into_iter())];

    while let Some((current, neighbors)) = stack.last_mut() {
        let current = *current;
        match neighbors.find(|n| !visited.contains(n)) {
            Some(next) => {
                visited.insert(next);
                steps.extend(step_for(graph, next, Phase::Visit, &DFS, DFS_VISIT));
                stack.push((next, graph.sorted_neighbors(next).into_iter()));
            }
            None => {
                stack.pop();
                if level == TraceLevel::Detailed {
                    steps.extend(step_for(
                        graph,
                        current,
                        Phase::Backtrack,
                        &DFS,
                        DFS_BACKTRACK,
                    ));
                }
            }
        }
    }

    tracing::debug!(%start, %level, steps = steps.len(), "computed dfs");
    StepSequence::new(&DFS, steps)
}

/// Breadth-first search from `start`, one `visit` per reachable node in
/// level order.
#[must_use]
pub fn bfs(graph: &Graph, start: NodeId) -> StepSequence {
    if !graph.contains(start) {
        return StepSequence::empty(&BFS);
    }

    let mut steps = Vec::new();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        steps.extend(step_for(graph, current, Phase::Visit, &BFS, BFS_VISIT));
        for neighbor in graph.sorted_neighbors(current) {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(%start, steps = steps.len(), "computed bfs");
    StepSequence::new(&BFS, steps)
}
