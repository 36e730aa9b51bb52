//! Highlight state derived from a step stream.

use serde::Serialize;

use crate::step::{NodeRef, Phase, Step};

/// What a view highlights while a traversal runs: the active node and
/// pseudocode line, plus every node visited so far in visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    current: Option<NodeRef>,
    line: Option<usize>,
    visited: Vec<NodeRef>,
}

impl Highlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one step into the state.
    pub fn apply(&mut self, step: &Step) {
        self.current = Some(step.node.clone());
        self.line = Some(step.line);
        if step.phase == Phase::Visit && !self.visited.contains(&step.node) {
            self.visited.push(step.node.clone());
        }
    }

    /// Builder form of [`Highlight::apply`].
    #[must_use]
    pub fn with(mut self, step: &Step) -> Self {
        self.apply(step);
        self
    }

    #[must_use]
    pub const fn current(&self) -> Option<&NodeRef> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    #[must_use]
    pub fn visited(&self) -> &[NodeRef] {
        &self.visited
    }

    #[must_use]
    pub fn is_visited(&self, node: &NodeRef) -> bool {
        self.visited.contains(node)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl<'a> FromIterator<&'a Step> for Highlight {
    fn from_iter<I: IntoIterator<Item = &'a Step>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}
