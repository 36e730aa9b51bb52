//! Undirected graphs stored as adjacency lists.
//!
//! Node ids are allocated monotonically and never reused. Edges are
//! symmetric: adding `(a, b)` lists `b` among `a`'s neighbours and `a` among
//! `b`'s. Collections are persistent, so cloning a snapshot is cheap and
//! every mutation returns a new snapshot sharing structure with the old one.

use std::fmt;

use algoviz_core::{Error, OptionExt, Result};
use im::{OrdMap, OrdSet, Vector};
use itertools::Itertools;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::value::NodeValue;

/// Identifier of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unordered pair of node ids, stored smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge(NodeId, NodeId);

impl Edge {
    /// Normalize a pair of endpoints.
    #[must_use]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    /// Both endpoints, smaller first.
    #[must_use]
    pub const fn endpoints(self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }

    /// Check if `id` is one of the endpoints.
    #[must_use]
    pub fn touches(self, id: NodeId) -> bool {
        self.0 == id || self.1 == id
    }

    /// Check if both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(self) -> bool {
        self.0 == self.1
    }
}

/// A 2D point in view coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Presentation state of a node.
///
/// Owned by the renderer; it never takes part in equality or traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Layout {
    /// Last position computed by the layout engine.
    pub position: Option<Point>,
    /// Position fixed by a drag, if any.
    pub pinned: Option<Point>,
    /// Whether the view currently shows the node as visited.
    pub visited: bool,
}

/// A graph node.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    id: NodeId,
    value: NodeValue,
    neighbors: Vector<NodeId>,
    layout: Layout,
}

impl GraphNode {
    fn new(id: NodeId, value: NodeValue) -> Self {
        Self {
            id,
            value,
            neighbors: Vector::new(),
            layout: Layout::default(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub const fn value(&self) -> NodeValue {
        self.value
    }

    /// Neighbours in the order their edges were added.
    #[must_use]
    pub const fn neighbors(&self) -> &Vector<NodeId> {
        &self.neighbors
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    fn unlink(&mut self, other: NodeId) {
        self.neighbors.retain(|n| *n != other);
    }
}

impl PartialEq for GraphNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.value == other.value && self.neighbors == other.neighbors
    }
}

impl Eq for GraphNode {}

/// A graph snapshot.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: OrdMap<NodeId, GraphNode>,
    edges: OrdSet<Edge>,
    next_id: u32,
}

impl Graph {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node holding `value`, returning the new snapshot and the node's id.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` once the id space is exhausted.
    pub fn add_node(&self, value: NodeValue) -> Result<(Self, NodeId)> {
        let id = NodeId(self.next_id);
        let next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| Error::invariant_violation("node id space exhausted"))?;

        let mut next = self.clone();
        next.nodes.insert(id, GraphNode::new(id, value));
        next.next_id = next_id;
        debug!(node = %id, %value, "Added node");
        Ok((next, id))
    }

    /// Connect `a` and `b`.
    ///
    /// # Errors
    ///
    /// `NotFound` if either node is absent, `NoOp` if the edge already exists.
    pub fn add_edge(&self, a: NodeId, b: NodeId) -> Result<Self> {
        self.require(a)?;
        self.require(b)?;
        let edge = Edge::new(a, b);
        if self.edges.contains(&edge) {
            return Err(Error::noop(format!("edge {a}-{b} already exists")));
        }

        let mut next = self.clone();
        next.edges.insert(edge);
        if let Some(node) = next.nodes.get_mut(&a) {
            node.neighbors.push_back(b);
        }
        if !edge.is_self_loop() {
            if let Some(node) = next.nodes.get_mut(&b) {
                node.neighbors.push_back(a);
            }
        }
        debug!(from = %a, to = %b, "Added edge");
        Ok(next)
    }

    /// Disconnect `a` and `b`.
    ///
    /// # Errors
    ///
    /// `NotFound` if either node or the edge is absent.
    pub fn remove_edge(&self, a: NodeId, b: NodeId) -> Result<Self> {
        self.require(a)?;
        self.require(b)?;
        let edge = Edge::new(a, b);
        if !self.edges.contains(&edge) {
            return Err(Error::not_found(format!("edge {a}-{b}")));
        }

        let mut next = self.clone();
        next.edges.remove(&edge);
        if let Some(node) = next.nodes.get_mut(&a) {
            node.unlink(b);
        }
        if let Some(node) = next.nodes.get_mut(&b) {
            node.unlink(a);
        }
        debug!(from = %a, to = %b, "Removed edge");
        Ok(next)
    }

    /// Remove a node together with every edge and neighbour entry referencing it.
    ///
    /// # Errors
    ///
    /// `NotFound` if the node is absent.
    pub fn remove_node(&self, id: NodeId) -> Result<Self> {
        self.require(id)?;

        let (touching, kept): (Vec<Edge>, Vec<Edge>) =
            self.edges.iter().copied().partition(|e| e.touches(id));

        let mut next = self.clone();
        next.nodes.remove(&id);
        next.edges = kept.into_iter().collect();
        for edge in touching {
            let (a, b) = edge.endpoints();
            let other = if a == id { b } else { a };
            if let Some(node) = next.nodes.get_mut(&other) {
                node.unlink(id);
            }
        }
        debug!(node = %id, "Removed node");
        Ok(next)
    }

    /// Replace the value of a node.
    ///
    /// # Errors
    ///
    /// `NotFound` if the node is absent, `NoOp` if the value is unchanged.
    pub fn update_node(&self, id: NodeId, value: NodeValue) -> Result<Self> {
        let current = self.require(id)?;
        if current.value == value {
            return Err(Error::noop(format!("node {id} already holds {value}")));
        }

        let mut next = self.clone();
        if let Some(node) = next.nodes.get_mut(&id) {
            node.value = value;
        }
        debug!(node = %id, %value, "Updated node");
        Ok(next)
    }

    /// Replace the presentation state of a node.
    ///
    /// # Errors
    ///
    /// `NotFound` if the node is absent.
    pub fn set_layout(&self, id: NodeId, layout: Layout) -> Result<Self> {
        self.require(id)?;
        let mut next = self.clone();
        if let Some(node) = next.nodes.get_mut(&id) {
            node.layout = layout;
        }
        Ok(next)
    }

    /// Ids of every node holding `value`, ascending.
    #[must_use]
    pub fn find_by_value(&self, value: NodeValue) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|node| node.value == value)
            .map(GraphNode::id)
            .collect()
    }

    /// The single node holding `value`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no node holds it, `Validation` if several do.
    pub fn resolve_value(&self, value: NodeValue) -> Result<NodeId> {
        match self.find_by_value(value).as_slice() {
            [] => Err(Error::not_found(format!("node with value {value}"))),
            [id] => Ok(*id),
            ids => Err(Error::validation(format!(
                "value {value} is ambiguous: held by nodes {}",
                ids.iter().join(", ")
            ))),
        }
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Edges in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    #[must_use]
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Neighbours of `id` in ascending id order, empty if the node is absent.
    #[must_use]
    pub fn sorted_neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&id)
            .map(|node| node.neighbors.iter().copied().sorted().dedup().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The id the next added node will receive.
    #[must_use]
    pub const fn next_id(&self) -> NodeId {
        NodeId(self.next_id)
    }

    fn require(&self, id: NodeId) -> Result<&GraphNode> {
        self.nodes.get(&id).or_not_found(|| format!("node {id}"))
    }
}

/// Structural equality: nodes (without layout) and edges.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Eq for Graph {}

/// Serializes as `{"nodes": [...], "edges": [[a, b], ...]}`.
impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let nodes: Vec<&GraphNode> = self.nodes.values().collect();
        let edges: Vec<Edge> = self.edges.iter().copied().collect();
        let mut state = serializer.serialize_struct("Graph", 2)?;
        state.serialize_field("nodes", &nodes)?;
        state.serialize_field("edges", &edges)?;
        state.end()
    }
}
