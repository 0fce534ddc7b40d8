// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the graph model.

use serde::{Deserialize, Serialize};

/// Unique identifier for a node.
///
/// Nodes are known by id, not by index: ids are assigned sequentially by
/// the graph and are never reused after a deletion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u32);

/// Display role of a node during traversal playback.
///
/// The renderer maps roles to its own palette; the model only records
/// what each color *means* at this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeColor {
    /// Not yet touched by the traversal
    #[default]
    Plain,
    /// The traversal's source vertex
    Source,
    /// Discovered and queued, not yet visited
    Frontier,
    /// Visited (dequeued and expanded)
    Visited,
}

/// A node in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node id
    pub id: NodeId,
    /// Whether the node carries a self-loop
    pub reflexive: bool,
    /// Current display role
    pub color: NodeColor,
}

impl Node {
    /// Create a plain, non-reflexive node
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            reflexive: false,
            color: NodeColor::Plain,
        }
    }
}
