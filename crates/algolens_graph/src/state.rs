// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot of the graph during traversal playback.

use crate::graph::Graph;
use crate::link::Link;
use crate::node::{Node, NodeColor, NodeId};
use algolens_player::{Frame, LineRef, StateLog};
use serde::{Deserialize, Serialize};

/// A full snapshot of graph traversal progress at one discrete step.
///
/// All data is owned, so `Clone` is a deep copy; every frame appended to
/// a log is self-contained and playback can jump anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphState {
    /// Nodes in insertion order
    pub nodes: Vec<Node>,
    /// Links in insertion order
    pub links: Vec<Link>,
    /// Short status line for this step
    pub status: String,
    /// Pseudocode line(s) this step corresponds to
    pub line_ref: LineRef,
    /// Free-form log text
    pub log_message: String,
}

impl GraphState {
    /// Snapshot the current graph with no status text
    pub fn snapshot(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes().cloned().collect(),
            links: graph.links().cloned().collect(),
            status: String::new(),
            line_ref: LineRef::None,
            log_message: String::new(),
        }
    }

    /// Look up a node in the snapshot by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Recolor a node in the snapshot
    pub fn set_color(&mut self, id: NodeId, color: NodeColor) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.color = color;
        }
    }

    /// Append a deep copy of this snapshot to a log
    pub fn record(&self, log: &mut StateLog<GraphState>) {
        log.push(self.clone());
    }
}

impl Frame for GraphState {
    fn status(&self) -> &str {
        &self.status
    }

    fn log_message(&self) -> &str {
        &self.log_message
    }

    fn line_ref(&self) -> &LineRef {
        &self.line_ref
    }
}
