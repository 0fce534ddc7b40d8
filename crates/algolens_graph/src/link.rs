// SPDX-License-Identifier: MIT OR Apache-2.0
//! Link (edge) definitions for the graph model.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Direction assignment for an existing link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkDirection {
    /// target -> source only
    Left,
    /// source -> target only
    Right,
    /// Both directions
    Both,
}

/// An edge between two nodes.
///
/// Links are always stored `source < target`; the arrowheads are carried
/// separately by the two flags, so one link can represent a single- or
/// double-headed edge. `right` means source -> target, `left` means
/// target -> source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Endpoint with the smaller id
    pub source: NodeId,
    /// Endpoint with the larger id
    pub target: NodeId,
    /// target -> source arrowhead
    pub left: bool,
    /// source -> target arrowhead
    pub right: bool,
    /// Display color override (RGB)
    pub color: Option<[u8; 3]>,
}

impl Link {
    /// Create a link between a normalized endpoint pair with no arrowheads
    pub fn new(source: NodeId, target: NodeId) -> Self {
        debug_assert!(source < target);
        Self {
            source,
            target,
            left: false,
            right: false,
            color: None,
        }
    }

    /// Check if this link touches a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.source == node_id || self.target == node_id
    }

    /// Overwrite both arrowhead flags
    pub fn set_direction(&mut self, direction: LinkDirection) {
        match direction {
            LinkDirection::Left => {
                self.left = true;
                self.right = false;
            }
            LinkDirection::Right => {
                self.left = false;
                self.right = true;
            }
            LinkDirection::Both => {
                self.left = true;
                self.right = true;
            }
        }
    }
}
