// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes and links.

use crate::link::{Link, LinkDirection};
use crate::node::{Node, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An editable directed graph.
///
/// Nodes live in insertion order keyed by id; links keep the invariant
/// `source < target` with direction carried by their flags. Self-loops
/// are rejected - reflexivity is a flag on the node instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    nodes: IndexMap<NodeId, Node>,
    links: Vec<Link>,
    next_id: u32,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the next sequential id
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(id));
        id
    }

    /// Remove a node and splice out every link touching it
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.links.retain(|l| !l.involves_node(node_id));
        self.nodes.shift_remove(&node_id)
    }

    /// Get a node by id
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by id
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Check whether a node exists
    pub fn contains(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Get all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node ids in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// The endpoint pair is normalized to `source < target` and the
    /// arrowhead flag pointing from -> to is set; if a link between the
    /// pair already exists the flag is merged into it, so connecting both
    /// ways yields one double-headed link.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if !self.contains(from) {
            return Err(GraphError::NodeNotFound(from));
        }
        if !self.contains(to) {
            return Err(GraphError::NodeNotFound(to));
        }

        let (source, target, rightward) = if from < to {
            (from, to, true)
        } else {
            (to, from, false)
        };

        let index = match self
            .links
            .iter()
            .position(|l| l.source == source && l.target == target)
        {
            Some(existing) => existing,
            None => {
                self.links.push(Link::new(source, target));
                self.links.len() - 1
            }
        };
        let link = &mut self.links[index];
        if rightward {
            link.right = true;
        } else {
            link.left = true;
        }
        Ok(())
    }

    /// Overwrite the direction flags of an existing link
    pub fn set_direction(
        &mut self,
        a: NodeId,
        b: NodeId,
        direction: LinkDirection,
    ) -> Result<(), GraphError> {
        let (source, target) = normalize(a, b);
        let link = self
            .link_mut(source, target)
            .ok_or(GraphError::LinkNotFound(source, target))?;
        link.set_direction(direction);
        Ok(())
    }

    /// Remove the link between two nodes
    pub fn remove_link(&mut self, a: NodeId, b: NodeId) -> Option<Link> {
        let (source, target) = normalize(a, b);
        let index = self
            .links
            .iter()
            .position(|l| l.source == source && l.target == target)?;
        Some(self.links.remove(index))
    }

    /// Toggle the self-loop flag of a node
    pub fn toggle_reflexive(&mut self, node_id: NodeId) -> Result<bool, GraphError> {
        let node = self
            .nodes
            .get_mut(&node_id)
            .ok_or(GraphError::NodeNotFound(node_id))?;
        node.reflexive = !node.reflexive;
        Ok(node.reflexive)
    }

    /// Get the link between two nodes, if any
    pub fn link(&self, a: NodeId, b: NodeId) -> Option<&Link> {
        let (source, target) = normalize(a, b);
        self.links
            .iter()
            .find(|l| l.source == source && l.target == target)
    }

    fn link_mut(&mut self, source: NodeId, target: NodeId) -> Option<&mut Link> {
        self.links
            .iter_mut()
            .find(|l| l.source == source && l.target == target)
    }

    /// Get all links
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Build adjacency lists from the link flags.
    ///
    /// Links are walked sorted by (source, target); a `right` flag
    /// contributes source -> target and a `left` flag target -> source,
    /// so neighbor order is deterministic for a given graph.
    pub fn adjacency(&self) -> IndexMap<NodeId, Vec<NodeId>> {
        let mut adjacency: IndexMap<NodeId, Vec<NodeId>> =
            self.nodes.keys().map(|id| (*id, Vec::new())).collect();

        let mut sorted: Vec<&Link> = self.links.iter().collect();
        sorted.sort_by_key(|l| (l.source, l.target));

        for link in sorted {
            if link.right {
                if let Some(out) = adjacency.get_mut(&link.source) {
                    out.push(link.target);
                }
            }
            if link.left {
                if let Some(out) = adjacency.get_mut(&link.target) {
                    out.push(link.source);
                }
            }
        }
        adjacency
    }

    /// Build the 0/1 adjacency matrix, rows/columns in node insertion
    /// order. Kept for parity with the matrix view of the editor; the
    /// traversal itself works off [`Graph::adjacency`].
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let index_of: IndexMap<NodeId, usize> = self
            .nodes
            .keys()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();
        let n = self.nodes.len();
        let mut matrix = vec![vec![0u8; n]; n];

        for link in &self.links {
            let (s, t) = (index_of[&link.source], index_of[&link.target]);
            if link.left {
                matrix[t][s] = 1;
            }
            if link.right {
                matrix[s][t] = 1;
            }
        }

        for row in &matrix {
            tracing::debug!(?row, "adjacency matrix");
        }
        matrix
    }
}

fn normalize(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Error for graph editing operations
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Node not found
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// No link between the two nodes
    #[error("no link between {0:?} and {1:?}")]
    LinkNotFound(NodeId, NodeId),

    /// Self-loops are carried by the node's reflexive flag, not a link
    #[error("self-loop not allowed on {0:?}; toggle the reflexive flag instead")]
    SelfLoop(NodeId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut g = Graph::new();
        assert_eq!(g.add_node(), NodeId(0));
        assert_eq!(g.add_node(), NodeId(1));
        g.remove_node(NodeId(1));
        // ids are never reused
        assert_eq!(g.add_node(), NodeId(2));
    }

    #[test]
    fn test_connect_normalizes_endpoints() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();

        // connecting 2 -> 1 stores source 1, target 2, left flag
        g.connect(c, b).unwrap();
        let link = g.link(b, c).unwrap();
        assert_eq!(link.source, b);
        assert_eq!(link.target, c);
        assert!(link.left);
        assert!(!link.right);

        // connecting 0 -> 1 stores source 0, target 1, right flag
        g.connect(a, b).unwrap();
        let link = g.link(a, b).unwrap();
        assert!(link.right);
        assert!(!link.left);
    }

    #[test]
    fn test_connect_merges_into_existing_link() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();

        g.connect(a, b).unwrap();
        g.connect(b, a).unwrap();
        assert_eq!(g.link_count(), 1);
        let link = g.link(a, b).unwrap();
        assert!(link.left && link.right);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = Graph::new();
        let a = g.add_node();
        assert!(matches!(g.connect(a, a), Err(GraphError::SelfLoop(_))));

        assert!(g.toggle_reflexive(a).unwrap());
        assert!(!g.toggle_reflexive(a).unwrap());
    }

    #[test]
    fn test_remove_node_splices_links() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.connect(a, b).unwrap();
        g.connect(b, c).unwrap();
        g.connect(a, c).unwrap();

        g.remove_node(b);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.link_count(), 1);
        assert!(g.link(a, c).is_some());
    }

    #[test]
    fn test_adjacency_respects_direction_flags() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.connect(a, b).unwrap(); // right: a -> b
        g.connect(c, b).unwrap(); // left on (b, c): c -> b
        g.set_direction(a, c, LinkDirection::Both).unwrap_err();
        g.connect(a, c).unwrap();
        g.set_direction(a, c, LinkDirection::Both).unwrap(); // a <-> c

        let adj = g.adjacency();
        assert_eq!(adj[&a], vec![b, c]);
        assert_eq!(adj[&b], Vec::<NodeId>::new());
        // links walk in (source, target) order: (a, c) contributes a first
        assert_eq!(adj[&c], vec![a, b]);
    }

    #[test]
    fn test_adjacency_matrix() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        g.add_node();
        g.connect(a, b).unwrap();

        let m = g.adjacency_matrix();
        assert_eq!(m[0][1], 1);
        assert_eq!(m[1][0], 0);
        assert_eq!(m[2], vec![0, 0, 0]);
    }
}
