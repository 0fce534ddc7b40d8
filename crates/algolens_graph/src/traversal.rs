// SPDX-License-Identifier: MIT OR Apache-2.0
//! Traversal state-log builder.

use crate::graph::Graph;
use crate::node::{NodeColor, NodeId};
use crate::state::GraphState;
use algolens_player::StateLog;
use std::collections::{HashSet, VecDeque};

/// Error aborting a traversal before any frame is recorded.
///
/// Both variants are recoverable: the caller treats "no log produced" as
/// a no-op and lets the user pick a different graph or source.
#[derive(Debug, thiserror::Error)]
pub enum TraversalError {
    /// The graph has no nodes
    #[error("no graph to traverse")]
    EmptyGraph,

    /// The requested source vertex is not in the graph
    #[error("vertex {0:?} does not exist in the graph")]
    UnknownSource(NodeId),
}

/// Run a traversal from `source` and record one frame per visit event.
///
/// Frame 0 is the pristine graph, frame 1 recolors the source, then each
/// dequeue of a not-yet-visited vertex recolors it Visited and records a
/// frame. Unvisited neighbors are recolored Frontier and pushed to the
/// back of the worklist without being marked, so a vertex can sit in the
/// worklist more than once; duplicates are filtered when dequeued. The
/// worklist is consumed from the front.
pub fn run(graph: &Graph, source: NodeId) -> Result<StateLog<GraphState>, TraversalError> {
    if graph.node_count() == 0 {
        tracing::warn!("traversal requested on an empty graph");
        return Err(TraversalError::EmptyGraph);
    }
    if !graph.contains(source) {
        tracing::warn!(?source, "traversal source does not exist");
        return Err(TraversalError::UnknownSource(source));
    }

    let adjacency = graph.adjacency();
    let mut log = StateLog::new();
    let mut state = GraphState::snapshot(graph);
    state.record(&mut log);

    state.set_color(source, NodeColor::Source);
    state.status = format!("Starting from vertex {}", source.0);
    state.record(&mut log);

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut visit_order: Vec<NodeId> = Vec::new();
    let mut worklist: VecDeque<NodeId> = VecDeque::new();
    worklist.push_back(source);

    while let Some(current) = worklist.pop_front() {
        if !visited.contains(&current) {
            visited.insert(current);
            visit_order.push(current);
            state.set_color(current, NodeColor::Visited);
            state.status = format!("Visiting vertex {}", current.0);
            state.log_message = format_visit_order(&visit_order);
            state.record(&mut log);
        }
        // neighbors are rescanned on every dequeue, visited or not
        if let Some(neighbors) = adjacency.get(&current) {
            for &next in neighbors {
                if !visited.contains(&next) {
                    state.set_color(next, NodeColor::Frontier);
                    worklist.push_back(next);
                }
            }
        }
    }

    tracing::debug!(visited = visit_order.len(), frames = log.len(), "traversal complete");
    Ok(log)
}

fn format_visit_order(order: &[NodeId]) -> String {
    let ids: Vec<String> = order.iter().map(|id| id.0.to_string()).collect();
    format!("visit order: {}", ids.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_yields_no_log() {
        let graph = Graph::new();
        assert!(matches!(
            run(&graph, NodeId(0)),
            Err(TraversalError::EmptyGraph)
        ));
    }

    #[test]
    fn test_unknown_source_yields_no_log() {
        let mut graph = Graph::new();
        graph.add_node();
        assert!(matches!(
            run(&graph, NodeId(7)),
            Err(TraversalError::UnknownSource(NodeId(7)))
        ));
    }

    #[test]
    fn test_directed_edge_limits_reach() {
        // nodes {0, 1, 2}, single directed edge 0 -> 1
        let mut graph = Graph::new();
        let a = graph.add_node();
        let b = graph.add_node();
        let c = graph.add_node();
        graph.connect(a, b).unwrap();

        let log = run(&graph, a).unwrap();

        // frame 0 is the pristine input
        let first = log.first().unwrap();
        assert!(first.nodes.iter().all(|n| n.color == NodeColor::Plain));

        // visit order is 0 then 1; node 2 is unreachable
        let visited_frames: Vec<NodeId> = log
            .iter()
            .filter(|s| s.status.starts_with("Visiting"))
            .map(|s| {
                s.nodes
                    .iter()
                    .rev()
                    .find(|n| n.color == NodeColor::Visited)
                    .unwrap()
                    .id
            })
            .collect();
        assert_eq!(log.last().unwrap().log_message, "visit order: 0, 1");
        assert_eq!(visited_frames.len(), 2);

        // no frame ever marks node 2 as visited
        assert!(log
            .iter()
            .all(|s| s.node(c).unwrap().color != NodeColor::Visited));
    }

    #[test]
    fn test_duplicate_enqueue_visits_once() {
        // diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3; vertex 3 is enqueued
        // twice but must be visited exactly once
        let mut graph = Graph::new();
        let a = graph.add_node();
        let b = graph.add_node();
        let c = graph.add_node();
        let d = graph.add_node();
        graph.connect(a, b).unwrap();
        graph.connect(a, c).unwrap();
        graph.connect(b, d).unwrap();
        graph.connect(c, d).unwrap();

        let log = run(&graph, a).unwrap();
        let d_visits = log
            .iter()
            .filter(|s| s.status == "Visiting vertex 3")
            .count();
        assert_eq!(d_visits, 1);

        // pristine + source + one visit frame per reachable vertex
        assert_eq!(log.len(), 2 + 4);
        assert_eq!(
            log.last().unwrap().log_message,
            "visit order: 0, 1, 2, 3"
        );
    }

    #[test]
    fn test_reverse_direction_edge_is_followed() {
        // connect 2 -> 1 (stored as left flag on link (1, 2))
        let mut graph = Graph::new();
        graph.add_node();
        let b = graph.add_node();
        let c = graph.add_node();
        graph.connect(c, b).unwrap();

        let log = run(&graph, c).unwrap();
        assert_eq!(log.last().unwrap().log_message, "visit order: 2, 1");
    }
}
