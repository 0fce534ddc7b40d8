// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph editing model and traversal builder for AlgoLens.
//!
//! This crate provides the graph half of the visualizer:
//! - Nodes known by sequential id, with a reflexive flag
//! - Links normalized `source < target` with independent direction flags
//! - Editing operations (connect, redirect, delete) behind a typed API
//! - A traversal builder that records one frame per visit event
//!
//! ## Architecture
//!
//! The [`Graph`] is the mutable editing surface; [`GraphState`] is an
//! immutable snapshot of it. Running a traversal produces a complete
//! `StateLog<GraphState>` which the playback controller in
//! `algolens_player` iterates.

pub mod graph;
pub mod link;
pub mod node;
pub mod state;
pub mod traversal;

pub use graph::{Graph, GraphError};
pub use link::{Link, LinkDirection};
pub use node::{Node, NodeColor, NodeId};
pub use state::GraphState;
pub use traversal::TraversalError;
