// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation state-log engine for AlgoLens.
//!
//! This crate provides the machinery shared by every AlgoLens
//! visualization:
//! - Frame contract for algorithm snapshots
//! - Append-only state log with a parallel secondary-row flag list
//! - Cursor-based playback controller (play, pause, step, jump, replay)
//! - Renderer contract consumed by external drawing layers
//! - Pseudocode panel model
//!
//! ## Architecture
//!
//! Algorithm builders (in the domain crates) record a complete, ordered
//! log of deep-copied snapshots up front; playback then iterates the log
//! under a caller-supplied clock. The engine never renders anything
//! itself - it hands frames to a [`Renderer`] implementation.

pub mod frame;
pub mod log;
pub mod playback;
pub mod pseudocode;
pub mod render;

pub use frame::{Frame, LineRef};
pub use log::{RunId, StateLog};
pub use playback::{PlaybackController, PlaybackState, DEFAULT_INTERVAL};
pub use pseudocode::Pseudocode;
pub use render::Renderer;
