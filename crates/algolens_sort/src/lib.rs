// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sorting state model and state-log builders for AlgoLens.
//!
//! This crate provides the sorting half of the visualizer:
//! - Entry/backlink state model (backlinks are the canonical position
//!   truth; entries are the derived display projection)
//! - Nine instrumented sort builders, one frame per comparison or move
//! - Pseudocode line lists matching each builder's emission points
//! - Input acquisition (random lists and validated custom lists)
//!
//! ## Architecture
//!
//! Builders run an algorithm to completion, mutating the backlink array
//! in place and recording a deep-copied [`SortState`] after every atomic
//! step. The resulting `StateLog<SortState>` is handed to the playback
//! controller in `algolens_player`.

pub mod algorithms;
pub mod entry;
pub mod input;
pub mod state;

pub use algorithms::{SortKind, SortOptions};
pub use entry::{Backlink, Entry, Highlight, SlotStatus};
pub use input::InputError;
pub use state::SortState;
