// SPDX-License-Identifier: MIT OR Apache-2.0
//! Append-only state log produced by one algorithm run.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one recorded run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new random run ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete ordered sequence of frames for one algorithm run.
///
/// Index 0 is the untouched input; the last index is the fully processed
/// result (builders are responsible for this). A parallel boolean list
/// records, per frame, whether the secondary bucket row should be shown -
/// only radix sort ever sets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateLog<S> {
    /// Identity of the run that produced this log
    pub id: RunId,
    frames: Vec<S>,
    secondary: Vec<bool>,
}

impl<S> StateLog<S> {
    /// Create a new empty log
    pub fn new() -> Self {
        Self {
            id: RunId::new(),
            frames: Vec::new(),
            secondary: Vec::new(),
        }
    }

    /// Append a frame with the secondary row hidden
    pub fn push(&mut self, frame: S) {
        self.push_secondary(frame, false);
    }

    /// Append a frame with an explicit secondary-row flag
    pub fn push_secondary(&mut self, frame: S, show_secondary: bool) {
        self.frames.push(frame);
        self.secondary.push(show_secondary);
    }

    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&S> {
        self.frames.get(index)
    }

    /// Get the secondary-row flag for a frame
    pub fn secondary(&self, index: usize) -> Option<bool> {
        self.secondary.get(index).copied()
    }

    /// First frame (the untouched input)
    pub fn first(&self) -> Option<&S> {
        self.frames.first()
    }

    /// Last frame (the fully processed result)
    pub fn last(&self) -> Option<&S> {
        self.frames.last()
    }

    /// Number of recorded frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check whether the log holds no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate over the recorded frames in order
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.frames.iter()
    }

    /// Collapse the log to just its first frame.
    ///
    /// This is the destructive reset behind `stop()`: everything recorded
    /// after the original input is discarded.
    pub fn truncate_to_first(&mut self) {
        self.frames.truncate(1);
        self.secondary.truncate(1);
    }
}

impl<S: Serialize> StateLog<S> {
    /// Serialize the whole log as JSON for external renderers
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<S: DeserializeOwned> StateLog<S> {
    /// Deserialize a log previously exported with [`StateLog::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<S> Default for StateLog<S> {
    fn default() -> Self {
        Self::new()
    }
}
