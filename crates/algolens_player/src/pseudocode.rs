// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pseudocode panel model.

use serde::{Deserialize, Serialize};

/// Maximum number of lines the panel displays
pub const MAX_LINES: usize = 12;

/// An ordered list of pseudocode lines shown next to a visualization.
///
/// Set once at algorithm-selection time; frames reference lines by their
/// 1-based number through [`crate::LineRef`]. Lines beyond [`MAX_LINES`]
/// are dropped, matching the fixed slot count of the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pseudocode {
    lines: Vec<String>,
}

impl Pseudocode {
    /// Create a panel from a list of lines, truncating to [`MAX_LINES`]
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().take(MAX_LINES).map(Into::into).collect(),
        }
    }

    /// Create an empty panel (used to clear the display)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a line by its 1-based number
    pub fn line(&self, number: u32) -> Option<&str> {
        if number == 0 {
            return None;
        }
        self.lines.get(number as usize - 1).map(String::as_str)
    }

    /// Number of lines in the panel
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check whether the panel has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines in display order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
