// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame contract for algorithm snapshots.

use serde::{Deserialize, Serialize};

/// Pseudocode line reference attached to a frame.
///
/// Lines are 1-based, matching the numbering of the pseudocode panel.
/// A frame may highlight no line, a single line, or several lines at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineRef {
    /// No line highlighted
    #[default]
    None,
    /// A single highlighted line
    Line(u32),
    /// Several lines highlighted simultaneously
    Lines(Vec<u32>),
}

impl LineRef {
    /// Check whether a given 1-based line is referenced
    pub fn contains(&self, line: u32) -> bool {
        match self {
            Self::None => false,
            Self::Line(n) => *n == line,
            Self::Lines(ns) => ns.contains(&line),
        }
    }
}

/// A snapshot of algorithm progress at one discrete step.
///
/// Every frame stored in a log is a fully self-contained deep copy: frame
/// types own all of their data, so playback can jump to any index without
/// replaying history. Implementations expose the renderer-facing metadata;
/// the domain payload (entries, nodes, links) is read directly from the
/// concrete type.
pub trait Frame {
    /// Short status line describing this step
    fn status(&self) -> &str;

    /// Free-form log text accumulated for this step
    fn log_message(&self) -> &str;

    /// Pseudocode line(s) this snapshot corresponds to
    fn line_ref(&self) -> &LineRef;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ref_contains() {
        assert!(!LineRef::None.contains(1));
        assert!(LineRef::Line(3).contains(3));
        assert!(!LineRef::Line(3).contains(4));
        let many = LineRef::Lines(vec![3, 4]);
        assert!(many.contains(3));
        assert!(many.contains(4));
        assert!(!many.contains(5));
    }
}
