// SPDX-License-Identifier: MIT OR Apache-2.0
//! Entry and backlink definitions for the sorting model.

use serde::{Deserialize, Serialize};

/// Display role of an element at one step.
///
/// The renderer maps roles to its palette; `Place` carries the decimal
/// place value (1, 10, 100, ...) radix sort is currently grouping by, so
/// the renderer can emphasize that digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Highlight {
    /// No emphasis
    #[default]
    Plain,
    /// Taking part in the current comparison
    Compared,
    /// Special role this step (swap partner, extracted element, minimum)
    Special,
    /// In its final sorted position
    Sorted,
    /// Quick sort pivot
    Pivot,
    /// Member of the left run in a merge
    Left,
    /// Member of the right run in a merge
    Right,
    /// Radix sort place-value marker
    Place(u64),
}

/// Where an element is drawn relative to the two display rows.
///
/// Everything except radix sort keeps elements in the primary row; radix
/// sort moves elements through the secondary bucket row and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotStatus {
    /// Primary row, at the element's current position
    #[default]
    Primary,
    /// Secondary row, below the element's current position
    SecondaryRow,
    /// Secondary row, in the numbered digit bucket
    Bucket(usize),
    /// Secondary row, at an absolute slot independent of position
    Absolute(usize),
}

/// A display element: what the renderer draws at one position.
///
/// Entries are a projection of the backlinks - after every mutation the
/// state re-derives position, highlight and slot from the backlink array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The element's value
    pub value: i64,
    /// Current display role
    pub highlight: Highlight,
    /// Current position in the primary row
    pub position: usize,
    /// Which row/slot the element occupies
    pub slot: SlotStatus,
}

/// The canonical record of an element.
///
/// Backlinks are reordered by the algorithms; `entry_position` points
/// back at the fixed entry that displays this element, so the renderer
/// can animate an element between positions without losing its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backlink {
    /// The element's original value
    pub value: i64,
    /// Current display role
    pub highlight: Highlight,
    /// Index of the entry displaying this element
    pub entry_position: usize,
    /// Which row/slot the element occupies
    pub slot: SlotStatus,
}
