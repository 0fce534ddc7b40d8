// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot of sorting progress.

use crate::entry::{Backlink, Entry, Highlight, SlotStatus};
use algolens_player::{Frame, LineRef, StateLog};
use serde::{Deserialize, Serialize};

/// A full snapshot of sorting progress at one discrete step.
///
/// The backlink array is the source of truth for order and highlights;
/// entries are synchronized from it before every recorded frame. All data
/// is owned, so `Clone` is a deep copy and no two frames in a log share
/// substructure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    /// Display entries, one per input element, in original input order
    pub entries: Vec<Entry>,
    /// Canonical element records in current sort order
    pub backlinks: Vec<Backlink>,
    /// Bars to disregard (positive) or imagine (negative) when the
    /// renderer centers the primary row
    pub bars_count_offset: i32,
    /// Short status line for this step
    pub status: String,
    /// Pseudocode line(s) this step corresponds to
    pub line_ref: LineRef,
    /// Free-form log text
    pub log_message: String,
}

impl SortState {
    /// Build the initial state for an input list.
    ///
    /// Entries and backlinks are created in parallel: element `i` starts
    /// at position `i`, unhighlighted, in the primary row.
    pub fn from_values(values: &[i64]) -> Self {
        let entries = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Entry {
                value,
                highlight: Highlight::Plain,
                position: i,
                slot: SlotStatus::Primary,
            })
            .collect();
        let backlinks = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Backlink {
                value,
                highlight: Highlight::Plain,
                entry_position: i,
                slot: SlotStatus::Primary,
            })
            .collect();

        Self {
            entries,
            backlinks,
            bars_count_offset: 0,
            status: String::new(),
            line_ref: LineRef::None,
            log_message: format!("original array = {}", format_values(values)),
        }
    }

    /// Project the backlink array onto the entries.
    ///
    /// Backlink `i` pushes its highlight, slot and position `i` into the
    /// entry it points at.
    pub fn sync_entries(&mut self) {
        for (position, backlink) in self.backlinks.iter().enumerate() {
            let entry = &mut self.entries[backlink.entry_position];
            entry.highlight = backlink.highlight;
            entry.position = position;
            entry.slot = backlink.slot;
        }
    }

    /// Swap two backlinks by position
    pub fn swap_backlinks(&mut self, i: usize, j: usize) {
        self.backlinks.swap(i, j);
    }

    /// Synchronize entries, then append a deep copy to the log with the
    /// secondary row hidden
    pub fn record(&mut self, log: &mut StateLog<SortState>) {
        self.record_secondary(log, false);
    }

    /// Synchronize entries, then append a deep copy to the log with an
    /// explicit secondary-row flag
    pub fn record_secondary(&mut self, log: &mut StateLog<SortState>, show_secondary: bool) {
        self.sync_entries();
        log.push_secondary(self.clone(), show_secondary);
    }

    /// Current values in backlink (sort) order
    pub fn values(&self) -> Vec<i64> {
        self.backlinks.iter().map(|b| b.value).collect()
    }

    /// Set every backlink to one highlight
    pub fn highlight_all(&mut self, highlight: Highlight) {
        for backlink in &mut self.backlinks {
            backlink.highlight = highlight;
        }
    }
}

impl Frame for SortState {
    fn status(&self) -> &str {
        &self.status
    }

    fn log_message(&self) -> &str {
        &self.log_message
    }

    fn line_ref(&self) -> &LineRef {
        &self.line_ref
    }
}

/// Format a value list the way the log panel prints arrays
pub fn format_values(values: &[i64]) -> String {
    let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_initial_invariants() {
        let state = SortState::from_values(&[5, 3, 1]);
        assert_eq!(state.values(), vec![5, 3, 1]);
        assert_eq!(state.log_message, "original array = [5, 3, 1]");
        for (i, entry) in state.entries.iter().enumerate() {
            assert_eq!(entry.position, i);
            assert_eq!(entry.highlight, Highlight::Plain);
            assert_eq!(entry.slot, SlotStatus::Primary);
        }
        assert_eq!(state.line_ref, LineRef::None);
    }

    #[test]
    fn test_sync_entries_projects_backlinks() {
        let mut state = SortState::from_values(&[5, 3, 1]);
        state.swap_backlinks(0, 2);
        state.backlinks[0].highlight = Highlight::Compared;
        state.sync_entries();

        // element "1" (entry 2) now sits at position 0, highlighted
        assert_eq!(state.entries[2].position, 0);
        assert_eq!(state.entries[2].highlight, Highlight::Compared);
        // element "5" (entry 0) moved to position 2
        assert_eq!(state.entries[0].position, 2);
    }

    #[test]
    fn test_record_appends_independent_copies() {
        let mut log = StateLog::new();
        let mut state = SortState::from_values(&[2, 1]);
        state.record(&mut log);
        state.swap_backlinks(0, 1);
        state.record(&mut log);

        assert_eq!(log.get(0).unwrap().values(), vec![2, 1]);
        assert_eq!(log.get(1).unwrap().values(), vec![1, 2]);
    }
}
