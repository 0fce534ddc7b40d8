// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bubble sort builder.

use super::finish_sorted;
use crate::entry::Highlight;
use crate::state::SortState;
use algolens_player::{LineRef, StateLog};

/// Record a bubble sort of `values`.
///
/// One frame per adjacent comparison, one per swap, one at the end of
/// each pass marking the settled element. With `count_inversions` the
/// running swap counter is surfaced in the log messages.
pub fn build(values: &[i64], count_inversions: bool) -> StateLog<SortState> {
    let mut log = StateLog::new();
    let mut state = SortState::from_values(values);
    state.record(&mut log);

    let n = state.backlinks.len();
    if n < 2 {
        finish_sorted(&mut state, &mut log);
        return log;
    }

    let mut swap_count = 0u64;
    let mut last_unsorted = n - 1;
    loop {
        let mut swapped = false;
        for i in 0..last_unsorted {
            state.backlinks[i].highlight = Highlight::Compared;
            state.backlinks[i + 1].highlight = Highlight::Compared;
            state.status = format!(
                "Comparing {} and {}",
                state.backlinks[i].value,
                state.backlinks[i + 1].value
            );
            state.line_ref = LineRef::Lines(vec![3, 4]);
            state.record(&mut log);

            if state.backlinks[i].value > state.backlinks[i + 1].value {
                state.swap_backlinks(i, i + 1);
                swapped = true;
                swap_count += 1;
                state.status = format!(
                    "Swapping {} and {}",
                    state.backlinks[i + 1].value,
                    state.backlinks[i].value
                );
                state.line_ref = LineRef::Lines(vec![5, 6]);
                if count_inversions {
                    state.log_message = format!("swap counter = {swap_count}");
                }
                state.record(&mut log);
            }
            state.backlinks[i].highlight = Highlight::Plain;
            state.backlinks[i + 1].highlight = Highlight::Plain;
        }

        state.backlinks[last_unsorted].highlight = Highlight::Sorted;
        if swapped {
            state.status = format!(
                "{} is in sorted position",
                state.backlinks[last_unsorted].value
            );
        } else {
            state.status = "No swaps this pass".to_string();
        }
        state.line_ref = LineRef::Line(7);
        state.record(&mut log);

        if !swapped || last_unsorted == 1 {
            break;
        }
        last_unsorted -= 1;
    }

    finish_sorted(&mut state, &mut log);
    log
}
