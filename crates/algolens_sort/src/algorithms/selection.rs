// SPDX-License-Identifier: MIT OR Apache-2.0
//! Selection sort builder.

use super::finish_sorted;
use crate::entry::Highlight;
use crate::state::SortState;
use algolens_player::{LineRef, StateLog};

/// Record a selection sort of `values`.
///
/// The running minimum carries the Special highlight; one frame per
/// comparison, one whenever the minimum moves, one for the swap into the
/// sorted prefix.
pub fn build(values: &[i64]) -> StateLog<SortState> {
    let mut log = StateLog::new();
    let mut state = SortState::from_values(values);
    state.record(&mut log);

    let n = state.backlinks.len();
    if n < 2 {
        finish_sorted(&mut state, &mut log);
        return log;
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        state.backlinks[i].highlight = Highlight::Special;
        state.status = format!("Minimum so far is {}", state.backlinks[i].value);
        state.line_ref = LineRef::Line(2);
        state.record(&mut log);

        for j in i + 1..n {
            state.backlinks[j].highlight = Highlight::Compared;
            state.status = format!(
                "Comparing {} with minimum {}",
                state.backlinks[j].value,
                state.backlinks[min_index].value
            );
            state.line_ref = LineRef::Lines(vec![3, 4]);
            state.record(&mut log);

            if state.backlinks[j].value < state.backlinks[min_index].value {
                state.backlinks[min_index].highlight = Highlight::Plain;
                min_index = j;
                state.backlinks[j].highlight = Highlight::Special;
                state.status = format!("New minimum {}", state.backlinks[j].value);
                state.line_ref = LineRef::Line(5);
                state.record(&mut log);
            } else {
                state.backlinks[j].highlight = Highlight::Plain;
            }
        }

        state.swap_backlinks(i, min_index);
        state.backlinks[i].highlight = Highlight::Sorted;
        if min_index != i {
            state.backlinks[min_index].highlight = Highlight::Plain;
        }
        state.status = format!(
            "Swapping minimum {} into position {}",
            state.backlinks[i].value,
            i
        );
        state.line_ref = LineRef::Line(6);
        state.record(&mut log);
    }

    finish_sorted(&mut state, &mut log);
    log
}
