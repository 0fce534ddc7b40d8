// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shell sort builder.

use super::finish_sorted;
use crate::entry::Highlight;
use crate::state::SortState;
use algolens_player::{LineRef, StateLog};

/// Record a shell sort of `values`.
///
/// Halving gaps with a gapped insertion pass at each gap; one frame per
/// gap change, one per gapped comparison, one per swap.
pub fn build(values: &[i64]) -> StateLog<SortState> {
    let mut log = StateLog::new();
    let mut state = SortState::from_values(values);
    state.record(&mut log);

    let n = state.backlinks.len();
    if n < 2 {
        finish_sorted(&mut state, &mut log);
        return log;
    }

    let mut gap = n / 2;
    state.status = format!("Gap is {gap}");
    state.line_ref = LineRef::Line(1);
    state.record(&mut log);

    loop {
        for i in gap..n {
            let mut j = i;
            while j >= gap {
                state.backlinks[j - gap].highlight = Highlight::Compared;
                state.backlinks[j].highlight = Highlight::Compared;
                state.status = format!(
                    "Comparing {} and {} (gap {gap})",
                    state.backlinks[j - gap].value,
                    state.backlinks[j].value
                );
                state.line_ref = LineRef::Line(5);
                state.record(&mut log);

                let out_of_order =
                    state.backlinks[j - gap].value > state.backlinks[j].value;
                if out_of_order {
                    state.swap_backlinks(j - gap, j);
                    state.status = format!(
                        "Swapping {} and {}",
                        state.backlinks[j].value,
                        state.backlinks[j - gap].value
                    );
                    state.line_ref = LineRef::Line(6);
                    state.record(&mut log);
                }
                state.backlinks[j - gap].highlight = Highlight::Plain;
                state.backlinks[j].highlight = Highlight::Plain;
                if !out_of_order {
                    break;
                }
                j -= gap;
            }
        }

        if gap == 1 {
            break;
        }
        gap /= 2;
        state.status = format!("Gap is {gap}");
        state.line_ref = LineRef::Line(3);
        state.record(&mut log);
    }

    finish_sorted(&mut state, &mut log);
    log
}
