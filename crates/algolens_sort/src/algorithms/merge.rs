// SPDX-License-Identifier: MIT OR Apache-2.0
//! Merge sort builder.

use super::finish_sorted;
use crate::entry::Highlight;
use crate::state::SortState;
use algolens_player::{LineRef, StateLog};

/// Record a bottom-up merge sort of `values`.
///
/// Runs double in width each round; the two runs being merged carry the
/// Left and Right highlights. Elements merge in place by rotation so the
/// backlink order stays a permutation in every frame: a winning left
/// head stays put, a winning right head rotates in front of the
/// remaining left run. One frame per head comparison, one per element
/// merged, one when a run pair completes.
pub fn build(values: &[i64]) -> StateLog<SortState> {
    let mut log = StateLog::new();
    let mut state = SortState::from_values(values);
    state.record(&mut log);

    let n = state.backlinks.len();
    if n < 2 {
        finish_sorted(&mut state, &mut log);
        return log;
    }

    state.status = "Splitting into partitions of size 1".to_string();
    state.line_ref = LineRef::Line(1);
    state.record(&mut log);

    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let mid = lo + width;
            let hi = (lo + 2 * width - 1).min(n - 1);

            for k in lo..mid {
                state.backlinks[k].highlight = Highlight::Left;
            }
            for k in mid..=hi {
                state.backlinks[k].highlight = Highlight::Right;
            }
            state.status = format!(
                "Merging positions {lo}..{} and {mid}..{hi}",
                mid - 1
            );
            state.line_ref = LineRef::Line(2);
            state.record(&mut log);

            let mut left = lo;
            let mut right = mid;
            while left < right && right <= hi {
                state.status = format!(
                    "Comparing {} and {}",
                    state.backlinks[left].value,
                    state.backlinks[right].value
                );
                state.line_ref = LineRef::Lines(vec![3, 4]);
                state.record(&mut log);

                if state.backlinks[left].value <= state.backlinks[right].value {
                    state.backlinks[left].highlight = Highlight::Plain;
                    state.status =
                        format!("{} stays in place", state.backlinks[left].value);
                    state.line_ref = LineRef::Line(5);
                    state.record(&mut log);
                    left += 1;
                } else {
                    state.backlinks[left..=right].rotate_right(1);
                    state.backlinks[left].highlight = Highlight::Plain;
                    state.status =
                        format!("Moving {} into place", state.backlinks[left].value);
                    state.line_ref = LineRef::Line(6);
                    state.record(&mut log);
                    left += 1;
                    right += 1;
                }
            }

            for k in lo..=hi {
                state.backlinks[k].highlight = Highlight::Plain;
            }
            state.status = format!("Positions {lo}..{hi} merged");
            state.line_ref = LineRef::Line(7);
            state.record(&mut log);

            lo += 2 * width;
        }
        width *= 2;
    }

    finish_sorted(&mut state, &mut log);
    log
}
