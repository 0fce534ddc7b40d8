// SPDX-License-Identifier: MIT OR Apache-2.0
//! Insertion sort builder.

use super::finish_sorted;
use crate::entry::Highlight;
use crate::state::SortState;
use algolens_player::{LineRef, StateLog};

/// Record an insertion sort of `values`.
///
/// The extracted element carries the Special highlight while it walks
/// left through the sorted prefix; one frame per comparison, one per
/// shift, one when the element lands.
pub fn build(values: &[i64]) -> StateLog<SortState> {
    let mut log = StateLog::new();
    let mut state = SortState::from_values(values);
    state.record(&mut log);

    let n = state.backlinks.len();
    if n < 2 {
        finish_sorted(&mut state, &mut log);
        return log;
    }

    state.backlinks[0].highlight = Highlight::Sorted;
    state.status = format!("{} marked as sorted", state.backlinks[0].value);
    state.line_ref = LineRef::Line(1);
    state.record(&mut log);

    for i in 1..n {
        let extracted = state.backlinks[i].value;
        state.backlinks[i].highlight = Highlight::Special;
        state.status = format!("Extracting {extracted}");
        state.line_ref = LineRef::Lines(vec![2, 3]);
        state.record(&mut log);

        let mut j = i;
        while j > 0 {
            state.backlinks[j - 1].highlight = Highlight::Compared;
            state.status = format!(
                "Comparing {} with {extracted}",
                state.backlinks[j - 1].value
            );
            state.line_ref = LineRef::Lines(vec![4, 5]);
            state.record(&mut log);

            if state.backlinks[j - 1].value > extracted {
                state.swap_backlinks(j - 1, j);
                // the shifted element returns to the sorted prefix
                state.backlinks[j].highlight = Highlight::Sorted;
                state.status = format!("Moving {} right", state.backlinks[j].value);
                state.line_ref = LineRef::Line(6);
                state.record(&mut log);
                j -= 1;
            } else {
                state.backlinks[j - 1].highlight = Highlight::Sorted;
                break;
            }
        }

        state.backlinks[j].highlight = Highlight::Sorted;
        state.status = format!("Inserted {extracted} at position {j}");
        state.line_ref = LineRef::Line(7);
        state.record(&mut log);
    }

    finish_sorted(&mut state, &mut log);
    log
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts() {
        let log = build(&[4, 3, 2, 10, 12, 1, 5, 6]);
        assert_eq!(
            log.last().unwrap().values(),
            vec![1, 2, 3, 4, 5, 6, 10, 12]
        );
    }

    #[test]
    fn test_prefix_stays_sorted_at_every_insertion() {
        let log = build(&[5, 2, 4, 1, 3]);
        for state in log.iter().filter(|s| s.line_ref == LineRef::Line(7)) {
            let sorted_prefix: Vec<i64> = state
                .backlinks
                .iter()
                .take_while(|b| b.highlight == Highlight::Sorted)
                .map(|b| b.value)
                .collect();
            assert!(sorted_prefix.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_shift_frames_match_inversions() {
        // every shift removes exactly one inversion
        let log = build(&[3, 2, 1]);
        let shifts = log
            .iter()
            .filter(|s| s.status.starts_with("Moving"))
            .count();
        assert_eq!(shifts, 3);
    }
}
