// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cocktail shaker sort builder.

use super::finish_sorted;
use crate::entry::Highlight;
use crate::state::SortState;
use algolens_player::{LineRef, StateLog};

/// Record a cocktail shaker sort of `values`.
///
/// Bubble passes alternate direction: a forward pass settles the largest
/// remaining element at the end, a backward pass settles the smallest at
/// the start. Emission mirrors bubble sort in both directions.
pub fn build(values: &[i64]) -> StateLog<SortState> {
    let mut log = StateLog::new();
    let mut state = SortState::from_values(values);
    state.record(&mut log);

    let n = state.backlinks.len();
    if n < 2 {
        finish_sorted(&mut state, &mut log);
        return log;
    }

    let mut start = 0usize;
    let mut end = n - 1;
    loop {
        // forward pass
        let mut swapped = false;
        for i in start..end {
            compare(&mut state, &mut log, i, [3, 4]);
            if state.backlinks[i].value > state.backlinks[i + 1].value {
                swap(&mut state, &mut log, i, 5);
                swapped = true;
            }
            state.backlinks[i].highlight = Highlight::Plain;
            state.backlinks[i + 1].highlight = Highlight::Plain;
        }
        state.backlinks[end].highlight = Highlight::Sorted;
        if swapped {
            state.status = format!(
                "{} is in sorted position",
                state.backlinks[end].value
            );
            state.line_ref = LineRef::Line(7);
        } else {
            state.status = "No swaps in forward pass".to_string();
            state.line_ref = LineRef::Line(6);
        }
        state.record(&mut log);
        if !swapped {
            break;
        }
        end -= 1;
        if start >= end {
            break;
        }

        // backward pass
        let mut swapped_back = false;
        for i in (start..end).rev() {
            compare(&mut state, &mut log, i, [8, 9]);
            if state.backlinks[i].value > state.backlinks[i + 1].value {
                swap(&mut state, &mut log, i, 10);
                swapped_back = true;
            }
            state.backlinks[i].highlight = Highlight::Plain;
            state.backlinks[i + 1].highlight = Highlight::Plain;
        }
        state.backlinks[start].highlight = Highlight::Sorted;
        if swapped_back {
            state.status = format!(
                "{} is in sorted position",
                state.backlinks[start].value
            );
            state.line_ref = LineRef::Line(12);
        } else {
            state.status = "No swaps in backward pass".to_string();
            state.line_ref = LineRef::Line(11);
        }
        state.record(&mut log);
        if !swapped_back {
            break;
        }
        start += 1;
        if start >= end {
            break;
        }
    }

    finish_sorted(&mut state, &mut log);
    log
}

fn compare(state: &mut SortState, log: &mut StateLog<SortState>, i: usize, lines: [u32; 2]) {
    state.backlinks[i].highlight = Highlight::Compared;
    state.backlinks[i + 1].highlight = Highlight::Compared;
    state.status = format!(
        "Comparing {} and {}",
        state.backlinks[i].value,
        state.backlinks[i + 1].value
    );
    state.line_ref = LineRef::Lines(lines.to_vec());
    state.record(log);
}

fn swap(state: &mut SortState, log: &mut StateLog<SortState>, i: usize, line: u32) {
    state.swap_backlinks(i, i + 1);
    state.status = format!(
        "Swapping {} and {}",
        state.backlinks[i + 1].value,
        state.backlinks[i].value
    );
    state.line_ref = LineRef::Line(line);
    state.record(log);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts() {
        let log = build(&[5, 1, 4, 2, 8, 0, 2]);
        assert_eq!(log.last().unwrap().values(), vec![0, 1, 2, 2, 4, 5, 8]);
    }

    #[test]
    fn test_passes_alternate_direction() {
        let log = build(&[3, 1, 4, 1, 5]);
        let forward = log
            .iter()
            .any(|s| s.line_ref == LineRef::Lines(vec![3, 4]));
        let backward = log
            .iter()
            .any(|s| s.line_ref == LineRef::Lines(vec![8, 9]));
        assert!(forward && backward);
    }

    #[test]
    fn test_small_element_at_end_settles_quickly() {
        // the "turtle" 1 reaches the front after a single backward pass
        let log = build(&[2, 3, 4, 5, 1]);
        let backward_boundary = log
            .iter()
            .position(|s| s.line_ref == LineRef::Line(12))
            .unwrap();
        assert_eq!(log.get(backward_boundary).unwrap().backlinks[0].value, 1);
    }
}
