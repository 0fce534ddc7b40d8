// SPDX-License-Identifier: MIT OR Apache-2.0
//! Comb sort builder.

use super::finish_sorted;
use crate::entry::Highlight;
use crate::state::SortState;
use algolens_player::{LineRef, StateLog};

/// Gap shrink factor
const SHRINK: f64 = 1.3;

/// Record a comb sort of `values`.
///
/// Bubble sort with a shrinking gap: one frame per gap change, one per
/// gapped comparison, one per swap. Terminates when the gap is 1 and a
/// full pass makes no swaps.
pub fn build(values: &[i64]) -> StateLog<SortState> {
    let mut log = StateLog::new();
    let mut state = SortState::from_values(values);
    state.record(&mut log);

    let n = state.backlinks.len();
    if n < 2 {
        finish_sorted(&mut state, &mut log);
        return log;
    }

    let mut gap = n;
    let mut swapped = true;
    while gap != 1 || swapped {
        gap = (gap as f64 / SHRINK) as usize;
        if gap < 1 {
            gap = 1;
        }
        state.status = format!("Gap is {gap}");
        state.line_ref = LineRef::Line(3);
        state.record(&mut log);

        swapped = false;
        for i in 0..n - gap {
            state.backlinks[i].highlight = Highlight::Compared;
            state.backlinks[i + gap].highlight = Highlight::Compared;
            state.status = format!(
                "Comparing {} and {} (gap {gap})",
                state.backlinks[i].value,
                state.backlinks[i + gap].value
            );
            state.line_ref = LineRef::Lines(vec![5, 6]);
            state.record(&mut log);

            if state.backlinks[i].value > state.backlinks[i + gap].value {
                state.swap_backlinks(i, i + gap);
                swapped = true;
                state.status = format!(
                    "Swapping {} and {}",
                    state.backlinks[i + gap].value,
                    state.backlinks[i].value
                );
                state.line_ref = LineRef::Lines(vec![7, 8]);
                state.record(&mut log);
            }
            state.backlinks[i].highlight = Highlight::Plain;
            state.backlinks[i + gap].highlight = Highlight::Plain;
        }
    }

    finish_sorted(&mut state, &mut log);
    log
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts() {
        let log = build(&[8, 4, 1, 56, 3, 44, 23, 2]);
        assert_eq!(
            log.last().unwrap().values(),
            vec![1, 2, 3, 4, 8, 23, 44, 56]
        );
    }

    #[test]
    fn test_gap_shrinks_by_factor() {
        let log = build(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let gaps: Vec<usize> = log
            .iter()
            .filter_map(|s| s.status.strip_prefix("Gap is "))
            .map(|g| g.parse().unwrap())
            .collect();
        // n = 10 shrinks 7, 5, 3, 2, 1, ...
        assert_eq!(&gaps[..5], &[7, 5, 3, 2, 1]);
        assert_eq!(*gaps.last().unwrap(), 1);
        assert!(gaps.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_last_pass_has_no_swaps() {
        let log = build(&[5, 3, 1, 4, 2]);
        let last_gap_frame = log
            .iter()
            .enumerate()
            .filter(|(_, s)| s.status.starts_with("Gap is"))
            .map(|(i, _)| i)
            .last()
            .unwrap();
        assert!(log
            .iter()
            .skip(last_gap_frame + 1)
            .all(|s| !s.status.starts_with("Swapping")));
    }
}
