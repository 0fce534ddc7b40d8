// SPDX-License-Identifier: MIT OR Apache-2.0
//! Quick sort builder.

use super::finish_sorted;
use crate::entry::Highlight;
use crate::state::SortState;
use algolens_player::{LineRef, StateLog};
use rand::Rng;

/// Record a quick sort of `values`.
///
/// Partition-exchange with the first element as pivot (or a uniformly
/// random one swapped to the front when `randomized_pivot` is set) and a
/// Lomuto store index. An explicit partition worklist replaces
/// recursion; one frame per comparison, one per swap, one when a pivot
/// settles.
pub fn build(values: &[i64], randomized_pivot: bool) -> StateLog<SortState> {
    let mut log = StateLog::new();
    let mut state = SortState::from_values(values);
    state.record(&mut log);

    let n = state.backlinks.len();
    if n < 2 {
        finish_sorted(&mut state, &mut log);
        return log;
    }

    let mut partitions: Vec<(usize, usize)> = vec![(0, n - 1)];
    while let Some((lo, hi)) = partitions.pop() {
        if lo == hi {
            state.backlinks[lo].highlight = Highlight::Sorted;
            state.status = format!(
                "{} is in sorted position",
                state.backlinks[lo].value
            );
            state.line_ref = LineRef::Line(1);
            state.record(&mut log);
            continue;
        }

        if randomized_pivot {
            let picked = rand::rng().random_range(lo..=hi);
            if picked != lo {
                state.swap_backlinks(lo, picked);
            }
            state.status = format!(
                "Randomly selected pivot {}",
                state.backlinks[lo].value
            );
        } else {
            state.status = format!("Pivot is {}", state.backlinks[lo].value);
        }
        state.backlinks[lo].highlight = Highlight::Pivot;
        state.line_ref = LineRef::Lines(vec![2, 3]);
        state.record(&mut log);

        let pivot = state.backlinks[lo].value;
        let mut store = lo + 1;
        for i in lo + 1..=hi {
            state.backlinks[i].highlight = Highlight::Compared;
            state.status = format!(
                "Comparing {} with pivot {pivot}",
                state.backlinks[i].value
            );
            state.line_ref = LineRef::Lines(vec![4, 5]);
            state.record(&mut log);

            if state.backlinks[i].value < pivot {
                state.swap_backlinks(i, store);
                state.status = format!(
                    "Moving {} below the pivot",
                    state.backlinks[store].value
                );
                state.line_ref = LineRef::Line(6);
                state.record(&mut log);
                state.backlinks[store].highlight = Highlight::Plain;
                state.backlinks[i].highlight = Highlight::Plain;
                store += 1;
            } else {
                state.backlinks[i].highlight = Highlight::Plain;
            }
        }

        let placed = store - 1;
        state.swap_backlinks(lo, placed);
        state.backlinks[placed].highlight = Highlight::Sorted;
        if placed != lo {
            state.backlinks[lo].highlight = Highlight::Plain;
        }
        state.status = format!(
            "Pivot {} placed at position {placed}",
            state.backlinks[placed].value
        );
        state.line_ref = LineRef::Line(7);
        state.record(&mut log);

        if placed > lo {
            partitions.push((lo, placed - 1));
        }
        if placed < hi {
            partitions.push((placed + 1, hi));
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
        let log = build(&[10, 80, 30, 90, 40, 50, 70], false);
        assert_eq!(
            log.last().unwrap().values(),
            vec![10, 30, 40, 50, 70, 80, 90]
        );
    }

    #[test]
    fn test_first_pivot_is_first_element() {
        let log = build(&[30, 10, 20], false);
        let pivot_frame = log
            .iter()
            .find(|s| s.status.starts_with("Pivot is"))
            .unwrap();
        assert_eq!(pivot_frame.status, "Pivot is 30");
        assert_eq!(pivot_frame.backlinks[0].highlight, Highlight::Pivot);
    }

    #[test]
    fn test_every_element_settles_once() {
        let log = build(&[4, 2, 6, 1, 3], false);
        let settle_frames = log
            .iter()
            .filter(|s| {
                s.line_ref == LineRef::Line(7) || s.line_ref == LineRef::Line(1)
            })
            .count();
        // every element is placed exactly once, as pivot or singleton
        assert_eq!(settle_frames, 5);
    }

    #[test]
    fn test_randomized_pivot_still_sorts() {
        for _ in 0..10 {
            let log = build(&[9, 3, 7, 1, 5], true);
            assert_eq!(log.last().unwrap().values(), vec![1, 3, 5, 7, 9]);
        }
    }
}
