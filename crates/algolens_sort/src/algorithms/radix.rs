// SPDX-License-Identifier: MIT OR Apache-2.0
//! Radix sort builder.

use crate::entry::{Backlink, Highlight, SlotStatus};
use crate::state::{format_values, SortState};
use algolens_player::StateLog;

/// Record an LSD radix sort of `values`.
///
/// Passes run over decimal place values 1, 10, 100, ... up to the
/// magnitude of the maximum element. Per pass: one frame tagging every
/// element with the place value, one frame per element as it drops into
/// its digit bucket on the secondary row, then - after draining the
/// buckets 0..9 in order - one frame per element as it returns to the
/// primary row in the new order. Every frame of a pass shows the
/// secondary row; the pristine and closing frames hide it. Radix sort
/// has no pseudocode panel, so no frame carries a line reference.
pub fn build(values: &[i64]) -> StateLog<SortState> {
    let mut log = StateLog::new();
    let mut state = SortState::from_values(values);
    state.record_secondary(&mut log, false);

    let n = state.backlinks.len();
    if n == 0 {
        return log;
    }

    let max_value = state.backlinks.iter().map(|b| b.value).max().unwrap_or(0);
    let mut target_place: u64 = 1;
    let mut magnitude = max_value;
    while magnitude >= 10 {
        target_place *= 10;
        magnitude /= 10;
    }

    let mut place: u64 = 1;
    while place <= target_place {
        state.highlight_all(Highlight::Place(place));
        state.status = format!("Grouping by place value {place}");
        state.record_secondary(&mut log, true);

        let mut buckets: Vec<Vec<Backlink>> = vec![Vec::new(); 10];
        for i in 0..n {
            let digit =
                ((state.backlinks[i].value / place as i64) % 10).rem_euclid(10) as usize;
            state.backlinks[i].slot = SlotStatus::Bucket(digit);
            buckets[digit].push(state.backlinks[i]);
            state.status = format!(
                "{} goes to bucket {digit}",
                state.backlinks[i].value
            );
            state.record_secondary(&mut log, true);
        }

        // drain buckets 0..9 in order, skipping empty ones
        let mut position = 0;
        for bucket in &buckets {
            for backlink in bucket {
                state.backlinks[position] = *backlink;
                position += 1;
            }
        }

        for i in 0..n {
            state.backlinks[i].slot = SlotStatus::Primary;
            state.status = format!(
                "{} returns to position {i}",
                state.backlinks[i].value
            );
            state.record_secondary(&mut log, true);
        }

        place *= 10;
    }

    state.highlight_all(Highlight::Plain);
    state.status = "Array is sorted".to_string();
    state.log_message = format!("sorted array = {}", format_values(&state.values()));
    state.record_secondary(&mut log, false);
    log
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_reference_input() {
        let log = build(&[170, 45, 75, 90, 802, 24, 2, 66]);
        assert_eq!(
            log.last().unwrap().values(),
            vec![2, 24, 45, 66, 75, 90, 170, 802]
        );
    }

    #[test]
    fn test_pass_count_matches_digit_count_of_maximum() {
        // 802 has three digits, so exactly three place-value passes
        let log = build(&[170, 45, 75, 90, 802, 24, 2, 66]);
        let passes = log
            .iter()
            .filter(|s| s.status.starts_with("Grouping by place value"))
            .count();
        assert_eq!(passes, 3);
    }

    #[test]
    fn test_secondary_flags_wrap_the_passes() {
        let log = build(&[3, 12, 7]);
        assert_eq!(log.secondary(0), Some(false));
        assert_eq!(log.secondary(log.len() - 1), Some(false));
        for i in 1..log.len() - 1 {
            assert_eq!(log.secondary(i), Some(true), "frame {i}");
        }
    }

    #[test]
    fn test_bucket_assignment_uses_current_place_digit() {
        let log = build(&[170, 45, 75, 90, 802, 24, 2, 66]);
        // first pass, first element: 170 has last digit 0
        let frame = log
            .iter()
            .find(|s| s.status.contains("goes to bucket"))
            .unwrap();
        assert_eq!(frame.status, "170 goes to bucket 0");
        assert_eq!(frame.backlinks[0].slot, SlotStatus::Bucket(0));
        assert_eq!(frame.backlinks[0].highlight, Highlight::Place(1));
    }

    #[test]
    fn test_elements_return_to_primary_row() {
        let log = build(&[21, 3, 14]);
        let last = log.last().unwrap();
        assert!(last
            .backlinks
            .iter()
            .all(|b| b.slot == SlotStatus::Primary));
        assert!(last
            .backlinks
            .iter()
            .all(|b| b.highlight == Highlight::Plain));
    }

    #[test]
    fn test_frame_count_per_pass() {
        // per pass: 1 tag frame + n bucket frames + n return frames;
        // plus pristine and closing frames
        let values = [3, 12, 7];
        let log = build(&values);
        let n = values.len();
        let passes = 2; // max 12 has two digits
        assert_eq!(log.len(), 2 + passes * (1 + 2 * n));
    }
}
