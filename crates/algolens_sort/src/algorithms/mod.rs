// SPDX-License-Identifier: MIT OR Apache-2.0
//! The nine instrumented sort builders.
//!
//! Every builder follows the same contract: frame 0 is the pristine
//! input, the backlink array is mutated in place one atomic step at a
//! time, and a deep-copied frame is recorded after every comparison,
//! move or structural decision. Line references point at the pseudocode
//! returned by [`SortKind::pseudocode`], whose lines correspond 1:1 to
//! the emission points.

pub mod bubble;
pub mod cocktail;
pub mod comb;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

use crate::state::{format_values, SortState};
use algolens_player::{LineRef, Pseudocode, StateLog};
use serde::{Deserialize, Serialize};

/// The available sorting algorithms.
///
/// A tagged kind plus a match table - never a stored function pointer -
/// selects the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKind {
    /// Bubble sort
    Bubble,
    /// Selection sort
    Selection,
    /// Insertion sort
    Insertion,
    /// Cocktail shaker sort
    CocktailShaker,
    /// Comb sort
    Comb,
    /// Shell sort
    Shell,
    /// Quick sort
    Quick,
    /// Merge sort
    Merge,
    /// Radix sort
    Radix,
}

/// All sort kinds in menu order
pub const ALL_KINDS: [SortKind; 9] = [
    SortKind::Bubble,
    SortKind::Selection,
    SortKind::Insertion,
    SortKind::CocktailShaker,
    SortKind::Comb,
    SortKind::Shell,
    SortKind::Quick,
    SortKind::Merge,
    SortKind::Radix,
];

/// Tweaks recovered from the original visualizer controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptions {
    /// Bubble sort: surface the running swap counter in log messages
    pub count_inversions: bool,
    /// Quick sort: pick a random pivot and swap it to the front
    pub randomized_pivot: bool,
}

impl SortKind {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::CocktailShaker => "Cocktail Shaker Sort",
            Self::Comb => "Comb Sort",
            Self::Shell => "Shell Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Radix => "Radix Sort",
        }
    }

    /// Whether this algorithm renders the secondary bucket row
    pub fn uses_secondary_row(&self) -> bool {
        matches!(self, Self::Radix)
    }

    /// Run the instrumented algorithm and record its state log
    pub fn build(&self, values: &[i64], options: &SortOptions) -> StateLog<SortState> {
        let log = match self {
            Self::Bubble => bubble::build(values, options.count_inversions),
            Self::Selection => selection::build(values),
            Self::Insertion => insertion::build(values),
            Self::CocktailShaker => cocktail::build(values),
            Self::Comb => comb::build(values),
            Self::Shell => shell::build(values),
            Self::Quick => quick::build(values, options.randomized_pivot),
            Self::Merge => merge::build(values),
            Self::Radix => radix::build(values),
        };
        tracing::debug!(kind = self.name(), frames = log.len(), "state log built");
        log
    }

    /// The pseudocode panel for this algorithm.
    ///
    /// Line texts are those displayed by the original visualizer; bubble
    /// and quick sort swap in their option-dependent lines.
    pub fn pseudocode(&self, options: &SortOptions) -> Pseudocode {
        match self {
            Self::Bubble => Pseudocode::new([
                "do",
                "  swapped = false",
                "  for i = 1 to indexOfLastUnsortedElement-1",
                "    if leftElement > rightElement",
                "      swap(leftElement, rightElement)",
                if options.count_inversions {
                    "      swapped = true; swapCounter++"
                } else {
                    "      swapped = true"
                },
                "while swapped",
            ]),
            Self::Selection => Pseudocode::new([
                "repeat (numOfElements - 1) times",
                "  set the first unsorted element as the minimum",
                "  for each of the unsorted elements",
                "    if element < currentMinimum",
                "      set element as new minimum",
                "  swap minimum with first unsorted position",
            ]),
            Self::Insertion => Pseudocode::new([
                "mark first element as sorted",
                "  for each unsorted element X",
                "    extract the element X",
                "    for j = lastSortedIndex down to 0",
                "      if current element j > X",
                "        move sorted element to the right by 1",
                "      break loop and insert X here",
            ]),
            Self::CocktailShaker => Pseudocode::new([
                "swapped = false, start = 0, end = last index",
                "while (swapped = true)",
                "  for i = start to end",
                "    if leftElement > rightElement",
                "      swap(leftElement, rightElement); swapped = true",
                "  if swapped = false: break loop",
                "  else: swapped = false and end--",
                "  for i = end to start",
                "    if rightElement < leftElement",
                "      swap(leftElement, rightElement); swapped = true",
                "  if swapped = false: break loop",
                "  else: swapped = false and start++",
            ]),
            Self::Comb => Pseudocode::new([
                "swapped = false, gap = listLength",
                "while (swapped = true or gap != 1)",
                "  gap = gap / 1.3",
                "  swap = false",
                "  for i = 0 to listLength - gap",
                "    if gapHeadElement > gapTailElement",
                "      swap(gapHeadElement, gapTailElement)",
                "      swapped = true",
            ]),
            Self::Shell => Pseudocode::new([
                "create gap by half of list length",
                "  do",
                "    divide gap by 2",
                "    do",
                "      if gapHeadElement > gapTailElement",
                "        swap(gapHeadElement, gapTailElement)",
                "    while (firstIndexToGapHead's length < gapLength)",
                "  while (gapLength >= 1)",
            ]),
            Self::Quick => Pseudocode::new([
                "for each (unsorted) partition",
                if options.randomized_pivot {
                    "randomly select pivot, swap with first element"
                } else {
                    "set first element as pivot"
                },
                "  storeIndex = pivotIndex + 1",
                "  for i = pivotIndex + 1 to rightmostIndex",
                "    if element[i] < element[pivot]",
                "      swap(i, storeIndex); storeIndex++",
                "  swap(pivot, storeIndex - 1)",
            ]),
            Self::Merge => Pseudocode::new([
                "split each element into partitions of size 1",
                "recursively merge adjacent partitions",
                "  for i = leftPartStartIndex to rightPartLastIndex inclusive",
                "    if leftPartHeadValue <= rightPartHeadValue",
                "      copy leftPartHeadValue",
                "    else: copy rightPartHeadValue",
                "copy elements back to original array",
            ]),
            Self::Radix => Pseudocode::empty(),
        }
    }
}

/// Mark every element sorted and record the closing frame.
///
/// Shared tail of all comparison sorts; radix sort ends with plain
/// highlights instead and records its own closing frame.
pub(crate) fn finish_sorted(state: &mut SortState, log: &mut StateLog<SortState>) {
    state.highlight_all(crate::entry::Highlight::Sorted);
    state.status = "Array is sorted".to_string();
    state.log_message = format!("sorted array = {}", format_values(&state.values()));
    state.line_ref = LineRef::None;
    state.record(log);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_sorts() {
        let values = [9, 2, 14, 7, 2, 11, 1];
        let mut expected: Vec<i64> = values.to_vec();
        expected.sort_unstable();

        for kind in ALL_KINDS {
            let log = kind.build(&values, &SortOptions::default());
            let first = log.first().unwrap();
            let last = log.last().unwrap();
            assert_eq!(first.values(), values, "{} frame 0", kind.name());
            assert!(
                first
                    .entries
                    .iter()
                    .all(|e| e.highlight == crate::entry::Highlight::Plain),
                "{} frame 0 must be unhighlighted",
                kind.name()
            );
            assert_eq!(last.values(), expected, "{} result", kind.name());
        }
    }

    #[test]
    fn test_every_frame_is_a_permutation() {
        let values = [5, 3, 8, 1, 9, 2];
        let mut expected: Vec<i64> = values.to_vec();
        expected.sort_unstable();

        for kind in ALL_KINDS {
            let log = kind.build(&values, &SortOptions::default());
            for (i, frame) in log.iter().enumerate() {
                let mut got = frame.values();
                got.sort_unstable();
                assert_eq!(got, expected, "{} frame {i}", kind.name());

                // entry positions are a permutation of 0..n
                let mut positions: Vec<usize> =
                    frame.entries.iter().map(|e| e.position).collect();
                positions.sort_unstable();
                let want: Vec<usize> = (0..values.len()).collect();
                assert_eq!(positions, want, "{} frame {i} positions", kind.name());
            }
        }
    }

    #[test]
    fn test_secondary_row_flag() {
        assert!(SortKind::Radix.uses_secondary_row());
        assert!(!SortKind::Bubble.uses_secondary_row());
        assert!(!SortKind::Merge.uses_secondary_row());
    }

    #[test]
    fn test_option_dependent_pseudocode() {
        let plain = SortKind::Bubble.pseudocode(&SortOptions::default());
        assert_eq!(plain.line(6), Some("      swapped = true"));

        let counting = SortKind::Bubble.pseudocode(&SortOptions {
            count_inversions: true,
            ..Default::default()
        });
        assert_eq!(counting.line(6), Some("      swapped = true; swapCounter++"));

        let randomized = SortKind::Quick.pseudocode(&SortOptions {
            randomized_pivot: true,
            ..Default::default()
        });
        assert_eq!(
            randomized.line(2),
            Some("randomly select pivot, swap with first element")
        );

        assert!(SortKind::Radix.pseudocode(&SortOptions::default()).is_empty());
    }
}
