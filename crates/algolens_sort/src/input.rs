// SPDX-License-Identifier: MIT OR Apache-2.0
//! Input acquisition: random lists and validated custom lists.

use crate::algorithms::SortKind;
use rand::Rng;

/// Smallest accepted custom list
pub const MIN_LIST_LEN: usize = 3;
/// Largest accepted list
pub const MAX_LIST_LEN: usize = 15;
/// Largest generated value for the comparison sorts
pub const MAX_ELEMENT_VALUE: i64 = 50;
/// Largest generated value for radix sort (four digits on screen)
pub const MAX_RADIX_ELEMENT_VALUE: i64 = 9999;

/// Rejection of a user-supplied custom list.
///
/// All variants are user-facing; the session surfaces the message and
/// leaves every bit of state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// More than [`MAX_LIST_LEN`] elements
    #[error("list max size is {MAX_LIST_LEN}")]
    TooLong,

    /// Fewer than [`MIN_LIST_LEN`] elements
    #[error("list min size is {MIN_LIST_LEN}")]
    TooShort,

    /// An empty token between commas
    #[error("missing element in custom list")]
    MissingElement,

    /// A token that does not parse as a number
    #[error("element \"{0}\" is not a number")]
    NotANumber(String),
}

/// Generate a uniformly random input list for the given sort.
///
/// Length is 10 to [`MAX_LIST_LEN`]; values range up to
/// [`MAX_ELEMENT_VALUE`], or [`MAX_RADIX_ELEMENT_VALUE`] for radix sort
/// so multiple place-value passes actually happen.
pub fn random_list(kind: SortKind) -> Vec<i64> {
    let max_value = if kind == SortKind::Radix {
        MAX_RADIX_ELEMENT_VALUE
    } else {
        MAX_ELEMENT_VALUE
    };
    let mut rng = rand::rng();
    let len = rng.random_range(10..=MAX_LIST_LEN);
    (0..len).map(|_| rng.random_range(1..=max_value)).collect()
}

/// Parse a comma-separated custom list.
///
/// Size bounds are checked before token validity, then each token must be
/// non-empty and numeric. Nothing about the current session changes when
/// parsing fails.
pub fn parse_custom(text: &str) -> Result<Vec<i64>, InputError> {
    let tokens: Vec<&str> = text.split(',').collect();
    if tokens.len() > MAX_LIST_LEN {
        return Err(InputError::TooLong);
    }
    if tokens.len() < MIN_LIST_LEN {
        return Err(InputError::TooShort);
    }

    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(InputError::MissingElement);
        }
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_list_bounds() {
        for _ in 0..20 {
            let list = random_list(SortKind::Bubble);
            assert!(list.len() >= 10 && list.len() <= MAX_LIST_LEN);
            assert!(list.iter().all(|&v| (1..=MAX_ELEMENT_VALUE).contains(&v)));
        }
        let radix = random_list(SortKind::Radix);
        assert!(radix
            .iter()
            .all(|&v| (1..=MAX_RADIX_ELEMENT_VALUE).contains(&v)));
    }

    #[test]
    fn test_parse_valid_list() {
        assert_eq!(parse_custom("3, 1, 2"), Ok(vec![3, 1, 2]));
        assert_eq!(parse_custom("10,20,30,40"), Ok(vec![10, 20, 30, 40]));
    }

    #[test]
    fn test_parse_size_bounds() {
        assert_eq!(parse_custom("1,2"), Err(InputError::TooShort));
        let long = vec!["1"; 16].join(",");
        assert_eq!(parse_custom(&long), Err(InputError::TooLong));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert_eq!(parse_custom("1,,3"), Err(InputError::MissingElement));
        assert_eq!(
            parse_custom("1,two,3"),
            Err(InputError::NotANumber("two".into()))
        );
    }

    #[test]
    fn test_size_is_checked_before_token_validity() {
        // two malformed tokens, but the size bound fires first
        assert_eq!(parse_custom("x,"), Err(InputError::TooShort));
    }
}
