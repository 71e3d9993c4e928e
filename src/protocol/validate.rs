//! # Parameter Validation
//!
//! Every encoder checks its parameters against the printer's documented
//! limits before producing a byte. The helpers here are the only place those
//! checks are expressed, so every error carries the same shape: the
//! parameter, the rejected value, and the legal bound or set.

use std::fmt::Debug;

use crate::error::ValidationError;

/// Check that `value` lies in `min..=max` and return it as a wire byte.
///
/// ## Example
///
/// ```
/// use hoin::protocol::validate::check_range;
///
/// assert_eq!(check_range("n", 9, 1, 9), Ok(9));
/// assert!(check_range("n", 10, 1, 9).is_err());
/// ```
pub fn check_range(name: &'static str, value: i32, min: u8, max: u8) -> Result<u8, ValidationError> {
    if value < i32::from(min) || value > i32::from(max) {
        return Err(ValidationError::OutOfRange {
            name,
            value: i64::from(value),
            min: i64::from(min),
            max: i64::from(max),
        });
    }
    Ok(value as u8)
}

/// Check that the raw byte `value` encodes one of `choices`.
///
/// Used at the boundary where a mode arrives as a bare number (from a
/// config file, a CLI flag, another protocol) and must become a closed enum.
pub fn check_choice<T>(value: u8, choices: &[T]) -> Result<T, ValidationError>
where
    T: Copy + Debug + Into<u8>,
{
    choices
        .iter()
        .copied()
        .find(|choice| (*choice).into() == value)
        .ok_or_else(|| ValidationError::InvalidChoice {
            value: value.to_string(),
            choices: choices
                .iter()
                .map(|c| format!("{}={:?}", (*c).into(), c))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Check that every character of `data` is drawn from `accepted`.
pub fn check_charset(data: &str, accepted: &'static str) -> Result<(), ValidationError> {
    match data.chars().find(|c| !accepted.contains(*c)) {
        Some(character) => Err(ValidationError::InvalidCharacter {
            character,
            accepted,
        }),
        None => Ok(()),
    }
}
