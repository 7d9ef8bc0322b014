//! Dictionary keys and message digits.

use std::fmt;
use std::str::FromStr;

use crate::error::{EnigmaError, KeyDefect, Result};

/// Smallest digit a message or key may contain.
pub const MIN_DIGIT: u8 = 1;

/// Largest digit a message or key may contain.
pub const MAX_DIGIT: u8 = 9;

/// A dictionary key: a non-empty run of digits 1-9.
///
/// Keys are stored as digit values, not ASCII, so they compare directly
/// against message slices.
///
/// # Example
///
/// ```
/// use enigma::Key;
///
/// let key = Key::try_from(234_u64).unwrap();
/// assert_eq!(key.digits(), &[2, 3, 4]);
/// assert_eq!(key.to_string(), "234");
///
/// assert!(Key::try_from(105_u64).is_err());
/// assert!("".parse::<Key>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Box<[u8]>);

impl Key {
    /// Build a key from digit values.
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        if digits.is_empty() {
            return Err(EnigmaError::invalid_key("", KeyDefect::Empty));
        }
        if let Some(&bad) = digits.iter().find(|d| !is_digit(**d)) {
            return Err(EnigmaError::invalid_key(
                render_lossy(digits),
                KeyDefect::BadDigit(digit_char(bad)),
            ));
        }
        Ok(Key(digits.into()))
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keys are never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<u64> for Key {
    type Error = EnigmaError;

    fn try_from(value: u64) -> Result<Self> {
        value.to_string().parse()
    }
}

impl TryFrom<&str> for Key {
    type Error = EnigmaError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl FromStr for Key {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(EnigmaError::invalid_key(s, KeyDefect::Empty));
        }
        let mut digits = Vec::with_capacity(s.len());
        for ch in s.chars() {
            match ch.to_digit(10) {
                Some(d) if d >= MIN_DIGIT as u32 => digits.push(d as u8),
                _ => return Err(EnigmaError::invalid_key(s, KeyDefect::BadDigit(ch))),
            }
        }
        Ok(Key(digits.into_boxed_slice()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&message_to_key(&self.0))
    }
}

/// Render a run of digits as the concatenated digit string used for keys.
///
/// # Example
///
/// ```
/// use enigma::message_to_key;
///
/// assert_eq!(message_to_key(&[2, 3, 4]), "234");
/// assert_eq!(message_to_key(&[]), "");
/// ```
pub fn message_to_key(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len());
    for &d in digits {
        out.push(digit_char(d));
    }
    out
}

/// Check that every message digit is in 1-9.
///
/// # Errors
///
/// Returns [`EnigmaError::InvalidInput`] for the first offending digit.
pub fn validate_message(message: &[u8]) -> Result<()> {
    match message.iter().position(|d| !is_digit(*d)) {
        Some(position) => Err(EnigmaError::InvalidInput {
            position,
            digit: message[position],
        }),
        None => Ok(()),
    }
}

#[inline]
fn is_digit(d: u8) -> bool {
    (MIN_DIGIT..=MAX_DIGIT).contains(&d)
}

/// Digits above 9 cannot be rendered as one char; `?` stands in for them in
/// error messages.
fn digit_char(d: u8) -> char {
    char::from_digit(d as u32, 10).unwrap_or('?')
}

fn render_lossy(digits: &[u8]) -> String {
    digits.iter().map(|d| digit_char(*d)).collect()
}
