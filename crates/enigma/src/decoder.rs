//! Longest-match decoding with backtrack and literal passthrough.
//!
//! The message is consumed left to right. From each start position the
//! candidate window grows one digit at a time while some key still has it as
//! a proper prefix. Once it can no longer grow, the window is finalized by
//! exactly one [`Step`]:
//!
//! - the window is itself a key: emit its character;
//! - a shorter window from the same start was a key: roll back to it;
//! - nothing matched: emit the digits verbatim, minus the last one unless
//!   the window is a single digit.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

use tracing::{debug, trace};

use crate::error::{EnigmaError, Result};
use crate::index::{DigitTrie, KeyIndex, Probe};
use crate::key::{message_to_key, validate_message, Key};

/// One fragment of decoded output together with the input it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Digits replaced by a dictionary character.
    Mapped { span: Range<usize>, ch: char },
    /// Digits passed through unchanged.
    Literal { span: Range<usize> },
}

impl Segment {
    pub fn span(&self) -> &Range<usize> {
        match self {
            Segment::Mapped { span, .. } | Segment::Literal { span } => span,
        }
    }

    /// Append this fragment's text to `out`.
    pub fn render_into(&self, message: &[u8], out: &mut String) {
        match self {
            Segment::Mapped { ch, .. } => out.push(*ch),
            Segment::Literal { span } => out.push_str(&message_to_key(&message[span.clone()])),
        }
    }
}

/// Decision taken for the current candidate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    ExtendFurther,
    ExactMatch(char),
    BacktrackToLastMatch { end: usize, ch: char },
    EmitLiteral,
}

impl Step {
    fn select(probe: Probe, last_match: Option<(usize, char)>, at_message_end: bool) -> Step {
        if probe.extends && !at_message_end {
            return Step::ExtendFurther;
        }
        match (probe.exact, last_match) {
            (Some(ch), _) => Step::ExactMatch(ch),
            (None, Some((end, ch))) => Step::BacktrackToLastMatch { end, ch },
            (None, None) => Step::EmitLiteral,
        }
    }
}

/// Dictionary-driven digit decoder.
///
/// Immutable after construction; a shared reference can decode from any
/// number of threads at once.
///
/// # Example
///
/// ```
/// use enigma::Decoder;
///
/// let decoder = Decoder::from_entries([
///     (23, 'N'),
///     (234, ' '),
///     (89, 'H'),
///     (78, 'Q'),
///     (37, 'A'),
/// ])
/// .unwrap();
///
/// let message = [1, 2, 3, 7, 3, 2, 3, 7, 2, 3, 4, 8, 9, 7, 8];
/// assert_eq!(decoder.decode(&message).unwrap(), "1N73N7 HQ");
/// ```
#[derive(Clone, Debug)]
pub struct Decoder<I = DigitTrie> {
    index: I,
}

impl Decoder<DigitTrie> {
    /// Build a decoder from integer keys.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidDictionary`] when a key contains a `0` digit or
    /// appears twice.
    pub fn from_entries<E>(entries: E) -> Result<Self>
    where
        E: IntoIterator<Item = (u64, char)>,
    {
        let mut trie = DigitTrie::new();
        for (k, ch) in entries {
            trie.insert(Key::try_from(k)?, ch)?;
        }
        Ok(Self::with_index(trie))
    }

    /// Build a decoder from digit-string keys.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidDictionary`] when a key is empty, contains
    /// anything but digits 1-9, or appears twice.
    pub fn from_keyed<K, E>(entries: E) -> Result<Self>
    where
        K: AsRef<str>,
        E: IntoIterator<Item = (K, char)>,
    {
        let mut trie = DigitTrie::new();
        for (k, ch) in entries {
            trie.insert(k.as_ref().parse()?, ch)?;
        }
        Ok(Self::with_index(trie))
    }
}

impl TryFrom<HashMap<u64, char>> for Decoder<DigitTrie> {
    type Error = EnigmaError;

    fn try_from(map: HashMap<u64, char>) -> Result<Self> {
        Self::from_entries(map)
    }
}

impl TryFrom<BTreeMap<u64, char>> for Decoder<DigitTrie> {
    type Error = EnigmaError;

    fn try_from(map: BTreeMap<u64, char>) -> Result<Self> {
        Self::from_entries(map)
    }
}

impl<I: KeyIndex> Decoder<I> {
    pub fn with_index(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Decode `message` into text.
    ///
    /// # Errors
    ///
    /// - [`EnigmaError::InvalidInput`] if a digit is outside 1-9
    /// - [`EnigmaError::AmbiguousDictionary`] if the index reports two keys
    ///   equal to the same window
    pub fn decode(&self, message: &[u8]) -> Result<String> {
        let segments = self.segment(message)?;
        let mut out = String::with_capacity(message.len());
        for segment in &segments {
            segment.render_into(message, &mut out);
        }
        debug!(
            digits = message.len(),
            segments = segments.len(),
            result = %out,
            "decoded message"
        );
        Ok(out)
    }

    /// Split `message` into output fragments without rendering them.
    ///
    /// The returned spans are contiguous and cover the whole message.
    pub fn segment(&self, message: &[u8]) -> Result<Vec<Segment>> {
        validate_message(message)?;

        let mut segments = Vec::new();
        let mut start = 0;
        let mut end = 1;
        let mut last_match: Option<(usize, char)> = None;

        while start < message.len() {
            let probe = self.index.probe(&message[start..end])?;
            if let Some(ch) = probe.exact {
                last_match = Some((end, ch));
            }

            let step = Step::select(probe, last_match, end == message.len());
            trace!(start, end, ?step, "window");

            let segment = match step {
                Step::ExtendFurther => {
                    end += 1;
                    continue;
                }
                Step::ExactMatch(ch) => Segment::Mapped {
                    span: start..end,
                    ch,
                },
                Step::BacktrackToLastMatch { end: match_end, ch } => {
                    end = match_end;
                    Segment::Mapped {
                        span: start..end,
                        ch,
                    }
                }
                Step::EmitLiteral => {
                    if end > start + 1 {
                        end -= 1;
                    }
                    Segment::Literal { span: start..end }
                }
            };

            segments.push(segment);
            start = end;
            end = start + 1;
            last_match = None;
        }

        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeyDefect;
    use crate::index::KeyScan;

    fn sample() -> Decoder {
        Decoder::from_entries([(23, 'N'), (234, ' '), (89, 'H'), (78, 'Q'), (37, 'A')]).unwrap()
    }

    #[test]
    fn test_step_select() {
        let grow = Probe {
            exact: None,
            extends: true,
        };
        assert_eq!(Step::select(grow, None, false), Step::ExtendFurther);
        assert_eq!(Step::select(grow, None, true), Step::EmitLiteral);

        let exact_and_grow = Probe {
            exact: Some('N'),
            extends: true,
        };
        assert_eq!(
            Step::select(exact_and_grow, Some((2, 'N')), false),
            Step::ExtendFurther
        );
        assert_eq!(
            Step::select(exact_and_grow, Some((2, 'N')), true),
            Step::ExactMatch('N')
        );
        assert_eq!(
            Step::select(Probe::MISS, Some((2, 'N')), false),
            Step::BacktrackToLastMatch { end: 2, ch: 'N' }
        );
        assert_eq!(Step::select(Probe::MISS, None, false), Step::EmitLiteral);
    }

    #[test]
    fn test_worked_example() {
        let message = [1, 2, 3, 7, 3, 2, 3, 7, 2, 3, 4, 8, 9, 7, 8];
        assert_eq!(sample().decode(&message).unwrap(), "1N73N7 HQ");
    }

    #[test]
    fn test_segments_of_worked_example() {
        let message = [1, 2, 3, 7, 3, 2, 3, 7, 2, 3, 4, 8, 9, 7, 8];
        let segments = sample().segment(&message).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal { span: 0..1 },
                Segment::Mapped { span: 1..3, ch: 'N' },
                Segment::Literal { span: 3..4 },
                Segment::Literal { span: 4..5 },
                Segment::Mapped { span: 5..7, ch: 'N' },
                Segment::Literal { span: 7..8 },
                Segment::Mapped { span: 8..11, ch: ' ' },
                Segment::Mapped { span: 11..13, ch: 'H' },
                Segment::Mapped { span: 13..15, ch: 'Q' },
            ]
        );
    }

    #[test]
    fn test_backtrack_to_shorter_key() {
        let decoder = Decoder::from_entries([(23, 'N'), (234, ' '), (37, 'A')]).unwrap();
        assert_eq!(decoder.decode(&[2, 3, 7]).unwrap(), "N7");
    }

    #[test]
    fn test_literal_window_shrinks_by_one() {
        let decoder = Decoder::from_entries([(234, 'x')]).unwrap();
        let segments = decoder.segment(&[2, 3, 5]).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal { span: 0..2 },
                Segment::Literal { span: 2..3 },
            ]
        );
        assert_eq!(decoder.decode(&[2, 3, 5]).unwrap(), "235");
    }

    #[test]
    fn test_single_digit_literal_is_not_shrunk() {
        let decoder = Decoder::from_entries([(45, 'x')]).unwrap();
        assert_eq!(
            decoder.segment(&[7]).unwrap(),
            vec![Segment::Literal { span: 0..1 }]
        );
        // live prefix at message end, one digit wide
        assert_eq!(
            decoder.segment(&[4]).unwrap(),
            vec![Segment::Literal { span: 0..1 }]
        );
    }

    #[test]
    fn test_exact_match_at_message_end_wins_over_longer_key() {
        let decoder = Decoder::from_entries([(23, 'N'), (234, ' ')]).unwrap();
        assert_eq!(decoder.decode(&[2, 3]).unwrap(), "N");
    }

    #[test]
    fn test_invalid_input_rejected_before_matching() {
        assert_eq!(
            sample().decode(&[2, 3, 0]),
            Err(EnigmaError::InvalidInput {
                position: 2,
                digit: 0
            })
        );
    }

    #[test]
    fn test_construction_rejects_bad_keys() {
        assert_eq!(
            Decoder::from_entries([(20, 'x')]).unwrap_err(),
            EnigmaError::InvalidDictionary {
                key: "20".to_string(),
                defect: KeyDefect::BadDigit('0')
            }
        );
        assert_eq!(
            Decoder::from_entries([(12, 'x'), (12, 'y')]).unwrap_err(),
            EnigmaError::InvalidDictionary {
                key: "12".to_string(),
                defect: KeyDefect::Duplicate
            }
        );
        assert!(Decoder::from_keyed([("", 'x')]).is_err());
    }

    #[test]
    fn test_scan_index_reports_ambiguity() {
        let scan = KeyScan::from_keyed([("23", 'N'), ("23", 'M')]).unwrap();
        let decoder = Decoder::with_index(scan);
        assert_eq!(decoder.decode(&[1, 1]).unwrap(), "11");
        assert!(matches!(
            decoder.decode(&[1, 2, 3]),
            Err(EnigmaError::AmbiguousDictionary { .. })
        ));
    }

    #[test]
    fn test_try_from_maps() {
        let map: HashMap<u64, char> = [(1, 'a'), (12, 'b')].into_iter().collect();
        let decoder: Decoder = Decoder::try_from(map).unwrap();
        assert_eq!(decoder.decode(&[1, 2, 1, 3]).unwrap(), "ba3");

        let map: BTreeMap<u64, char> = [(9, 'z')].into_iter().collect();
        let decoder: Decoder = Decoder::try_from(map).unwrap();
        assert_eq!(decoder.decode(&[9, 9]).unwrap(), "zz");
    }
}
