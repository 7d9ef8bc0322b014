//! Key lookup strategies used by the decoder.
//!
//! | Index | Probe cost | Duplicate keys |
//! |-------|------------|----------------|
//! | [`DigitTrie`] | O(candidate length) | rejected on insert |
//! | [`KeyScan`] | O(entries x key length) | reported while probing |

mod scan;
mod trie;

pub use scan::KeyScan;
pub use trie::{DigitTrie, TrieIter};

use crate::error::Result;

/// Outcome of looking up one candidate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Character mapped by the key equal to the candidate, if any.
    pub exact: Option<char>,
    /// Whether some key has the candidate as a proper prefix.
    pub extends: bool,
}

impl Probe {
    /// Neither a key nor a prefix of one.
    pub const MISS: Probe = Probe {
        exact: None,
        extends: false,
    };
}

/// Lookup seam between the decoding loop and the key storage.
pub trait KeyIndex {
    /// Look up `candidate` (digit values 1-9, never empty).
    fn probe(&self, candidate: &[u8]) -> Result<Probe>;

    /// Number of dictionary entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I: KeyIndex + ?Sized> KeyIndex for &I {
    fn probe(&self, candidate: &[u8]) -> Result<Probe> {
        (**self).probe(candidate)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
