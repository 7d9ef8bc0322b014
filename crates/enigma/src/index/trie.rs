//! Arena-backed digit trie, the default key index.

use crate::error::{EnigmaError, KeyDefect, Result};
use crate::key::Key;

use super::{KeyIndex, Probe};

const FANOUT: usize = 9;

/// Trie node. Children are `Option<u32>` indices into the owning arena,
/// slot `d - 1` holding the child for digit `d`.
#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: [Option<u32>; FANOUT],
    v: Option<char>,
}

impl TrieNode {
    #[inline]
    fn child(&self, digit: u8) -> Option<u32> {
        self.children[(digit - 1) as usize]
    }

    #[inline]
    fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

/// Arena-backed trie keyed by digit sequences.
///
/// Exact-match and prefix-existence checks both cost one walk of the
/// candidate, independent of how many keys are stored.
///
/// # Example
///
/// ```
/// use enigma::{DigitTrie, Key, KeyIndex};
///
/// let mut trie = DigitTrie::new();
/// trie.insert(Key::try_from(23_u64).unwrap(), 'N').unwrap();
/// trie.insert(Key::try_from(234_u64).unwrap(), ' ').unwrap();
///
/// let probe = trie.probe(&[2, 3]).unwrap();
/// assert_eq!(probe.exact, Some('N'));
/// assert!(probe.extends);
/// ```
#[derive(Clone, Debug)]
pub struct DigitTrie {
    nodes: Vec<TrieNode>,
    size: usize,
}

impl DigitTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            size: 0,
        }
    }

    /// Build a trie from `(key, char)` pairs.
    ///
    /// # Errors
    ///
    /// Fails with [`EnigmaError::InvalidDictionary`] on the first repeated key.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Key, char)>,
    {
        let mut trie = Self::new();
        for (key, ch) in entries {
            trie.insert(key, ch)?;
        }
        Ok(trie)
    }

    fn push_node(&mut self) -> u32 {
        self.nodes.push(TrieNode::default());
        (self.nodes.len() - 1) as u32
    }

    /// Insert a key. A key that is already present is a collision and leaves
    /// the trie untouched.
    pub fn insert(&mut self, key: Key, ch: char) -> Result<()> {
        let mut curr = 0_u32;
        for &d in key.digits() {
            curr = match self.nodes[curr as usize].child(d) {
                Some(next) => next,
                None => {
                    let next = self.push_node();
                    self.nodes[curr as usize].children[(d - 1) as usize] = Some(next);
                    next
                }
            };
        }
        let slot = &mut self.nodes[curr as usize].v;
        if slot.is_some() {
            return Err(EnigmaError::invalid_key(
                key.to_string(),
                KeyDefect::Duplicate,
            ));
        }
        *slot = Some(ch);
        self.size += 1;
        Ok(())
    }

    pub fn get(&self, key: &Key) -> Option<char> {
        self.find(key.digits())
            .and_then(|idx| self.nodes[idx as usize].v)
    }

    /// Entries in lexicographic digit order.
    pub fn iter(&self) -> TrieIter<'_> {
        TrieIter {
            trie: self,
            stack: vec![(0, Vec::new())],
        }
    }

    fn find(&self, digits: &[u8]) -> Option<u32> {
        let mut curr = 0_u32;
        for &d in digits {
            // Out-of-range digits have no slot and can only miss.
            if !(1..=FANOUT as u8).contains(&d) {
                return None;
            }
            curr = self.nodes[curr as usize].child(d)?;
        }
        Some(curr)
    }
}

impl Default for DigitTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyIndex for DigitTrie {
    fn probe(&self, candidate: &[u8]) -> Result<Probe> {
        Ok(match self.find(candidate) {
            Some(idx) => {
                let node = &self.nodes[idx as usize];
                Probe {
                    exact: node.v,
                    extends: node.has_children(),
                }
            }
            None => Probe::MISS,
        })
    }

    fn len(&self) -> usize {
        self.size
    }
}

/// Pre-order walk over a [`DigitTrie`].
pub struct TrieIter<'a> {
    trie: &'a DigitTrie,
    stack: Vec<(u32, Vec<u8>)>,
}

impl Iterator for TrieIter<'_> {
    type Item = (Key, char);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, path)) = self.stack.pop() {
            let node = &self.trie.nodes[idx as usize];
            for (slot, child) in node.children.iter().enumerate().rev() {
                if let Some(child) = child {
                    let mut child_path = path.clone();
                    child_path.push(slot as u8 + 1);
                    self.stack.push((*child, child_path));
                }
            }
            if let Some(ch) = node.v {
                // Paths only ever hold digits 1-9 and are non-empty here.
                if let Ok(key) = Key::from_digits(&path) {
                    return Some((key, ch));
                }
            }
        }
        None
    }
}
