//! Linear scan over the raw dictionary entries.

use crate::error::{EnigmaError, Result};
use crate::key::{message_to_key, Key};

use super::{KeyIndex, Probe};

/// Linear scan over the raw entry list.
///
/// Every probe inspects the whole key set. Entries are kept exactly as given,
/// so a repeated key is only noticed when a candidate hits it, at which point
/// the probe fails with [`EnigmaError::AmbiguousDictionary`].
#[derive(Clone, Debug, Default)]
pub struct KeyScan {
    entries: Vec<(Key, char)>,
}

impl KeyScan {
    pub fn new(entries: Vec<(Key, char)>) -> Self {
        Self { entries }
    }

    /// Parse string keys into a scan index.
    ///
    /// # Errors
    ///
    /// Fails with [`EnigmaError::InvalidDictionary`] on the first malformed key.
    pub fn from_keyed<K, I>(entries: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, char)>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, ch)| k.as_ref().parse::<Key>().map(|key| (key, ch)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(Key, char)] {
        &self.entries
    }
}

impl KeyIndex for KeyScan {
    fn probe(&self, candidate: &[u8]) -> Result<Probe> {
        let mut probe = Probe::MISS;
        let mut matches = 0_usize;
        for (key, ch) in &self.entries {
            let digits = key.digits();
            if digits == candidate {
                matches += 1;
                probe.exact = Some(*ch);
            } else if digits.starts_with(candidate) {
                probe.extends = true;
            }
        }
        if matches > 1 {
            return Err(EnigmaError::AmbiguousDictionary {
                candidate: message_to_key(candidate),
                matches,
            });
        }
        Ok(probe)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_matches_trie_semantics() {
        let scan = KeyScan::from_keyed([("23", 'N'), ("234", ' '), ("37", 'A')]).unwrap();
        assert_eq!(
            scan.probe(&[2, 3]).unwrap(),
            Probe {
                exact: Some('N'),
                extends: true
            }
        );
        assert_eq!(
            scan.probe(&[3]).unwrap(),
            Probe {
                exact: None,
                extends: true
            }
        );
        assert_eq!(scan.probe(&[9]).unwrap(), Probe::MISS);
    }

    #[test]
    fn test_duplicate_entries_are_ambiguous_on_hit() {
        let scan = KeyScan::from_keyed([("23", 'N'), ("23", 'M'), ("5", 'x')]).unwrap();
        assert_eq!(scan.len(), 3);
        assert_eq!(scan.probe(&[5]).unwrap().exact, Some('x'));
        // a proper prefix of the repeated key is still fine
        assert!(scan.probe(&[2]).unwrap().extends);
        assert_eq!(
            scan.probe(&[2, 3]),
            Err(EnigmaError::AmbiguousDictionary {
                candidate: "23".to_string(),
                matches: 2
            })
        );
    }

    #[test]
    fn test_malformed_key_rejected() {
        assert!(KeyScan::from_keyed([("20", 'a')]).is_err());
        assert!(KeyScan::from_keyed([("", 'a')]).is_err());
    }
}
