//! Core logic behind the `enigma` binary.
//!
//! Kept in the library so the argument, dictionary, and message handling can
//! be tested without spawning a process.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use thiserror::Error;

use crate::decoder::Decoder;
use crate::error::EnigmaError;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dictionary file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid message: {0}")]
    Message(String),
    #[error(transparent)]
    Enigma(#[from] EnigmaError),
}

// ── Arguments ─────────────────────────────────────────────────────────────

/// How much diagnostic output the binary writes to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub dictionary: String,
    pub verbosity: Verbosity,
}

pub const USAGE: &str = "usage: enigma [--verbose | --quiet] <dictionary.json>";

/// Parse command-line arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dictionary = None;
    let mut verbosity = Verbosity::Normal;
    for arg in args {
        match arg.as_ref() {
            "-v" | "--verbose" => verbosity = Verbosity::Verbose,
            "-q" | "--quiet" => verbosity = Verbosity::Quiet,
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown flag {flag}\n{USAGE}")));
            }
            path => {
                if dictionary.replace(path.to_string()).is_some() {
                    return Err(CliError::Usage(USAGE.to_string()));
                }
            }
        }
    }
    match dictionary {
        Some(dictionary) => Ok(Args {
            dictionary,
            verbosity,
        }),
        None => Err(CliError::Usage(USAGE.to_string())),
    }
}

// ── Input ─────────────────────────────────────────────────────────────────

/// Dictionary object members in file order, repeated keys included.
struct DictionaryEntries(Vec<(String, char)>);

impl<'de> Deserialize<'de> for DictionaryEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = DictionaryEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of digit-string keys to one-character strings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, char>()? {
                    entries.push(entry);
                }
                Ok(DictionaryEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Build a decoder from a JSON object such as `{"23": "N", "234": " "}`.
///
/// Every value must be a one-character string. A key written twice is
/// reported as a duplicate rather than overwritten.
pub fn load_dictionary(json: &str) -> Result<Decoder, CliError> {
    let DictionaryEntries(entries) = serde_json::from_str(json)?;
    Ok(Decoder::from_keyed(entries)?)
}

/// Parse message text into digits.
///
/// Digits may be contiguous (`123`) or separated by commas and whitespace
/// (`1, 2, 3`). Range checking is left to the decoder, so `0` parses.
pub fn parse_message(text: &str) -> Result<Vec<u8>, CliError> {
    let mut digits = Vec::with_capacity(text.len());
    for token in text.split(|c: char| c == ',' || c.is_whitespace()) {
        for ch in token.chars() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(CliError::Message(format!("unexpected character {ch:?}"))),
            }
        }
    }
    Ok(digits)
}

/// Decode `message_text` with the dictionary in `dictionary_json`.
pub fn run(dictionary_json: &str, message_text: &str) -> Result<String, CliError> {
    let decoder = load_dictionary(dictionary_json)?;
    let message = parse_message(message_text)?;
    Ok(decoder.decode(&message)?)
}
