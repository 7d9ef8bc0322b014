//! Dictionary-driven digit decoder.
//!
//! Messages are sequences of digits 1-9. A dictionary maps digit-string keys
//! to characters. Decoding walks the message left to right, replacing the
//! longest key that starts at each position and passing unmatched digits
//! through unchanged.
//!
//! # Example
//!
//! ```
//! use enigma::{Decoder, EnigmaError};
//!
//! let decoder = Decoder::from_keyed([("23", 'N'), ("234", ' '), ("37", 'A')]).unwrap();
//!
//! // `234` occludes `23`
//! assert_eq!(decoder.decode(&[2, 3, 4]).unwrap(), " ");
//! // `237` is no key, so the decoder rolls back to `23`
//! assert_eq!(decoder.decode(&[2, 3, 7]).unwrap(), "N7");
//!
//! assert!(matches!(
//!     decoder.decode(&[2, 0]),
//!     Err(EnigmaError::InvalidInput { position: 1, digit: 0 })
//! ));
//! ```
//!
//! # Diagnostics
//!
//! Window decisions are reported through [`tracing`] at `trace` level and a
//! per-message summary at `debug` level. The library never installs a
//! subscriber.

pub mod cli;
pub mod decoder;
pub mod error;
pub mod index;
pub mod key;

pub use decoder::{Decoder, Segment};
pub use error::{EnigmaError, KeyDefect, Result};
pub use index::{DigitTrie, KeyIndex, KeyScan, Probe};
pub use key::{message_to_key, validate_message, Key};
