//! Crockford base-32 notation for unsigned 32-bit integers.
//!
//! Values are written with the 32 symbols `0123456789ABCDEFGHJKMNPQRSTVWXYZ`.
//! Decoding and normalization forgive the usual transcription slips (case,
//! `O` for `0`, `I`/`L` for `1`, hyphens, zero padding), and an optional mod-37
//! check symbol catches wrong or swapped digits. This is not a byte encoding:
//! only integers up to `u32::MAX` are translated.
//!
//! ## Quick Start
//!
//! ```rust
//! use crock32_canonical::{encode, Base32, Check, CheckedCode};
//!
//! // Producing a code
//! let value = encode(8730);
//! let check = Check::generate(8730);
//! assert_eq!(value.as_str(), "8GT");
//!
//! // Reading one back from sloppy input
//! let typed = Base32::parse("0-8gt")?;
//! assert_eq!(typed.decode()?, 8730);
//! assert!(typed.is_valid(check));
//!
//! // Or with the check symbol attached
//! let code = CheckedCode::generate(8730);
//! assert_eq!(CheckedCode::parse(&code.to_string())?.decode()?, 8730);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Key Types
//!
//! - [`Base32`] - canonical digits, produced by [`encode`] or [`Base32::parse`]
//! - [`Check`] - check symbol, produced by [`Check::generate`] or [`Check::parse`]
//! - [`CheckedCode`] - digits followed by their check symbol
//!
//! Every operation is a pure function over `const` tables.

#![deny(missing_docs)]

/// Encode, decode and checksum symbol tables.
pub mod alphabet;
/// Check symbol generation, parsing and validation.
pub mod check;
/// Values paired with their check symbol.
pub mod code;
/// Error types for decoding and check parsing.
pub mod errors;
/// Input normalization and trimming of padded values.
pub mod normalize;
/// The canonical value type, encoder and decoder.
pub mod value;

pub use check::{is_valid, Check, CHECK_MODULUS};
pub use code::CheckedCode;
pub use errors::{CheckError, CodeError, DecodeError};
pub use normalize::{normalize, trim};
pub use value::{
    decode, encode, max_value_for_digits, will_fit, Base32, MAX_7_DIGIT_BASE32, MAX_DIGITS,
};
