//! Clean-up of human-typed input into canonical [`Base32`] digits.
//!
//! Accepted sloppiness: lowercase letters, the look-alikes `O` (for `0`) and
//! `I`/`L` (for `1`), hyphens anywhere, and leading zero padding.

use std::borrow::Cow;

use crate::alphabet;
use crate::errors::DecodeError;
use crate::value::Base32;

/// Normalizes `raw` into canonical base-32 digits without decoding them.
///
/// Input that is already canonical is returned borrowed. Otherwise every
/// character must be an ASCII digit, a letter other than `u`/`U`, or a hyphen.
/// Leading zero-equivalents (`0`, `o`, `O`, `-`) are stripped, interior
/// hyphens are dropped, letters are upper-cased and look-alikes replaced.
///
/// Input without any non-zero digit collapses to `"0"`; input made only of
/// hyphens has no digit at all and is rejected as empty. Overflow is not
/// checked here; see [`crate::decode`].
///
/// ```rust
/// use crock32_canonical::normalize;
///
/// assert_eq!(normalize("AAA-bbb-o-l")?, "AAABBB01");
/// assert_eq!(normalize("00-Example-00")?, "EXAMP1E00");
/// assert_eq!(normalize("00--oo")?, "0");
/// # Ok::<(), crock32_canonical::DecodeError>(())
/// ```
pub fn normalize(raw: &str) -> Result<Cow<'_, str>, DecodeError> {
    let bytes = raw.as_bytes();
    let Some(&first) = bytes.first() else {
        return Err(DecodeError::EmptyInput);
    };

    if first != b'0' && bytes.iter().all(|&b| alphabet::is_canonical(b)) {
        return Ok(Cow::Borrowed(raw));
    }

    if let Some(invalid) = raw.chars().find(|&c| !is_accepted(c)) {
        return Err(DecodeError::InvalidDigit(invalid));
    }

    let Some(start) = bytes.iter().position(|&b| !alphabet::is_zero_equivalent(b)) else {
        return if bytes.iter().all(|&b| b == b'-') {
            Err(DecodeError::EmptyInput)
        } else {
            Ok(Cow::Borrowed("0"))
        };
    };

    let interior_hyphens = bytes[start + 1..].iter().filter(|&&b| b == b'-').count();
    let mut result = String::with_capacity(bytes.len() - start - interior_hyphens);
    for &symbol in &bytes[start..] {
        if symbol != b'-' {
            result.push(char::from(alphabet::correct_look_alike(symbol)));
        }
    }
    Ok(Cow::Owned(result))
}

/// Strips leading zero-equivalents (`0`, `o`, `O`, `-`) from padded digits.
///
/// Inverse of [`Base32::pad`]. The input must otherwise be valid; nothing else
/// is rewritten. When every character is a zero-equivalent the result is `"0"`
/// if any zero digit is present, else the invalid value.
///
/// ```rust
/// use crock32_canonical::{encode, trim};
///
/// let padded = encode(90).pad(6);
/// assert_eq!(padded, "00002T");
/// assert_eq!(trim(&padded), encode(90));
/// ```
pub fn trim(padded: &str) -> Base32 {
    let bytes = padded.as_bytes();
    match bytes.iter().position(|&b| !alphabet::is_zero_equivalent(b)) {
        Some(start) => Base32::new_unchecked(&padded[start..]),
        None if bytes.iter().any(|&b| b != b'-') => Base32::new_unchecked("0"),
        None => Base32::invalid(),
    }
}

fn is_accepted(symbol: char) -> bool {
    symbol.is_ascii_digit()
        || (symbol.is_ascii_alphabetic() && !symbol.eq_ignore_ascii_case(&'u'))
        || symbol == '-'
}
