//! The [`Base32`] value type with its encoder and decoder.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{ser, Deserialize, Serialize, Serializer};

use crate::alphabet;
use crate::check::Check;
use crate::errors::DecodeError;
use crate::normalize;

/// Most base-32 digits a `u32` can occupy.
pub const MAX_DIGITS: usize = 7;

/// The largest base-32 value that fits in a `u32` (`u32::MAX`).
///
/// Every digit carries 5 bits, so a `u32` holds six full digits plus two bits,
/// which is why the leading digit of a 7-digit value can be at most `3`.
pub const MAX_7_DIGIT_BASE32: &str = "3ZZZZZZ";

/// Shift of each 5-bit group, most significant first.
const GROUP_SHIFTS: [u32; MAX_DIGITS] = [30, 25, 20, 15, 10, 5, 0];

/// Returns the largest integer representable with `digits` base-32 digits.
///
/// `max_value_for_digits(1)` is 31 (`"Z"`), `max_value_for_digits(7)` is
/// `u32::MAX`. Widths of 0 or above [`MAX_DIGITS`] have no `u32` maximum.
pub const fn max_value_for_digits(digits: usize) -> Option<u32> {
    match digits {
        1..=6 => Some((1u32 << (5 * digits as u32)) - 1),
        MAX_DIGITS => Some(u32::MAX),
        _ => None,
    }
}

/// A base-32 number in canonical form.
///
/// Digits come from `0123456789ABCDEFGHJKMNPQRSTVWXYZ`, there is no leading
/// zero unless the value is exactly `"0"`, and values produced by [`encode`]
/// never exceed [`MAX_DIGITS`] characters. The empty string is the invalid
/// value; it is distinct from zero and displays as `<invalid>`. It is refused
/// by serialization, since deserialization would reject it as empty.
///
/// Values order numerically: a shorter canonical value is always smaller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Base32(String);

impl Base32 {
    /// Encodes an integer; same as the free function [`encode`].
    pub fn encode(value: u32) -> Self {
        encode(value)
    }

    /// Wraps `value` without validation; callers are responsible for conformity.
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Normalizes loosely formatted input into a canonical value.
    ///
    /// See [`normalize::normalize`] for the accepted input.
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        normalize::normalize(raw).map(|canonical| Self(canonical.into_owned()))
    }

    /// The invalid (empty) value.
    pub fn invalid() -> Self {
        Self(String::new())
    }

    /// Whether this is the invalid (empty) value.
    pub fn is_invalid(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the digits into an integer.
    pub fn decode(&self) -> Result<u32, DecodeError> {
        decode(&self.0)
    }

    /// Whether the value can be decoded without overflowing a `u32`.
    pub fn will_fit(&self) -> bool {
        will_fit(&self.0)
    }

    /// Checks the value against a check symbol.
    pub fn is_valid(&self, check: Check) -> bool {
        crate::check::is_valid(&self.0, check)
    }

    /// Left-pads with `0` until the result is at least `width` characters wide.
    ///
    /// The value must be valid or the result is meaningless. See
    /// [`normalize::trim`] for the inverse.
    pub fn pad(&self, width: usize) -> String {
        format!("{:0>width$}", self.0, width = width)
    }
}

impl fmt::Display for Base32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            f.write_str("<invalid>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl Ord for Base32 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes()))
    }
}

impl PartialOrd for Base32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Base32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_invalid() {
            return Err(ser::Error::custom("cannot serialize the invalid base-32 value"));
        }
        serializer.serialize_str(&self.0)
    }
}

impl FromStr for Base32 {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Base32 {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let canonical = normalize::normalize(&value)?.into_owned();
        Ok(Self(canonical))
    }
}

impl From<Base32> for String {
    fn from(value: Base32) -> Self {
        value.0
    }
}

impl AsRef<str> for Base32 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Translates an integer into canonical base-32 digits.
///
/// The integer is split into seven 5-bit groups, most significant first, and
/// every group before the first non-zero one is dropped. Zero encodes as `"0"`.
///
/// ```rust
/// use crock32_canonical::encode;
///
/// assert_eq!(encode(90).as_str(), "2T");
/// assert_eq!(encode(0).as_str(), "0");
/// assert_eq!(encode(u32::MAX).as_str(), "3ZZZZZZ");
/// ```
pub fn encode(value: u32) -> Base32 {
    let groups = GROUP_SHIFTS.map(|shift| (value >> shift) & 0x1F);
    let start = groups
        .iter()
        .position(|&group| group != 0)
        .unwrap_or(MAX_DIGITS - 1);

    let digits = groups[start..]
        .iter()
        .map(|&group| char::from(alphabet::encode_digit(group)))
        .collect();
    Base32(digits)
}

/// Translates base-32 digits into an integer.
///
/// Letters are case-insensitive and the look-alikes `I`/`L` and `O` read as
/// `1` and `0`. `U` is never a value digit.
///
/// # Errors
///
/// - [`DecodeError::EmptyInput`] for `""` (which is not zero);
/// - [`DecodeError::Overflow`] when [`will_fit`] fails, checked before any digit;
/// - [`DecodeError::InvalidDigit`] for the first unknown character.
///
/// ```rust
/// use crock32_canonical::{decode, DecodeError};
///
/// assert_eq!(decode("2t"), Ok(90));
/// assert_eq!(decode("4000000"), Err(DecodeError::Overflow));
/// ```
pub fn decode(text: &str) -> Result<u32, DecodeError> {
    if text.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    if !will_fit(text) {
        return Err(DecodeError::Overflow);
    }

    let mut shift = (text.chars().count() - 1) * 5;
    let mut result = 0u32;
    for symbol in text.chars() {
        let digit = alphabet::decode_symbol(symbol).ok_or(DecodeError::InvalidDigit(symbol))?;
        result |= u32::from(digit) << shift;
        shift = shift.saturating_sub(5);
    }
    Ok(result)
}

/// Whether `text` can be decoded into a `u32`.
///
/// Fewer than seven digits always fit, more than seven never do, and exactly
/// seven fit when the leading digit is worth at most 3. Length is counted in
/// characters. `text` is expected to be free of zero padding; padded input may
/// be reported as not fitting.
pub fn will_fit(text: &str) -> bool {
    match text.chars().count().cmp(&MAX_DIGITS) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => matches!(
            text.bytes().next().and_then(alphabet::decode_byte),
            Some(0..=3)
        ),
    }
}
