//! Symbol tables shared by the encoder, decoder, normalizer and checksum engine.
//!
//! All tables are `const` data built at compile time. Nothing here is ever
//! mutated, so the tables can be read from any thread without coordination.

/// Canonical value alphabet, indexed by digit value (`I`, `L`, `O`, `U` excluded).
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Check symbol alphabet: the canonical digits followed by `*`, `~`, `$`, `=`, `U`.
pub const CHECK_ALPHABET: &[u8; 37] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ*~$=U";

/// Symbols that only ever appear as check symbols, never as value digits.
pub const CHECK_ONLY_SYMBOLS: &[u8; 5] = b"*~$=U";

/// Inverse of [`ALPHABET`], indexed by ASCII code.
///
/// Lowercase letters decode like their uppercase forms, `I`/`L` decode as 1 and
/// `O` as 0. `U` is deliberately absent.
const DECODE_TABLE: [Option<u8>; 128] = build_decode_table();

const fn build_decode_table() -> [Option<u8>; 128] {
    let mut table: [Option<u8>; 128] = [None; 128];
    let mut value = 0;
    while value < ALPHABET.len() {
        let symbol = ALPHABET[value];
        table[symbol as usize] = Some(value as u8);
        table[symbol.to_ascii_lowercase() as usize] = Some(value as u8);
        value += 1;
    }
    table[b'O' as usize] = Some(0);
    table[b'o' as usize] = Some(0);
    table[b'I' as usize] = Some(1);
    table[b'i' as usize] = Some(1);
    table[b'L' as usize] = Some(1);
    table[b'l' as usize] = Some(1);
    table
}

/// Maps a 5-bit group to its canonical symbol. Bits above the low five are ignored.
pub fn encode_digit(group: u32) -> u8 {
    ALPHABET[(group & 0x1F) as usize]
}

/// Maps a value in `0..37` to its check symbol.
pub(crate) fn check_symbol(value: u32) -> u8 {
    CHECK_ALPHABET[value as usize % CHECK_ALPHABET.len()]
}

/// Looks up the digit value of a symbol, tolerating case and look-alikes.
pub fn decode_byte(symbol: u8) -> Option<u8> {
    DECODE_TABLE.get(usize::from(symbol)).copied().flatten()
}

/// Like [`decode_byte`] for a `char`; anything outside ASCII is not a digit.
pub fn decode_symbol(symbol: char) -> Option<u8> {
    u8::try_from(symbol).ok().and_then(decode_byte)
}

/// Whether `symbol` already is a canonical digit (uppercase, no look-alikes).
pub fn is_canonical(symbol: u8) -> bool {
    symbol.is_ascii_digit()
        || (symbol.is_ascii_uppercase() && !matches!(symbol, b'I' | b'L' | b'O' | b'U'))
}

/// Zero-equivalents are skipped when stripping padding: `0`, `o`, `O` and `-`.
pub fn is_zero_equivalent(symbol: u8) -> bool {
    matches!(symbol, b'0' | b'o' | b'O' | b'-')
}

/// Folds ASCII `a-z` onto `A-Z`; every other byte is returned unchanged.
pub fn fold_upper(symbol: u8) -> u8 {
    symbol.to_ascii_uppercase()
}

/// Upper-cases `symbol` and rewrites the look-alikes `O` → `0` and `I`/`L` → `1`.
pub fn correct_look_alike(symbol: u8) -> u8 {
    match fold_upper(symbol) {
        b'O' => b'0',
        b'I' | b'L' => b'1',
        other => other,
    }
}
