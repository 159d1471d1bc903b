//! The GRid check character.
//!
//! A modulo-37 checksum over the 36-symbol alphabet `0-9A-Z`. It covers the
//! first 17 characters of an identifier, i.e. the ID scheme, issuer code and
//! release number, and detects single-symbol transcription errors as well as
//! most adjacent transpositions.
//!
//! ```text
//! acc = 36
//! for c in payload[0..17]:
//!     acc += index(c)
//!     if acc > 36:  acc -= 36
//!     acc *= 2
//!     if acc >= 37: acc -= 37
//! acc = 37 - acc
//! if acc == 36: acc = 0
//! check = ALPHABET[acc]
//! ```

/// Symbols a check character is drawn from, in index order.
pub const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Number of leading identifier characters covered by the check character.
pub const PAYLOAD_LEN: usize = 17;

const MODULUS: u32 = 37;
const RADIX: u32 = 36;

/// Returns the position of `c` in [`ALPHABET`].
///
/// Lower-case letters are not members; callers upper-case first.
#[inline]
pub fn symbol_index(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Computes the check character for `payload`.
///
/// Only the first [`PAYLOAD_LEN`] characters are consumed. Shorter payloads
/// are processed as they are. Returns `None` as soon as a character outside
/// [`ALPHABET`] is met; no partial result is produced.
pub fn compute_check(payload: &str) -> Option<char> {
    let mut acc = RADIX;

    for c in payload.chars().take(PAYLOAD_LEN) {
        acc += symbol_index(c)?;
        if acc > RADIX {
            acc -= RADIX;
        }
        acc *= 2;
        if acc >= MODULUS {
            acc -= MODULUS;
        }
    }

    // acc stays within 1..=36 throughout, so the result indexes 0..=35.
    acc = MODULUS - acc;
    if acc == RADIX {
        acc = 0;
    }

    ALPHABET.get(acc as usize).copied()
}

/// Verifies a compact identifier (17 payload characters plus check character).
///
/// Returns false for any input that is not exactly 18 characters long.
pub fn verify(compact: &str) -> bool {
    if compact.chars().count() != PAYLOAD_LEN + 1 {
        return false;
    }
    let Some(check) = compact.chars().last() else {
        return false;
    };
    let payload: String = compact.chars().take(PAYLOAD_LEN).collect();
    compute_check(&payload) == Some(check)
}
