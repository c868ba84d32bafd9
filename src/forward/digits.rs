//! Digit alphabet
//!
//! Numbers are strings over a 12-symbol alphabet: `'0'..='9'` followed by
//! `':'` and `';'`, i.e. the two ASCII successors of `'9'`. Every symbol maps
//! to the code `c - '0'`, which is also the child slot used by both tries.

/// Number of symbols in the digit alphabet.
pub const ALPHABET_SIZE: usize = 12;

/// Map a byte to its digit code, or `None` if it is outside the alphabet.
#[inline]
pub fn digit_code(byte: u8) -> Option<usize> {
    match byte {
        b'0'..=b';' => Some((byte - b'0') as usize),
        _ => None,
    }
}

/// Map a digit code back to its character.
///
/// Codes are always produced by [`digit_code`] or by iterating
/// `0..ALPHABET_SIZE`, so the value is in range.
#[inline]
pub fn digit_char(code: usize) -> char {
    debug_assert!(code < ALPHABET_SIZE);
    (b'0' + code as u8) as char
}

/// Whether `byte` belongs to the digit alphabet.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    digit_code(byte).is_some()
}

/// Whether `num` is a valid number: non-empty and made of alphabet symbols only.
pub fn is_number(num: &str) -> bool {
    !num.is_empty() && num.bytes().all(is_digit)
}

/// Iterate the digit codes of a string already known to be a valid number.
pub(crate) fn codes(num: &str) -> impl Iterator<Item = usize> + '_ {
    num.bytes().filter_map(digit_code)
}

/// Reduce an arbitrary string to the set of distinct digit codes it contains,
/// in ascending order. Characters outside the alphabet are ignored.
pub fn digit_set(set: &str) -> Vec<usize> {
    let mut present = [false; ALPHABET_SIZE];
    for code in codes(set) {
        present[code] = true;
    }
    (0..ALPHABET_SIZE).filter(|&code| present[code]).collect()
}

/// Count the alphabet symbols in `s`, duplicates included.
pub fn count_digits(s: &str) -> usize {
    s.bytes().filter(|&b| is_digit(b)).count()
}
