//! Digit encoding for the NTDB register layout.
//!
//! Each tube has ten cathodes, so a board unit carries four 10-bit patterns
//! packed across five bytes, units tube first.

use num_traits::ToPrimitive;

use crate::constants::*;

/// Clamps any numeric value into `0..=MAX_VALUE`.
///
/// Fractions truncate toward zero, NaN reads as 0 and positive values too
/// large for an `i64` read as `MAX_VALUE`.
pub fn clamp_value<T: ToPrimitive>(number: T) -> u16 {
    match number.to_i64() {
        Some(value) => value.clamp(0, MAX_VALUE as i64) as u16,
        None => match number.to_f64() {
            Some(value) if value > 0.0 => MAX_VALUE,
            _ => 0,
        },
    }
}

/// Glow-wire pattern for a table index, anything past 9 is dark.
pub fn pattern(digit: u8) -> u16 {
    DIGIT_PATTERNS[digit.min(BLANK) as usize]
}

/// Table index for a pattern, if it is one of the 11 known patterns.
pub fn digit_for_pattern(pattern: u16) -> Option<u8> {
    DIGIT_PATTERNS
        .iter()
        .position(|&p| p == pattern)
        .map(|i| i as u8)
}

/// Splits a value into thousands, hundreds, tens and units, substituting
/// `BLANK` wherever the mask bit is clear (bit 3 = thousands).
pub fn digits(value: u16, mask: u8) -> [u8; DIGITS_PER_UNIT] {
    let value = value.min(MAX_VALUE);
    let mut digits = [BLANK; DIGITS_PER_UNIT];
    let mut divisor = 1000;
    for (i, digit) in digits.iter_mut().enumerate() {
        let bit = 0b1000 >> i;
        if mask & bit != 0 {
            *digit = ((value / divisor) % 10) as u8;
        }
        divisor /= 10;
    }
    digits
}

/// Packs four patterns given thousands first into one board unit.
pub fn pack_patterns(patterns: [u16; DIGITS_PER_UNIT]) -> [u8; UNIT_BYTES] {
    let [thousands, hundreds, tens, units] = patterns.map(|p| p & PATTERN_MASK);
    [
        (units & 0xFF) as u8,
        ((units >> 8) | ((tens & 0b11_1111) << 2)) as u8,
        ((tens >> 6) | ((hundreds & 0b1111) << 4)) as u8,
        ((hundreds >> 4) | ((thousands & 0b11) << 6)) as u8,
        (thousands >> 2) as u8,
    ]
}

/// Inverse of [`pack_patterns`], thousands first.
pub fn unpack_unit(unit: &[u8; UNIT_BYTES]) -> [u16; DIGITS_PER_UNIT] {
    let [b0, b1, b2, b3, b4] = (*unit).map(u16::from);
    let units = b0 | ((b1 & 0b11) << 8);
    let tens = (b1 >> 2) | ((b2 & 0b1111) << 6);
    let hundreds = (b2 >> 4) | ((b3 & 0b11_1111) << 4);
    let thousands = (b3 >> 6) | (b4 << 2);
    [thousands, hundreds, tens, units]
}

/// Packs four table indices (thousands first) into one board unit.
pub fn pack_digits(digits: [u8; DIGITS_PER_UNIT]) -> [u8; UNIT_BYTES] {
    pack_patterns(digits.map(pattern))
}

/// Encodes a number with a visibility mask into one board unit.
pub fn encode_number<T: ToPrimitive>(number: T, mask: u8) -> [u8; UNIT_BYTES] {
    pack_digits(digits(clamp_value(number), mask))
}

/// Accumulates the first four bytes of `text` as thousands, hundreds, tens
/// and units. A non-digit byte contributes nothing but still occupies its
/// position, so `b"12 5"` reads as 1205.
pub fn text_value(text: &[u8]) -> u16 {
    let mut weight = 1000;
    let mut value = 0;
    for position in 0..DIGITS_PER_UNIT {
        if let Some(c @ b'0'..=b'9') = text.get(position).copied() {
            value += u16::from(c - b'0') * weight;
        }
        weight /= 10;
    }
    value
}
