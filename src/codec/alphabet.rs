//! Alphabet tables and decode maps for the three RFC 4648 formats.
//!
//! Decode maps are built at compile time; a byte maps to its symbol value or
//! to [`INVALID`]. Base16 and Base32 maps fold lowercase onto uppercase.

use crate::error::DecodeError;

pub const PAD: char = '=';
pub const INVALID: u8 = 0xff;

pub const BASE16: &str = "0123456789ABCDEF";
pub const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

pub const BASE16_DECODE: [u8; 256] = decode_map(BASE16.as_bytes(), true);
pub const BASE32_DECODE: [u8; 256] = decode_map(BASE32.as_bytes(), true);
pub const BASE64_DECODE: [u8; 256] = decode_map(BASE64.as_bytes(), false);

const fn decode_map(symbols: &[u8], fold_case: bool) -> [u8; 256] {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < symbols.len() {
        map[symbols[i] as usize] = i as u8;
        if fold_case {
            map[symbols[i].to_ascii_lowercase() as usize] = i as u8;
        }
        i += 1;
    }
    map
}

pub fn contains(map: &[u8; 256], ch: char) -> bool {
    ch.is_ascii() && map[ch as usize] != INVALID
}

/// True when `input` is non-empty and every character is in `map`.
pub fn all_in(input: &str, map: &[u8; 256]) -> bool {
    !input.is_empty() && input.chars().all(|c| contains(map, c))
}

pub fn validate_symbols(input: &str, map: &[u8; 256]) -> Result<(), DecodeError> {
    for (pos, ch) in input.chars().enumerate() {
        if !contains(map, ch) {
            return Err(DecodeError::invalid_char(ch, pos));
        }
    }
    Ok(())
}

/// Splits trailing padding off `input`, returning the body and the pad count.
pub fn split_padding(input: &str) -> (&str, usize) {
    let body = input.trim_end_matches(PAD);
    (body, input.len() - body.len())
}
