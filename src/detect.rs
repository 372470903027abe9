//! Format auto-detection.
//!
//! The three alphabets nest (every hex digit is a Base64 symbol, most Base32
//! symbols are too), so detection is an ordered list of rules and the first
//! match wins. Any even-length hex string is reported as Base16 even when it
//! is also valid Base32 or Base64; callers that know better must name the
//! format explicitly.

use log::{debug, trace};
use serde::Serialize;

use crate::codec::{alphabet, Base32, Base64, Codec};
use crate::types::Format;

const BASE32_MAX_PADDING: usize = 6;
const BASE64_MAX_PADDING: usize = 2;

/// Which detection rule produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectRule {
    /// Input was empty after trimming.
    Empty,
    /// Even-length string of hex digits.
    HexAlphabet,
    /// Base32 alphabet and padding, confirmed by decoding.
    Base32Decoded,
    /// Base64 alphabet, length a multiple of 4, confirmed by decoding.
    Base64Decoded,
    /// Unpadded Base64 symbols including at least one non-hex character.
    /// Not decode-verified, so the input may not actually be valid Base64.
    Base64Unpadded,
    /// No rule matched.
    NoMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub format: Format,
    pub rule: DetectRule,
    pub verified: bool,
}

impl Detection {
    fn new(format: Format, rule: DetectRule) -> Self {
        let verified = !matches!(rule, DetectRule::Base64Unpadded);
        Self {
            format,
            rule,
            verified,
        }
    }
}

pub fn detect(input: &str) -> Format {
    detect_with_reason(input).format
}

pub fn detect_with_reason(input: &str) -> Detection {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Detection::new(Format::Unknown, DetectRule::Empty);
    }

    let is_hex = alphabet::all_in(trimmed, &alphabet::BASE16_DECODE);
    if is_hex && trimmed.len().is_multiple_of(2) {
        trace!("even-length hex input, classifying as base16");
        return Detection::new(Format::Base16, DetectRule::HexAlphabet);
    }

    let (body, pad) = alphabet::split_padding(trimmed);

    if pad <= BASE32_MAX_PADDING
        && alphabet::all_in(body, &alphabet::BASE32_DECODE)
        && Base32.decode(trimmed).is_ok()
    {
        trace!("input decodes as base32");
        return Detection::new(Format::Base32, DetectRule::Base32Decoded);
    }

    if pad <= BASE64_MAX_PADDING && alphabet::all_in(body, &alphabet::BASE64_DECODE) {
        if trimmed.len().is_multiple_of(4) {
            if Base64.decode(trimmed).is_ok() {
                trace!("input decodes as base64");
                return Detection::new(Format::Base64, DetectRule::Base64Decoded);
            }
        } else if pad == 0 && !is_hex {
            debug!(
                "classifying {} unpadded characters as base64 without decode verification",
                trimmed.len()
            );
            return Detection::new(Format::Base64, DetectRule::Base64Unpadded);
        }
    }

    trace!("no detection rule matched");
    Detection::new(Format::Unknown, DetectRule::NoMatch)
}
