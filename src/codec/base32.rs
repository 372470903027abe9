use data_encoding::{Encoding, Specification, BASE32};

use super::{alphabet, map_data_encoding_error, Codec};
use crate::error::{DecodeError, LengthConstraint};
use crate::types::CodecMeta;

const BLOCK: usize = 8;

// Pad counts a complete 8-symbol block can end with.
const VALID_PAD_COUNTS: [usize; 5] = [0, 1, 3, 4, 6];

/// RFC 4648 Base32 that ignores leftover bits in the last symbol.
fn make_decoding() -> Encoding {
    let mut spec = Specification::new();
    spec.symbols.push_str(alphabet::BASE32);
    spec.padding = Some(alphabet::PAD);
    spec.check_trailing_bits = false;
    spec.encoding().expect("static base32 specification is valid")
}

pub struct Base32;

impl Codec for Base32 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base32",
            aliases: &["b32"],
        }
    }

    fn encode(&self, input: &[u8]) -> String {
        BASE32.encode(input)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let (body, pad) = alphabet::split_padding(input);
        alphabet::validate_symbols(body, &alphabet::BASE32_DECODE)?;

        if !input.len().is_multiple_of(BLOCK) {
            return Err(DecodeError::invalid_length(
                LengthConstraint::MultipleOf(BLOCK),
                input.len(),
            ));
        }
        if !VALID_PAD_COUNTS.contains(&pad) {
            return Err(DecodeError::invalid_padding(format!(
                "{} padding characters cannot end a block",
                pad
            )));
        }

        let normalized = input.to_ascii_uppercase();
        make_decoding()
            .decode(normalized.as_bytes())
            .map_err(|e| map_data_encoding_error(e, &normalized, BLOCK))
    }
}
