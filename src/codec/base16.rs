use data_encoding::{HEXUPPER, HEXUPPER_PERMISSIVE};

use super::{alphabet, map_data_encoding_error, Codec};
use crate::error::{DecodeError, LengthConstraint};
use crate::types::CodecMeta;

pub struct Base16;

impl Codec for Base16 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base16",
            aliases: &["hex", "b16"],
        }
    }

    fn encode(&self, input: &[u8]) -> String {
        HEXUPPER.encode(input)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        alphabet::validate_symbols(input, &alphabet::BASE16_DECODE)?;

        if !input.len().is_multiple_of(2) {
            return Err(DecodeError::invalid_length(
                LengthConstraint::MultipleOf(2),
                input.len(),
            ));
        }

        HEXUPPER_PERMISSIVE
            .decode(input.as_bytes())
            .map_err(|e| map_data_encoding_error(e, input, 2))
    }
}
