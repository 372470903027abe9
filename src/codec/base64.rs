use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use super::{alphabet, Codec};
use crate::error::{DecodeError, LengthConstraint};
use crate::types::CodecMeta;

const BLOCK: usize = 4;
const MAX_PADDING: usize = 2;

// Padded standard alphabet; leftover bits in the last symbol are ignored on decode.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true),
);

fn validate_padding(input: &str, pad: usize) -> Result<(), DecodeError> {
    if pad > MAX_PADDING {
        return Err(DecodeError::invalid_padding(format!(
            "too many padding characters ({})",
            pad
        )));
    }
    if !input.len().is_multiple_of(BLOCK) {
        return Err(DecodeError::invalid_length(
            LengthConstraint::MultipleOf(BLOCK),
            input.len(),
        ));
    }
    Ok(())
}

fn map_engine_error(err: base64::DecodeError, input: &str) -> DecodeError {
    match err {
        base64::DecodeError::InvalidByte(offset, byte)
        | base64::DecodeError::InvalidLastSymbol(offset, byte) => {
            DecodeError::invalid_char(byte as char, offset)
        }
        base64::DecodeError::InvalidLength(_) => {
            DecodeError::invalid_length(LengthConstraint::MultipleOf(BLOCK), input.len())
        }
        base64::DecodeError::InvalidPadding => DecodeError::invalid_padding("malformed padding"),
    }
}

pub struct Base64;

impl Codec for Base64 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base64",
            aliases: &["b64"],
        }
    }

    fn encode(&self, input: &[u8]) -> String {
        ENGINE.encode(input)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        self.validate(input)?;
        ENGINE.decode(input).map_err(|e| map_engine_error(e, input))
    }

    fn validate(&self, input: &str) -> Result<(), DecodeError> {
        let (body, pad) = alphabet::split_padding(input);
        alphabet::validate_symbols(body, &alphabet::BASE64_DECODE)?;
        validate_padding(input, pad)
    }
}
