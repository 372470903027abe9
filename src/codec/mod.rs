pub mod alphabet;
mod base16;
mod base32;
mod base64;

pub use base16::Base16;
pub use base32::Base32;
pub use base64::Base64;

use log::debug;

use crate::detect::detect;
use crate::error::{self, DecodeError, Error, LengthConstraint};
use crate::types::{CodecMeta, Format};

pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;
    fn encode(&self, input: &[u8]) -> String;
    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError>;

    fn validate(&self, input: &str) -> Result<(), DecodeError> {
        self.decode(input)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.meta().name
    }
}

/// Encodes raw bytes or UTF-8 text in `format`.
///
/// Base16 and Base32 output is uppercase; Base64 output is padded.
pub fn encode(data: impl AsRef<[u8]>, format: Format) -> error::Result<String> {
    let codec = format.codec().ok_or_else(|| Error::encoding(format))?;
    Ok(codec.encode(data.as_ref()))
}

/// Decodes `input` after trimming surrounding whitespace.
///
/// With no `format` the input is auto-detected first, failing with
/// [`DecodeError::Undetectable`] when no format matches.
pub fn decode(input: &str, format: Option<Format>) -> error::Result<Vec<u8>> {
    let codec = match format {
        Some(format) => format
            .codec()
            .ok_or_else(|| DecodeError::unsupported_name(format.name()))?,
        None => {
            let detected = detect(input);
            debug!("auto-detected {}", detected);
            detected.codec().ok_or(DecodeError::Undetectable)?
        }
    };

    Ok(codec.decode(input.trim())?)
}

/// Maps a `data-encoding` failure onto our error, pointing at the offending symbol.
pub(crate) fn map_data_encoding_error(
    err: data_encoding::DecodeError,
    input: &str,
    block: usize,
) -> DecodeError {
    use data_encoding::DecodeKind;

    match err.kind {
        DecodeKind::Symbol | DecodeKind::Trailing => {
            let ch = input[err.position..]
                .chars()
                .next()
                .unwrap_or(alphabet::PAD);
            DecodeError::invalid_char(ch, err.position)
        }
        DecodeKind::Length => {
            DecodeError::invalid_length(LengthConstraint::MultipleOf(block), input.len())
        }
        DecodeKind::Padding => {
            DecodeError::invalid_padding(format!("bad padding at position {}", err.position))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_symbol_error() {
        let err = data_encoding::BASE32.decode(b"JBSW!3DP").unwrap_err();
        assert_eq!(
            map_data_encoding_error(err, "JBSW!3DP", 8),
            DecodeError::invalid_char('!', 4)
        );
    }

    #[test]
    fn test_map_length_error() {
        let err = data_encoding::BASE32.decode(b"JBSW").unwrap_err();
        assert_eq!(
            map_data_encoding_error(err, "JBSW", 8),
            DecodeError::invalid_length(LengthConstraint::MultipleOf(8), 4)
        );
    }

    #[test]
    fn test_encode_hello() {
        assert_eq!(encode("Hello", Format::Base16).unwrap(), "48656C6C6F");
        assert_eq!(encode("Hello", Format::Base32).unwrap(), "JBSWY3DP");
        assert_eq!(encode("Hello", Format::Base64).unwrap(), "SGVsbG8=");
    }

    #[test]
    fn test_encode_accepts_bytes_and_text() {
        assert_eq!(encode(b"Test", Format::Base64).unwrap(), "VGVzdA==");
        assert_eq!(encode(vec![0u8, 255], Format::Base16).unwrap(), "00FF");
        let owned = encode(String::from("Test"), Format::Base64).unwrap();
        assert_eq!(owned, "VGVzdA==");
    }

    #[test]
    fn test_encode_empty() {
        for format in Format::ALL {
            assert_eq!(encode("", format).unwrap(), "");
        }
    }

    #[test]
    fn test_encode_unknown_fails() {
        assert!(matches!(
            encode("Hello", Format::Unknown),
            Err(Error::Encoding { format: Format::Unknown })
        ));
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let padded = decode("  SGVsbG8=  ", Some(Format::Base64)).unwrap();
        assert_eq!(padded, b"Hello");
        let newline = decode("48656C6C6F\n", Some(Format::Base16)).unwrap();
        assert_eq!(newline, b"Hello");
    }

    #[test]
    fn test_decode_auto_detects() {
        assert_eq!(decode("SGVsbG8=", None).unwrap(), b"Hello");
        assert_eq!(decode("JBSWY3DP", None).unwrap(), b"Hello");
        assert_eq!(decode("48656C6C6F", None).unwrap(), b"Hello");
    }

    #[test]
    fn test_decode_undetectable() {
        let err = decode("Invalid@Data!", None).unwrap_err();
        assert_eq!(err.decode_error(), Some(&DecodeError::Undetectable));
        assert!(decode("", None).is_err());
    }

    #[test]
    fn test_decode_unpadded_fallback_still_fails_strictly() {
        // Detected as Base64 without verification, then rejected by the decoder.
        let err = decode("SGVsbG8", None).unwrap_err();
        assert!(matches!(
            err.decode_error(),
            Some(DecodeError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_decode_empty_with_format() {
        let empty = decode("", Some(Format::Base64)).unwrap();
        assert_eq!(empty, Vec::<u8>::new());
    }

    #[test]
    fn test_decode_ignores_trailing_bits() {
        assert_eq!(decode("SGVsbG9=", None).unwrap(), b"Hello");
        assert_eq!(decode("JBUR====", None).unwrap(), b"Hi");
    }

    #[test]
    fn test_decode_explicit_unknown_fails() {
        assert!(decode("SGVsbG8=", Some(Format::Unknown)).is_err());
    }

    #[test]
    fn test_codecs_are_object_safe() {
        let codecs: [&dyn Codec; 3] = [&Base16, &Base32, &Base64];
        let names: Vec<_> = codecs.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["base16", "base32", "base64"]);
    }
}
