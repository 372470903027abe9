use log::debug;

use crate::codec::{decode, encode};
use crate::error::{Error, Result};
use crate::types::Format;

/// Re-encodes `input` from one format to another.
///
/// `from: None` auto-detects the source format. Any failure is wrapped in
/// [`Error::Conversion`]; a target of [`Format::Unknown`] is rejected before
/// the input is looked at.
pub fn convert(input: &str, from: Option<Format>, to: Format) -> Result<String> {
    if !to.is_known() {
        return Err(Error::conversion(Error::encoding(to)));
    }

    let bytes = decode(input, from).map_err(Error::conversion)?;
    debug!("converting {} bytes to {}", bytes.len(), to);
    encode(bytes, to).map_err(Error::conversion)
}

/// True iff `input` decodes under `format`.
pub fn is_valid(input: &str, format: Format) -> bool {
    decode(input, Some(format)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_convert_between_formats() {
        let cases = [
            ("SGVsbG8=", Format::Base64, Format::Base16, "48656C6C6F"),
            ("SGVsbG8=", Format::Base64, Format::Base32, "JBSWY3DP"),
            ("48656C6C6F", Format::Base16, Format::Base64, "SGVsbG8="),
            ("JBSWY3DP", Format::Base32, Format::Base64, "SGVsbG8="),
        ];
        for (input, from, to, expected) in cases {
            assert_eq!(convert(input, Some(from), to).unwrap(), expected);
        }
    }

    #[test]
    fn test_convert_auto_detects_source() {
        let hex = convert("SGVsbG8=", None, Format::Base16).unwrap();
        assert_eq!(hex, "48656C6C6F");
    }

    #[test]
    fn test_convert_invalid_input() {
        let err = convert("Invalid@@@", Some(Format::Base64), Format::Base16)
            .unwrap_err();
        assert!(matches!(err, Error::Conversion { .. }));
        assert_eq!(err.decode_error(), Some(&DecodeError::invalid_char('@', 7)));
    }

    #[test]
    fn test_convert_rejects_unknown_target_first() {
        // The input is garbage too; the target check must win.
        let err = convert("@@@", None, Format::Unknown).unwrap_err();
        match err {
            Error::Conversion { source } => {
                assert!(matches!(
                    *source,
                    Error::Encoding {
                        format: Format::Unknown
                    }
                ))
            }
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_chain_returns_to_original() {
        let originals = [
            (Format::Base16, "48656C6C6F2C20576F726C6421"),
            (Format::Base32, "JBSWY3DPFQQFO33SNRSCC==="),
            (Format::Base64, "SGVsbG8sIFdvcmxkIQ=="),
        ];
        for (a, text) in originals {
            for b in Format::ALL.into_iter().filter(|f| *f != a) {
                let there = convert(text, Some(a), b).unwrap();
                let back = convert(&there, Some(b), a).unwrap();
                assert_eq!(back, text, "{a} -> {b} -> {a}");
            }
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("48656C6C6F", Format::Base16));
        assert!(!is_valid("ZZZZZ", Format::Base16));
        assert!(is_valid("JBSWY3DP", Format::Base32));
        assert!(!is_valid("1111", Format::Base32));
        assert!(is_valid("SGVsbG8=", Format::Base64));
        assert!(!is_valid("@@@", Format::Base64));
    }

    #[test]
    fn test_is_valid_unknown_format() {
        assert!(!is_valid("SGVsbG8=", Format::Unknown));
    }
}
