use serde::Serialize;

use crate::io::{read_text, InputSource};
use basecodec::{decode, Format, Result};

#[derive(Debug, Serialize)]
pub struct ValidateResult {
    pub schema_version: u32,
    pub valid: bool,
    pub format: Format,
    pub error: Option<String>,
}

pub fn run_validate(format: Format, input: &InputSource) -> Result<ValidateResult> {
    let text = read_text(input)?;

    // Same check as `is_valid`, keeping the reason for the report.
    let error = decode(&text, Some(format)).err().map(|e| e.to_string());

    Ok(ValidateResult {
        schema_version: 1,
        valid: error.is_none(),
        format,
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid() {
        let source = InputSource::Literal(b"SGVsbG8=".to_vec());
        let result = run_validate(Format::Base64, &source).unwrap();
        assert!(result.valid);
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_validate_invalid_keeps_reason() {
        let source = InputSource::Literal(b"1111".to_vec());
        let result = run_validate(Format::Base32, &source).unwrap();
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("invalid character '1'"));
    }

    #[test]
    fn test_validate_agrees_with_is_valid() {
        for text in ["48656C6C6F", "ZZZZZ", "JBSWY3DP", "@@@"] {
            for format in Format::ALL {
                let source = InputSource::Literal(text.as_bytes().to_vec());
                let result = run_validate(format, &source).unwrap();
                assert_eq!(result.valid, basecodec::is_valid(text, format));
            }
        }
    }
}
