use serde::Serialize;

use crate::io::{read_text, InputSource};
use basecodec::{convert, detect, Format, Result};

#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub schema_version: u32,
    pub from: Format,
    pub to: Format,
    pub input: String,
    pub output: String,
}

pub fn run_convert(from: Option<Format>, to: Format, input: &InputSource) -> Result<ConvertResult> {
    let text = read_text(input)?;
    let output = convert(&text, from, to)?;

    Ok(ConvertResult {
        schema_version: 1,
        from: from.unwrap_or_else(|| detect(&text)),
        to,
        input: text.trim().to_string(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_convert_reports_detected_source() {
        let input = InputSource::Literal(b"SGVsbG8=".to_vec());
        let result = run_convert(None, Format::Base16, &input).unwrap();
        assert_eq!(result.from, Format::Base64);
        assert_eq!(result.output, "48656C6C6F");
    }

    #[test]
    fn test_run_convert_failure() {
        let input = InputSource::Literal(b"Invalid@@@".to_vec());
        let err = run_convert(Some(Format::Base64), Format::Base16, &input).unwrap_err();
        assert!(err.to_string().starts_with("conversion failed"));
    }
}
