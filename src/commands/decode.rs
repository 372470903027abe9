use log::info;

use crate::io::{read_text, InputSource};
use basecodec::{decode, Format, Result};

pub fn run_decode(format: Option<Format>, input: &InputSource) -> Result<Vec<u8>> {
    let text = read_text(input)?;
    let decoded = decode(&text, format)?;
    info!("decoded {} bytes", decoded.len());
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_decode_auto() {
        let input = InputSource::Literal(b"SGVsbG8=".to_vec());
        assert_eq!(run_decode(None, &input).unwrap(), b"Hello");
    }

    #[test]
    fn test_run_decode_wrong_format() {
        let input = InputSource::Literal(b"SGVsbG8=".to_vec());
        assert!(run_decode(Some(Format::Base16), &input).is_err());
    }
}
