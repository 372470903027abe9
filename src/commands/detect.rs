use serde::Serialize;

use crate::io::{read_text, InputSource};
use basecodec::{decode, detect_with_reason, DetectRule, Format, Result};

#[derive(Debug, Serialize)]
pub struct DetectResult {
    pub schema_version: u32,
    pub format: Format,
    pub rule: DetectRule,
    pub verified: bool,
    /// UTF-8 text of the decoded bytes, when decoding and UTF-8 both succeed.
    pub decoded: Option<String>,
}

pub fn run_detect(input: &InputSource) -> Result<DetectResult> {
    let text = read_text(input)?;
    let detection = detect_with_reason(&text);

    let decoded = match detection.format {
        Format::Unknown => None,
        format => decode(&text, Some(format))
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok()),
    };

    Ok(DetectResult {
        schema_version: 1,
        format: detection.format,
        rule: detection.rule,
        verified: detection.verified,
        decoded,
    })
}
