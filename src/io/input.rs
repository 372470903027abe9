use std::io::{self, Read};

use basecodec::Result;

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    Literal(Vec<u8>),
}

impl InputSource {
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") | Some("-") => InputSource::Stdin,
            Some(s) => InputSource::Literal(s.as_bytes().to_vec()),
        }
    }
}

/// Reads the raw input; stdin loses its trailing newlines.
pub fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            let end = buf.iter().rposition(|&b| b != b'\n').map_or(0, |i| i + 1);
            buf.truncate(end);
            Ok(buf)
        }
        InputSource::Literal(data) => Ok(data.clone()),
    }
}

pub fn read_text(source: &InputSource) -> Result<String> {
    let data = read_input(source)?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}
