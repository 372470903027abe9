use std::io::{self, IsTerminal, Write};

use data_encoding::HEXLOWER;
use log::warn;

use basecodec::Result;

const BINARY_WARNING: &str = "Warning: Binary data detected, use --binary flag to output raw bytes";

/// How decoded bytes reach stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodedOutput {
    Text(String),
    /// Not UTF-8 and raw output was not requested.
    Hex(String),
    Raw(Vec<u8>),
}

impl DecodedOutput {
    pub fn new(data: Vec<u8>, binary: bool) -> Self {
        if binary {
            return DecodedOutput::Raw(data);
        }
        match String::from_utf8(data) {
            Ok(text) => DecodedOutput::Text(text),
            Err(e) => DecodedOutput::Hex(HEXLOWER.encode(e.as_bytes())),
        }
    }
}

pub fn write_decoded(output: &DecodedOutput) -> Result<()> {
    match output {
        DecodedOutput::Text(text) => write_line(text),
        DecodedOutput::Hex(hex) => {
            eprintln!("{}", BINARY_WARNING);
            write_line(hex)
        }
        DecodedOutput::Raw(data) => {
            let stdout = io::stdout();
            if stdout.is_terminal() && std::str::from_utf8(data).is_err() {
                warn!("writing {} raw bytes to a terminal", data.len());
            }
            let mut handle = stdout.lock();
            handle.write_all(data)?;
            handle.flush()?;
            Ok(())
        }
    }
}

pub fn write_line(text: &str) -> Result<()> {
    let mut handle = io::stdout().lock();
    writeln!(handle, "{}", text)?;
    Ok(())
}
