mod convert;
mod decode;
mod detect;
mod encode;
mod validate;

pub use convert::run_convert;
pub use decode::run_decode;
pub use detect::run_detect;
pub use encode::run_encode;
pub use validate::run_validate;

use std::process::ExitCode;

use crate::io::{write_decoded, write_line, DecodedOutput, InputSource};
use basecodec::{Format, Result};

pub trait CommandHandler {
    fn execute(&self) -> Result<ExitCode>;
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    write_line(&json)
}

pub struct EncodeCommand {
    pub format: Format,
    pub input: InputSource,
}

impl CommandHandler for EncodeCommand {
    fn execute(&self) -> Result<ExitCode> {
        let encoded = run_encode(self.format, &self.input)?;
        write_line(&encoded)?;
        Ok(ExitCode::SUCCESS)
    }
}

pub struct DecodeCommand {
    pub format: Option<Format>,
    pub input: InputSource,
    pub binary: bool,
}

impl CommandHandler for DecodeCommand {
    fn execute(&self) -> Result<ExitCode> {
        let decoded = run_decode(self.format, &self.input)?;
        write_decoded(&DecodedOutput::new(decoded, self.binary))?;
        Ok(ExitCode::SUCCESS)
    }
}

pub struct DetectCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for DetectCommand {
    fn execute(&self) -> Result<ExitCode> {
        let result = run_detect(&self.input)?;

        if self.json {
            print_json(&result)?;
            return Ok(ExitCode::SUCCESS);
        }

        write_line(&format!("Detected format: {}", result.format))?;
        if result.format.is_known() {
            match result.decoded {
                Some(ref text) => write_line(&format!("Decoded value: {}", text))?,
                None => write_line("(Unable to decode as UTF-8 text)")?,
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

pub struct ConvertCommand {
    pub from: Option<Format>,
    pub to: Format,
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for ConvertCommand {
    fn execute(&self) -> Result<ExitCode> {
        let result = run_convert(self.from, self.to, &self.input)?;
        if self.json {
            print_json(&result)?;
        } else {
            write_line(&result.output)?;
        }
        Ok(ExitCode::SUCCESS)
    }
}

pub struct ValidateCommand {
    pub format: Format,
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for ValidateCommand {
    fn execute(&self) -> Result<ExitCode> {
        let result = run_validate(self.format, &self.input)?;

        if self.json {
            print_json(&result)?;
        } else if result.valid {
            write_line(&format!("Valid {}", result.format))?;
        } else {
            write_line(&format!("Invalid {}", result.format))?;
        }

        Ok(if result.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
