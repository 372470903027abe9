use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::codec::{Base16, Base32, Base64, Codec};
use crate::error::{DecodeError, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Base16,
    Base32,
    Base64,
    Unknown,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Base16, Format::Base32, Format::Base64];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Base16 => "base16",
            Format::Base32 => "base32",
            Format::Base64 => "base64",
            Format::Unknown => "unknown",
        }
    }

    /// The codec backing this format, `None` for [`Format::Unknown`].
    pub fn codec(&self) -> Option<&'static dyn Codec> {
        match self {
            Format::Base16 => Some(&Base16),
            Format::Base32 => Some(&Base32),
            Format::Base64 => Some(&Base64),
            Format::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Format::Unknown)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == Format::Unknown.name() {
            return Ok(Format::Unknown);
        }
        Format::ALL
            .into_iter()
            .find(|format| {
                format.codec().is_some_and(|codec| {
                    let meta = codec.meta();
                    meta.name == lower || meta.aliases.contains(&lower.as_str())
                })
            })
            .ok_or_else(|| DecodeError::unsupported_name(s).into())
    }
}

/// Names a codec answers to when parsing a [`Format`].
#[derive(Debug, Clone)]
pub struct CodecMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}
