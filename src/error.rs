use thiserror::Error;

use crate::types::Format;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    MultipleOf(usize),
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::MultipleOf(n) => write!(f, "multiple of {}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        expected: LengthConstraint,
        actual: usize,
    },

    #[error("invalid padding: {message}")]
    InvalidPadding { message: String },

    #[error("unsupported format: {name}")]
    UnsupportedFormat { name: String },

    #[error("unable to auto-detect encoding format")]
    Undetectable,
}

impl DecodeError {
    pub fn invalid_char(ch: char, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: ch,
            position: pos,
        }
    }

    pub fn invalid_length(expected: LengthConstraint, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    pub fn invalid_padding(message: impl Into<String>) -> Self {
        Self::InvalidPadding {
            message: message.into(),
        }
    }

    pub fn unsupported_name(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("encoding failed: unsupported encoding format '{format}'")]
    Encoding { format: Format },

    #[error("decoding failed: {0}")]
    Decoding(#[from] DecodeError),

    #[error("conversion failed: {source}")]
    Conversion {
        #[source]
        source: Box<Error>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn encoding(format: Format) -> Self {
        Self::Encoding { format }
    }

    pub fn conversion(source: Error) -> Self {
        Self::Conversion {
            source: Box::new(source),
        }
    }

    /// The decode failure behind this error, looking through conversion context.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Error::Decoding(e) => Some(e),
            Error::Conversion { source } => source.decode_error(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
