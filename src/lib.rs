pub mod codec;
pub mod convert;
pub mod detect;
pub mod error;
pub mod types;

pub use codec::{decode, encode, Codec};
pub use convert::{convert, is_valid};
pub use detect::{detect, detect_with_reason, DetectRule, Detection};
pub use error::{DecodeError, Error, Result};
pub use types::{CodecMeta, Format};
