mod input;
mod output;

pub use input::{read_input, read_text, InputSource};
pub use output::{write_decoded, write_line, DecodedOutput};
