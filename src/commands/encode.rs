use crate::io::{read_input, InputSource};
use basecodec::{encode, Format, Result};

pub fn run_encode(format: Format, input: &InputSource) -> Result<String> {
    let data = read_input(input)?;
    encode(&data, format)
}
