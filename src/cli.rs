use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use basecodec::Format;

#[derive(Parser)]
#[command(name = "basecodec")]
#[command(about = "Encode, decode, detect and convert Base16, Base32 and Base64")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode data to a base format")]
    Encode {
        #[arg(long, short = 'f', default_value = "base64")]
        format: TargetArg,

        #[arg(help = "Input data (reads stdin when omitted or '-')")]
        input: Option<String>,
    },

    #[command(about = "Decode base-encoded data")]
    Decode {
        #[arg(long, short = 'f', default_value = "auto")]
        format: SourceArg,

        #[arg(long, short = 'b', help = "Output raw binary data")]
        binary: bool,

        #[arg(help = "Encoded data (reads stdin when omitted or '-')")]
        input: Option<String>,
    },

    #[command(about = "Auto-detect the encoding format")]
    Detect {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "Encoded data (reads stdin when omitted or '-')")]
        input: Option<String>,
    },

    #[command(about = "Convert between base formats")]
    Convert {
        #[arg(long = "from-format", short = 'f', default_value = "auto")]
        from: SourceArg,

        #[arg(long = "to-format", short = 't')]
        to: TargetArg,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "Encoded data (reads stdin when omitted or '-')")]
        input: Option<String>,
    },

    #[command(about = "Validate encoded data")]
    Validate {
        #[arg(long, short = 'f')]
        format: TargetArg,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "Encoded data (reads stdin when omitted or '-')")]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TargetArg {
    Base16,
    Base32,
    Base64,
}

impl From<TargetArg> for Format {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Base16 => Format::Base16,
            TargetArg::Base32 => Format::Base32,
            TargetArg::Base64 => Format::Base64,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Auto,
    Base16,
    Base32,
    Base64,
}

impl SourceArg {
    /// The explicit format, or `None` for auto-detection.
    pub fn format(self) -> Option<Format> {
        match self {
            SourceArg::Auto => None,
            SourceArg::Base16 => Some(Format::Base16),
            SourceArg::Base32 => Some(Format::Base32),
            SourceArg::Base64 => Some(Format::Base64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let args = ["basecodec", "convert", "-t", "base16", "SGVsbG8="];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Convert { from, to, input, .. } => {
                assert_eq!(from.format(), None);
                assert_eq!(Format::from(to), Format::Base16);
                assert_eq!(input.as_deref(), Some("SGVsbG8="));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_encode_rejects_auto() {
        let args = ["basecodec", "encode", "-f", "auto", "x"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["basecodec", "-vv", "detect", "AA"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
