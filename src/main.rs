mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use basecodec::error;
use cli::{Cli, Command};
use commands::CommandHandler;
use io::InputSource;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> error::Result<ExitCode> {
    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Encode { format, input } => Box::new(commands::EncodeCommand {
            format: format.into(),
            input: InputSource::parse(input.as_deref()),
        }),

        Command::Decode {
            format,
            binary,
            input,
        } => Box::new(commands::DecodeCommand {
            format: format.format(),
            input: InputSource::parse(input.as_deref()),
            binary,
        }),

        Command::Detect { json, input } => Box::new(commands::DetectCommand {
            input: InputSource::parse(input.as_deref()),
            json,
        }),

        Command::Convert {
            from,
            to,
            json,
            input,
        } => Box::new(commands::ConvertCommand {
            from: from.format(),
            to: to.into(),
            input: InputSource::parse(input.as_deref()),
            json,
        }),

        Command::Validate {
            format,
            json,
            input,
        } => Box::new(commands::ValidateCommand {
            format: format.into(),
            input: InputSource::parse(input.as_deref()),
            json,
        }),
    };

    handler.execute()
}
