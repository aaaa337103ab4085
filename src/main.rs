mod cli;
mod error;
mod reading;
mod request;

use std::process::ExitCode;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};
use tracing::{error, Level};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Dates {
            csv,
            legacy,
            column,
        } => command::dates(&csv, &*command::date_source(legacy, &column)).map(|dates| {
            for date in dates {
                println!("{}", date);
            }
        }),
        Commands::Request {
            csv,
            dates,
            stations,
            legacy,
            column,
            output_dir,
            script,
        } => {
            let options = command::RequestOptions {
                csv,
                dates,
                stations,
                output_dir,
                script,
            };
            command::request(options, &*command::date_source(legacy, &column))
                .map(|filename| println!("Script saved to `{}`", filename))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) -> Result<(), Error> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
