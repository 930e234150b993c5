use std::process::ExitCode;

use clap::Parser;
use log::error;

use undertaker_app::cli::Cli;
use undertaker_app::error::AppError;
use undertaker_app::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = undertaker_app::run(&cli).and_then(|summary| {
        serde_json::to_string_pretty(&summary).map_err(AppError::from)
    });
    match result {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
