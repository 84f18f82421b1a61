// src/main.rs

use std::process::ExitCode;

use clap::Parser;
use nodeflow::cli::CliArgs;
use nodeflow::{exit_code, logging, run};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let result = match logging::init_logging(args.log_level) {
        Ok(()) => run(args).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("nodeflow: {err:?}");
            ExitCode::from(exit_code(&err))
        }
    }
}
