use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use configurator::{Cli, handle, load_settings};

fn init_tracing(verbose: bool) {
    let default = if verbose { "configurator=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match load_settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load settings:\n{e}");
            return ExitCode::FAILURE;
        }
    };

    let action = cli.into_action();
    match handle(&action, &settings, io::stdin().lock(), io::stdout()) {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
