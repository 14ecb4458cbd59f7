use clap::Parser;
use colored::Colorize;
use simple_ipam::cli::Cli;
use simple_ipam::{commands, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("{}: logging not initialised: {e}", "warning".yellow());
    }
    log::debug!("#Start main() {}", cli.command.name());

    match commands::run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{} failed: {e:?}", cli.command.name());
            eprintln!("{}: {e}", "error".red());
            ExitCode::FAILURE
        }
    }
}
