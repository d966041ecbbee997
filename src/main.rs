use clap::Parser;
use sui_checker::{
    arguments::Cli,
    logger::{self, LogTag},
    run::run_checker,
};

/// Main entry point for sui_checker
///
/// Loads config (defaults < TOML < flags), initializes logging, runs one
/// check over every wallet and prints the report.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    logger::init(cli.logger_config(&config));
    logger::info(LogTag::System, "sui_checker starting");

    let exit_code = match run_checker(&config, !cli.no_progress).await {
        Ok(outcome) => {
            logger::info(
                LogTag::System,
                &format!("Done: {} wallets reported", outcome.reports.len()),
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            logger::error(LogTag::System, &format!("Run failed: {:#}", e));
            1
        }
    };

    logger::flush();
    std::process::exit(exit_code);
}
