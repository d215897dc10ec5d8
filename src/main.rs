use adbx::cli::Cli;
use adbx::commands::runner::CommandRunner;
use clap::Parser;
use colored::*;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if let Err(e) = CommandRunner::new().run(cli).await {
        eprintln!("{} {}", "Error:".bright_red(), e);
        std::process::exit(1);
    }
}
