mod args;
mod attachment;
mod commands;
mod config;

use args::Cli;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so generated HTML can be piped from stdout
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_filter()),
    )
    .format_timestamp_millis()
    .init();

    log::debug!("App Forge starting...");

    if let Err(e) = commands::run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
