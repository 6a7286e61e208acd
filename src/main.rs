//! tabcheck - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use tabcheck::{run_check_command, Cli, PersonalAccessToken, TableauClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tabcheck v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: base_url={}, site={}, project={:?}, api_version={}, output={}, batch={}",
        cli.base_url,
        cli.site_content_url,
        cli.project_name,
        cli.api_version,
        cli.output,
        cli.batch
    );

    let missing = cli.missing_credentials();
    if !missing.is_empty() {
        eprintln!("Missing required values: {}", missing.join(", "));
        return ExitCode::FAILURE;
    }

    let mut client = TableauClient::new(
        &cli.base_url,
        &cli.api_version,
        &cli.site_content_url,
        PersonalAccessToken::new(cli.pat_name.as_str(), cli.pat_secret.as_str()),
    );

    let mut stdout = std::io::stdout().lock();
    match run_check_command(&mut client, &cli, &mut stdout).await {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
