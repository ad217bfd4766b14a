mod cli;
mod command;
mod config;
mod install;
mod profile;
mod version;
mod versions;

use anyhow::{bail, Result};
use clap::Parser;
use cli::Cli;
use config::load_settings;
use inquire::Select;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(&cli)?;

    // Load configuration
    let settings = load_settings()?;

    let version = if cli.versions {
        let available = versions::fetch_versions(&settings.listing_url).await?;
        if available.is_empty() {
            bail!("No Go versions found at {}", settings.listing_url);
        }

        match Select::new("Select Go version to install", available).prompt() {
            Ok(choice) => choice.to_string(),
            Err(_) => {
                eprintln!("No version selected.");
                std::process::exit(1);
            }
        }
    } else {
        // No validation that the string denotes an existing release; a bad
        // version surfaces as a failed download.
        cli.version
            .clone()
            .unwrap_or_else(|| settings.default_version.clone())
    };

    let go_env = install::install(&settings, &version)?;

    eprintln!("Go {} installation is complete.", version);

    // Exports go to stdout on their own so the output can be eval'd.
    print!("{}", go_env.export_block());

    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if cli.quiet {
        "error"
    } else if cli.verbose == 0 {
        "warn"
    } else if cli.verbose == 1 {
        "info"
    } else {
        "debug"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}
