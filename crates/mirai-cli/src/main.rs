mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config_path = cli.config;

    match cli.command {
        cli::Commands::Check { text, json, value } => {
            let moderator = commands::build_moderator(config_path.as_deref())?;
            let allowed = commands::check::handle(&moderator, text, json, value).await?;
            if !allowed {
                std::process::exit(2);
            }
            Ok(())
        }
        cli::Commands::Sanitize { text, report } => {
            let moderator = commands::build_moderator(config_path.as_deref())?;
            commands::sanitize::handle(&moderator, text, report).await
        }
        cli::Commands::Patterns => {
            let moderator = commands::build_moderator(config_path.as_deref())?;
            commands::patterns::handle(&moderator)
        }
        cli::Commands::Config { path } => commands::config::handle(config_path.as_deref(), path),
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
