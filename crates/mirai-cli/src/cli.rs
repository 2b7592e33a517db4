use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mirai")]
#[command(about = "Chat moderation for Re:MirAI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "MIRAI_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate chat text (exits with 2 when blocked)
    Check {
        /// Text to check (reads stdin when omitted)
        text: Option<String>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,

        /// Treat the input as a JSON value; non-strings are clean
        #[arg(long)]
        value: bool,
    },

    /// Replace blocked spans with the placeholder
    Sanitize {
        /// Text to sanitize (reads stdin when omitted)
        text: Option<String>,

        /// Show per-pattern replacement counts on stderr
        #[arg(long)]
        report: bool,
    },

    /// List active patterns
    Patterns,

    /// Show the effective configuration
    Config {
        /// Only print the config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}
