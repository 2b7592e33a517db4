pub mod check;
pub mod completions;
pub mod config;
pub mod patterns;
pub mod sanitize;

use anyhow::{Context, Result};
use mirai_config::Config;
use mirai_moderation::Moderator;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Load config from `path`, or the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

pub fn build_moderator(config_path: Option<&Path>) -> Result<Moderator> {
    if let Some(path) = config_path {
        tracing::debug!(path = %path.display(), "using config override");
    }
    let config = load_config(config_path)?;
    let moderator = Moderator::with_settings(&config.moderation.to_settings())
        .context("invalid moderation settings")?;
    Ok(moderator)
}

/// Use the argument when given, otherwise read all of stdin
pub async fn read_input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("failed to read stdin")?;

    Ok(strip_trailing_newline(buf))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
