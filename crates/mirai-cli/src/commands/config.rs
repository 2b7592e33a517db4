use anyhow::Result;
use mirai_config::Config;
use std::path::{Path, PathBuf};

pub fn handle(config_path: Option<&Path>, path_only: bool) -> Result<()> {
    let path = resolve_path(config_path);

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    let config = super::load_config(config_path)?;
    print!("{}", render(&path, &config)?);

    Ok(())
}

fn resolve_path(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path)
}

fn render(path: &Path, config: &Config) -> Result<String> {
    Ok(format!(
        "# {}\n{}",
        path.display(),
        toml::to_string_pretty(config)?
    ))
}
