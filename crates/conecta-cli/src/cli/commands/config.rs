//! Configuration commands.

use anyhow::{Context, Result, bail};
use conecta_core::config::{Config, paths};
use url::Url;

#[derive(Debug, clap::Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Set the backend base URL
    SetUrl { url: String },
}

pub fn run(command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Path => {
            println!("{}", paths::config_path().display());
            Ok(())
        }
        ConfigCommand::SetUrl { url } => {
            let parsed: Url = url.parse().with_context(|| format!("URL inválida: {url}"))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                bail!("A URL do backend deve ser http ou https: {url}");
            }
            let normalized = parsed.as_str().trim_end_matches('/');
            Config::save_backend_url(normalized)?;
            println!("backend_url = {normalized}");
            Ok(())
        }
    }
}
