//! `mindbridge config` - inspect layered configuration

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::ConfigLoader;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration after merging all layers
    Show,
    /// Show configuration file locations
    Path,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(),
        ConfigCommands::Path => show_paths(),
    }
}

fn show_config() -> Result<()> {
    let config = ConfigLoader::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn show_paths() -> Result<()> {
    println!("{}", describe("User config:   ", &ConfigLoader::user_config_path()));
    println!("{}", describe("Project config:", &ConfigLoader::project_config_path()));
    Ok(())
}

fn describe(label: &str, path: &Path) -> String {
    let state = if path.exists() { "" } else { " (not found)" };
    format!("{label} {}{state}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn describe_marks_missing_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("config.toml");
        assert!(describe("User config:", &missing).ends_with("(not found)"));

        std::fs::write(&missing, "").unwrap();
        assert!(!describe("User config:", &missing).contains("not found"));
    }
}
