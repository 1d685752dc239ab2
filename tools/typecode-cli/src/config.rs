//! Config command - show config location and effective settings

use anyhow::{Context, Result};
use typecode_core::config;

/// Execute the config command
pub fn execute() -> Result<()> {
    match config::config_path() {
        Some(path) => {
            let state = if path.exists() { "" } else { " (not created)" };
            println!("# {}{}", path.display(), state);
        }
        None => println!("# no config directory available"),
    }

    let config = config::shared();
    tracing::debug!("Effective config: {:?}", config);

    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    print!("{}", content);
    Ok(())
}
