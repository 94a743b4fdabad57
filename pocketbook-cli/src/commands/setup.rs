//! Setup command - configure the remote snapshot endpoint

use anyhow::Result;
use colored::Colorize;
use pocketbook_core::adapters::jsonbin::JsonBinClient;
use pocketbook_core::config::Config;

use super::get_pocketbook_dir;

pub fn run(url: Option<String>, key: Option<String>) -> Result<()> {
    if url.is_none() && key.is_none() {
        anyhow::bail!("Nothing to configure. Pass --url and/or --key.");
    }

    let dir = get_pocketbook_dir();
    std::fs::create_dir_all(&dir)?;

    let mut config = Config::load(&dir)?;
    if let Some(url) = url {
        config.api_url = url;
    }
    if let Some(key) = key {
        config.master_key = key;
    }

    // Reject unusable endpoints before persisting them
    JsonBinClient::new(&config.api_url, &config.master_key)?;

    config.save(&dir)?;
    println!(
        "{} settings written to {}",
        "Configured:".green(),
        dir.join("settings.json").display()
    );

    Ok(())
}
