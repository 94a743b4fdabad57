//! CLI command implementations

pub mod cards;
pub mod onboarding;
pub mod reset;
pub mod setup;
pub mod status;
pub mod sync;
pub mod transactions;
pub mod transfer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use pocketbook_core::PocketbookContext;

/// Get the pocketbook directory from environment or default
pub fn get_pocketbook_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("POCKETBOOK_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".pocketbook")
    }
}

/// Get or create the pocketbook context
pub fn get_context() -> Result<PocketbookContext> {
    let dir = get_pocketbook_dir();

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create pocketbook directory: {:?}", dir))?;

    PocketbookContext::new(&dir).context("Failed to initialize pocketbook context")
}
