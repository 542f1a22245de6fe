//! Writes the relay's OpenAPI document as pretty JSON.
//!
//! Usage: cargo run --bin export_openapi [OUTPUT]
//!
//! OUTPUT defaults to docs/openapi.json; missing parent directories are created.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use genrelay::docs::RelayApiDoc;
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "docs/openapi.json";

fn main() -> anyhow::Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    export(&output)?;
    println!("Wrote relay OpenAPI document to {}", output.display());
    Ok(())
}

fn export(output: &Path) -> anyhow::Result<()> {
    let document = RelayApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialize relay OpenAPI document")?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(output, document).with_context(|| format!("Failed to write {}", output.display()))
}
