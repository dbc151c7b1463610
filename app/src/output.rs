//! JSON persistence of extraction results.

use std::path::Path;

use ordersift_core::TranscriptResult;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Render results as a JSON array indented with four spaces.
pub fn render(results: &[TranscriptResult]) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

pub async fn write(path: &Path, rendered: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, rendered)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot write {}: {e}", path.display()))
}
