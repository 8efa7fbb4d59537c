//! JSON file helpers shared by the commands.

use std::path::Path;

use eyre::Context as _;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read and parse a JSON file.
pub(super) async fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

/// Write `value` as pretty-printed JSON.
pub(super) async fn write_json<T: Serialize>(path: &Path, value: &T) -> eyre::Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
