use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::listing::SearchResult;
use crate::utils::result_file_name;

/// Timeout for blocking JSON serialization
/// Prevents hangs on pathological data structures
const BLOCKING_SERIALIZATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Save a search result as pretty-printed JSON under `output_dir`.
///
/// The directory is created if missing. The file is named after the query
/// and the result's own timestamp, see [`result_file_name`].
///
/// Returns the path of the written file.
pub async fn save_search_result(result: &SearchResult, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(result_file_name(result.query(), result.timestamp()));

    // JSON serialization (keep spawn_blocking - CPU intensive)
    let owned = result.clone();
    let blocking_task = tokio::task::spawn_blocking(move || serde_json::to_string_pretty(&owned));

    let json_str = match timeout(BLOCKING_SERIALIZATION_TIMEOUT, blocking_task).await {
        Ok(Ok(serialized)) => serialized.context("Failed to serialize search result")?,
        Ok(Err(e)) => return Err(anyhow::anyhow!("JSON serialization task panicked: {}", e)),
        Err(_) => {
            warn!(
                "JSON serialization timeout (timeout: {:?})",
                BLOCKING_SERIALIZATION_TIMEOUT
            );
            return Err(anyhow::anyhow!(
                "JSON serialization timed out after {:?}",
                BLOCKING_SERIALIZATION_TIMEOUT
            ));
        }
    };

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    tokio::fs::write(&path, json_str)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} listings to {}", result.total_count(), path.display());

    Ok(path)
}

/// Read a previously saved search result
pub async fn load_search_result(path: &Path) -> Result<SearchResult> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid search result JSON in {}", path.display()))
}
