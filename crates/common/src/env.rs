//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::PathBuf;

use tracing::info;

/// Filesystem path of a SQLite URL, or `None` for in-memory databases.
///
/// `sqlite://data/items.db?mode=rwc` -> `data/items.db`
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Create the parent directory of a file-backed SQLite database.
pub async fn ensure_database_dir(url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(url) else { return Ok(()) };
    let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else { return Ok(()) };
    if tokio::fs::metadata(dir).await.is_err() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
        info!(dir = %dir.display(), "created database directory");
    }
    Ok(())
}
