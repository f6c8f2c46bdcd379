//! Environment/runtime helpers
//!
//! Path resolution and sanity checks for files the process needs at startup.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Resolve `path` against the current working directory unless already absolute.
pub fn resolve_path(path: &str) -> anyhow::Result<PathBuf> {
    let p = Path::new(path);
    if p.is_absolute() {
        return Ok(p.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("failed to get current working directory: {e}"))?;
    Ok(cwd.join(p))
}

/// Ensure a required data file exists and return its absolute path.
pub async fn ensure_file(path: &str) -> anyhow::Result<PathBuf> {
    let resolved = resolve_path(path)?;
    let meta = tokio::fs::metadata(&resolved)
        .await
        .map_err(|e| anyhow::anyhow!("data file {} is not readable: {e}", resolved.display()))?;
    if !meta.is_file() {
        return Err(anyhow::anyhow!("data file {} is not a regular file", resolved.display()));
    }
    debug!(path = %resolved.display(), "data file located");
    Ok(resolved)
}
