use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Resolve where the JSON report goes.
///
/// No path means the current directory. A directory (existing, or a path
/// ending with a separator) receives `frameguard_<timestamp>.json`; any other
/// path is used as the file name, creating missing parent directories.
pub fn resolve_file_path(path: Option<&str>, timestamp: &str) -> Result<PathBuf> {
    let base_path = path.unwrap_or(".");
    let path = Path::new(base_path);
    let filename = format!("frameguard_{}.json", timestamp);

    if path.is_dir() {
        return Ok(path.join(filename));
    }

    if base_path.ends_with('/') || base_path.ends_with('\\') {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        return Ok(path.join(filename));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(path.to_path_buf())
}

pub fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
