// src/core/export.rs

use chrono::Local;
use color_eyre::eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::models::ScanResult;

/// Turns a hostname into something safe to put in a file name.
fn file_stem_for(domain: &str) -> String {
    if domain.is_empty() {
        return "unknown".to_string();
    }
    domain
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect()
}

/// Writes `result` as pretty JSON into `dir` and returns the file path.
///
/// The directory is created if needed. Names look like
/// `scan-example.com-20240115-093000.json`.
pub fn export_result(result: &ScanResult, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Could not create export directory {}", dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let file_name = format!("scan-{}-{}.json", file_stem_for(&result.details.domain), timestamp);
    let path = dir.join(file_name);

    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(&path, json)
        .wrap_err_with(|| format!("Could not write report to {}", path.display()))?;

    info!(path = %path.display(), "Scan report exported.");
    Ok(path)
}
