// ABOUTME: Saves downloaded images into the output directory without overwriting
// ABOUTME: Derives filenames from the source URL with a timestamp fallback

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written(PathBuf),
    AlreadyExists(PathBuf),
}

/// Write `bytes` under a name derived from `url`. A file that already exists
/// at the target path is never overwritten; the call reports the skip instead.
pub fn save(bytes: &[u8], url: &str, output_dir: &Path) -> Result<SaveOutcome> {
    let target = output_dir.join(filename_for(url));

    if target.exists() {
        return Ok(SaveOutcome::AlreadyExists(target));
    }

    std::fs::write(&target, bytes)
        .with_context(|| format!("failed to write {}", target.display()))?;
    Ok(SaveOutcome::Written(target))
}

/// Last path segment of the URL, or a timestamp-synthesized name when the
/// URL has no usable segment.
pub fn filename_for(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let segment = without_query.rsplit('/').next().unwrap_or("");

    if segment.is_empty() {
        format!("anicii-{}.png", Utc::now().format("%Y%m%d%H%M%S%3f"))
    } else {
        segment.to_string()
    }
}
