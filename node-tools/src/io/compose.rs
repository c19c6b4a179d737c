//! Reading, patching, and writing the compose file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::patch::{PATCH_RULES, apply_rules};

/// Outcome of a patch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// File content changed and was written back.
    Patched(PathBuf),
    /// No pattern matched (already patched or foreign file); nothing written.
    Unchanged,
}

/// Validate that `path` names an existing regular file with a compose-like
/// extension (`.yml` or `.yaml`).
///
/// Callers treat a failure here as a usage error: no file has been touched.
pub fn validate_compose_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(anyhow!("no such file: {}", path.display()));
    }
    if !path.is_file() {
        return Err(anyhow!("not a regular file: {}", path.display()));
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("yml" | "yaml") => Ok(()),
        _ => Err(anyhow!(
            "expected a .yml or .yaml file: {}",
            path.display()
        )),
    }
}

/// Apply the fixed patch set to the file at `path`.
///
/// The write is a single full-file overwrite, performed only when the patched
/// text differs from the original.
pub fn patch_compose_file(path: &Path) -> Result<PatchOutcome> {
    let original =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let patched = apply_rules(&original, PATCH_RULES);

    if patched == original {
        debug!(path = %path.display(), "no pattern matched");
        return Ok(PatchOutcome::Unchanged);
    }

    fs::write(path, &patched).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), "patched");
    Ok(PatchOutcome::Patched(path.to_path_buf()))
}
