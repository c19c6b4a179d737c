//! Test-only helpers for constructing on-disk fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::io::node_env::NodePaths;

/// Write `content` as `docker-compose.yml` under `dir` and return its path.
pub fn write_compose_fixture(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = dir.join("docker-compose.yml");
    fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Create `<base>/<node>/.env.example` with `content` and return the node's
/// paths.
pub fn write_node_template(base: &Path, node: &str, content: &str) -> Result<NodePaths> {
    let paths = NodePaths::new(base, node);
    fs::create_dir_all(&paths.dir)
        .with_context(|| format!("create {}", paths.dir.display()))?;
    fs::write(&paths.template_path, content)
        .with_context(|| format!("write {}", paths.template_path.display()))?;
    Ok(paths)
}
