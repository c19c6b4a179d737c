//! Node directory layout and `.env` derivation.
//!
//! Each node is a fixed subdirectory of a base directory holding
//! `.env.example` (template, human-maintained) and `.env` (derived output,
//! overwritten on every run).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::address::EthAddress;
use crate::core::env::{PUB_ETH_ADDR_KEY, set_env_key};

/// Fixed node identifiers, processed in order.
pub const NODES: [&str; 2] = ["node1", "node2"];

/// Canonical paths for one node directory.
#[derive(Debug, Clone)]
pub struct NodePaths {
    pub dir: PathBuf,
    pub template_path: PathBuf,
    pub env_path: PathBuf,
}

impl NodePaths {
    pub fn new(base: &Path, node: &str) -> Self {
        let dir = base.join(node);
        Self {
            template_path: dir.join(".env.example"),
            env_path: dir.join(".env"),
            dir,
        }
    }
}

/// Outcome of writing one node's env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeEnvOutcome {
    /// `.env` written from the template.
    Written(PathBuf),
    /// Template absent; nothing written for this node.
    MissingTemplate(PathBuf),
}

/// Derive `<node>/.env` from `<node>/.env.example`, stamping `PUB_ETH_ADDR`.
///
/// The template itself is never modified. An existing `.env` is overwritten.
pub fn write_node_env(paths: &NodePaths, address: &EthAddress) -> Result<NodeEnvOutcome> {
    if !paths.template_path.exists() {
        return Ok(NodeEnvOutcome::MissingTemplate(paths.template_path.clone()));
    }

    let template = fs::read_to_string(&paths.template_path)
        .with_context(|| format!("read {}", paths.template_path.display()))?;
    let derived = set_env_key(&template, PUB_ETH_ADDR_KEY, address.as_str());

    fs::write(&paths.env_path, derived)
        .with_context(|| format!("write {}", paths.env_path.display()))?;
    debug!(path = %paths.env_path.display(), "env file written");
    Ok(NodeEnvOutcome::Written(paths.env_path.clone()))
}
