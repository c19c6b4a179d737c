//! Text-patching tools for a BlockDAG testnet node deployment.
//!
//! Two single-shot CLI binaries share this crate:
//!
//! - `patch-compose`: rewrites a Docker Compose file so a second miner
//!   instance can run next to the first (renamed container, bumped host
//!   ports), via ordered literal substring replacement.
//! - `set-node-env`: stamps a miner payout address into each node's `.env`,
//!   derived from that node's `.env.example` template.
//!
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic text transforms (patch application,
//!   address validation, env-line editing). No I/O, fully testable in
//!   isolation.
//! - **[`io`]**: Side-effecting operations (path validation, file read/write).
//!
//! Binaries coordinate core logic with I/O and map outcomes to the stable
//! codes in [`exit_codes`].

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
