//! Stable exit codes shared by both CLI binaries.

/// File patched, no-op, or all env files written.
pub const OK: i32 = 0;
/// Runtime failure: a node's template is missing, or an I/O error surfaced.
pub const FAILURE: i32 = 1;
/// Usage error: wrong argument count, invalid path, or malformed address.
/// Matches clap's own exit code for argument errors.
pub const USAGE: i32 = 2;
