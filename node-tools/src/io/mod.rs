//! Filesystem side effects for both tools.

pub mod compose;
pub mod node_env;
