//! Deterministic, pure text transforms shared by both tools.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! strings and return deterministic outputs suitable for tests.

pub mod address;
pub mod env;
pub mod patch;
