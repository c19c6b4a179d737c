//! `KEY=VALUE` line editing for `.env`-style files.
//!
//! Files are ordered sequences of lines; mutation targets exactly one key and
//! every other line is preserved verbatim and in order.

/// The single key both node env files are stamped with.
pub const PUB_ETH_ADDR_KEY: &str = "PUB_ETH_ADDR";

/// Replace the value of `key` in `text`, or append a `key=value` line.
///
/// Every line starting with `key=` is rewritten to `key=value`. If no such
/// line exists, the assignment is appended, preceded by a blank separator line
/// when the last existing line is non-blank. Output is newline-joined and
/// newline-terminated.
pub fn set_env_key(text: &str, key: &str, value: &str) -> String {
    let prefix = format!("{key}=");
    let assignment = format!("{key}={value}");

    let mut lines: Vec<String> = Vec::new();
    let mut replaced = false;
    for line in text.lines() {
        if line.starts_with(&prefix) {
            lines.push(assignment.clone());
            replaced = true;
        } else {
            lines.push(line.to_string());
        }
    }

    if !replaced {
        if lines.last().is_some_and(|last| !last.trim().is_empty()) {
            lines.push(String::new());
        }
        lines.push(assignment);
    }

    let mut joined = lines.join("\n");
    joined.push('\n');
    joined
}
