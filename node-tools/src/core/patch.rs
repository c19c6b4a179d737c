//! Ordered literal substring replacement for the compose file.
//!
//! The compose file is treated as opaque text: rules are exact substring
//! matches, never regexes, so the patcher is agnostic to YAML structure.

/// A single (match text, replacement text) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchRule {
    pub old: &'static str,
    pub new: &'static str,
}

/// Fixed patch set turning the stock miner compose file into a second
/// instance: renamed container, host ports bumped past the first node's.
///
/// Invariant: no rule's `new` text contains any rule's `old` text, so applying
/// the set twice equals applying it once (`patch_set_is_idempotent` asserts
/// this). The rename rule anchors on the line break: without it the renamed
/// container (`…-testnet-2`) still contains the bare name and every re-run
/// would append another `-2`.
pub const PATCH_RULES: &[PatchRule] = &[
    PatchRule {
        old: "container_name: blockdag-miner-testnet\n",
        new: "container_name: blockdag-miner-testnet-2\n",
    },
    PatchRule {
        old: "\"38131:38131\"",
        new: "\"38132:38131\"",
    },
    PatchRule {
        old: "\"18545:18545\"",
        new: "\"18547:18545\"",
    },
    PatchRule {
        old: "\"18546:18546\"",
        new: "\"18548:18546\"",
    },
    PatchRule {
        old: "\"18150:18150\"",
        new: "\"18151:18150\"",
    },
];

/// Apply `rules` to `text` in order; rule N sees rule N-1's output.
///
/// Replacement is sequential, not simultaneous. Returns the patched text;
/// compare against the input to detect a no-op.
pub fn apply_rules(text: &str, rules: &[PatchRule]) -> String {
    let mut patched = text.to_string();
    for rule in rules {
        patched = patched.replace(rule.old, rule.new);
    }
    patched
}
