//! Per-bullet writing guidance
//!
//! Advisory hints for a single description field: start with a recognized
//! action verb, and include a number-like token. Hints never block anything.

use crate::scoring::ats::number_pattern;
use std::collections::HashSet;
use std::sync::OnceLock;

const ACTION_VERBS: &[&str] = &[
    "built", "developed", "designed", "implemented", "led", "improved",
    "created", "optimized", "automated", "managed", "launched", "reduced",
    "increased", "deployed", "integrated", "migrated", "refactored",
    "streamlined", "maintained", "analyzed", "architected", "configured",
    "coordinated", "delivered", "established", "executed", "facilitated",
    "generated", "mentored", "negotiated", "orchestrated", "pioneered",
    "resolved", "scaled", "secured", "simplified", "spearheaded",
    "supervised", "tested", "transformed", "upgraded",
];

fn action_verbs() -> &'static HashSet<&'static str> {
    static VERBS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    VERBS.get_or_init(|| ACTION_VERBS.iter().copied().collect())
}

/// Writing hints for one bullet of text: zero, one, or two strings.
pub fn get_guidance(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut hints = Vec::new();

    let first_word: String = trimmed
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if !first_word.is_empty() && !action_verbs().contains(first_word.as_str()) {
        hints.push("Start with a strong action verb.".to_string());
    }

    if !number_pattern().is_match(trimmed) {
        hints.push("Add measurable impact (numbers).".to_string());
    }

    hints
}
