//! Prioritized improvement advice
//!
//! Independent of the score breakdown: its own thresholds and message text,
//! evaluated in a fixed priority order and capped at three. The constants
//! deliberately stay separate from the scoring engine's so the two heuristic
//! sets can be tuned on their own.

use crate::model::resume::ResumeData;
use crate::scoring::ats::{has_quantified_impact, word_count};
use std::collections::HashSet;

/// At most this many improvements are returned.
pub const MAX_IMPROVEMENTS: usize = 3;

/// Count distinct skills over a flattened, comma-separated view of all three
/// categories, case-insensitively.
fn distinct_skill_count(resume: &ResumeData) -> usize {
    let flattened = [
        resume.skills.technical.join(", "),
        resume.skills.soft.join(", "),
        resume.skills.tools.join(", "),
    ]
    .join(", ");

    let mut seen = HashSet::new();
    flattened
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .count()
}

/// The top prioritized improvements for a resume, at most three.
pub fn top_improvements(resume: &ResumeData) -> Vec<String> {
    let mut tips = Vec::new();

    if resume.projects.len() < 2 {
        tips.push("Add another project to show breadth of work.".to_string());
    }
    if !has_quantified_impact(resume) {
        tips.push("Add measurable impact (numbers, percentages) to a description.".to_string());
    }
    if word_count(&resume.summary) < 40 {
        tips.push("Expand your summary to at least 40 words.".to_string());
    }
    if distinct_skill_count(resume) < 8 {
        tips.push("Add more skills, aiming for at least 8.".to_string());
    }
    if resume.experience.is_empty() {
        tips.push("Add at least one work experience or internship.".to_string());
    }

    tips.truncate(MAX_IMPROVEMENTS);
    tips
}
