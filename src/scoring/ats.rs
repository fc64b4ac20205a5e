//! Heuristic ATS readiness scoring
//!
//! Deterministic and pure: seven weighted signals computed from disjoint
//! parts of the resume, summed, clamped to 100, and rounded. The category
//! maxima sum to 80, not 100; that ceiling is inherited from the original
//! tuning of the heuristics and is preserved on purpose rather than
//! normalized away (see DESIGN.md).

use crate::model::resume::ResumeData;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// At most this many suggestions accompany a score.
pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsResult {
    /// Readiness score in 0..=100.
    pub score: u8,
    /// Up to three fixed advisory strings, one per under-max category, in a
    /// fixed category order.
    pub suggestions: Vec<String>,
}

/// A run of digits optionally followed by `%`, or digits followed by a
/// k/K/m/M/+ magnitude suffix.
pub(crate) fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+%?|\d+[kKmM+]").expect("valid number pattern"))
}

/// Whitespace-delimited word count, empty segments excluded.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True if any experience or project description contains a number-like token.
pub(crate) fn has_quantified_impact(resume: &ResumeData) -> bool {
    resume
        .experience
        .iter()
        .map(|e| e.description.as_str())
        .chain(resume.projects.iter().map(|p| p.description.as_str()))
        .any(|description| number_pattern().is_match(description))
}

struct Signal {
    points: f64,
    max: f64,
    suggestion: &'static str,
}

fn summary_signal(resume: &ResumeData) -> Signal {
    let words = word_count(&resume.summary);
    // Runaway summaries (over 120 words) score against a reduced 10-point cap.
    let cap = if words <= 120 { 15.0 } else { 10.0 };
    Signal {
        points: (words.min(40) as f64 / 40.0) * cap,
        max: 15.0,
        suggestion: "Write a focused professional summary of about 40 words.",
    }
}

fn project_signal(resume: &ResumeData) -> Signal {
    Signal {
        points: (resume.projects.len().min(2) as f64 / 2.0) * 10.0,
        max: 10.0,
        suggestion: "Add at least two projects to showcase your work.",
    }
}

fn experience_signal(resume: &ResumeData) -> Signal {
    Signal {
        points: if resume.experience.is_empty() { 0.0 } else { 10.0 },
        max: 10.0,
        suggestion: "Add at least one work experience entry.",
    }
}

fn skills_signal(resume: &ResumeData) -> Signal {
    Signal {
        points: (resume.skills.total_tags().min(8) as f64 / 8.0) * 10.0,
        max: 10.0,
        suggestion: "List at least 8 skills across technical, soft, and tools.",
    }
}

fn links_signal(resume: &ResumeData) -> Signal {
    let mut points = 0.0;
    if !resume.links.linkedin.trim().is_empty() {
        points += 5.0;
    }
    if !resume.links.github.trim().is_empty() {
        points += 5.0;
    }
    Signal {
        points,
        max: 10.0,
        suggestion: "Add your LinkedIn and GitHub profile links.",
    }
}

fn impact_signal(resume: &ResumeData) -> Signal {
    Signal {
        points: if has_quantified_impact(resume) { 15.0 } else { 0.0 },
        max: 15.0,
        suggestion: "Quantify your impact with numbers in an experience or project description.",
    }
}

fn education_signal(resume: &ResumeData) -> Signal {
    // Best single entry wins; other entries are ignored.
    let best = resume
        .education
        .iter()
        .map(|entry| {
            [
                &entry.institution,
                &entry.degree,
                &entry.field,
                &entry.start_date,
                &entry.end_date,
            ]
            .iter()
            .filter(|field| !field.trim().is_empty())
            .count()
        })
        .max()
        .unwrap_or(0);
    Signal {
        points: (best as f64 / 5.0) * 10.0,
        max: 10.0,
        suggestion: "Fill in institution, degree, field, and dates for an education entry.",
    }
}

/// Score a resume and collect up to three improvement suggestions.
pub fn compute_ats_score(resume: &ResumeData) -> AtsResult {
    let signals = [
        summary_signal(resume),
        project_signal(resume),
        experience_signal(resume),
        skills_signal(resume),
        links_signal(resume),
        impact_signal(resume),
        education_signal(resume),
    ];

    let total: f64 = signals.iter().map(|signal| signal.points).sum();
    let score = total.clamp(0.0, 100.0).round() as u8;

    let suggestions = signals
        .iter()
        .filter(|signal| signal.points < signal.max)
        .take(MAX_SUGGESTIONS)
        .map(|signal| signal.suggestion.to_string())
        .collect();

    AtsResult { score, suggestions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::{
        Education, Experience, PersonalInfo, Project, ResumeLinks, Skills,
    };

    /// A resume at the maximum of every category.
    fn complete_resume() -> ResumeData {
        let forty_words = vec!["word"; 40].join(" ");
        ResumeData {
            personal_info: PersonalInfo::default(),
            summary: forty_words,
            education: vec![Education {
                id: "edu-1".to_string(),
                institution: "State University".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2016".to_string(),
                end_date: "2020".to_string(),
            }],
            experience: vec![Experience {
                id: "exp-1".to_string(),
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                location: String::new(),
                start_date: String::new(),
                end_date: String::new(),
                description: "Cut build times by 50%".to_string(),
            }],
            projects: vec![
                Project {
                    id: "proj-1".to_string(),
                    name: "One".to_string(),
                    ..Project::default()
                },
                Project {
                    id: "proj-2".to_string(),
                    name: "Two".to_string(),
                    ..Project::default()
                },
            ],
            skills: Skills {
                technical: vec!["a", "b", "c", "d"].into_iter().map(String::from).collect(),
                soft: vec!["e", "f"].into_iter().map(String::from).collect(),
                tools: vec!["g", "h"].into_iter().map(String::from).collect(),
            },
            links: ResumeLinks {
                linkedin: "https://linkedin.com/in/someone".to_string(),
                github: "https://github.com/someone".to_string(),
                portfolio: String::new(),
            },
        }
    }

    #[test]
    fn test_empty_resume_scores_zero_with_three_suggestions() {
        let result = compute_ats_score(&ResumeData::empty());
        assert_eq!(result.score, 0);
        assert_eq!(result.suggestions.len(), 3);
        // First three categories in fixed order: summary, projects, experience.
        assert!(result.suggestions[0].contains("summary"));
        assert!(result.suggestions[1].contains("projects"));
        assert!(result.suggestions[2].contains("work experience"));
    }

    #[test]
    fn test_complete_resume_hits_the_80_point_ceiling() {
        let result = compute_ats_score(&complete_resume());
        assert_eq!(result.score, 80);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_overlong_summary_scores_against_reduced_cap() {
        let mut resume = complete_resume();
        resume.summary = vec!["word"; 200].join(" ");
        let result = compute_ats_score(&resume);
        // 10 summary points instead of 15, and the summary suggestion fires.
        assert_eq!(result.score, 75);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0].contains("summary"));
    }

    #[test]
    fn test_summary_scales_linearly_below_forty_words() {
        let mut resume = ResumeData::empty();
        resume.summary = vec!["word"; 20].join(" ");
        let result = compute_ats_score(&resume);
        // 20/40 * 15 = 7.5, rounded to 8.
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_links_score_independently() {
        let mut resume = ResumeData::empty();
        resume.links.linkedin = "https://linkedin.com/in/x".to_string();
        assert_eq!(compute_ats_score(&resume).score, 5);

        resume.links.github = "https://github.com/x".to_string();
        assert_eq!(compute_ats_score(&resume).score, 10);

        // Portfolio is not scored; whitespace-only links count as absent.
        resume.links.portfolio = "https://x.dev".to_string();
        resume.links.github = "   ".to_string();
        assert_eq!(compute_ats_score(&resume).score, 5);
    }

    #[test]
    fn test_quantified_impact_detects_magnitude_suffixes() {
        let mut resume = ResumeData::empty();
        resume.projects.push(Project {
            id: "p".to_string(),
            description: "Served 50M+ users".to_string(),
            ..Project::default()
        });
        // 5 project points + 15 impact points.
        assert_eq!(compute_ats_score(&resume).score, 20);
    }

    #[test]
    fn test_education_best_entry_wins() {
        let mut resume = ResumeData::empty();
        resume.education.push(Education {
            id: "edu-1".to_string(),
            institution: "Somewhere".to_string(),
            ..Education::default()
        });
        resume.education.push(Education {
            id: "edu-2".to_string(),
            institution: "Elsewhere".to_string(),
            degree: "BSc".to_string(),
            field: "Math".to_string(),
            start_date: "2010".to_string(),
            end_date: "2014".to_string(),
        });
        // Best entry has all 5 fields: full 10 points, first entry ignored.
        assert_eq!(compute_ats_score(&resume).score, 10);
    }

    #[test]
    fn test_score_is_deterministic() {
        let resume = complete_resume();
        let first = compute_ats_score(&resume);
        for _ in 0..10 {
            assert_eq!(compute_ats_score(&resume), first);
        }
    }

    #[test]
    fn test_score_is_always_in_range() {
        for resume in [ResumeData::empty(), complete_resume()] {
            let result = compute_ats_score(&resume);
            assert!(result.score <= 100);
            assert!(result.suggestions.len() <= MAX_SUGGESTIONS);
        }
    }
}
