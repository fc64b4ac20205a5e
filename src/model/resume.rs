//! Canonical resume schema
//!
//! Plain data throughout: every field may be empty, and no validation lives
//! here. A resume is never invalid, only incomplete, and incompleteness is
//! the scoring engine's concern. Field names serialize as camelCase so
//! payloads written by earlier versions of the app keep loading.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Technical,
    Soft,
    Tools,
}

impl Skills {
    pub fn category_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    /// Total number of tags across all three categories.
    pub fn total_tags(&self) -> usize {
        self.technical.len() + self.soft.len() + self.tools.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeLinks {
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

/// Root aggregate for a single resume. The state store holds the one
/// canonical in-memory copy; everything downstream is a pure projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub links: ResumeLinks,
}

impl ResumeData {
    /// A resume with every string empty and every sequence empty.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Entities carry a stable id assigned at creation, never reused.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Education {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Experience {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Generate a fresh entity id.
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

impl Education {
    pub fn new() -> Self {
        Self {
            id: new_entity_id(),
            ..Self::default()
        }
    }
}

impl Experience {
    pub fn new() -> Self {
        Self {
            id: new_entity_id(),
            ..Self::default()
        }
    }
}

impl Project {
    pub fn new() -> Self {
        Self {
            id: new_entity_id(),
            ..Self::default()
        }
    }
}

/// Split a comma-separated tag string, trimming whitespace and dropping
/// empty segments.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Append a tag unless an equal tag is already present under case-insensitive
/// comparison. This is the dedupe boundary for skill and technology lists.
/// Returns true if the tag was appended.
pub fn push_unique_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return false;
    }
    if tags
        .iter()
        .any(|existing| existing.to_lowercase() == trimmed.to_lowercase())
    {
        return false;
    }
    tags.push(trimmed.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume() {
        let resume = ResumeData::empty();
        assert!(resume.personal_info.full_name.is_empty());
        assert!(resume.summary.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.experience.is_empty());
        assert!(resume.projects.is_empty());
        assert_eq!(resume.skills.total_tags(), 0);
        assert!(resume.links.linkedin.is_empty());
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let a = Project::new();
        let b = Project::new();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("React, Node, SQL"), vec!["React", "Node", "SQL"]);
        assert_eq!(split_tags("  a , ,b,, "), vec!["a", "b"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_push_unique_tag_case_insensitive() {
        let mut tags = vec!["React".to_string()];
        assert!(!push_unique_tag(&mut tags, "react"));
        assert!(!push_unique_tag(&mut tags, " REACT "));
        assert_eq!(tags, vec!["React"]);

        assert!(push_unique_tag(&mut tags, "Node.js"));
        assert_eq!(tags, vec!["React", "Node.js"]);
    }

    #[test]
    fn test_push_unique_tag_rejects_blank() {
        let mut tags = Vec::new();
        assert!(!push_unique_tag(&mut tags, "   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_camel_case_serialization() {
        let resume = ResumeData::empty();
        let json = serde_json::to_value(&resume).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json["personalInfo"].get("fullName").is_some());
    }
}
