//! CLI interface for the resume builder

use crate::model::resume::SkillCategory;
use crate::storage::{AccentColor, TemplateName};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-builder")]
#[command(about = "Local resume authoring tool with a heuristic ATS readiness score")]
#[command(
    long_about = "Edit structured resume data from the command line, keep it in durable local storage, and get a heuristic ATS readiness score with improvement suggestions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resume as flattened text
    Show,

    /// Compute the ATS readiness score with suggestions
    Score,

    /// Print the top prioritized improvements
    Advise,

    /// Check a single bullet or description for writing hints
    Guide {
        /// The bullet text to check
        text: String,
    },

    /// Export the resume as a plain-text file
    Export {
        /// Save to a file instead of printing to stdout
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Replace the resume with the built-in sample dataset
    Sample,

    /// Reset the resume to an empty state
    Reset {
        /// Confirm the reset without prompting
        #[arg(short, long)]
        yes: bool,
    },

    /// Edit resume fields and entries
    Edit {
        #[command(subcommand)]
        action: EditAction,
    },

    /// Show or change display settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand)]
pub enum EditAction {
    /// Replace the professional summary
    SetSummary {
        /// New summary text
        text: String,
    },

    /// Update contact details (only the given fields change)
    SetPersonal {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        location: Option<String>,
    },

    /// Update profile links (only the given fields change)
    SetLinks {
        #[arg(long)]
        linkedin: Option<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        portfolio: Option<String>,
    },

    /// Add a skill tag to a category
    AddSkill {
        /// Skill category: technical, soft, tools
        category: String,

        /// The skill tag to add
        tag: String,
    },

    /// Add an education entry
    AddEducation {
        #[arg(long)]
        institution: String,

        #[arg(long)]
        degree: String,

        #[arg(long, default_value = "")]
        field: String,

        #[arg(long, default_value = "")]
        start: String,

        #[arg(long, default_value = "")]
        end: String,
    },

    /// Remove an education entry by id
    RemoveEducation {
        id: String,
    },

    /// Add a work experience entry
    AddExperience {
        #[arg(long)]
        company: String,

        #[arg(long)]
        role: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        start: String,

        #[arg(long, default_value = "")]
        end: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Remove a work experience entry by id
    RemoveExperience {
        id: String,
    },

    /// Add a project entry
    AddProject {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Comma-separated technology tags
        #[arg(long, default_value = "")]
        technologies: String,

        #[arg(long, default_value = "")]
        live_url: String,

        #[arg(long, default_value = "")]
        github_url: String,
    },

    /// Remove a project entry by id
    RemoveProject {
        id: String,
    },

    /// List entry ids for education, experience, and projects
    List,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Show,

    /// Choose a preview template
    Template {
        /// Template name: classic, modern, minimal
        name: String,
    },

    /// Choose an accent color
    Accent {
        /// Color name: blue, emerald, violet, rose
        name: String,
    },
}

/// Parse and validate a template name
pub fn parse_template(name: &str) -> Result<TemplateName, String> {
    match name.to_lowercase().as_str() {
        "classic" => Ok(TemplateName::Classic),
        "modern" => Ok(TemplateName::Modern),
        "minimal" => Ok(TemplateName::Minimal),
        _ => Err(format!(
            "Invalid template: {}. Supported: classic, modern, minimal",
            name
        )),
    }
}

/// Parse and validate an accent color name
pub fn parse_accent(name: &str) -> Result<AccentColor, String> {
    match name.to_lowercase().as_str() {
        "blue" => Ok(AccentColor::Blue),
        "emerald" => Ok(AccentColor::Emerald),
        "violet" => Ok(AccentColor::Violet),
        "rose" => Ok(AccentColor::Rose),
        _ => Err(format!(
            "Invalid accent color: {}. Supported: blue, emerald, violet, rose",
            name
        )),
    }
}

/// Parse and validate a skill category name
pub fn parse_skill_category(name: &str) -> Result<SkillCategory, String> {
    match name.to_lowercase().as_str() {
        "technical" => Ok(SkillCategory::Technical),
        "soft" => Ok(SkillCategory::Soft),
        "tools" => Ok(SkillCategory::Tools),
        _ => Err(format!(
            "Invalid skill category: {}. Supported: technical, soft, tools",
            name
        )),
    }
}
