//! Durable local storage for resume data and display settings
//!
//! Storage is a directory of JSON files, one per key. The resume lives under
//! a current key; a one-time migration lifts payloads written under the
//! legacy key (string-based skills and technologies) into the current schema
//! and then deletes the legacy file. Loading never fails: a missing key and
//! a corrupt payload both degrade to a fresh empty resume.

use crate::error::{Result, ResumeBuilderError};
use crate::model::resume::{split_tags, ResumeData};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const RESUME_KEY: &str = "resume-data-v2";
pub const LEGACY_RESUME_KEY: &str = "resume-data";
pub const TEMPLATE_KEY: &str = "template";
pub const ACCENT_KEY: &str = "accent-color";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateName {
    Classic,
    Modern,
    Minimal,
}

impl Default for TemplateName {
    fn default() -> Self {
        TemplateName::Classic
    }
}

impl TemplateName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Classic => "classic",
            TemplateName::Modern => "modern",
            TemplateName::Minimal => "minimal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Blue,
    Emerald,
    Violet,
    Rose,
}

impl Default for AccentColor {
    fn default() -> Self {
        AccentColor::Blue
    }
}

impl AccentColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Emerald => "emerald",
            AccentColor::Violet => "violet",
            AccentColor::Rose => "rose",
        }
    }
}

/// How the resume was obtained at load time. The public `load` contract
/// never fails, but the outcome stays observable for auditing and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Read from the current key.
    Loaded,
    /// Read from the legacy key and rewritten under the current key.
    Migrated,
    /// Nothing usable on disk; started from an empty resume.
    Fresh,
}

/// Key/value JSON storage rooted at a directory.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open storage at the given directory, creating it if needed.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn read_json(&self, key: &str) -> Option<Value> {
        let raw = fs::read_to_string(self.key_path(key)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("discarding unparseable payload under {}: {}", key, e);
                None
            }
        }
    }

    fn write_json(&self, key: &str, value: &Value) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), content)?;
        Ok(())
    }

    /// Load the resume. Falls back to the legacy key (migrating once) and
    /// then to an empty resume; never raises to the caller.
    pub fn load(&self) -> ResumeData {
        self.load_with_outcome().0
    }

    pub fn load_with_outcome(&self) -> (ResumeData, LoadOutcome) {
        if let Some(value) = self.read_json(RESUME_KEY) {
            match serde_json::from_value::<ResumeData>(value) {
                Ok(resume) => return (resume, LoadOutcome::Loaded),
                Err(e) => debug!("stored resume does not match current schema: {}", e),
            }
        }

        if let Some(raw) = self.read_json(LEGACY_RESUME_KEY) {
            let resume = migrate(raw);
            if let Err(e) = self.save(&resume) {
                warn!("failed to persist migrated resume: {}", e);
            }
            if let Err(e) = fs::remove_file(self.key_path(LEGACY_RESUME_KEY)) {
                warn!("failed to remove legacy resume payload: {}", e);
            }
            return (resume, LoadOutcome::Migrated);
        }

        (ResumeData::empty(), LoadOutcome::Fresh)
    }

    /// Write the full resume under the current key. Best effort, synchronous.
    pub fn save(&self, resume: &ResumeData) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let value = serde_json::to_value(resume)?;
        self.write_json(RESUME_KEY, &value)
    }

    pub fn template(&self) -> TemplateName {
        self.read_setting(TEMPLATE_KEY)
    }

    pub fn set_template(&self, template: TemplateName) -> Result<()> {
        self.write_setting(TEMPLATE_KEY, &template)
    }

    pub fn accent(&self) -> AccentColor {
        self.read_setting(ACCENT_KEY)
    }

    pub fn set_accent(&self, accent: AccentColor) -> Result<()> {
        self.write_setting(ACCENT_KEY, &accent)
    }

    fn read_setting<T: serde::de::DeserializeOwned + Default>(&self, key: &str) -> T {
        self.read_json(key)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    fn write_setting<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.write_json(key, &value)
            .map_err(|e| ResumeBuilderError::Storage(format!("failed to write {}: {}", key, e)))
    }
}

/// Normalize a legacy resume payload into the current schema.
///
/// Probes defensively: no legacy field is assumed to exist. Lossy-safe in
/// the sense that entities are reshaped, never dropped. Migrating a payload
/// already in the current schema returns it unchanged.
pub fn migrate(raw: Value) -> ResumeData {
    let mut root = match raw {
        Value::Object(map) => map,
        _ => return ResumeData::empty(),
    };

    // Legacy skills were one comma-separated string; everything lands under
    // `technical`. Anything that is not already a structured record resets
    // to three empty categories.
    let skills = match root.remove("skills") {
        Some(Value::String(raw_skills)) => json!({
            "technical": split_tags(&raw_skills),
            "soft": [],
            "tools": [],
        }),
        Some(skills @ Value::Object(_)) => skills,
        _ => json!({ "technical": [], "soft": [], "tools": [] }),
    };
    root.insert("skills".to_string(), skills);

    if let Some(Value::Array(projects)) = root.get_mut("projects") {
        for project in projects.iter_mut() {
            let Value::Object(project) = project else {
                continue;
            };

            let technologies = match project.remove("technologies") {
                Some(Value::String(raw_techs)) => Value::Array(
                    split_tags(&raw_techs).into_iter().map(Value::String).collect(),
                ),
                Some(techs @ Value::Array(_)) => techs,
                _ => Value::Array(Vec::new()),
            };
            project.insert("technologies".to_string(), technologies);

            // The old schema carried a single `link`; it becomes `liveUrl`.
            if !project.get("liveUrl").map_or(false, Value::is_string) {
                let link = project
                    .get("link")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                project.insert("liveUrl".to_string(), Value::String(link));
            }
            if !project.get("githubUrl").map_or(false, Value::is_string) {
                project.insert("githubUrl".to_string(), Value::String(String::new()));
            }
        }
    }

    match serde_json::from_value(Value::Object(root)) {
        Ok(resume) => resume,
        Err(e) => {
            debug!("migrated payload still unreadable, starting fresh: {}", e);
            ResumeData::empty()
        }
    }
}
