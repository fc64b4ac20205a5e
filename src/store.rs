//! Reducer-style state store for resume data
//!
//! One writer: every mutation is an `Action` applied by the pure `reduce`
//! function, and the store persists the resulting state as an observed side
//! effect of each dispatch. Actions are total and idempotent; updating or
//! removing an id that does not exist is a silent no-op, which keeps UI
//! retries harmless.

use crate::model::resume::{
    Education, Experience, HasId, PersonalInfo, Project, ResumeData, ResumeLinks, Skills,
};
use crate::model::sample::sample_resume;
use crate::storage::Storage;
use log::warn;

/// A single mutation of the resume state.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the personal info record wholesale. Partial-field merging is
    /// the caller's responsibility.
    SetPersonalInfo(PersonalInfo),
    SetSummary(String),
    SetSkills(Skills),
    SetLinks(ResumeLinks),
    AddEducation(Education),
    UpdateEducation(Education),
    RemoveEducation(String),
    AddExperience(Experience),
    UpdateExperience(Experience),
    RemoveExperience(String),
    AddProject(Project),
    UpdateProject(Project),
    RemoveProject(String),
    /// Replace the entire resume with the fixed demonstration dataset.
    LoadSample,
    /// Replace the entire resume with an empty one.
    Reset,
}

fn replace_by_id<T: HasId>(entries: &mut [T], replacement: T) {
    if let Some(slot) = entries.iter_mut().find(|e| e.id() == replacement.id()) {
        *slot = replacement;
    }
}

fn remove_by_id<T: HasId>(entries: &mut Vec<T>, id: &str) {
    entries.retain(|e| e.id() != id);
}

/// Apply an action to the current state, producing the next state. The
/// previous value is never mutated in place.
pub fn reduce(state: &ResumeData, action: Action) -> ResumeData {
    let mut next = state.clone();
    match action {
        Action::SetPersonalInfo(info) => next.personal_info = info,
        Action::SetSummary(text) => next.summary = text,
        Action::SetSkills(skills) => next.skills = skills,
        Action::SetLinks(links) => next.links = links,
        Action::AddEducation(entry) => next.education.push(entry),
        Action::UpdateEducation(entry) => replace_by_id(&mut next.education, entry),
        Action::RemoveEducation(id) => remove_by_id(&mut next.education, &id),
        Action::AddExperience(entry) => next.experience.push(entry),
        Action::UpdateExperience(entry) => replace_by_id(&mut next.experience, entry),
        Action::RemoveExperience(id) => remove_by_id(&mut next.experience, &id),
        Action::AddProject(entry) => next.projects.push(entry),
        Action::UpdateProject(entry) => replace_by_id(&mut next.projects, entry),
        Action::RemoveProject(id) => remove_by_id(&mut next.projects, &id),
        Action::LoadSample => next = sample_resume(),
        Action::Reset => next = ResumeData::empty(),
    }
    next
}

/// Exclusive owner of the canonical in-memory resume.
pub struct ResumeStore {
    state: ResumeData,
    storage: Storage,
}

impl ResumeStore {
    /// Load the persisted resume (or an empty one) and take ownership of it.
    pub fn open(storage: Storage) -> Self {
        let state = storage.load();
        Self { state, storage }
    }

    pub fn resume(&self) -> &ResumeData {
        &self.state
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Apply an action and persist the new state. Persistence is best
    /// effort: a failed save is logged, never propagated, and the in-memory
    /// state still advances.
    pub fn dispatch(&mut self, action: Action) -> &ResumeData {
        self.state = reduce(&self.state, action);
        if let Err(e) = self.storage.save(&self.state) {
            warn!("failed to persist resume after action: {}", e);
        }
        &self.state
    }
}
