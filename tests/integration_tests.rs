//! Integration tests for the resume builder core

use resume_builder::model::resume::{Experience, Project, ResumeData};
use resume_builder::model::sample::sample_resume;
use resume_builder::output::text_export::resume_to_text;
use resume_builder::scoring::advisor::top_improvements;
use resume_builder::scoring::ats::compute_ats_score;
use resume_builder::scoring::guidance::get_guidance;
use resume_builder::storage::{migrate, LoadOutcome, Storage};
use resume_builder::store::{Action, ResumeStore};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_edit_persist_reload_score_flow() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = ResumeStore::open(Storage::open(dir.path()).unwrap());
        store.dispatch(Action::SetSummary("Engineer who ships.".to_string()));
        store.dispatch(Action::AddExperience(Experience {
            id: "exp-1".to_string(),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            description: "Cut costs by 30%".to_string(),
            ..Experience::default()
        }));
    }

    // A new session sees the durable copy, and scoring is a pure projection
    // over it.
    let store = ResumeStore::open(Storage::open(dir.path()).unwrap());
    let resume = store.resume();
    assert_eq!(resume.summary, "Engineer who ships.");
    assert_eq!(resume.experience.len(), 1);

    let result = compute_ats_score(resume);
    // 3 words: ~1 summary point; 10 experience; 15 quantified impact.
    assert_eq!(result.score, 26);
    assert_eq!(result.suggestions.len(), 3);
}

#[test]
fn test_legacy_storage_migrates_once_and_scores() {
    let dir = TempDir::new().unwrap();
    let legacy = json!({
        "personalInfo": { "fullName": "Jane Doe", "email": "jane@doe.dev", "phone": "", "location": "" },
        "summary": "Backend engineer.",
        "education": [],
        "experience": [],
        "projects": [{
            "id": "proj-1",
            "name": "Cache",
            "description": "Reduced p99 latency by 40%",
            "technologies": "Rust, Redis",
            "link": "https://cache.dev"
        }],
        "skills": "Rust, Redis, SQL",
        "links": { "linkedin": "", "github": "", "portfolio": "" }
    });
    std::fs::write(
        dir.path().join("resume-data.json"),
        serde_json::to_string_pretty(&legacy).unwrap(),
    )
    .unwrap();

    let storage = Storage::open(dir.path()).unwrap();
    let (resume, outcome) = storage.load_with_outcome();
    assert_eq!(outcome, LoadOutcome::Migrated);
    assert_eq!(resume.skills.technical, vec!["Rust", "Redis", "SQL"]);
    assert_eq!(resume.projects[0].technologies, vec!["Rust", "Redis"]);
    assert_eq!(resume.projects[0].live_url, "https://cache.dev");

    // The migrated shape is already current: migrating again changes nothing.
    let roundtripped = migrate(serde_json::to_value(&resume).unwrap());
    assert_eq!(roundtripped, resume);

    // Quantified impact survives the reshape.
    let result = compute_ats_score(&resume);
    assert!(result.score >= 15);
}

#[test]
fn test_sample_resume_score_and_advice_agree() {
    let sample = sample_resume();
    let result = compute_ats_score(&sample);

    // The sample summary is 32 words, so the summary category is the only
    // one under max: 12 of 15 points, everything else full.
    assert_eq!(result.score, 77);
    assert_eq!(result.suggestions.len(), 1);
    assert!(result.suggestions[0].contains("summary"));

    let tips = top_improvements(&sample);
    assert_eq!(tips.len(), 1);
    assert!(tips[0].contains("summary"));
}

#[test]
fn test_full_resume_reaches_the_ceiling() {
    let mut resume = sample_resume();
    resume.summary = vec!["word"; 40].join(" ");
    let result = compute_ats_score(&resume);
    assert_eq!(result.score, 80);
    assert!(result.suggestions.is_empty());
    assert!(top_improvements(&resume).is_empty());
}

#[test]
fn test_reset_clears_state_and_storage() {
    let dir = TempDir::new().unwrap();
    let mut store = ResumeStore::open(Storage::open(dir.path()).unwrap());
    store.dispatch(Action::LoadSample);
    assert_eq!(store.resume(), &sample_resume());

    store.dispatch(Action::Reset);
    assert_eq!(store.resume(), &ResumeData::empty());

    let reopened = ResumeStore::open(Storage::open(dir.path()).unwrap());
    assert_eq!(reopened.resume(), &ResumeData::empty());
}

#[test]
fn test_add_update_remove_entity_lifecycle() {
    let dir = TempDir::new().unwrap();
    let mut store = ResumeStore::open(Storage::open(dir.path()).unwrap());

    let project = Project::new();
    let id = project.id.clone();
    store.dispatch(Action::AddProject(project.clone()));
    assert_eq!(store.resume().projects.len(), 1);

    let mut renamed = project;
    renamed.name = "Renamed".to_string();
    store.dispatch(Action::UpdateProject(renamed));
    assert_eq!(store.resume().projects[0].name, "Renamed");

    // Updating a missing id never errors and never changes anything.
    let before = store.resume().clone();
    store.dispatch(Action::UpdateProject(Project {
        id: "missing".to_string(),
        name: "Ghost".to_string(),
        ..Project::default()
    }));
    assert_eq!(store.resume(), &before);

    store.dispatch(Action::RemoveProject(id));
    assert!(store.resume().projects.is_empty());
}

#[test]
fn test_export_reflects_stored_resume() {
    let dir = TempDir::new().unwrap();
    let mut store = ResumeStore::open(Storage::open(dir.path()).unwrap());
    store.dispatch(Action::LoadSample);

    let text = resume_to_text(store.resume());
    assert!(text.contains("Arjun Mehta"));
    assert!(text.contains("SUMMARY"));
    assert!(text.contains("SKILLS"));

    // Guidance agrees with the sample's bullet style.
    let first_bullet = &store.resume().experience[0].description;
    assert!(get_guidance(first_bullet).is_empty());
}

#[test]
fn test_score_is_total_over_odd_inputs() {
    // Whitespace-only fields, huge summaries, and empty entities never panic
    // and never push the score out of range.
    let mut resume = ResumeData::empty();
    resume.summary = "word ".repeat(5000);
    resume.links.linkedin = "   ".to_string();
    resume.experience.push(Experience::default());
    resume.projects.push(Project::default());

    let result = compute_ats_score(&resume);
    assert!(result.score <= 100);
    assert!(result.suggestions.len() <= 3);
    assert!(top_improvements(&resume).len() <= 3);
}
