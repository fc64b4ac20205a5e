//! Resume builder: local resume authoring with heuristic ATS scoring

mod cli;
mod config;
mod error;
mod model;
mod output;
mod scoring;
mod storage;
mod store;

use clap::Parser;
use cli::{Cli, Commands, EditAction, SettingsAction};
use config::Config;
use error::{Result, ResumeBuilderError};
use log::{error, info};
use model::resume::{push_unique_tag, split_tags, Education, Experience, HasId, Project};
use output::formatter;
use output::text_export::{export_warning, resume_to_text};
use scoring::advisor::top_improvements;
use scoring::ats::compute_ats_score;
use scoring::guidance::get_guidance;
use std::process;
use storage::Storage;
use store::{Action, ResumeStore};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    let storage = Storage::open(config.storage.data_dir.clone())?;
    let mut store = ResumeStore::open(storage);

    match command {
        Commands::Show => {
            print!("{}", resume_to_text(store.resume()));
        }

        Commands::Score => {
            let result = compute_ats_score(store.resume());
            let tips = if config.output.show_tips {
                top_improvements(store.resume())
            } else {
                Vec::new()
            };
            formatter::print_score_panel(&result, &tips);
        }

        Commands::Advise => {
            formatter::print_tips(&top_improvements(store.resume()));
        }

        Commands::Guide { text } => {
            formatter::print_guidance(&get_guidance(&text));
        }

        Commands::Export { save } => {
            if let Some(warning) = export_warning(store.resume()) {
                eprintln!("Note: {}", warning);
            }
            let text = resume_to_text(store.resume());
            match save {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    info!("Exported resume to {}", path.display());
                }
                None => print!("{}", text),
            }
        }

        Commands::Sample => {
            store.dispatch(Action::LoadSample);
            println!("Loaded the sample resume.");
        }

        Commands::Reset { yes } => {
            if !yes {
                return Err(ResumeBuilderError::InvalidInput(
                    "resetting discards the stored resume; pass --yes to confirm".to_string(),
                ));
            }
            store.dispatch(Action::Reset);
            println!("Resume cleared.");
        }

        Commands::Edit { action } => run_edit(action, &mut store)?,

        Commands::Settings { action } => run_settings(action, store.storage())?,
    }

    Ok(())
}

fn run_edit(action: EditAction, store: &mut ResumeStore) -> Result<()> {
    match action {
        EditAction::SetSummary { text } => {
            store.dispatch(Action::SetSummary(text));
            println!("Summary updated.");
        }

        EditAction::SetPersonal {
            name,
            email,
            phone,
            location,
        } => {
            // The reducer replaces the record wholesale, so merge the given
            // flags into the current record here.
            let mut info = store.resume().personal_info.clone();
            if let Some(name) = name {
                info.full_name = name;
            }
            if let Some(email) = email {
                info.email = email;
            }
            if let Some(phone) = phone {
                info.phone = phone;
            }
            if let Some(location) = location {
                info.location = location;
            }
            store.dispatch(Action::SetPersonalInfo(info));
            println!("Contact details updated.");
        }

        EditAction::SetLinks {
            linkedin,
            github,
            portfolio,
        } => {
            let mut links = store.resume().links.clone();
            if let Some(linkedin) = linkedin {
                links.linkedin = linkedin;
            }
            if let Some(github) = github {
                links.github = github;
            }
            if let Some(portfolio) = portfolio {
                links.portfolio = portfolio;
            }
            store.dispatch(Action::SetLinks(links));
            println!("Links updated.");
        }

        EditAction::AddSkill { category, tag } => {
            let category =
                cli::parse_skill_category(&category).map_err(ResumeBuilderError::InvalidInput)?;
            let mut skills = store.resume().skills.clone();
            if !push_unique_tag(skills.category_mut(category), &tag) {
                println!("Skill \"{}\" is already listed.", tag.trim());
                return Ok(());
            }
            store.dispatch(Action::SetSkills(skills));
            println!("Skill added.");
        }

        EditAction::AddEducation {
            institution,
            degree,
            field,
            start,
            end,
        } => {
            let entry = Education {
                institution,
                degree,
                field,
                start_date: start,
                end_date: end,
                ..Education::new()
            };
            let id = entry.id.clone();
            store.dispatch(Action::AddEducation(entry));
            println!("Added education entry {}", id);
        }

        EditAction::RemoveEducation { id } => {
            store.dispatch(Action::RemoveEducation(id));
            println!("Removed (if it existed).");
        }

        EditAction::AddExperience {
            company,
            role,
            location,
            start,
            end,
            description,
        } => {
            for hint in get_guidance(&description) {
                println!("Hint: {}", hint);
            }
            let entry = Experience {
                company,
                role,
                location,
                start_date: start,
                end_date: end,
                description,
                ..Experience::new()
            };
            let id = entry.id.clone();
            store.dispatch(Action::AddExperience(entry));
            println!("Added experience entry {}", id);
        }

        EditAction::RemoveExperience { id } => {
            store.dispatch(Action::RemoveExperience(id));
            println!("Removed (if it existed).");
        }

        EditAction::AddProject {
            name,
            description,
            technologies,
            live_url,
            github_url,
        } => {
            for hint in get_guidance(&description) {
                println!("Hint: {}", hint);
            }
            let mut tags = Vec::new();
            for tag in split_tags(&technologies) {
                push_unique_tag(&mut tags, &tag);
            }
            let entry = Project {
                name,
                description,
                technologies: tags,
                live_url,
                github_url,
                ..Project::new()
            };
            let id = entry.id.clone();
            store.dispatch(Action::AddProject(entry));
            println!("Added project entry {}", id);
        }

        EditAction::RemoveProject { id } => {
            store.dispatch(Action::RemoveProject(id));
            println!("Removed (if it existed).");
        }

        EditAction::List => {
            let resume = store.resume();
            println!("Education:");
            for entry in &resume.education {
                println!("  {}  {} — {}", entry.id(), entry.degree, entry.institution);
            }
            println!("Experience:");
            for entry in &resume.experience {
                println!("  {}  {} — {}", entry.id(), entry.role, entry.company);
            }
            println!("Projects:");
            for entry in &resume.projects {
                println!("  {}  {}", entry.id(), entry.name);
            }
        }
    }

    Ok(())
}

fn run_settings(action: Option<SettingsAction>, storage: &Storage) -> Result<()> {
    match action {
        None | Some(SettingsAction::Show) => {
            println!("Template: {}", storage.template().as_str());
            println!("Accent:   {}", storage.accent().as_str());
            println!("Storage:  {}", storage.root().display());
        }

        Some(SettingsAction::Template { name }) => {
            let template = cli::parse_template(&name).map_err(ResumeBuilderError::InvalidInput)?;
            storage.set_template(template)?;
            println!("Template set to {}.", template.as_str());
        }

        Some(SettingsAction::Accent { name }) => {
            let accent = cli::parse_accent(&name).map_err(ResumeBuilderError::InvalidInput)?;
            storage.set_accent(accent)?;
            println!("Accent color set to {}.", accent.as_str());
        }
    }

    Ok(())
}
