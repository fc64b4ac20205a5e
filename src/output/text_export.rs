//! Flattened plain-text export of a resume
//!
//! One paragraph per populated section, blank-line separated. Sections whose
//! underlying data is entirely empty are omitted.

use crate::model::resume::ResumeData;

fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Render the resume as a human-readable text block.
pub fn resume_to_text(resume: &ResumeData) -> String {
    let mut sections: Vec<String> = Vec::new();

    let info = &resume.personal_info;
    if !info.full_name.is_empty() {
        let contact = join_present(&[&info.email, &info.phone, &info.location], " · ");
        let mut header = info.full_name.clone();
        if !contact.is_empty() {
            header.push('\n');
            header.push_str(&contact);
        }
        sections.push(header);
    }

    if !resume.summary.is_empty() {
        sections.push(format!("SUMMARY\n{}", resume.summary));
    }

    if !resume.education.is_empty() {
        let lines: Vec<String> = resume
            .education
            .iter()
            .map(|edu| {
                let mut degree = edu.degree.clone();
                if !edu.field.is_empty() {
                    degree.push_str(&format!(" in {}", edu.field));
                }
                let dates = join_present(&[&edu.start_date, &edu.end_date], " – ");
                let mut line = format!("{} — {}", degree, edu.institution);
                if !dates.is_empty() {
                    line.push_str(&format!(" ({})", dates));
                }
                line
            })
            .collect();
        sections.push(format!("EDUCATION\n{}", lines.join("\n")));
    }

    if !resume.experience.is_empty() {
        let blocks: Vec<String> = resume
            .experience
            .iter()
            .map(|exp| {
                let place = join_present(&[&exp.company, &exp.location], ", ");
                let dates = join_present(&[&exp.start_date, &exp.end_date], " – ");
                let mut line = exp.role.clone();
                if !place.is_empty() {
                    line.push_str(&format!(" — {}", place));
                }
                if !dates.is_empty() {
                    line.push_str(&format!(" ({})", dates));
                }
                if !exp.description.is_empty() {
                    line.push('\n');
                    line.push_str(&exp.description);
                }
                line
            })
            .collect();
        sections.push(format!("EXPERIENCE\n{}", blocks.join("\n\n")));
    }

    if !resume.projects.is_empty() {
        let blocks: Vec<String> = resume
            .projects
            .iter()
            .map(|proj| {
                let mut line = proj.name.clone();
                if !proj.technologies.is_empty() {
                    line.push_str(&format!(" — {}", proj.technologies.join(", ")));
                }
                if !proj.description.is_empty() {
                    line.push('\n');
                    line.push_str(&proj.description);
                }
                for url in [&proj.live_url, &proj.github_url] {
                    if !url.is_empty() {
                        line.push('\n');
                        line.push_str(url);
                    }
                }
                line
            })
            .collect();
        sections.push(format!("PROJECTS\n{}", blocks.join("\n\n")));
    }

    let skills = &resume.skills;
    if skills.total_tags() > 0 {
        let mut lines = Vec::new();
        if !skills.technical.is_empty() {
            lines.push(format!("Technical: {}", skills.technical.join(", ")));
        }
        if !skills.soft.is_empty() {
            lines.push(format!("Soft: {}", skills.soft.join(", ")));
        }
        if !skills.tools.is_empty() {
            lines.push(format!("Tools: {}", skills.tools.join(", ")));
        }
        sections.push(format!("SKILLS\n{}", lines.join("\n")));
    }

    let links = join_present(
        &[
            &resume.links.linkedin,
            &resume.links.github,
            &resume.links.portfolio,
        ],
        "\n",
    );
    if !links.is_empty() {
        sections.push(format!("LINKS\n{}", links));
    }

    sections.join("\n\n") + "\n"
}

/// A gentle warning shown before exporting an obviously thin resume.
pub fn export_warning(resume: &ResumeData) -> Option<String> {
    if resume.personal_info.full_name.trim().is_empty() {
        return Some("Your resume may look incomplete.".to_string());
    }
    if resume.experience.is_empty() && resume.projects.is_empty() {
        return Some("Your resume may look incomplete.".to_string());
    }
    None
}
