//! Fixed demonstration dataset used for onboarding and demos

use crate::model::resume::{
    Education, Experience, PersonalInfo, Project, ResumeData, ResumeLinks, Skills,
};

/// A fully populated sample resume. Ids are fixed so loading the sample is
/// deterministic and repeatable.
pub fn sample_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            full_name: "Arjun Mehta".to_string(),
            email: "arjun.mehta@email.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            location: "Bengaluru, India".to_string(),
        },
        summary: "Full-stack software engineer with 4+ years of experience building scalable \
                  web applications. Passionate about clean architecture, developer tooling, \
                  and shipping products that solve real problems. Experienced in React, \
                  Node.js, and cloud-native development."
            .to_string(),
        education: vec![
            Education {
                id: "edu-1".to_string(),
                institution: "Indian Institute of Technology, Bombay".to_string(),
                degree: "B.Tech".to_string(),
                field: "Computer Science and Engineering".to_string(),
                start_date: "2016".to_string(),
                end_date: "2020".to_string(),
            },
            Education {
                id: "edu-2".to_string(),
                institution: "National Public School, Bengaluru".to_string(),
                degree: "Higher Secondary".to_string(),
                field: "Science (PCM)".to_string(),
                start_date: "2014".to_string(),
                end_date: "2016".to_string(),
            },
        ],
        experience: vec![
            Experience {
                id: "exp-1".to_string(),
                company: "Razorpay".to_string(),
                role: "Senior Software Engineer".to_string(),
                location: "Bengaluru, India".to_string(),
                start_date: "Jan 2022".to_string(),
                end_date: "Present".to_string(),
                description: "Led the checkout experience team, reducing payment drop-offs \
                              by 18%. Built a micro-frontend architecture serving 50M+ \
                              monthly transactions. Mentored 3 junior engineers and drove \
                              adoption of TypeScript across the frontend org."
                    .to_string(),
            },
            Experience {
                id: "exp-2".to_string(),
                company: "Flipkart".to_string(),
                role: "Software Engineer".to_string(),
                location: "Bengaluru, India".to_string(),
                start_date: "Jul 2020".to_string(),
                end_date: "Dec 2021".to_string(),
                description: "Developed the product listing service handling 10K+ \
                              requests/sec during Big Billion Days. Implemented server-side \
                              rendering with Next.js, improving LCP by 40%. Contributed to \
                              the internal component library used by 12 teams."
                    .to_string(),
            },
        ],
        projects: vec![
            Project {
                id: "proj-1".to_string(),
                name: "DevDash".to_string(),
                description: "An open-source developer dashboard that aggregates GitHub, \
                              Jira, and Slack notifications into a single feed. Built with \
                              React, Express, and Redis. 1.2K stars on GitHub."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Express".to_string(),
                    "Redis".to_string(),
                    "WebSockets".to_string(),
                ],
                live_url: "https://devdash.io".to_string(),
                github_url: "https://github.com/arjunmehta/devdash".to_string(),
            },
            Project {
                id: "proj-2".to_string(),
                name: "LintBot".to_string(),
                description: "A GitHub Action that auto-fixes common code style issues and \
                              opens PRs with corrections. Supports JavaScript, TypeScript, \
                              and Python. Used by 200+ repositories."
                    .to_string(),
                technologies: vec![
                    "TypeScript".to_string(),
                    "GitHub Actions".to_string(),
                    "AST Parsing".to_string(),
                ],
                live_url: String::new(),
                github_url: "https://github.com/arjunmehta/lintbot".to_string(),
            },
        ],
        skills: Skills {
            technical: vec![
                "TypeScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "Next.js".to_string(),
                "PostgreSQL".to_string(),
                "GraphQL".to_string(),
            ],
            soft: vec![
                "Team Leadership".to_string(),
                "Problem Solving".to_string(),
                "Communication".to_string(),
            ],
            tools: vec![
                "Git".to_string(),
                "Docker".to_string(),
                "AWS".to_string(),
                "Redis".to_string(),
                "Tailwind CSS".to_string(),
                "CI/CD".to_string(),
            ],
        },
        links: ResumeLinks {
            linkedin: "https://linkedin.com/in/arjunmehta".to_string(),
            github: "https://github.com/arjunmehta".to_string(),
            portfolio: "https://arjunmehta.dev".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::HasId;
    use std::collections::HashSet;

    #[test]
    fn test_sample_is_fully_populated() {
        let sample = sample_resume();
        assert!(!sample.personal_info.full_name.is_empty());
        assert!(!sample.summary.is_empty());
        assert_eq!(sample.education.len(), 2);
        assert_eq!(sample.experience.len(), 2);
        assert_eq!(sample.projects.len(), 2);
        assert_eq!(sample.skills.total_tags(), 15);
        assert!(!sample.links.linkedin.is_empty());
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let sample = sample_resume();
        let mut ids = HashSet::new();
        for id in sample
            .education
            .iter()
            .map(|e| e.id())
            .chain(sample.experience.iter().map(|e| e.id()))
            .chain(sample.projects.iter().map(|p| p.id()))
        {
            assert!(ids.insert(id.to_string()), "duplicate id {}", id);
        }
    }

    #[test]
    fn test_sample_is_deterministic() {
        assert_eq!(sample_resume(), sample_resume());
    }
}
