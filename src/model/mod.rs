//! Resume data model and sample dataset

pub mod resume;
pub mod sample;

pub use resume::{ResumeData, SkillCategory};
