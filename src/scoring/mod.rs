//! Pure projections over resume data: scoring, advice, and writing guidance

pub mod advisor;
pub mod ats;
pub mod guidance;

pub use advisor::top_improvements;
pub use ats::{compute_ats_score, AtsResult};
pub use guidance::get_guidance;
