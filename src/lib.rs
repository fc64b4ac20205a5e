//! Resume builder library

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod scoring;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{Result, ResumeBuilderError};
