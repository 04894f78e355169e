//! CLI support for tutorial-navigator
//!
//! Provides programmatic access to the `tutor` commands so the rendering
//! flow can be embedded in other hosts or exercised from tests.

mod sections;
mod show;

pub use sections::sections_overview;
pub use show::{execute_show, OutputFormat, ShowOptions};

use crate::{RenderError, UnknownSectionError};
use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\nRun 'tutor sections' to see available sections.")]
    UnknownSection(#[from] UnknownSectionError),

    #[error("Failed to encode transcript: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

// Render failures collapse onto the CLI's own variants
impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::UnknownSection(e) => CliError::UnknownSection(e),
            RenderError::Sink(e) => CliError::Io(e),
        }
    }
}
