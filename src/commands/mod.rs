//! CLI command handlers for run-header.
//!
//! # Commands
//!
//! - [`render`] - Print a run header as text or JSON
//! - [`icon`] - Resolve the icon for a condition
//! - [`preview`] - Show a run header in the terminal UI
//! - [`config`] - Show the effective configuration

mod config;
mod icon;
mod preview;
mod render;

pub use config::config_display_command;
pub use icon::{format_icon, icon_command};
pub use preview::preview_command;
pub use render::{render_command, render_to};

use crate::error::Result;
use crate::header::RunHeaderInput;
use crate::input::{load_input, read_input};
use clap::Args;
use std::io;
use std::path::{Path, PathBuf};

/// Where the run header input comes from, plus per-field overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON file with the run header input ("-" reads stdin)
    pub file: Option<PathBuf>,

    /// Pipeline name (adds a breadcrumb segment)
    #[arg(long)]
    pub pipeline: Option<String>,

    /// Pipeline run name (the header title)
    #[arg(long)]
    pub run: Option<String>,

    /// Condition status, e.g. True, False, Unknown
    #[arg(long)]
    pub status: Option<String>,

    /// Condition reason, e.g. Succeeded, Failed, Cancelled
    #[arg(long)]
    pub reason: Option<String>,

    /// Last transition time
    #[arg(long)]
    pub time: Option<String>,

    /// Error message to display instead of the run
    #[arg(long)]
    pub error: Option<String>,

    /// Mark the run as still loading
    #[arg(long)]
    pub loading: bool,
}

impl InputArgs {
    /// Build the input: load the file (or stdin for "-"), then apply overrides.
    ///
    /// With no file, only the overrides are used.
    pub fn resolve(&self) -> Result<RunHeaderInput> {
        let base = match self.file.as_deref() {
            Some(path) if path == Path::new("-") => read_input(io::stdin().lock())?,
            Some(path) => load_input(path)?,
            None => RunHeaderInput::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut input: RunHeaderInput) -> RunHeaderInput {
        if let Some(pipeline) = &self.pipeline {
            input.pipeline_name = Some(pipeline.clone());
        }
        if let Some(run) = &self.run {
            input.pipeline_run_name = Some(run.clone());
        }
        if let Some(status) = &self.status {
            input.status = Some(status.clone());
        }
        if let Some(reason) = &self.reason {
            input.reason = Some(reason.clone());
        }
        if let Some(time) = &self.time {
            input.last_transition_time = Some(time.clone());
        }
        if let Some(error) = &self.error {
            input.error = Some(error.clone());
        }
        if self.loading {
            input.loading = true;
        }
        input
    }
}
