pub mod chrome;
pub mod commands;
pub mod config;
pub mod error;
pub mod header;
pub mod input;
pub mod output;
pub mod status;

#[cfg(test)]
mod test_utils;

pub use chrome::{HeaderChrome, RunHeaderWidget, TextChrome, TuiChrome};
pub use config::{Config, OutputFormat, Routes};
pub use error::{HeaderError, Result};
pub use header::{
    present, Breadcrumb, PresentationState, RunHeaderInput, RunHeaderPresenter,
    RunHeaderViewModel, StyleHooks, Tab, TitleContent,
};
pub use input::{load_input, read_input};
pub use status::{resolve, IconSymbol, Tone};
