//! Render command handler.
//!
//! Prints a run header as text or as the JSON view model.

use crate::chrome::{HeaderChrome, TextChrome};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::header::{RunHeaderInput, RunHeaderPresenter};
use std::io::{self, Write};

/// Render `input` to stdout.
pub fn render_command(
    presenter: &RunHeaderPresenter,
    input: &RunHeaderInput,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let stdout = io::stdout();
    render_to(stdout.lock(), presenter, input, format, color)
}

/// Render `input` to any writer.
pub fn render_to<W: Write>(
    mut writer: W,
    presenter: &RunHeaderPresenter,
    input: &RunHeaderInput,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let view = presenter.present(input);
    match format {
        OutputFormat::Text => {
            let mut chrome = TextChrome::new(writer).with_color(color);
            chrome.paint(&view)
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &view)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}
