//! Line-oriented header renderer.
//!
//! Prints the breadcrumb trail, the title and the tab strip on separate
//! lines. The Empty state prints no title line at all.

use super::{relative_time_hint, HeaderChrome, BREADCRUMB_SEPARATOR, SKELETON};
use crate::error::Result;
use crate::header::{RunHeaderViewModel, TitleContent};
use crate::output::colors::*;
use crate::status::Tone;
use chrono::{DateTime, Utc};
use std::io::Write;

/// ANSI color for an icon tone.
fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => GREEN,
        Tone::Error => RED,
        Tone::Active => BLUE,
        Tone::Warning => YELLOW,
        Tone::Muted => GRAY,
    }
}

/// Writes run headers as text, optionally colored.
pub struct TextChrome<W: Write> {
    writer: W,
    color: bool,
    now: DateTime<Utc>,
}

impl<W: Write> TextChrome<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: true,
            now: Utc::now(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Fix the clock used for relative timestamps.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn styled(&self, codes: &str, text: &str) -> String {
        if self.color {
            format!("{codes}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn breadcrumb_line(&self, view: &RunHeaderViewModel) -> String {
        view.breadcrumbs
            .iter()
            .map(|crumb| self.styled(CYAN, &crumb.label))
            .collect::<Vec<_>>()
            .join(self.styled(GRAY, BREADCRUMB_SEPARATOR).as_str())
    }

    fn title_line(&self, title: &TitleContent) -> Option<String> {
        match title {
            TitleContent::Error { message } => Some(self.styled(&format!("{RED}{BOLD}"), message)),
            TitleContent::Loading => Some(self.styled(DIM, SKELETON)),
            TitleContent::Content {
                icon,
                name,
                reason_label,
                timestamp,
            } => {
                let color = tone_color(icon.tone());
                let mut line = format!(
                    "{} {}",
                    self.styled(color, icon.glyph()),
                    self.styled(BOLD, name)
                );
                if !reason_label.is_empty() {
                    line.push_str("  ");
                    line.push_str(&self.styled(color, reason_label));
                }
                if !timestamp.is_empty() {
                    let time = match relative_time_hint(timestamp, self.now) {
                        Some(hint) => format!("{} ({})", timestamp, hint),
                        None => timestamp.clone(),
                    };
                    line.push_str("  ");
                    line.push_str(&self.styled(GRAY, &time));
                }
                Some(line)
            }
            TitleContent::Empty => None,
        }
    }

    fn tab_line(&self, view: &RunHeaderViewModel) -> String {
        view.tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                // The first tab is the selected one.
                if i == 0 {
                    self.styled(&format!("{BOLD}{UNDERLINE}"), &format!("[{}]", tab.label))
                } else {
                    format!(" {} ", tab.label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<W: Write> HeaderChrome for TextChrome<W> {
    fn paint(&mut self, view: &RunHeaderViewModel) -> Result<()> {
        let breadcrumbs = self.breadcrumb_line(view);
        let title = self.title_line(&view.title);
        let tabs = self.tab_line(view);

        writeln!(self.writer, "{}", breadcrumbs)?;
        if let Some(title) = title {
            writeln!(self.writer, "{}", title)?;
        }
        writeln!(self.writer, "{}", tabs)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{present, RunHeaderInput};
    use crate::test_utils::{input, succeeded_run};
    use chrono::TimeZone;

    fn render_plain(input: &RunHeaderInput) -> String {
        let mut chrome = TextChrome::new(Vec::new())
            .with_color(false)
            .at(Utc.with_ymd_and_hms(2019, 1, 4, 0, 0, 0).unwrap());
        chrome.paint(&present(input)).unwrap();
        String::from_utf8(chrome.into_inner()).unwrap()
    }

    #[test]
    fn test_text_content_state() {
        assert_eq!(
            render_plain(&succeeded_run()),
            "Pipelines / build\n\
             ✔ build-run-1  Succeeded  2019-01-01T00:00:00Z (3d ago)\n\
             [Tasks]\n"
        );
    }

    #[test]
    fn test_text_error_state_shows_only_message() {
        let mut run = succeeded_run();
        run.error = Some("not found".to_string());
        assert_eq!(render_plain(&run), "Pipelines / build\nnot found\n[Tasks]\n");
    }

    #[test]
    fn test_text_loading_state() {
        let run = RunHeaderInput {
            loading: true,
            ..Default::default()
        };
        assert_eq!(
            render_plain(&run),
            format!("Pipelines\n{}\n[Tasks]\n", SKELETON)
        );
    }

    #[test]
    fn test_text_empty_state_has_no_title_line() {
        assert_eq!(render_plain(&RunHeaderInput::default()), "Pipelines\n[Tasks]\n");
    }

    #[test]
    fn test_text_content_without_reason_or_time() {
        let output = render_plain(&input(None, Some("run-2"), None, None));
        assert_eq!(output, "Pipelines\n● run-2\n[Tasks]\n");
    }

    #[test]
    fn test_text_unparseable_time_is_shown_raw() {
        let mut run = input(None, Some("run-3"), Some("False"), Some("Failed"));
        run.last_transition_time = Some("yesterday".to_string());
        let output = render_plain(&run);
        assert!(output.contains("✖ run-3  Failed  yesterday\n"));
    }

    #[test]
    fn test_text_colored_output_uses_tone() {
        let mut chrome = TextChrome::new(Vec::new()).with_color(true);
        chrome
            .paint(&present(&input(None, Some("r"), Some("False"), None)))
            .unwrap();
        let output = String::from_utf8(chrome.into_inner()).unwrap();
        assert!(output.contains(&format!("{RED}✖{RESET}")));
        assert!(output.contains(&format!("{CYAN}Pipelines{RESET}")));
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(tone_color(Tone::Success), GREEN);
        assert_eq!(tone_color(Tone::Error), RED);
        assert_eq!(tone_color(Tone::Active), BLUE);
        assert_eq!(tone_color(Tone::Warning), YELLOW);
        assert_eq!(tone_color(Tone::Muted), GRAY);
    }
}
