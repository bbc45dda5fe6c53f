//! Ratatui header renderer.

use super::{relative_time_hint, HeaderChrome, BREADCRUMB_SEPARATOR, SKELETON};
use crate::error::Result;
use crate::header::{RunHeaderViewModel, TitleContent};
use crate::status::Tone;
use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

// ============================================================================
// Color Constants (consistent with the text renderer)
// ============================================================================

/// Cyan - borders and breadcrumb links
const COLOR_PRIMARY: Color = Color::Cyan;
/// Green - succeeded runs
const COLOR_SUCCESS: Color = Color::Green;
/// Blue - runs in progress
const COLOR_ACTIVE: Color = Color::Blue;
/// Yellow - cancelled runs
const COLOR_WARNING: Color = Color::Yellow;
/// Red - failed runs and error messages
const COLOR_ERROR: Color = Color::Red;
/// Gray - separators, timestamps, placeholders
const COLOR_DIM: Color = Color::DarkGray;

/// Rows taken by the header: three content rows inside a border.
pub const HEADER_HEIGHT: u16 = 5;

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => COLOR_SUCCESS,
        Tone::Error => COLOR_ERROR,
        Tone::Active => COLOR_ACTIVE,
        Tone::Warning => COLOR_WARNING,
        Tone::Muted => COLOR_DIM,
    }
}

/// Draws a run header: breadcrumbs, title and tabs inside a bordered block.
pub struct RunHeaderWidget<'a> {
    view: &'a RunHeaderViewModel,
    now: DateTime<Utc>,
}

impl<'a> RunHeaderWidget<'a> {
    pub fn new(view: &'a RunHeaderViewModel) -> Self {
        Self {
            view,
            now: Utc::now(),
        }
    }

    /// Fix the clock used for relative timestamps.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    fn breadcrumb_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, crumb) in self.view.breadcrumbs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    BREADCRUMB_SEPARATOR,
                    Style::default().fg(COLOR_DIM),
                ));
            }
            spans.push(Span::styled(
                crumb.label.as_str(),
                Style::default()
                    .fg(COLOR_PRIMARY)
                    .add_modifier(Modifier::UNDERLINED),
            ));
        }
        Line::from(spans)
    }

    fn title_line(&self) -> Option<Line<'a>> {
        match &self.view.title {
            TitleContent::Error { message } => Some(Line::from(Span::styled(
                message.as_str(),
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            ))),
            TitleContent::Loading => Some(Line::from(Span::styled(
                SKELETON,
                Style::default().fg(COLOR_DIM),
            ))),
            TitleContent::Content {
                icon,
                name,
                reason_label,
                timestamp,
            } => {
                let color = tone_color(icon.tone());
                let mut spans = vec![
                    Span::styled(icon.glyph(), Style::default().fg(color)),
                    Span::raw(" "),
                    Span::styled(
                        name.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ];
                if !reason_label.is_empty() {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        reason_label.as_str(),
                        Style::default().fg(color),
                    ));
                }
                if !timestamp.is_empty() {
                    let time = match relative_time_hint(timestamp, self.now) {
                        Some(hint) => format!("{} ({})", timestamp, hint),
                        None => timestamp.clone(),
                    };
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(time, Style::default().fg(COLOR_DIM)));
                }
                Some(Line::from(spans))
            }
            TitleContent::Empty => None,
        }
    }
}

impl Widget for RunHeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" pipeline run ")
            .border_style(Style::default().fg(COLOR_PRIMARY));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Breadcrumbs
                Constraint::Length(1), // Title
                Constraint::Length(1), // Tabs
            ])
            .split(inner);

        Paragraph::new(self.breadcrumb_line()).render(rows[0], buf);

        if let Some(title) = self.title_line() {
            Paragraph::new(title).render(rows[1], buf);
        }

        let titles: Vec<Line> = self
            .view
            .tabs
            .iter()
            .map(|tab| Line::from(tab.label.as_str()))
            .collect();
        Tabs::new(titles)
            .select(0)
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(COLOR_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .render(rows[2], buf);
    }
}

/// Paints headers into an owned ratatui buffer.
pub struct TuiChrome {
    buffer: Buffer,
    now: Option<DateTime<Utc>>,
}

impl TuiChrome {
    pub fn new(width: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, HEADER_HEIGHT)),
            now: None,
        }
    }

    /// Fix the clock used for relative timestamps.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// The painted buffer as plain text, one string per row.
    pub fn lines(&self) -> Vec<String> {
        let area = self.buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| self.buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }
}

impl HeaderChrome for TuiChrome {
    fn paint(&mut self, view: &RunHeaderViewModel) -> Result<()> {
        self.buffer.reset();
        let area = self.buffer.area;
        let mut widget = RunHeaderWidget::new(view);
        if let Some(now) = self.now {
            widget = widget.at(now);
        }
        widget.render(area, &mut self.buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{present, RunHeaderInput};
    use crate::test_utils::succeeded_run;
    use chrono::TimeZone;

    fn paint(input: &RunHeaderInput) -> Vec<String> {
        let mut chrome = TuiChrome::new(80).at(Utc.with_ymd_and_hms(2019, 1, 4, 0, 0, 0).unwrap());
        chrome.paint(&present(input)).unwrap();
        chrome.lines()
    }

    #[test]
    fn test_tui_content_state() {
        let lines = paint(&succeeded_run());
        assert_eq!(lines.len(), HEADER_HEIGHT as usize);
        assert!(lines[0].contains("pipeline run"));
        assert!(lines[1].contains("Pipelines / build"));
        assert!(lines[2].contains("build-run-1"));
        assert!(lines[2].contains("Succeeded"));
        assert!(lines[2].contains("2019-01-01T00:00:00Z (3d ago)"));
        assert!(lines[3].contains("Tasks"));
    }

    #[test]
    fn test_tui_error_state() {
        let lines = paint(&RunHeaderInput {
            error: Some("not found".to_string()),
            pipeline_run_name: Some("hidden-run".to_string()),
            ..Default::default()
        });
        assert!(lines[2].contains("not found"));
        assert!(!lines.iter().any(|l| l.contains("hidden-run")));
    }

    #[test]
    fn test_tui_loading_state() {
        let lines = paint(&RunHeaderInput {
            loading: true,
            ..Default::default()
        });
        assert!(lines[2].contains(SKELETON));
    }

    #[test]
    fn test_tui_empty_state_leaves_title_row_blank() {
        let lines = paint(&RunHeaderInput::default());
        let title_row = lines[2].trim_matches(|c: char| c == '│' || c.is_whitespace());
        assert!(title_row.is_empty(), "title row: {:?}", lines[2]);
        assert!(lines[3].contains("Tasks"));
    }

    #[test]
    fn test_tui_icon_color_follows_tone() {
        let mut chrome = TuiChrome::new(40);
        chrome.paint(&present(&succeeded_run())).unwrap();
        // Icon sits at the first inner column of the title row.
        assert_eq!(chrome.buffer()[(1, 2)].fg, COLOR_SUCCESS);
    }

    #[test]
    fn test_tui_repaint_clears_previous_content() {
        let mut chrome = TuiChrome::new(60);
        chrome.paint(&present(&succeeded_run())).unwrap();
        chrome.paint(&present(&RunHeaderInput::default())).unwrap();
        assert!(!chrome.lines().iter().any(|l| l.contains("build-run-1")));
    }
}
