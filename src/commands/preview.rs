//! Preview command handler.
//!
//! Draws the run header with ratatui in the alternate screen until the user
//! presses `q` or `Esc`.

use crate::chrome::{RunHeaderWidget, HEADER_HEIGHT};
use crate::error::Result;
use crate::header::RunHeaderViewModel;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn draw(frame: &mut Frame, view: &RunHeaderViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    frame.render_widget(RunHeaderWidget::new(view), chunks[0]);
    frame.render_widget(
        Paragraph::new("q/Esc: quit").style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

/// Show `view` in the terminal UI until the user quits.
pub fn preview_command(view: &RunHeaderViewModel) -> Result<()> {
    // Restore the terminal if drawing panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = init_terminal()?;
    let poll_duration = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| draw(frame, view))?;

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release or repeat)
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    break;
                }
            }
        }
    }

    restore_terminal(&mut terminal)
}
