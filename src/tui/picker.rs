//! Interactive boundary picker.
//!
//! A minimal full-screen list: arrow keys or `j`/`k` to move, Enter to pick
//! a boundary, `q` or Esc to cancel. The terminal is restored before
//! returning, also on error.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Terminal;

use crate::theme::current_theme;
use crate::transcript::Boundary;

/// Let the user pick a boundary; returns its index in `boundaries`, or
/// `None` when the selection was cancelled (or the list is empty).
pub fn pick_boundary(boundaries: &[Boundary]) -> Result<Option<usize>> {
    if boundaries.is_empty() {
        return Ok(None);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let picked = run_loop(&mut terminal, boundaries);

    // Restore the terminal whatever the loop returned.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    picked
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    boundaries: &[Boundary],
) -> Result<Option<usize>> {
    let theme = current_theme();
    let mut state = ListState::default();
    state.select(Some(0));

    loop {
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(frame.area());

            let items: Vec<ListItem> = boundaries.iter().map(|b| row(b, &theme)).collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Select a prune boundary ")
                        .border_style(theme.text_secondary_style()),
                )
                .highlight_style(theme.accent_bold_style())
                .highlight_symbol("> ");
            frame.render_stateful_widget(list, chunks[0], &mut state);

            let footer = Paragraph::new(Line::from(Span::styled(
                " up/down move · enter prune from here · q cancel",
                theme.text_secondary_style(),
            )));
            frame.render_widget(footer, chunks[1]);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    let current = state.selected().unwrap_or(0);
                    state.select(Some(current.saturating_sub(1)));
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let current = state.selected().unwrap_or(0);
                    state.select(Some((current + 1).min(boundaries.len() - 1)));
                }
                KeyCode::Enter => return Ok(state.selected()),
                KeyCode::Esc | KeyCode::Char('q') => return Ok(None),
                _ => {}
            }
        }
    }
}

/// One list row: description, kind tag, and retention summary.
fn row<'a>(boundary: &'a Boundary, theme: &crate::theme::Theme) -> ListItem<'a> {
    let mut spans = vec![
        Span::styled(
            format!("[{}] ", boundary.kind.label()),
            theme.accent_style(),
        ),
        Span::styled(boundary.description.clone(), theme.text_style()),
    ];
    if let Some(timestamp) = &boundary.timestamp {
        spans.push(Span::styled(
            format!("  {}", timestamp),
            theme.text_secondary_style(),
        ));
    }
    spans.push(Span::styled(
        format!(
            "  (line {}, keeps {}%)",
            boundary.line_number, boundary.retention_percentage
        ),
        theme.text_secondary_style(),
    ));
    ListItem::new(Line::from(spans))
}
