//! TUI renderer for the browse command.
//!
//! The renderer owns the terminal and the event loop; all pagination state
//! lives in [`BrowseState`], which is updated from key events and drawn on
//! every iteration.

mod bar_view;
mod browse_state;

pub use bar_view::{PaginationBarView, bar_line};
pub use browse_state::{BrowseState, PAGE_SIZE_STEPS};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::presentation::console::render_summary;

/// Restores the terminal when dropped, including on early returns
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub struct TuiRenderer {
    title: String,
    state: BrowseState,
}

impl TuiRenderer {
    pub fn new(title: impl Into<String>, state: BrowseState) -> Self {
        Self {
            title: title.into(),
            state,
        }
    }

    pub fn run(mut self) -> Result<()> {
        let guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        drop(guard);
        terminal.show_cursor()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
            {
                self.state.handle_key(key);
            }

            if self.state.should_quit() {
                return Ok(());
            }
        }
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

        let view = self.state.view();

        let items: Vec<ListItem> = self
            .state
            .page_items()
            .into_iter()
            .map(|item| ListItem::new(item.text().to_string()))
            .collect();
        let title = if self.state.filter().is_empty() {
            self.title.clone()
        } else {
            format!("{} /{}", self.title, self.state.filter())
        };
        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(list, chunks[0]);

        f.render_widget(PaginationBarView::new(view.bar.as_ref()), chunks[1]);

        let key = Style::default().fg(Color::Yellow);
        let status = if self.state.is_editing_filter() {
            Line::from(vec![
                Span::styled("filter: ", key),
                Span::raw(self.state.filter().to_string()),
                Span::styled("▏", key),
                Span::raw("  "),
                Span::styled("[enter]", key),
                Span::raw("done"),
            ])
        } else if !self.state.pending_jump().is_empty() {
            Line::from(vec![
                Span::styled("go to page: ", key),
                Span::raw(self.state.pending_jump().to_string()),
                Span::raw("  "),
                Span::styled("[enter]", key),
                Span::raw("go "),
                Span::styled("[esc]", key),
                Span::raw("cancel"),
            ])
        } else {
            Line::from(vec![
                Span::raw(format!(
                    "{} · {} per page  ",
                    render_summary(&view.state, view.range),
                    self.state.page_size()
                )),
                Span::styled("[n/p]", key),
                Span::raw("page "),
                Span::styled("[0-9]", key),
                Span::raw("go to "),
                Span::styled("[g/G]", key),
                Span::raw("first/last "),
                Span::styled("[+/-]", key),
                Span::raw("size "),
                Span::styled("[/]", key),
                Span::raw("filter "),
                Span::styled("[q]", key),
                Span::raw("uit"),
            ])
        };
        f.render_widget(Paragraph::new(status), chunks[2]);
    }
}
