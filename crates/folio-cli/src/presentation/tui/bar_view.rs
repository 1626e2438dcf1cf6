//! Pagination bar as a ratatui widget.

use folio_engine::{BarItem, PaginationBar};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Styled spans for a bar; an empty line when there is nothing to render
pub fn bar_line(bar: Option<&PaginationBar>) -> Line<'static> {
    let Some(bar) = bar else {
        return Line::default();
    };

    let nav = Style::default().fg(Color::Yellow);
    let mut spans = Vec::new();

    if bar.previous.is_some() {
        spans.push(Span::styled("‹ Prev", nav));
        spans.push(Span::raw("  "));
    }

    for (i, item) in bar.items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(match *item {
            BarItem::Page {
                number,
                active: true,
            } => Span::styled(
                format!("[{}]", number),
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ),
            BarItem::Page { number, .. } => {
                Span::styled(number.to_string(), Style::default().fg(Color::Cyan))
            }
            BarItem::Gap => Span::styled("…", Style::default().fg(Color::DarkGray)),
        });
    }

    if bar.next.is_some() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Next ›", nav));
    }

    Line::from(spans)
}

pub struct PaginationBarView<'a> {
    bar: Option<&'a PaginationBar>,
}

impl<'a> PaginationBarView<'a> {
    pub fn new(bar: Option<&'a PaginationBar>) -> Self {
        Self { bar }
    }
}

impl Widget for PaginationBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(bar_line(self.bar))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
