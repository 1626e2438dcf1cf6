//! Plain-text rendering of pages and pagination bars.

use folio_engine::{
    BarItem, ItemRange, PageView, PageWindow, PaginationBar, PaginationState, WindowToken,
};
use owo_colors::OwoColorize;

use crate::input::Item;

const PREV_LABEL: &str = "‹ Prev";
const NEXT_LABEL: &str = "Next ›";
const GAP_LABEL: &str = "…";

fn render_item(item: &BarItem, color: bool) -> String {
    match *item {
        BarItem::Page {
            number,
            active: true,
        } => {
            let label = format!("[{}]", number);
            if color {
                label.bold().reversed().to_string()
            } else {
                label
            }
        }
        BarItem::Page { number, .. } => {
            if color {
                number.cyan().to_string()
            } else {
                number.to_string()
            }
        }
        BarItem::Gap => {
            if color {
                GAP_LABEL.dimmed().to_string()
            } else {
                GAP_LABEL.to_string()
            }
        }
    }
}

/// Page links and gaps separated by single spaces
pub fn render_links(items: &[BarItem], color: bool) -> String {
    items
        .iter()
        .map(|item| render_item(item, color))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `‹ Prev  1 … 4 [5] 6 … 10  Next ›`
pub fn render_bar(bar: &PaginationBar, color: bool) -> String {
    let label = |text: &str| {
        if color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    };

    let mut parts = Vec::with_capacity(3);
    if bar.previous.is_some() {
        parts.push(label(PREV_LABEL));
    }
    parts.push(render_links(&bar.items, color));
    if bar.next.is_some() {
        parts.push(label(NEXT_LABEL));
    }
    parts.join("  ")
}

/// Window tokens with `current` marked, without previous/next links
pub fn render_window(window: &PageWindow, current: usize, color: bool) -> String {
    let items: Vec<BarItem> = window
        .iter()
        .map(|token| match *token {
            WindowToken::PageNumber(number) => BarItem::Page {
                number,
                active: number == current,
            },
            WindowToken::Ellipsis => BarItem::Gap,
        })
        .collect();
    render_links(&items, color)
}

pub fn render_summary(state: &PaginationState, range: ItemRange) -> String {
    if state.total_items() == 0 {
        return "No items".to_string();
    }
    format!(
        "Showing {} of {} · page {} of {}",
        range,
        state.total_items(),
        state.current_page(),
        state.total_pages()
    )
}

/// Items one per line, then the bar (if any) and the summary
pub fn render_page(view: &PageView<'_, &Item>, color: bool) -> String {
    let mut lines: Vec<String> = view.items.iter().map(|item| item.text().to_string()).collect();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    if let Some(bar) = &view.bar {
        lines.push(render_bar(bar, color));
    }
    lines.push(render_summary(&view.state, view.range));
    lines.join("\n")
}
