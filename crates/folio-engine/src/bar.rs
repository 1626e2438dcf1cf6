//! Pagination bar model.
//!
//! Decides what a page control shows (previous/next links, page links, gaps)
//! without knowing how it is drawn. Renderers walk `items` in order.

use folio_types::{PagePosition, PageWindow, WindowToken};
use serde::Serialize;

use crate::window::WindowConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarItem {
    /// Activatable page link
    Page { number: usize, active: bool },
    /// Static marker for omitted pages
    Gap,
}

/// Page-change request coming back from a rendered bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAction {
    Previous,
    Next,
    Page(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationBar {
    /// Target of the "Previous" link, present only when not on page 1
    pub previous: Option<usize>,
    /// Target of the "Next" link, present only when not on the last page
    pub next: Option<usize>,
    pub items: Vec<BarItem>,
}

impl PaginationBar {
    /// Bar for `position` using a prebuilt window.
    ///
    /// Returns `None` when there is a single page: nothing is rendered.
    pub fn build(position: PagePosition, window: &PageWindow) -> Option<Self> {
        if position.total_pages() <= 1 {
            return None;
        }

        let current = position.current();
        let items = window
            .iter()
            .map(|token| match *token {
                WindowToken::PageNumber(number) => BarItem::Page {
                    number,
                    active: number == current,
                },
                WindowToken::Ellipsis => BarItem::Gap,
            })
            .collect();

        Some(Self {
            previous: position.previous(),
            next: position.next(),
            items,
        })
    }

    pub fn for_position(position: PagePosition, config: &WindowConfig) -> Option<Self> {
        let window = config.build(position.current(), position.total_pages());
        Self::build(position, &window)
    }

    pub fn active_page(&self) -> Option<usize> {
        self.items.iter().find_map(|item| match item {
            BarItem::Page {
                number,
                active: true,
            } => Some(*number),
            _ => None,
        })
    }

    /// Page an action leads to, or `None` if the bar does not offer it
    pub fn target(&self, action: BarAction) -> Option<usize> {
        match action {
            BarAction::Previous => self.previous,
            BarAction::Next => self.next,
            BarAction::Page(page) => self
                .items
                .iter()
                .any(|item| matches!(item, BarItem::Page { number, .. } if *number == page))
                .then_some(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(current: usize, total: usize) -> Option<PaginationBar> {
        PaginationBar::for_position(PagePosition::new(current, total), &WindowConfig::default())
    }

    #[test]
    fn test_single_page_renders_nothing() {
        assert!(bar(1, 1).is_none());
    }

    #[test]
    fn test_previous_and_next_visibility() {
        let first = bar(1, 3).unwrap();
        assert_eq!(first.previous, None);
        assert_eq!(first.next, Some(2));

        let middle = bar(2, 3).unwrap();
        assert_eq!(middle.previous, Some(1));
        assert_eq!(middle.next, Some(3));

        let last = bar(3, 3).unwrap();
        assert_eq!(last.previous, Some(2));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_exactly_one_active_link() {
        let bar = bar(5, 10).unwrap();
        let active: Vec<_> = bar
            .items
            .iter()
            .filter(|item| matches!(item, BarItem::Page { active: true, .. }))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(bar.active_page(), Some(5));
        assert_eq!(bar.items.iter().filter(|i| **i == BarItem::Gap).count(), 2);
    }

    #[test]
    fn test_target_only_for_visible_links() {
        let bar = bar(5, 10).unwrap();
        assert_eq!(bar.target(BarAction::Page(6)), Some(6));
        assert_eq!(bar.target(BarAction::Page(2)), None);
        assert_eq!(bar.target(BarAction::Previous), Some(4));
    }
}
