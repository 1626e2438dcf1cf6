use folio_types::{ItemRange, PagePosition, PageWindow, PaginationState};
use serde::Serialize;

use crate::bar::PaginationBar;
use crate::slicer::item_range;
use crate::window::WindowConfig;

/// Everything a renderer needs for one page, borrowing the caller's items
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a, T> {
    pub state: PaginationState,
    pub range: ItemRange,
    pub items: &'a [T],
    pub window: PageWindow,
    pub bar: Option<PaginationBar>,
}

impl<'a, T> PageView<'a, T> {
    pub(crate) fn new(state: PaginationState, config: &WindowConfig, all_items: &'a [T]) -> Self {
        let range = item_range(all_items.len(), state.current_page(), state.page_size());
        let window = config.build(state.current_page(), state.total_pages());
        let bar = PaginationBar::build(state.position(), &window);

        Self {
            state,
            range,
            items: &all_items[range.as_range()],
            window,
            bar,
        }
    }

    pub fn position(&self) -> PagePosition {
        self.state.position()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
