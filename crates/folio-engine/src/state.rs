//! Page state for one list view.
//!
//! The manager owns a [`PaginationState`] and is the only way to change it.
//! Every mutation re-establishes `1 <= current_page <= total_pages`; no input
//! combination is rejected.
//!
//! A render cycle calls [`PageStateManager::sync`], which applies the reset
//! signal before recomputing page counts, so a filter change and a page click
//! arriving together land on page 1 of the new list.

use folio_types::{PagePosition, PageSize, PaginationState};
use tracing::{debug, trace};

use crate::bar::{BarAction, PaginationBar};
use crate::reset::ResetSignal;
use crate::view::PageView;
use crate::window::WindowConfig;

#[derive(Debug, Clone)]
pub struct PageStateManager<K = ()> {
    state: PaginationState,
    reset: ResetSignal<K>,
    window: WindowConfig,
}

impl PageStateManager {
    /// Manager without reset values. Use [`PageStateManager::keyed`] to
    /// reset on filter changes.
    pub fn new(total_items: usize, page_size: i64) -> Self {
        Self::keyed(total_items, page_size)
    }
}

impl<K> PageStateManager<K> {
    pub fn with_window_config(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Request a page; the stored value is clamped into `[1, total_pages]`
    pub fn set_page(&mut self, requested: i64) -> usize {
        self.state = self.state.with_page(requested);
        let current = self.state.current_page();
        if i64::try_from(current).ok() != Some(requested) {
            debug!(
                requested,
                current,
                total_pages = self.state.total_pages(),
                "page request clamped"
            );
        }
        current
    }

    /// Recompute the page count, pulling the current page back into range if
    /// the list shrank under it.
    ///
    /// `page_size <= 0` is treated as 1.
    pub fn on_inputs_changed(&mut self, total_items: usize, page_size: i64) {
        if page_size < 1 {
            debug!(page_size, "non-positive page size treated as 1");
        }
        let before = self.state.current_page();
        self.state = self
            .state
            .with_inputs(total_items, PageSize::from_signed(page_size));

        trace!(
            total_items,
            page_size = self.state.page_size().get(),
            total_pages = self.state.total_pages(),
            "pagination inputs recomputed"
        );
        if self.state.current_page() != before {
            debug!(
                from = before,
                to = self.state.current_page(),
                "current page clamped after inputs changed"
            );
        }
    }

    /// Change only the page size; same clamping as [`Self::on_inputs_changed`]
    pub fn set_page_size(&mut self, page_size: PageSize) {
        let page_size = i64::try_from(page_size.get()).unwrap_or(i64::MAX);
        self.on_inputs_changed(self.state.total_items(), page_size);
    }

    pub fn next_page(&mut self) -> usize {
        self.step(1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.step(-1)
    }

    pub fn first_page(&mut self) -> usize {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> usize {
        let last = i64::try_from(self.state.total_pages()).unwrap_or(i64::MAX);
        self.set_page(last)
    }

    fn step(&mut self, delta: i64) -> usize {
        let current = i64::try_from(self.state.current_page()).unwrap_or(i64::MAX);
        self.set_page(current.saturating_add(delta))
    }

    /// Apply a request coming from a rendered bar
    pub fn apply(&mut self, action: BarAction) -> usize {
        match action {
            BarAction::Previous => self.previous_page(),
            BarAction::Next => self.next_page(),
            BarAction::Page(page) => self.set_page(i64::try_from(page).unwrap_or(i64::MAX)),
        }
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn position(&self) -> PagePosition {
        self.state.position()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn page_size(&self) -> PageSize {
        self.state.page_size()
    }

    pub fn total_items(&self) -> usize {
        self.state.total_items()
    }

    pub fn window_config(&self) -> WindowConfig {
        self.window
    }

    pub fn bar(&self) -> Option<PaginationBar> {
        PaginationBar::for_position(self.position(), &self.window)
    }

    /// Current page of `items` with its window and bar.
    ///
    /// `items` should be the list whose length was last passed to
    /// [`PageStateManager::on_inputs_changed`]; the slice is bounded either way.
    pub fn view<'a, T>(&self, items: &'a [T]) -> PageView<'a, T> {
        PageView::new(self.state, &self.window, items)
    }
}

impl<K: PartialEq + Clone> PageStateManager<K> {
    /// Manager that resets to page 1 whenever the reset values change
    pub fn keyed(total_items: usize, page_size: i64) -> Self {
        Self {
            state: PaginationState::new(total_items, PageSize::from_signed(page_size)),
            reset: ResetSignal::default(),
            window: WindowConfig::default(),
        }
    }

    /// Compare `values` with the previous call and move to page 1 if any
    /// differ. Returns whether the page was reset.
    pub fn on_reset_signal(&mut self, values: &[K]) -> bool {
        if !self.reset.observe(values) {
            return false;
        }
        debug!(
            from = self.state.current_page(),
            "reset signal changed, returning to page 1"
        );
        self.state = self.state.reset();
        true
    }

    /// One update cycle: reset signal first, then recompute and clamp
    pub fn sync(&mut self, total_items: usize, page_size: i64, values: &[K]) -> PagePosition {
        self.on_reset_signal(values);
        self.on_inputs_changed(total_items, page_size);
        self.position()
    }

    /// `sync` against `items` and return the resulting view
    pub fn paginate<'a, T>(
        &mut self,
        items: &'a [T],
        page_size: i64,
        values: &[K],
    ) -> PageView<'a, T> {
        self.sync(items.len(), page_size, values);
        self.view(items)
    }
}
