// Engine module - pagination logic (state clamping, slicing, page windows)
// This layer sits between the data model (types) and whatever renders a page

pub mod bar;
mod reset;
pub mod slicer;
pub mod state;
mod view;
pub mod window;

pub use bar::{BarAction, BarItem, PaginationBar};
pub use reset::ResetSignal;
pub use slicer::{item_range, slice};
pub use state::PageStateManager;
pub use view::PageView;
pub use window::{MAX_FULL_THRESHOLD, MAX_SIBLINGS, WindowConfig, build_window};

pub use folio_types::{ItemRange, PagePosition, PageSize, PageWindow, PaginationState, WindowToken};

// Façade API - one-shot helpers for callers that do not keep a manager around

/// Paginate `items` in a single call: clamp `requested_page`, slice, and build
/// the window and bar with the default window settings
pub fn paginate<T>(items: &[T], requested_page: i64, page_size: i64) -> PageView<'_, T> {
    let mut manager = PageStateManager::new(items.len(), page_size);
    manager.set_page(requested_page);
    manager.view(items)
}
