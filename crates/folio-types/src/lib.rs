pub mod error;
pub mod page;
pub mod window;

pub use error::{Error, Result};
pub use page::{ItemRange, PagePosition, PageSize, PaginationState};
pub use window::{PageWindow, WindowToken};
