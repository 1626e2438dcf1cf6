use std::fmt;

/// Result type for folio-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the strict constructors of the types layer.
///
/// The lenient constructors (`PageSize::new`, `PagePosition::new`, ...) never
/// fail; they clamp instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A page size of zero was supplied
    ZeroPageSize,

    /// A page number outside `[1, total_pages]` was supplied
    PageOutOfRange { page: usize, total_pages: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroPageSize => write!(f, "page size must be at least 1"),
            Error::PageOutOfRange { page, total_pages } => write!(
                f,
                "page {} is out of range (expected 1..={})",
                page, total_pages
            ),
        }
    }
}

impl std::error::Error for Error {}
