use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;

use crate::{Error, Result};

/// Number of items shown per page (always at least 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const MIN: PageSize = PageSize(NonZeroUsize::MIN);

    /// Create a page size, treating zero as 1
    pub fn new(size: usize) -> Self {
        Self(NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN))
    }

    /// Create a page size from a signed value; anything `<= 0` becomes 1
    pub fn from_signed(size: i64) -> Self {
        usize::try_from(size).map_or(Self::MIN, Self::new)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// `max(1, ceil(total_items / size))`
    pub fn total_pages(self, total_items: usize) -> usize {
        total_items.div_ceil(self.get()).max(1)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::new(10)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        NonZeroUsize::new(size).map(Self).ok_or(Error::ZeroPageSize)
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clamp any requested page number into `[1, total_pages]`.
///
/// `total_pages` of zero is read as 1.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let total = total_pages.max(1);
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(total, |page| page.min(total))
}

/// Current page paired with the page count it is valid for.
///
/// Holds `1 <= current <= total_pages` for every value that can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PositionRepr", into = "PositionRepr")]
pub struct PagePosition {
    current: usize,
    total_pages: usize,
}

#[derive(Serialize, Deserialize)]
struct PositionRepr {
    current_page: usize,
    total_pages: usize,
}

impl PagePosition {
    /// Page 1 of 1
    pub const FIRST: PagePosition = PagePosition {
        current: 1,
        total_pages: 1,
    };

    /// Build a position, clamping `current` into range
    pub fn new(current: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current: current.clamp(1, total_pages),
            total_pages,
        }
    }

    /// Build a position from an unchecked, possibly negative page request
    pub fn from_request(requested: i64, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current: clamp_page(requested, total_pages),
            total_pages,
        }
    }

    /// Build a position, rejecting out-of-range pages instead of clamping
    pub fn try_new(current: usize, total_pages: usize) -> Result<Self> {
        if total_pages == 0 || current == 0 || current > total_pages {
            return Err(Error::PageOutOfRange {
                page: current,
                total_pages,
            });
        }
        Ok(Self {
            current,
            total_pages,
        })
    }

    pub fn current(self) -> usize {
        self.current
    }

    pub fn total_pages(self) -> usize {
        self.total_pages
    }

    pub fn is_first(self) -> bool {
        self.current == 1
    }

    pub fn is_last(self) -> bool {
        self.current == self.total_pages
    }

    pub fn previous(self) -> Option<usize> {
        (!self.is_first()).then(|| self.current - 1)
    }

    pub fn next(self) -> Option<usize> {
        (!self.is_last()).then(|| self.current + 1)
    }

    /// Same page against a new page count, clamped down if the count shrank
    pub fn with_total_pages(self, total_pages: usize) -> Self {
        Self::new(self.current, total_pages)
    }
}

impl Default for PagePosition {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<PositionRepr> for PagePosition {
    type Error = Error;

    fn try_from(repr: PositionRepr) -> Result<Self> {
        Self::try_new(repr.current_page, repr.total_pages)
    }
}

impl From<PagePosition> for PositionRepr {
    fn from(position: PagePosition) -> Self {
        Self {
            current_page: position.current,
            total_pages: position.total_pages,
        }
    }
}

impl fmt::Display for PagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} of {}", self.current, self.total_pages)
    }
}

/// Full pagination state of one list view.
///
/// `total_pages` is always derived from `total_items` and `page_size`, and the
/// current page always lies inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StateRepr", into = "StateRepr")]
pub struct PaginationState {
    position: PagePosition,
    page_size: PageSize,
    total_items: usize,
}

#[derive(Serialize, Deserialize)]
struct StateRepr {
    current_page: usize,
    #[serde(default, skip_deserializing)]
    total_pages: usize,
    /// Non-positive values read as 1
    page_size: i64,
    total_items: usize,
}

impl PaginationState {
    /// Fresh state positioned on page 1
    pub fn new(total_items: usize, page_size: PageSize) -> Self {
        Self {
            position: PagePosition::new(1, page_size.total_pages(total_items)),
            page_size,
            total_items,
        }
    }

    /// Move to the requested page, clamped into range
    pub fn with_page(self, requested: i64) -> Self {
        Self {
            position: PagePosition::from_request(requested, self.total_pages()),
            ..self
        }
    }

    /// Recompute the page count for new inputs, keeping the current page when
    /// it is still valid
    pub fn with_inputs(self, total_items: usize, page_size: PageSize) -> Self {
        Self {
            position: self
                .position
                .with_total_pages(page_size.total_pages(total_items)),
            page_size,
            total_items,
        }
    }

    pub fn reset(self) -> Self {
        Self {
            position: PagePosition::new(1, self.total_pages()),
            ..self
        }
    }

    pub fn position(&self) -> PagePosition {
        self.position
    }

    pub fn current_page(&self) -> usize {
        self.position.current()
    }

    pub fn total_pages(&self) -> usize {
        self.position.total_pages()
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(0, PageSize::default())
    }
}

impl From<StateRepr> for PaginationState {
    fn from(repr: StateRepr) -> Self {
        let page = i64::try_from(repr.current_page).unwrap_or(i64::MAX);
        Self::new(repr.total_items, PageSize::from_signed(repr.page_size)).with_page(page)
    }
}

impl From<PaginationState> for StateRepr {
    fn from(state: PaginationState) -> Self {
        Self {
            current_page: state.current_page(),
            total_pages: state.total_pages(),
            page_size: i64::try_from(state.page_size.get()).unwrap_or(i64::MAX),
            total_items: state.total_items,
        }
    }
}

/// Zero-based, half-open range of the items visible on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemRange {
    pub start: usize,
    pub end: usize,
}

impl ItemRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for ItemRange {
    /// One-based, inclusive: `11-20`, or `0-0` when empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "0-0")
        } else {
            write!(f, "{}-{}", self.start + 1, self.end)
        }
    }
}
