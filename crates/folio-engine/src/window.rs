//! Compact page-number windows.
//!
//! Up to `full_threshold` pages every number is listed. Past that the window
//! keeps the first and last page, the current page with `siblings` neighbours
//! on each side, and collapses each omitted run into a single ellipsis:
//!
//! ```text
//! total=10 current=1   1 2 … 10
//! total=10 current=5   1 … 4 5 6 … 10
//! total=10 current=10  1 … 9 10
//! ```

use folio_types::{PageWindow, WindowToken};
use serde::{Deserialize, Serialize};

/// Upper bound for [`WindowConfig::siblings`]
pub const MAX_SIBLINGS: usize = 10;

/// Upper bound for [`WindowConfig::full_threshold`]
pub const MAX_FULL_THRESHOLD: usize = 2 * MAX_SIBLINGS + 5;

/// Window shape. Both fields are capped ([`MAX_SIBLINGS`],
/// [`MAX_FULL_THRESHOLD`]) so a window never exceeds `MAX_FULL_THRESHOLD`
/// tokens whatever the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WindowRepr")]
pub struct WindowConfig {
    /// Largest page count listed in full
    pub full_threshold: usize,
    /// Pages shown on each side of the current page once collapsed
    pub siblings: usize,
}

#[derive(Deserialize)]
#[serde(default)]
struct WindowRepr {
    full_threshold: usize,
    siblings: usize,
}

impl Default for WindowRepr {
    fn default() -> Self {
        let config = WindowConfig::default();
        Self {
            full_threshold: config.full_threshold,
            siblings: config.siblings,
        }
    }
}

impl From<WindowRepr> for WindowConfig {
    fn from(repr: WindowRepr) -> Self {
        Self::new(repr.full_threshold, repr.siblings)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            full_threshold: 7,
            siblings: 1,
        }
    }
}

impl WindowConfig {
    /// Values above the caps are lowered to them
    pub fn new(full_threshold: usize, siblings: usize) -> Self {
        Self {
            full_threshold: full_threshold.min(MAX_FULL_THRESHOLD),
            siblings: siblings.min(MAX_SIBLINGS),
        }
    }

    /// Same threshold, different sibling count
    pub fn with_siblings(self, siblings: usize) -> Self {
        Self::new(self.full_threshold, siblings)
    }

    fn siblings(&self) -> usize {
        self.siblings.min(MAX_SIBLINGS)
    }

    /// Threshold actually applied: never below the longest collapsed window
    /// (first, gap, current block, gap, last)
    pub fn effective_threshold(&self) -> usize {
        let longest_collapsed = 2 * self.siblings() + 5;
        self.full_threshold
            .min(MAX_FULL_THRESHOLD)
            .max(longest_collapsed)
    }

    /// Build the window for `current` of `total_pages`.
    ///
    /// `total_pages` of 0 is read as 1 and `current` is clamped into range.
    pub fn build(&self, current: usize, total_pages: usize) -> PageWindow {
        let total = total_pages.max(1);
        let current = current.clamp(1, total);

        if total <= self.effective_threshold() {
            return (1..=total).map(WindowToken::PageNumber).collect::<Vec<_>>().into();
        }

        let siblings = self.siblings();
        let left = current.saturating_sub(siblings).max(2);
        let right = current.saturating_add(siblings).min(total - 1);

        let mut tokens = Vec::with_capacity(2 * siblings + 5);
        tokens.push(WindowToken::PageNumber(1));
        if left > 2 {
            tokens.push(WindowToken::Ellipsis);
        }
        tokens.extend((left..=right).map(WindowToken::PageNumber));
        if right < total - 1 {
            tokens.push(WindowToken::Ellipsis);
        }
        tokens.push(WindowToken::PageNumber(total));

        PageWindow::new(tokens)
    }
}

/// Window with the default settings (7 pages listed in full, 1 sibling)
pub fn build_window(current: usize, total_pages: usize) -> PageWindow {
    WindowConfig::default().build(current, total_pages)
}
