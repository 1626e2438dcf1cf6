use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowToken {
    /// A page link (1-based)
    PageNumber(usize),
    /// Marker for omitted pages; not interactive
    Ellipsis,
}

impl WindowToken {
    pub fn page(self) -> Option<usize> {
        match self {
            WindowToken::PageNumber(page) => Some(page),
            WindowToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, WindowToken::Ellipsis)
    }
}

impl fmt::Display for WindowToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowToken::PageNumber(page) => write!(f, "{}", page),
            WindowToken::Ellipsis => write!(f, "…"),
        }
    }
}

/// Ordered page-number tokens for a compact page control
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageWindow(Vec<WindowToken>);

impl PageWindow {
    pub fn new(tokens: Vec<WindowToken>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[WindowToken] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindowToken> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Page numbers in display order, skipping ellipsis markers
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter_map(|token| token.page())
    }

    pub fn contains_page(&self, page: usize) -> bool {
        self.pages().any(|p| p == page)
    }

    pub fn into_tokens(self) -> Vec<WindowToken> {
        self.0
    }
}

impl From<Vec<WindowToken>> for PageWindow {
    fn from(tokens: Vec<WindowToken>) -> Self {
        Self(tokens)
    }
}

impl IntoIterator for PageWindow {
    type Item = WindowToken;
    type IntoIter = std::vec::IntoIter<WindowToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PageWindow {
    type Item = &'a WindowToken;
    type IntoIter = std::slice::Iter<'a, WindowToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PageWindow {
    /// Space-separated tokens: `1 … 4 5 6 … 10`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
