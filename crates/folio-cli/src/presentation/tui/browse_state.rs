//! Interactive browser state, independent of the terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_engine::{BarAction, PageStateManager, PageView, PageSize, WindowConfig};

use crate::input::{Filter, Item};

/// Page sizes cycled with `+` / `-`
pub const PAGE_SIZE_STEPS: [i64; 5] = [5, 10, 20, 50, 100];

pub struct BrowseState {
    items: Vec<Item>,
    /// Indices into `items` that pass the filter
    visible: Vec<usize>,
    filter: String,
    editing_filter: bool,
    /// Digits typed so far for a page-link jump
    jump: String,
    page_size: i64,
    manager: PageStateManager<String>,
    should_quit: bool,
}

impl BrowseState {
    pub fn new(items: Vec<Item>, page_size: i64, window: WindowConfig) -> Self {
        let page_size = PageSize::from_signed(page_size).get() as i64;
        let mut state = Self {
            visible: (0..items.len()).collect(),
            manager: PageStateManager::keyed(items.len(), page_size).with_window_config(window),
            items,
            filter: String::new(),
            editing_filter: false,
            jump: String::new(),
            page_size,
            should_quit: false,
        };
        state.refresh();
        state
    }

    /// Re-run the filter and sync pagination: the filter text is the reset
    /// signal, so any edit goes back to page 1
    fn refresh(&mut self) {
        let filter = Filter::Substring(self.filter.to_lowercase());
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item.text()))
            .map(|(index, _)| index)
            .collect();

        self.manager.sync(
            self.visible.len(),
            self.page_size,
            std::slice::from_ref(&self.filter),
        );
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        // raw mode swallows SIGINT
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.editing_filter {
            self.handle_filter_key(key.code);
            return;
        }

        if let KeyCode::Char(digit @ '0'..='9') = key.code {
            self.jump.push(digit);
            return;
        }
        if !self.jump.is_empty() {
            self.handle_jump_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Right => {
                self.manager.apply(BarAction::Next);
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.manager.apply(BarAction::Previous);
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.manager.first_page();
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.manager.last_page();
            }
            KeyCode::Char('+') => self.step_page_size(true),
            KeyCode::Char('-') => self.step_page_size(false),
            KeyCode::Char('/') => self.editing_filter = true,
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.editing_filter = false,
            KeyCode::Backspace => {
                if self.filter.pop().is_some() {
                    self.refresh();
                }
            }
            KeyCode::Char(c) => {
                self.filter.push(c);
                self.refresh();
            }
            _ => {}
        }
    }

    /// `Enter` follows the typed page link if the bar shows it, `Backspace`
    /// edits the digits, anything else drops them
    fn handle_jump_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let jump = std::mem::take(&mut self.jump);
                let target = jump.parse::<usize>().ok().and_then(|page| {
                    let bar = self.view().bar?;
                    let action = BarAction::Page(page);
                    bar.target(action).map(|_| action)
                });
                if let Some(action) = target {
                    self.manager.apply(action);
                }
            }
            KeyCode::Backspace => {
                self.jump.pop();
            }
            _ => self.jump.clear(),
        }
    }

    fn step_page_size(&mut self, grow: bool) {
        let next = if grow {
            PAGE_SIZE_STEPS.iter().copied().find(|&s| s > self.page_size)
        } else {
            PAGE_SIZE_STEPS
                .iter()
                .rev()
                .copied()
                .find(|&s| s < self.page_size)
        };
        if let Some(size) = next {
            self.page_size = size;
            self.refresh();
        }
    }

    /// Indices (into the filtered list) of the current page
    pub fn view(&self) -> PageView<'_, usize> {
        self.manager.view(&self.visible)
    }

    pub fn page_items(&self) -> Vec<&Item> {
        self.view()
            .items
            .iter()
            .map(|&index| &self.items[index])
            .collect()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Page number being typed, empty when none
    pub fn pending_jump(&self) -> &str {
        &self.jump
    }

    pub fn is_editing_filter(&self) -> bool {
        self.editing_filter
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.manager.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.manager.total_pages()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
