/// Remembers the last set of reset values and reports when they change.
///
/// Comparison is by value (`PartialEq`), element by element; a change in
/// length counts as a change. The first observation only records a baseline.
#[derive(Debug, Clone)]
pub struct ResetSignal<K> {
    last: Option<Vec<K>>,
}

impl<K> Default for ResetSignal<K> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<K: PartialEq + Clone> ResetSignal<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `values`, returning true when they differ from the previous call
    pub fn observe(&mut self, values: &[K]) -> bool {
        if self.last.as_deref() == Some(values) {
            return false;
        }
        let changed = self.last.is_some();
        self.last = Some(values.to_vec());
        changed
    }

    pub fn last(&self) -> Option<&[K]> {
        self.last.as_deref()
    }
}
