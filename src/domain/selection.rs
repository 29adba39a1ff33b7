use super::Catalog;

/// On/off flags, one per catalog entry, index-aligned with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(Vec<bool>);

impl Selection {
    /// First two entries on, the rest off.
    pub fn defaults(len: usize) -> Self {
        Self((0..len).map(|i| i < 2).collect())
    }

    /// Fit previously stored flags to `len`: extra flags are dropped, missing ones are off.
    pub fn normalized(mut flags: Vec<bool>, len: usize) -> Self {
        flags.resize(len, false);
        Self(flags)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_selected(&self, idx: usize) -> bool {
        self.0.get(idx).copied().unwrap_or(false)
    }

    /// Flip one flag. Out-of-range indices are ignored.
    pub fn toggle(&mut self, idx: usize) {
        if let Some(flag) = self.0.get_mut(idx) {
            *flag = !*flag;
        }
    }

    /// Flip the flag behind each digit in order; unknown characters are skipped.
    pub fn apply_digits(&mut self, catalog: &Catalog, digits: &str) {
        for key in digits.chars() {
            if let Some(idx) = catalog.index_for_key(key) {
                self.toggle(idx);
            }
        }
    }

    pub fn selected_count(&self) -> usize {
        self.0.iter().filter(|flag| **flag).count()
    }

    pub fn any_selected(&self) -> bool {
        self.0.iter().any(|flag| *flag)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}
