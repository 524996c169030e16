//! Cursor over a list whose length can change between frames.

/// Index of the highlighted row.
///
/// Length is passed in on every move instead of being stored, since the
/// underlying list is owned elsewhere and may be replaced by a refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move down one row, stopping at the last.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
        } else if self.index + 1 < len {
            self.index += 1;
        }
    }

    /// Move up one row, stopping at the first.
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Pull the cursor back inside `0..len`.
    pub fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    /// The selected element of `items`, if the list is non-empty.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}
