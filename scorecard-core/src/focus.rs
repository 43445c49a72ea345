/// Focus position within a fixed-length record list.
///
/// Holds `0 <= index < len` whenever `len > 0`; an empty list has no focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusCursor {
    index: usize,
    len: usize,
}

impl FocusCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current focus, `None` when there is nothing to focus
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Movement methods return the new focus, or `None` on an empty list

    pub fn move_next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1).min(self.len - 1);
        Some(self.index)
    }

    pub fn move_prev(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = self.index.saturating_sub(1);
        Some(self.index)
    }

    pub fn move_to_first(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = 0;
        Some(self.index)
    }

    pub fn move_to_last(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = self.len - 1;
        Some(self.index)
    }

    /// Direct set from a pointer target. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}
