//! Cursor and scroll state for a fixed-height window over the position list.
//!
//! For a non-empty list of `len` positions the following always holds:
//! `cursor_row < height` and `cursor_row + scroll_offset < len`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    cursor_row: usize,
    scroll_offset: usize,
    height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            cursor_row: 0,
            scroll_offset: 0,
            height: height.max(1),
        }
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the selected entry in the position list.
    pub fn full_index(&self) -> usize {
        self.cursor_row + self.scroll_offset
    }

    /// Moves the selection by `delta` entries.
    ///
    /// Moving down stops at the last entry; the cursor walks to the bottom row
    /// and whatever is left scrolls the window. Moving up past the first entry
    /// snaps to the very top.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if delta == 0 || len == 0 {
            return;
        }

        let current = self.full_index();
        let last_row = self.height - 1;

        if delta > 0 {
            let max = len - 1;
            if current >= max {
                return;
            }
            let step = delta.unsigned_abs().min(max - current);
            if self.cursor_row + step <= last_row {
                self.cursor_row += step;
            } else {
                let to_bottom = last_row - self.cursor_row;
                self.cursor_row = last_row;
                self.scroll_offset += step - to_bottom;
            }
        } else {
            let step = delta.unsigned_abs();
            if current <= step {
                self.cursor_row = 0;
                self.scroll_offset = 0;
            } else if self.cursor_row >= step {
                self.cursor_row -= step;
            } else {
                let rest = step - self.cursor_row;
                self.cursor_row = 0;
                self.scroll_offset -= rest;
            }
        }
    }

    pub fn jump_to(&mut self, index: usize, len: usize) {
        let delta = index as isize - self.full_index() as isize;
        self.move_by(delta, len);
    }

    /// Selects the next entry whose name starts with `prefix`, searching
    /// forward from just after the selection and then wrapping to the top.
    /// Returns the new index, or `None` when nothing matched.
    pub fn jump_to_prefix<S: AsRef<str>>(&mut self, names: &[S], prefix: &str) -> Option<usize> {
        if prefix.is_empty() || names.is_empty() {
            return None;
        }
        let current = self.full_index().min(names.len() - 1);
        let matches = |name: &S| name.as_ref().starts_with(prefix);

        let found = names[current + 1..]
            .iter()
            .position(matches)
            .map(|i| current + 1 + i)
            .or_else(|| names[..current].iter().position(matches))?;

        self.jump_to(found, names.len());
        Some(found)
    }

    /// Pulls the selection back inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor_row = 0;
            self.scroll_offset = 0;
            return;
        }
        let current = self.full_index();
        if current >= len {
            self.move_by(-((current - (len - 1)) as isize), len);
        }
    }

    /// Changes the window height, keeping the selected index.
    pub fn resize(&mut self, height: usize) {
        let height = height.max(1);
        if self.cursor_row >= height {
            self.scroll_offset += self.cursor_row - (height - 1);
            self.cursor_row = height - 1;
        }
        self.height = height;
    }
}

#[cfg(test)]
#[path = "tests/viewport_tests.rs"]
mod tests;
