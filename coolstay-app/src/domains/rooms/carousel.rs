//! Wraparound index cursor shared by the showcase and the card image
//! strips.

/// Cursor over a fixed-length slide deck. Stepping wraps at both ends;
/// an empty deck ignores every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump straight to `index`; out-of-range jumps clamp to the last
    /// slide.
    pub fn go_to(&mut self, index: usize) {
        if self.len > 0 {
            self.current = index.min(self.len - 1);
        }
    }
}
