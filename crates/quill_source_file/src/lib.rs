//! Cheap position queries over the original source text.

use memchr::memchr2;
use text_size::{TextRange, TextSize};

/// Wraps the source text and answers offset-based questions about it:
/// whether a range contains a line break, and slicing by [`TextRange`].
#[derive(Debug, Copy, Clone)]
pub struct Locator<'a> {
    contents: &'a str,
}

impl<'a> Locator<'a> {
    pub const fn new(contents: &'a str) -> Self {
        Self { contents }
    }

    pub const fn contents(&self) -> &'a str {
        self.contents
    }

    /// Returns `true` if `range` spans at least one line break.
    pub fn contains_line_break(&self, range: TextRange) -> bool {
        memchr2(b'\n', b'\r', self.slice(range).as_bytes()).is_some()
    }

    /// Take the source code between the given [`TextRange`].
    pub fn slice(&self, range: TextRange) -> &'a str {
        &self.contents[range]
    }

    /// Take the source code after the given [`TextSize`].
    pub fn after(&self, offset: TextSize) -> &'a str {
        &self.contents[usize::from(offset)..]
    }
}
