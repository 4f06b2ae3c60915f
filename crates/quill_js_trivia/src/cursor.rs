use std::str::Chars;

use text_size::{TextLen, TextSize};

pub const EOF_CHAR: char = '\0';

/// A character cursor over a slice of source text.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    source_length: TextSize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source_length: source.text_len(),
            chars: source.chars(),
        }
    }

    /// Peeks the next character without consuming it. Returns [`EOF_CHAR`]
    /// at the end of the text.
    pub fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// The number of characters consumed so far, as an offset from the start
    /// of the text this cursor was created over.
    pub fn offset(&self) -> TextSize {
        self.source_length - self.chars.as_str().text_len()
    }

    /// Consumes the next character.
    pub fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Consumes the next character if it equals `c`.
    pub fn eat_char(&mut self, c: char) -> bool {
        if self.first() == c {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }
}
