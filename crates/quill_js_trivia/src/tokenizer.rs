use text_size::{TextRange, TextSize};

use crate::cursor::Cursor;
use crate::whitespace::{is_js_whitespace, is_line_break};

/// A token produced by [`SimpleTokenizer`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SimpleToken {
    pub kind: SimpleTokenKind,
    pub range: TextRange,
}

impl SimpleToken {
    pub const fn kind(&self) -> SimpleTokenKind {
        self.kind
    }

    pub const fn start(&self) -> TextSize {
        self.range.start()
    }

    pub const fn end(&self) -> TextSize {
        self.range.end()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SimpleTokenKind {
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Semi,
    Star,
    Slash,
    Ampersand,
    Bar,
    Dot,
    Eq,
    /// `=>`
    FatArrow,
    Question,
    Comment,
    Whitespace,
    Newline,
    /// Any other character. The tokenizer makes no attempt to lex
    /// identifiers, literals, or keywords; the formatter only ever inspects
    /// the first non-trivia token of a gap.
    Other,
}

impl SimpleTokenKind {
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            SimpleTokenKind::Whitespace | SimpleTokenKind::Newline | SimpleTokenKind::Comment
        )
    }
}

/// A tokenizer for the gaps between syntax nodes.
///
/// It understands whitespace, line breaks, both comment forms, and the
/// punctuation the placement rules need to disambiguate. Everything else is
/// emitted as a single-character [`SimpleTokenKind::Other`] token. It must
/// only be used over ranges that do not start inside a string or template
/// literal.
pub struct SimpleTokenizer<'a> {
    offset: TextSize,
    cursor: Cursor<'a>,
}

impl<'a> SimpleTokenizer<'a> {
    pub fn new(source: &'a str, range: TextRange) -> Self {
        Self {
            offset: range.start(),
            cursor: Cursor::new(&source[range]),
        }
    }

    /// Tokenizes from `offset` to the end of `source`.
    pub fn starts_at(offset: TextSize, source: &'a str) -> Self {
        Self::new(source, TextRange::new(offset, text_size::TextLen::text_len(source)))
    }

    /// Skips all whitespace, line break, and comment tokens.
    pub fn skip_trivia(self) -> impl Iterator<Item = SimpleToken> + 'a {
        self.filter(|token| !token.kind.is_trivia())
    }

    fn next_token(&mut self) -> Option<SimpleToken> {
        let start = self.offset + self.cursor.offset();

        let first = self.cursor.bump()?;
        let kind = match first {
            c if is_js_whitespace(c) => {
                self.cursor.eat_while(is_js_whitespace);
                SimpleTokenKind::Whitespace
            }
            '\r' => {
                self.cursor.eat_char('\n');
                SimpleTokenKind::Newline
            }
            '\n' => SimpleTokenKind::Newline,
            '/' => match self.cursor.first() {
                '/' => {
                    self.cursor.eat_while(|c| !is_line_break(c));
                    SimpleTokenKind::Comment
                }
                '*' => {
                    self.cursor.bump();
                    self.eat_block_comment();
                    SimpleTokenKind::Comment
                }
                _ => SimpleTokenKind::Slash,
            },
            '=' => {
                if self.cursor.eat_char('>') {
                    SimpleTokenKind::FatArrow
                } else {
                    SimpleTokenKind::Eq
                }
            }
            '(' => SimpleTokenKind::LParen,
            ')' => SimpleTokenKind::RParen,
            '{' => SimpleTokenKind::LBrace,
            '}' => SimpleTokenKind::RBrace,
            '[' => SimpleTokenKind::LBracket,
            ']' => SimpleTokenKind::RBracket,
            ',' => SimpleTokenKind::Comma,
            ':' => SimpleTokenKind::Colon,
            ';' => SimpleTokenKind::Semi,
            '*' => SimpleTokenKind::Star,
            '&' => SimpleTokenKind::Ampersand,
            '|' => SimpleTokenKind::Bar,
            '.' => SimpleTokenKind::Dot,
            '?' => SimpleTokenKind::Question,
            _ => SimpleTokenKind::Other,
        };

        let end = self.offset + self.cursor.offset();
        Some(SimpleToken {
            kind,
            range: TextRange::new(start, end),
        })
    }

    fn eat_block_comment(&mut self) {
        // The `/*` is already consumed. An unterminated comment runs to the
        // end of the tokenized range.
        loop {
            self.cursor.eat_while(|c| c != '*');
            if self.cursor.bump().is_none() || self.cursor.eat_char('/') {
                break;
            }
        }
    }
}

impl Iterator for SimpleTokenizer<'_> {
    type Item = SimpleToken;

    fn next(&mut self) -> Option<SimpleToken> {
        self.next_token()
    }
}
