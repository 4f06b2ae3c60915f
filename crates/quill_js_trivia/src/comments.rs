use text_size::TextRange;

use crate::whitespace::{is_js_whitespace, is_line_break, JsWhitespace};

/// Where a comment sits relative to the line breaks around it. The position
/// selects which group of placement rules applies.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CommentLinePosition {
    /// Nothing but whitespace (and possibly earlier comments) precedes the
    /// comment on its line.
    ///
    /// ```js
    /// a;
    /// // comment
    /// b;
    /// ```
    OwnLine,

    /// Code precedes the comment on its line, and a line break follows
    /// before the next non-whitespace character.
    ///
    /// ```js
    /// a; // comment
    /// b;
    /// ```
    EndOfLine,

    /// The comment is flanked by code on both sides of the same line.
    ///
    /// ```js
    /// a /* comment */ b;
    /// ```
    Remaining,
}

impl CommentLinePosition {
    pub const fn is_own_line(self) -> bool {
        matches!(self, Self::OwnLine)
    }

    pub const fn is_end_of_line(self) -> bool {
        matches!(self, Self::EndOfLine)
    }

    pub const fn is_remaining(self) -> bool {
        matches!(self, Self::Remaining)
    }

    /// Classifies the comment at `comment_range` in `source`.
    pub fn for_range(comment_range: TextRange, source: &str) -> Self {
        if only_trivia_before(&source[TextRange::up_to(comment_range.start())]) {
            return Self::OwnLine;
        }

        let after = &source[usize::from(comment_range.end())..];
        let trimmed = after.trim_whitespace_start();
        if trimmed.is_empty() || trimmed.starts_with(is_line_break) {
            Self::EndOfLine
        } else {
            Self::Remaining
        }
    }
}

/// Returns `true` if, walking backwards from the comment, only whitespace
/// and block comments appear before the start of the line (or of the file).
fn only_trivia_before(mut before: &str) -> bool {
    loop {
        before = before.trim_whitespace_end();
        if let Some(rest) = before.strip_suffix("*/") {
            // A block comment ends here; skip back over it. Without an
            // opening delimiter the text is malformed and the comment is
            // treated as ordinary content.
            match rest.rfind("/*") {
                Some(open) => {
                    before = &before[..open];
                    continue;
                }
                None => return false,
            }
        }
        return match before.chars().next_back() {
            None => true,
            Some(c) => is_line_break(c),
        };
    }
}
