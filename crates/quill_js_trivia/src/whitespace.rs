/// Returns `true` for characters that only separate tokens within a line.
/// Line breaks are deliberately excluded; the comment classifier treats them
/// separately.
pub const fn is_js_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0C' | '\x0B')
}

pub const fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

pub trait JsWhitespace {
    /// Like `str::trim()`, but only removes intra-line whitespace.
    fn trim_whitespace(&self) -> &Self;

    /// Like `str::trim_start()`, but only removes intra-line whitespace.
    fn trim_whitespace_start(&self) -> &Self;

    /// Like `str::trim_end()`, but only removes intra-line whitespace.
    fn trim_whitespace_end(&self) -> &Self;
}

impl JsWhitespace for str {
    fn trim_whitespace(&self) -> &Self {
        self.trim_matches(is_js_whitespace)
    }

    fn trim_whitespace_start(&self) -> &Self {
        self.trim_start_matches(is_js_whitespace)
    }

    fn trim_whitespace_end(&self) -> &Self {
        self.trim_end_matches(is_js_whitespace)
    }
}
