/// The pragma that suppresses formatting of the node that follows it.
pub const SUPPRESSION_MARKER: &str = "quill-ignore";

/// Returns `true` if `text` — a full comment token including its
/// delimiters — is a suppression pragma.
///
/// The pragma must be the entire comment content: `// quill-ignore` or
/// `/* quill-ignore */`. Comments that merely mention the marker are
/// ordinary comments.
pub fn is_suppression_comment(text: &str) -> bool {
    let content = if let Some(rest) = text.strip_prefix("//") {
        rest
    } else if let Some(rest) = text
        .strip_prefix("/*")
        .and_then(|rest| rest.strip_suffix("*/"))
    {
        rest
    } else {
        return false;
    };

    content.trim() == SUPPRESSION_MARKER
}
