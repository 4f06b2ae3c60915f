//! Attaches source comments to the syntax tree nodes they belong to.
//!
//! Comments are not part of the grammar, so the parser hands them over as a
//! separate token stream. Before the tree can be re-emitted as formatted
//! text, every comment must be assigned to exactly one node as a leading,
//! trailing, or dangling comment; the printer then re-interleaves them. The
//! assignment is driven by a large, ordered body of placement rules — see
//! [`comments`].

use text_size::TextRange;

use quill_js_ast::{Comment, Node};
use quill_source_file::Locator;

pub mod comments;
mod options;

pub use options::{JsDialect, JsFormatOptions};

use crate::comments::Comments;

/// Errors raised when the parser's structural preconditions are breached.
/// The pass refuses to guess about a tree it cannot trust; continuing would
/// silently misplace comments.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum CommentAttachmentError {
    #[error("comment at {comment:?} lies outside the syntax tree rooted at {root:?}")]
    CommentOutsideTree { comment: TextRange, root: TextRange },
}

/// Resolves every comment in `comments` against the tree rooted at `root`.
///
/// `comments` must be sorted by source start offset; this is a precondition
/// of the parser contract and is not re-checked here. The returned
/// [`Comments`] is a side table keyed by node identity — the tree itself is
/// never mutated.
pub fn attach_comments<'a>(
    root: &'a Node,
    comments: &[Comment],
    source: &str,
    options: &JsFormatOptions,
) -> Result<Comments<'a>, CommentAttachmentError> {
    Comments::from_ast(root, comments, &Locator::new(source), options)
}
