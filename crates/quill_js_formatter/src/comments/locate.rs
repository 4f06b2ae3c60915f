use smallvec::SmallVec;

use quill_js_ast::{Comment, CommentKind, Node, Ranged};
use quill_js_trivia::CommentLinePosition;
use text_size::TextRange;

use crate::JsFormatOptions;

/// A comment enriched with the structural context the placement rules
/// dispatch on: the innermost node containing the comment, its closest
/// neighbors among that node's children, and the comment's line position.
///
/// The node references are lookups into the caller-owned tree, never
/// ownership edges.
#[derive(Copy, Clone, Debug)]
pub(super) struct DecoratedComment<'a> {
    comment: Comment,
    position: CommentLinePosition,
    enclosing: &'a Node,
    preceding: Option<&'a Node>,
    following: Option<&'a Node>,
    suppression_target: Option<&'a Node>,
    consumed: bool,
}

impl<'a> DecoratedComment<'a> {
    /// The innermost node whose range contains the comment.
    pub(super) fn enclosing_node(&self) -> &'a Node {
        self.enclosing
    }

    /// The last child of [`Self::enclosing_node`] ending before the comment.
    pub(super) fn preceding_node(&self) -> Option<&'a Node> {
        self.preceding
    }

    /// The first child of [`Self::enclosing_node`] starting after the comment.
    pub(super) fn following_node(&self) -> Option<&'a Node> {
        self.following
    }

    pub(super) fn line_position(&self) -> CommentLinePosition {
        self.position
    }

    pub(super) fn kind(&self) -> CommentKind {
        self.comment.kind()
    }

    /// The comment text without its delimiters.
    pub(super) fn content_range(&self) -> TextRange {
        self.comment.content_range()
    }

    /// Marks the comment as a consumed suppression pragma targeting `node`.
    /// The comment stays attached for recoverability, but the printer treats
    /// it as part of the verbatim region it triggers.
    pub(super) fn mark_suppression_consumed(&mut self, node: &'a Node) {
        self.suppression_target = Some(node);
        self.consumed = true;
    }

    pub(super) fn suppression_target(&self) -> Option<&'a Node> {
        self.suppression_target
    }

    pub(super) fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl Ranged for DecoratedComment<'_> {
    fn range(&self) -> TextRange {
        self.comment.range()
    }
}

/// Computes the enclosing, preceding, and following nodes for `comment`.
///
/// Starting at the root, descends into the child whose range contains the
/// comment until no child qualifies; the preceding and following neighbors
/// are tracked with a binary search over the innermost node's children,
/// which are flattened in source order.
pub(super) fn decorate_comment<'a>(
    root: &'a Node,
    comment: Comment,
    position: CommentLinePosition,
    options: &JsFormatOptions,
) -> DecoratedComment<'a> {
    let mut enclosing = root;
    let mut preceding = None;
    let mut following = None;

    'descent: loop {
        let children = comment_child_nodes(enclosing, options);

        let mut left = 0;
        let mut right = children.len();

        while left < right {
            let mid = left + (right - left) / 2;
            let child = children[mid];

            if child.start() <= comment.start() && comment.end() <= child.end() {
                enclosing = child;
                preceding = None;
                following = None;
                continue 'descent;
            }

            if child.end() <= comment.start() {
                preceding = Some(child);
                left = mid + 1;
            } else if comment.end() <= child.start() {
                following = Some(child);
                right = mid;
            } else {
                // The comment straddles the child's boundary. No neighbor on
                // this side can anchor it.
                break;
            }
        }

        break;
    }

    DecoratedComment {
        comment,
        position,
        enclosing,
        preceding,
        following,
        suppression_target: None,
        consumed: false,
    }
}

/// The children of `node` the locator searches, in source order.
///
/// For estree-shaped dialects, a parameterless method's function expression
/// spans from the method name to the body, so a comment between name and
/// body would otherwise report the function expression as its enclosing
/// node:
///
/// ```js
/// class Foo {
///   bar() // comment
///   {
///     baz();
///   }
/// }
/// ```
///
/// Treating the method's key and the function's body as adjacent children
/// lets the comment trail the name instead.
pub(super) fn comment_child_nodes<'a>(
    node: &'a Node,
    options: &JsFormatOptions,
) -> SmallVec<[&'a Node; 8]> {
    if options.dialect().is_estree_shaped() && node.kind().is_method_definition() {
        if let Some(value) = node.slot("value") {
            if value.kind().is_function_expression()
                && value.slot("params").is_none()
                && value.slot("returnType").is_none()
                && value.slot("typeParameters").is_none()
            {
                if let Some(body) = value.slot("body") {
                    let mut children: SmallVec<[&'a Node; 8]> =
                        node.slot_list("decorators").collect();
                    children.extend(node.slot("key"));
                    children.push(body);
                    return children;
                }
            }
        }
    }

    node.children().collect()
}
