//! Attaches comments to syntax tree nodes and answers comment queries for
//! the printer.
//!
//! Comments are resolved in source order. Each comment is decorated with its
//! enclosing node and nearest neighbors ([`locate`]), classified by line
//! position, and run through the ordered handler table for that position
//! ([`placement`]); comments no handler claims fall back to a structural
//! default. The tree is never mutated — the results live in a side table
//! keyed by node identity and are queried through [`Comments`].

use std::cell::Cell;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use text_size::TextRange;

use quill_js_ast::{Comment, CommentKind, Node, NodeKind, Ranged};
use quill_js_trivia::{CommentLinePosition, SimpleTokenKind, SimpleTokenizer};
use quill_source_file::Locator;

use crate::{CommentAttachmentError, JsFormatOptions};

mod debug;
mod locate;
mod map;
mod node_key;
mod placement;

pub use debug::DebugComments;

use locate::{decorate_comment, DecoratedComment};
use map::CommentsMap;
use node_key::NodeRefEqualityKey;
use placement::{place_comment, CommentPlacement, PlacementContext};

static_assertions::assert_impl_all!(Comments<'static>: Clone);

/// A comment in the source document with its resolved attachment.
#[derive(Clone, Debug)]
pub struct SourceComment {
    range: TextRange,
    kind: CommentKind,
    position: CommentLinePosition,
    marker: Option<&'static str>,
    consumed: bool,
    type_annotation: bool,
    /// Whether the comment has been emitted by the printer. Diagnostics
    /// only; never consulted during attachment.
    formatted: Cell<bool>,
}

impl SourceComment {
    pub const fn kind(&self) -> CommentKind {
        self.kind
    }

    pub const fn line_position(&self) -> CommentLinePosition {
        self.position
    }

    /// The clause a dangling comment belongs to, when the owning node has
    /// more than one dangling position (`implements`, `extends`, `mixins`).
    pub const fn marker(&self) -> Option<&'static str> {
        self.marker
    }

    /// A consumed comment is a suppression pragma that already took effect;
    /// the printer reproduces it as part of the verbatim region instead of
    /// printing it as an ordinary comment.
    pub const fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// `/*: T */` style shorthand type annotations must be re-emitted by
    /// the annotated node itself.
    pub const fn is_type_annotation(&self) -> bool {
        self.type_annotation
    }

    pub fn mark_formatted(&self) {
        self.formatted.set(true);
    }

    pub fn is_formatted(&self) -> bool {
        self.formatted.get()
    }
}

impl Ranged for SourceComment {
    fn range(&self) -> TextRange {
        self.range
    }
}

#[derive(Debug, Default)]
struct CommentsData<'a> {
    map: CommentsMap<'a>,
    suppressed: FxHashSet<NodeRefEqualityKey<'a>>,
}

/// The resolved comments of a tree.
///
/// Cheap to clone; the printer passes it around freely while the caller
/// keeps ownership of the tree.
#[derive(Clone, Debug)]
pub struct Comments<'a> {
    data: Rc<CommentsData<'a>>,
}

impl<'a> Comments<'a> {
    pub(crate) fn from_ast(
        root: &'a Node,
        comments: &[Comment],
        locator: &Locator,
        options: &JsFormatOptions,
    ) -> Result<Self, CommentAttachmentError> {
        let mut map = CommentsMap::default();
        let mut suppressed = FxHashSet::default();

        for (index, comment) in comments.iter().enumerate() {
            if !root.range().contains_range(comment.range()) {
                return Err(CommentAttachmentError::CommentOutsideTree {
                    comment: comment.range(),
                    root: root.range(),
                });
            }

            let position = CommentLinePosition::for_range(comment.range(), locator.contents());
            let decorated = decorate_comment(root, *comment, position, options);
            let context = PlacementContext::new(locator, root, index + 1 == comments.len());

            let placement = match place_comment(decorated, &context) {
                CommentPlacement::Default(comment) => resolve_default(comment, locator),
                placement => placement,
            };

            match placement {
                CommentPlacement::Leading { node, comment } => {
                    tracing::trace!(
                        node = node.kind().as_str(),
                        range = ?comment.range(),
                        "attaching leading comment"
                    );
                    record_suppression(&mut suppressed, &comment);
                    map.push_leading(node, source_comment(&comment, None, locator));
                }
                CommentPlacement::Trailing { node, comment } => {
                    tracing::trace!(
                        node = node.kind().as_str(),
                        range = ?comment.range(),
                        "attaching trailing comment"
                    );
                    record_suppression(&mut suppressed, &comment);
                    map.push_trailing(node, source_comment(&comment, None, locator));
                }
                CommentPlacement::Dangling {
                    node,
                    comment,
                    marker,
                } => {
                    tracing::trace!(
                        node = node.kind().as_str(),
                        range = ?comment.range(),
                        marker,
                        "attaching dangling comment"
                    );
                    record_suppression(&mut suppressed, &comment);
                    map.push_dangling(node, source_comment(&comment, marker, locator));
                }
                // `resolve_default` always commits to a node.
                CommentPlacement::Default(_) => unreachable!(),
            }
        }

        Ok(Self {
            data: Rc::new(CommentsData { map, suppressed }),
        })
    }

    pub fn leading_comments(&self, node: &'a Node) -> &[SourceComment] {
        self.data.map.leading(node)
    }

    pub fn dangling_comments(&self, node: &'a Node) -> &[SourceComment] {
        self.data.map.dangling(node)
    }

    pub fn trailing_comments(&self, node: &'a Node) -> &[SourceComment] {
        self.data.map.trailing(node)
    }

    pub fn has_leading_comments(&self, node: &'a Node) -> bool {
        !self.leading_comments(node).is_empty()
    }

    pub fn has_trailing_comments(&self, node: &'a Node) -> bool {
        !self.trailing_comments(node).is_empty()
    }

    pub fn has_dangling_comments(&self, node: &'a Node) -> bool {
        !self.dangling_comments(node).is_empty()
    }

    pub fn has_comments(&self, node: &'a Node) -> bool {
        self.has_leading_comments(node)
            || self.has_dangling_comments(node)
            || self.has_trailing_comments(node)
    }

    /// Whether a suppression pragma targets `node`. The printer reproduces
    /// suppressed nodes verbatim from source.
    pub fn is_suppressed(&self, node: &'a Node) -> bool {
        self.data
            .suppressed
            .contains(&NodeRefEqualityKey::from_ref(node))
    }

    /// Whether `node` prints its own comments instead of leaving them to
    /// the generic comment machinery. True for syntax shapes where generic
    /// interleaving would corrupt the output: markup nodes, shorthand type
    /// annotations, spread members, union and intersection members, and a
    /// class's superclass expression.
    pub fn will_print_own_comments(&self, node: &'a Node, parent: Option<&'a Node>) -> bool {
        let owns_comments = node.kind().is_markup()
            || self
                .trailing_comments(node)
                .iter()
                .any(SourceComment::is_type_annotation)
            || parent.is_some_and(|parent| {
                matches!(
                    parent.kind(),
                    NodeKind::JsxSpreadAttribute
                        | NodeKind::JsxSpreadChild
                        | NodeKind::UnionType
                        | NodeKind::IntersectionType
                ) || (matches!(
                    parent.kind(),
                    NodeKind::ClassDeclaration | NodeKind::ClassExpression
                ) && parent.slot_is("superClass", node))
            });

        // Suppressed regions manage their own comment text as part of the
        // verbatim reproduction, except inside unions and intersections
        // where the member still prints itself.
        owns_comments
            && (!self.is_suppressed(node)
                || parent.is_some_and(|parent| {
                    matches!(
                        parent.kind(),
                        NodeKind::UnionType | NodeKind::IntersectionType
                    )
                }))
    }

    /// A stable rendition of the attachment table for snapshot tests.
    pub fn debug(&'a self, source: &'a str) -> DebugComments<'a> {
        DebugComments::new(&self.data.map, source)
    }
}

fn record_suppression<'a>(
    suppressed: &mut FxHashSet<NodeRefEqualityKey<'a>>,
    comment: &DecoratedComment<'a>,
) {
    if let Some(target) = comment.suppression_target() {
        suppressed.insert(NodeRefEqualityKey::from_ref(target));
    }
}

fn source_comment(
    comment: &DecoratedComment,
    marker: Option<&'static str>,
    locator: &Locator,
) -> SourceComment {
    let type_annotation =
        comment.kind().is_block() && locator.slice(comment.content_range()).starts_with(':');

    SourceComment {
        range: comment.range(),
        kind: comment.kind(),
        position: comment.line_position(),
        marker,
        consumed: comment.is_consumed(),
        type_annotation,
        formatted: Cell::new(false),
    }
}

/// The structural default for comments no handler claimed.
fn resolve_default<'a>(
    comment: DecoratedComment<'a>,
    locator: &Locator,
) -> CommentPlacement<'a> {
    match comment.line_position() {
        CommentLinePosition::OwnLine => {
            if let Some(following) = comment.following_node() {
                CommentPlacement::leading(following, comment)
            } else if let Some(preceding) = comment.preceding_node() {
                CommentPlacement::trailing(preceding, comment)
            } else {
                CommentPlacement::dangling(comment.enclosing_node(), comment)
            }
        }
        CommentLinePosition::EndOfLine => {
            if let Some(preceding) = comment.preceding_node() {
                CommentPlacement::trailing(preceding, comment)
            } else if let Some(following) = comment.following_node() {
                CommentPlacement::leading(following, comment)
            } else {
                CommentPlacement::dangling(comment.enclosing_node(), comment)
            }
        }
        CommentLinePosition::Remaining => {
            // A remaining comment only attaches to a neighbor it is
            // textually adjacent to; anything else dangles rather than
            // silently relocating across unrelated tokens.
            let enclosing = comment.enclosing_node();
            if let Some(following) = comment.following_node() {
                let gap = TextRange::new(comment.end(), following.start());
                if gap_is_empty(locator, gap, enclosing.kind()) {
                    return CommentPlacement::leading(following, comment);
                }
            }
            if let Some(preceding) = comment.preceding_node() {
                let gap = TextRange::new(preceding.end(), comment.start());
                if gap_is_empty(locator, gap, enclosing.kind()) {
                    return CommentPlacement::trailing(preceding, comment);
                }
            }
            CommentPlacement::dangling(enclosing, comment)
        }
    }
}

/// Returns `true` if `gap` contains only trivia and connector tokens.
///
/// The connectors keep degenerate one-member unions and intersections
/// (`type A = /* 1 */ & B`) and parenthesized neighbors attachable. Inside
/// binary and logical expressions an `&` or `|` is an operator, not a
/// connector, so only trivia counts there.
fn gap_is_empty(locator: &Locator, gap: TextRange, enclosing: NodeKind) -> bool {
    let connectors_allowed = !matches!(
        enclosing,
        NodeKind::BinaryExpression | NodeKind::LogicalExpression
    );

    SimpleTokenizer::new(locator.contents(), gap).all(|token| {
        token.kind().is_trivia()
            || (connectors_allowed
                && matches!(
                    token.kind(),
                    SimpleTokenKind::Ampersand | SimpleTokenKind::Bar | SimpleTokenKind::LParen
                ))
    })
}
