//! The syntax tree model consumed by the comment attachment pass.
//!
//! Nodes are produced by an external parser. A node carries its syntax
//! category ([`NodeKind`]), its half-open source range, and its children in
//! named slots, flattened in source order. The tree is immutable once built;
//! all annotations produced by later passes live in side tables keyed by node
//! identity.

use std::fmt::{Debug, Formatter};

use text_size::{TextRange, TextSize};

mod kind;

pub use kind::NodeKind;

/// Types that are located in the source text.
pub trait Ranged {
    fn range(&self) -> TextRange;

    fn start(&self) -> TextSize {
        self.range().start()
    }

    fn end(&self) -> TextSize {
        self.range().end()
    }
}

impl<T> Ranged for &T
where
    T: Ranged,
{
    fn range(&self) -> TextRange {
        T::range(self)
    }
}

/// A single syntax tree node.
pub struct Node {
    kind: NodeKind,
    range: TextRange,
    children: Vec<Child>,
}

struct Child {
    slot: &'static str,
    node: Node,
}

impl Node {
    pub fn new(kind: NodeKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            children: Vec::new(),
        }
    }

    /// Adds a child under `slot`, keeping the flattened child sequence
    /// ordered by source start.
    #[must_use]
    pub fn with_child(mut self, slot: &'static str, node: Node) -> Self {
        let index = self
            .children
            .partition_point(|child| child.node.start() <= node.start());
        self.children.insert(index, Child { slot, node });
        self
    }

    /// Adds every node in `nodes` under the same `slot`.
    #[must_use]
    pub fn with_children(mut self, slot: &'static str, nodes: Vec<Node>) -> Self {
        for node in nodes {
            self = self.with_child(slot, node);
        }
        self
    }

    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The children in source order, across all slots.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().map(|child| &child.node)
    }

    /// The children in source order, with the slot each one occupies.
    pub fn child_slots(&self) -> impl Iterator<Item = (&'static str, &Node)> {
        self.children.iter().map(|child| (child.slot, &child.node))
    }

    /// The first child stored under `slot`.
    pub fn slot(&self, slot: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|child| child.slot == slot)
            .map(|child| &child.node)
    }

    /// All children stored under `slot`, in source order.
    pub fn slot_list(&self, slot: &'static str) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(move |child| child.slot == slot)
            .map(|child| &child.node)
    }

    /// Returns `true` if the first child of `slot` is `node` itself.
    pub fn slot_is(&self, slot: &str, node: &Node) -> bool {
        self.slot(slot).is_some_and(|child| child.ptr_eq(node))
    }

    /// Referential equality. Nodes have no value identity; two distinct
    /// nodes with equal kinds and ranges are still different nodes.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Ranged for Node {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct(self.kind.as_str());
        debug.field("range", &self.range);
        for child in &self.children {
            debug.field(child.slot, &child.node);
        }
        debug.finish()
    }
}

/// The delimiter style of a comment token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, is_macro::Is)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// A comment token as produced by the parser. Comments never appear in the
/// tree itself; attaching them to nodes is the formatter's job.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    range: TextRange,
    kind: CommentKind,
}

impl Comment {
    pub const fn new(kind: CommentKind, range: TextRange) -> Self {
        Self { range, kind }
    }

    pub const fn kind(&self) -> CommentKind {
        self.kind
    }

    /// The comment text without its delimiters.
    pub fn content_range(&self) -> TextRange {
        match self.kind {
            CommentKind::Line => TextRange::new(self.range.start() + TextSize::from(2), self.range.end()),
            CommentKind::Block => TextRange::new(
                self.range.start() + TextSize::from(2),
                self.range.end() - TextSize::from(2),
            ),
        }
    }
}

impl Ranged for Comment {
    fn range(&self) -> TextRange {
        self.range
    }
}
