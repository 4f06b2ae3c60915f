use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use quill_js_ast::Node;

use super::node_key::NodeRefEqualityKey;
use super::SourceComment;

/// The comments of a single node, split by attachment role.
#[derive(Debug, Default)]
struct CommentsByNode {
    leading: SmallVec<[SourceComment; 4]>,
    dangling: SmallVec<[SourceComment; 4]>,
    trailing: SmallVec<[SourceComment; 4]>,
}

/// Side table from node identity to that node's attached comments.
///
/// Comments are pushed in source order by the driver, so each list stays
/// sorted by source start without re-sorting.
#[derive(Debug, Default)]
pub(super) struct CommentsMap<'a> {
    entries: FxHashMap<NodeRefEqualityKey<'a>, CommentsByNode>,
}

impl<'a> CommentsMap<'a> {
    pub(super) fn push_leading(&mut self, node: &'a Node, comment: SourceComment) {
        self.entry(node).leading.push(comment);
    }

    pub(super) fn push_dangling(&mut self, node: &'a Node, comment: SourceComment) {
        self.entry(node).dangling.push(comment);
    }

    pub(super) fn push_trailing(&mut self, node: &'a Node, comment: SourceComment) {
        self.entry(node).trailing.push(comment);
    }

    pub(super) fn leading(&self, node: &'a Node) -> &[SourceComment] {
        self.get(node).map_or(&[], |comments| &comments.leading)
    }

    pub(super) fn dangling(&self, node: &'a Node) -> &[SourceComment] {
        self.get(node).map_or(&[], |comments| &comments.dangling)
    }

    pub(super) fn trailing(&self, node: &'a Node) -> &[SourceComment] {
        self.get(node).map_or(&[], |comments| &comments.trailing)
    }

    /// The nodes that have at least one attached comment, in arbitrary order.
    pub(super) fn keys(&self) -> impl Iterator<Item = NodeRefEqualityKey<'a>> + '_ {
        self.entries.keys().copied()
    }

    fn entry(&mut self, node: &'a Node) -> &mut CommentsByNode {
        self.entries
            .entry(NodeRefEqualityKey::from_ref(node))
            .or_default()
    }

    fn get(&self, node: &'a Node) -> Option<&CommentsByNode> {
        self.entries.get(&NodeRefEqualityKey::from_ref(node))
    }
}
