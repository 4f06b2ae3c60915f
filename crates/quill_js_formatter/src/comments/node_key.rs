use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use quill_js_ast::Node;

/// Used as key into the map storing the comments per node by
/// [`Comments`](super::Comments).
///
/// Implements equality and hashing based on the node's address: nodes have
/// no value identity, and comparing pointers is both cheap and correct for
/// a tree that is immutable for the lifetime of the pass.
#[derive(Copy, Clone)]
pub(super) struct NodeRefEqualityKey<'a> {
    node: &'a Node,
}

impl<'a> NodeRefEqualityKey<'a> {
    pub(super) const fn from_ref(node: &'a Node) -> Self {
        Self { node }
    }

    pub(super) const fn node(&self) -> &'a Node {
        self.node
    }
}

impl Debug for NodeRefEqualityKey<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.node.fmt(f)
    }
}

impl PartialEq for NodeRefEqualityKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node.ptr_eq(other.node)
    }
}

impl Eq for NodeRefEqualityKey<'_> {}

impl Hash for NodeRefEqualityKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::from_ref(self.node).hash(state);
    }
}

impl<'a> From<&'a Node> for NodeRefEqualityKey<'a> {
    fn from(value: &'a Node) -> Self {
        NodeRefEqualityKey::from_ref(value)
    }
}
