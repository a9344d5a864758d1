//! The read-only view of a tree's shape that traversal, export and classification are written
//! against.

use crate::arena::{Arena, NodeId};
use crate::node::Links;

/// A binary tree whose nodes live in an arena. Implemented by [`avl::Tree`](crate::avl::Tree) and
/// [`level::Tree`](crate::level::Tree).
pub trait BinaryTree {
    /// The key type stored in every node.
    type Key;
    /// The node type stored in the arena.
    type Node: Links<Self::Key>;

    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<NodeId>;

    /// The arena holding every node reachable from [`BinaryTree::root`].
    fn arena(&self) -> &Arena<Self::Node>;

    /// The key stored at `id`.
    fn key(&self, id: NodeId) -> &Self::Key {
        self.arena()[id].key()
    }

    /// The left child of `id`.
    fn left(&self, id: NodeId) -> Option<NodeId> {
        self.arena()[id].left()
    }

    /// The right child of `id`.
    fn right(&self, id: NodeId) -> Option<NodeId> {
        self.arena()[id].right()
    }

    /// Number of nodes in the tree.
    fn len(&self) -> usize {
        self.arena().len()
    }

    /// Whether the tree has no nodes.
    fn is_empty(&self) -> bool {
        self.root().is_none()
    }
}
