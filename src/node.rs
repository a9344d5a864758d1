//! The tree cells stored in an [`Arena`](crate::arena::Arena).

use crate::arena::NodeId;

/// Read access to a node's key and child links. This is all the shared traversal and
/// classification code needs to know about a node.
pub trait Links<K> {
    /// The key stored in this node.
    fn key(&self) -> &K;
    /// The left child, if any.
    fn left(&self) -> Option<NodeId>;
    /// The right child, if any.
    fn right(&self) -> Option<NodeId>;
}

/// A node of the level-filled tree. It only knows its key and children.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

impl<K> Links<K> for Node<K> {
    fn key(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<NodeId> {
        self.left
    }

    fn right(&self) -> Option<NodeId> {
        self.right
    }
}

/// A node of the AVL tree.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<K> AvlNode<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }
}

impl<K> Links<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<NodeId> {
        self.left
    }

    fn right(&self) -> Option<NodeId> {
        self.right
    }
}
