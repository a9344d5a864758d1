//! A self-balancing Binary Search Tree (specifically, an AVL tree) storing bare keys.
//!
//! After every insertion or deletion each ancestor of the changed position is rebalanced on the
//! way back up, so the heights of any node's two subtrees never differ by more than one.
//!
//! # Examples
//!
//! ```
//! use bintree::avl::Tree;
//! use bintree::Order;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Keys are unique, inserting one again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Ascending inserts still produce a balanced tree.
//! tree.insert(2);
//! tree.insert(3);
//! assert_eq!(tree.traverse(Order::PreOrder), vec![2, 1, 3]);
//!
//! assert!(tree.delete(&2));
//! assert_eq!(tree.traverse(Order::InOrder), vec![1, 3]);
//! ```

use std::cmp::Ordering;

use log::{debug, trace};

use crate::arena::{Arena, NodeId};
use crate::graph::Graph;
use crate::node::AvlNode;
use crate::traverse::{self, Order};
use crate::tree::BinaryTree;

/// An AVL tree of unique keys. This can be used for inserting, finding, and deleting keys, and for
/// listing them in any [`Order`].
#[derive(Clone, Debug)]
pub struct Tree<K> {
    arena: Arena<AvlNode<K>>,
    root: Option<NodeId>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> BinaryTree for Tree<K> {
    type Key = K;
    type Node = AvlNode<K>;

    fn root(&self) -> Option<NodeId> {
        self.root
    }

    fn arena(&self) -> &Arena<AvlNode<K>> {
        &self.arena
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Generates a new, empty `Tree` with room for `capacity` keys before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// The number of levels in the tree. An empty tree has height 0, a single node has height 1.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Inserts `key`, returning whether it was added. A key that is already present leaves the tree
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let (root, inserted) = self.insert_at(self.root, key);
        self.root = Some(root);
        debug!("avl insert: added={} len={}", inserted, self.len());
        inserted
    }

    /// Deletes the node holding `key`, returning whether there was one. A node with two children
    /// takes its in-order successor's key, and the successor is removed from the right subtree
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let (root, deleted) = self.delete_at(self.root, key);
        self.root = root;
        debug!("avl delete: removed={} len={}", deleted, self.len());
        deleted
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return true,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// The smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        self.root.map(|root| &self.arena[self.leftmost(root)].key)
    }

    /// The largest key, if any.
    pub fn max(&self) -> Option<&K> {
        let mut current = self.root?;
        while let Some(right) = self.arena[current].right {
            current = right;
        }
        Some(&self.arena[current].key)
    }

    /// Lists every key in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::avl::Tree;
    /// use bintree::Order;
    ///
    /// let tree: Tree<_> = [4, 2, 6, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::InOrder), vec![1, 2, 3, 4, 6]);
    /// assert_eq!(tree.traverse(Order::PreOrder), vec![4, 2, 1, 3, 6]);
    /// assert_eq!(tree.traverse(Order::PostOrder), vec![1, 3, 2, 6, 4]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<K>
    where
        K: Clone,
    {
        traverse::traverse(self, order)
    }

    /// Keys grouped by depth, root first.
    pub fn levels(&self) -> Vec<Vec<K>>
    where
        K: Clone,
    {
        traverse::levels(self)
    }

    /// A key-only copy of the tree's shape.
    pub fn export_graph(&self) -> Graph<K>
    where
        K: Clone,
    {
        Graph::of(self)
    }

    fn height_of(&self, node: Option<NodeId>) -> usize {
        node.map_or(0, |id| self.arena[id].height)
    }

    /// Adjusts the height of `id` to be the max of its children's heights + 1.
    fn fix_height(&mut self, id: NodeId) {
        let node = &self.arena[id];
        let height = self.height_of(node.left).max(self.height_of(node.right)) + 1;
        self.arena[id].height = height;
    }

    /// The height of the left subtree minus the height of the right subtree.
    fn balance_factor(&self, id: NodeId) -> isize {
        let node = &self.arena[id];
        self.height_of(node.left) as isize - self.height_of(node.right) as isize
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    /// Inserts into the subtree rooted at `node` and returns the subtree's new root along with
    /// whether anything was added.
    fn insert_at(&mut self, node: Option<NodeId>, key: K) -> (NodeId, bool)
    where
        K: Ord,
    {
        let Some(id) = node else {
            return (self.arena.alloc(AvlNode::new(key)), true);
        };

        let inserted = match key.cmp(&self.arena[id].key) {
            Ordering::Less => {
                let (left, inserted) = self.insert_at(self.arena[id].left, key);
                self.arena[id].left = Some(left);
                inserted
            }
            Ordering::Equal => return (id, false),
            Ordering::Greater => {
                let (right, inserted) = self.insert_at(self.arena[id].right, key);
                self.arena[id].right = Some(right);
                inserted
            }
        };

        if cfg!(debug_assertions) {
            let node = &self.arena[id];
            if let Some(left) = node.left {
                assert!(node.key > self.arena[left].key);
            }
            if let Some(right) = node.right {
                assert!(node.key < self.arena[right].key);
            }
        }

        (self.balance(id), inserted)
    }

    /// Deletes from the subtree rooted at `node` and returns the subtree's new root along with
    /// whether anything was removed.
    fn delete_at(&mut self, node: Option<NodeId>, key: &K) -> (Option<NodeId>, bool)
    where
        K: Ord,
    {
        let Some(id) = node else {
            return (None, false);
        };

        let deleted = match key.cmp(&self.arena[id].key) {
            Ordering::Less => {
                let (left, deleted) = self.delete_at(self.arena[id].left, key);
                self.arena[id].left = left;
                deleted
            }
            Ordering::Greater => {
                let (right, deleted) = self.delete_at(self.arena[id].right, key);
                self.arena[id].right = right;
                deleted
            }
            Ordering::Equal => match (self.arena[id].left, self.arena[id].right) {
                // At most one child: it takes this node's place.
                (None, child) | (child, None) => {
                    self.arena.free(id);
                    return (child, true);
                }
                (Some(_), Some(right)) => {
                    let (right, successor) = self.delete_min(right);
                    self.arena[id].right = right;
                    self.arena[id].key = successor;
                    true
                }
            },
        };

        if !deleted {
            return (Some(id), false);
        }
        (Some(self.balance(id)), true)
    }

    /// Unlinks the smallest node of the subtree rooted at `id`, rebalancing on the way back up.
    /// Returns the subtree's new root and the removed key.
    fn delete_min(&mut self, id: NodeId) -> (Option<NodeId>, K) {
        match self.arena[id].left {
            Some(left) => {
                let (left, key) = self.delete_min(left);
                self.arena[id].left = left;
                (Some(self.balance(id)), key)
            }
            None => {
                let node = self.arena.free(id);
                (node.right, node.key)
            }
        }
    }

    /// Restores the AVL invariant at `id` and returns the root of the (possibly rotated) subtree.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn balance(&mut self, id: NodeId) -> NodeId {
        self.fix_height(id);
        let balance_factor = self.balance_factor(id);

        let new_root = if balance_factor > 1 {
            let left = self.arena[id].left.expect("Left heavy => left child");
            if self.balance_factor(left) < 0 {
                let left = self.rotate_left(left);
                self.arena[id].left = Some(left);
            }
            self.rotate_right(id)
        } else if balance_factor < -1 {
            let right = self.arena[id].right.expect("Right heavy => right child");
            if self.balance_factor(right) > 0 {
                let right = self.rotate_right(right);
                self.arena[id].right = Some(right);
            }
            self.rotate_left(id)
        } else {
            id
        };

        if cfg!(debug_assertions) {
            let node = &self.arena[new_root];
            let left_height = self.height_of(node.left);
            let right_height = self.height_of(node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }

        new_root
    }

    /// Rotates `old_root` to the right. This moves the left child up vertically and `old_root`
    /// down vertically. Used to rebalance the tree when the left child is too tall. As such, it
    /// must only be called when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root             new_root
    ///      /     \              /     \
    ///  new_root   z   rotate ->  x    old_root
    ///   / \                            /  \
    ///  x   y                          y    z
    /// ```
    fn rotate_right(&mut self, old_root: NodeId) -> NodeId {
        let new_root = self.arena[old_root]
            .left
            .expect("Rotate right => left child");
        trace!("rotating {} right under {}", old_root, new_root);

        let moved = self.arena[new_root].right;
        self.arena[old_root].left = moved;
        self.arena[new_root].right = Some(old_root);

        // The old root is now the child so its height has to be fixed first.
        self.fix_height(old_root);
        self.fix_height(new_root);
        new_root
    }

    /// Mirror image of [`Tree::rotate_right`]: the right child moves up and `old_root` becomes its
    /// left child, inheriting the right child's old left subtree.
    fn rotate_left(&mut self, old_root: NodeId) -> NodeId {
        let new_root = self.arena[old_root]
            .right
            .expect("Rotate left => right child");
        trace!("rotating {} left under {}", old_root, new_root);

        let moved = self.arena[new_root].left;
        self.arena[old_root].right = moved;
        self.arena[new_root].left = Some(old_root);

        self.fix_height(old_root);
        self.fix_height(new_root);
        new_root
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
