//! A binary tree filled strictly in level order, giving it the shape of a binary heap.
//!
//! New keys go into the first free slot of a breadth-first scan and removal always gives up the
//! last slot of that scan, so the tree stays complete no matter which key is removed. Keys are
//! not ordered and may repeat.
//!
//! # Examples
//!
//! ```
//! use bintree::level::Tree;
//! use bintree::Order;
//!
//! let mut tree: Tree<_> = (1..=6).collect();
//!
//! assert_eq!(tree.traverse(Order::LevelOrder), vec![1, 2, 3, 4, 5, 6]);
//! assert_eq!(tree.traverse(Order::InOrder), vec![4, 2, 5, 1, 6, 3]);
//! assert!(tree.is_complete());
//! assert!(!tree.is_perfect());
//!
//! // The last key in level order moves into the removed key's place.
//! assert_eq!(tree.remove(&2), Ok(2));
//! assert_eq!(tree.traverse(Order::LevelOrder), vec![1, 6, 3, 4, 5]);
//! ```

use std::collections::VecDeque;

use log::debug;

use crate::arena::{Arena, NodeId};
use crate::classify::{self, Classification};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::node::Node;
use crate::traverse::{self, Order};
use crate::tree::BinaryTree;

#[derive(Copy, Clone, Debug)]
enum Side {
    Left,
    Right,
}

/// A complete binary tree of keys, filled left to right one level at a time.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    arena: Arena<Node<K>>,
    root: Option<NodeId>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> BinaryTree for Tree<K> {
    type Key = K;
    type Node = Node<K>;

    fn root(&self) -> Option<NodeId> {
        self.root
    }

    fn arena(&self) -> &Arena<Node<K>> {
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

    /// Number of keys in the tree, counting repeats.
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

    /// Puts `key` in the first free slot found by a breadth-first scan: the left slot of the first
    /// node missing a left child, or the right slot of the first node missing a right child,
    /// whichever the scan meets first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::level::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_level_order(1);
    /// tree.insert_level_order(2);
    /// tree.insert_level_order(3);
    ///
    /// assert_eq!(tree.levels(), vec![vec![1], vec![2, 3]]);
    /// ```
    pub fn insert_level_order(&mut self, key: K) {
        let Some(root) = self.root else {
            self.root = Some(self.arena.alloc(Node::new(key)));
            debug!("level insert: new root");
            return;
        };

        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let (left, right) = (self.arena[id].left, self.arena[id].right);

            let Some(left) = left else {
                let child = self.arena.alloc(Node::new(key));
                self.arena[id].left = Some(child);
                debug!("level insert: {} under {} (left)", child, id);
                return;
            };
            queue.push_back(left);

            let Some(right) = right else {
                let child = self.arena.alloc(Node::new(key));
                self.arena[id].right = Some(child);
                debug!("level insert: {} under {} (right)", child, id);
                return;
            };
            queue.push_back(right);
        }

        unreachable!("a finite tree always has a free slot");
    }

    /// Removes one occurrence of `key` and returns it.
    ///
    /// The first node holding `key` in breadth-first order is the target. The last node in
    /// breadth-first order is detached from its parent and its key is written over the target's,
    /// so the tree keeps its complete shape. When the target is that last node it is simply
    /// dropped.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] when no node holds `key`. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::level::Tree;
    /// use bintree::{Error, Order};
    ///
    /// let mut tree: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.traverse(Order::LevelOrder), vec![3, 2]);
    /// assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<K>
    where
        K: PartialEq,
    {
        let Some(root) = self.root else {
            debug!("level remove: empty tree");
            return Err(Error::KeyNotFound);
        };

        let mut target = None;
        // The most recently visited node and the link it hangs from.
        let mut last: (NodeId, Option<(NodeId, Side)>) = (root, None);
        let mut queue = VecDeque::from([last]);
        while let Some((id, parent)) = queue.pop_front() {
            let node = &self.arena[id];
            if target.is_none() && node.key == *key {
                target = Some(id);
            }
            last = (id, parent);
            queue.extend(node.left.map(|left| (left, Some((id, Side::Left)))));
            queue.extend(node.right.map(|right| (right, Some((id, Side::Right)))));
        }

        let Some(target) = target else {
            debug!("level remove: key not found");
            return Err(Error::KeyNotFound);
        };

        let (deepest, parent) = last;
        match parent {
            None => self.root = None,
            Some((parent, Side::Left)) => self.arena[parent].left = None,
            Some((parent, Side::Right)) => self.arena[parent].right = None,
        }
        let detached = self.arena.free(deepest);
        debug!(
            "level remove: target {} deepest {} len={}",
            target,
            deepest,
            self.len()
        );

        // Nodes are told apart by position, never by key.
        if target == deepest {
            return Ok(detached.key);
        }
        Ok(std::mem::replace(&mut self.arena[target].key, detached.key))
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        let mut queue = VecDeque::new();
        queue.extend(self.root);
        while let Some(id) = queue.pop_front() {
            let node = &self.arena[id];
            if node.key == *key {
                return true;
            }
            queue.extend(node.left);
            queue.extend(node.right);
        }
        false
    }

    /// Lists every key in the given order.
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

    /// See [`classify::height`].
    pub fn height(&self) -> isize {
        classify::height(self)
    }

    /// See [`classify::is_regular`].
    pub fn is_regular(&self) -> bool {
        classify::is_regular(self)
    }

    /// See [`classify::is_perfect`].
    pub fn is_perfect(&self) -> bool {
        classify::is_perfect(self)
    }

    /// See [`classify::is_complete`].
    pub fn is_complete(&self) -> bool {
        classify::is_complete(self)
    }

    /// See [`classify::is_balanced`].
    pub fn is_balanced(&self) -> bool {
        classify::is_balanced(self)
    }

    /// See [`classify::is_unbalanced`].
    pub fn is_unbalanced(&self) -> bool {
        classify::is_unbalanced(self)
    }

    /// See [`classify::classify`].
    pub fn classify(&self) -> Classification {
        classify::classify(self)
    }
}

impl<K> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert_level_order(key);
        }
    }
}

#[cfg(test)]
impl<K> Tree<K> {
    /// Lets tests wire up shapes that level-order insertion never produces.
    pub(crate) fn arena_mut(&mut self) -> &mut Arena<Node<K>> {
        &mut self.arena
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `Vec` kept in level order.
    /// Removing from the model mirrors the tree: the last key moves into the
    /// first matching position.
    fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, model: &mut Vec<K>)
    where
        K: PartialEq + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    tree.insert_level_order(k.clone());
                    model.push(k.clone());
                }
                Op::Remove(k) => match model.iter().position(|x| x == k) {
                    Some(pos) => {
                        model.swap_remove(pos);
                        assert_eq!(tree.remove(k), Ok(k.clone()));
                    }
                    None => assert_eq!(tree.remove(k), Err(Error::KeyNotFound)),
                },
                Op::Traverse(order) => {
                    assert_eq!(tree.traverse(*order).len(), model.len());
                }
            }
            assert!(tree.is_complete());
            assert_eq!(tree.len(), model.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();

            do_ops(&ops, &mut tree, &mut model);
            tree.traverse(Order::LevelOrder) == model
        }
    }
}
