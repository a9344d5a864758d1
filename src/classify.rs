//! Read-only shape predicates. Written against [`BinaryTree`] so they work for either tree, though
//! they're mostly interesting for the [level-filled tree](crate::level::Tree).
//!
//! Every predicate is a single O(n) walk and nothing is cached between calls.
//!
//! Note the height convention here: an empty tree has height `-1` and a single node height `0`.
//! The AVL tree's own bookkeeping counts levels instead (empty `0`, leaf `1`). The perfect-tree
//! formula below depends on the `-1` convention.

use std::collections::VecDeque;

use crate::arena::NodeId;
use crate::tree::BinaryTree;

/// Every classification of a tree at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// See [`is_complete`].
    pub complete: bool,
    /// See [`is_perfect`].
    pub perfect: bool,
    /// See [`is_regular`].
    pub regular: bool,
    /// See [`is_balanced`].
    pub balanced: bool,
}

impl Classification {
    /// The negation of [`Classification::balanced`].
    pub fn is_unbalanced(&self) -> bool {
        !self.balanced
    }
}

/// Runs every predicate over `tree`.
pub fn classify<T: BinaryTree>(tree: &T) -> Classification {
    Classification {
        complete: is_complete(tree),
        perfect: is_perfect(tree),
        regular: is_regular(tree),
        balanced: is_balanced(tree),
    }
}

/// The number of edges on the longest root-to-leaf path: `-1` for an empty tree, `0` for a lone
/// root.
pub fn height<T: BinaryTree>(tree: &T) -> isize {
    fn walk<T: BinaryTree>(tree: &T, node: Option<NodeId>) -> isize {
        match node {
            None => -1,
            Some(id) => 1 + walk(tree, tree.left(id)).max(walk(tree, tree.right(id))),
        }
    }

    walk(tree, tree.root())
}

/// Whether every node has either no children or two (a "full" tree). An empty tree is regular.
pub fn is_regular<T: BinaryTree>(tree: &T) -> bool {
    let mut stack = Vec::new();
    stack.extend(tree.root());
    while let Some(id) = stack.pop() {
        let (left, right) = (tree.left(id), tree.right(id));
        if left.is_some() != right.is_some() {
            return false;
        }
        stack.extend(left);
        stack.extend(right);
    }
    true
}

/// Whether the node count is exactly `2^(height + 1) - 1`, i.e. every level is full. An empty
/// tree is perfect.
pub fn is_perfect<T: BinaryTree>(tree: &T) -> bool {
    let levels = (height(tree) + 1) as u32;
    match 1usize.checked_shl(levels) {
        Some(capacity) => tree.len() == capacity - 1,
        // More levels than a usize can count nodes for can't all be full.
        None => false,
    }
}

/// Whether a breadth-first walk that also queues missing children never meets a node after its
/// first gap. An empty tree is complete.
pub fn is_complete<T: BinaryTree>(tree: &T) -> bool {
    let Some(root) = tree.root() else {
        return true;
    };

    let mut queue = VecDeque::from([Some(root)]);
    let mut seen_gap = false;
    while let Some(slot) = queue.pop_front() {
        match slot {
            None => seen_gap = true,
            Some(_) if seen_gap => return false,
            Some(id) => {
                queue.push_back(tree.left(id));
                queue.push_back(tree.right(id));
            }
        }
    }
    true
}

/// Whether, at every node, both subtrees are balanced and their heights differ by at most one. An
/// empty tree is balanced.
pub fn is_balanced<T: BinaryTree>(tree: &T) -> bool {
    /// The subtree's height if it is balanced. `None` propagates straight up once any subtree
    /// fails.
    fn walk<T: BinaryTree>(tree: &T, node: Option<NodeId>) -> Option<isize> {
        let Some(id) = node else {
            return Some(-1);
        };
        let left = walk(tree, tree.left(id))?;
        let right = walk(tree, tree.right(id))?;
        if left.abs_diff(right) > 1 {
            return None;
        }
        Some(1 + left.max(right))
    }

    walk(tree, tree.root()).is_some()
}

/// The negation of [`is_balanced`].
pub fn is_unbalanced<T: BinaryTree>(tree: &T) -> bool {
    !is_balanced(tree)
}
