//! Traversals shared by both trees. Every walk returns a fully materialized `Vec` of keys rather
//! than a lazy iterator, so the result can be handed to a presentation layer as-is.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::tree::BinaryTree;

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Sorted order for the AVL tree.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Breadth-first: by depth, left to right within a depth.
    LevelOrder,
}

impl Order {
    /// Every order, depth-first ones first.
    pub const ALL: [Order; 4] = [
        Order::InOrder,
        Order::PreOrder,
        Order::PostOrder,
        Order::LevelOrder,
    ];

    fn name(self) -> &'static str {
        match self {
            Order::InOrder => "in-order",
            Order::PreOrder => "pre-order",
            Order::PostOrder => "post-order",
            Order::LevelOrder => "level-order",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Order::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownOrder(s.to_string()))
    }
}

/// Collects the keys of `tree` in the given `order`.
pub fn traverse<T>(tree: &T, order: Order) -> Vec<T::Key>
where
    T: BinaryTree,
    T::Key: Clone,
{
    let mut keys = Vec::with_capacity(tree.len());
    let Some(root) = tree.root() else {
        return keys;
    };

    match order {
        Order::PreOrder => {
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                keys.push(tree.key(id).clone());
                // Right goes on first so left comes off first.
                stack.extend(tree.right(id));
                stack.extend(tree.left(id));
            }
        }
        Order::InOrder => {
            let mut stack = Vec::new();
            let mut current = Some(root);
            loop {
                while let Some(id) = current {
                    stack.push(id);
                    current = tree.left(id);
                }
                let Some(id) = stack.pop() else {
                    break;
                };
                keys.push(tree.key(id).clone());
                current = tree.right(id);
            }
        }
        Order::PostOrder => {
            // Node, right, left reversed is left, right, node.
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                keys.push(tree.key(id).clone());
                stack.extend(tree.left(id));
                stack.extend(tree.right(id));
            }
            keys.reverse();
        }
        Order::LevelOrder => {
            let mut queue = VecDeque::from([root]);
            while let Some(id) = queue.pop_front() {
                keys.push(tree.key(id).clone());
                queue.extend(tree.left(id));
                queue.extend(tree.right(id));
            }
        }
    }

    keys
}

/// Groups the keys of `tree` by depth. The first entry holds the root, the next its children, and
/// so on, each level listed left to right. An empty tree has no levels.
pub fn levels<T>(tree: &T) -> Vec<Vec<T::Key>>
where
    T: BinaryTree,
    T::Key: Clone,
{
    let mut levels: Vec<Vec<T::Key>> = Vec::new();
    let mut queue = VecDeque::new();
    queue.extend(tree.root().map(|root| (root, 0)));

    while let Some((id, depth)) = queue.pop_front() {
        if levels.len() == depth {
            levels.push(Vec::new());
        }
        levels[depth].push(tree.key(id).clone());
        queue.extend(tree.left(id).map(|left| (left, depth + 1)));
        queue.extend(tree.right(id).map(|right| (right, depth + 1)));
    }

    levels
}
