//! This crate exposes two binary tree engines, mostly for educational purposes.
//!
//! ## AVL tree
//!
//! [`avl::Tree`] is a Binary Search Tree. A BST is typically defined recursively using the notion
//! of a `Node`. A `Node` stores a key and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. An AVL tree additionally keeps the heights of every node's two
//! subtrees within one of each other, rotating nodes after each insert and delete, which bounds
//! the height by `O(lg N)`.
//!
//! ## Level-filled tree
//!
//! [`level::Tree`] ignores key order entirely. Keys fill the tree one level at a time, left to
//! right, the way a binary heap is laid out, and removal always gives up the last slot. The
//! interesting part is asking what shape the result has: the [`classify`] module answers whether a
//! tree is complete, perfect, regular (full) or height-balanced.
//!
//! ## Shared pieces
//!
//! Both trees store their nodes in an [`arena::Arena`] and expose their shape through the
//! [`BinaryTree`] trait. On top of that sit the traversals ([`Order`]), grouping by depth, and a
//! key-only [`Graph`] export for code that wants to lay out or draw a tree.
//!
//! ```
//! use bintree::{avl, level, Order};
//!
//! let mut ordered = avl::Tree::new();
//! let mut filled = level::Tree::new();
//! for key in [3, 1, 4, 5, 9, 2] {
//!     ordered.insert(key);
//!     filled.insert_level_order(key);
//! }
//!
//! assert_eq!(ordered.traverse(Order::InOrder), vec![1, 2, 3, 4, 5, 9]);
//! assert_eq!(filled.traverse(Order::LevelOrder), vec![3, 1, 4, 5, 9, 2]);
//! assert!(filled.is_complete());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;
pub mod avl;
pub mod classify;
mod error;
pub mod graph;
mod key;
pub mod level;
pub mod node;
pub mod traverse;
mod tree;

pub use error::{Error, Result};
pub use graph::{Graph, GraphNode};
pub use key::Real;
pub use traverse::Order;
pub use tree::BinaryTree;

#[cfg(test)]
mod test;
