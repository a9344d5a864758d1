//! A detached parent-to-children view of a tree, for code that wants to lay out or draw it.

use std::collections::VecDeque;

use crate::tree::BinaryTree;

/// One node of an exported [`Graph`] together with the keys of its present children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode<K> {
    /// This node's key.
    pub key: K,
    /// The key of the left child, if there is one.
    pub left: Option<K>,
    /// The key of the right child, if there is one.
    pub right: Option<K>,
}

/// The topology of a tree expressed purely in keys. Nodes are listed breadth-first, so the first
/// node (when there is one) is the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<K> {
    /// The root's key, or `None` for an empty tree.
    pub root: Option<K>,
    /// Every node, breadth-first.
    pub nodes: Vec<GraphNode<K>>,
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self {
            root: None,
            nodes: Vec::new(),
        }
    }
}

impl<K> Graph<K> {
    /// Builds the graph of `tree`.
    pub fn of<T>(tree: &T) -> Self
    where
        T: BinaryTree<Key = K>,
        K: Clone,
    {
        let mut graph = Graph {
            root: tree.root().map(|root| tree.key(root).clone()),
            nodes: Vec::with_capacity(tree.len()),
        };
        let mut queue = VecDeque::new();
        queue.extend(tree.root());

        while let Some(id) = queue.pop_front() {
            let left = tree.left(id);
            let right = tree.right(id);
            graph.nodes.push(GraphNode {
                key: tree.key(id).clone(),
                left: left.map(|l| tree.key(l).clone()),
                right: right.map(|r| tree.key(r).clone()),
            });
            queue.extend(left);
            queue.extend(right);
        }

        graph
    }

    /// Whether the exported tree had no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every `(parent, child)` pair, breadth-first, left child before right.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.nodes.iter().flat_map(|node| {
            node.left
                .iter()
                .chain(node.right.iter())
                .map(move |child| (&node.key, child))
        })
    }

    /// The present children of the node holding `key`, left first. `None` if no node holds it.
    ///
    /// When several nodes hold an equal key (possible in the level-filled tree) the first one in
    /// breadth-first order answers.
    pub fn children(&self, key: &K) -> Option<Vec<&K>>
    where
        K: PartialEq,
    {
        self.nodes
            .iter()
            .find(|node| &node.key == key)
            .map(|node| node.left.iter().chain(node.right.iter()).collect())
    }
}
