use bintree::avl::Tree;
use bintree::{classify, BinaryTree, Order};

use std::collections::BTreeSet;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
            Op::Traverse(order) => {
                bst.traverse(*order);
            }
        }
    }
}

/// Checks the AVL balance invariant at every node using only the exported shape.
fn balanced_everywhere<T: BinaryTree>(tree: &T) -> bool {
    fn height<T: BinaryTree>(tree: &T, node: Option<bintree::arena::NodeId>) -> Option<usize> {
        let Some(id) = node else {
            return Some(0);
        };
        let left = height(tree, tree.left(id))?;
        let right = height(tree, tree.right(id))?;
        (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
    }

    height(tree, tree.root()).is_some()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.traverse(Order::InOrder) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn stays_balanced(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    balanced_everywhere(&tree) && classify::is_balanced(&tree)
}

#[quickcheck]
fn in_order_is_non_decreasing(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.traverse(Order::InOrder)
        .windows(2)
        .all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let still_present = xs.iter().filter(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.clone().all(|x| tree.contains(x))
        && tree.len() == still_present.collect::<BTreeSet<_>>().len()
}

#[quickcheck]
fn deleting_absent_key_is_idempotent(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != missing).collect();
    let before: Vec<_> = Order::ALL.iter().map(|o| tree.traverse(*o)).collect();

    !tree.delete(&missing) && Order::ALL.iter().map(|o| tree.traverse(*o)).eq(before)
}

#[quickcheck]
fn graph_matches_traversal(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let graph = tree.export_graph();

    let keys: Vec<_> = graph.nodes.iter().map(|node| node.key).collect();
    keys == tree.traverse(Order::LevelOrder)
        && graph.edges().count() == tree.len().saturating_sub(1)
}
