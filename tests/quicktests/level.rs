use bintree::level::Tree;
use bintree::{Error, Order};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a plain `Vec` holding the keys in
/// level order. Removal mirrors the tree: the last key moves into the first
/// matching position.
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
            Op::Remove(k) => {
                let removed = tree.remove(k);
                match model.iter().position(|x| x == k) {
                    Some(pos) => {
                        model.swap_remove(pos);
                        assert_eq!(removed, Ok(k.clone()));
                    }
                    None => assert_eq!(removed, Err(Error::KeyNotFound)),
                }
            }
            Op::Traverse(order) => {
                tree.traverse(*order);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.traverse(Order::LevelOrder) == model
}

#[quickcheck]
fn insertion_keeps_complete_shape(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    xs.into_iter().all(|x| {
        tree.insert_level_order(x);
        tree.is_complete()
    })
}

#[quickcheck]
fn remove_preserves_shape(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let key = xs[pick % xs.len()];

    // Every inserted key except one instance of `key`.
    let mut expected_keys = xs.clone();
    let pos = expected_keys.iter().position(|x| *x == key).unwrap();
    expected_keys.remove(pos);
    expected_keys.sort();

    assert_eq!(tree.remove(&key), Ok(key));
    let mut keys = tree.traverse(Order::LevelOrder);
    keys.sort();

    tree.is_complete() && tree.len() == xs.len() - 1 && keys == expected_keys
}

#[quickcheck]
fn filled_levels_are_perfect(levels: u8) -> bool {
    let h = u32::from(levels % 10);
    let count = 2usize.pow(h + 1) - 1;
    let tree: Tree<_> = (0..count).collect();

    tree.is_perfect() && tree.len() == count && tree.height() == h as isize
}

#[quickcheck]
fn level_filled_trees_are_balanced(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let shape = tree.classify();

    shape.complete && shape.balanced && !shape.is_unbalanced()
}
