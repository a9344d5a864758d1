#[macro_use]
extern crate quickcheck_macros;

use bintree::Order;
use quickcheck::{Arbitrary, Gen};

mod avl;
mod level;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Remove the K from the tree
    Remove(K),
    /// Take a traversal
    Traverse(Order),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Traverse(*g.choose(&Order::ALL).unwrap()),
            _ => unreachable!(),
        }
    }
}

/// Routes the trees' `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
