#[macro_use]
extern crate quickcheck_macros;

mod avl;
mod bst;
mod unordered;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Count the keys less than K
    OrderOfKey(K),
    /// Compare iterators
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::OrderOfKey(K::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
