use bintree::{Duplicates, Order, SearchTree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a sorted vector holding every key inserted, with
/// repeats, since the default tree keeps duplicates.
fn do_ops(ops: &[Op<i8>], tree: &mut SearchTree<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                assert!(tree.insert(k));
                let at = model.partition_point(|x| *x <= k);
                model.insert(at, k);
            }
            Op::OrderOfKey(k) => {
                assert_eq!(tree.order_of_key(&k), model.partition_point(|x| *x < k));
            }
            Op::Iter => {
                assert!(tree.iter().eq(model.iter()));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = SearchTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.len() == model.len()
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i32>) -> bool {
    let tree: SearchTree<i32> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.traverse(Order::Inorder).copied().eq(sorted)
}

#[quickcheck]
fn ignoring_duplicates_matches_a_set(xs: Vec<i8>) -> bool {
    let mut tree = SearchTree::with_duplicates(Duplicates::Ignore);
    let mut set = BTreeSet::new();

    xs.into_iter().all(|x| tree.insert(x) == set.insert(x)) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: SearchTree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: SearchTree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn diameter_never_exceeds_twice_the_height(xs: Vec<i16>) -> bool {
    let tree: SearchTree<i16> = xs.into_iter().collect();
    let (height, diameter) = (tree.height(), tree.diameter());

    diameter >= height && diameter <= (2 * height).saturating_sub(1)
}
