use bintree::{AvlTree, BinaryNode, NodeView, Order};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// the tree agrees with the set about what is stored and how it ranks.
fn do_ops<K>(ops: &[Op<K>], tree: &mut AvlTree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(tree.insert(k.clone()), set.insert(k.clone()));
            }
            Op::OrderOfKey(k) => {
                let expected = set.iter().filter(|x| *x < k).count();
                assert_eq!(tree.order_of_key(k), expected);
            }
            Op::Iter => {
                assert!(tree.iter().eq(set.iter()));
            }
        }
    }
}

/// Whether every node in the view has a balance factor of magnitude at most one.
fn all_balanced<K>(view: Option<NodeView<'_, bintree::AvlNode<K>>>) -> bool {
    let mut stack: Vec<_> = view.into_iter().collect();
    while let Some(node) = stack.pop() {
        if node.balance_factor().abs() > 1 {
            return false;
        }
        stack.extend(node.left());
        stack.extend(node.right());
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = AvlTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len()
}

#[quickcheck]
fn balanced_after_every_insert(xs: Vec<i32>) -> bool {
    let mut tree = AvlTree::new();
    xs.into_iter().all(|x| {
        tree.insert(x);
        all_balanced(tree.snapshot())
    })
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree: AvlTree<i32> = xs.into_iter().collect();
    let keys: Vec<_> = tree.traverse(Order::Inorder).collect();

    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn len_counts_distinct_keys(xs: Vec<i16>) -> bool {
    let tree: AvlTree<i16> = xs.iter().copied().collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len()
        && tree.snapshot().map_or(0, |root| root.node().size()) == distinct.len()
}

#[quickcheck]
fn order_of_key_counts_smaller_keys(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree: AvlTree<i8> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    probes
        .iter()
        .all(|p| tree.order_of_key(p) == set.iter().filter(|x| *x < p).count())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: AvlTree<i8> = xs.iter().copied().collect();
    let before: Vec<_> = tree.traverse(Order::Preorder).copied().collect();

    let added: BTreeSet<_> = xs.into_iter().collect();
    let all_missing = nots
        .iter()
        .filter(|x| !added.contains(x))
        .all(|x| !tree.contains(x));

    let after: Vec<_> = tree.traverse(Order::Preorder).copied().collect();
    all_missing && before == after
}

#[quickcheck]
fn height_is_logarithmic(n: u16) -> bool {
    let n = usize::from(n % 2048) + 1;
    let tree: AvlTree<usize> = (0..n).collect();

    // An AVL tree of n nodes is never taller than about 1.44 lg(n + 2).
    let bound = 1.45 * ((n + 2) as f64).log2();
    (tree.height() as f64) <= bound
}
