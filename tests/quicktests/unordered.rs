use bintree::{BinaryTree, Order};

#[quickcheck]
fn level_order_round_trips(xs: Vec<i32>) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.push_level_order(*x);
    }

    tree.traverse(Order::LevelOrder).copied().eq(xs.iter().copied()) && tree.len() == xs.len()
}

#[quickcheck]
fn push_level_order_matches_from_level_order(xs: Vec<i32>) -> bool {
    let mut pushed = BinaryTree::new();
    for x in &xs {
        pushed.push_level_order(*x);
    }
    let built = BinaryTree::from_level_order(xs.into_iter().map(Some));

    [
        Order::Inorder,
        Order::Preorder,
        Order::Postorder,
        Order::LevelOrder,
    ]
    .into_iter()
    .all(|order| pushed.traverse(order).eq(built.traverse(order)))
}

#[quickcheck]
fn complete_trees_are_balanced(n: u8) -> bool {
    let tree = BinaryTree::from_level_order((0..n).map(Some));

    tree.is_balanced() && tree.len() == usize::from(n)
}

#[quickcheck]
fn every_key_is_found(xs: Vec<Option<i8>>) -> bool {
    let tree = BinaryTree::from_level_order(xs);
    let keys: Vec<_> = tree.traverse(Order::Preorder).copied().collect();

    keys.len() == tree.len() && keys.iter().all(|k| tree.contains(k))
}
