use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bintree::{AvlTree, SearchTree};

enum TreeEnum<K> {
    Search(SearchTree<K>),
    Avl(AvlTree<K>),
}

impl<K: Ord> TreeEnum<K> {
    fn contains(&self, k: &K) -> bool {
        match self {
            Self::Search(t) => t.contains(k),
            Self::Avl(t) => t.contains(k),
        }
    }

    fn insert(&mut self, k: K) -> bool {
        match self {
            Self::Search(t) => t.insert(k),
            Self::Avl(t) => t.insert(k),
        }
    }

    fn order_of_key(&self, k: &K) -> usize {
        match self {
            Self::Search(t) => t.order_of_key(k),
            Self::Avl(t) => t.order_of_key(k),
        }
    }
}

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> i32 {
    2i32.pow(num_levels) - 1
}

/// Keys in an order that fills a search tree level by level, so that it comes out balanced even
/// without rebalancing.
fn balanced_order(xs: &[i32], out: &mut Vec<i32>) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        out.push(xs[mid]);
        balanced_order(&xs[..mid], out);
        balanced_order(&xs[mid + 1..], out);
    }
}

/// Builds every tree under test for `num_levels`: both kinds, fed ascending keys (a chain for the
/// search tree) and keys in balanced order.
fn trees(num_levels: u32) -> Vec<(&'static str, TreeEnum<i32>)> {
    let ascending: Vec<i32> = (0..num_nodes_in_full_tree(num_levels)).collect();
    let mut balanced = Vec::with_capacity(ascending.len());
    balanced_order(&ascending, &mut balanced);

    vec![
        (
            "search-ascending",
            TreeEnum::Search(ascending.iter().copied().collect()),
        ),
        (
            "search-balanced",
            TreeEnum::Search(balanced.iter().copied().collect()),
        ),
        (
            "avl-ascending",
            TreeEnum::Avl(ascending.iter().copied().collect()),
        ),
        (
            "avl-balanced",
            TreeEnum::Avl(balanced.iter().copied().collect()),
        ),
    ]
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs it against trees of various sizes,
/// kinds, and shapes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&TreeEnum<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let largest_key = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in trees(num_levels) {
            let id = BenchmarkId::new(name, largest_key);
            group.bench_with_input(id, &largest_key, |b, &key| b.iter(|| f(&tree, key)));
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        black_box(tree.contains(&i));
    });
    bench_helper(c, "contains-miss", |tree, i| {
        black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "order-of-key", |tree, i| {
        black_box(tree.order_of_key(&i));
    });

    let mut group = c.benchmark_group("insert-ascending");
    for num_levels in [3, 7, 11] {
        let num_nodes = num_nodes_in_full_tree(num_levels);
        for name in ["search", "avl"] {
            group.bench_function(BenchmarkId::new(name, num_nodes), |b| {
                b.iter(|| {
                    let mut tree = match name {
                        "search" => TreeEnum::Search(SearchTree::new()),
                        _ => TreeEnum::Avl(AvlTree::new()),
                    };
                    for x in 0..num_nodes {
                        tree.insert(black_box(x));
                    }
                    tree
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
