//! Structural queries shared by every tree.
//!
//! All of these take the root of a (sub)tree as an `Option` so that an empty tree is just `None`
//! and answers with a neutral value: height 0, no leaves, nothing found.
//!
//! None of the queries recurse. Heights are measured level by level and the diameter is found
//! with a post-order walk driven by an explicit stack, so a tree of any height can be queried.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::node::BinaryNode;
use crate::traverse::{self, Order};

/// The number of levels in the tree: `max(height(left), height(right)) + 1`, with an empty tree
/// having height 0.
///
/// This always walks the tree. It never trusts a stored height.
pub fn height<N: BinaryNode>(root: Option<&N>) -> usize {
    let mut level: VecDeque<&N> = root.into_iter().collect();
    let mut height = 0;
    while !level.is_empty() {
        height += 1;
        for _ in 0..level.len() {
            if let Some(node) = level.pop_front() {
                level.extend(node.left());
                level.extend(node.right());
            }
        }
    }
    height
}

/// The number of nodes with no children.
pub fn leaf_count<N: BinaryNode>(root: Option<&N>) -> usize {
    let mut stack: Vec<&N> = root.into_iter().collect();
    let mut leaves = 0;
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            leaves += 1;
        }
        stack.extend(node.left());
        stack.extend(node.right());
    }
    leaves
}

/// The number of nodes on the longest path between any two nodes of the tree.
///
/// See [`diameter_and_height`].
pub fn diameter<N: BinaryNode>(root: Option<&N>) -> usize {
    diameter_and_height(root).0
}

/// Finds the diameter and the height of the tree in a single post-order pass.
///
/// At every node the longest path bending through it has `height(left) + height(right) + 1`
/// nodes; the diameter is the largest of those. The heights needed for that are the same ones
/// that make up the height of the whole tree, so both come out of the same walk.
///
/// # Examples
///
/// ```
/// use bintree::{query, SearchTree};
///
/// let tree: SearchTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
/// let root = tree.snapshot().map(|view| view.node());
///
/// assert_eq!(query::diameter_and_height(root), (5, 3));
/// ```
pub fn diameter_and_height<N: BinaryNode>(root: Option<&N>) -> (usize, usize) {
    let mut diameter = 0;
    // Heights of finished subtrees, in the order they were finished.
    let mut heights: Vec<usize> = Vec::new();
    let mut stack: Vec<(&N, bool)> = root.into_iter().map(|n| (n, false)).collect();

    while let Some((node, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, true));
            stack.extend(node.right().map(|n| (n, false)));
            stack.extend(node.left().map(|n| (n, false)));
            continue;
        }

        // The left subtree finished first so its height sits below the right one.
        let right = match node.right() {
            Some(_) => heights.pop().unwrap_or(0),
            None => 0,
        };
        let left = match node.left() {
            Some(_) => heights.pop().unwrap_or(0),
            None => 0,
        };
        diameter = diameter.max(left + right + 1);
        heights.push(left.max(right) + 1);
    }

    (diameter, heights.pop().unwrap_or(0))
}

/// Whether the heights of the two subtrees of every node differ by at most one.
///
/// Both heights are recomputed from scratch at every node, which makes this `O(n * height)`. This
/// is the check for trees that don't keep heights; the AVL tree keeps the property by
/// construction and reports it through its stored balance factors instead.
pub fn is_balanced<N: BinaryNode>(root: Option<&N>) -> bool {
    traverse_nodes(root).all(|node| {
        let left = height(node.left());
        let right = height(node.right());
        left.abs_diff(right) <= 1
    })
}

/// Counts the keys in the tree that are strictly less than `key` using the subtree sizes.
///
/// At each node, a `key` less than or equal to the node's key means neither the node nor its
/// right subtree can count, so the search continues left. Otherwise the node and its whole left
/// subtree count and the search continues right. A stored key equal to `key` is never counted.
///
/// The answer is only meaningful when the tree is ordered like a search tree.
///
/// # Examples
///
/// ```
/// use bintree::{query, AvlTree};
///
/// let tree: AvlTree<i32> = [10, 20, 30, 40].into_iter().collect();
/// let root = tree.snapshot().map(|view| view.node());
///
/// assert_eq!(query::order_of_key(root, &25), 2);
/// assert_eq!(query::order_of_key(root, &30), 2);
/// assert_eq!(query::order_of_key(root, &5), 0);
/// ```
pub fn order_of_key<N>(root: Option<&N>, key: &N::Key) -> usize
where
    N: BinaryNode,
    N::Key: Ord,
{
    let mut rank = 0;
    let mut node = root;
    while let Some(n) = node {
        if key <= n.key() {
            node = n.left();
        } else {
            rank += 1 + n.left().map_or(0, |l| l.size());
            node = n.right();
        }
    }
    rank
}

/// Looks for `key` by descending on comparisons. Takes `O(height)` in an ordered tree.
pub fn contains_ordered<N>(root: Option<&N>, key: &N::Key) -> bool
where
    N: BinaryNode,
    N::Key: Ord,
{
    let mut node = root;
    while let Some(n) = node {
        node = match key.cmp(n.key()) {
            Ordering::Less => n.left(),
            Ordering::Equal => return true,
            Ordering::Greater => n.right(),
        };
    }
    false
}

/// Looks for `key` by checking every node. This is the only option when there is no ordering to
/// prune with.
pub fn contains_exhaustive<N>(root: Option<&N>, key: &N::Key) -> bool
where
    N: BinaryNode,
    N::Key: PartialEq,
{
    traverse::traverse(root, Order::Preorder).any(|k| k == key)
}

/// Visits every node (not just every key) in preorder.
fn traverse_nodes<N: BinaryNode>(root: Option<&N>) -> impl Iterator<Item = &N> {
    let mut stack: Vec<&N> = root.into_iter().collect();
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        stack.extend(node.right());
        stack.extend(node.left());
        Some(node)
    })
}
