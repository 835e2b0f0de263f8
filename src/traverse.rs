//! Lazy traversals over any [`BinaryNode`] tree.
//!
//! Every traversal keeps its own stack (or queue, for level order) instead of recursing, so a
//! degenerate tree shaped like a linked list can be walked no matter how tall it is. Traversals
//! only borrow the tree; asking the tree for a new one starts over from the root.
//!
//! # Examples
//!
//! ```
//! use bintree::{Order, SearchTree};
//!
//! let tree: SearchTree<i32> = [4, 2, 6, 1, 3].into_iter().collect();
//!
//! let inorder: Vec<_> = tree.traverse(Order::Inorder).copied().collect();
//! assert_eq!(inorder, [1, 2, 3, 4, 6]);
//!
//! let level_order: Vec<_> = tree.traverse(Order::LevelOrder).copied().collect();
//! assert_eq!(level_order, [4, 2, 6, 1, 3]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::BinaryNode;

/// The four classical orders in which a binary tree can be visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Sorted order for search trees.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
    /// Breadth first, top to bottom and left to right within a level.
    LevelOrder,
}

/// Starts a traversal of the tree rooted at `root` in the given order.
pub fn traverse<N: BinaryNode>(root: Option<&N>, order: Order) -> Traverse<'_, N> {
    match order {
        Order::Inorder => Traverse::Inorder(Inorder::new(root)),
        Order::Preorder => Traverse::Preorder(Preorder::new(root)),
        Order::Postorder => Traverse::Postorder(Postorder::new(root)),
        Order::LevelOrder => Traverse::LevelOrder(LevelOrder::new(root)),
    }
}

/// A traversal in any of the four [`Order`]s. Yields references to the keys.
#[derive(Debug)]
pub enum Traverse<'a, N> {
    /// See [`Inorder`].
    Inorder(Inorder<'a, N>),
    /// See [`Preorder`].
    Preorder(Preorder<'a, N>),
    /// See [`Postorder`].
    Postorder(Postorder<'a, N>),
    /// See [`LevelOrder`].
    LevelOrder(LevelOrder<'a, N>),
}

impl<'a, N: BinaryNode> Iterator for Traverse<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Inorder(it) => it.next(),
            Self::Preorder(it) => it.next(),
            Self::Postorder(it) => it.next(),
            Self::LevelOrder(it) => it.next(),
        }
    }
}

impl<'a, N: BinaryNode> FusedIterator for Traverse<'a, N> {}

/// Inorder traversal. The stack holds the left spine of the part of the tree not yet visited.
#[derive(Debug)]
pub struct Inorder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: BinaryNode> Inorder<'a, N> {
    fn new(root: Option<&'a N>) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N: BinaryNode> Iterator for Inorder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

/// Preorder traversal.
#[derive(Debug)]
pub struct Preorder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: BinaryNode> Preorder<'a, N> {
    fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, N: BinaryNode> Iterator for Preorder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

/// Postorder traversal. A node is pushed once to expand its children and a second time, marked
/// as expanded, to be yielded after them.
#[derive(Debug)]
pub struct Postorder<'a, N> {
    stack: Vec<(&'a N, bool)>,
}

impl<'a, N: BinaryNode> Postorder<'a, N> {
    fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, N: BinaryNode> Iterator for Postorder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node.key());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
        None
    }
}

/// Level-order (breadth first) traversal.
#[derive(Debug)]
pub struct LevelOrder<'a, N> {
    queue: VecDeque<&'a N>,
}

impl<'a, N: BinaryNode> LevelOrder<'a, N> {
    fn new(root: Option<&'a N>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, N: BinaryNode> Iterator for LevelOrder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.key())
    }
}
