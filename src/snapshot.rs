//! A read-only view of a tree for anything that wants to draw it.
//!
//! Renderers walk a [`NodeView`] from the root, reading each node's key, children, and balance
//! factor. The view borrows the tree, so the tree can't change while it is being drawn.
//!
//! # Examples
//!
//! ```
//! use bintree::AvlTree;
//!
//! let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
//! let root = tree.snapshot().unwrap();
//!
//! assert_eq!(*root.key(), 2);
//! assert_eq!(root.left().map(|n| *n.key()), Some(1));
//! assert_eq!(root.right().map(|n| *n.key()), Some(3));
//! assert_eq!(root.balance_factor(), 0);
//! ```

use std::fmt;

use crate::node::{BinaryNode, Side};

/// A borrowed view of one node of a tree and, through it, the subtree below.
pub struct NodeView<'a, N> {
    node: &'a N,
}

impl<'a, N> Clone for NodeView<'a, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, N> Copy for NodeView<'a, N> {}

impl<'a, N: BinaryNode> NodeView<'a, N> {
    pub(crate) fn new(node: &'a N) -> Self {
        Self { node }
    }

    /// The key stored at this node.
    pub fn key(&self) -> &'a N::Key {
        self.node.key()
    }

    /// A view of the left child, if there is one.
    pub fn left(&self) -> Option<Self> {
        self.node.left().map(Self::new)
    }

    /// A view of the right child, if there is one.
    pub fn right(&self) -> Option<Self> {
        self.node.right().map(Self::new)
    }

    /// A view of the child in the given slot.
    pub fn child(&self, side: Side) -> Option<Self> {
        self.node.child(side).map(Self::new)
    }

    /// How many nodes are in the subtree under (and including) this node.
    pub fn size(&self) -> usize {
        self.node.size()
    }

    /// `height(left) - height(right)` at this node.
    pub fn balance_factor(&self) -> isize {
        self.node.balance_factor()
    }

    /// The underlying node, for use with the functions in [`query`][crate::query] and
    /// [`traverse`][crate::traverse].
    pub fn node(&self) -> &'a N {
        self.node
    }
}

impl<'a, N> fmt::Debug for NodeView<'a, N>
where
    N: BinaryNode,
    N::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("key", self.key())
            .field("balance_factor", &self.balance_factor())
            .finish()
    }
}
