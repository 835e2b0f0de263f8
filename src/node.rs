//! The node model shared by every tree in this crate.

use std::fmt;

use crate::query;

/// An owned, possibly empty, child slot.
pub(crate) type Link<N> = Option<Box<N>>;

/// Names one of the two child slots of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

/// Read access to a node of a binary tree.
///
/// Traversals, structural queries, and snapshots are written against this trait so the same code
/// walks the unordered, search, and AVL trees.
pub trait BinaryNode {
    /// The type of key stored at each node.
    type Key;

    /// The key stored at this node.
    fn key(&self) -> &Self::Key;

    /// The left child, if there is one.
    fn left(&self) -> Option<&Self>;

    /// The right child, if there is one.
    fn right(&self) -> Option<&Self>;

    /// How many nodes are in the subtree rooted at this node, including this node.
    fn size(&self) -> usize;

    /// `height(left) - height(right)`. By default both heights are recomputed by walking the
    /// subtrees; nodes that store their height override this.
    fn balance_factor(&self) -> isize
    where
        Self: Sized,
    {
        query::height(self.left()) as isize - query::height(self.right()) as isize
    }

    /// The child in the given slot.
    fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Whether this node has no children.
    fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}

/// Gives up ownership of a node's children so a subtree can be torn down without recursion.
pub(crate) trait OwnedChildren: Sized {
    fn take_children(&mut self) -> [Link<Self>; 2];
}

/// Drops every descendant of `node` using an explicit stack. Each popped node has had its
/// children taken, so its own `Drop` does no further work.
pub(crate) fn dismantle<N: OwnedChildren>(node: &mut N) {
    let mut stack: Vec<Box<N>> = node.take_children().into_iter().flatten().collect();
    while let Some(mut next) = stack.pop() {
        stack.extend(next.take_children().into_iter().flatten());
    }
}

/// The size of an optional subtree.
pub(crate) fn size_of<N: BinaryNode>(link: &Link<N>) -> usize {
    link.as_deref().map_or(0, |n| n.size())
}

/// A node of the unordered and search trees: a key, two owned children, and the number of nodes
/// in its subtree.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<Node<K>>,
    pub(crate) right: Link<Node<K>>,
    pub(crate) size: usize,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            size: 1,
        }
    }

    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self::new(key))
    }

    pub(crate) fn slot_mut(&mut self, side: Side) -> &mut Link<Self> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Sets `size` from the (already correct) sizes of the children.
    pub(crate) fn fix_size(&mut self) {
        self.size = 1 + size_of(&self.left) + size_of(&self.right);
    }

    /// Recomputes `size` for every node in this subtree and returns the new size of this node.
    ///
    /// The first pass lists the subtree in preorder, remembering each node's parent. Preorder puts
    /// every node before its descendants, so summing in reverse finishes children before their
    /// parents. The second pass walks the same preorder mutably and writes the sizes back.
    pub(crate) fn recompute_sizes(&mut self) -> usize {
        let mut parents: Vec<Option<usize>> = Vec::new();
        let mut stack: Vec<(&Self, Option<usize>)> = vec![(&*self, None)];
        while let Some((node, parent)) = stack.pop() {
            let at = parents.len();
            parents.push(parent);
            stack.extend(node.right().map(|n| (n, Some(at))));
            stack.extend(node.left().map(|n| (n, Some(at))));
        }

        let mut sizes = vec![1; parents.len()];
        for at in (1..parents.len()).rev() {
            if let Some(parent) = parents[at] {
                sizes[parent] += sizes[at];
            }
        }

        let mut stack: Vec<&mut Self> = vec![&mut *self];
        let mut next_size = sizes.iter().copied();
        while let Some(node) = stack.pop() {
            node.size = next_size.next().unwrap_or(1);
            stack.extend(node.right.as_deref_mut());
            stack.extend(node.left.as_deref_mut());
        }
        self.size
    }
}

impl<K> BinaryNode for Node<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<K> OwnedChildren for Node<K> {
    fn take_children(&mut self) -> [Link<Self>; 2] {
        [self.left.take(), self.right.take()]
    }
}

impl<K> Drop for Node<K> {
    fn drop(&mut self) {
        dismantle(self);
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    /// Children are shown by key only, so formatting never descends the tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("size", &self.size)
            .field("left", &self.left().map(|n| &n.key))
            .field("right", &self.right().map(|n| &n.key))
            .finish()
    }
}
