//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Every node stores its height and the size of its subtree. After each insertion the nodes on
//! the path back up to the root recompute both and, where the heights of a node's children differ
//! by two, rotate to restore the AVL invariant:
//!
//! > For every node, the heights of its left and right subtrees differ by at most one.
//!
//! That keeps the height of the tree `O(lg N)`, so searching, inserting, and ranking keys all take
//! logarithmic time.
//!
//! # Examples
//!
//! ```
//! use bintree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//!
//! // Sorted input would make a chain in a plain search tree.
//! for key in [10, 20, 30, 40, 50] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 3);
//!
//! // Inserting a key that's already there does nothing.
//! assert!(!tree.insert(30));
//! assert_eq!(tree.len(), 5);
//!
//! assert_eq!(tree.order_of_key(&35), 3);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::node::{dismantle, size_of, BinaryNode, Link, OwnedChildren};
use crate::query;
use crate::snapshot::NodeView;
use crate::traverse::{self, Order, Traverse};

/// An AVL tree of distinct keys.
pub struct AvlTree<K> {
    root: Link<AvlNode<K>>,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for AvlTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("height", &self.height())
            .field("level_order", &self.traverse(Order::LevelOrder).collect::<Vec<_>>())
            .finish()
    }
}

impl<K> AvlTree<K> {
    /// Generate a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts `key`, rebalancing on the way back up. Returns whether the key was new; inserting
    /// a key that is already present leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut inserted = false;
        let (root, _) = AvlNode::insert(self.root.take(), key, &mut inserted);
        self.root = Some(root);
        if !inserted {
            debug!("ignoring duplicate key in AVL tree");
        }
        inserted
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        query::contains_ordered(self.root(), key)
    }

    /// The number of keys in the tree strictly less than `key`. Takes `O(lg N)`.
    pub fn order_of_key(&self, key: &K) -> usize
    where
        K: Ord,
    {
        query::order_of_key(self.root(), key)
    }

    /// Walks the keys in the given order.
    pub fn traverse(&self, order: Order) -> Traverse<'_, AvlNode<K>> {
        traverse::traverse(self.root(), order)
    }

    /// Walks the keys in sorted order.
    pub fn iter(&self) -> Traverse<'_, AvlNode<K>> {
        self.traverse(Order::Inorder)
    }

    /// The number of levels in the tree, read from the root's stored height. 0 when empty.
    pub fn height(&self) -> usize {
        self.root().map_or(0, |n| n.height)
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        size_of(&self.root)
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes with no children.
    pub fn leaf_count(&self) -> usize {
        query::leaf_count(self.root())
    }

    /// The number of nodes on the longest path between two nodes.
    pub fn diameter(&self) -> usize {
        query::diameter(self.root())
    }

    /// A read-only view of the root for rendering. Balance factors come from the stored heights.
    pub fn snapshot(&self) -> Option<NodeView<'_, AvlNode<K>>> {
        self.root().map(NodeView::new)
    }

    fn root(&self) -> Option<&AvlNode<K>> {
        self.root.as_deref()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Traverse<'a, AvlNode<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A node of an [`AvlTree`].
pub struct AvlNode<K> {
    key: K,
    left: Link<AvlNode<K>>,
    right: Link<AvlNode<K>>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
    /// How many nodes are in the subtree rooted at this node.
    size: usize,
}

impl<K> AvlNode<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
            size: 1,
        })
    }

    /// Adjusts the height and size of `self` from its children, which must already be correct.
    fn fix(&mut self) {
        self.height = height_of(&self.left).max(height_of(&self.right)) + 1;
        self.size = 1 + size_of(&self.left) + size_of(&self.right);
    }

    /// Inserts `key` into the subtree at `link` and returns the new root of that subtree, which
    /// the caller links back in, along with how `key` compared to the key of the node that was
    /// at `link` (`Equal` if there was no node yet). Sets `inserted` if a node was created.
    fn insert(link: Link<Self>, key: K, inserted: &mut bool) -> (Box<Self>, Ordering)
    where
        K: Ord,
    {
        let mut node = match link {
            Some(node) => node,
            None => {
                *inserted = true;
                return (Self::new_boxed(key), Ordering::Equal);
            }
        };

        let went = key.cmp(&node.key);
        let below = match went {
            Ordering::Less => {
                let (left, below) = Self::insert(node.left.take(), key, inserted);
                node.left = Some(left);
                below
            }
            Ordering::Greater => {
                let (right, below) = Self::insert(node.right.take(), key, inserted);
                node.right = Some(right);
                below
            }
            Ordering::Equal => return (node, went),
        };

        node.fix();
        let node = node.rebalance(below);

        // In debug builds, after balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(debug_assertions) {
            let left_height = height_of(&node.left);
            let right_height = height_of(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        (node, went)
    }

    /// Restores the AVL invariant at `self` after an insertion somewhere below it.
    ///
    /// When `self` leans by two, the new key went into its taller child, and `below` is how the
    /// new key compared to that child's key:
    ///
    /// - leaning left, key less than the left child's key: rotate right.
    /// - leaning left, key greater than the left child's key: rotate the left child left, then
    ///   rotate right.
    /// - leaning right, key greater than the right child's key: rotate left.
    /// - leaning right, key less than the right child's key: rotate the right child right, then
    ///   rotate left.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
    fn rebalance(mut self: Box<Self>, below: Ordering) -> Box<Self> {
        let balance = self.balance_factor();
        if balance > 1 {
            if let Some(left) = self.left.take() {
                self.left = Some(if below == Ordering::Greater {
                    trace!("left-right rotation");
                    left.rotate_left()
                } else {
                    left
                });
                return self.rotate_right();
            }
        } else if balance < -1 {
            if let Some(right) = self.right.take() {
                self.right = Some(if below == Ordering::Less {
                    trace!("right-left rotation");
                    right.rotate_right()
                } else {
                    right
                });
                return self.rotate_left();
            }
        }
        self
    }

    /// Rotate self to the right. This moves the left child up vertically and self down vertically.
    /// Used to rebalance the tree when the left child is too tall. Without a left child there is
    /// nothing to rotate and `self` comes back unchanged.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root                new_root
    ///     /     \                  /     \
    /// new_root   z    rotate ->   x    old_root
    ///   / \                               /  \
    ///  x   y                             y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };
        trace!("rotating right");

        self.left = new_root.right.take();
        self.fix();

        new_root.right = Some(self);
        new_root.fix();
        new_root
    }

    /// The mirror image of [`AvlNode::rotate_right`]: the right child moves up and `self` becomes
    /// its left child, taking over the right child's old left subtree.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };
        trace!("rotating left");

        self.right = new_root.left.take();
        self.fix();

        new_root.left = Some(self);
        new_root.fix();
        new_root
    }
}

fn height_of<K>(link: &Link<AvlNode<K>>) -> usize {
    link.as_deref().map_or(0, |n| n.height)
}

impl<K> BinaryNode for AvlNode<K> {
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

    /// Read from the stored heights rather than recomputed.
    fn balance_factor(&self) -> isize {
        height_of(&self.left) as isize - height_of(&self.right) as isize
    }
}

impl<K> OwnedChildren for AvlNode<K> {
    fn take_children(&mut self) -> [Link<Self>; 2] {
        [self.left.take(), self.right.take()]
    }
}

impl<K> Drop for AvlNode<K> {
    fn drop(&mut self) {
        dismantle(self);
    }
}

impl<K> fmt::Debug for AvlNode<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlNode")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("size", &self.size)
            .field("left", &self.left().map(|n| &n.key))
            .field("right", &self.right().map(|n| &n.key))
            .finish()
    }
}
