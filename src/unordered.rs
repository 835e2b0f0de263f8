//! A binary tree with no ordering between keys. The caller decides where every key goes, either
//! by naming a parent and a side or by filling the tree level by level.
//!
//! Parents are named by the path of [`Side`]s leading to them from the root, with the empty path
//! naming the root itself.
//!
//! # Examples
//!
//! ```
//! use bintree::{BinaryTree, Order, Side};
//!
//! let mut tree = BinaryTree::new();
//! tree.set_root(1)?;
//! tree.attach(&[], Side::Left, 2)?;
//! tree.attach(&[], Side::Right, 3)?;
//! tree.attach(&[Side::Left], Side::Right, 4)?;
//!
//! let preorder: Vec<_> = tree.traverse(Order::Preorder).copied().collect();
//! assert_eq!(preorder, [1, 2, 4, 3]);
//!
//! // Nothing is ordered, so every node has to be checked.
//! assert!(tree.contains(&4));
//! # Ok::<(), bintree::AttachError>(())
//! ```

use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use crate::node::{Link, Node, Side};
use crate::query;
use crate::snapshot::NodeView;
use crate::traverse::{self, Order, Traverse};

/// Ways placing a key in a [`BinaryTree`] can go wrong. In every case the tree is left as it was.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AttachError {
    /// The tree already has a root.
    #[error("the tree already has a root")]
    RootOccupied,
    /// No node is reachable along the given path.
    #[error("no node at path {path:?}")]
    MissingNode {
        /// The path that ran off the tree.
        path: Vec<Side>,
    },
    /// The parent already has a child on that side.
    #[error("the {side:?} slot is already occupied")]
    SlotOccupied {
        /// The occupied side.
        side: Side,
    },
}

/// A binary tree whose shape is chosen by the caller.
pub struct BinaryTree<K> {
    root: Link<Node<K>>,
}

impl<K> Default for BinaryTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for BinaryTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("len", &self.len())
            .field("level_order", &self.traverse(Order::LevelOrder).collect::<Vec<_>>())
            .finish()
    }
}

impl<K> BinaryTree<K> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree from keys given in level order, the way one would type them in: the first
    /// item is the root, then every node that gets created, in the order it was created, takes
    /// the next two items as its left and right child. `None` leaves a slot empty. Items left
    /// over once every node has had its turn are ignored; running out early just leaves the
    /// remaining slots empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, Order};
    ///
    /// //     1
    /// //    / \
    /// //   2   3
    /// //    \
    /// //     4
    /// let tree = BinaryTree::from_level_order([Some(1), Some(2), Some(3), None, Some(4)]);
    ///
    /// let level_order: Vec<_> = tree.traverse(Order::LevelOrder).copied().collect();
    /// assert_eq!(level_order, [1, 2, 3, 4]);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn from_level_order<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Option<K>>,
    {
        let mut items = items.into_iter().fuse();
        let mut tree = Self {
            root: items.next().flatten().map(Node::new_boxed),
        };

        {
            // Nodes wait here in creation order for their turn to take two items.
            let mut waiting: VecDeque<&mut Node<K>> =
                tree.root.as_deref_mut().into_iter().collect();
            while let Some(node) = waiting.pop_front() {
                let Node { left, right, .. } = node;
                for slot in [left, right] {
                    match items.next() {
                        Some(Some(key)) => {
                            *slot = Some(Node::new_boxed(key));
                            waiting.extend(slot.as_deref_mut());
                        }
                        Some(None) => {}
                        None => break,
                    }
                }
            }
        }

        tree.recompute_sizes();
        debug!("built a tree of {} nodes from level order", tree.len());
        tree
    }

    /// Makes `key` the root of an empty tree.
    pub fn set_root(&mut self, key: K) -> Result<(), AttachError> {
        if self.root.is_some() {
            return Err(AttachError::RootOccupied);
        }
        self.root = Some(Node::new_boxed(key));
        Ok(())
    }

    /// Attaches `key` as the `side` child of the node at `path`. The slot must be empty.
    ///
    /// Afterwards the size of every node in the tree is recomputed from the root, so each attach
    /// takes `O(n)` on top of following `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{AttachError, BinaryTree, Side};
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.set_root(1).unwrap();
    ///
    /// assert_eq!(tree.attach(&[], Side::Left, 2), Ok(()));
    /// assert_eq!(
    ///     tree.attach(&[], Side::Left, 3),
    ///     Err(AttachError::SlotOccupied { side: Side::Left })
    /// );
    /// assert_eq!(
    ///     tree.attach(&[Side::Right], Side::Left, 3),
    ///     Err(AttachError::MissingNode { path: vec![Side::Right] })
    /// );
    /// ```
    pub fn attach(&mut self, path: &[Side], side: Side, key: K) -> Result<(), AttachError> {
        let parent = self
            .node_at_mut(path)
            .ok_or_else(|| AttachError::MissingNode {
                path: path.to_vec(),
            })?;
        let slot = parent.slot_mut(side);
        if slot.is_some() {
            return Err(AttachError::SlotOccupied { side });
        }
        *slot = Some(Node::new_boxed(key));
        trace!("attached a {:?} child at depth {}", side, path.len() + 1);

        self.recompute_sizes();
        Ok(())
    }

    /// Attaches `key` in the first empty slot in level order, preferring left over right. On an
    /// empty tree `key` becomes the root. Filling a tree this way keeps it complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, Order};
    ///
    /// let mut tree = BinaryTree::new();
    /// for key in [7, 3, 9, 1] {
    ///     tree.push_level_order(key);
    /// }
    ///
    /// let level_order: Vec<_> = tree.traverse(Order::LevelOrder).copied().collect();
    /// assert_eq!(level_order, [7, 3, 9, 1]);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn push_level_order(&mut self, key: K) {
        if self.root.is_none() {
            self.root = Some(Node::new_boxed(key));
            return;
        }

        let mut key = Some(key);
        {
            let mut queue: VecDeque<&mut Node<K>> =
                self.root.as_deref_mut().into_iter().collect();
            'search: while let Some(node) = queue.pop_front() {
                let Node { left, right, .. } = node;
                for slot in [left, right] {
                    if slot.is_none() {
                        *slot = key.take().map(Node::new_boxed);
                        break 'search;
                    }
                    queue.extend(slot.as_deref_mut());
                }
            }
        }
        self.recompute_sizes();
    }

    /// Whether `key` is anywhere in the tree. Every node is checked.
    pub fn contains(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        query::contains_exhaustive(self.root(), key)
    }

    /// The number of keys strictly less than `key`, found by descending on subtree sizes like a
    /// search tree would. Only meaningful if the caller built the tree in search-tree order.
    pub fn order_of_key(&self, key: &K) -> usize
    where
        K: Ord,
    {
        query::order_of_key(self.root(), key)
    }

    /// Walks the keys in the given order.
    pub fn traverse(&self, order: Order) -> Traverse<'_, Node<K>> {
        traverse::traverse(self.root(), order)
    }

    /// Walks the keys inorder.
    pub fn iter(&self) -> Traverse<'_, Node<K>> {
        self.traverse(Order::Inorder)
    }

    /// The number of levels in the tree. 0 when empty.
    pub fn height(&self) -> usize {
        query::height(self.root())
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, |n| n.size)
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

    /// Whether the subtrees of every node differ in height by at most one. Heights are
    /// recomputed at every node.
    pub fn is_balanced(&self) -> bool {
        query::is_balanced(self.root())
    }

    /// A read-only view of the root for rendering.
    pub fn snapshot(&self) -> Option<NodeView<'_, Node<K>>> {
        self.root().map(NodeView::new)
    }

    fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    fn node_at_mut(&mut self, path: &[Side]) -> Option<&mut Node<K>> {
        let mut node = self.root.as_deref_mut()?;
        for side in path {
            node = node.slot_mut(*side).as_deref_mut()?;
        }
        Some(node)
    }

    fn recompute_sizes(&mut self) {
        if let Some(root) = self.root.as_deref_mut() {
            root.recompute_sizes();
        }
    }
}

impl<'a, K> IntoIterator for &'a BinaryTree<K> {
    type Item = &'a K;
    type IntoIter = Traverse<'a, Node<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
