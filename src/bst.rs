//! An unbalanced Binary Search Tree. Keys are placed by comparison and never moved afterwards, so
//! the shape of the tree depends entirely on the insertion order. Inserting sorted keys produces a
//! chain as tall as the tree is large.
//!
//! # Examples
//!
//! ```
//! use bintree::SearchTree;
//!
//! let mut tree = SearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Sorted input makes a chain.
//! tree.extend([2, 3, 4]);
//! assert_eq!(tree.height(), 4);
//! assert!(!tree.is_balanced());
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::node::{Link, Node};
use crate::query;
use crate::snapshot::NodeView;
use crate::traverse::{self, Order, Traverse};

/// What a [`SearchTree`] does with a key that is already in the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duplicates {
    /// Treat an equal key like a greater one and store it again in the right subtree.
    #[default]
    RouteRight,
    /// Leave the tree untouched.
    Ignore,
}

/// An unbalanced Binary Search Tree of keys with subtree sizes for rank queries.
pub struct SearchTree<K> {
    root: Link<Node<K>>,
    duplicates: Duplicates,
}

impl<K> Default for SearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for SearchTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchTree")
            .field("duplicates", &self.duplicates)
            .field("level_order", &self.traverse(Order::LevelOrder).collect::<Vec<_>>())
            .finish()
    }
}

impl<K> SearchTree<K> {
    /// Generates a new, empty `SearchTree` that routes duplicate keys to the right.
    pub fn new() -> Self {
        Self::with_duplicates(Duplicates::default())
    }

    /// Generates a new, empty `SearchTree` with the given duplicate handling.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Duplicates, SearchTree};
    ///
    /// let mut tree = SearchTree::with_duplicates(Duplicates::Ignore);
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn with_duplicates(duplicates: Duplicates) -> Self {
        Self {
            root: None,
            duplicates,
        }
    }

    /// How this tree handles duplicate keys.
    pub fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    /// Inserts `key`, returning whether a new node was created.
    ///
    /// Keys less than a node's key go left and all others go right, so with
    /// [`Duplicates::RouteRight`] an equal key is stored again to the right of the existing one.
    /// Every node passed on the way down gains one in size.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(1));
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &1]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        if self.duplicates == Duplicates::Ignore && self.contains(&key) {
            debug!("ignoring duplicate key in search tree");
            return false;
        }

        let mut link = &mut self.root;
        while let Some(node) = link {
            node.size += 1;
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::new_boxed(key));
        true
    }

    /// Whether `key` is in the tree. Descends by comparison, never modifying the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        query::contains_ordered(self.root(), key)
    }

    /// The number of keys in the tree strictly less than `key`. `key` doesn't need to be in the
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::SearchTree;
    ///
    /// let tree: SearchTree<i32> = [50, 30, 70, 20, 40].into_iter().collect();
    /// assert_eq!(tree.order_of_key(&40), 2);
    /// assert_eq!(tree.order_of_key(&45), 3);
    /// assert_eq!(tree.order_of_key(&0), 0);
    /// ```
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

    /// Walks the keys in sorted order.
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
}

impl<K: Ord> Extend<K> for SearchTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for SearchTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a SearchTree<K> {
    type Item = &'a K;
    type IntoIter = Traverse<'a, Node<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
