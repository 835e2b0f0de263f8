//! This crate exposes three kinds of binary tree over keys, mostly for
//! educational purposes:
//!
//! - [`BinaryTree`]: an unordered tree whose shape is chosen by the caller.
//! - [`SearchTree`]: a Binary Search Tree that never rebalances.
//! - [`AvlTree`]: a Binary Search Tree that rebalances itself on every insert.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Augmentation
//!
//! Every node here also records how many nodes are in its subtree. That is
//! enough to count the keys less than any query key in `O(height)` (see
//! [`query::order_of_key`]). AVL nodes record their height too, which is what
//! decides when to rotate.
//!
//! ## Shared machinery
//!
//! Traversals ([`traverse`]), structural queries ([`query`]), and the
//! read-only [`snapshot`] view are written once against the [`BinaryNode`]
//! trait and work the same for all three trees.
//!
//! # Examples
//!
//! ```
//! use bintree::{AvlTree, Order, SearchTree};
//!
//! let keys = [10, 20, 30, 40, 50];
//! let bst: SearchTree<i32> = keys.into_iter().collect();
//! let avl: AvlTree<i32> = keys.into_iter().collect();
//!
//! // Same keys, same sorted order...
//! assert!(bst.iter().eq(avl.iter()));
//!
//! // ...but very different shapes.
//! assert_eq!(bst.height(), 5);
//! assert_eq!(avl.height(), 3);
//! assert!(!bst.is_balanced());
//!
//! assert_eq!(bst.order_of_key(&35), avl.order_of_key(&35));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
mod node;
pub mod query;
pub mod snapshot;
pub mod traverse;
pub mod unordered;


pub use avl::{AvlNode, AvlTree};
pub use bst::{Duplicates, SearchTree};
pub use node::{BinaryNode, Node, Side};
pub use snapshot::NodeView;
pub use traverse::{Order, Traverse};
pub use unordered::{AttachError, BinaryTree};
