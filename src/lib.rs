//! Height-balanced (AVL) order-statistic collections for Rust.
//!
//! This crate provides [`AvlTreeMap`] and [`AvlTreeSet`], ordered collections whose API
//! follows the standard library's `BTreeMap` and `BTreeSet`, extended with O(log n)
//! order-statistic operations:
//!
//! - [`select`](AvlTreeMap::select) / [`get_by_rank`](AvlTreeMap::get_by_rank) - the element at a given sorted position
//! - [`rank`](AvlTreeMap::rank) - how many keys are strictly less than a given key
//! - [`rank_of`](AvlTreeMap::rank_of) - the sorted position of a present key
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the first element
//!
//! Key order comes from a [`Comparator`]. The default, [`Natural`], uses the key's
//! [`Ord`] implementation; [`Reverse`], [`FnComparator`] and [`PartialOrder`] cover the
//! other common cases.
//!
//! # Example
//!
//! ```
//! use avl_ost::{AvlTreeMap, Rank};
//!
//! let mut scores = AvlTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get("Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // The median, by key.
//! let (name, score) = scores.get_by_rank(1).unwrap();
//! assert_eq!((*name, *score), ("Bob", 85));
//!
//! assert_eq!(scores.rank("Bobby"), 2);
//! assert_eq!(scores.rank_of("Carol"), Some(2));
//! assert_eq!(scores[Rank(0)], 100);
//! ```
//!
//! # Implementation
//!
//! Both collections sit on one AVL tree whose nodes live in an arena and are linked by
//! 32-bit handles. Every node stores its height and subtree size. Insertions and removals
//! record the path they descend and retrace it bottom-up, rotating wherever the heights
//! of two siblings drift apart by two, so the tree height stays within
//! 1.44 log<sub>2</sub>(n + 2).
//!
//! # Features
//!
//! - **`log`** - emits `trace` records for rotations and `debug` records for bulk
//!   operations through the [`log`](https://docs.rs/log) facade. Off by default.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: `IterMut` needs unsafe code to hand out disjoint `&mut V` from the value arena.
// #![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

#[macro_use]
mod macros;

mod compare;
mod order_statistic;
mod raw;

pub mod avl_tree_map;
pub mod avl_tree_set;

pub use avl_tree_map::AvlTreeMap;
pub use avl_tree_set::AvlTreeSet;
pub use compare::{Comparator, FnComparator, Natural, PartialOrder, Reverse};
pub use order_statistic::Rank;
