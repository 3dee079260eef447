//! Configurable binary heap
//!
//! This crate provides [`Heap`], an array-backed binary heap (priority
//! queue) with a configurable ordering mode and an injectable comparator:
//!
//! - **Max or min ordering**: [`HeapKind`] selects which extreme surfaces at
//!   the root. Both modes share one set of sift algorithms; min-heaps swap
//!   comparator operands internally instead of duplicating the rebalancing
//!   logic.
//! - **Pluggable comparison**: any `Fn(&T, &T) -> Ordering` can replace the
//!   natural order of `T`. Only the constructors that default the comparator
//!   require `T: Ord`.
//! - **Full collection contract**: push/peek/pop plus membership test,
//!   arbitrary-element removal, enumeration, bulk copy, and clear.
//!
//! # Example
//!
//! ```rust
//! use flexheap::{Heap, HeapKind};
//!
//! let mut heap = Heap::with_kind(HeapKind::Min);
//! heap.push(5);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(5));
//! assert!(heap.pop().is_err());
//! ```
//!
//! Enumeration yields the physical level-order layout, not sorted order;
//! drain the heap with [`Heap::pop`] to consume elements in priority order.

pub mod binary;
pub mod error;

pub use binary::{Comparator, Heap, HeapKind};
pub use error::HeapError;
