//! An allocation-free intrusive singly linked list.
//!
//! Records own their storage and embed one [`Link`] per chain they can join.
//! A [`List`] is nothing but a head slot typed by an [`Anchor`], the
//! compile-time binding that says which embedded link a chain runs through.
//! One engine serves every bound record type, and a record with several link
//! fields can sit on several lists at once (an LRU chain and a hash-bucket
//! chain, say) without wrapper nodes or allocation.
//!
//! # Examples
//!
//! ```
//! use core::ptr::NonNull;
//! use slink::{Link, List};
//! use slink_derive::Anchor;
//!
//! #[derive(Anchor)]
//! struct Task {
//!     key: u32,
//!     queue: Link<Task>,
//! }
//!
//! let mut ready: List<TaskQueueAnchor> = List::new();
//! let mut first = Task { key: 1, queue: Link::new() };
//! let mut second = Task { key: 2, queue: Link::new() };
//!
//! ready.push(NonNull::from(&mut first));
//! ready.push(NonNull::from(&mut second));
//! assert_eq!(ready.len(), 2);
//!
//! // push is LIFO: the second task comes back out first.
//! let popped = ready.pop().unwrap();
//! assert_eq!(unsafe { popped.as_ref().key }, 2);
//! ```
//!
//! # Safety
//!
//! The engine performs no runtime checks; the caller must uphold:
//!
//! - Records outlive every list they are linked into. The engine never
//!   allocates or frees record memory.
//! - A link field is on at most one chain at a time. Two lists over the same
//!   anchor must never share a record.
//! - Lists are not thread safe; concurrent access needs external
//!   synchronization.
//! - A chain must not be modified while a cursor or iterator is walking it.

#![no_std]

pub mod cursor;
pub mod entry;
pub mod link;
pub mod list;
pub mod traits;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, Iter};
pub use entry::Entry;
pub use link::Link;
pub use list::List;
pub use traits::Anchor;
