//! Singly linked sequence containers with caller-injected release, compare
//! and traversal strategies.
#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::error::{InsertError, ListError};
pub use linked_list::list::SList;
#[cfg(feature = "locked")]
pub use linked_list::locked::LockedList;
