//! A singly linked list of payload handles.
//!
//! [`SList`](list::SList) owns one heap node per element; each node carries a
//! payload handle `P` (a reference, raw pointer, `Box`, `Rc`, ...) and a link
//! to the next node. Behavior that depends on the payload is injected by the
//! caller:
//!
//! - [`Release`](traits::Release) routines take over payloads in the `_x`
//!   operations (`remove_by_data_x`, `remove_by_index_x`, `delete_all_x`).
//! - Comparators drive `insert`, `sort` and `find`.
//! - `trace` and `work` run a callback on every node in order.
//!
//! Lookups by data compare handles by identity, see
//! [`PayloadRef`](traits::PayloadRef).
//!
//! # Examples
//!
//! ```
//! use mola_slist::linked_list::prelude::*;
//!
//! let (a, b, c) = (3, 1, 2);
//! let mut list = SList::new();
//! list.append(&a).unwrap();
//! list.append(&b).unwrap();
//! list.prepend(&c).unwrap();
//!
//! assert_eq!(list.size(), 3);
//! assert_eq!(list.index(&&b), Some(2));
//!
//! list.sort(|x, y| x < y);
//! let values: Vec<i32> = list.iter().map(|v| **v).collect();
//! assert_eq!(values, vec![1, 2, 3]);
//!
//! let mut released = vec![];
//! list.delete_all_x(|v: &i32| released.push(*v));
//! assert!(list.is_empty());
//! assert_eq!(released, vec![1, 2, 3]);
//! ```
//!
//! # Ownership
//!
//! Mutators work in place on a list with stable identity.
//! [`SList::concat`](list::SList::concat) takes the added list by value, so
//! its old handle cannot be reused, and
//! callbacks only get shared or payload-level access, so they cannot
//! restructure the list they are called from.

pub mod algo;
pub mod error;
pub mod iter;
#[cfg(feature = "locked")]
pub mod locked;
pub mod list;
pub mod node;
pub mod single;
pub mod traits;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::error::{InsertError, ListError};
    pub use super::list::SList;
    #[cfg(feature = "locked")]
    pub use super::locked::LockedList;
    pub use super::node::SNode;
    pub use super::traits::{Link, NoRelease, NodeWithData, PayloadRef, Release};
}
