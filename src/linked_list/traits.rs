use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::ptr::{self, NonNull};

/// A trait for a link in a linked list.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for a node that contains data.
pub trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Consume the node and return its data
    fn into_data(self) -> Self::Data;
}

/// A payload handle stored in an [`SList`](super::list::SList).
///
/// The list never looks behind the handle. Lookups by data (`index`,
/// `remove_by_data`, `contains`) compare handles by identity: two handles are
/// the same when they point at the same object, regardless of its contents.
pub trait PayloadRef {
    /// Returns `true` if both handles refer to the same object.
    fn same_ref(&self, other: &Self) -> bool;
}

impl<T: ?Sized> PayloadRef for &T {
    #[inline]
    fn same_ref(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> PayloadRef for &mut T {
    #[inline]
    fn same_ref(&self, other: &Self) -> bool {
        ptr::eq(&**self, &**other)
    }
}

impl<T: ?Sized> PayloadRef for *const T {
    #[inline]
    fn same_ref(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> PayloadRef for *mut T {
    #[inline]
    fn same_ref(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> PayloadRef for NonNull<T> {
    #[inline]
    fn same_ref(&self, other: &Self) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl<T: ?Sized> PayloadRef for Box<T> {
    #[inline]
    fn same_ref(&self, other: &Self) -> bool {
        ptr::eq(&**self, &**other)
    }
}

impl<T: ?Sized> PayloadRef for Rc<T> {
    #[inline]
    fn same_ref(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> PayloadRef for Arc<T> {
    #[inline]
    fn same_ref(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// A release routine, invoked on a payload at the moment its node is removed.
///
/// Any `FnMut(P)` is a release routine, so a closure or a plain function
/// (`drop`, `Box::from_raw` wrappers, pool returns, ...) can be passed
/// directly to the `_x` operations.
pub trait Release<P> {
    /// Take over the payload of a removed node.
    fn release(&mut self, payload: P);
}

impl<P, F> Release<P> for F
where
    F: FnMut(P),
{
    #[inline]
    fn release(&mut self, payload: P) {
        self(payload)
    }
}

/// The release strategy of the plain operations: the handle is dropped and
/// no cleanup routine runs. For borrowed and raw handles this leaves the
/// payload untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRelease;

impl<P> Release<P> for NoRelease {
    #[inline]
    fn release(&mut self, _payload: P) {}
}
