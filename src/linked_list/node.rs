use alloc::alloc::handle_alloc_error;
use alloc::boxed::Box;
use core::alloc::Layout;
use core::fmt;
use core::ptr::{self, NonNull};

use mola_slist_derive::Node;

use super::error::{InsertError, ListError};
use super::single::SingleLink;
use super::traits::{Link, NodeWithData};

/// A node in a singly linked list.
///
/// Nodes are created and freed by the owning [`SList`](super::list::SList);
/// callers only ever see shared references to them.
#[derive(Node)]
#[node(crate_path = "crate")]
#[repr(C)]
pub struct SNode<P> {
    link: SingleLink,
    data: P,
}

impl<P> SNode<P> {
    /// Allocate a detached node carrying `data`.
    ///
    /// On failure `data` comes back inside the error.
    pub(crate) fn alloc(data: P) -> Result<NonNull<Self>, InsertError<P>> {
        let layout = Layout::new::<Self>();
        // SAFETY: the layout is never zero-sized, it holds at least a link word.
        let raw = unsafe { alloc::alloc::alloc(layout) }.cast::<Self>();
        let Some(node) = NonNull::new(raw) else {
            tracing::warn!(size = layout.size(), align = layout.align(), "node allocation failed");
            return Err(InsertError::new(ListError::AllocFailed(layout), data));
        };
        unsafe {
            node.as_ptr().write(SNode {
                link: SingleLink::new(),
                data,
            });
        }
        Ok(node)
    }

    /// Allocate a detached node, aborting through the global allocation
    /// error handler on failure.
    pub(crate) fn alloc_or_abort(data: P) -> NonNull<Self> {
        match Self::alloc(data) {
            Ok(node) => node,
            Err(_) => handle_alloc_error(Layout::new::<Self>()),
        }
    }

    /// Free a detached node and hand back its payload.
    ///
    /// # Safety
    ///
    /// `node` must come from [`SNode::alloc`], must be unlinked, and must not
    /// be used again.
    pub(crate) unsafe fn free(node: NonNull<Self>) -> P {
        // Allocated by the global allocator with `Layout::new::<Self>()`.
        let node = *unsafe { Box::from_raw(node.as_ptr()) };
        node.into_data()
    }

    /// Hand the payload of a detached node to `release`, then free the node.
    ///
    /// The node memory is returned to the allocator even if `release` panics.
    ///
    /// # Safety
    ///
    /// Same contract as [`SNode::free`].
    pub(crate) unsafe fn release_then_free(node: NonNull<Self>, release: impl FnOnce(P)) {
        struct Dealloc(NonNull<u8>, Layout);

        impl Drop for Dealloc {
            fn drop(&mut self) {
                unsafe { alloc::alloc::dealloc(self.0.as_ptr(), self.1) };
            }
        }

        let _memory = Dealloc(node.cast(), Layout::new::<Self>());
        // The payload is moved out exactly once and the node is never read
        // again, so nothing is dropped twice.
        let data = unsafe { ptr::read(&raw const (*node.as_ptr()).data) };
        release(data);
    }

    /// The link word of `node`.
    #[inline]
    pub(crate) fn link_of(node: NonNull<Self>) -> NonNull<SingleLink> {
        node.cast()
    }

    /// The node owning `link`.
    ///
    /// # Safety
    ///
    /// `link` must be the link word of an `SNode<P>`, not a list root.
    #[inline]
    pub(crate) unsafe fn from_link(link: NonNull<SingleLink>) -> NonNull<Self> {
        link.cast()
    }

    /// The node following this one, if any.
    #[inline]
    pub fn next_node(&self) -> Option<&SNode<P>> {
        // SAFETY: nodes reachable from a borrowed node live as long as the
        // borrow of the list they belong to.
        self.next().map(|n| unsafe { &*n.as_ptr() })
    }
}

impl<P: fmt::Debug> fmt::Debug for SNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SNode")
            .field("data", self.data())
            .field("has_next", &self.next().is_some())
            .finish()
    }
}

unsafe impl<P: Send> Send for SNode<P> {}
unsafe impl<P: Sync> Sync for SNode<P> {}
