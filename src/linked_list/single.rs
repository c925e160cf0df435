use core::ptr::NonNull;

use super::traits::Link;

/// A link in a singly linked list.
///
/// The list's root is a bare `SingleLink`, every node embeds one as its first
/// field. Splicing only ever touches link words, so the same code handles the
/// head position and interior positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLink {
    next: Option<NonNull<Self>>,
}

impl SingleLink {
    /// Creates an unlinked link.
    pub const fn new() -> Self {
        SingleLink { next: None }
    }

    /// Splice `link` in right after `self`.
    ///
    /// # Safety
    ///
    /// `link` must point to a live link that is not part of any chain.
    #[inline]
    pub(crate) unsafe fn attach(&mut self, link: NonNull<SingleLink>) {
        unsafe {
            (*link.as_ptr()).next = self.next;
        }
        self.next = Some(link);
    }

    /// Unlink the link following `self` and return it.
    ///
    /// # Safety
    ///
    /// The chain reachable from `self` must consist of live links.
    #[inline]
    pub(crate) unsafe fn detach_next(&mut self) -> Option<NonNull<SingleLink>> {
        let next = self.next?;
        unsafe {
            self.next = (*next.as_ptr()).next.take();
        }
        Some(next)
    }
}

impl Link for SingleLink {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

unsafe impl Send for SingleLink {}
unsafe impl Sync for SingleLink {}
