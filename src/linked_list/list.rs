use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::error::InsertError;
use super::node::SNode;
use super::single::SingleLink;
use super::traits::{Link, NodeWithData, NoRelease, PayloadRef, Release};

/// A singly linked list of payload handles.
///
/// The list owns one heap node per element. What the handle points at is the
/// caller's business: the list only moves the handle around, hands it back on
/// removal, or passes it to a [`Release`] routine in the `_x` operations.
pub struct SList<P> {
    root: SingleLink,
    _marker: PhantomData<Box<SNode<P>>>,
}

impl<P> SList<P> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SList {
            root: SingleLink::new(),
            _marker: PhantomData,
        }
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.next().is_none()
    }

    #[inline]
    pub(crate) fn first(&self) -> Option<NonNull<SNode<P>>> {
        // SAFETY: every link reachable from the root belongs to a node.
        self.root.next().map(|link| unsafe { SNode::from_link(link) })
    }

    #[inline]
    pub(super) fn root_ptr(&mut self) -> NonNull<SingleLink> {
        NonNull::from(&mut self.root)
    }

    /// The link preceding position `index`, `None` if `index > size()`.
    fn slot(&mut self, index: usize) -> Option<NonNull<SingleLink>> {
        let mut slot = self.root_ptr();
        for _ in 0..index {
            slot = unsafe { slot.as_ref() }.next()?;
        }
        Some(slot)
    }

    /// Like [`slot`](Self::slot), but stops at the tail link.
    fn slot_clamped(&mut self, index: usize) -> NonNull<SingleLink> {
        let mut slot = self.root_ptr();
        for _ in 0..index {
            match unsafe { slot.as_ref() }.next() {
                Some(next) => slot = next,
                None => break,
            }
        }
        slot
    }

    /// The last link of the chain: the root when empty.
    fn tail_slot(&mut self) -> NonNull<SingleLink> {
        let mut slot = self.root_ptr();
        while let Some(next) = unsafe { slot.as_ref() }.next() {
            slot = next;
        }
        slot
    }

    /// Find the link preceding the first node whose payload satisfies `pred`.
    ///
    /// Returns `Err(tail)` when no node matches.
    pub(super) fn scan<F>(&mut self, mut pred: F) -> Result<NonNull<SingleLink>, NonNull<SingleLink>>
    where
        F: FnMut(&P) -> bool,
    {
        let mut slot = self.root_ptr();
        loop {
            let Some(next) = unsafe { slot.as_ref() }.next() else {
                return Err(slot);
            };
            let node = unsafe { SNode::<P>::from_link(next).as_ref() };
            if pred(node.data()) {
                return Ok(slot);
            }
            slot = next;
        }
    }

    /// Splice a fresh node carrying `data` in after `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must be the root or a link of this list.
    pub(super) unsafe fn link_after(
        mut slot: NonNull<SingleLink>,
        data: P,
    ) -> Result<(), InsertError<P>> {
        let node = SNode::alloc(data)?;
        unsafe { slot.as_mut().attach(SNode::link_of(node)) };
        Ok(())
    }

    /// Detach the whole chain, leaving the list empty.
    pub(super) fn take_chain(&mut self) -> Option<NonNull<SingleLink>> {
        core::mem::take(&mut self.root).next()
    }

    /// Install `head` as the chain of an empty list.
    ///
    /// # Safety
    ///
    /// `head` must start a chain of live, owned node links ending in `None`.
    pub(super) unsafe fn set_chain(&mut self, head: Option<NonNull<SingleLink>>) {
        debug_assert!(self.is_empty());
        self.root.set_next(head);
    }

    /// Unlink and free the node following `slot`, handing back its payload.
    ///
    /// # Safety
    ///
    /// `slot` must be the root or a link of this list.
    unsafe fn unlink_after(mut slot: NonNull<SingleLink>) -> Option<P> {
        let link = unsafe { slot.as_mut().detach_next() }?;
        Some(unsafe { SNode::free(SNode::from_link(link)) })
    }

    /// Unlink the node following `slot` and pass its payload to `release`
    /// before the node is freed. Returns whether there was a node.
    ///
    /// # Safety
    ///
    /// `slot` must be the root or a link of this list.
    unsafe fn release_after<R>(mut slot: NonNull<SingleLink>, release: &mut R) -> bool
    where
        R: Release<P>,
    {
        let Some(link) = (unsafe { slot.as_mut().detach_next() }) else {
            return false;
        };
        let node = unsafe { SNode::<P>::from_link(link) };
        unsafe { SNode::release_then_free(node, |payload| release.release(payload)) };
        true
    }

    /// Append `data` at the tail. O(n).
    ///
    /// If the node cannot be allocated the list is unchanged and `data` is
    /// handed back in the error.
    pub fn append(&mut self, data: P) -> Result<(), InsertError<P>> {
        let tail = self.tail_slot();
        unsafe { Self::link_after(tail, data) }
    }

    /// Prepend `data` as the new head. O(1).
    pub fn prepend(&mut self, data: P) -> Result<(), InsertError<P>> {
        let root = self.root_ptr();
        unsafe { Self::link_after(root, data) }
    }

    /// Insert `data` so that it ends up at `position`.
    ///
    /// Positions past the end append at the tail.
    pub fn insert_index(&mut self, data: P, position: usize) -> Result<(), InsertError<P>> {
        let slot = self.slot_clamped(position);
        unsafe { Self::link_after(slot, data) }
    }

    /// Remove the head node and return its payload.
    pub fn pop_front(&mut self) -> Option<P> {
        let root = self.root_ptr();
        unsafe { Self::unlink_after(root) }
    }

    /// Remove the node at `index` and hand its payload back to the caller.
    ///
    /// Out-of-range indices leave the list untouched.
    pub fn remove_by_index(&mut self, index: usize) -> Option<P> {
        let slot = self.slot(index)?;
        unsafe { Self::unlink_after(slot) }
    }

    /// Remove the node at `index` and pass its payload to `release`.
    ///
    /// Returns whether a node was removed.
    pub fn remove_by_index_x<R>(&mut self, index: usize, mut release: R) -> bool
    where
        R: Release<P>,
    {
        match self.slot(index) {
            Some(slot) => unsafe { Self::release_after(slot, &mut release) },
            None => false,
        }
    }

    /// Free every node. No release routine runs.
    pub fn delete_all(&mut self) {
        self.delete_all_x(NoRelease);
    }

    /// Free every node, passing each payload to `release` from head to tail.
    ///
    /// Each payload is released before its node is freed.
    pub fn delete_all_x<R>(&mut self, mut release: R)
    where
        R: Release<P>,
    {
        let root = self.root_ptr();
        let mut count = 0usize;
        while unsafe { Self::release_after(root, &mut release) } {
            count += 1;
        }
        tracing::trace!(count, "deleted all nodes");
    }

    /// Move every node of `added` to the tail of `self`.
    ///
    /// No node is copied or freed.
    pub fn concat(&mut self, mut added: SList<P>) {
        let Some(head) = added.take_chain() else {
            return;
        };
        let mut tail = self.tail_slot();
        unsafe { tail.as_mut().set_next(Some(head)) };
        tracing::trace!("concatenated lists");
    }

    /// Number of nodes. O(n).
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// The head node.
    pub fn head(&self) -> Option<&SNode<P>> {
        self.nodes().next()
    }

    /// The node at `n`.
    pub fn nth(&self, n: usize) -> Option<&SNode<P>> {
        self.nodes().nth(n)
    }

    /// The payload at `n`.
    pub fn nth_data(&self, n: usize) -> Option<&P> {
        self.nth(n).map(|node| node.data())
    }

    /// The tail node.
    pub fn last(&self) -> Option<&SNode<P>> {
        self.nodes().last()
    }
}

impl<P> SList<P>
where
    P: PayloadRef,
{
    /// Position of the first node holding the same handle as `data`.
    pub fn index(&self, data: &P) -> Option<usize> {
        self.iter().position(|payload| payload.same_ref(data))
    }

    /// Returns `true` if a node holds the same handle as `data`.
    pub fn contains(&self, data: &P) -> bool {
        self.index(data).is_some()
    }

    /// Remove the first node holding the same handle as `data` and hand its
    /// payload back to the caller.
    pub fn remove_by_data(&mut self, data: &P) -> Option<P> {
        let slot = self.scan(|payload| payload.same_ref(data)).ok()?;
        unsafe { Self::unlink_after(slot) }
    }

    /// Remove the first node holding the same handle as `data` and pass its
    /// payload to `release`.
    ///
    /// Returns whether a node was removed.
    pub fn remove_by_data_x<R>(&mut self, data: &P, mut release: R) -> bool
    where
        R: Release<P>,
    {
        match self.scan(|payload| payload.same_ref(data)) {
            Ok(slot) => unsafe { Self::release_after(slot, &mut release) },
            Err(_) => false,
        }
    }
}

impl<P> Drop for SList<P> {
    fn drop(&mut self) {
        self.delete_all();
    }
}

impl<P> Default for SList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug> fmt::Debug for SList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<P> Extend<P> for SList<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        let mut tail = self.tail_slot();
        for data in iter {
            let link = SNode::link_of(SNode::alloc_or_abort(data));
            unsafe { tail.as_mut().attach(link) };
            tail = link;
        }
    }
}

impl<P> FromIterator<P> for SList<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut list = SList::new();
        list.extend(iter);
        list
    }
}

unsafe impl<P: Send> Send for SList<P> {}
unsafe impl<P: Sync> Sync for SList<P> {}
