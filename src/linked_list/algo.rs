//! Comparator-driven operations: ordered insert, sort and find.
//!
//! Every operation here takes a caller-supplied predicate over two payloads.
//! Predicates run synchronously during the traversal and only ever see
//! shared references, so they cannot restructure the list they inspect.

use core::ptr::NonNull;

use super::error::InsertError;
use super::list::SList;
use super::node::SNode;
use super::single::SingleLink;
use super::traits::{Link, NodeWithData};

impl<P> SList<P> {
    /// Insert `data` right before the first node `n` for which
    /// `condition(&data, n.payload)` holds, or at the tail if none does.
    ///
    /// Extra condition data is whatever the closure captures.
    pub fn insert<F>(&mut self, data: P, mut condition: F) -> Result<(), InsertError<P>>
    where
        F: FnMut(&P, &P) -> bool,
    {
        let (Ok(slot) | Err(slot)) = self.scan(|payload| condition(&data, payload));
        unsafe { Self::link_after(slot, data) }
    }

    /// Sort the list in place by relinking its nodes.
    ///
    /// `compare(x, y)` returns `true` when `x` must precede `y`, and should be
    /// a strict weak ordering. The sort is stable: nodes that compare equal
    /// keep their relative order. Merge sort, O(n log n) comparisons and
    /// O(log n) stack.
    ///
    /// If `compare` panics, every node is back in the list, in unspecified
    /// order, when the panic leaves this call.
    pub fn sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&P, &P) -> bool,
    {
        let len = self.size();
        if len < 2 {
            return;
        }
        tracing::trace!(len, "sorting list");
        let chain = self.take_chain();
        let root = self.root_ptr();
        let sorted = unsafe { merge_sort::<P, F>(root, chain, len, &mut compare) };
        unsafe { self.set_chain(sorted) };
    }

    /// Returns `true` if no node is preceded by one that `compare` says must
    /// come after it.
    pub fn is_sorted_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&P, &P) -> bool,
    {
        let mut iter = self.iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for current in iter {
            if compare(current, prev) {
                return false;
            }
            prev = current;
        }
        true
    }

    /// The first node for which `compare(data, node.payload)` holds.
    pub fn find<Q, F>(&self, data: &Q, mut compare: F) -> Option<&SNode<P>>
    where
        Q: ?Sized,
        F: FnMut(&Q, &P) -> bool,
    {
        self.nodes().find(|node| compare(data, node.data()))
    }
}

/// The payload of the node owning `link`.
///
/// # Safety
///
/// `link` must be the link word of a live `SNode<P>`.
#[inline]
unsafe fn payload<'a, P>(link: NonNull<SingleLink>) -> &'a P {
    unsafe { SNode::<P>::from_link(link).as_ref() }.data()
}

/// Chains detached from a list while it is being sorted.
///
/// Dropping a `Detached` splices every chain it still holds back in front of
/// `root`. The sort empties it on the normal path, so this only does work
/// when a comparator panics.
struct Detached {
    root: NonNull<SingleLink>,
    chains: [Option<NonNull<SingleLink>>; 3],
}

impl Detached {
    fn new(root: NonNull<SingleLink>) -> Self {
        Detached {
            root,
            chains: [None; 3],
        }
    }
}

impl Drop for Detached {
    fn drop(&mut self) {
        for head in self.chains.iter_mut().filter_map(Option::take) {
            let mut tail = head;
            // SAFETY: held chains are disjoint, `None` terminated and made of
            // live node links; `root` outlives the sort.
            unsafe {
                while let Some(next) = tail.as_ref().next() {
                    tail = next;
                }
                tail.as_mut().set_next(self.root.as_ref().next());
                self.root.as_mut().set_next(Some(head));
            }
        }
    }
}

/// Sort the `len` links starting at `head` and return the new head.
///
/// # Safety
///
/// `head` must start a chain of exactly `len` live node links ending in
/// `None`, detached from the list whose root is `root`.
unsafe fn merge_sort<P, F>(
    root: NonNull<SingleLink>,
    head: Option<NonNull<SingleLink>>,
    len: usize,
    compare: &mut F,
) -> Option<NonNull<SingleLink>>
where
    F: FnMut(&P, &P) -> bool,
{
    if len < 2 {
        return head;
    }
    let mid = len / 2;
    let mut cut = head?;
    for _ in 1..mid {
        cut = unsafe { cut.as_ref() }.next()?;
    }
    let right = unsafe { cut.as_ref() }.next();
    unsafe { cut.as_mut().set_next(None) };

    let mut held = Detached::new(root);
    held.chains[0] = right;
    held.chains[1] = unsafe { merge_sort::<P, F>(root, head, mid, compare) };
    let right = held.chains[0].take();
    held.chains[0] = unsafe { merge_sort::<P, F>(root, right, len - mid, compare) };
    let (left, right) = (held.chains[1].take(), held.chains[0].take());
    unsafe { merge::<P, F>(root, left, right, compare) }
}

/// Merge two sorted chains. Ties go to `left`.
///
/// # Safety
///
/// Both chains must consist of live node links ending in `None`, detached
/// from the list whose root is `root`.
unsafe fn merge<P, F>(
    root: NonNull<SingleLink>,
    left: Option<NonNull<SingleLink>>,
    right: Option<NonNull<SingleLink>>,
    compare: &mut F,
) -> Option<NonNull<SingleLink>>
where
    F: FnMut(&P, &P) -> bool,
{
    const LEFT: usize = 0;
    const RIGHT: usize = 1;
    const MERGED: usize = 2;

    let mut held = Detached::new(root);
    held.chains[LEFT] = left;
    held.chains[RIGHT] = right;
    let mut tail: Option<NonNull<SingleLink>> = None;
    while let (Some(l), Some(r)) = (held.chains[LEFT], held.chains[RIGHT]) {
        let take_right = unsafe { compare(payload::<P>(r), payload::<P>(l)) };
        let from = if take_right { RIGHT } else { LEFT };
        let mut taken = if take_right { r } else { l };
        held.chains[from] = unsafe { taken.as_ref() }.next();
        unsafe { taken.as_mut().set_next(None) };
        match tail {
            Some(mut t) => unsafe { t.as_mut().set_next(Some(taken)) },
            None => held.chains[MERGED] = Some(taken),
        }
        tail = Some(taken);
    }
    let rest = held.chains[LEFT].take().or_else(|| held.chains[RIGHT].take());
    match tail {
        Some(mut t) => unsafe { t.as_mut().set_next(rest) },
        None => return rest,
    }
    held.chains[MERGED].take()
}
