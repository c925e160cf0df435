use crossbeam_utils::CachePadded;
use spin::Mutex;

use super::error::ListError;
use super::list::SList;

/// An [`SList`] behind a spin lock, for lists shared between threads.
///
/// The list itself has no internal synchronization; this wrapper holds one
/// exclusive lock for the duration of each access.
pub struct LockedList<P> {
    inner: CachePadded<Mutex<SList<P>>>,
}

impl<P> LockedList<P> {
    /// Creates a new, empty locked list.
    pub const fn new() -> Self {
        Self::from_list(SList::new())
    }

    /// Wrap an existing list.
    pub const fn from_list(list: SList<P>) -> Self {
        LockedList {
            inner: CachePadded::new(Mutex::new(list)),
        }
    }

    /// Run `f` with exclusive access to the list, spinning until the lock is
    /// free.
    ///
    /// Calling `with` again from inside `f` never returns; use
    /// [`try_with`](Self::try_with) where reentrancy is possible.
    pub fn with<R>(&self, f: impl FnOnce(&mut SList<P>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Run `f` with exclusive access to the list if the lock is free.
    ///
    /// Fails with [`ListError::Busy`] instead of waiting.
    pub fn try_with<R>(&self, f: impl FnOnce(&mut SList<P>) -> R) -> Result<R, ListError> {
        let Some(mut guard) = self.inner.try_lock() else {
            tracing::trace!("list lock is busy");
            return Err(ListError::Busy);
        };
        Ok(f(&mut *guard))
    }

    /// Access the list without locking; `&mut self` proves exclusivity.
    pub fn get_mut(&mut self) -> &mut SList<P> {
        self.inner.get_mut()
    }

    /// Unwrap the list.
    pub fn into_inner(self) -> SList<P> {
        CachePadded::into_inner(self.inner).into_inner()
    }

    /// Number of nodes, taken under the lock.
    pub fn size(&self) -> usize {
        self.with(|list| list.size())
    }
}

impl<P> Default for LockedList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> From<SList<P>> for LockedList<P> {
    fn from(list: SList<P>) -> Self {
        Self::from_list(list)
    }
}
