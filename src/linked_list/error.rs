//! Error types for list operations.

use core::alloc::Layout;
use core::fmt;

/// Failure of a list operation.
///
/// Lookups that find nothing and out-of-range positions are not errors; they
/// surface as `None`, `false` or a no-op on the operation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A node could not be allocated.
    AllocFailed(Layout),
    /// The lock of a [`LockedList`](super::locked::LockedList) is already
    /// held, by another thread or by the caller itself.
    #[cfg(feature = "locked")]
    Busy,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::AllocFailed(layout) => write!(
                f,
                "failed to allocate a list node of {} bytes (align {})",
                layout.size(),
                layout.align()
            ),
            #[cfg(feature = "locked")]
            ListError::Busy => f.write_str("list is locked"),
        }
    }
}

impl core::error::Error for ListError {}

/// An inserting operation that could not link its payload.
///
/// The payload is handed back untouched, so owning handles are never lost to
/// a failed allocation.
pub struct InsertError<P> {
    error: ListError,
    data: P,
}

impl<P> InsertError<P> {
    pub(crate) fn new(error: ListError, data: P) -> Self {
        InsertError { error, data }
    }

    /// What went wrong.
    pub fn error(&self) -> ListError {
        self.error
    }

    /// Take back the payload that was not inserted.
    pub fn into_data(self) -> P {
        self.data
    }
}

impl<P> fmt::Debug for InsertError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<P> fmt::Display for InsertError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<P> core::error::Error for InsertError<P> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<P> From<InsertError<P>> for ListError {
    fn from(err: InsertError<P>) -> Self {
        err.error
    }
}
