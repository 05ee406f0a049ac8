use core::fmt;
use core::ptr::NonNull;

/// The link field embedded in a record.
///
/// A `Link` is exactly one pointer wide. `None` terminates a chain and also
/// marks a record that is not linked through this field at all; the two
/// states are indistinguishable from the link alone.
pub struct Link<T> {
    pub(crate) next: Option<NonNull<T>>,
}

impl<T> Link<T> {
    /// Creates an unlinked link.
    pub const fn new() -> Self {
        Link { next: None }
    }

    /// The record this link points to, or `None` at the end of a chain.
    #[inline]
    pub fn next(&self) -> Option<NonNull<T>> {
        self.next
    }
}

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link").field("next", &self.next).finish()
    }
}

unsafe impl<T: Send> Send for Link<T> {}
unsafe impl<T: Sync> Sync for Link<T> {}
