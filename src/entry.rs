use slink_derive::Anchor;

use crate::link::Link;

/// A ready-made record wrapping a value of `T`.
///
/// `Entry` is for callers that want an intrusive list without declaring
/// their own record type. Records that need several simultaneous
/// memberships declare their own struct with one [`Link`] field per chain
/// instead.
///
/// ```
/// use core::ptr::NonNull;
/// use slink::{Entry, List, entry::EntryLinkAnchor};
///
/// let mut list: List<EntryLinkAnchor<i32>> = List::new();
/// let mut entry = Entry::new(7);
/// list.push(NonNull::from(&mut entry));
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Anchor)]
#[anchor(crate_path = "crate")]
pub struct Entry<T> {
    link: Link<Entry<T>>,
    data: T,
}

impl<T> Entry<T> {
    /// Creates an unlinked entry holding `data`.
    pub const fn new(data: T) -> Self {
        Entry {
            link: Link::new(),
            data,
        }
    }

    /// The wrapped value.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The wrapped value, mutably.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Consumes the entry. It must not be linked into any list.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Default> Default for Entry<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
