use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::link::Link;
use crate::list::List;
use crate::traits::Anchor;

/// A forward-only cursor over a list.
///
/// A cursor addresses the *slot* currently under examination, not a record:
/// it starts at the list's head slot, and each [`advance`](Cursor::advance)
/// moves it to the link field inside the record it just looked through. The
/// last slot of a chain holds the terminator, so the end of the list is
/// observed as [`value`](Cursor::value) returning `None`, with no walk back
/// from the head at any point.
pub struct Cursor<'a, A: Anchor> {
    slot: NonNull<Link<A::Record>>,
    _list: PhantomData<&'a List<A>>,
}

impl<'a, A: Anchor> Cursor<'a, A> {
    pub(crate) fn new(slot: NonNull<Link<A::Record>>) -> Self {
        Cursor {
            slot,
            _list: PhantomData,
        }
    }

    /// The record in the current slot, or `None` at the end of the chain.
    #[inline]
    pub fn value(&self) -> Option<NonNull<A::Record>> {
        unsafe { self.slot.as_ref().next }
    }

    /// Moves the cursor to the link field inside the current record.
    ///
    /// Must not be called when [`value`](Cursor::value) is `None`; this is
    /// checked in debug builds only.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(
            self.value().is_some(),
            "cursor advanced past the end of the chain"
        );
        if let Some(record) = self.value() {
            self.slot = unsafe { A::link(record) };
        }
    }
}

/// An iterator over the records of a list, yielding raw record pointers.
pub struct Iter<'a, A: Anchor> {
    cursor: Cursor<'a, A>,
}

impl<'a, A: Anchor> Iter<'a, A> {
    pub(crate) fn new(cursor: Cursor<'a, A>) -> Self {
        Iter { cursor }
    }
}

impl<'a, A: Anchor> Iterator for Iter<'a, A> {
    type Item = NonNull<A::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.cursor.value()?;
        self.cursor.advance();
        Some(record)
    }
}

unsafe impl<'a, A: Anchor> Send for Cursor<'a, A> where A::Record: Send {}
unsafe impl<'a, A: Anchor> Sync for Cursor<'a, A> where A::Record: Sync {}

unsafe impl<'a, A: Anchor> Send for Iter<'a, A> where A::Record: Send {}
unsafe impl<'a, A: Anchor> Sync for Iter<'a, A> where A::Record: Sync {}
