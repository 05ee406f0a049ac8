use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::cursor::{Cursor, Iter};
use crate::link::Link;
use crate::traits::Anchor;

/// An intrusive singly linked list over one anchor.
///
/// The list owns no records and allocates nothing. Its entire state is the
/// head slot, a [`Link`] of the same shape as the link field inside every
/// record, so a list is fully described by "head slot plus anchor". Records
/// are chained through the field the anchor designates and remain owned by
/// the caller for their whole lifetime.
///
/// Internally every operation walks *slots* (`NonNull<Link<_>>`): the head
/// slot and the link fields inside records are interchangeable, which is why
/// none of the unlink paths special-case the first record.
pub struct List<A: Anchor> {
    head: Link<A::Record>,
    _anchor: PhantomData<A>,
}

impl<A: Anchor> List<A> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        List {
            head: Link::new(),
            _anchor: PhantomData,
        }
    }

    /// The first record of the list, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<NonNull<A::Record>> {
        self.head.next
    }

    /// Whether the list holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.next.is_none()
    }

    /// The number of records in the list. Walks the whole chain.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.head.next;
        while let Some(record) = current {
            count += 1;
            current = unsafe { Self::next_of(record) };
        }
        count
    }

    /// Pushes a record at the front of the list.
    ///
    /// The record must not already be linked through this anchor's field,
    /// here or in any other list.
    pub fn push(&mut self, record: NonNull<A::Record>) {
        unsafe {
            Self::slot_mut(A::link(record)).next = self.head.next;
        }
        self.head.next = Some(record);
    }

    /// Removes and returns the first record, or `None` if the list is empty.
    ///
    /// The returned record's link field is reset to unlinked.
    pub fn pop(&mut self) -> Option<NonNull<A::Record>> {
        let record = self.head.next?;
        self.head.next = unsafe { Self::slot_mut(A::link(record)).next.take() };
        Some(record)
    }

    /// Appends a record at the back of the list. Walks the whole chain.
    ///
    /// The record must not already be linked through this anchor's field.
    pub fn push_back(&mut self, record: NonNull<A::Record>) {
        unsafe {
            let mut slot = NonNull::from(&mut self.head);
            while let Some(current) = Self::slot_mut(slot).next {
                slot = A::link(current);
            }
            Self::slot_mut(A::link(record)).next = None;
            Self::slot_mut(slot).next = Some(record);
        }
    }

    /// Removes and returns the last record, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<NonNull<A::Record>> {
        unsafe {
            let mut slot = NonNull::from(&mut self.head);
            let mut last = Self::slot_mut(slot).next?;
            while let Some(next) = Self::next_of(last) {
                slot = A::link(last);
                last = next;
            }
            Self::slot_mut(slot).next = None;
            Some(last)
        }
    }

    /// Removes `record` from the list, comparing by address.
    ///
    /// Returns the record if it was present, leaving the relative order of
    /// the remaining records unchanged, and `None` if it was not. The
    /// removed record's link field is reset to unlinked.
    pub fn remove(&mut self, record: NonNull<A::Record>) -> Option<NonNull<A::Record>> {
        unsafe {
            let mut slot = NonNull::from(&mut self.head);
            while let Some(current) = Self::slot_mut(slot).next {
                if current == record {
                    Self::slot_mut(slot).next = Self::slot_mut(A::link(current)).next.take();
                    return Some(current);
                }
                slot = A::link(current);
            }
        }
        None
    }

    /// Returns the first record matching the predicate, or `None`.
    pub fn find<F>(&self, mut matches: F) -> Option<NonNull<A::Record>>
    where
        F: FnMut(&A::Record) -> bool,
    {
        let mut current = self.head.next;
        while let Some(record) = current {
            unsafe {
                if matches(record.as_ref()) {
                    return Some(record);
                }
                current = Self::next_of(record);
            }
        }
        None
    }

    /// Calls `visit` once per record, head to tail.
    ///
    /// The successor is read before `visit` runs. Relinking the visited
    /// record through this anchor's field from inside `visit` leaves the
    /// traversal in an unspecified position.
    pub fn for_each<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut A::Record),
    {
        let mut current = self.head.next;
        while let Some(mut record) = current {
            unsafe {
                current = Self::next_of(record);
                visit(record.as_mut());
            }
        }
    }

    /// Merges `other` into `self`, leaving `other` empty.
    ///
    /// Both lists must already be sorted ascending under `cmp`. The result
    /// is the stable two-way merge: for records comparing equal, records
    /// from `self` come before records from `other`.
    pub fn merge_by<F>(&mut self, other: &mut Self, mut cmp: F)
    where
        F: FnMut(&A::Record, &A::Record) -> Ordering,
    {
        let merged = unsafe {
            Self::merge_chains(self.head.next.take(), other.head.next.take(), &mut cmp)
        };
        self.head.next = merged;
    }

    /// Sorts the list in place, ascending under `cmp`.
    ///
    /// Merge sort over the chain: stable, allocation free, with O(log n)
    /// recursion depth.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&A::Record, &A::Record) -> Ordering,
    {
        let sorted = unsafe { Self::sort_chain(self.head.next.take(), &mut cmp) };
        self.head.next = sorted;
    }

    /// Positions a cursor at the head slot of the list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while the
    /// cursor is alive.
    pub unsafe fn cursor(&self) -> Cursor<'_, A> {
        Cursor::new(NonNull::from(&self.head))
    }

    /// Iterates over the records of the list, head to tail.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while the
    /// iterator is alive.
    pub unsafe fn iter(&self) -> Iter<'_, A> {
        Iter::new(unsafe { self.cursor() })
    }

    /// The successor of `record` through this anchor's field.
    ///
    /// # Safety
    ///
    /// `record` must point to a live record.
    #[inline]
    pub(crate) unsafe fn next_of(record: NonNull<A::Record>) -> Option<NonNull<A::Record>> {
        unsafe { A::link(record).as_ref().next }
    }

    /// # Safety
    ///
    /// `slot` must point to a live link, and the reference must be the only
    /// one into it for its lifetime.
    #[inline]
    unsafe fn slot_mut<'s>(mut slot: NonNull<Link<A::Record>>) -> &'s mut Link<A::Record> {
        unsafe { slot.as_mut() }
    }

    /// Stable two-way merge of two ascending chains.
    ///
    /// # Safety
    ///
    /// Every record reachable from either chain must be live, and the two
    /// chains must be disjoint.
    unsafe fn merge_chains<F>(
        mut left: Option<NonNull<A::Record>>,
        mut right: Option<NonNull<A::Record>>,
        cmp: &mut F,
    ) -> Option<NonNull<A::Record>>
    where
        F: FnMut(&A::Record, &A::Record) -> Ordering,
    {
        unsafe {
            let mut merged: Link<A::Record> = Link::new();
            let mut slot = NonNull::from(&mut merged);
            loop {
                match (left, right) {
                    (Some(l), Some(r)) => {
                        // Ties take the left record, so equal keys keep
                        // their input order.
                        if cmp(l.as_ref(), r.as_ref()) == Ordering::Greater {
                            Self::slot_mut(slot).next = Some(r);
                            slot = A::link(r);
                            right = Self::next_of(r);
                        } else {
                            Self::slot_mut(slot).next = Some(l);
                            slot = A::link(l);
                            left = Self::next_of(l);
                        }
                    }
                    (rest @ Some(_), None) | (None, rest @ Some(_)) => {
                        Self::slot_mut(slot).next = rest;
                        break;
                    }
                    (None, None) => {
                        Self::slot_mut(slot).next = None;
                        break;
                    }
                }
            }
            merged.next
        }
    }

    /// Merge sort over a detached chain.
    ///
    /// # Safety
    ///
    /// Every record reachable from `head` must be live.
    unsafe fn sort_chain<F>(
        head: Option<NonNull<A::Record>>,
        cmp: &mut F,
    ) -> Option<NonNull<A::Record>>
    where
        F: FnMut(&A::Record, &A::Record) -> Ordering,
    {
        unsafe {
            let first = head?;
            let Some(second) = Self::next_of(first) else {
                return head;
            };
            // Fast/slow walk to the midpoint. Cutting by position keeps the
            // sort stable; an alternating split would not.
            let mut slow = first;
            let mut fast = Self::next_of(second);
            while let Some(ahead) = fast {
                fast = Self::next_of(ahead).and_then(|ahead| Self::next_of(ahead));
                if let Some(mid) = Self::next_of(slow) {
                    slow = mid;
                }
            }
            let back = Self::slot_mut(A::link(slow)).next.take();
            let front = Self::sort_chain(head, cmp);
            let back = Self::sort_chain(back, cmp);
            Self::merge_chains(front, back, cmp)
        }
    }
}

impl<A: Anchor> Default for List<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Anchor> fmt::Debug for List<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List").field("head", &self.head).finish()
    }
}

unsafe impl<A: Anchor> Send for List<A> where A::Record: Send {}
unsafe impl<A: Anchor> Sync for List<A> where A::Record: Sync {}
