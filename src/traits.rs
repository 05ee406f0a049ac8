use core::ptr::NonNull;

use crate::link::Link;

/// Selects one embedded [`Link`] field of a record type.
///
/// An anchor is the compile-time binding between a record type and a single
/// link field inside it. A record with several link fields gets one anchor
/// per field, and each anchor names an independent chain the record can be
/// on at the same time. Implementations are normally generated with
/// `#[derive(Anchor)]` from `slink-derive`.
///
/// # Safety
///
/// `link` must project to the same `Link` field inside the record's own
/// storage on every call. Returning storage outside the record, or a
/// different field on different calls, corrupts every chain built over the
/// anchor.
pub unsafe trait Anchor {
    /// The record type carrying the link field.
    type Record;

    /// Projects a record to the link field this anchor designates.
    ///
    /// # Safety
    ///
    /// `record` must point to a live, initialized record.
    unsafe fn link(record: NonNull<Self::Record>) -> NonNull<Link<Self::Record>>;
}
