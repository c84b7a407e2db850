use core::cmp::Ordering;
use palette_reconcile_common::pal_entry::PalEntry;

/// Which palette a [`RemapWorkItem`] came from.
///
/// The declaration order is the sort order for items of equal colour:
/// foreign entries sort directly before the base entries they duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Origin {
    /// An entry of the foreign palette still waiting for a remap target.
    Foreign,
    /// An entry of the base palette.
    Base,
    /// A foreign entry already remapped to an exact duplicate.
    Consumed,
}

/// A palette entry scheduled for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RemapWorkItem {
    /// 24-bit `0xRRGGBB` colour.
    pub color: u32,
    pub origin: Origin,
    /// Index of the entry in its palette.
    pub index: u8,
}

impl RemapWorkItem {
    pub const EMPTY: Self = Self {
        color: 0,
        origin: Origin::Base,
        index: 0,
    };

    #[inline(always)]
    pub fn new(entry: PalEntry, origin: Origin, index: u8) -> Self {
        Self {
            color: entry.rgb(),
            origin,
            index,
        }
    }
}

/// Orders work items by colour; among equal colours, foreign before base.
///
/// The exact-match pass depends on this: a foreign colour with a duplicate in the base palette
/// always ends up directly in front of a base entry of the same colour.
/// Remaining ties are broken by index so the order is fully deterministic.
#[inline]
pub(crate) fn compare_work_items(a: &RemapWorkItem, b: &RemapWorkItem) -> Ordering {
    a.color
        .cmp(&b.color)
        .then(a.origin.cmp(&b.origin))
        .then(a.index.cmp(&b.index))
}
