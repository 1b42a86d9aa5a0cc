//! Fixed-size paging over a snapshot of records.

use crate::models::Record;
use std::iter::FusedIterator;

/// Iterator yielding consecutive pages of at most `page_size` records.
///
/// Holds its own copy of the records, so later changes to the address book
/// do not affect pages still to come. Once exhausted it stays exhausted; build
/// a new one from [`AddressBook::iterator`](super::AddressBook::iterator) to
/// page again.
#[derive(Debug)]
pub struct Pages {
    records: Vec<Record>,
    page_size: usize,
    cursor: usize,
}

impl Pages {
    /// `page_size` must be non-zero; the address book checks this.
    pub(crate) fn new(records: Vec<Record>, page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self {
            records,
            page_size,
            cursor: 0,
        }
    }

    fn remaining_pages(&self) -> usize {
        self.records
            .len()
            .saturating_sub(self.cursor)
            .div_ceil(self.page_size)
    }
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.records.len() {
            return None;
        }

        let end = self.cursor.saturating_add(self.page_size).min(self.records.len());
        let page = self.records[self.cursor..end].to_vec();
        self.cursor = end;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_pages();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages {}

impl FusedIterator for Pages {}
