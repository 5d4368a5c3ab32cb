// ABOUTME: Offset pagination over normalized search results
// ABOUTME: Slices result lists into fixed-size pages with indexes clamped into range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// One page of a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    /// The items in this page (shorter than `page_size` on the last page)
    pub items: &'a [T],
    /// Zero-based page index, always within `0..total_pages`
    pub index: usize,
    /// Number of pages, at least 1 even for an empty list
    pub total_pages: usize,
    /// Items per page
    pub page_size: usize,
    /// Number of items across all pages
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// Whether a later page exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages
    }

    /// Whether an earlier page exists
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// One-based page number for display
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index + 1
    }
}

/// Number of pages needed for `total_items`, never less than 1.
///
/// A `page_size` of zero is treated as 1.
#[must_use]
pub const fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = if page_size == 0 { 1 } else { page_size };
    let pages = total_items.div_ceil(page_size);
    if pages == 0 {
        1
    } else {
        pages
    }
}

/// Clamp a requested page index into `0..total_pages`
#[must_use]
pub fn clamp_index(index: i64, total_pages: usize) -> usize {
    let last = total_pages.saturating_sub(1);
    usize::try_from(index.max(0)).map_or(last, |index| index.min(last))
}

/// Slice `items` into the page at `index`.
///
/// Out-of-range indexes (negative or past the end) are clamped onto the first
/// or last page.
#[must_use]
pub fn page_of<T>(items: &[T], page_size: usize, index: i64) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let index = clamp_index(index, total_pages);

    let start = (index * page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        items: &items[start..end],
        index,
        total_pages,
        page_size,
        total_items: items.len(),
    }
}

/// Navigation state over the current result list.
///
/// Holds the list of the latest query; replacing it resets to the first page.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    index: usize,
}

impl<T> Paginator<T> {
    /// Create a paginator positioned on the first page
    #[must_use]
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            index: 0,
        }
    }

    /// The page at the current index
    #[must_use]
    pub fn current(&self) -> Page<'_, T> {
        page_of(&self.items, self.page_size, self.index_as_i64())
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self) -> Page<'_, T> {
        if self.index + 1 < self.total_pages() {
            self.index += 1;
        }
        self.current()
    }

    /// Go back one page; no-op on the first page
    pub fn prev_page(&mut self) -> Page<'_, T> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Jump to a page, clamping out-of-range indexes
    pub fn go_to(&mut self, index: i64) -> Page<'_, T> {
        self.index = clamp_index(index, self.total_pages());
        self.current()
    }

    /// Return to the first page
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Replace the result list with a new query's results and reset to the first page
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.reset();
    }

    /// Current zero-based page index
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of pages for the current list
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    /// Items per page
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// The whole result list
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn index_as_i64(&self) -> i64 {
        i64::try_from(self.index).unwrap_or(i64::MAX)
    }
}
