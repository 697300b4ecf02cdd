//! Deterministic pagination over an ordered sequence.
//!
//! Role-agnostic and independent of the underlying data: the same engine
//! slices every dashboard table.

use serde::Serialize;

/// A window over an ordered sequence plus the metadata dashboards render
/// as "showing X–Y of Z".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based index of the first item in this page; 0 when empty.
    pub from: usize,
    /// 1-based index of the last item in this page; 0 when empty.
    pub to: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slices `items` into the requested page.
///
/// Out-of-range requests (page 0, or past `total_pages`) are not clamped:
/// they yield an empty `items` with `from == to == 0` so callers render
/// "no results" instead of failing. A page size of 0 behaves like an empty
/// sequence.
pub fn paginate<T: Clone>(items: &[T], page_number: usize, page_size: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = if total_items == 0 || page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    if page_number == 0 || page_number > total_pages {
        return Page {
            items: Vec::new(),
            page_number,
            page_size,
            total_items,
            total_pages,
            from: 0,
            to: 0,
        };
    }

    let start = (page_number - 1) * page_size;
    let end = usize::min(start + page_size, total_items);

    Page {
        items: items[start..end].to_vec(),
        page_number,
        page_size,
        total_items,
        total_pages,
        from: start + 1,
        to: end,
    }
}

/// Jump to the first page.
pub fn first_page(_current: usize, _total_pages: usize) -> usize {
    1
}

/// One page back; a no-op at the first page.
pub fn prev_page(current: usize, total_pages: usize) -> usize {
    clamp_page(current.saturating_sub(1), total_pages)
}

/// One page forward; a no-op at the last page.
pub fn next_page(current: usize, total_pages: usize) -> usize {
    clamp_page(current.saturating_add(1), total_pages)
}

/// Jump to the last page.
pub fn last_page(_current: usize, total_pages: usize) -> usize {
    total_pages.max(1)
}

// An empty queue still navigates to page 1, never page 0.
fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
