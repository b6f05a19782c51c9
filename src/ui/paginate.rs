//! Client-side pagination over an in-memory collection.

/// Number of pages needed to show `count` items, `per_page` at a time.
///
/// Zero items (or a zero page size) means zero pages.
pub fn total_pages(count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    count.div_ceil(per_page)
}

/// Items on the 1-based `page`.
///
/// Pages outside `1..=total_pages` yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
