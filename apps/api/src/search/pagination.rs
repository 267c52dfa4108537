use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const MAX_PAGE_SIZE: usize = 100;

/// One 1-based page of results plus the totals needed to render a pager.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub page_count: usize,
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Slices `items` into page `page` of `page_size`.
///
/// Never fails: page 0 is treated as page 1, a page past the end is empty,
/// and the page size is clamped to `1..=MAX_PAGE_SIZE`.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    let total = items.len();

    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total,
        page_count: page_count(total, page_size),
    }
}
