/// MediaView Pagination
///
/// Page arithmetic over a sorted record list. Requested pages outside the
/// valid range are clamped, never rejected.
///
/// # Examples
///
/// ```
/// use mediaview::paginate::{paginate, parse_jump_target};
///
/// let rows: Vec<u32> = (0..23).collect();
/// let page = paginate(&rows, 99, 10);
///
/// assert_eq!(page.current_page, 3);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.slice, &[20, 21, 22]);
///
/// assert_eq!(parse_jump_target(" 2 ", page.total_pages), Some(2));
/// assert_eq!(parse_jump_target("two", page.total_pages), None);
/// ```

use std::ops::{Range, RangeInclusive};

/// Page sizes offered to the user
pub const PAGE_SIZE_CHOICES: [usize; 5] = [5, 10, 20, 25, 50];

/// Number of numbered page buttons shown around the current page
pub const PAGE_WINDOW_WIDTH: usize = 7;

/// One page of a list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub slice: &'a [T],
    /// 1-based, always within `1..=total_pages`
    pub current_page: usize,
    pub total_pages: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Number of pages needed for `count` items, at least 1.
/// A page size of 0 is treated as 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested 1-based page into `1..=total_pages`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of the clamped page within a list of `count` items
pub fn page_range(count: usize, page: usize, page_size: usize) -> (Range<usize>, usize, usize) {
    let size = page_size.max(1);
    let total = total_pages(count, size);
    let current = clamp_page(page, total);
    let start = ((current - 1) * size).min(count);
    let end = (start + size).min(count);
    (start..end, current, total)
}

/// Slice `items` to the requested page
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let (range, current_page, total_pages) = page_range(items.len(), page, page_size);
    Page {
        slice: &items[range],
        current_page,
        total_pages,
    }
}

/// Parse free-form "jump to page" text.
///
/// The trimmed text must be a finite number; the target is its floor,
/// clamped into `1..=total_pages`. Empty or invalid input returns `None`.
pub fn parse_jump_target(input: &str, total_pages: usize) -> Option<usize> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }

    let n: f64 = text.parse().ok()?;
    if !n.is_finite() {
        return None;
    }

    let floored = n.floor();
    let total = total_pages.max(1);
    let target = if floored < 1.0 {
        1
    } else if floored >= total as f64 {
        total
    } else {
        floored as usize
    };
    Some(target)
}

/// Numbered page buttons around the current page, at most
/// `PAGE_WINDOW_WIDTH` wide and shifted to stay within `1..=total_pages`.
/// An out-of-range `current_page` is clamped first.
pub fn page_window(current_page: usize, total_pages: usize) -> RangeInclusive<usize> {
    let span = PAGE_WINDOW_WIDTH - 1;
    let total = total_pages.max(1);
    let current = clamp_page(current_page, total);
    let mut start = current.saturating_sub(span / 2).max(1);
    let end = total.min(start + span);
    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }
    start..=end
}
