//! Pagination
//!
//! Page slicing and the page-number strip shown under tables and grids.

/// One page of a larger sequence (pages are 1-based)
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// 1-based index of the first item shown, 0 when empty
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// 1-based index of the last item shown, 0 when empty
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.first_index(),
            self.last_index(),
            self.total_items
        )
    }
}

/// Slice `items` into the requested page, clamping out-of-range pages
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Page buttons to render: first and last page always, a window of
/// `delta` pages around `current`, ellipses for the gaps.
pub fn visible_pages(current: usize, total: usize, delta: usize) -> Vec<PageMarker> {
    if total <= 5 {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let window_start = current.saturating_sub(delta).max(2);
    let window_end = (current + delta).min(total - 1);

    let mut markers = vec![PageMarker::Page(1)];
    if current.saturating_sub(delta) > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((window_start..=window_end).map(PageMarker::Page));
    if current + delta < total - 1 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Page(total));
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page as P};

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=13).collect();
        let page = paginate(&items, 2, 5);
        assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous());
        assert!(page.has_next());
        assert_eq!(page.summary(), "Showing 6 to 10 of 13 results");

        let last = paginate(&items, 3, 5);
        assert_eq!(last.items, vec![11, 12, 13]);
        assert_eq!(last.last_index(), 13);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_clamps_page() {
        let items: Vec<u32> = (1..=4).collect();
        assert_eq!(paginate(&items, 9, 3).page, 2);
        assert_eq!(paginate(&items, 0, 3).page, 1);
        assert_eq!(paginate(&items, 1, 0).per_page, 1);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate::<u32>(&[], 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.first_index(), 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_few_pages_listed_in_full() {
        assert_eq!(visible_pages(1, 3, 2), vec![P(1), P(2), P(3)]);
        assert!(visible_pages(1, 0, 2).is_empty());
    }

    #[test]
    fn test_window_with_ellipses() {
        assert_eq!(
            visible_pages(10, 20, 2),
            vec![P(1), Ellipsis, P(8), P(9), P(10), P(11), P(12), Ellipsis, P(20)]
        );
    }

    #[test]
    fn test_window_at_edges() {
        assert_eq!(visible_pages(1, 10, 2), vec![P(1), P(2), P(3), Ellipsis, P(10)]);
        assert_eq!(visible_pages(10, 10, 1), vec![P(1), Ellipsis, P(9), P(10)]);
        assert_eq!(visible_pages(3, 10, 1), vec![P(1), P(2), P(3), P(4), Ellipsis, P(10)]);
    }
}
