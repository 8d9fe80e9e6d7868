//! Server-side pagination state.
//!
//! The supplier list is paginated on the server; this type carries the page
//! metadata the backend reports and the derived values the list controls need.

use serde::{Deserialize, Serialize};

/// Pagination metadata for one server page of results.
///
/// `page` is 1-based. `total` is the server-reported item count across all
/// pages, not the length of the current page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl Page {
    /// First page with the given page size and an unknown total.
    pub fn first(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        let mut p = Self { page: 1, limit, total };
        p.page = p.clamp(page);
        p
    }

    /// Number of pages: `ceil(total / limit)`, never below 1 so the controls
    /// always have a current page to stand on.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(self.limit as u64);
        pages.clamp(1, u32::MAX as u64) as u32
    }

    /// Clamp a requested page into `[1, total_pages]`.
    pub fn clamp(&self, requested: u32) -> u32 {
        requested.clamp(1, self.total_pages())
    }

    /// 1-based index of the first item on the current page.
    pub fn start_item(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        (self.page as u64 - 1) * self.limit as u64 + 1
    }

    /// 1-based index of the last item on the current page.
    pub fn end_item(&self) -> u64 {
        (self.page as u64 * self.limit as u64).min(self.total)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(Page::new(1, 10, 0).total_pages(), 1);
        assert_eq!(Page::new(1, 10, 1).total_pages(), 1);
        assert_eq!(Page::new(1, 10, 10).total_pages(), 1);
        assert_eq!(Page::new(1, 10, 11).total_pages(), 2);
        assert_eq!(Page::new(1, 10, 95).total_pages(), 10);
    }

    #[test]
    fn start_and_end_items_follow_the_page_window() {
        let p = Page::new(3, 10, 95);
        assert_eq!(p.start_item(), 21);
        assert_eq!(p.end_item(), 30);

        let last = Page::new(10, 10, 95);
        assert_eq!(last.start_item(), 91);
        assert_eq!(last.end_item(), 95);
    }

    #[test]
    fn empty_total_yields_zero_item_window() {
        let p = Page::new(1, 10, 0);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn out_of_range_pages_are_clamped_on_construction() {
        assert_eq!(Page::new(0, 10, 95).page, 1);
        assert_eq!(Page::new(42, 10, 95).page, 10);
    }

    #[test]
    fn prev_next_gating_matches_page_bounds() {
        let first = Page::new(1, 10, 35);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Page::new(4, 10, 35);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    proptest! {
        #[test]
        fn page_is_always_within_bounds(page in 0u32..1000, limit in 1u32..100, total in 0u64..100_000) {
            let p = Page::new(page, limit, total);
            prop_assert!(p.page >= 1);
            prop_assert!(p.page <= p.total_pages());
        }

        #[test]
        fn item_window_never_exceeds_total(page in 1u32..1000, limit in 1u32..100, total in 1u64..100_000) {
            let p = Page::new(page, limit, total);
            prop_assert!(p.start_item() >= 1);
            prop_assert!(p.start_item() <= p.end_item());
            prop_assert!(p.end_item() <= p.total);
            prop_assert!(p.end_item() - p.start_item() + 1 <= p.limit as u64);
        }
    }
}
