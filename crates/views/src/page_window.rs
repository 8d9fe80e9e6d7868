//! Visible page-number window for pagination controls.

/// What the pagination controls render: up to five page numbers centred on
/// the current page, plus prev/next gating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    pub current: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageWindow {
    const WIDTH: u32 = 5;

    pub fn compute(current: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        let current = current.clamp(1, total_pages);

        // Centre the window on the current page, shifting at the edges so it
        // always shows WIDTH numbers when that many pages exist.
        let half = Self::WIDTH / 2;
        let mut start = current.saturating_sub(half).max(1);
        let end = (start + Self::WIDTH - 1).min(total_pages);
        start = end.saturating_sub(Self::WIDTH - 1).max(1);

        Self {
            pages: (start..=end).collect(),
            current,
            prev_enabled: current > 1,
            next_enabled: current < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn small_page_counts_show_every_page() {
        let w = PageWindow::compute(2, 3);
        assert_eq!(w.pages, vec![1, 2, 3]);
        assert!(w.prev_enabled);
        assert!(w.next_enabled);
    }

    #[test]
    fn window_centres_on_the_current_page() {
        let w = PageWindow::compute(7, 20);
        assert_eq!(w.pages, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn window_clamps_at_both_edges() {
        assert_eq!(PageWindow::compute(1, 20).pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(PageWindow::compute(20, 20).pages, vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn prev_and_next_disable_at_the_bounds() {
        let first = PageWindow::compute(1, 4);
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);

        let last = PageWindow::compute(4, 4);
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);

        let only = PageWindow::compute(1, 1);
        assert!(!only.prev_enabled);
        assert!(!only.next_enabled);
    }

    proptest! {
        #[test]
        fn window_always_contains_current_and_stays_in_range(
            current in 0u32..200,
            total in 1u32..200,
        ) {
            let w = PageWindow::compute(current, total);
            prop_assert!(w.pages.contains(&w.current));
            prop_assert!(w.pages.len() <= 5);
            prop_assert!(*w.pages.first().unwrap() >= 1);
            prop_assert!(*w.pages.last().unwrap() <= total);
            // Contiguous ascending run.
            for pair in w.pages.windows(2) {
                prop_assert_eq!(pair[1], pair[0] + 1);
            }
        }
    }
}
