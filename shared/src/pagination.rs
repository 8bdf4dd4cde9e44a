//! Page-number window for the pagination bar.
//!
//! Pages are shown in fixed groups (`1..=10`, `11..=20`, ...). The window is
//! recomputed from scratch on every render; nothing is retained.

pub const DEFAULT_GROUP_SIZE: u32 = 10;

/// Number of pages needed for `total` items. Zero items means zero pages.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub total_pages: u32,
    pub start: u32,
    /// Inclusive. Less than `start` when there are no pages at all.
    pub end: u32,
}

impl PageWindow {
    /// `group_size` of 0 is treated as 1.
    pub fn compute(current: u32, total_pages: u32, group_size: u32) -> Self {
        let group_size = group_size.max(1);
        let current = current.max(1);
        let start = ((current - 1) / group_size) * group_size + 1;
        let end = start.saturating_add(group_size - 1).min(total_pages);
        Self {
            current,
            total_pages,
            start,
            end,
        }
    }

    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// Page before the current one, clamped to the first page
    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous()
            .then(|| (self.current - 1).clamp(1, self.total_pages))
    }

    /// Page after the current one, clamped to the last page
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| (self.current + 1).clamp(1, self.total_pages))
    }

    /// Last page of the preceding group, when one exists
    pub fn previous_group(&self) -> Option<u32> {
        (self.start > 1 && self.total_pages > 0).then(|| (self.start - 1).min(self.total_pages))
    }

    /// First page of the following group, when one exists
    pub fn next_group(&self) -> Option<u32> {
        (self.end < self.total_pages && !self.is_empty()).then_some(self.end + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(101, 50), 3);
    }

    #[test]
    fn test_total_pages_is_ceiling_division() {
        for page_size in 1..=60u32 {
            for total in 0..=500u64 {
                let expected = (total + u64::from(page_size) - 1) / u64::from(page_size);
                assert_eq!(u64::from(total_pages(total, page_size)), expected);
            }
            assert_eq!(total_pages(0, page_size), 0);
        }
    }

    #[test]
    fn test_window_contains_current_page() {
        for group_size in 1..=12u32 {
            for pages in 1..=40u32 {
                for current in 1..=pages {
                    let window = PageWindow::compute(current, pages, group_size);
                    assert!(window.start <= current && current <= window.end);
                    assert!(window.end - window.start < group_size);
                    assert!(window.end <= pages);
                }
            }
        }
    }

    #[test]
    fn test_window_groups() {
        let window = PageWindow::compute(13, 25, 10);
        assert_eq!((window.start, window.end), (11, 20));
        assert_eq!(window.pages().collect::<Vec<_>>(), (11..=20).collect::<Vec<_>>());
        assert_eq!(window.previous_group(), Some(10));
        assert_eq!(window.next_group(), Some(21));
        assert_eq!(window.previous_page(), Some(12));
        assert_eq!(window.next_page(), Some(14));

        let last = PageWindow::compute(25, 25, 10);
        assert_eq!((last.start, last.end), (21, 25));
        assert_eq!(last.next_group(), None);
        assert_eq!(last.next_page(), None);
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let window = PageWindow::compute(1, 3, 10);
        assert_eq!((window.start, window.end), (1, 3));
        assert_eq!(window.previous_page(), None);
        assert_eq!(window.previous_group(), None);
        assert_eq!(window.next_group(), None);
        assert_eq!(window.next_page(), Some(2));
    }

    #[test]
    fn test_no_pages() {
        let window = PageWindow::compute(1, 0, 10);
        assert!(window.is_empty());
        assert_eq!(window.pages().count(), 0);
        assert_eq!(window.previous_page(), None);
        assert_eq!(window.next_page(), None);
        assert_eq!(window.previous_group(), None);
        assert_eq!(window.next_group(), None);
    }

    #[test]
    fn test_last_group_near_u32_max() {
        let window = PageWindow::compute(u32::MAX, u32::MAX, 10);
        assert_eq!(window.end, u32::MAX);
        assert!(window.pages().any(|p| p == u32::MAX));
        assert_eq!(window.next_page(), None);
        assert_eq!(window.next_group(), None);
        assert_eq!(window.previous_page(), Some(u32::MAX - 1));
    }
}
