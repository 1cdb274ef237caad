// LandSearch - core/paginate.rs
//
// Pagination controller: slices a match set into fixed-size pages and owns
// the current-page state transitions (fresh search, next, previous, jump).
// Core layer: pure logic, no I/O or UI dependencies.

/// One window of a paginated match set.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The records on this page, borrowed from the match set.
    pub items: &'a [T],

    /// The page actually shown, after clamping (1-based).
    pub page: usize,

    /// `ceil(len / page_size)`; 0 for an empty match set.
    pub total_pages: usize,

    /// 1-based display number of the first item on this page.
    pub first_row: usize,
}

/// Number of pages needed for `len` items. A `page_size` of 0 is treated as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Slice `matches` to the requested page.
///
/// `page` is clamped into `[1, max(total_pages, 1)]` first, so out-of-range
/// requests return the nearest valid page rather than an empty slice.
pub fn paginate<T>(matches: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total = total_pages(matches.len(), page_size);
    let page = page.clamp(1, total.max(1));

    let start = ((page - 1) * page_size).min(matches.len());
    let end = (page * page_size).min(matches.len());

    Page {
        items: &matches[start..end],
        page,
        total_pages: total,
        first_row: (page - 1) * page_size + 1,
    }
}

/// Current-page state for the results view.
///
/// The only state kept is the page size, the current page, and the size of
/// the match set it applies to; every change goes through the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    page_size: usize,
    current_page: usize,
    match_count: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            match_count: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.match_count, self.page_size)
    }

    /// A new match set arrived: go back to page 1.
    pub fn reset(&mut self, match_count: usize) {
        self.match_count = match_count;
        self.current_page = 1;
    }

    /// Advance one page. No-op on the last page. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. No-op on the first page. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, clamping to the nearest bound when out of range.
    /// Returns the page now current.
    pub fn jump_to(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages().max(1));
        self.current_page
    }

    /// Move by a signed number of pages, one step at a time, stopping at
    /// either bound. Returns whether the page changed.
    pub fn step(&mut self, delta: isize) -> bool {
        let before = self.current_page;
        for _ in 0..delta.unsigned_abs() {
            let moved = if delta > 0 {
                self.next()
            } else {
                self.previous()
            };
            if !moved {
                break;
            }
        }
        self.current_page != before
    }

    /// Pagination controls are only needed when results exceed one page.
    pub fn needs_controls(&self) -> bool {
        self.match_count > self.page_size
    }

    /// The current window over `matches`.
    pub fn window<'a, T>(&self, matches: &'a [T]) -> Page<'a, T> {
        paginate(matches, self.page_size, self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_first_page_of_25() {
        let matches = items(25);
        let page = paginate(&matches, 10, 1);
        assert_eq!(page.items, &matches[0..10]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.first_row, 1);
    }

    #[test]
    fn test_last_page_is_partial() {
        let matches = items(25);
        let page = paginate(&matches, 10, 3);
        assert_eq!(page.items, &matches[20..25]);
        assert_eq!(page.first_row, 21);
    }

    #[test]
    fn test_page_is_clamped() {
        let matches = items(25);
        assert_eq!(paginate(&matches, 10, 0).page, 1);
        let beyond = paginate(&matches, 10, 99);
        assert_eq!(beyond.page, 3);
        assert_eq!(beyond.items, &matches[20..25]);
    }

    #[test]
    fn test_empty_matches() {
        let matches: Vec<usize> = Vec::new();
        let page = paginate(&matches, 10, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_paginate_is_idempotent() {
        let matches = items(37);
        assert_eq!(paginate(&matches, 10, 2), paginate(&matches, 10, 2));
    }

    #[test]
    fn test_pages_cover_all_matches_exactly_once() {
        for len in [0, 1, 9, 10, 11, 25, 100] {
            let matches = items(len);
            let total = total_pages(len, 10);
            let mut seen = Vec::new();
            for p in 1..=total {
                let page = paginate(&matches, 10, p);
                assert!(page.items.len() <= 10);
                seen.extend_from_slice(page.items);
            }
            assert_eq!(seen, matches, "len {len}");
        }
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut state = PageState::new(10);
        state.reset(25);
        assert!(state.next());
        assert!(state.next());
        assert_eq!(state.current_page(), 3);
        assert!(!state.next());
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_previous_stops_at_first_page() {
        let mut state = PageState::new(10);
        state.reset(25);
        assert!(!state.previous());
        assert_eq!(state.current_page(), 1);
        state.next();
        assert!(state.previous());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut state = PageState::new(10);
        state.reset(25);
        state.jump_to(3);
        state.reset(40);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 4);
    }

    #[test]
    fn test_jump_to_clamps() {
        let mut state = PageState::new(10);
        state.reset(25);
        assert_eq!(state.jump_to(2), 2);
        assert_eq!(state.jump_to(0), 1);
        assert_eq!(state.jump_to(7), 3);

        state.reset(0);
        assert_eq!(state.jump_to(4), 1);
    }

    #[test]
    fn test_step_respects_bounds() {
        let mut state = PageState::new(10);
        state.reset(25);
        assert!(state.step(5));
        assert_eq!(state.current_page(), 3);
        assert!(!state.step(1));
        assert!(state.step(-1));
        assert_eq!(state.current_page(), 2);
        assert!(state.step(-10));
        assert_eq!(state.current_page(), 1);
        assert!(!state.step(0));
    }

    #[test]
    fn test_needs_controls_only_beyond_one_page() {
        let mut state = PageState::new(10);
        state.reset(10);
        assert!(!state.needs_controls());
        state.reset(11);
        assert!(state.needs_controls());
    }

    #[test]
    fn test_window_follows_current_page() {
        let matches = items(25);
        let mut state = PageState::new(10);
        state.reset(matches.len());
        state.next();
        let page = state.window(&matches);
        assert_eq!(page.items, &matches[10..20]);
        assert_eq!(page.first_row, 11);
    }
}
