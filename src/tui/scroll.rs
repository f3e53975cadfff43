// Page scrolling
//
// ScrollState tracks offset/content/viewport for a scrollable region.
// PageScroll wraps it for the main page and refuses to move while the
// PageSurface is scroll-locked (a project modal is open).

use crate::page::PageSurface;

/// Scroll state for a single region
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Line index at the top of the viewport
    offset: usize,
    total: usize,
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport sizes; call every frame
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // Dimensions unknown before the first frame; render clamps
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Jump so `line` is at the top (clamped)
    pub fn scroll_to(&mut self, line: usize) {
        self.offset = line.min(self.max_offset());
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

/// Direction/amount for a page scroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMove {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    To(usize),
}

/// The document scroll; frozen while the page is scroll-locked
#[derive(Debug, Clone)]
pub struct PageScroll {
    state: ScrollState,
    page: PageSurface,
}

impl PageScroll {
    pub fn new(page: PageSurface) -> Self {
        Self {
            state: ScrollState::new(),
            page,
        }
    }

    /// Apply a move; returns false when the page is locked
    pub fn apply(&mut self, movement: ScrollMove) -> bool {
        if self.page.is_scroll_locked() {
            return false;
        }
        match movement {
            ScrollMove::Up => self.state.scroll_up(),
            ScrollMove::Down => self.state.scroll_down(),
            ScrollMove::PageUp => self.state.page_up(),
            ScrollMove::PageDown => self.state.page_down(),
            ScrollMove::Top => self.state.scroll_to_top(),
            ScrollMove::Bottom => self.state.scroll_to_bottom(),
            ScrollMove::To(line) => self.state.scroll_to(line),
        }
        true
    }

    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.state.update_dimensions(total, viewport);
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn offset(&self) -> usize {
        self.state.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 15);
        scroll.scroll_down();
        assert_eq!(scroll.offset(), 15);

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn test_page_moves() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);
        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset(), 20);
        scroll.page_up();
        assert_eq!(scroll.offset(), 10);
        scroll.scroll_to(500);
        assert_eq!(scroll.offset(), 90);
    }

    #[test]
    fn test_scroll_up_at_top_stays() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 5);
        scroll.scroll_up();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_page_scroll_frozen_while_locked() {
        let page = PageSurface::new();
        let mut scroll = PageScroll::new(page.clone());
        scroll.update_dimensions(50, 10);
        assert!(scroll.apply(ScrollMove::Down));
        assert_eq!(scroll.offset(), 1);

        let lock = page.lock_scroll();
        assert!(!scroll.apply(ScrollMove::PageDown));
        assert_eq!(scroll.offset(), 1);

        drop(lock);
        assert!(scroll.apply(ScrollMove::Bottom));
        assert_eq!(scroll.offset(), 40);
    }
}
