// SPDX-License-Identifier: MPL-2.0
//! Thumbnail window cursor.
//!
//! The strip scrolls independently of the main slider. It pages by exactly
//! `visible` thumbnails, never wraps, and keeps `start` within
//! `[0, max(0, total - visible)]`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbWindow {
    start: usize,
    visible: usize,
}

impl ThumbWindow {
    #[must_use]
    pub fn new(visible: usize) -> Self {
        Self {
            start: 0,
            visible: visible.max(1),
        }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn visible(&self) -> usize {
        self.visible
    }

    #[must_use]
    pub fn max_start(&self, total: usize) -> usize {
        total.saturating_sub(self.visible)
    }

    /// Changes the window size (after a resize) and re-clamps.
    pub fn set_visible(&mut self, visible: usize, total: usize) {
        self.visible = visible.max(1);
        self.clamp(total);
    }

    pub fn clamp(&mut self, total: usize) {
        self.start = self.start.min(self.max_start(total));
    }

    /// Pages forward by `visible`; returns whether the window moved.
    pub fn page_forward(&mut self, total: usize) -> bool {
        let max_start = self.max_start(total);
        if self.start >= max_start {
            return false;
        }
        self.start = (self.start + self.visible).min(max_start);
        true
    }

    /// Pages back by `visible`; returns whether the window moved.
    pub fn page_back(&mut self) -> bool {
        if self.start == 0 {
            return false;
        }
        self.start = self.start.saturating_sub(self.visible);
        true
    }

    /// Scrolls the minimum amount needed for `active` to be inside the window.
    pub fn ensure_visible(&mut self, active: usize, total: usize) {
        if active < self.start {
            self.start = active;
        }
        if active >= self.start + self.visible {
            self.start = active + 1 - self.visible;
        }
        self.clamp(total);
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.visible
    }

    #[must_use]
    pub fn can_page_back(&self) -> bool {
        self.start > 0
    }

    #[must_use]
    pub fn can_page_forward(&self, total: usize) -> bool {
        self.start < self.max_start(total)
    }
}
