// SPDX-License-Identifier: MPL-2.0
//! Navigation state owned by one slider.
//!
//! One page is one item: `page_count() == total_items` no matter how many
//! items are visible at once. `current_index` stays within
//! `[0, page_count)` whenever there is at least one item.

use crate::slider::thumbs::ThumbWindow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderState {
    current_index: usize,
    visible_count: usize,
    total_items: usize,
    pub thumbs: ThumbWindow,
}

impl SliderState {
    #[must_use]
    pub fn new(total_items: usize, visible_count: usize, thumbs_visible: usize) -> Self {
        Self {
            current_index: 0,
            visible_count: visible_count.max(1),
            total_items,
            thumbs: ThumbWindow::new(thumbs_visible),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    #[must_use]
    pub fn last_page(&self) -> Option<usize> {
        self.page_count().checked_sub(1)
    }

    /// Applies a new visible count and clamps the index if pages shrank.
    pub fn set_visible_count(&mut self, visible_count: usize) {
        self.visible_count = visible_count.max(1);
        self.clamp_index();
    }

    pub fn clamp_index(&mut self) {
        self.current_index = match self.last_page() {
            Some(last) => self.current_index.min(last),
            None => 0,
        };
    }

    /// Moves to the next page; wraps to 0 only when `looping`.
    pub fn advance(&mut self, looping: bool) -> bool {
        let Some(last) = self.last_page() else {
            return false;
        };
        if self.current_index < last {
            self.current_index += 1;
            true
        } else if looping && last > 0 {
            self.current_index = 0;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page; wraps to the last page only when `looping`.
    pub fn retreat(&mut self, looping: bool) -> bool {
        let Some(last) = self.last_page() else {
            return false;
        };
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else if looping && last > 0 {
            self.current_index = last;
            true
        } else {
            false
        }
    }

    /// Jumps to `index`; out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.page_count() || index == self.current_index {
            return false;
        }
        self.current_index = index;
        true
    }

    #[must_use]
    pub fn at_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn at_last(&self) -> bool {
        self.last_page().is_none_or(|last| self.current_index == last)
    }

    /// Keeps the active thumbnail inside the thumbnail window.
    pub fn ensure_thumb_visible(&mut self) {
        if self.is_empty() {
            return;
        }
        self.thumbs
            .ensure_visible(self.current_index, self.total_items);
    }
}
