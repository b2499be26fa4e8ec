// SPDX-License-Identifier: MPL-2.0
//! Full-screen image gallery overlay.
//!
//! One overlay serves every gallery-enabled slider. It keeps its own cursor
//! over whatever image list it was opened with and always wraps, whatever
//! the requesting slider's loop setting.
//!
//! The process-wide instance is reached through [`global`]. All mutation goes
//! through the overlay's own methods behind that single lock.

use crate::gesture::{NavKey, Swipe, SwipeTracker};
use crate::markup::ImageRef;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static GALLERY: OnceLock<Mutex<OverlayGallery>> = OnceLock::new();

/// Locks the process-wide overlay, creating it on first use.
pub fn global() -> MutexGuard<'static, OverlayGallery> {
    GALLERY
        .get_or_init(|| Mutex::new(OverlayGallery::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Static parts of the overlay, built once by [`OverlayGallery::init`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayChrome {
    pub label: &'static str,
    pub prev_label: &'static str,
    pub next_label: &'static str,
    pub close_label: &'static str,
}

impl Default for OverlayChrome {
    fn default() -> Self {
        Self {
            label: "Image gallery",
            prev_label: "Previous",
            next_label: "Next",
            close_label: "Close",
        }
    }
}

/// Inputs the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryInput {
    /// Click on the dimmed area around the image.
    Backdrop,
    /// Click on the image itself; never dismisses.
    Image,
    CloseButton,
    PrevButton,
    NextButton,
    Key(NavKey),
    /// Touch-style drag with known endpoints.
    SwipeStart(f32),
    SwipeEnd(f32),
    /// Cursor-style drag: movement plus bare press/release.
    PointerMoved(f32),
    PointerPressed,
    PointerReleased,
}

/// What the host draws while the overlay is open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryPlan {
    pub chrome: OverlayChrome,
    pub images: Vec<ImageRef>,
    pub current_index: usize,
    /// `translateX(-{index * 100}%)`
    pub transform: String,
    /// Page scrolling is suppressed for as long as the overlay is open.
    pub scroll_locked: bool,
}

#[derive(Debug, Default)]
pub struct OverlayGallery {
    chrome: Option<OverlayChrome>,
    images: Vec<ImageRef>,
    current_index: usize,
    open: bool,
    swipe: SwipeTracker,
}

impl OverlayGallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Materializes the overlay chrome. Returns `false` when it already exists.
    pub fn init(&mut self) -> bool {
        if self.chrome.is_some() {
            return false;
        }
        self.chrome = Some(OverlayChrome::default());
        tracing::debug!("gallery overlay initialized");
        true
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.chrome.is_some()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// Shows `images` starting at `start` (clamped). An empty list is ignored.
    pub fn open(&mut self, images: Vec<ImageRef>, start: usize) -> bool {
        if images.is_empty() {
            return false;
        }
        self.init();
        self.current_index = start.min(images.len() - 1);
        self.images = images;
        self.open = true;
        self.swipe.cancel();
        tracing::debug!(
            images = self.images.len(),
            index = self.current_index,
            "gallery opened"
        );
        true
    }

    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("gallery closed");
        }
        self.open = false;
        self.images.clear();
        self.current_index = 0;
        self.swipe.cancel();
    }

    pub fn next(&mut self) -> bool {
        if self.images.is_empty() {
            return false;
        }
        self.current_index = (self.current_index + 1) % self.images.len();
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.images.is_empty() {
            return false;
        }
        let len = self.images.len();
        self.current_index = (self.current_index + len - 1) % len;
        true
    }

    /// Routes an input; everything is ignored while the overlay is closed.
    pub fn handle(&mut self, input: GalleryInput) -> bool {
        if !self.open {
            return false;
        }
        match input {
            GalleryInput::Backdrop | GalleryInput::CloseButton => {
                self.close();
                true
            }
            GalleryInput::Image => false,
            GalleryInput::PrevButton => self.prev(),
            GalleryInput::NextButton => self.next(),
            GalleryInput::Key(NavKey::Escape) => {
                self.close();
                true
            }
            GalleryInput::Key(NavKey::ArrowRight) => self.next(),
            GalleryInput::Key(NavKey::ArrowLeft) => self.prev(),
            GalleryInput::SwipeStart(x) => {
                self.swipe.begin(x);
                false
            }
            GalleryInput::SwipeEnd(x) => {
                let swipe = self.swipe.finish(x);
                self.apply_swipe(swipe)
            }
            GalleryInput::PointerMoved(x) => {
                self.swipe.track(x);
                false
            }
            GalleryInput::PointerPressed => {
                self.swipe.begin_at_last();
                false
            }
            GalleryInput::PointerReleased => {
                let swipe = self.swipe.finish_at_last();
                self.apply_swipe(swipe)
            }
        }
    }

    fn apply_swipe(&mut self, swipe: Option<Swipe>) -> bool {
        match swipe {
            Some(Swipe::Left) => self.next(),
            Some(Swipe::Right) => self.prev(),
            None => false,
        }
    }

    #[must_use]
    pub fn render(&self) -> Option<GalleryPlan> {
        if !self.open || self.images.is_empty() {
            return None;
        }
        Some(GalleryPlan {
            chrome: self.chrome.clone().unwrap_or_default(),
            images: self.images.clone(),
            current_index: self.current_index,
            transform: format!("translateX(-{}%)", self.current_index * 100),
            scroll_locked: self.scroll_locked(),
        })
    }
}
