// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Breakpoints**: Viewport widths separating mobile, tablet and desktop
//! - **Slider**: Fallbacks applied when a `data-*` attribute is absent
//! - **Thumbnails**: Thumbnail strip fallbacks
//! - **Gestures**: Swipe detection
//! - **Runtime**: Resize debounce, tick cadence and host window

// ==========================================================================
// Breakpoint Defaults
// ==========================================================================

/// Viewports narrower than this are "mobile".
pub const MOBILE_MAX_WIDTH: f32 = 768.0;

/// Viewports narrower than this (and at least [`MOBILE_MAX_WIDTH`]) are "tablet".
pub const TABLET_MAX_WIDTH: f32 = 1024.0;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Autoplay interval when `data-speed` is absent or zero (milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3000;

/// Items shown at once on desktop when `data-items-desktop` is absent.
pub const DEFAULT_ITEMS_VISIBLE: u32 = 1;

/// Gap between slides when `data-gap` is absent (pixels).
pub const DEFAULT_GAP_PX: f32 = 0.0;

/// CSS timing function used when `data-ease` is absent.
pub const DEFAULT_EASE: &str = "ease";

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Thumbnails shown at once on desktop.
pub const DEFAULT_THUMBS_VISIBLE_DESKTOP: u32 = 4;

/// Thumbnails shown on tablet when neither tablet nor desktop is declared.
pub const DEFAULT_THUMBS_VISIBLE_TABLET: u32 = 3;

/// Thumbnails shown on mobile when no breakpoint is declared.
pub const DEFAULT_THUMBS_VISIBLE_MOBILE: u32 = 2;

/// Gap between thumbnails when `data-thumbs-gap` is absent (pixels).
pub const DEFAULT_THUMBS_GAP_PX: f32 = 10.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal travel a drag must exceed before it counts as a swipe (pixels).
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

// ==========================================================================
// Runtime Defaults
// ==========================================================================

/// Quiet period after the last resize event before layout is recomputed.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Minimum accepted resize debounce.
pub const MIN_RESIZE_DEBOUNCE_MS: u64 = 10;

/// Maximum accepted resize debounce.
pub const MAX_RESIZE_DEBOUNCE_MS: u64 = 5000;

/// Cadence of the host tick driving autoplay and debounce deadlines.
pub const DEFAULT_TICK_MS: u64 = 50;

/// Minimum host tick.
pub const MIN_TICK_MS: u64 = 10;

/// Maximum host tick.
pub const MAX_TICK_MS: u64 = 1000;

/// Initial host window size.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Filter used when neither `RUST_LOG` nor the settings file provides one.
pub const DEFAULT_LOG_FILTER: &str = "danny_slider=info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MOBILE_MAX_WIDTH > 0.0);
    assert!(TABLET_MAX_WIDTH > MOBILE_MAX_WIDTH);

    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS > 0);
    assert!(DEFAULT_ITEMS_VISIBLE >= 1);
    assert!(DEFAULT_GAP_PX >= 0.0);

    assert!(DEFAULT_THUMBS_VISIBLE_DESKTOP >= 1);
    assert!(DEFAULT_THUMBS_VISIBLE_TABLET >= 1);
    assert!(DEFAULT_THUMBS_VISIBLE_MOBILE >= 1);
    assert!(DEFAULT_THUMBS_GAP_PX >= 0.0);

    assert!(SWIPE_THRESHOLD_PX > 0.0);

    assert!(MIN_RESIZE_DEBOUNCE_MS > 0);
    assert!(DEFAULT_RESIZE_DEBOUNCE_MS >= MIN_RESIZE_DEBOUNCE_MS);
    assert!(DEFAULT_RESIZE_DEBOUNCE_MS <= MAX_RESIZE_DEBOUNCE_MS);
    assert!(DEFAULT_TICK_MS >= MIN_TICK_MS);
    assert!(DEFAULT_TICK_MS <= MAX_TICK_MS);
};
