// SPDX-License-Identifier: MPL-2.0
//! Responsive layout math.
//!
//! Everything here is pure: breakpoint selection from a viewport width, the
//! `calc()` expressions that size items so items plus gaps tile the viewport
//! exactly, and the track offsets that move one item-and-gap per step.
//! Expressions keep their exact CSS form ([`fmt::Display`]) and can also be
//! resolved against a concrete container size.

use crate::config::{MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// Viewport class selected by width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    /// `width < 768`
    Mobile,
    /// `768 <= width < 1024`
    Tablet,
    /// `width >= 1024`
    Desktop,
}

impl Breakpoint {
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width < TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

/// One value per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsive<T> {
    pub desktop: T,
    pub tablet: T,
    pub mobile: T,
}

impl<T: Copy> Responsive<T> {
    #[must_use]
    pub fn select(&self, breakpoint: Breakpoint) -> T {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
        }
    }
}

/// Main axis of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Pixel quantity printed the way CSS authors write it (`10px`, not `10.0px`).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Px(f32);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Size of one of `count` cells sharing the container with `count - 1` gaps:
/// `calc((100% - gap*(count-1)px) / count)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub gap_px: f32,
    pub count: u32,
}

impl CellSize {
    #[must_use]
    pub fn new(gap_px: f32, count: u32) -> Self {
        Self {
            gap_px,
            count: count.max(1),
        }
    }

    fn total_gap(&self) -> f32 {
        self.gap_px * (self.count - 1) as f32
    }

    /// Concrete cell size for a container of `container_px`.
    #[must_use]
    pub fn resolve(&self, container_px: f32) -> f32 {
        (container_px - self.total_gap()) / self.count as f32
    }
}

impl fmt::Display for CellSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calc((100% - {}px) / {})",
            Px(self.total_gap()),
            self.count
        )
    }
}

impl Serialize for CellSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Track shift of `steps` cells: `calc(-steps * (100% + gap) / count)`.
///
/// `(100% + gap) / count` is exactly one cell plus one gap, so each step
/// moves by one item regardless of how many are visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackOffset {
    pub steps: usize,
    pub gap_px: f32,
    pub count: u32,
}

impl TrackOffset {
    #[must_use]
    pub fn new(steps: usize, gap_px: f32, count: u32) -> Self {
        Self {
            steps,
            gap_px,
            count: count.max(1),
        }
    }

    /// Concrete (negative) offset for a container of `container_px`.
    #[must_use]
    pub fn resolve(&self, container_px: f32) -> f32 {
        -(self.steps as f32) * (container_px + self.gap_px) / self.count as f32
    }
}

impl fmt::Display for TrackOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calc(-{} * (100% + {}px) / {})",
            self.steps,
            Px(self.gap_px),
            self.count
        )
    }
}

/// A `translateX`/`translateY` along a track's axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub axis: Axis,
    pub offset: TrackOffset,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = match self.axis {
            Axis::Horizontal => "translateX",
            Axis::Vertical => "translateY",
        };
        write!(f, "{function}({})", self.offset)
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Items shown in fade mode, where `index` counts pages of `visible` items:
/// `[index*visible, min(index*visible + visible, total))`.
#[must_use]
pub fn fade_active_range(index: usize, visible: usize, total: usize) -> Range<usize> {
    let start = index.saturating_mul(visible).min(total);
    let end = start.saturating_add(visible).min(total);
    start..end
}

/// Dots highlight every currently visible item, not only the lead one.
#[must_use]
pub fn dot_is_active(dot: usize, index: usize, visible: usize) -> bool {
    dot >= index && dot < index + visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn breakpoints_split_at_768_and_1024() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(1920.0), Breakpoint::Desktop);
    }

    #[test]
    fn responsive_select_picks_breakpoint_value() {
        let counts = Responsive {
            desktop: 3,
            tablet: 2,
            mobile: 1,
        };
        assert_eq!(counts.select(Breakpoint::Desktop), 3);
        assert_eq!(counts.select(Breakpoint::Tablet), 2);
        assert_eq!(counts.select(Breakpoint::Mobile), 1);
    }

    #[test]
    fn cell_size_formats_like_css() {
        assert_eq!(
            CellSize::new(20.0, 3).to_string(),
            "calc((100% - 40px) / 3)"
        );
        assert_eq!(CellSize::new(0.0, 1).to_string(), "calc((100% - 0px) / 1)");
        assert_eq!(
            CellSize::new(2.5, 2).to_string(),
            "calc((100% - 2.5px) / 2)"
        );
    }

    #[test]
    fn cells_and_gaps_tile_the_container_exactly() {
        for count in 1..=6 {
            let size = CellSize::new(16.0, count);
            let cell = size.resolve(1200.0);
            let tiled = cell * count as f32 + 16.0 * (count - 1) as f32;
            assert_abs_diff_eq!(tiled, 1200.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn track_offset_moves_one_cell_and_gap_per_step() {
        let container = 900.0;
        let size = CellSize::new(12.0, 3);
        let offset = TrackOffset::new(2, 12.0, 3);
        assert_abs_diff_eq!(
            offset.resolve(container),
            -2.0 * (size.resolve(container) + 12.0),
            epsilon = 1e-3
        );
    }

    #[test]
    fn transform_formats_axis_and_offset() {
        let transform = Transform {
            axis: Axis::Horizontal,
            offset: TrackOffset::new(2, 10.0, 3),
        };
        assert_eq!(
            transform.to_string(),
            "translateX(calc(-2 * (100% + 10px) / 3))"
        );

        let vertical = Transform {
            axis: Axis::Vertical,
            offset: TrackOffset::new(0, 0.0, 4),
        };
        assert_eq!(
            vertical.to_string(),
            "translateY(calc(-0 * (100% + 0px) / 4))"
        );
    }

    #[test]
    fn fade_range_counts_pages_of_visible_items() {
        assert_eq!(fade_active_range(1, 2, 5), 2..4);
        assert_eq!(fade_active_range(2, 2, 5), 4..5);
        assert_eq!(fade_active_range(0, 1, 5), 0..1);
        assert_eq!(fade_active_range(9, 2, 5), 5..5);
        assert_eq!(fade_active_range(0, 1, 0), 0..0);
    }

    #[test]
    fn dots_cover_the_visible_window() {
        let active: Vec<usize> = (0..6).filter(|&d| dot_is_active(d, 2, 3)).collect();
        assert_eq!(active, vec![2, 3, 4]);
    }
}
