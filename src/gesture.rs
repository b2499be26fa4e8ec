// SPDX-License-Identifier: MPL-2.0
//! Swipe detection and navigation keys.
//!
//! Both the sliders and the gallery overlay treat a horizontal drag longer
//! than [`SWIPE_THRESHOLD_PX`] as a swipe: dragging left moves forward,
//! dragging right moves back.

use crate::config::SWIPE_THRESHOLD_PX;

/// Direction the pointer travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next item.
    Left,
    /// Finger moved right: show the previous item.
    Right,
}

impl Swipe {
    /// Classifies a horizontal travel `dx = end - start`.
    #[must_use]
    pub fn from_delta(dx: f32) -> Option<Self> {
        if dx.abs() <= SWIPE_THRESHOLD_PX {
            None
        } else if dx < 0.0 {
            Some(Swipe::Left)
        } else {
            Some(Swipe::Right)
        }
    }
}

/// Keys the components react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Grab-and-release tracking for one surface.
///
/// Hosts that report positions with press/release call [`begin`](Self::begin)
/// and [`finish`](Self::finish). Hosts that only report cursor movement plus
/// bare press/release events feed [`track`](Self::track) and use the
/// `_at_last` variants.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    last_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = Some(x);
    }

    pub fn track(&mut self, x: f32) {
        self.last_x = Some(x);
    }

    /// Starts a drag at the last known cursor position.
    pub fn begin_at_last(&mut self) {
        if let Some(x) = self.last_x {
            self.start_x = Some(x);
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn finish(&mut self, x: f32) -> Option<Swipe> {
        self.last_x = Some(x);
        let start = self.start_x.take()?;
        Swipe::from_delta(x - start)
    }

    pub fn finish_at_last(&mut self) -> Option<Swipe> {
        let x = self.last_x?;
        self.finish(x)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
