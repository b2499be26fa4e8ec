// SPDX-License-Identifier: MPL-2.0
//! Slider component.
//!
//! [`SliderController`] ties the pieces together: [`options`] resolves the
//! container's attributes, [`state`] and [`thumbs`] hold the cursors,
//! [`autoplay`] owns the timer, [`layout`] does the responsive math and
//! [`render`] describes the result.

pub mod autoplay;
pub mod controller;
pub mod layout;
pub mod options;
pub mod render;
pub mod state;
pub mod thumbs;

pub use controller::{Effect, GalleryRequest, Interaction, SliderController};
pub use layout::{Axis, Breakpoint, Responsive};
pub use options::{SliderOptions, ThumbsOrientation, TransitionMode};
pub use render::RenderPlan;
pub use state::SliderState;

use std::fmt;

/// Identity of a slider container on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(String);

impl SliderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id given to the `position`-th container when it declares none.
    #[must_use]
    pub fn positional(position: usize) -> Self {
        Self(format!("slider-{position}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SliderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SliderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
