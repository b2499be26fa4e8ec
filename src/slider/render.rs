// SPDX-License-Identifier: MPL-2.0
//! Declarative visual output of a slider.
//!
//! A [`RenderPlan`] carries only style values and class toggles: transform
//! strings, width expressions, active flags and disabled buttons. Whatever
//! draws the slider reads the plan; nothing in it mutates slider state.

use crate::markup::ImageRef;
use crate::slider::layout::{Axis, Breakpoint, CellSize, Transform};
use crate::slider::options::TransitionMode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub id: String,
    pub transition: TransitionMode,
    pub breakpoint: Breakpoint,
    pub current_index: usize,
    pub visible_count: usize,
    pub page_count: usize,
    pub playing: bool,
    /// Absent when the container declares no track; nothing moves then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackStyle>,
    pub items: Vec<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<ArrowState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dots: Option<DotStrip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbs: Option<ThumbStrip>,
}

/// Custom properties and transform of the slide track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackStyle {
    /// `--danny-ease`
    pub ease: String,
    /// `--danny-gap`
    pub gap: String,
    /// Slide mode only; fade mode toggles item classes instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStyle {
    pub index: usize,
    /// `--danny-item-width`
    pub width: CellSize,
    /// The `active` class, toggled in fade mode only.
    pub active: bool,
    /// Whether the item is on screen in either mode.
    pub in_view: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArrowState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<ButtonState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ButtonState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DotStrip {
    /// Bumped every time the dot set is rebuilt.
    pub generation: u64,
    pub dots: Vec<Dot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thumb {
    pub index: usize,
    pub active: bool,
    pub in_window: bool,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThumbStrip {
    pub axis: Axis,
    /// `--danny-thumbs-gap`
    pub gap: String,
    /// Width (horizontal) or height (vertical) of each thumbnail.
    pub size: CellSize,
    pub transform: Transform,
    pub start: usize,
    pub visible: usize,
    pub prev: ButtonState,
    pub next: ButtonState,
    pub thumbs: Vec<Thumb>,
}

impl RenderPlan {
    /// Items the host should draw, in order.
    pub fn items_in_view(&self) -> impl Iterator<Item = &ItemStyle> {
        self.items.iter().filter(|item| item.in_view)
    }
}

impl ThumbStrip {
    pub fn thumbs_in_window(&self) -> impl Iterator<Item = &Thumb> {
        self.thumbs.iter().filter(|thumb| thumb.in_window)
    }
}

pub(crate) fn px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}px")
    } else {
        format!("{value}px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_drops_trailing_zero_fraction() {
        assert_eq!(px(10.0), "10px");
        assert_eq!(px(0.0), "0px");
        assert_eq!(px(7.5), "7.5px");
    }
}
