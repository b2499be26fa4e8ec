// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the host window.

use crate::config::Config;
use crate::gallery::GalleryInput;
use crate::markup::Page;
use crate::slider::{Interaction, SliderId};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input aimed at one slider.
    Slider {
        id: SliderId,
        interaction: Interaction,
    },
    /// Pointer released over item `index`: ends a drag, or clicks the image.
    ItemReleased { id: SliderId, index: usize },
    Gallery(GalleryInput),
    /// Window and keyboard events from the runtime.
    Event(iced::Event),
    /// Periodic tick driving autoplay and the resize debounce.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Page the sliders were read from; images resolve relative to it.
    pub page_path: PathBuf,
    pub page: Page,
    pub config: Config,
    /// Initial viewport width, overriding `[window] width`.
    pub width: Option<f32>,
}
