// SPDX-License-Identifier: MPL-2.0
//! Slider options resolved from a container's `data-*` attributes.
//!
//! [`SliderOptions::resolve`] is the single place where attribute values turn
//! into typed options. Per field:
//!
//! - Boolean switches are opt-in (`"true"`), except `arrows` and `dots`
//!   which are opt-out (`"false"`).
//! - Numbers that are absent, empty, unparseable or zero fall back.
//! - Numbers that parse but cannot be honored (negative, infinite) make the
//!   whole construction fail with [`Error::InvalidAttribute`].
//! - Responsive triples fall back to the next larger breakpoint:
//!   mobile -> tablet -> desktop -> built-in default.

use crate::config::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_EASE, DEFAULT_GAP_PX, DEFAULT_ITEMS_VISIBLE,
    DEFAULT_THUMBS_GAP_PX, DEFAULT_THUMBS_VISIBLE_DESKTOP, DEFAULT_THUMBS_VISIBLE_MOBILE,
    DEFAULT_THUMBS_VISIBLE_TABLET,
};
use crate::error::{Error, Result};
use crate::markup::Attributes;
use crate::slider::layout::Responsive;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionMode {
    #[default]
    Slide,
    Fade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThumbsOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Immutable per-slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderOptions {
    pub autoplay: bool,
    pub autoplay_resume: bool,
    #[serde(with = "duration_ms")]
    pub interval: Duration,
    pub looping: bool,
    pub swipe: bool,
    pub pause_on_hover: bool,
    pub keyboard: bool,
    /// CSS timing function forwarded to the track.
    pub ease: String,
    pub transition: TransitionMode,
    pub show_arrows: bool,
    pub show_dots: bool,
    pub show_thumbnails: bool,
    pub thumbs_visible: Responsive<u32>,
    pub thumbs_gap_px: f32,
    pub gallery: bool,
    pub items_visible: Responsive<u32>,
    pub gap_px: f32,
    pub thumbs_orientation: ThumbsOrientation,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_resume: false,
            interval: Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS),
            looping: false,
            swipe: false,
            pause_on_hover: false,
            keyboard: false,
            ease: DEFAULT_EASE.to_string(),
            transition: TransitionMode::Slide,
            show_arrows: true,
            show_dots: true,
            show_thumbnails: false,
            thumbs_visible: Responsive {
                desktop: DEFAULT_THUMBS_VISIBLE_DESKTOP,
                tablet: DEFAULT_THUMBS_VISIBLE_TABLET,
                mobile: DEFAULT_THUMBS_VISIBLE_MOBILE,
            },
            thumbs_gap_px: DEFAULT_THUMBS_GAP_PX,
            gallery: false,
            items_visible: Responsive {
                desktop: DEFAULT_ITEMS_VISIBLE,
                tablet: DEFAULT_ITEMS_VISIBLE,
                mobile: DEFAULT_ITEMS_VISIBLE,
            },
            gap_px: DEFAULT_GAP_PX,
            thumbs_orientation: ThumbsOrientation::Horizontal,
        }
    }
}

impl SliderOptions {
    /// Resolves options from `data-*` attributes (keys without the `data-` prefix).
    pub fn resolve(attrs: &Attributes) -> Result<Self> {
        let reader = AttributeReader(attrs);

        let items_desktop = reader.count("items-desktop")?;
        let items_tablet = reader.count("items-tablet")?;
        let items_mobile = reader.count("items-mobile")?;

        let thumbs_desktop = reader.count("thumbs-items")?;
        let thumbs_tablet = reader.count("thumbs-items-tablet")?;
        let thumbs_mobile = reader.count("thumbs-items-mobile")?;

        let interval = reader
            .number("speed")?
            .map(|ms| Duration::from_millis((ms.round() as u64).max(1)))
            .unwrap_or(Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS));

        Ok(Self {
            autoplay: reader.opt_in("autoplay"),
            autoplay_resume: reader.opt_in("autoplay-resume"),
            interval,
            looping: reader.opt_in("loop"),
            swipe: reader.opt_in("swipe"),
            pause_on_hover: reader.opt_in("hover-pause"),
            keyboard: reader.opt_in("keyboard"),
            ease: reader
                .text("ease")
                .unwrap_or(DEFAULT_EASE)
                .to_string(),
            transition: match reader.text("transition") {
                Some("fade") => TransitionMode::Fade,
                _ => TransitionMode::Slide,
            },
            show_arrows: reader.opt_out("arrows"),
            show_dots: reader.opt_out("dots"),
            show_thumbnails: reader.opt_in("thumbnails"),
            thumbs_visible: responsive(
                thumbs_desktop,
                thumbs_tablet,
                thumbs_mobile,
                Responsive {
                    desktop: DEFAULT_THUMBS_VISIBLE_DESKTOP,
                    tablet: DEFAULT_THUMBS_VISIBLE_TABLET,
                    mobile: DEFAULT_THUMBS_VISIBLE_MOBILE,
                },
            ),
            thumbs_gap_px: reader.pixels("thumbs-gap")?.unwrap_or(DEFAULT_THUMBS_GAP_PX),
            gallery: reader.opt_in("gallery"),
            items_visible: responsive(
                items_desktop,
                items_tablet,
                items_mobile,
                Responsive {
                    desktop: DEFAULT_ITEMS_VISIBLE,
                    tablet: DEFAULT_ITEMS_VISIBLE,
                    mobile: DEFAULT_ITEMS_VISIBLE,
                },
            ),
            gap_px: reader.pixels("gap")?.unwrap_or(DEFAULT_GAP_PX),
            thumbs_orientation: match reader.text("thumbs-orientation") {
                Some("vertical") => ThumbsOrientation::Vertical,
                _ => ThumbsOrientation::Horizontal,
            },
        })
    }
}

/// Applies the breakpoint fallback chain to declared values.
fn responsive(
    desktop: Option<u32>,
    tablet: Option<u32>,
    mobile: Option<u32>,
    defaults: Responsive<u32>,
) -> Responsive<u32> {
    Responsive {
        desktop: desktop.unwrap_or(defaults.desktop),
        tablet: tablet.or(desktop).unwrap_or(defaults.tablet),
        mobile: mobile.or(tablet).or(desktop).unwrap_or(defaults.mobile),
    }
}

struct AttributeReader<'a>(&'a Attributes);

impl AttributeReader<'_> {
    fn text(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn opt_in(&self, name: &str) -> bool {
        self.text(name) == Some("true")
    }

    fn opt_out(&self, name: &str) -> bool {
        self.text(name) != Some("false")
    }

    /// Positive finite number, `None` when absent/unparseable/zero.
    fn number(&self, name: &'static str) -> Result<Option<f64>> {
        let Some(raw) = self.text(name) else {
            return Ok(None);
        };
        let Ok(value) = raw.parse::<f64>() else {
            return Ok(None);
        };
        if value.is_nan() || value == 0.0 {
            return Ok(None);
        }
        if value.is_infinite() {
            return Err(invalid(name, raw, "must be finite"));
        }
        if value < 0.0 {
            return Err(invalid(name, raw, "must not be negative"));
        }
        Ok(Some(value))
    }

    fn pixels(&self, name: &'static str) -> Result<Option<f32>> {
        Ok(self.number(name)?.map(|value| value as f32))
    }

    /// Item counts are whole and at least one.
    fn count(&self, name: &'static str) -> Result<Option<u32>> {
        Ok(self
            .number(name)?
            .map(|value| (value.floor().min(f64::from(u32::MAX)) as u32).max(1)))
    }
}

fn invalid(name: &'static str, value: &str, reason: &'static str) -> Error {
    Error::InvalidAttribute {
        name,
        value: value.to_string(),
        reason,
    }
}

mod duration_ms {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }
}
