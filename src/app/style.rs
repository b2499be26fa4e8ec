// SPDX-License-Identifier: MPL-2.0
//! Widget styles for sliders and the gallery overlay.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

const ACCENT: Color = Color::from_rgb(0.20, 0.47, 0.95);
const MUTED: Color = Color::from_rgb(0.55, 0.55, 0.58);
const BACKDROP_ALPHA: f32 = 0.9;

/// Arrow and thumbnail paging buttons. Disabled buttons are greyed out.
pub fn arrow(enabled: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match (enabled, status) {
            (false, _) => 0.25,
            (true, button::Status::Hovered) => 0.8,
            (true, button::Status::Pressed) => 0.9,
            (true, _) => 0.55,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..Color::BLACK })),
            text_color: if enabled { Color::WHITE } else { MUTED },
            border: Border {
                radius: 16.0.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Pagination dot; every visible item's dot is active.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => ACCENT,
            (false, button::Status::Hovered) => Color { a: 0.8, ..MUTED },
            (false, _) => Color { a: 0.4, ..MUTED },
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: Color::TRANSPARENT,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Thumbnail frame, outlined when it shows the current item.
pub fn thumb(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = match (active, status) {
            (true, _) => ACCENT,
            (false, button::Status::Hovered) => MUTED,
            (false, _) => Color::TRANSPARENT,
        };
        button::Style {
            background: None,
            text_color: Color::WHITE,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Placeholder drawn for items without an image.
pub fn empty_item(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.15, 0.15, 0.17))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Dimmed full-window backdrop of the gallery.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: BACKDROP_ALPHA,
            ..Color::BLACK
        })),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}
