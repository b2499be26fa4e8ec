// SPDX-License-Identifier: MPL-2.0
//! Draws render plans with iced widgets.
//!
//! The view never reads controller state directly: it lays out whatever the
//! [`RenderPlan`]s and the [`GalleryPlan`] describe and maps widget events back
//! to [`Interaction`]s and [`GalleryInput`]s.

use super::{style, Message};
use crate::gallery::{GalleryInput, GalleryPlan};
use crate::markup::ImageRef;
use crate::slider::render::{ItemStyle, ThumbStrip};
use crate::slider::{Axis, Interaction, RenderPlan, SliderId};
use iced::alignment::Vertical;
use iced::widget::{
    button, image, mouse_area, opaque, scrollable, text, Column, Container, Row, Stack,
};
use iced::{ContentFit, Element, Length, Point};
use std::path::Path;

const ITEM_HEIGHT: f32 = 320.0;
const THUMB_SIZE: f32 = 72.0;
const DOT_SIZE: f32 = 12.0;
const ARROW_SIZE: f32 = 32.0;
const SPACING: f32 = 8.0;
const PAGE_PADDING: f32 = 24.0;

/// Everything the window needs to draw one frame.
pub struct ViewContext<'a> {
    pub plans: &'a [RenderPlan],
    pub gallery: Option<&'a GalleryPlan>,
    /// Image sources resolve relative to this directory.
    pub page_dir: &'a Path,
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let sliders = ctx
        .plans
        .iter()
        .fold(Column::new().spacing(PAGE_PADDING), |column, plan| {
            column.push(view_slider(plan, ctx.page_dir))
        })
        .padding(PAGE_PADDING);

    let content = Container::new(scrollable(sliders))
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.gallery {
        Some(plan) => Stack::new()
            .push(content)
            .push(opaque(view_gallery(plan, ctx.page_dir)))
            .into(),
        None => content.into(),
    }
}

fn slider_message(id: &SliderId, interaction: Interaction) -> Message {
    Message::Slider {
        id: id.clone(),
        interaction,
    }
}

fn image_handle(page_dir: &Path, image: &ImageRef) -> image::Handle {
    image::Handle::from_path(page_dir.join(&image.src))
}

fn view_slider<'a>(plan: &RenderPlan, page_dir: &Path) -> Element<'a, Message> {
    let id = SliderId::new(plan.id.clone());

    let mut body = Column::new().spacing(SPACING).push(view_track(&id, plan, page_dir));

    if let Some(arrows) = plan.arrows {
        let mut controls = Row::new().spacing(SPACING).align_y(Vertical::Center);
        if let Some(prev) = arrows.prev {
            controls = controls.push(arrow_button(
                "❮",
                !prev.disabled,
                slider_message(&id, Interaction::PrevArrow),
            ));
        }
        if let Some(next) = arrows.next {
            controls = controls.push(arrow_button(
                "❯",
                !next.disabled,
                slider_message(&id, Interaction::NextArrow),
            ));
        }
        body = body.push(controls);
    }

    if let Some(dots) = &plan.dots {
        let strip = dots.dots.iter().fold(Row::new().spacing(6.0), |row, dot| {
            row.push(
                button(text(""))
                    .width(Length::Fixed(DOT_SIZE))
                    .height(Length::Fixed(DOT_SIZE))
                    .padding(0)
                    .style(style::dot(dot.active))
                    .on_press(slider_message(&id, Interaction::Dot(dot.index))),
            )
        });
        body = body.push(strip);
    }

    let layout: Element<'a, Message> = match &plan.thumbs {
        Some(thumbs) if thumbs.axis == Axis::Vertical => Row::new()
            .spacing(SPACING)
            .push(Container::new(body).width(Length::Fill))
            .push(view_thumbs(&id, thumbs, page_dir))
            .into(),
        Some(thumbs) => body.push(view_thumbs(&id, thumbs, page_dir)).into(),
        None => body.into(),
    };

    let move_id = id.clone();
    mouse_area(layout)
        .on_enter(slider_message(&id, Interaction::HoverEnter))
        .on_exit(slider_message(&id, Interaction::HoverLeave))
        .on_move(move |point: Point| slider_message(&move_id, Interaction::PointerMoved(point.x)))
        .on_press(slider_message(&id, Interaction::PointerPressed))
        .on_release(slider_message(&id, Interaction::PointerReleased))
        .into()
}

fn view_track<'a>(id: &SliderId, plan: &RenderPlan, page_dir: &Path) -> Element<'a, Message> {
    let gap = plan.items.first().map_or(0.0, |item| item.width.gap_px);
    let mut track = Row::new()
        .spacing(gap)
        .height(Length::Fixed(ITEM_HEIGHT));

    let mut shown = 0;
    for item in plan.items_in_view() {
        track = track.push(view_item(id, item, page_dir));
        shown += 1;
    }
    // Keep cell widths stable when fewer items than slots remain.
    for _ in shown..plan.visible_count {
        track = track.push(Container::new(text("")).width(Length::FillPortion(1)));
    }
    track.into()
}

fn view_item<'a>(id: &SliderId, item: &ItemStyle, page_dir: &Path) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &item.image {
        Some(picture) => image(image_handle(page_dir, picture))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(text(format!("Item {}", item.index + 1)))
            .center(Length::Fill)
            .style(style::empty_item)
            .into(),
    };

    Container::new(mouse_area(content).on_release(Message::ItemReleased {
        id: id.clone(),
        index: item.index,
    }))
    .width(Length::FillPortion(1))
    .height(Length::Fill)
    .into()
}

fn view_thumbs<'a>(id: &SliderId, strip: &ThumbStrip, page_dir: &Path) -> Element<'a, Message> {
    let thumbs: Vec<Element<'a, Message>> = strip
        .thumbs_in_window()
        .map(|thumb| {
            let content: Element<'a, Message> = match &thumb.image {
                Some(picture) => image(image_handle(page_dir, picture))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => text(thumb.alt.clone()).size(10).into(),
            };
            button(content)
                .width(Length::Fixed(THUMB_SIZE))
                .height(Length::Fixed(THUMB_SIZE))
                .padding(2)
                .style(style::thumb(thumb.active))
                .on_press(slider_message(id, Interaction::Thumb(thumb.index)))
                .into()
        })
        .collect();

    let prev = arrow_button(
        "‹",
        !strip.prev.disabled,
        slider_message(id, Interaction::ThumbsPrev),
    );
    let next = arrow_button(
        "›",
        !strip.next.disabled,
        slider_message(id, Interaction::ThumbsNext),
    );

    match strip.axis {
        Axis::Horizontal => Row::new()
            .spacing(SPACING)
            .align_y(Vertical::Center)
            .push(prev)
            .push(Row::with_children(thumbs).spacing(strip.size.gap_px))
            .push(next)
            .into(),
        Axis::Vertical => Column::new()
            .spacing(SPACING)
            .push(prev)
            .push(Column::with_children(thumbs).spacing(strip.size.gap_px))
            .push(next)
            .into(),
    }
}

fn arrow_button<'a>(label: &'static str, enabled: bool, message: Message) -> Element<'a, Message> {
    button(text(label).center())
        .width(Length::Fixed(ARROW_SIZE))
        .height(Length::Fixed(ARROW_SIZE))
        .padding(0)
        .style(style::arrow(enabled))
        .on_press_maybe(enabled.then_some(message))
        .into()
}

fn view_gallery<'a>(plan: &GalleryPlan, page_dir: &Path) -> Element<'a, Message> {
    let Some(current) = plan.images.get(plan.current_index) else {
        return Container::new(text("")).into();
    };

    let picture = mouse_area(
        image(image_handle(page_dir, current))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
    )
    .on_move(|point: Point| Message::Gallery(GalleryInput::PointerMoved(point.x)))
    .on_press(Message::Gallery(GalleryInput::PointerPressed))
    .on_release(Message::Gallery(GalleryInput::PointerReleased));

    let caption = current.alt.clone().unwrap_or_default();
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(text(format!(
                "{}  {} / {}",
                caption,
                plan.current_index + 1,
                plan.images.len()
            )))
            .width(Length::Fill),
        )
        .push(arrow_button(
            "✕",
            true,
            Message::Gallery(GalleryInput::CloseButton),
        ));

    let stage = Row::new()
        .spacing(SPACING)
        .align_y(Vertical::Center)
        .push(arrow_button(
            "❮",
            true,
            Message::Gallery(GalleryInput::PrevButton),
        ))
        .push(picture)
        .push(arrow_button(
            "❯",
            true,
            Message::Gallery(GalleryInput::NextButton),
        ));

    let overlay = Container::new(
        Column::new()
            .spacing(SPACING)
            .push(header)
            .push(stage)
            .padding(PAGE_PADDING),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::backdrop);

    mouse_area(overlay)
        .on_press(Message::Gallery(GalleryInput::Backdrop))
        .into()
}
