// SPDX-License-Identifier: MPL-2.0
//! Slider controller.
//!
//! Owns one slider's options, navigation state and autoplay timer. Inputs
//! mutate state first; [`SliderController::render`] then derives the
//! declarative [`RenderPlan`] without touching state.

use crate::error::Result;
use crate::gallery;
use crate::gesture::{NavKey, Swipe, SwipeTracker};
use crate::markup::{ImageRef, SliderMarkup, SliderParts};
use crate::slider::autoplay::{Autoplay, TimerHandle};
use crate::slider::layout::{
    dot_is_active, fade_active_range, Axis, Breakpoint, CellSize, TrackOffset, Transform,
};
use crate::slider::options::{SliderOptions, ThumbsOrientation, TransitionMode};
use crate::slider::render::{
    px, ArrowState, ButtonState, Dot, DotStrip, ItemStyle, RenderPlan, Thumb, ThumbStrip,
    TrackStyle,
};
use crate::slider::state::SliderState;
use crate::slider::SliderId;
use std::time::Instant;

/// User and environment inputs a slider reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    PrevArrow,
    NextArrow,
    Dot(usize),
    Thumb(usize),
    ThumbsPrev,
    ThumbsNext,
    Key(NavKey),
    /// Complete horizontal drag with its travel `end - start`.
    Swipe(f32),
    /// Cursor-style drag: movement plus bare press/release.
    PointerMoved(f32),
    PointerPressed,
    PointerReleased,
    HoverEnter,
    HoverLeave,
    /// Click on the image of item `n`.
    ImageClick(usize),
}

/// Images and start position handed to the gallery overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRequest {
    pub images: Vec<ImageRef>,
    pub start: usize,
}

/// Side effects the host must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenGallery(GalleryRequest),
    /// The released drag was a swipe, even if the slider could not move.
    /// Hosts must not treat the same release as a click.
    Swiped(Swipe),
}

#[derive(Debug, Clone)]
pub struct SliderController {
    id: SliderId,
    options: SliderOptions,
    parts: SliderParts,
    images: Vec<Option<ImageRef>>,
    state: SliderState,
    breakpoint: Breakpoint,
    thumbs_axis: Axis,
    autoplay: Autoplay,
    swipe: SwipeTracker,
    hovered: bool,
    dots_generation: u64,
    dots_page_count: usize,
}

impl SliderController {
    /// Builds a controller for `markup` laid out for `viewport_width`.
    ///
    /// Fails only when a `data-*` attribute holds an unusable value.
    pub fn new(
        id: SliderId,
        markup: &SliderMarkup,
        viewport_width: f32,
        now: Instant,
    ) -> Result<Self> {
        let options = SliderOptions::resolve(&markup.data)?;
        let images: Vec<Option<ImageRef>> =
            markup.items.iter().map(|item| item.image.clone()).collect();
        let total = images.len();

        let mut controller = Self {
            state: SliderState::new(total, 1, options.thumbs_visible.desktop as usize),
            autoplay: Autoplay::new(options.interval),
            id,
            parts: markup.parts,
            images,
            breakpoint: Breakpoint::from_width(viewport_width),
            thumbs_axis: Axis::Horizontal,
            swipe: SwipeTracker::default(),
            hovered: false,
            dots_generation: 0,
            dots_page_count: total,
            options,
        };
        controller.recompute_layout(viewport_width);

        if controller.options.gallery {
            gallery::global().init();
        }
        if controller.options.autoplay {
            controller.play(now);
        }

        tracing::debug!(
            slider = %controller.id,
            items = total,
            visible = controller.state.visible_count(),
            "slider initialized"
        );
        Ok(controller)
    }

    #[must_use]
    pub fn id(&self) -> &SliderId {
        &self.id
    }

    #[must_use]
    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.state.visible_count()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    #[must_use]
    pub fn thumb_start(&self) -> usize {
        self.state.thumbs.start()
    }

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn thumbs_enabled(&self) -> bool {
        self.options.show_thumbnails && self.parts.thumbs
    }

    fn dots_enabled(&self) -> bool {
        self.options.show_dots && self.parts.dots
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Re-selects visible counts for `viewport_width` and re-clamps cursors.
    pub fn recompute_layout(&mut self, viewport_width: f32) {
        self.breakpoint = Breakpoint::from_width(viewport_width);

        let visible = match self.options.transition {
            TransitionMode::Fade => 1,
            TransitionMode::Slide => self.options.items_visible.select(self.breakpoint),
        };
        self.state.set_visible_count(visible as usize);

        if self.thumbs_enabled() {
            let thumbs_visible = self.options.thumbs_visible.select(self.breakpoint);
            self.thumbs_axis = match self.options.thumbs_orientation {
                ThumbsOrientation::Vertical if self.breakpoint != Breakpoint::Mobile => {
                    Axis::Vertical
                }
                _ => Axis::Horizontal,
            };
            let total = self.state.total_items();
            self.state.thumbs.set_visible(thumbs_visible as usize, total);
        }
    }

    /// Applies a (debounced) viewport change. Returns `true` if the dot set
    /// had to be rebuilt.
    pub fn resize(&mut self, viewport_width: f32) -> bool {
        let pages_before = self.state.page_count();
        self.recompute_layout(viewport_width);
        let pages_after = self.state.page_count();

        let rebuilt = pages_after != pages_before || pages_after != self.dots_page_count;
        if rebuilt {
            self.dots_generation += 1;
            self.dots_page_count = pages_after;
        }
        self.after_navigation();
        rebuilt
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn advance(&mut self) -> bool {
        let moved = self.state.advance(self.options.looping);
        self.after_navigation();
        moved
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.state.retreat(self.options.looping);
        self.after_navigation();
        moved
    }

    /// Jumps straight to item `index`; out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        let moved = self.state.go_to(index);
        self.after_navigation();
        moved
    }

    fn after_navigation(&mut self) {
        if self.thumbs_enabled() {
            self.state.ensure_thumb_visible();
        }
    }

    pub fn next_thumbs(&mut self) -> bool {
        let total = self.state.total_items();
        self.state.thumbs.page_forward(total)
    }

    pub fn prev_thumbs(&mut self) -> bool {
        self.state.thumbs.page_back()
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    /// Starts autoplay, replacing any running timer.
    pub fn play(&mut self, now: Instant) -> TimerHandle {
        self.autoplay.start(now)
    }

    pub fn stop(&mut self) {
        self.autoplay.cancel();
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    #[must_use]
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.autoplay.handle()
    }

    /// Advances when the autoplay timer is due. Returns whether it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.autoplay.poll(now) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Explicit navigation resets the autoplay countdown.
    fn restart_autoplay(&mut self, now: Instant) {
        if self.options.autoplay {
            self.play(now);
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Routes one input. Inputs for disabled features or absent elements are
    /// ignored.
    pub fn handle(&mut self, interaction: Interaction, now: Instant) -> Effect {
        match interaction {
            Interaction::PrevArrow => {
                if self.options.show_arrows && self.parts.prev {
                    self.retreat();
                    self.restart_autoplay(now);
                }
            }
            Interaction::NextArrow => {
                if self.options.show_arrows && self.parts.next {
                    self.advance();
                    self.restart_autoplay(now);
                }
            }
            Interaction::Dot(index) => {
                if self.dots_enabled() && index < self.state.page_count() {
                    self.go_to(index);
                    self.restart_autoplay(now);
                }
            }
            Interaction::Thumb(index) => {
                if self.thumbs_enabled() && index < self.state.total_items() {
                    self.go_to(index);
                    self.restart_autoplay(now);
                }
            }
            Interaction::ThumbsPrev => {
                if self.thumbs_enabled() {
                    self.prev_thumbs();
                }
            }
            Interaction::ThumbsNext => {
                if self.thumbs_enabled() {
                    self.next_thumbs();
                }
            }
            Interaction::Key(key) => {
                if self.options.keyboard {
                    match key {
                        NavKey::ArrowRight => {
                            self.advance();
                            self.restart_autoplay(now);
                        }
                        NavKey::ArrowLeft => {
                            self.retreat();
                            self.restart_autoplay(now);
                        }
                        NavKey::Escape => {}
                    }
                }
            }
            Interaction::Swipe(dx) => self.apply_swipe(Swipe::from_delta(dx), now),
            Interaction::PointerMoved(x) => self.swipe.track(x),
            Interaction::PointerPressed => self.swipe.begin_at_last(),
            Interaction::PointerReleased => {
                if let Some(swipe) = self.swipe.finish_at_last() {
                    self.apply_swipe(Some(swipe), now);
                    return Effect::Swiped(swipe);
                }
            }
            Interaction::HoverEnter => {
                self.hovered = true;
                if self.options.pause_on_hover {
                    self.stop();
                }
            }
            Interaction::HoverLeave => {
                self.hovered = false;
                self.swipe.cancel();
                if self.options.pause_on_hover
                    && self.options.autoplay
                    && self.options.autoplay_resume
                {
                    self.play(now);
                }
            }
            Interaction::ImageClick(index) => {
                if let Some(request) = self.gallery_request(index) {
                    return Effect::OpenGallery(request);
                }
            }
        }
        Effect::None
    }

    fn apply_swipe(&mut self, swipe: Option<Swipe>, now: Instant) {
        if !self.options.swipe {
            return;
        }
        match swipe {
            Some(Swipe::Left) => self.advance(),
            Some(Swipe::Right) => self.retreat(),
            None => return,
        };
        self.restart_autoplay(now);
    }

    /// Every item image in order, and where item `index`'s image sits in it.
    #[must_use]
    pub fn gallery_request(&self, index: usize) -> Option<GalleryRequest> {
        if !self.options.gallery {
            return None;
        }
        if !matches!(self.images.get(index), Some(Some(_))) {
            return None;
        }
        let start = self.images[..index].iter().flatten().count();
        let images: Vec<ImageRef> = self.images.iter().flatten().cloned().collect();
        Some(GalleryRequest { images, start })
    }

    /// Stops autoplay; the owner drops the controller afterwards.
    pub fn teardown(&mut self) {
        self.stop();
        self.swipe.cancel();
        tracing::debug!(slider = %self.id, "slider torn down");
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[must_use]
    pub fn render(&self) -> RenderPlan {
        let index = self.state.current_index();
        let visible = self.state.visible_count();
        let total = self.state.total_items();
        let fade = self.options.transition == TransitionMode::Fade;
        let fade_range = fade_active_range(index, visible, total);
        let width = CellSize::new(self.options.gap_px, visible as u32);

        let track = self.parts.track.then(|| TrackStyle {
            ease: self.options.ease.clone(),
            gap: px(self.options.gap_px),
            transform: (!fade).then(|| Transform {
                axis: Axis::Horizontal,
                offset: TrackOffset::new(index, self.options.gap_px, visible as u32),
            }),
        });

        let items = self
            .images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let active = fade && fade_range.contains(&i);
                ItemStyle {
                    index: i,
                    width,
                    active,
                    in_view: if fade {
                        active
                    } else {
                        i >= index && i < index + visible
                    },
                    image: image.clone(),
                }
            })
            .collect();

        RenderPlan {
            id: self.id.to_string(),
            transition: self.options.transition,
            breakpoint: self.breakpoint,
            current_index: index,
            visible_count: visible,
            page_count: self.state.page_count(),
            playing: self.is_playing(),
            track,
            items,
            arrows: self.render_arrows(),
            dots: self.render_dots(),
            thumbs: self.render_thumbs(),
        }
    }

    fn render_arrows(&self) -> Option<ArrowState> {
        if !self.options.show_arrows {
            return None;
        }
        let looping = self.options.looping;
        Some(ArrowState {
            prev: self.parts.prev.then(|| ButtonState {
                disabled: !looping && self.state.at_first(),
            }),
            next: self.parts.next.then(|| ButtonState {
                disabled: !looping && self.state.at_last(),
            }),
        })
    }

    fn render_dots(&self) -> Option<DotStrip> {
        if !self.dots_enabled() {
            return None;
        }
        let index = self.state.current_index();
        let visible = self.state.visible_count();
        let dots = (0..self.state.page_count())
            .map(|i| Dot {
                index: i,
                active: dot_is_active(i, index, visible),
                label: format!("Go to item {}", i + 1),
            })
            .collect();
        Some(DotStrip {
            generation: self.dots_generation,
            dots,
        })
    }

    fn render_thumbs(&self) -> Option<ThumbStrip> {
        if !self.thumbs_enabled() {
            return None;
        }
        let window = &self.state.thumbs;
        let total = self.state.total_items();
        let gap = self.options.thumbs_gap_px;
        let count = window.visible() as u32;

        let thumbs = self
            .images
            .iter()
            .enumerate()
            .map(|(i, image)| Thumb {
                index: i,
                active: i == self.state.current_index(),
                in_window: window.contains(i),
                alt: format!("Thumbnail {}", i + 1),
                image: image.clone(),
            })
            .collect();

        Some(ThumbStrip {
            axis: self.thumbs_axis,
            gap: px(gap),
            size: CellSize::new(gap, count),
            transform: Transform {
                axis: self.thumbs_axis,
                offset: TrackOffset::new(window.start(), gap, count),
            },
            start: window.start(),
            visible: window.visible(),
            prev: ButtonState {
                disabled: !window.can_page_back(),
            },
            next: ButtonState {
                disabled: !window.can_page_forward(total),
            },
            thumbs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const DESKTOP: f32 = 1280.0;
    const TABLET: f32 = 900.0;
    const MOBILE: f32 = 375.0;

    fn images(count: usize) -> Vec<Option<ImageRef>> {
        (0..count)
            .map(|i| Some(ImageRef::new(format!("img-{i}.jpg"))))
            .collect()
    }

    fn controller(markup: SliderMarkup, width: f32) -> SliderController {
        SliderController::new(SliderId::from("test"), &markup, width, Instant::now())
            .expect("valid markup")
    }

    #[test]
    fn six_items_three_visible_walks_to_the_end_and_stops() {
        let markup = SliderMarkup::new(images(6))
            .with_data("items-desktop", "3")
            .with_data("gap", "0");
        let mut slider = controller(markup, DESKTOP);
        assert_eq!(slider.visible_count(), 3);
        assert_eq!(slider.page_count(), 6);

        for _ in 0..5 {
            assert!(slider.advance());
        }
        assert_eq!(slider.current_index(), 5);
        assert!(!slider.advance());
        assert_eq!(slider.current_index(), 5);
    }

    #[test]
    fn looping_advance_wraps_to_first() {
        let markup = SliderMarkup::new(images(3)).with_data("loop", "true");
        let mut slider = controller(markup, DESKTOP);
        slider.go_to(2);
        slider.advance();
        assert_eq!(slider.current_index(), 0);
        slider.retreat();
        assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn visible_count_follows_breakpoints() {
        let markup = SliderMarkup::new(images(8))
            .with_data("items-desktop", "4")
            .with_data("items-tablet", "2")
            .with_data("items-mobile", "1");
        let mut slider = controller(markup, DESKTOP);
        assert_eq!(slider.visible_count(), 4);
        slider.resize(TABLET);
        assert_eq!(slider.visible_count(), 2);
        assert_eq!(slider.breakpoint(), Breakpoint::Tablet);
        slider.resize(MOBILE);
        assert_eq!(slider.visible_count(), 1);
    }

    #[test]
    fn fade_forces_single_visible_item() {
        let markup = SliderMarkup::new(images(5))
            .with_data("transition", "fade")
            .with_data("items-desktop", "3");
        let mut slider = controller(markup, DESKTOP);
        assert_eq!(slider.visible_count(), 1);

        slider.go_to(3);
        let plan = slider.render();
        let active: Vec<usize> = plan
            .items
            .iter()
            .filter(|item| item.active)
            .map(|item| item.index)
            .collect();
        assert_eq!(active, vec![3]);
        assert!(plan.track.expect("track").transform.is_none());
    }

    #[test]
    fn slide_render_emits_transform_and_width() {
        let markup = SliderMarkup::new(images(6))
            .with_data("items-desktop", "3")
            .with_data("gap", "10");
        let mut slider = controller(markup, DESKTOP);
        slider.go_to(2);
        let plan = slider.render();

        let track = plan.track.as_ref().expect("track");
        assert_eq!(
            track.transform.as_ref().expect("slide transform").to_string(),
            "translateX(calc(-2 * (100% + 10px) / 3))"
        );
        assert_eq!(track.gap, "10px");
        assert_eq!(track.ease, "ease");
        assert_eq!(plan.items[0].width.to_string(), "calc((100% - 20px) / 3)");
        let in_view: Vec<usize> = plan.items_in_view().map(|item| item.index).collect();
        assert_eq!(in_view, vec![2, 3, 4]);
        assert!(plan.items.iter().all(|item| !item.active));
    }

    #[test]
    fn dots_highlight_every_visible_item() {
        let markup = SliderMarkup::new(images(6)).with_data("items-desktop", "3");
        let mut slider = controller(markup, DESKTOP);
        slider.go_to(4);
        let dots = slider.render().dots.expect("dots");
        assert_eq!(dots.dots.len(), 6);
        let active: Vec<usize> = dots
            .dots
            .iter()
            .filter(|dot| dot.active)
            .map(|dot| dot.index)
            .collect();
        assert_eq!(active, vec![4, 5]);
        assert_eq!(dots.dots[0].label, "Go to item 1");
    }

    #[test]
    fn arrows_disable_at_ends_unless_looping() {
        let mut slider = controller(SliderMarkup::new(images(3)), DESKTOP);
        let arrows = slider.render().arrows.expect("arrows");
        assert_eq!(arrows.prev, Some(ButtonState { disabled: true }));
        assert_eq!(arrows.next, Some(ButtonState { disabled: false }));

        slider.go_to(2);
        let arrows = slider.render().arrows.expect("arrows");
        assert_eq!(arrows.prev, Some(ButtonState { disabled: false }));
        assert_eq!(arrows.next, Some(ButtonState { disabled: true }));

        let looping = controller(
            SliderMarkup::new(images(3)).with_data("loop", "true"),
            DESKTOP,
        );
        let arrows = looping.render().arrows.expect("arrows");
        assert_eq!(arrows.prev, Some(ButtonState { disabled: false }));
    }

    #[test]
    fn missing_parts_degrade_silently() {
        let markup = SliderMarkup::new(images(4))
            .with_data("thumbnails", "true")
            .with_parts(SliderParts {
                track: true,
                ..SliderParts::default()
            });
        let mut slider = controller(markup, DESKTOP);
        let now = Instant::now();

        assert_eq!(slider.handle(Interaction::NextArrow, now), Effect::None);
        assert_eq!(slider.handle(Interaction::Dot(2), now), Effect::None);
        assert_eq!(slider.handle(Interaction::Thumb(3), now), Effect::None);
        assert_eq!(slider.current_index(), 0);

        let plan = slider.render();
        let arrows = plan.arrows.expect("arrows enabled");
        assert_eq!(arrows.prev, None);
        assert_eq!(arrows.next, None);
        assert!(plan.dots.is_none());
        assert!(plan.thumbs.is_none());
    }

    #[test]
    fn disabled_features_ignore_input() {
        let markup = SliderMarkup::new(images(4))
            .with_data("arrows", "false")
            .with_data("dots", "false");
        let mut slider = controller(markup, DESKTOP);
        let now = Instant::now();
        slider.handle(Interaction::NextArrow, now);
        slider.handle(Interaction::Dot(3), now);
        slider.handle(Interaction::Key(NavKey::ArrowRight), now);
        slider.handle(Interaction::Swipe(-200.0), now);
        assert_eq!(slider.current_index(), 0);
        assert!(slider.render().arrows.is_none());
    }

    #[test]
    fn empty_slider_is_inert() {
        let mut slider = controller(SliderMarkup::new(Vec::new()), DESKTOP);
        assert!(!slider.advance());
        assert!(!slider.retreat());
        assert_eq!(
            slider.handle(Interaction::ImageClick(0), Instant::now()),
            Effect::None
        );
        let plan = slider.render();
        assert!(plan.items.is_empty());
        assert_eq!(plan.page_count, 0);
    }

    #[test]
    fn autoplay_starts_with_construction_and_advances_on_tick() {
        let start = Instant::now();
        let markup = SliderMarkup::new(images(3))
            .with_data("autoplay", "true")
            .with_data("speed", "1000");
        let mut slider =
            SliderController::new(SliderId::from("auto"), &markup, DESKTOP, start).expect("valid");
        assert!(slider.is_playing());

        assert!(!slider.tick(start + Duration::from_millis(999)));
        assert!(slider.tick(start + Duration::from_millis(1000)));
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn play_twice_keeps_one_timer() {
        let start = Instant::now();
        let mut slider = controller(SliderMarkup::new(images(5)), DESKTOP);
        slider.play(start);
        let second = slider.play(start);
        assert_eq!(slider.timer_handle(), Some(second));

        assert!(slider.tick(start + Duration::from_millis(3000)));
        assert!(!slider.tick(start + Duration::from_millis(3001)));
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn user_navigation_restarts_the_countdown() {
        let start = Instant::now();
        let markup = SliderMarkup::new(images(5))
            .with_data("autoplay", "true")
            .with_data("speed", "1000");
        let mut slider =
            SliderController::new(SliderId::from("auto"), &markup, DESKTOP, start).expect("valid");

        slider.handle(Interaction::NextArrow, start + Duration::from_millis(900));
        assert_eq!(slider.current_index(), 1);
        assert!(!slider.tick(start + Duration::from_millis(1000)));
        assert!(slider.tick(start + Duration::from_millis(1900)));
        assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn hover_pauses_and_resumes_only_when_configured() {
        let now = Instant::now();
        let markup = SliderMarkup::new(images(3))
            .with_data("autoplay", "true")
            .with_data("hover-pause", "true");
        let mut slider = controller(markup.clone(), DESKTOP);
        slider.handle(Interaction::HoverEnter, now);
        assert!(!slider.is_playing());
        slider.handle(Interaction::HoverLeave, now);
        assert!(!slider.is_playing());

        let mut resuming = controller(markup.with_data("autoplay-resume", "true"), DESKTOP);
        resuming.handle(Interaction::HoverEnter, now);
        assert!(!resuming.is_playing());
        resuming.handle(Interaction::HoverLeave, now);
        assert!(resuming.is_playing());
    }

    #[test]
    fn stop_clears_the_timer() {
        let markup = SliderMarkup::new(images(3)).with_data("autoplay", "true");
        let mut slider = controller(markup, DESKTOP);
        slider.stop();
        assert_eq!(slider.timer_handle(), None);
        assert!(!slider.tick(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn swipe_and_keys_move_in_natural_direction() {
        let now = Instant::now();
        let markup = SliderMarkup::new(images(4))
            .with_data("swipe", "true")
            .with_data("keyboard", "true");
        let mut slider = controller(markup, DESKTOP);

        slider.handle(Interaction::Swipe(-80.0), now);
        assert_eq!(slider.current_index(), 1);
        slider.handle(Interaction::Swipe(30.0), now);
        assert_eq!(slider.current_index(), 1);
        slider.handle(Interaction::Swipe(80.0), now);
        assert_eq!(slider.current_index(), 0);

        slider.handle(Interaction::Key(NavKey::ArrowRight), now);
        slider.handle(Interaction::Key(NavKey::ArrowRight), now);
        assert_eq!(slider.current_index(), 2);
        slider.handle(Interaction::Key(NavKey::ArrowLeft), now);
        assert_eq!(slider.current_index(), 1);

        slider.handle(Interaction::PointerMoved(500.0), now);
        slider.handle(Interaction::PointerPressed, now);
        slider.handle(Interaction::PointerMoved(420.0), now);
        slider.handle(Interaction::PointerReleased, now);
        assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn release_after_a_drag_reports_the_swipe_even_at_the_edge() {
        let markup = SliderMarkup::new(images(2))
            .with_data("gallery", "true")
            .with_data("swipe", "true");
        let mut slider = controller(markup, DESKTOP);
        let now = Instant::now();
        slider.go_to(1);

        slider.handle(Interaction::PointerMoved(500.0), now);
        slider.handle(Interaction::PointerPressed, now);
        slider.handle(Interaction::PointerMoved(300.0), now);
        assert_eq!(
            slider.handle(Interaction::PointerReleased, now),
            Effect::Swiped(Swipe::Left)
        );
        assert_eq!(slider.current_index(), 1);

        // A press and release in place is a plain release.
        slider.handle(Interaction::PointerPressed, now);
        assert_eq!(slider.handle(Interaction::PointerReleased, now), Effect::None);
    }

    #[test]
    fn long_drag_is_reported_when_swipe_is_disabled() {
        let markup = SliderMarkup::new(images(3)).with_data("swipe", "false");
        let mut slider = controller(markup, DESKTOP);
        let now = Instant::now();

        slider.handle(Interaction::PointerMoved(100.0), now);
        slider.handle(Interaction::PointerPressed, now);
        slider.handle(Interaction::PointerMoved(300.0), now);
        assert_eq!(
            slider.handle(Interaction::PointerReleased, now),
            Effect::Swiped(Swipe::Right)
        );
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn thumbnails_page_by_visible_count() {
        let markup = SliderMarkup::new(images(10))
            .with_data("thumbnails", "true")
            .with_data("thumbs-items", "4");
        let mut slider = controller(markup, DESKTOP);
        let now = Instant::now();

        slider.handle(Interaction::ThumbsNext, now);
        assert_eq!(slider.thumb_start(), 4);
        slider.handle(Interaction::ThumbsNext, now);
        assert_eq!(slider.thumb_start(), 6);

        let thumbs = slider.render().thumbs.expect("thumbs");
        assert!(thumbs.next.disabled);
        assert!(!thumbs.prev.disabled);
        assert_eq!(
            thumbs.transform.to_string(),
            "translateX(calc(-6 * (100% + 10px) / 4))"
        );
        assert_eq!(thumbs.size.to_string(), "calc((100% - 30px) / 4)");
        let window: Vec<usize> = thumbs.thumbs_in_window().map(|t| t.index).collect();
        assert_eq!(window, vec![6, 7, 8, 9]);
        assert_eq!(thumbs.thumbs[0].alt, "Thumbnail 1");
    }

    #[test]
    fn navigation_keeps_active_thumbnail_visible() {
        let markup = SliderMarkup::new(images(10))
            .with_data("thumbnails", "true")
            .with_data("thumbs-items", "4");
        let mut slider = controller(markup, DESKTOP);
        let now = Instant::now();

        slider.handle(Interaction::Thumb(9), now);
        assert_eq!(slider.current_index(), 9);
        assert_eq!(slider.thumb_start(), 6);

        slider.go_to(1);
        assert_eq!(slider.thumb_start(), 1);
        for _ in 0..5 {
            slider.advance();
            assert!(slider.state().thumbs.contains(slider.current_index()));
        }
    }

    #[test]
    fn vertical_thumbnails_only_above_mobile() {
        let markup = SliderMarkup::new(images(6))
            .with_data("thumbnails", "true")
            .with_data("thumbs-orientation", "vertical");
        let mut slider = controller(markup, TABLET);
        let thumbs = slider.render().thumbs.expect("thumbs");
        assert_eq!(thumbs.axis, Axis::Vertical);
        assert!(thumbs.transform.to_string().starts_with("translateY("));
        assert_eq!(thumbs.visible, 3);

        slider.resize(MOBILE);
        let thumbs = slider.render().thumbs.expect("thumbs");
        assert_eq!(thumbs.axis, Axis::Horizontal);
        assert_eq!(thumbs.visible, 2);
    }

    #[test]
    fn resize_reclamps_thumb_window() {
        let markup = SliderMarkup::new(images(10))
            .with_data("thumbnails", "true")
            .with_data("thumbs-items", "2")
            .with_data("thumbs-items-tablet", "6");
        let mut slider = controller(markup, DESKTOP);
        slider.go_to(9);
        assert_eq!(slider.thumb_start(), 8);

        slider.resize(TABLET);
        assert_eq!(slider.thumb_start(), 4);
        assert!(slider.state().thumbs.contains(9));
    }

    #[test]
    fn resize_keeps_dots_when_page_count_is_unchanged() {
        let markup = SliderMarkup::new(images(5)).with_data("items-desktop", "3");
        let mut slider = controller(markup, DESKTOP);
        let generation = slider.render().dots.expect("dots").generation;
        assert!(!slider.resize(MOBILE));
        assert_eq!(slider.render().dots.expect("dots").generation, generation);
    }

    #[test]
    fn image_click_requests_gallery_with_aligned_start() {
        let markup = SliderMarkup::new(vec![
            Some(ImageRef::new("a.jpg")),
            None,
            Some(ImageRef::new("c.jpg")),
        ])
        .with_data("gallery", "true");
        let mut slider = controller(markup, DESKTOP);

        let effect = slider.handle(Interaction::ImageClick(2), Instant::now());
        assert_eq!(
            effect,
            Effect::OpenGallery(GalleryRequest {
                images: vec![ImageRef::new("a.jpg"), ImageRef::new("c.jpg")],
                start: 1,
            })
        );
        assert_eq!(
            slider.handle(Interaction::ImageClick(1), Instant::now()),
            Effect::None
        );
        assert!(gallery::global().is_initialized());
    }

    #[test]
    fn image_click_without_gallery_does_nothing() {
        let mut slider = controller(SliderMarkup::new(images(2)), DESKTOP);
        assert_eq!(
            slider.handle(Interaction::ImageClick(0), Instant::now()),
            Effect::None
        );
    }

    #[test]
    fn teardown_stops_autoplay() {
        let markup = SliderMarkup::new(images(3)).with_data("autoplay", "true");
        let mut slider = controller(markup, DESKTOP);
        slider.teardown();
        assert!(!slider.is_playing());
    }
}
