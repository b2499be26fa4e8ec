// SPDX-License-Identifier: MPL-2.0
//! Host window that runs the sliders declared by a page.
//!
//! `App` owns the slider registry and the resize debouncer, translates iced
//! events into slider and gallery inputs, and draws the resulting render
//! plans. Every state change happens in `update`; `view` only reads plans.

mod message;
mod style;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{Config, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::debounce::Debouncer;
use crate::gallery::{self, GalleryInput};
use crate::gesture::NavKey;
use crate::markup::Page;
use crate::namespace;
use crate::registry::SliderRegistry;
use crate::slider::{Effect, Interaction, SliderId};
use iced::keyboard::{self, key::Named, Key};
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const APP_TITLE: &str = "Danny Slider";

/// Root iced state: the live sliders plus the host's own bookkeeping.
pub struct App {
    registry: SliderRegistry,
    page_path: PathBuf,
    viewport_width: f32,
    resize: Debouncer<f32>,
    tick_interval: Duration,
    /// Slider under the pointer; it receives arrow keys.
    hovered: Option<SliderId>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page_path)
            .field("sliders", &self.registry.len())
            .field("viewport_width", &self.viewport_width)
            .finish()
    }
}

/// Builds the window settings from `[window]` and the CLI width.
pub fn window_settings(config: &Config, width: Option<f32>) -> window::Settings {
    let width = width
        .or(config.window.width)
        .unwrap_or(DEFAULT_WINDOW_WIDTH);
    let height = config.window.height.unwrap_or(DEFAULT_WINDOW_HEIGHT);
    window::Settings {
        size: iced::Size::new(width, height),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let window = window_settings(&flags.config, flags.width);

    // iced 0.14 wants a `Fn` boot; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Discovers every slider on the page for the initial viewport.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let viewport_width = flags
            .width
            .or(flags.config.window.width)
            .unwrap_or(DEFAULT_WINDOW_WIDTH);

        let mut app = Self {
            registry: SliderRegistry::new(),
            page_path: flags.page_path,
            viewport_width,
            resize: Debouncer::new(flags.config.runtime.resize_debounce()),
            tick_interval: flags.config.runtime.tick(),
            hovered: None,
        };
        app.discover(&flags.page, Instant::now());
        (app, Task::none())
    }

    fn discover(&mut self, page: &Page, now: Instant) {
        let report = namespace::install().init(&mut self.registry, page, self.viewport_width, now);
        if !report.is_clean() {
            tracing::warn!(
                failed = report.failed.len(),
                "some sliders could not be initialized"
            );
        }
    }

    fn page_dir(&self) -> &Path {
        self.page_path.parent().unwrap_or_else(|| Path::new("."))
    }

    fn title(&self) -> String {
        match self.page_path.file_name().and_then(|name| name.to_str()) {
            Some(name) => format!("{name} - {APP_TITLE}"),
            None => APP_TITLE.to_string(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.tick_interval),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slider { id, interaction } => {
                self.handle_slider(&id, interaction, Instant::now());
            }
            Message::ItemReleased { id, index } => {
                let now = Instant::now();
                // A release that ended a swipe is not a click.
                let released = self.handle_slider(&id, Interaction::PointerReleased, now);
                if !matches!(released, Effect::Swiped(_)) {
                    self.handle_slider(&id, Interaction::ImageClick(index), now);
                }
            }
            Message::Gallery(input) => {
                gallery::global().handle(input);
            }
            Message::Event(event) => self.handle_event(event),
            Message::Tick(now) => {
                if let Some(width) = self.resize.poll(now) {
                    self.viewport_width = width;
                    self.registry.resize(width);
                    tracing::debug!(width, "viewport resized");
                }
                self.registry.tick(now);
            }
        }
        Task::none()
    }

    fn handle_slider(&mut self, id: &SliderId, interaction: Interaction, now: Instant) -> Effect {
        match interaction {
            Interaction::HoverEnter => self.hovered = Some(id.clone()),
            Interaction::HoverLeave if self.hovered.as_ref() == Some(id) => self.hovered = None,
            _ => {}
        }

        let Some(slider) = self.registry.get_mut(id) else {
            return Effect::None;
        };
        let effect = slider.handle(interaction, now);
        if let Effect::OpenGallery(request) = &effect {
            gallery::global().open(request.images.clone(), request.start);
        }
        effect
    }

    fn handle_event(&mut self, event: iced::Event) {
        match event {
            iced::Event::Window(window::Event::Resized(size)) => {
                self.resize.push(size.width, Instant::now());
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                let Some(key) = nav_key(&key) else {
                    return;
                };
                let mut overlay = gallery::global();
                if overlay.is_open() {
                    overlay.handle(GalleryInput::Key(key));
                    return;
                }
                drop(overlay);
                if let Some(id) = self.hovered.clone() {
                    self.handle_slider(&id, Interaction::Key(key), Instant::now());
                }
            }
            _ => {}
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let plans = self.registry.plans();
        let gallery = gallery::global().render();
        view::view(view::ViewContext {
            plans: &plans,
            gallery: gallery.as_ref(),
            page_dir: self.page_dir(),
        })
    }
}

fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(NavKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(NavKey::ArrowRight),
        Key::Named(Named::Escape) => Some(NavKey::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_page;

    const PAGE: &str = r#"
        <div class="danny-slider" id="hero" data-gallery="true" data-keyboard="true">
          <div class="danny-slider-track">
            <div class="danny-slider-item"><img src="a.jpg"></div>
            <div class="danny-slider-item"><img src="b.jpg"></div>
            <div class="danny-slider-item"><img src="c.jpg"></div>
          </div>
          <button class="danny-slider-prev"></button>
          <button class="danny-slider-next"></button>
        </div>"#;

    fn app() -> App {
        let page = parse_page(PAGE).expect("parse");
        let (app, _task) = App::new(Flags {
            page_path: PathBuf::from("/tmp/page.html"),
            page,
            config: Config::default(),
            width: Some(1280.0),
        });
        app
    }

    fn hero() -> SliderId {
        SliderId::from("hero")
    }

    fn index(app: &App) -> usize {
        app.registry.get(&hero()).expect("hero").current_index()
    }

    #[test]
    fn title_shows_page_file_name() {
        assert_eq!(app().title(), "page.html - Danny Slider");
    }

    #[test]
    fn window_settings_prefer_cli_width() {
        let settings = window_settings(&Config::default(), Some(900.0));
        assert_eq!(settings.size.width, 900.0);
        assert_eq!(settings.size.height, DEFAULT_WINDOW_HEIGHT);
    }

    #[test]
    fn arrow_messages_reach_the_slider() {
        let mut app = app();
        let _ = app.update(Message::Slider {
            id: hero(),
            interaction: Interaction::NextArrow,
        });
        assert_eq!(index(&app), 1);
    }

    #[test]
    fn hover_selects_the_keyboard_target() {
        let mut app = app();
        let press = |app: &mut App| {
            app.handle_slider(&hero(), Interaction::Key(NavKey::ArrowRight), Instant::now())
        };
        press(&mut app);
        assert_eq!(index(&app), 1);

        let _ = app.update(Message::Slider {
            id: hero(),
            interaction: Interaction::HoverEnter,
        });
        assert_eq!(app.hovered, Some(hero()));
        let _ = app.update(Message::Slider {
            id: hero(),
            interaction: Interaction::HoverLeave,
        });
        assert_eq!(app.hovered, None);
    }

    #[test]
    fn settled_resize_is_applied_on_tick() {
        let mut app = app();
        let start = Instant::now();
        app.resize.push(500.0, start);
        let _ = app.update(Message::Tick(start + Duration::from_secs(1)));
        assert_eq!(app.viewport_width, 500.0);
        assert_eq!(
            app.registry.get(&hero()).expect("hero").breakpoint(),
            crate::slider::Breakpoint::Mobile
        );
    }

    #[test]
    fn swipe_at_the_last_item_does_not_open_the_gallery() {
        let page = parse_page(
            r#"<div class="danny-slider" id="edge" data-gallery="true" data-swipe="true">
                 <div class="danny-slider-track">
                   <div class="danny-slider-item"><img src="a.jpg"></div>
                   <div class="danny-slider-item"><img src="b.jpg"></div>
                 </div>
               </div>"#,
        )
        .expect("parse");
        let (mut app, _task) = App::new(Flags {
            page_path: PathBuf::from("/tmp/edge.html"),
            page,
            config: Config::default(),
            width: Some(1280.0),
        });
        let edge = SliderId::from("edge");
        app.registry.get_mut(&edge).expect("edge").go_to(1);

        let send = |app: &mut App, interaction: Interaction| {
            let _ = app.update(Message::Slider {
                id: edge.clone(),
                interaction,
            });
        };
        send(&mut app, Interaction::PointerMoved(500.0));
        send(&mut app, Interaction::PointerPressed);
        send(&mut app, Interaction::PointerMoved(300.0));
        let _ = app.update(Message::ItemReleased {
            id: edge.clone(),
            index: 1,
        });

        assert_eq!(app.registry.get(&edge).expect("edge").current_index(), 1);
        assert!(!gallery::global().is_open());
    }

    #[test]
    fn nav_keys_map_to_named_keys() {
        assert_eq!(
            nav_key(&Key::Named(Named::ArrowLeft)),
            Some(NavKey::ArrowLeft)
        );
        assert_eq!(nav_key(&Key::Named(Named::Escape)), Some(NavKey::Escape));
        assert_eq!(nav_key(&Key::Named(Named::Enter)), None);
    }
}
