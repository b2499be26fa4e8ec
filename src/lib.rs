// SPDX-License-Identifier: MPL-2.0
//! `danny_slider` is a declarative carousel/slider component.
//!
//! Pages declare sliders as markup containers with `data-*` attributes. The
//! crate parses them ([`markup`]), resolves options, runs each slider's
//! navigation state machine and autoplay timer ([`slider`]), shares one
//! full-screen gallery overlay between them ([`gallery`]) and describes the
//! result as serializable render plans. [`app`] hosts everything in an iced
//! window.
//!
//! ```no_run
//! use danny_slider::markup::parse_page;
//! use danny_slider::namespace;
//! use danny_slider::registry::SliderRegistry;
//! use std::time::Instant;
//!
//! let page = parse_page(r#"<div class="danny-slider" data-loop="true">
//!   <div class="danny-slider-track">
//!     <div class="danny-slider-item"><img src="a.jpg"></div>
//!   </div>
//! </div>"#).expect("valid markup");
//!
//! let mut registry = SliderRegistry::new();
//! namespace::install().init(&mut registry, &page, 1280.0, Instant::now());
//! for plan in registry.plans() {
//!     println!("{} shows item {}", plan.id, plan.current_index);
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/danny_slider/1.0.0")]

pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod markup;
pub mod namespace;
pub mod registry;
pub mod slider;

pub use error::{Error, Result};
pub use gallery::OverlayGallery;
pub use namespace::{install, Namespace, VERSION};
pub use registry::{DiscoveryReport, SliderRegistry};
pub use slider::{RenderPlan, SliderController, SliderId, SliderOptions};
