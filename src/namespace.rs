// SPDX-License-Identifier: MPL-2.0
//! Public entry point for hosts.
//!
//! [`install`] hands out the process-wide [`Namespace`], which bundles the
//! version identifier, the page re-scan, the manual slider constructor and the
//! gallery overlay.

use crate::error::Result;
use crate::gallery::{self, OverlayGallery};
use crate::markup::{Page, SliderMarkup};
use crate::registry::{DiscoveryReport, SliderRegistry};
use crate::slider::SliderController;
use std::sync::{MutexGuard, OnceLock};
use std::time::Instant;

/// Crate version, as exposed to hosts.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static NAMESPACE: OnceLock<Namespace> = OnceLock::new();

#[derive(Debug)]
pub struct Namespace {
    version: &'static str,
}

/// Installs the namespace. Later calls log a warning and return the
/// installed instance.
pub fn install() -> &'static Namespace {
    if let Some(existing) = NAMESPACE.get() {
        tracing::warn!(version = existing.version, "danny-slider namespace already installed");
        return existing;
    }
    NAMESPACE.get_or_init(|| {
        tracing::debug!(version = VERSION, "danny-slider namespace installed");
        Namespace { version: VERSION }
    })
}

impl Namespace {
    #[must_use]
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Scans `page` and instantiates every container not yet registered.
    pub fn init(
        &self,
        registry: &mut SliderRegistry,
        page: &Page,
        viewport_width: f32,
        now: Instant,
    ) -> DiscoveryReport {
        registry.discover(page, viewport_width, now)
    }

    /// Manually instantiates one container, returning the existing
    /// controller when the element is already registered.
    pub fn slider<'r>(
        &self,
        registry: &'r mut SliderRegistry,
        markup: &SliderMarkup,
        position: usize,
        viewport_width: f32,
        now: Instant,
    ) -> Result<&'r mut SliderController> {
        registry.construct(markup, position, viewport_width, now)
    }

    /// The shared gallery overlay, for triggering it from outside a slider.
    pub fn gallery(&self) -> MutexGuard<'static, OverlayGallery> {
        gallery::global()
    }
}
