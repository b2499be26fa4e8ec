// SPDX-License-Identifier: MPL-2.0
//! Registry of live sliders keyed by element identity.
//!
//! A container is identified by its `id` attribute, or by its position in the
//! document (`slider-{n}`) when it has none or when an earlier container on
//! the same page already claimed that `id`. Constructing a slider for an
//! element that is already registered hands back the existing controller, so
//! re-scanning a page never doubles timers or listeners.

use crate::error::{Error, Result};
use crate::markup::{Page, SliderMarkup};
use crate::slider::{RenderPlan, SliderController, SliderId};
use std::collections::HashSet;
use std::time::Instant;

/// Outcome of one auto-discovery pass.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    /// Containers that got a fresh controller.
    pub initialized: Vec<SliderId>,
    /// Containers that were already registered.
    pub reused: Vec<SliderId>,
    /// Containers whose construction failed; the others are unaffected.
    pub failed: Vec<(SliderId, Error)>,
}

impl DiscoveryReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct SliderRegistry {
    sliders: Vec<SliderController>,
}

impl SliderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of `markup` when it is the `position`-th container.
    #[must_use]
    pub fn identify(markup: &SliderMarkup, position: usize) -> SliderId {
        match &markup.id {
            Some(id) => SliderId::new(id.clone()),
            None => SliderId::positional(position),
        }
    }

    /// Identities of every container on `page`, in document order.
    ///
    /// A repeated `id` only names the first container that carries it; the
    /// later ones fall back to their position so each element gets its own
    /// slider.
    #[must_use]
    pub fn identify_page(page: &Page) -> Vec<SliderId> {
        let mut seen = HashSet::new();
        page.sliders
            .iter()
            .enumerate()
            .map(|(position, markup)| {
                let id = Self::identify(markup, position);
                if seen.insert(id.clone()) {
                    return id;
                }
                let fallback = SliderId::positional(position);
                tracing::warn!(
                    id = %id,
                    slider = %fallback,
                    "duplicate slider id, using document position instead"
                );
                seen.insert(fallback.clone());
                fallback
            })
            .collect()
    }

    fn position_of(&self, id: &SliderId) -> Option<usize> {
        self.sliders.iter().position(|slider| slider.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &SliderId) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns the controller for `markup`, creating it on first sight.
    pub fn construct(
        &mut self,
        markup: &SliderMarkup,
        position: usize,
        viewport_width: f32,
        now: Instant,
    ) -> Result<&mut SliderController> {
        self.construct_as(Self::identify(markup, position), markup, viewport_width, now)
    }

    fn construct_as(
        &mut self,
        id: SliderId,
        markup: &SliderMarkup,
        viewport_width: f32,
        now: Instant,
    ) -> Result<&mut SliderController> {
        if let Some(existing) = self.position_of(&id) {
            return Ok(&mut self.sliders[existing]);
        }
        let controller = SliderController::new(id, markup, viewport_width, now)?;
        self.sliders.push(controller);
        let last = self.sliders.len() - 1;
        Ok(&mut self.sliders[last])
    }

    /// Instantiates every container on `page`, independently of each other.
    pub fn discover(&mut self, page: &Page, viewport_width: f32, now: Instant) -> DiscoveryReport {
        let mut report = DiscoveryReport::default();

        for (id, markup) in Self::identify_page(page).into_iter().zip(&page.sliders) {
            if self.contains(&id) {
                report.reused.push(id);
                continue;
            }
            match self.construct_as(id.clone(), markup, viewport_width, now) {
                Ok(_) => report.initialized.push(id),
                Err(err) => {
                    tracing::error!(slider = %id, error = %err, "failed to initialize slider");
                    report.failed.push((id, err));
                }
            }
        }

        tracing::debug!(
            initialized = report.initialized.len(),
            reused = report.reused.len(),
            failed = report.failed.len(),
            "slider discovery finished"
        );
        report
    }

    /// Stops and forgets a slider. Returns `false` for unknown ids.
    pub fn teardown(&mut self, id: &SliderId) -> bool {
        let Some(position) = self.position_of(id) else {
            return false;
        };
        let mut slider = self.sliders.remove(position);
        slider.teardown();
        true
    }

    pub fn teardown_all(&mut self) {
        for mut slider in self.sliders.drain(..) {
            slider.teardown();
        }
    }

    /// Applies a settled viewport width to every slider.
    pub fn resize(&mut self, viewport_width: f32) {
        for slider in &mut self.sliders {
            slider.resize(viewport_width);
        }
    }

    /// Drives every autoplay timer. Returns whether any slider moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.sliders
            .iter_mut()
            .fold(false, |moved, slider| slider.tick(now) || moved)
    }

    #[must_use]
    pub fn get(&self, id: &SliderId) -> Option<&SliderController> {
        self.sliders.iter().find(|slider| slider.id() == id)
    }

    pub fn get_mut(&mut self, id: &SliderId) -> Option<&mut SliderController> {
        self.sliders.iter_mut().find(|slider| slider.id() == id)
    }

    /// Sliders in document order.
    pub fn iter(&self) -> impl Iterator<Item = &SliderController> {
        self.sliders.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    #[must_use]
    pub fn plans(&self) -> Vec<RenderPlan> {
        self.sliders.iter().map(SliderController::render).collect()
    }
}
