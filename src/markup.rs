// SPDX-License-Identifier: MPL-2.0
//! Declarative markup input.
//!
//! A page declares sliders as containers with the `danny-slider` class and
//! `data-*` configuration attributes. Inside a container the parser looks for
//! the track, the items (each optionally holding one `<img>`), the arrow
//! buttons and the dots/thumbnail containers:
//!
//! ```html
//! <div class="danny-slider" id="hero" data-loop="true" data-items-desktop="3">
//!   <div class="danny-slider-track">
//!     <div class="danny-slider-item"><img src="a.jpg" alt="A"></div>
//!   </div>
//!   <button class="danny-slider-prev"></button>
//!   <button class="danny-slider-next"></button>
//!   <div class="danny-slider-dots"></div>
//!   <div class="danny-slider-thumbs"></div>
//! </div>
//! ```
//!
//! Parsing is lenient about HTML: void elements need no closing tag,
//! attribute values may be unquoted, and mismatched end tags are tolerated.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// `data-*` attributes keyed without the `data-` prefix (`items-desktop`, ...).
pub type Attributes = BTreeMap<String, String>;

const SLIDER_CLASS: &str = "danny-slider";
const TRACK_CLASS: &str = "danny-slider-track";
const ITEM_CLASS: &str = "danny-slider-item";
const PREV_CLASS: &str = "danny-slider-prev";
const NEXT_CLASS: &str = "danny-slider-next";
const DOTS_CLASS: &str = "danny-slider-dots";
const THUMBS_CLASS: &str = "danny-slider-thumbs";

/// HTML elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose body is raw text and may contain a bare `<`.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Image referenced by an item, shared by thumbnails and the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMarkup {
    pub image: Option<ImageRef>,
}

/// Which optional sub-elements a container declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderParts {
    pub track: bool,
    pub prev: bool,
    pub next: bool,
    pub dots: bool,
    pub thumbs: bool,
}

impl SliderParts {
    #[must_use]
    pub fn all() -> Self {
        Self {
            track: true,
            prev: true,
            next: true,
            dots: true,
            thumbs: true,
        }
    }
}

/// One slider container as declared by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliderMarkup {
    pub id: Option<String>,
    pub data: Attributes,
    pub parts: SliderParts,
    pub items: Vec<ItemMarkup>,
}

impl SliderMarkup {
    /// Builds a container with every optional part present, for manual
    /// instantiation without a page.
    pub fn new(images: impl IntoIterator<Item = Option<ImageRef>>) -> Self {
        Self {
            id: None,
            data: Attributes::new(),
            parts: SliderParts::all(),
            items: images
                .into_iter()
                .map(|image| ItemMarkup { image })
                .collect(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets a `data-*` attribute; `name` is given without the prefix.
    #[must_use]
    pub fn with_data(mut self, name: &str, value: &str) -> Self {
        self.data.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_parts(mut self, parts: SliderParts) -> Self {
        self.parts = parts;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub sliders: Vec<SliderMarkup>,
}

/// Reads and parses a page from disk.
pub fn load_page(path: &Path) -> Result<Page> {
    let content = fs::read_to_string(path)?;
    parse_page(&content)
}

struct Frame {
    name: String,
    slider: Option<usize>,
    item: Option<(usize, usize)>,
}

/// Extracts every slider container from an HTML document.
pub fn parse_page(html: &str) -> Result<Page> {
    let html = blank_raw_text(html);
    let mut reader = Reader::from_str(&html);
    let config = reader.config_mut();
    config.trim_text(true);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut page = Page::default();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => open_element(&mut page, &mut stack, e, false),
            Ok(Event::Empty(ref e)) => open_element(&mut page, &mut stack, e, true),
            Ok(Event::End(ref e)) => {
                let name = lowercase_name(e.local_name().as_ref());
                if let Some(depth) = stack.iter().rposition(|frame| frame.name == name) {
                    stack.truncate(depth);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(Error::Markup(format!(
                    "at byte {}: {err}",
                    reader.error_position()
                )));
            }
        }
    }

    Ok(page)
}

fn open_element(page: &mut Page, stack: &mut Vec<Frame>, element: &BytesStart<'_>, empty: bool) {
    let name = lowercase_name(element.local_name().as_ref());
    let attributes = read_attributes(element);
    let classes: Vec<&str> = attributes
        .get("class")
        .map(|class| class.split_whitespace().collect())
        .unwrap_or_default();
    let has_class = |wanted: &str| classes.iter().any(|class| *class == wanted);

    let mut frame = Frame {
        name,
        slider: None,
        item: None,
    };

    let current_slider = stack.iter().rev().find_map(|frame| frame.slider);
    let current_item = stack.iter().rev().find_map(|frame| frame.item);

    if has_class(SLIDER_CLASS) {
        page.sliders.push(slider_from_attributes(&attributes));
        frame.slider = Some(page.sliders.len() - 1);
    } else if let Some(slider_index) = current_slider {
        let slider = &mut page.sliders[slider_index];
        if has_class(TRACK_CLASS) {
            slider.parts.track = true;
        }
        if has_class(ITEM_CLASS) {
            slider.items.push(ItemMarkup::default());
            frame.item = Some((slider_index, slider.items.len() - 1));
        }
        if has_class(PREV_CLASS) {
            slider.parts.prev = true;
        }
        if has_class(NEXT_CLASS) {
            slider.parts.next = true;
        }
        if has_class(DOTS_CLASS) {
            slider.parts.dots = true;
        }
        if has_class(THUMBS_CLASS) {
            slider.parts.thumbs = true;
        }
    }

    if frame.name == "img" {
        if let Some((slider_index, item_index)) = current_item {
            let item = &mut page.sliders[slider_index].items[item_index];
            if item.image.is_none() {
                item.image = image_from_attributes(&attributes);
            }
        }
    }

    if !empty && !VOID_ELEMENTS.contains(&frame.name.as_str()) {
        stack.push(frame);
    }
}

fn slider_from_attributes(attributes: &BTreeMap<String, String>) -> SliderMarkup {
    let data = attributes
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix("data-")
                .map(|name| (name.to_string(), value.clone()))
        })
        .collect();
    SliderMarkup {
        id: attributes.get("id").filter(|id| !id.is_empty()).cloned(),
        data,
        parts: SliderParts::default(),
        items: Vec::new(),
    }
}

fn image_from_attributes(attributes: &BTreeMap<String, String>) -> Option<ImageRef> {
    let src = attributes.get("src").filter(|src| !src.is_empty())?;
    Some(ImageRef {
        src: src.clone(),
        alt: attributes.get("alt").cloned(),
    })
}

fn read_attributes(element: &BytesStart<'_>) -> BTreeMap<String, String> {
    element
        .html_attributes()
        .filter_map(|attribute| attribute.ok())
        .map(|attribute| {
            let key = lowercase_name(attribute.key.as_ref());
            let value = match attribute.unescape_value() {
                Ok(value) => value.into_owned(),
                Err(_) => String::from_utf8_lossy(&attribute.value).into_owned(),
            };
            (key, value)
        })
        .collect()
}

/// Drops the bodies of `<script>` and `<style>` elements so their contents
/// are never read as markup. The tags themselves are kept.
fn blank_raw_text(html: &str) -> Cow<'_, str> {
    let lower = html.to_ascii_lowercase();
    let mut output = String::new();
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(found) = lower[cursor..].find('<') {
        let open = cursor + found;
        cursor = open + 1;
        let Some(name) = RAW_TEXT_ELEMENTS.iter().find(|name| {
            lower[cursor..].starts_with(*name)
                && lower[cursor + name.len()..]
                    .starts_with(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
        }) else {
            continue;
        };
        let Some(tag_end) = lower[open..].find('>').map(|end| open + end + 1) else {
            break;
        };
        if lower[..tag_end].ends_with("/>") {
            cursor = tag_end;
            continue;
        }
        let closing = format!("</{name}");
        let body_end = lower[tag_end..]
            .find(&closing)
            .map_or(html.len(), |end| tag_end + end);

        output.push_str(&html[copied..tag_end]);
        copied = body_end;
        cursor = body_end;
    }

    if copied == 0 {
        return Cow::Borrowed(html);
    }
    output.push_str(&html[copied..]);
    Cow::Owned(output)
}

fn lowercase_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}
