use crate::constants::*;
use crate::core::{Fragment, FragmentSprite, MenuItemVisual, Portfolio, SceneCommand};
use crate::css;
use crate::dom;
use crate::input::{self, CommandQueue};
use wasm_bindgen::JsCast;
use web_sys as web;

fn make_button(document: &web::Document, class: &str, label: &str) -> Option<web::HtmlElement> {
    let el = document.create_element("button").ok()?;
    el.set_class_name(class);
    _ = el.set_attribute("type", "button");
    el.set_text_content(Some(label));
    el.dyn_into::<web::HtmlElement>().ok()
}

fn on_click(el: &web::HtmlElement, queue: &CommandQueue, command: SceneCommand) {
    let queue = queue.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        input::push(&queue, command);
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The looping menu: three copies of the section labels inside a track that
/// is translated by the scroller position.
pub struct MenuView {
    viewport: web::HtmlElement,
    track: web::HtmlElement,
    items: Vec<web::HtmlElement>,
}

impl MenuView {
    pub fn build(document: &web::Document, labels: &[String], queue: &CommandQueue) -> Option<Self> {
        let viewport = dom::html_element(document, MENU_VIEWPORT_ID)?;
        let track = dom::html_element(document, MENU_TRACK_ID)?;
        track.set_text_content(None);
        let mut items = Vec::with_capacity(labels.len() * 3);
        for i in 0..labels.len() * 3 {
            let label = &labels[i % labels.len()];
            let Some(item) = make_button(document, "menu-item", label) else {
                continue;
            };
            on_click(&item, queue, SceneCommand::MenuClick(i));
            _ = track.append_child(&item);
            items.push(item);
        }
        log::info!("[ui] menu items={}", items.len());
        Some(Self {
            viewport,
            track,
            items,
        })
    }

    pub fn viewport(&self) -> &web::HtmlElement {
        &self.viewport
    }

    /// Item height and viewport height in CSS px, once laid out.
    pub fn measure(&self) -> Option<(f32, f32)> {
        let item_h = self
            .items
            .first()
            .map(|el| el.offset_height() as f32)
            .filter(|h| *h > 0.0)
            .unwrap_or(MENU_ITEM_HEIGHT_FALLBACK_PX);
        let view_h = self.viewport.client_height() as f32;
        (view_h > 0.0).then_some((item_h, view_h))
    }

    pub fn relabel(&self, labels: &[String]) {
        if labels.is_empty() {
            return;
        }
        for (i, el) in self.items.iter().enumerate() {
            el.set_text_content(Some(&labels[i % labels.len()]));
        }
    }

    pub fn apply(&self, position: f32, visuals: &[MenuItemVisual]) {
        _ = self
            .track
            .style()
            .set_property("transform", &css::track_transform(position));
        for (el, v) in self.items.iter().zip(visuals) {
            let style = el.style();
            _ = style.set_property("opacity", &css::item_opacity(v.opacity));
            _ = style.set_property("transform", &css::item_transform(v.scale));
            _ = style.set_property("filter", &css::item_filter(v.blur_px));
            dom::set_class(el, CLASS_ACCENT, v.accent);
            dom::set_class(el, CLASS_ACTIVE, v.active);
        }
    }
}

/// Persistent navigation: one button per section, each a plain `Select`.
pub struct NavView {
    buttons: Vec<web::HtmlElement>,
}

impl NavView {
    pub fn build(document: &web::Document, labels: &[String], queue: &CommandQueue) -> Option<Self> {
        let nav = dom::html_element(document, NAV_ID)?;
        nav.set_text_content(None);
        let mut buttons = Vec::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            let Some(button) = make_button(document, "nav-item", label) else {
                continue;
            };
            on_click(&button, queue, SceneCommand::Select(i + 1));
            _ = nav.append_child(&button);
            buttons.push(button);
        }
        Some(Self { buttons })
    }

    pub fn relabel(&self, labels: &[String]) {
        for (el, label) in self.buttons.iter().zip(labels) {
            el.set_text_content(Some(label));
        }
    }

    pub fn mark_active(&self, active_section: Option<usize>) {
        for (i, el) in self.buttons.iter().enumerate() {
            dom::set_class(el, CLASS_ACTIVE, active_section == Some(i + 1));
        }
    }
}

/// Code-glyph labels layered over the canvas, one per floating fragment.
pub struct FragmentsView {
    labels: Vec<(web::HtmlElement, f32)>,
}

impl FragmentsView {
    pub fn build(document: &web::Document, fragments: &[Fragment]) -> Option<Self> {
        let layer = dom::html_element(document, FRAGMENTS_ID)?;
        layer.set_text_content(None);
        let mut labels = Vec::with_capacity(fragments.len());
        for f in fragments {
            let el = document
                .create_element("span")
                .ok()?
                .dyn_into::<web::HtmlElement>()
                .ok()?;
            el.set_class_name("code-fragment");
            el.set_text_content(Some(f.text));
            _ = el.style().set_property("opacity", &css::item_opacity(f.opacity));
            _ = layer.append_child(&el);
            labels.push((el, f.size));
        }
        Some(Self { labels })
    }

    pub fn apply(&self, sprites: &[FragmentSprite], view_w: f32, view_h: f32) {
        for ((el, size), sprite) in self.labels.iter().zip(sprites) {
            let style = el.style();
            if !sprite.visible {
                _ = style.set_property("display", "none");
                continue;
            }
            _ = style.remove_property("display");
            _ = style.set_property(
                "transform",
                &css::fragment_transform(sprite.ndc.x, sprite.ndc.y, view_w, view_h),
            );
            _ = style.set_property("font-size", &css::fragment_font_size(*size, sprite.scale, view_h));
        }
    }
}

pub fn apply_hero(document: &web::Document, portfolio: &Portfolio) {
    dom::set_text(document, HERO_NAME_ID, &portfolio.hero.name);
    dom::set_text(document, HERO_TITLE_ID, &portfolio.hero.title);
    dom::set_text(document, HERO_TAGLINE_ID, &portfolio.hero.tagline);
}
