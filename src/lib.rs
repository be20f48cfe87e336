#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{ContentCatalog, Locale, SceneCommand, Scene, SceneConfig};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod css;
mod dom;
mod events;
mod frame;
mod input;
mod modal;
mod render;
mod ui;

fn wire_locale_toggle(document: &web::Document, locale: &Rc<Cell<Locale>>) {
    let locale = locale.clone();
    dom::add_click_listener(document, LOCALE_TOGGLE_ID, move || {
        let next = locale.get().toggled();
        locale.set(next);
        dom::store_locale(next.code());
    });
}

fn wire_modal_close(document: &web::Document, queue: &input::CommandQueue) {
    let queue = queue.clone();
    dom::add_click_listener(document, MODAL_CLOSE_ID, move || {
        input::push(&queue, SceneCommand::Close);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("polyfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Locale: persisted choice, falling back to Japanese
    let locale = Locale::from_code(dom::stored_locale().as_deref());
    dom::set_document_lang(&document, locale.code());
    let catalog = Rc::new(ContentCatalog::bundled()?);
    let portfolio = catalog.get(locale)?;
    let labels = portfolio.sections.clone();
    ui::apply_hero(&document, portfolio);

    let queue = input::command_queue();
    events::wire_canvas_resize(&canvas, &queue);

    let menu = ui::MenuView::build(&document, &labels, &queue);
    let nav = ui::NavView::build(&document, &labels, &queue);
    let modal = modal::ModalView::find(&document);
    if menu.is_none() {
        log::warn!("missing #{} or #{}; menu disabled", MENU_VIEWPORT_ID, MENU_TRACK_ID);
    }

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let mut config = SceneConfig::new(labels).with_seed(seed);
    if let Some((w, h)) = dom::canvas_css_size(&canvas) {
        config = config.with_viewport(w, h);
    }
    let menu_layout = menu.as_ref().and_then(|m| m.measure());
    if let Some((item_h, view_h)) = menu_layout {
        config.menu_item_height = item_h;
        config.menu_viewport_height = view_h;
    }
    let scene = Scene::new(config);
    let fragments = ui::FragmentsView::build(&document, scene.fragments().fragments());

    if let Some(m) = &menu {
        events::wire_menu_scroll(m.viewport(), &queue);
    }
    events::wire_pointer_handlers(&canvas, &queue);
    events::wire_global_keydown(queue.clone());
    wire_modal_close(&document, &queue);
    let locale_cell = Rc::new(Cell::new(locale));
    wire_locale_toggle(&document, &locale_cell);

    // A missing GPU leaves the DOM side running without a canvas image.
    let gpu = frame::init_gpu(&canvas, &scene).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        commands: queue,
        document,
        canvas,
        menu,
        nav,
        modal,
        fragments,
        catalog,
        locale: locale_cell,
        shown_locale: locale,
        gpu,
        last_instant: Instant::now(),
        menu_layout,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
