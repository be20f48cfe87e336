use crate::core::SceneCommand;
use crate::input::{self, CommandQueue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn add_non_passive(target: &web::EventTarget, event: &str, listener: &js_sys::Function) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) =
        target.add_event_listener_with_callback_and_add_event_listener_options(event, listener, &opts)
    {
        log::warn!("[events] could not listen for {}: {:?}", event, e);
    }
}

/// Wheel and touch on the menu viewport drive the scroller physics. Page
/// scrolling is suppressed so the menu owns the gesture.
pub fn wire_menu_scroll(viewport: &web::HtmlElement, queue: &CommandQueue) {
    let target: &web::EventTarget = viewport.as_ref();

    let q = queue.clone();
    let wheel = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        input::push(&q, SceneCommand::Wheel(ev.delta_y() as f32));
    }) as Box<dyn FnMut(_)>);
    add_non_passive(target, "wheel", wheel.as_ref().unchecked_ref());
    wheel.forget();

    let q = queue.clone();
    let touch_start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(y) = input::touch_y(&ev) {
            input::push(&q, SceneCommand::TouchStart(y));
        }
    }) as Box<dyn FnMut(_)>);
    add_non_passive(target, "touchstart", touch_start.as_ref().unchecked_ref());
    touch_start.forget();

    let q = queue.clone();
    let touch_move = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some(y) = input::touch_y(&ev) {
            input::push(&q, SceneCommand::TouchMove(y));
        }
    }) as Box<dyn FnMut(_)>);
    add_non_passive(target, "touchmove", touch_move.as_ref().unchecked_ref());
    touch_move.forget();

    let q = queue.clone();
    let touch_end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        input::push(&q, SceneCommand::TouchEnd);
    }) as Box<dyn FnMut(_)>);
    add_non_passive(target, "touchend", touch_end.as_ref().unchecked_ref());
    add_non_passive(target, "touchcancel", touch_end.as_ref().unchecked_ref());
    touch_end.forget();
}
