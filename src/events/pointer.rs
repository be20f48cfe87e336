use crate::core::SceneCommand;
use crate::dom;
use crate::input::{self, CommandQueue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, queue: &CommandQueue) {
    wire_pointermove(canvas, queue);
    wire_click(canvas, queue);
}

// Parallax follows the pointer anywhere on the page, not only over the canvas.
fn wire_pointermove(canvas: &web::HtmlCanvasElement, queue: &CommandQueue) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let queue = queue.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = input::pointer_ndc(ev.client_x(), ev.client_y(), &canvas);
        input::push(&queue, SceneCommand::PointerMove(ndc));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(canvas: &web::HtmlCanvasElement, queue: &CommandQueue) {
    let target = canvas.clone();
    let queue = queue.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let ndc = input::pointer_ndc(ev.client_x(), ev.client_y(), &target);
        input::push(&queue, SceneCommand::Click(ndc));
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the backing store in sync and report the new CSS size to the scene.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, queue: &CommandQueue) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let queue = queue.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        if let Some((width, height)) = dom::canvas_css_size(&canvas_resize) {
            input::push(&queue, SceneCommand::Resize { width, height });
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
