use crate::core::{key_command, SceneCommand};
use crate::input::{self, CommandQueue};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys whose browser default (page scroll) is suppressed once mapped.
#[inline]
pub fn suppresses_default(command: &SceneCommand) -> bool {
    matches!(
        command,
        SceneCommand::MenuStep(_) | SceneCommand::MenuActivate
    )
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, queue: &CommandQueue) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(command) = key_command(&ev.key()) else {
        return;
    };
    if suppresses_default(&command) {
        ev.prevent_default();
    }
    input::push(queue, command);
}

pub fn wire_global_keydown(queue: CommandQueue) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &queue);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
