use crate::core::{client_to_ndc, SceneCommand};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// DOM handlers push normalized commands here; the frame loop drains them
/// before stepping the scene.
pub type CommandQueue = Rc<RefCell<Vec<SceneCommand>>>;

pub fn command_queue() -> CommandQueue {
    Rc::new(RefCell::new(Vec::new()))
}

#[inline]
pub fn push(queue: &CommandQueue, command: SceneCommand) {
    queue.borrow_mut().push(command);
}

#[inline]
pub fn pointer_ndc(client_x: i32, client_y: i32, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        client_x as f32,
        client_y as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// First touch's client y, if any.
#[inline]
pub fn touch_y(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_y() as f32)
}
