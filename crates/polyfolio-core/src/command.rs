//! Normalized input commands. Raw DOM events are translated into these at the
//! edge; nothing inside the scene sees an event object.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneCommand {
    Hover(usize),
    /// Every "open this section" trigger ends here, menu or navigation alike.
    Select(usize),
    Close,
    /// Pointer in NDC (x right, y up).
    PointerMove(Vec2),
    /// Click in NDC; spawns a ripple.
    Click(Vec2),
    Wheel(f32),
    TouchStart(f32),
    TouchMove(f32),
    TouchEnd,
    /// Move the menu by one item, +1 down / -1 up.
    MenuStep(i32),
    MenuActivate,
    /// Click on rendered menu item `i` (index into the tripled list).
    MenuClick(usize),
    Resize { width: f32, height: f32 },
}

/// Map a `KeyboardEvent.key` value to a command.
pub fn key_command(key: &str) -> Option<SceneCommand> {
    match key {
        "Escape" | "h" | "H" => Some(SceneCommand::Close),
        "ArrowDown" | "ArrowRight" | "j" => Some(SceneCommand::MenuStep(1)),
        "ArrowUp" | "ArrowLeft" | "k" => Some(SceneCommand::MenuStep(-1)),
        "Enter" | "l" => Some(SceneCommand::MenuActivate),
        _ => None,
    }
}

/// Convert a client-space position to NDC given the element rect.
pub fn client_to_ndc(x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        ((x - left) / width) * 2.0 - 1.0,
        -(((y - top) / height) * 2.0 - 1.0),
    )
}
