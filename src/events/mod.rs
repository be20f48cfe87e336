pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_canvas_resize, wire_pointer_handlers};
pub use scroll::wire_menu_scroll;
