pub mod camera;
pub mod command;
pub mod constants;
pub mod content;
pub mod coordinator;
pub mod device;
pub mod easing;
pub mod error;
pub mod fragments;
pub mod geometry;
pub mod grid;
pub mod menu;
pub mod morph;
pub mod panels;
pub mod particles;
pub mod ripple;
pub mod scene;
pub mod timer;

pub use camera::*;
pub use command::*;
pub use content::*;
pub use coordinator::*;
pub use device::*;
pub use error::*;
pub use fragments::*;
pub use grid::*;
pub use menu::*;
pub use morph::*;
pub use panels::*;
pub use particles::*;
pub use ripple::*;
pub use scene::*;
pub use timer::*;
