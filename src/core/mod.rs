pub use polyfolio_core::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static FLOOR_WGSL: &str = include_str!("../../shaders/floor.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
