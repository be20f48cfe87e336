/// Web front-end constants: DOM hooks, post-processing and render tuning.
///
/// Choreography tuning (camera, morph, lifecycle, menu) lives in the core
/// crate; this file only carries what the browser edge needs.
// DOM element ids
pub const CANVAS_ID: &str = "scene-canvas";
pub const MENU_VIEWPORT_ID: &str = "menu-viewport";
pub const MENU_TRACK_ID: &str = "menu-track";
pub const NAV_ID: &str = "site-nav";
pub const MODAL_ID: &str = "section-modal";
pub const MODAL_TITLE_ID: &str = "section-modal-title";
pub const MODAL_BODY_ID: &str = "section-modal-body";
pub const MODAL_CLOSE_ID: &str = "section-modal-close";
pub const LOCALE_TOGGLE_ID: &str = "locale-toggle";
pub const HERO_NAME_ID: &str = "hero-name";
pub const HERO_TITLE_ID: &str = "hero-title";
pub const HERO_TAGLINE_ID: &str = "hero-tagline";
pub const FRAGMENTS_ID: &str = "code-fragments";

// Persisted preference key
pub const LOCALE_STORAGE_KEY: &str = "locale";

// CSS classes toggled from lifecycle state
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_CLOSING: &str = "is-closing";
pub const CLASS_ACCENT: &str = "is-accent";
pub const CLASS_ACTIVE: &str = "is-active";

// Colors (linear-ish sRGB components)
pub const CLEAR_COLOR: [f64; 3] = [0.004, 0.004, 0.004]; // #0a0a0a after sRGB decode
pub const ACCENT_COLOR: [f32; 3] = [0.0, 1.0, 0.255]; // #00ff41
pub const GRID_COLOR: [f32; 3] = [0.0, 0.55, 0.16];
pub const RING_COLOR: [f32; 3] = [0.35, 0.42, 0.38];

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.8;
pub const BLOOM_THRESHOLD: f32 = 0.2;

// Floor tile footprint in world units (one grid cell, slightly inset)
pub const TILE_SIZE: f32 = 4.6;

// Menu item layout fallback when the DOM has not been measured yet
pub const MENU_ITEM_HEIGHT_FALLBACK_PX: f32 = 64.0;
