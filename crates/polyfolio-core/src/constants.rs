// Shared choreography tuning constants used by the core and the web frontend.

// Camera rig
pub const TRANSITION_DURATION_SEC: f32 = 1.8; // fromPose -> target blend length
pub const CAMERA_SETTLE_RATE: f32 = 3.0; // k in 1 - exp(-k * dt) once a transition completes
pub const ORBIT_SPEED_RAD_PER_SEC: f32 = 0.06; // idle orbit around +Y
pub const POINTER_SMOOTHING_RATE: f32 = 4.0; // low-pass on the parallax pointer
pub const PARALLAX_AMBIENT: f32 = 1.6; // world units at full pointer deflection
pub const PARALLAX_FOCUSED: f32 = 0.35;
pub const MOBILE_DISTANCE_SCALE: f32 = 1.8; // camera pull-back on the narrowest viewports
pub const CAMERA_FOV_Y_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Device tier
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const DESKTOP_PARTICLE_COUNT: usize = 2000;
pub const MOBILE_PARTICLE_COUNT: usize = 600;

// Particle field
pub const MORPH_RATE: f32 = 3.0; // morph index chase rate (1/sec)
pub const FIELD_RADIUS: f32 = 15.0; // radius of the base particle cloud
pub const SHAPE_RADIUS: f32 = 10.0; // radius every target shape is normalized to
pub const POINT_SIZE_PX: f32 = 3.0;
pub const NOISE_AMPLITUDE: f32 = 0.35;

// Ripples
pub const MAX_RIPPLES: usize = 8;
pub const RIPPLE_LIFETIME_SEC: f32 = 15.0;
pub const RIPPLE_UNUSED_AGE: f32 = -1.0; // sentinel age for a free slot

// Scene lifecycle
pub const REVEAL_DELAY_SEC: f32 = 0.2; // cameraReady -> modalVisible
pub const CLOSE_DURATION_SEC: f32 = 0.4; // modalClosing -> Idle

// Grid floor
pub const GRID_SIZE: f32 = 400.0;
pub const GRID_DIVISIONS: usize = 80;
pub const GRID_STEP: f32 = GRID_SIZE / GRID_DIVISIONS as f32;
pub const FLOOR_Y: f32 = -12.0;
pub const GRID_OPACITY_IDLE: f32 = 0.06;
pub const GRID_OPACITY_ACTIVE: f32 = 0.025; // dimmed while a section is open
pub const GRID_FADE_RATE: f32 = 4.0;

// Section panels
pub const SLIT_COLLAPSE_RATE: f32 = 21.4; // ~0.3 of the gap per 60 Hz frame
pub const SLIT_FADE_RATE: f32 = 17.3; // ~0.25 per 60 Hz frame
pub const PANEL_RECOVER_RATE: f32 = 7.7; // ~0.12 per 60 Hz frame
pub const PANEL_PULSE_FREQ: f32 = 1.8;
pub const PANEL_PULSE_PHASE_STEP: f32 = 1.2;
pub const PANEL_OPACITY_IDLE: f32 = 0.35;
pub const PANEL_OPACITY_ACTIVE: f32 = 0.6;
pub const PANEL_PULSE_IDLE: f32 = 0.15;
pub const PANEL_PULSE_ACTIVE: f32 = 0.2;
pub const DECORATIVE_TILE_COUNT: usize = 12;
pub const DECORATIVE_TILE_SPAN: i32 = 8; // grid cells from origin, each direction
pub const GLITCH_PERIOD_SEC: f32 = 2.4;
pub const GLITCH_WINDOW_SEC: f32 = 0.12;
pub const GLITCH_PROBABILITY: f32 = 0.35; // chance a decorative tile glitches in a cycle
pub const DECOR_OPACITY: f32 = 0.12;
pub const DECOR_PULSE: f32 = 0.05;
pub const GLITCH_FLASH_OPACITY: f32 = 0.9;
pub const GLITCH_COLLAPSE_SCALE: f32 = 0.08;

// Floating code fragments
pub const FRAGMENT_COUNT: usize = 30;
pub const FRAGMENT_RADIUS_MIN: f32 = 18.0;
pub const FRAGMENT_RADIUS_SPAN: f32 = 30.0;
pub const FRAGMENT_Y_SQUASH: f32 = 0.4; // flattens the shell toward the floor plane
pub const FRAGMENT_Y_OFFSET: f32 = -2.0;
pub const FRAGMENT_SPEED_MIN: f32 = 0.08;
pub const FRAGMENT_SPEED_SPAN: f32 = 0.15;
pub const FRAGMENT_BOB_AMPLITUDE: f32 = 1.5;
pub const FRAGMENT_SIZE_MIN: f32 = 0.5; // world units
pub const FRAGMENT_SIZE_SPAN: f32 = 0.3;
pub const FRAGMENT_OPACITY_MIN: f32 = 0.08;
pub const FRAGMENT_OPACITY_SPAN: f32 = 0.07;

// Menu scroller
pub const MENU_FRICTION: f32 = 0.93; // per-frame velocity decay
pub const MENU_SNAP_THRESHOLD: f32 = 0.4; // |vel| below this snaps to an item
pub const MENU_SNAP_LERP: f32 = 0.12;
pub const MENU_SNAP_EPSILON: f32 = 0.5; // px; closer than this lands exactly
pub const MENU_WHEEL_SCALE: f32 = 0.4;
pub const MENU_LOOP_LOW: f32 = 0.3; // fraction of one cycle
pub const MENU_LOOP_HIGH: f32 = 1.7;

// Frame driver
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // long stalls (hidden tab) advance at most this much
pub const DEFAULT_MENU_ITEM_HEIGHT_PX: f32 = 64.0;
pub const DEFAULT_MENU_VIEWPORT_HEIGHT_PX: f32 = 320.0;
