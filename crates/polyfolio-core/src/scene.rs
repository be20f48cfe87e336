//! Frame driver: owns every component and runs them in a fixed order.
//!
//! Per frame: queued commands (already applied) -> lifecycle timers -> camera
//! rig -> particle field -> grid floor and panels -> menu physics -> output.
//! Floating fragments are projected through the camera of that same frame.

use crate::camera::{closest_point_to_origin, Camera, CameraRig, RigEvent, RigInput, SectionPoses};
use crate::command::SceneCommand;
use crate::constants::{
    DEFAULT_MENU_ITEM_HEIGHT_PX, DEFAULT_MENU_VIEWPORT_HEIGHT_PX, FRAGMENT_COUNT, MAX_FRAME_DT_SEC,
};
use crate::coordinator::{LifecycleEvent, SceneCoordinator, SceneLifecycleState};
use crate::device::DeviceTier;
use crate::fragments::{FloatingFragments, FragmentSprite};
use crate::geometry::ShapeKind;
use crate::grid::{GridFloor, GridTransform};
use crate::menu::{MenuEvent, MenuItemVisual, MenuScroller};
use crate::morph::MorphTargets;
use crate::panels::{SectionPanels, TileInstance};
use crate::particles::{ParticleField, ParticleUniforms};
use glam::Vec2;
use rand::{rngs::StdRng, SeedableRng};
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub seed: u64,
    /// CSS pixel size of the canvas, if known at mount.
    pub viewport: Option<(f32, f32)>,
    /// Menu labels for sections 1..=K.
    pub section_labels: Vec<String>,
    /// Target shapes, hero first. Defaults to [`ShapeKind::default_set`].
    pub shapes: Option<Vec<ShapeKind>>,
    pub poses: SectionPoses,
    pub menu_item_height: f32,
    pub menu_viewport_height: f32,
    pub fragment_count: usize,
}

impl SceneConfig {
    pub fn new(section_labels: Vec<String>) -> Self {
        Self {
            seed: 0,
            viewport: None,
            section_labels,
            shapes: None,
            poses: SectionPoses::default_layout(),
            menu_item_height: DEFAULT_MENU_ITEM_HEIGHT_PX,
            menu_viewport_height: DEFAULT_MENU_VIEWPORT_HEIGHT_PX,
            fragment_count: FRAGMENT_COUNT,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Some((width, height));
        self
    }

    pub fn with_shapes(mut self, shapes: Vec<ShapeKind>) -> Self {
        self.shapes = Some(shapes);
        self
    }
}

/// Everything the rendering backend and the DOM layer need for one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub camera: Camera,
    pub lifecycle: SceneLifecycleState,
    pub particles: ParticleUniforms,
    pub grid: GridTransform,
    pub tiles: Vec<TileInstance>,
    pub menu_position: f32,
    pub menu_items: Vec<MenuItemVisual>,
    /// One entry per [`Scene::fragments`] entry, same order.
    pub fragments: Vec<FragmentSprite>,
    pub events: SmallVec<[LifecycleEvent; 4]>,
}

pub struct Scene {
    labels: Vec<String>,
    aspect: f32,
    tier: DeviceTier,
    pointer: Vec2,
    coordinator: SceneCoordinator,
    rig: CameraRig,
    targets: MorphTargets,
    particles: ParticleField,
    grid: GridFloor,
    panels: SectionPanels,
    fragments: FloatingFragments,
    menu: MenuScroller,
    pending: SmallVec<[LifecycleEvent; 4]>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let section_count = config.section_labels.len();
        let width = config.viewport.map(|(w, _)| w);
        let tier = DeviceTier::from_viewport_width(width);
        let shapes = config
            .shapes
            .unwrap_or_else(|| ShapeKind::default_set(section_count));
        let mut rng = StdRng::seed_from_u64(config.seed);
        let targets = MorphTargets::generate(&shapes, tier.particle_count(), &mut rng);
        let particles = ParticleField::new(targets.shape_count(), targets.particle_count());
        if !config.poses.covers(section_count) {
            log::warn!(
                "[scene] {} sections but {} camera poses; extra sections use the hero pose",
                section_count,
                config.poses.len()
            );
        }
        let panels = SectionPanels::new(&config.poses, config.seed);
        let fragments = FloatingFragments::generate(config.fragment_count, config.seed);
        let rig = CameraRig::new(config.poses, width);
        let aspect = match config.viewport {
            Some((w, h)) if w > 0.0 && h > 0.0 => w / h,
            _ => 16.0 / 9.0,
        };
        log::info!(
            "[scene] sections={} tier={:?} particles={} shapes={}",
            section_count,
            tier,
            targets.particle_count(),
            targets.shape_count()
        );
        Self {
            labels: config.section_labels,
            aspect,
            tier,
            pointer: Vec2::ZERO,
            coordinator: SceneCoordinator::new(section_count),
            rig,
            targets,
            particles,
            grid: GridFloor::new(),
            panels,
            fragments,
            menu: MenuScroller::new(
                section_count,
                config.menu_item_height,
                config.menu_viewport_height,
            ),
            pending: SmallVec::new(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn tier(&self) -> DeviceTier {
        self.tier
    }

    pub fn targets(&self) -> &MorphTargets {
        &self.targets
    }

    pub fn grid(&self) -> &GridFloor {
        &self.grid
    }

    pub fn coordinator(&self) -> &SceneCoordinator {
        &self.coordinator
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn panels(&self) -> &SectionPanels {
        &self.panels
    }

    pub fn fragments(&self) -> &FloatingFragments {
        &self.fragments
    }

    pub fn menu(&self) -> &MenuScroller {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuScroller {
        &mut self.menu
    }

    pub fn camera(&self) -> Camera {
        self.rig.camera(self.aspect)
    }

    /// Apply one input command. State changes are visible to the next frame.
    pub fn apply(&mut self, command: SceneCommand) {
        let event = match command {
            SceneCommand::Hover(section) => {
                self.coordinator.hover(section);
                None
            }
            SceneCommand::Select(section) => self.coordinator.select(section),
            SceneCommand::Close => self.coordinator.close(),
            SceneCommand::PointerMove(ndc) => {
                self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
                None
            }
            SceneCommand::Click(ndc) => {
                let (origin, dir) = self.camera().screen_ray(ndc);
                self.particles
                    .add_ripple(closest_point_to_origin(origin, dir));
                None
            }
            SceneCommand::Wheel(dy) => {
                self.menu.wheel(dy);
                None
            }
            SceneCommand::TouchStart(y) => {
                self.menu.touch_start(y);
                None
            }
            SceneCommand::TouchMove(y) => {
                self.menu.touch_move(y);
                None
            }
            SceneCommand::TouchEnd => {
                self.menu.touch_end();
                None
            }
            SceneCommand::MenuStep(direction) => {
                self.menu.step_items(direction);
                None
            }
            SceneCommand::MenuActivate => self.menu_event(self.menu.activate()),
            SceneCommand::MenuClick(item) => match self.menu.click(item) {
                Some(ev) => self.menu_event(ev),
                None => None,
            },
            SceneCommand::Resize { width, height } => {
                self.resize(width, height);
                None
            }
        };
        if let Some(ev) = event {
            self.pending.push(ev);
        }
    }

    /// Camera distance follows the new width; particle count stays as mounted.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
            self.rig.set_viewport_width(Some(width));
        } else {
            log::warn!("[scene] ignoring resize to {}x{}", width, height);
        }
    }

    pub fn frame(&mut self, dt_sec: f32) -> FrameOutput {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };
        let mut events = std::mem::take(&mut self.pending);

        events.extend(self.coordinator.advance(dt));

        let rig_input = RigInput {
            section: self.coordinator.scene_section(),
            section_active: self.coordinator.section_active(),
            pointer: self.pointer,
            epoch: self.coordinator.epoch(),
        };
        if let Some(RigEvent::Arrived { section }) = self.rig.step(rig_input, dt) {
            events.extend(self.coordinator.camera_arrived(section));
        }

        self.particles.step(self.coordinator.scene_section(), dt);

        let lifecycle = *self.coordinator.state();
        let grid = self
            .grid
            .step(self.rig.state().position, lifecycle.active_section.is_some(), dt);
        self.panels
            .step(lifecycle.active_section, lifecycle.camera_ready, dt);

        if let Some(MenuEvent::Hover(section)) = self.menu.step() {
            self.coordinator.hover(section);
        }

        let camera = self.camera();
        let fragments = self.fragments.sprites(&camera, self.particles.time());
        FrameOutput {
            camera,
            lifecycle,
            particles: self.particles.uniforms(),
            grid,
            tiles: self.panels.instances(),
            menu_position: self.menu.state().position,
            menu_items: self.menu.item_visuals(lifecycle.active_section),
            fragments,
            events,
        }
    }

    fn menu_event(&mut self, event: MenuEvent) -> Option<LifecycleEvent> {
        match event {
            MenuEvent::Select(section) => self.coordinator.select(section),
            MenuEvent::Hover(section) => {
                self.coordinator.hover(section);
                None
            }
        }
    }
}
