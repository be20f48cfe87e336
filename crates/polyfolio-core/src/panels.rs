//! Glowing floor tiles: one per section under its focused look-at point, plus
//! scattered decorative tiles that glitch on a deterministic schedule.

use crate::camera::SectionPoses;
use crate::constants::*;
use crate::easing::exp_factor;
use fnv::FnvHashSet;
use glam::{Vec2, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Per-tile data for the instanced floor-tile quad.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TileInstance {
    pub position: [f32; 3],
    pub opacity: f32,
    /// Local plane scale (x, y) of a unit `GRID_STEP` quad.
    pub scale: [f32; 2],
    /// 1 for section tiles, 0 for decorative ones.
    pub highlight: f32,
    pub _pad: f32,
}

/// Plane axis a section tile collapses along when its section opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlitAxis {
    X,
    Y,
}

const SLIT_AXES: [SlitAxis; 4] = [SlitAxis::Y, SlitAxis::X, SlitAxis::Y, SlitAxis::X];

#[derive(Clone, Debug)]
struct SectionTile {
    section: usize,
    position: Vec3,
    axis: SlitAxis,
    scale: Vec2,
    opacity: f32,
}

#[derive(Clone, Debug)]
struct DecorativeTile {
    position: Vec3,
    phase_sec: f32,
}

#[derive(Clone, Debug)]
pub struct SectionPanels {
    seed: u64,
    time: f32,
    sections: Vec<SectionTile>,
    decorative: Vec<DecorativeTile>,
}

/// Centre of the grid cell containing `v` (cells are `GRID_STEP` wide).
#[inline]
pub fn cell_center(v: f32) -> f32 {
    (v / GRID_STEP).floor() * GRID_STEP + GRID_STEP * 0.5
}

impl SectionPanels {
    pub fn new(poses: &SectionPoses, seed: u64) -> Self {
        let sections: Vec<SectionTile> = (1..poses.len())
            .map(|section| {
                let look = poses.focused_pose(section).look_at;
                SectionTile {
                    section,
                    position: Vec3::new(cell_center(look.x), FLOOR_Y, cell_center(look.z)),
                    axis: SLIT_AXES[(section - 1) % SLIT_AXES.len()],
                    scale: Vec2::ONE,
                    opacity: PANEL_OPACITY_IDLE,
                }
            })
            .collect();

        let mut taken: FnvHashSet<(i32, i32)> = sections
            .iter()
            .map(|t| cell_key(t.position))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut decorative = Vec::with_capacity(DECORATIVE_TILE_COUNT);
        let mut attempts = 0;
        while decorative.len() < DECORATIVE_TILE_COUNT && attempts < DECORATIVE_TILE_COUNT * 16 {
            attempts += 1;
            let cx = rng.gen_range(-DECORATIVE_TILE_SPAN..DECORATIVE_TILE_SPAN);
            let cz = rng.gen_range(-DECORATIVE_TILE_SPAN..DECORATIVE_TILE_SPAN);
            if !taken.insert((cx, cz)) {
                continue;
            }
            decorative.push(DecorativeTile {
                position: Vec3::new(
                    cx as f32 * GRID_STEP + GRID_STEP * 0.5,
                    FLOOR_Y,
                    cz as f32 * GRID_STEP + GRID_STEP * 0.5,
                ),
                phase_sec: rng.gen::<f32>() * GLITCH_PERIOD_SEC,
            });
        }

        Self {
            seed,
            time: 0.0,
            sections,
            decorative,
        }
    }

    pub fn section_tile_count(&self) -> usize {
        self.sections.len()
    }

    pub fn decorative_tile_count(&self) -> usize {
        self.decorative.len()
    }

    /// Advance tile animation. The tile of the open section collapses once the
    /// camera has reached it; every other tile pulses.
    pub fn step(&mut self, active_section: Option<usize>, camera_ready: bool, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        self.time += dt;
        let t = self.time;
        for (i, tile) in self.sections.iter_mut().enumerate() {
            let is_active = active_section == Some(tile.section);
            if is_active && camera_ready {
                let f = exp_factor(SLIT_COLLAPSE_RATE, dt);
                match tile.axis {
                    SlitAxis::X => tile.scale.x -= tile.scale.x * f,
                    SlitAxis::Y => tile.scale.y -= tile.scale.y * f,
                }
                tile.opacity -= tile.opacity * exp_factor(SLIT_FADE_RATE, dt);
            } else {
                tile.scale += (Vec2::ONE - tile.scale) * exp_factor(PANEL_RECOVER_RATE, dt);
                let (base, amp) = if is_active {
                    (PANEL_OPACITY_ACTIVE, PANEL_PULSE_ACTIVE)
                } else {
                    (PANEL_OPACITY_IDLE, PANEL_PULSE_IDLE)
                };
                tile.opacity = base + amp * (t * PANEL_PULSE_FREQ + i as f32 * PANEL_PULSE_PHASE_STEP).sin();
            }
        }
    }

    /// Whether decorative tile `index` is inside a glitch window at time `t`.
    pub fn glitching(&self, index: usize, t: f32) -> bool {
        let Some(tile) = self.decorative.get(index) else {
            return false;
        };
        let local = t + tile.phase_sec;
        let cycle = (local / GLITCH_PERIOD_SEC).floor();
        let within = local - cycle * GLITCH_PERIOD_SEC;
        within < GLITCH_WINDOW_SEC
            && unit_hash(self.seed, index as u64, cycle as i64 as u64) < GLITCH_PROBABILITY
    }

    /// Derived per-frame instances: section tiles first, then decorative ones.
    pub fn instances(&self) -> Vec<TileInstance> {
        let t = self.time;
        let mut out = Vec::with_capacity(self.sections.len() + self.decorative.len());
        out.extend(self.sections.iter().map(|tile| TileInstance {
            position: tile.position.to_array(),
            opacity: tile.opacity.max(0.0),
            scale: tile.scale.to_array(),
            highlight: 1.0,
            _pad: 0.0,
        }));
        for (i, tile) in self.decorative.iter().enumerate() {
            let (opacity, scale) = if self.glitching(i, t) {
                // alternate between a bright flash and a thin collapse
                if (t / GLITCH_WINDOW_SEC * 4.0) as i64 % 2 == 0 {
                    (GLITCH_FLASH_OPACITY, [1.0, 1.0])
                } else {
                    (GLITCH_FLASH_OPACITY * 0.5, [1.0, GLITCH_COLLAPSE_SCALE])
                }
            } else {
                let pulse = (t * PANEL_PULSE_FREQ * 0.5 + i as f32 * PANEL_PULSE_PHASE_STEP).sin();
                (DECOR_OPACITY + DECOR_PULSE * pulse, [1.0, 1.0])
            };
            out.push(TileInstance {
                position: tile.position.to_array(),
                opacity,
                scale,
                highlight: 0.0,
                _pad: 0.0,
            });
        }
        out
    }
}

fn cell_key(p: Vec3) -> (i32, i32) {
    (
        (p.x / GRID_STEP).floor() as i32,
        (p.z / GRID_STEP).floor() as i32,
    )
}

/// splitmix64 of the inputs mapped to `[0, 1)`.
fn unit_hash(seed: u64, tile: u64, cycle: u64) -> f32 {
    let mut z = seed
        ^ tile.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ cycle.wrapping_mul(0xD1B5_4A32_D192_ED03);
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 40) as f32 / (1u64 << 24) as f32
}
