//! Floor grid that follows the camera, plus the static background rings.

use crate::constants::{
    FLOOR_Y, GRID_DIVISIONS, GRID_FADE_RATE, GRID_OPACITY_ACTIVE, GRID_OPACITY_IDLE, GRID_SIZE,
    GRID_STEP,
};
use crate::easing::exp_factor;
use crate::geometry::ring_loop;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    /// World offset of the line set: camera XZ snapped to the grid, y on the floor.
    pub offset: Vec3,
    pub opacity: f32,
}

/// Ground grid that follows the camera in whole-cell steps.
#[derive(Clone, Debug)]
pub struct GridFloor {
    segments: Vec<[Vec3; 2]>,
    opacity: f32,
}

impl Default for GridFloor {
    fn default() -> Self {
        Self::new()
    }
}

impl GridFloor {
    pub fn new() -> Self {
        let half = GRID_SIZE * 0.5;
        let step = GRID_SIZE / GRID_DIVISIONS as f32;
        let mut segments = Vec::with_capacity((GRID_DIVISIONS + 1) * 2);
        for i in 0..=GRID_DIVISIONS {
            let k = -half + i as f32 * step;
            segments.push([Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k)]);
            segments.push([Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half)]);
        }
        Self {
            segments,
            opacity: GRID_OPACITY_IDLE,
        }
    }

    /// Line segments in grid-local space, built once.
    pub fn segments(&self) -> &[[Vec3; 2]] {
        &self.segments
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn step(&mut self, camera_position: Vec3, section_active: bool, dt_sec: f32) -> GridTransform {
        let target = if section_active {
            GRID_OPACITY_ACTIVE
        } else {
            GRID_OPACITY_IDLE
        };
        self.opacity += (target - self.opacity) * exp_factor(GRID_FADE_RATE, dt_sec);
        GridTransform {
            offset: Vec3::new(
                snap_to_grid(camera_position.x),
                FLOOR_Y,
                snap_to_grid(camera_position.z),
            ),
            opacity: self.opacity,
        }
    }
}

#[inline]
pub fn snap_to_grid(v: f32) -> f32 {
    if v.is_finite() {
        (v / GRID_STEP).round() * GRID_STEP
    } else {
        0.0
    }
}

/// Faint line loop drawn far behind the particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundRing {
    pub radius: f32,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
    pub opacity: f32,
}

pub const RING_SEGMENTS: usize = 128;

impl BackgroundRing {
    pub fn default_set() -> [BackgroundRing; 4] {
        [
            BackgroundRing { radius: 30.0, rotation: Vec3::new(0.3, 0.0, 0.0), opacity: 0.08 },
            BackgroundRing { radius: 45.0, rotation: Vec3::new(0.8, 0.4, 0.0), opacity: 0.05 },
            BackgroundRing { radius: 55.0, rotation: Vec3::new(-0.2, 0.9, 0.3), opacity: 0.04 },
            BackgroundRing { radius: 70.0, rotation: Vec3::new(1.2, 0.2, 0.6), opacity: 0.03 },
        ]
    }

    /// Closed polyline in world space as consecutive segments.
    pub fn segments(&self) -> Vec<[Vec3; 2]> {
        let rot = glam::Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        let points: Vec<Vec3> = ring_loop(self.radius, RING_SEGMENTS)
            .into_iter()
            .map(|p| rot * p)
            .collect();
        points.windows(2).map(|w| [w[0], w[1]]).collect()
    }
}
