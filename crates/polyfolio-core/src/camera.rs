//! Camera description, section poses, and the camera rig state machine.

use crate::constants::*;
use crate::easing::{ease_in_out_quad, exp_factor, lerp};
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates
    /// (x right, y up, both in `[-1, 1]`).
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn screen_ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z);
        (self.eye, rd)
    }
}

/// Point on the ray `origin + t * dir` (t >= 0) nearest to the world origin.
#[inline]
pub fn closest_point_to_origin(origin: Vec3, dir: Vec3) -> Vec3 {
    let dir = dir.try_normalize().unwrap_or(Vec3::ZERO);
    let t = (-origin.dot(dir)).max(0.0);
    origin + dir * t
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }
}

/// Static per-section camera configuration.
///
/// Index 0 is the hero/idle state; out-of-range lookups fall back to it.
#[derive(Clone, Debug)]
pub struct SectionPoses {
    pub ambient: Vec<Vec3>,
    pub focused: Vec<CameraPose>,
}

impl SectionPoses {
    /// Hero plus four sections (About, Skills, Experience, Contact).
    pub fn default_layout() -> Self {
        Self {
            ambient: vec![
                Vec3::new(0.0, 2.0, 24.0),
                Vec3::new(10.0, 0.0, 21.0),
                Vec3::new(16.0, -2.0, 16.0),
                Vec3::new(12.0, 3.0, 12.0),
                Vec3::new(0.0, 0.0, 15.0),
            ],
            focused: vec![
                CameraPose::new(Vec3::new(0.0, 2.0, 24.0), Vec3::ZERO),
                CameraPose::new(Vec3::new(-14.0, -2.0, 0.0), Vec3::new(-22.0, -8.0, -12.0)),
                CameraPose::new(Vec3::new(14.0, -2.0, 0.0), Vec3::new(22.0, -8.0, -12.0)),
                CameraPose::new(Vec3::new(-12.0, -3.0, 28.0), Vec3::new(-22.0, -8.0, 18.0)),
                CameraPose::new(Vec3::new(12.0, -3.0, 28.0), Vec3::new(22.0, -8.0, 18.0)),
            ],
        }
    }

    /// Number of addressable sections including the hero.
    pub fn len(&self) -> usize {
        self.ambient.len().min(self.focused.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when sections `0..=section_count` all have their own pose.
    pub fn covers(&self, section_count: usize) -> bool {
        section_count < self.len()
    }

    /// Out-of-range sections fall back to the hero pose.
    pub fn clamp_index(&self, section: usize) -> usize {
        if section < self.len() {
            section
        } else {
            0
        }
    }

    pub fn ambient_position(&self, section: usize) -> Vec3 {
        self.ambient
            .get(section)
            .or_else(|| self.ambient.first())
            .copied()
            .unwrap_or(Vec3::new(0.0, 2.0, 24.0))
    }

    pub fn focused_pose(&self, section: usize) -> CameraPose {
        self.focused
            .get(section)
            .or_else(|| self.focused.first())
            .copied()
            .unwrap_or(CameraPose::new(Vec3::new(0.0, 2.0, 24.0), Vec3::ZERO))
    }
}

/// Camera pull-back for narrow viewports: 1.8x at width 0, 1.0x from 768 px up.
pub fn distance_scale_for_width(viewport_width: Option<f32>) -> f32 {
    match viewport_width {
        Some(w) if w.is_finite() => lerp(
            MOBILE_DISTANCE_SCALE,
            1.0,
            (w / MOBILE_BREAKPOINT_PX).clamp(0.0, 1.0),
        ),
        _ => 1.0,
    }
}

/// Mutable camera state owned by [`CameraRig`].
#[derive(Clone, Debug)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
    pub orbit_angle: f32,
    /// 0 = just started toward a new target, 1 = arrived.
    pub transition_progress: f32,
    pub from_pose: CameraPose,
    pub smoothed_pointer: Vec2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RigInput {
    pub section: usize,
    pub section_active: bool,
    /// Pointer in NDC, `[-1, 1]` on both axes.
    pub pointer: Vec2,
    /// Bumped on every open or redirect, so a same-section reopen restarts
    /// the transition.
    pub epoch: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RigEvent {
    /// First frame the focused pose of `section` was reached.
    Arrived { section: usize },
}

pub struct CameraRig {
    poses: SectionPoses,
    distance_scale: f32,
    state: CameraState,
    transition_key: (usize, bool, u64),
    arrived_fired: bool,
}

impl CameraRig {
    pub fn new(poses: SectionPoses, viewport_width: Option<f32>) -> Self {
        let distance_scale = distance_scale_for_width(viewport_width);
        let start = poses.ambient_position(0) * distance_scale;
        let pose = CameraPose::new(start, Vec3::ZERO);
        Self {
            poses,
            distance_scale,
            state: CameraState {
                position: pose.position,
                look_at: pose.look_at,
                orbit_angle: 0.0,
                transition_progress: 1.0,
                from_pose: pose,
                smoothed_pointer: Vec2::ZERO,
            },
            transition_key: (0, false, 0),
            arrived_fired: true,
        }
    }

    pub fn set_viewport_width(&mut self, viewport_width: Option<f32>) {
        self.distance_scale = distance_scale_for_width(viewport_width);
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn poses(&self) -> &SectionPoses {
        &self.poses
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.state.position, self.state.look_at)
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.state.position,
            target: self.state.look_at,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Idle pose: section anchor scaled for the viewport, orbited about +Y,
    /// nudged by pointer parallax.
    pub fn ambient_target(&self, section: usize) -> CameraPose {
        let anchor = self.poses.ambient_position(section) * self.distance_scale;
        let orbit = Quat::from_rotation_y(self.state.orbit_angle);
        let p = self.state.smoothed_pointer;
        let parallax = Vec3::new(p.x, p.y, 0.0) * PARALLAX_AMBIENT;
        CameraPose::new(orbit * anchor + parallax, parallax * 0.2)
    }

    pub fn focused_target(&self, section: usize) -> CameraPose {
        let pose = self.poses.focused_pose(section);
        let p = self.state.smoothed_pointer;
        let parallax = Vec3::new(p.x, p.y, 0.0) * PARALLAX_FOCUSED;
        CameraPose::new(pose.position + parallax, pose.look_at)
    }

    pub fn step(&mut self, input: RigInput, dt_sec: f32) -> Option<RigEvent> {
        let dt = dt_sec.max(0.0);
        let section = self.poses.clamp_index(input.section);
        let s = &mut self.state;
        s.smoothed_pointer += (input.pointer - s.smoothed_pointer) * exp_factor(POINTER_SMOOTHING_RATE, dt);
        if !input.section_active {
            s.orbit_angle += dt * ORBIT_SPEED_RAD_PER_SEC;
        }

        let key = (section, input.section_active, input.epoch);
        if key != self.transition_key {
            self.transition_key = key;
            self.arrived_fired = false;
            let s = &mut self.state;
            s.from_pose = CameraPose::new(s.position, s.look_at);
            s.transition_progress = 0.0;
            log::debug!(
                "[camera] transition -> section={} focused={}",
                section,
                input.section_active
            );
        }

        let target = if input.section_active {
            self.focused_target(section)
        } else {
            self.ambient_target(section)
        };

        let s = &mut self.state;
        if s.transition_progress < 1.0 {
            s.transition_progress = (s.transition_progress + dt / TRANSITION_DURATION_SEC).min(1.0);
            let pose = s.from_pose.lerp(&target, ease_in_out_quad(s.transition_progress));
            s.position = pose.position;
            s.look_at = pose.look_at;
        } else {
            let f = exp_factor(CAMERA_SETTLE_RATE, dt);
            s.position += (target.position - s.position) * f;
            s.look_at += (target.look_at - s.look_at) * f;
        }

        if s.transition_progress >= 1.0 && input.section_active && !self.arrived_fired {
            self.arrived_fired = true;
            log::debug!("[camera] arrived at section {}", section);
            return Some(RigEvent::Arrived { section });
        }
        None
    }
}
