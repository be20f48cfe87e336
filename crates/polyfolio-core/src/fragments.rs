//! Code-glyph fragments floating on a flattened shell around the scene.

use crate::camera::Camera;
use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::TAU;

pub const FRAGMENT_GLYPHS: [&str; 25] = [
    "0x4F", "null", "//", "{}", "=> {}", "0b1010", "void", "&&", "::", "[ ]", "0xFF", "/**/", "!=",
    ">>>", "async", "...", "#!", "<=>", "||", "fn()", "$_", "%d", "<<", ">>=", "0o77",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fragment {
    pub text: &'static str,
    /// Rest position; only y moves.
    pub anchor: Vec3,
    pub speed: f32,
    pub phase: f32,
    /// Glyph height in world units.
    pub size: f32,
    pub opacity: f32,
}

impl Fragment {
    #[inline]
    pub fn bob_offset(&self, t: f32) -> f32 {
        (t * self.speed + self.phase).sin() * FRAGMENT_BOB_AMPLITUDE
    }

    #[inline]
    pub fn position_at(&self, t: f32) -> Vec3 {
        self.anchor + Vec3::Y * self.bob_offset(t)
    }
}

/// Screen placement of one fragment for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentSprite {
    pub ndc: Vec2,
    /// Perspective scale: world size to NDC height.
    pub scale: f32,
    pub visible: bool,
}

#[derive(Clone, Debug)]
pub struct FloatingFragments {
    fragments: Vec<Fragment>,
}

impl FloatingFragments {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Seeded scatter: uniform direction, radius in `[18, 48)`, shell squashed
    /// vertically and dropped toward the floor.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed ^ 0x00C0_DE00_F1A6);
        let fragments = (0..count)
            .map(|i| {
                let theta = rng.gen::<f32>() * TAU;
                let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
                let r = FRAGMENT_RADIUS_MIN + rng.gen::<f32>() * FRAGMENT_RADIUS_SPAN;
                Fragment {
                    text: FRAGMENT_GLYPHS[i % FRAGMENT_GLYPHS.len()],
                    anchor: Vec3::new(
                        r * phi.sin() * theta.cos(),
                        r * phi.sin() * theta.sin() * FRAGMENT_Y_SQUASH + FRAGMENT_Y_OFFSET,
                        r * phi.cos(),
                    ),
                    speed: FRAGMENT_SPEED_MIN + rng.gen::<f32>() * FRAGMENT_SPEED_SPAN,
                    phase: rng.gen::<f32>() * TAU,
                    size: FRAGMENT_SIZE_MIN + rng.gen::<f32>() * FRAGMENT_SIZE_SPAN,
                    opacity: FRAGMENT_OPACITY_MIN + rng.gen::<f32>() * FRAGMENT_OPACITY_SPAN,
                }
            })
            .collect();
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Project every fragment at time `t`. Fragments behind the camera or
    /// outside the frustum come back with `visible == false`.
    pub fn sprites(&self, camera: &Camera, t: f32) -> Vec<FragmentSprite> {
        let vp = camera.view_projection();
        let half_fov_tan = (camera.fovy_radians * 0.5).tan();
        self.fragments
            .iter()
            .map(|f| {
                let clip = vp * f.position_at(t).extend(1.0);
                if clip.w <= camera.znear {
                    return FragmentSprite {
                        ndc: Vec2::ZERO,
                        scale: 0.0,
                        visible: false,
                    };
                }
                let ndc = clip.truncate() / clip.w;
                let visible = ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && (0.0..=1.0).contains(&ndc.z);
                FragmentSprite {
                    ndc: ndc.truncate(),
                    scale: 1.0 / (clip.w * half_fov_tan),
                    visible,
                }
            })
            .collect()
    }
}
