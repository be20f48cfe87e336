//! Static per-particle attributes and the per-shape target point sets.

use crate::constants::FIELD_RADIUS;
use crate::easing::smoothstep;
use crate::geometry::{ball_volume, ShapeKind};
use glam::Vec3;
use rand::Rng;

/// Per-particle vertex attributes uploaded once.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub random: f32,
    pub normal: [f32; 3],
    pub _pad: f32,
}

/// Generated once per mount; immutable afterwards.
#[derive(Clone, Debug)]
pub struct MorphTargets {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub randoms: Vec<f32>,
    /// One point set per shape, each `positions.len()` long.
    pub targets: Vec<Vec<Vec3>>,
}

impl MorphTargets {
    pub fn generate<R: Rng + ?Sized>(shapes: &[ShapeKind], count: usize, rng: &mut R) -> Self {
        let positions = ball_volume(count, FIELD_RADIUS, rng);
        let normals = positions
            .iter()
            .map(|p| p.try_normalize().unwrap_or(Vec3::Y))
            .collect();
        let randoms = (0..count).map(|_| rng.gen::<f32>()).collect();
        let targets = shapes.iter().map(|s| s.sample(count, rng)).collect();
        log::debug!(
            "[morph] generated {} particles x {} shapes",
            count,
            shapes.len()
        );
        Self {
            positions,
            normals,
            randoms,
            targets,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    pub fn shape_count(&self) -> usize {
        self.targets.len()
    }

    pub fn particle_vertices(&self) -> Vec<ParticleVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.randoms)
            .map(|((p, n), r)| ParticleVertex {
                position: p.to_array(),
                random: *r,
                normal: n.to_array(),
                _pad: 0.0,
            })
            .collect()
    }

    /// Shape-major layout: `targets[shape * particle_count + particle]`.
    pub fn packed_targets(&self) -> Vec<[f32; 4]> {
        self.targets
            .iter()
            .flat_map(|shape| shape.iter().map(|p| [p.x, p.y, p.z, 1.0]))
            .collect()
    }

    /// Reference of the shader-side blend between the two shapes bracketing
    /// `morph_index`.
    pub fn blended_position(&self, particle: usize, morph_index: f32) -> Vec3 {
        let n = self.shape_count();
        if n == 0 || particle >= self.particle_count() {
            return Vec3::ZERO;
        }
        let m = morph_index.clamp(0.0, (n - 1) as f32);
        let lo = m.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        let f = smoothstep(m - lo as f32);
        self.targets[lo][particle].lerp(self.targets[hi][particle], f)
    }
}
