//! Render-time morph interpolator and shader uniform source for the particle field.

use crate::constants::{MAX_RIPPLES, MORPH_RATE, NOISE_AMPLITUDE, POINT_SIZE_PX};
use crate::easing::exp_factor;
use crate::ripple::RippleBuffer;
use glam::Vec3;

/// Dynamic uniforms consumed by the particle shader every frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub time: f32,
    pub morph_index: f32,
    pub ripple_count: f32,
    pub shape_count: f32,
    pub particle_count: f32,
    pub point_size: f32,
    pub noise_amplitude: f32,
    pub _pad: f32,
    pub ripples: [[f32; 4]; MAX_RIPPLES],
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MorphState {
    pub morph_index: f32,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    morph: MorphState,
    time: f32,
    ripples: RippleBuffer,
    shape_count: usize,
    particle_count: usize,
}

impl ParticleField {
    pub fn new(shape_count: usize, particle_count: usize) -> Self {
        Self {
            morph: MorphState::default(),
            time: 0.0,
            ripples: RippleBuffer::default(),
            shape_count: shape_count.max(1),
            particle_count,
        }
    }

    /// Highest valid morph index (K).
    #[inline]
    pub fn max_index(&self) -> usize {
        self.shape_count - 1
    }

    pub fn step(&mut self, target_section: usize, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        let max = self.max_index() as f32;
        let target = (target_section as f32).min(max);
        let m = &mut self.morph.morph_index;
        *m += (target - *m) * exp_factor(MORPH_RATE, dt);
        *m = m.clamp(0.0, max);
        self.time += dt;
        self.ripples.advance(dt);
    }

    pub fn add_ripple(&mut self, origin: Vec3) -> usize {
        let slot = self.ripples.push(origin);
        log::debug!(
            "[ripple] slot={} origin=({:.2},{:.2},{:.2}) live={}",
            slot,
            origin.x,
            origin.y,
            origin.z,
            self.ripples.live_count()
        );
        slot
    }

    pub fn morph(&self) -> MorphState {
        self.morph
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn ripples(&self) -> &RippleBuffer {
        &self.ripples
    }

    pub fn uniforms(&self) -> ParticleUniforms {
        ParticleUniforms {
            time: self.time,
            morph_index: self.morph.morph_index,
            ripple_count: self.ripples.live_count() as f32,
            shape_count: self.shape_count as f32,
            particle_count: self.particle_count as f32,
            point_size: POINT_SIZE_PX,
            noise_amplitude: NOISE_AMPLITUDE,
            _pad: 0.0,
            ripples: self.ripples.packed(),
        }
    }
}
