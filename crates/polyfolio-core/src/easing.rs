//! Interpolation helpers shared by the rig, the particle field and the floor.

/// Symmetric quadratic ease: slow at both ends, fastest at t = 0.5.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Framerate-independent blend factor for an exponential chase.
///
/// Always in `[0, 1]`, so `x += (target - x) * exp_factor(..)` never overshoots.
#[inline]
pub fn exp_factor(rate: f32, dt_sec: f32) -> f32 {
    (1.0 - (-rate * dt_sec.max(0.0)).exp()).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
