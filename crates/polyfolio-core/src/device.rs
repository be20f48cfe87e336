use crate::constants::{DESKTOP_PARTICLE_COUNT, MOBILE_BREAKPOINT_PX, MOBILE_PARTICLE_COUNT};

/// Performance tier, decided once at mount from the viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceTier {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceTier {
    /// No viewport (or a nonsensical width) counts as desktop.
    pub fn from_viewport_width(width: Option<f32>) -> Self {
        match width {
            Some(w) if w.is_finite() && w > 0.0 && w < MOBILE_BREAKPOINT_PX => DeviceTier::Mobile,
            _ => DeviceTier::Desktop,
        }
    }

    pub fn particle_count(self) -> usize {
        match self {
            DeviceTier::Desktop => DESKTOP_PARTICLE_COUNT,
            DeviceTier::Mobile => MOBILE_PARTICLE_COUNT,
        }
    }
}
