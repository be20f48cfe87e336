use crate::constants::{MAX_RIPPLES, RIPPLE_LIFETIME_SEC, RIPPLE_UNUSED_AGE};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleEvent {
    pub origin: Vec3,
    /// Seconds since the click; `RIPPLE_UNUSED_AGE` marks a free slot.
    pub age: f32,
}

impl RippleEvent {
    pub const UNUSED: RippleEvent = RippleEvent {
        origin: Vec3::ZERO,
        age: RIPPLE_UNUSED_AGE,
    };

    #[inline]
    pub fn is_live(&self) -> bool {
        self.age >= 0.0
    }
}

/// Fixed-capacity ring of click ripples.
///
/// A new ripple takes the first free slot; when every slot is live the one with
/// the greatest age is overwritten.
#[derive(Clone, Debug)]
pub struct RippleBuffer {
    slots: [RippleEvent; MAX_RIPPLES],
}

impl Default for RippleBuffer {
    fn default() -> Self {
        Self {
            slots: [RippleEvent::UNUSED; MAX_RIPPLES],
        }
    }
}

impl RippleBuffer {
    /// Returns the slot index that was written.
    pub fn push(&mut self, origin: Vec3) -> usize {
        let slot = match self.slots.iter().position(|r| !r.is_live()) {
            Some(free) => free,
            None => {
                let mut oldest = 0;
                for (i, r) in self.slots.iter().enumerate() {
                    if r.age > self.slots[oldest].age {
                        oldest = i;
                    }
                }
                oldest
            }
        };
        self.slots[slot] = RippleEvent { origin, age: 0.0 };
        slot
    }

    /// Age every live ripple and free the ones past their lifetime.
    pub fn advance(&mut self, dt_sec: f32) {
        for r in self.slots.iter_mut().filter(|r| r.is_live()) {
            r.age += dt_sec.max(0.0);
            if r.age > RIPPLE_LIFETIME_SEC {
                *r = RippleEvent::UNUSED;
            }
        }
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|r| r.is_live()).count()
    }

    pub fn slots(&self) -> &[RippleEvent; MAX_RIPPLES] {
        &self.slots
    }

    /// xyz = origin, w = age (negative when unused).
    pub fn packed(&self) -> [[f32; 4]; MAX_RIPPLES] {
        self.slots
            .map(|r| [r.origin.x, r.origin.y, r.origin.z, r.age])
    }
}
