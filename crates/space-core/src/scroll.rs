use crate::smoothing::clamp_symmetric;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Target depth shared between wheel callbacks and the frame loop, stored as
/// f32 bits. Values are clamped before they are published.
#[derive(Debug)]
pub struct ScrollAccumulator {
    bits: AtomicU32,
    max_depth: f32,
    sensitivity: f32,
}

/// Shared handle given to the input side.
pub type ScrollHandle = Arc<ScrollAccumulator>;

impl ScrollAccumulator {
    pub fn new(max_depth: f32, sensitivity: f32) -> Self {
        Self {
            bits: AtomicU32::new(0.0_f32.to_bits()),
            max_depth: max_depth.abs(),
            sensitivity,
        }
    }

    pub fn shared(max_depth: f32, sensitivity: f32) -> ScrollHandle {
        Arc::new(Self::new(max_depth, sensitivity))
    }

    /// Apply a wheel delta (positive = scrolled down = away from the viewer).
    /// Returns the clamped target depth after the update.
    pub fn apply_wheel(&self, delta_y: f32) -> f32 {
        if !delta_y.is_finite() {
            log::warn!("ignoring non-finite wheel delta {delta_y}");
            return self.target_depth();
        }
        let step = -delta_y * self.sensitivity;
        let max = self.max_depth;
        let prev = self
            .bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
                let next = clamp_symmetric(f32::from_bits(bits) + step, max);
                Some(next.to_bits())
            })
            .unwrap_or_else(|bits| bits);
        clamp_symmetric(f32::from_bits(prev) + step, max)
    }

    /// Replace the target outright (clamped).
    pub fn set_target_depth(&self, depth: f32) {
        let depth = if depth.is_finite() { depth } else { 0.0 };
        let clamped = clamp_symmetric(depth, self.max_depth);
        self.bits.store(clamped.to_bits(), Ordering::Release);
    }

    pub fn target_depth(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub fn max_depth(&self) -> f32 {
        self.max_depth
    }
}
