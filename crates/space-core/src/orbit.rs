use crate::constants::*;
use crate::smoothing::wrap_angle;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParameters {
    pub radius: f32,
    /// rad/s
    pub angular_speed: f32,
    /// Per-axis phase; a non-zero y phase lifts the orbit out of plane.
    pub phase_offsets: Vec3,
    /// Anchor of the body being orbited, in the parent frame.
    pub parent_offset: Vec3,
}

impl OrbitParameters {
    pub fn new(radius: f32, angular_speed: f32) -> Self {
        Self {
            radius,
            angular_speed,
            phase_offsets: Vec3::ZERO,
            parent_offset: Vec3::ZERO,
        }
    }

    pub fn with_phase_offsets(mut self, phase_offsets: Vec3) -> Self {
        self.phase_offsets = phase_offsets;
        self
    }

    pub fn with_parent_offset(mut self, parent_offset: Vec3) -> Self {
        self.parent_offset = parent_offset;
        self
    }

    /// The reference moon orbit around the Earth anchor.
    pub fn moon() -> Self {
        Self::new(MOON_ORBIT_RADIUS, MOON_ANGULAR_SPEED)
            .with_phase_offsets(MOON_PHASE_OFFSETS)
            .with_parent_offset(EARTH_ANCHOR)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalMotionController {
    params: OrbitParameters,
}

impl OrbitalMotionController {
    pub fn new(params: OrbitParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &OrbitParameters {
        &self.params
    }

    /// Offset from the parent anchor at `elapsed` seconds.
    pub fn local_offset(&self, elapsed: f64) -> Vec3 {
        let p = &self.params;
        let angle = elapsed * p.angular_speed as f64;
        let r = p.radius;
        Vec3::new(
            r * (angle + p.phase_offsets.x as f64).sin() as f32,
            r * (p.phase_offsets.y as f64 + angle).cos() as f32,
            r * (angle + p.phase_offsets.z as f64).cos() as f32,
        )
    }

    /// Local offset translated by the parent anchor.
    pub fn anchored(&self, elapsed: f64) -> Vec3 {
        self.params.parent_offset + self.local_offset(elapsed)
    }
}

/// Self-rotation about the body's Y axis, with a fixed axial tilt on X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxialSpin {
    /// rad/s
    pub rate: f32,
    pub axial_tilt: f32,
    angle: f32,
}

impl AxialSpin {
    pub fn new(rate: f32) -> Self {
        Self {
            rate,
            axial_tilt: 0.0,
            angle: 0.0,
        }
    }

    pub fn with_axial_tilt_deg(mut self, degrees: f32) -> Self {
        self.axial_tilt = degrees.to_radians();
        self
    }

    pub fn earth() -> Self {
        Self::new(EARTH_SPIN_RATE).with_axial_tilt_deg(EARTH_AXIAL_TILT_DEG)
    }

    pub fn moon() -> Self {
        Self::new(MOON_SPIN_RATE)
    }

    /// Advance by `delta` seconds. The angle is kept in `[0, TAU)`, which
    /// renders the same as the unbounded sum.
    pub fn advance(&mut self, delta: f32) -> f32 {
        if delta.is_finite() {
            self.angle = wrap_angle(self.angle + self.rate * delta);
        }
        self.angle
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Euler rotation for the body: tilt on X, spin on Y.
    pub fn rotation(&self) -> Vec3 {
        Vec3::new(self.axial_tilt, self.angle, 0.0)
    }
}
