use glam::Vec3;

/// Move `current` toward `target` by `factor` of the remaining distance.
#[inline]
pub fn lerp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Component-wise [`lerp`] for vectors.
#[inline]
pub fn lerp_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

/// Clamp without panicking on inverted bounds (`f32::clamp` asserts `lo <= hi`).
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

/// Clamp into `[-limit, limit]`.
#[inline]
pub fn clamp_symmetric(value: f32, limit: f32) -> f32 {
    clamp(value, -limit, limit)
}

/// Wrap an angle into `[0, TAU)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}
