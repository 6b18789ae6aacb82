//! Floating cursor controller.
//!
//! Converts a normalized pointer sample plus the scroll-driven depth into a
//! smoothed pose. Position approaches its target by a fixed fraction per
//! rendered frame (not delta-scaled), so convergence speed follows the frame
//! rate. Tilt is derived from the controller's own velocity, and yaw spins by
//! a constant step per frame.

use crate::config::CursorConfig;
use crate::constants::MIN_CAMERA_Z;
use crate::error::ConfigError;
use crate::pose::{Pose, PoseTarget};
use crate::scroll::{ScrollAccumulator, ScrollHandle};
use crate::smoothing::{clamp_symmetric, lerp, wrap_angle};
use crate::trigger::{AnimationState, TriggerOutcome, TriggeredAnimation};
use glam::{Vec2, Vec3};

/// Everything the host hands over once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSample {
    /// Pointer in normalized device coordinates, each axis in \[-1, 1\].
    pub pointer: Vec2,
    /// Seconds since the scene started.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Half the visible viewport extent at the origin plane, world units.
    pub viewport_half: Vec2,
    pub camera_z: f32,
}

impl FrameSample {
    pub fn new(pointer: Vec2, elapsed: f64, delta: f32, viewport_half: Vec2, camera_z: f32) -> Self {
        Self {
            pointer,
            elapsed,
            delta,
            viewport_half,
            camera_z,
        }
    }
}

/// Perspective correction for an object at `depth` seen from `camera_z`.
///
/// Returns 0 instead of a non-finite value when the camera sits at (or
/// extremely near) the origin plane.
pub fn depth_scale_factor(camera_z: f32, depth: f32) -> f32 {
    if camera_z.abs() < MIN_CAMERA_Z {
        return 0.0;
    }
    let factor = (camera_z - depth).abs() / camera_z;
    if factor.is_finite() {
        factor
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct MotionState {
    target_position: Vec3,
    current_position: Vec3,
    velocity: Vec3,
    target_depth: f32,
    current_depth: f32,
    previous_position: Vec3,
    rotation: Vec3,
}

pub struct CursorMotionController {
    config: CursorConfig,
    state: MotionState,
    scroll: ScrollHandle,
    animation: TriggeredAnimation,
    pose: Pose,
    last_elapsed: f64,
}

impl CursorMotionController {
    pub fn new(config: CursorConfig) -> Self {
        let scroll = ScrollAccumulator::shared(config.max_depth, config.scroll_sensitivity);
        Self::with_scroll(config, scroll)
    }

    /// Validating constructor.
    pub fn try_new(config: CursorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Build around an existing scroll channel (e.g. one already wired to a
    /// wheel listener).
    pub fn with_scroll(config: CursorConfig, scroll: ScrollHandle) -> Self {
        log::debug!(
            "cursor controller created: max_depth={} smoothing={} drift=({}, {})",
            config.max_depth,
            config.smoothing,
            config.drift.factor,
            config.drift.threshold
        );
        let animation = TriggeredAnimation::new(config.trigger.duration);
        Self {
            config,
            state: MotionState::default(),
            scroll,
            animation,
            pose: Pose::IDENTITY,
            last_elapsed: 0.0,
        }
    }

    pub fn scroll_handle(&self) -> ScrollHandle {
        self.scroll.clone()
    }

    /// Forward a wheel delta. Returns the clamped target depth.
    pub fn on_wheel(&self, delta_y: f32) -> f32 {
        self.scroll.apply_wheel(delta_y)
    }

    /// Start the roll wobble at `now_sec` on the frame clock.
    pub fn trigger(&mut self, now_sec: f64) -> TriggerOutcome {
        self.animation.trigger(now_sec)
    }

    /// Trigger using the elapsed time of the most recent frame, for hosts
    /// whose click callback has no access to the frame clock.
    pub fn trigger_now(&mut self) -> TriggerOutcome {
        self.animation.trigger(self.last_elapsed)
    }

    /// Advance one frame and return the pose to render.
    pub fn update(&mut self, frame: &FrameSample) -> Pose {
        let cfg = &self.config;
        let s = &mut self.state;
        self.last_elapsed = frame.elapsed;

        s.target_depth = self.scroll.target_depth();
        s.current_depth = lerp(s.current_depth, s.target_depth, cfg.smoothing);

        let scale = depth_scale_factor(frame.camera_z, s.current_depth);
        let xy = frame.pointer * frame.viewport_half * scale + cfg.cursor_offset;
        if xy.is_finite() {
            s.target_position = Vec3::new(xy.x, xy.y, s.target_depth);
        } else {
            // Keep last good x/y; depth still follows the scroll channel.
            s.target_position.z = s.target_depth;
        }

        let mut velocity = (s.target_position - s.current_position) * cfg.smoothing;
        if velocity.length() < cfg.drift.threshold {
            velocity *= cfg.drift.factor;
        }
        s.velocity = velocity;
        s.previous_position = s.current_position;
        s.current_position += velocity;

        let animating = self.animation.tick(frame.elapsed) == AnimationState::Animating;

        let osc = cfg.vertical_oscillation;
        let bob = (frame.elapsed * osc.speed as f64).sin() as f32 * osc.amplitude;

        let pitch_target = clamp_symmetric(velocity.z * cfg.tilt_factor.y, cfg.max_tilt);
        s.rotation.x = lerp(s.rotation.x, pitch_target, cfg.tilt_smoothing);
        s.rotation.z = if animating {
            let wobble = (frame.elapsed * cfg.trigger.frequency as f64).sin() as f32;
            clamp_symmetric(wobble * cfg.trigger.amplitude, cfg.max_tilt)
        } else {
            let roll_target = clamp_symmetric(-velocity.x * cfg.tilt_factor.x, cfg.max_tilt);
            lerp(s.rotation.z, roll_target, cfg.tilt_smoothing)
        };
        s.rotation.y = wrap_angle(s.rotation.y + cfg.y_rotation_speed);

        self.pose = Pose::new(s.current_position + Vec3::Y * bob, s.rotation);
        log::trace!(
            "cursor frame t={:.3} pos={:?} vel={:?}",
            frame.elapsed,
            self.pose.position,
            velocity
        );
        self.pose
    }

    /// Update and apply to `node`. With no node attached yet the motion
    /// state is left alone; only the frame time is kept so `trigger_now`
    /// measures from the current frame.
    pub fn drive<T: PoseTarget + ?Sized>(
        &mut self,
        frame: &FrameSample,
        node: Option<&mut T>,
    ) -> Option<Pose> {
        self.last_elapsed = frame.elapsed;
        let node = node?;
        let pose = self.update(frame);
        node.apply_pose(&pose);
        Some(pose)
    }

    /// Teleport to `position` and come to rest there.
    pub fn snap_to(&mut self, position: Vec3) {
        self.scroll.set_target_depth(position.z);
        let depth = self.scroll.target_depth();
        let position = Vec3::new(position.x, position.y, depth);
        let s = &mut self.state;
        s.target_position = position;
        s.current_position = position;
        s.previous_position = position;
        s.velocity = Vec3::ZERO;
        s.target_depth = depth;
        s.current_depth = depth;
        self.pose.position = position;
    }

    /// Teardown hook: cancels a pending animation timer. Returns true if one
    /// was outstanding. Also runs on drop.
    pub fn release(&mut self) -> bool {
        let cancelled = self.animation.cancel();
        if cancelled {
            log::debug!("cursor controller released with animation in flight");
        }
        cancelled
    }

    pub fn is_settled(&self) -> bool {
        self.state.velocity.length() < self.config.drift.threshold
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    pub fn current_position(&self) -> Vec3 {
        self.state.current_position
    }

    pub fn previous_position(&self) -> Vec3 {
        self.state.previous_position
    }

    pub fn target_position(&self) -> Vec3 {
        self.state.target_position
    }

    pub fn current_depth(&self) -> f32 {
        self.state.current_depth
    }

    pub fn target_depth(&self) -> f32 {
        self.scroll.target_depth()
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation.state()
    }

    pub fn animation(&self) -> &TriggeredAnimation {
        &self.animation
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Model scale the host should apply to the cursor mesh.
    pub fn scale_factor(&self) -> f32 {
        self.config.scale_factor
    }
}

impl Default for CursorMotionController {
    fn default() -> Self {
        Self::new(CursorConfig::default())
    }
}

impl Drop for CursorMotionController {
    fn drop(&mut self) {
        self.release();
    }
}
