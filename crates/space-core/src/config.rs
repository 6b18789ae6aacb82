use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OscillationConfig {
    pub speed: f32,
    pub amplitude: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftConfig {
    /// Multiplier applied to velocity once it falls under `threshold`.
    pub factor: f32,
    pub threshold: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerConfig {
    pub duration: Duration,
    /// Roll oscillation while animating, rad/s.
    pub frequency: f32,
    pub amplitude: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    pub max_depth: f32,
    pub scroll_sensitivity: f32,
    pub scale_factor: f32,
    pub cursor_offset: Vec2,
    pub y_rotation_speed: f32,
    pub tilt_factor: Vec2,
    pub smoothing: f32,
    pub tilt_smoothing: f32,
    pub max_tilt: f32,
    pub vertical_oscillation: OscillationConfig,
    pub drift: DriftConfig,
    pub trigger: TriggerConfig,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            scroll_sensitivity: SCROLL_SENSITIVITY,
            scale_factor: CURSOR_SCALE_FACTOR,
            cursor_offset: CURSOR_OFFSET,
            y_rotation_speed: Y_ROTATION_SPEED,
            tilt_factor: TILT_FACTOR,
            smoothing: SMOOTHING,
            tilt_smoothing: SMOOTHING,
            max_tilt: MAX_TILT,
            vertical_oscillation: OscillationConfig {
                speed: OSCILLATION_SPEED,
                amplitude: OSCILLATION_AMPLITUDE,
            },
            drift: DriftConfig {
                factor: DRIFT_FACTOR,
                threshold: DRIFT_THRESHOLD,
            },
            trigger: TriggerConfig {
                duration: Duration::from_millis(TRIGGER_DURATION_MS),
                frequency: TRIGGER_FREQUENCY,
                amplitude: TRIGGER_AMPLITUDE,
            },
        }
    }
}

impl CursorConfig {
    pub fn with_max_depth(mut self, max_depth: f32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_scroll_sensitivity(mut self, sensitivity: f32) -> Self {
        self.scroll_sensitivity = sensitivity;
        self
    }

    pub fn with_cursor_offset(mut self, offset: Vec2) -> Self {
        self.cursor_offset = offset;
        self
    }

    /// Sets both the position and tilt smoothing.
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self.tilt_smoothing = smoothing;
        self
    }

    pub fn with_tilt_smoothing(mut self, smoothing: f32) -> Self {
        self.tilt_smoothing = smoothing;
        self
    }

    pub fn with_tilt(mut self, tilt_factor: Vec2, max_tilt: f32) -> Self {
        self.tilt_factor = tilt_factor;
        self.max_tilt = max_tilt;
        self
    }

    pub fn with_y_rotation_speed(mut self, speed: f32) -> Self {
        self.y_rotation_speed = speed;
        self
    }

    pub fn with_oscillation(mut self, speed: f32, amplitude: f32) -> Self {
        self.vertical_oscillation = OscillationConfig { speed, amplitude };
        self
    }

    pub fn with_drift(mut self, factor: f32, threshold: f32) -> Self {
        self.drift = DriftConfig { factor, threshold };
        self
    }

    pub fn with_trigger(mut self, duration: Duration, frequency: f32, amplitude: f32) -> Self {
        self.trigger = TriggerConfig {
            duration,
            frequency,
            amplitude,
        };
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("max_depth", self.max_depth),
            ("scroll_sensitivity", self.scroll_sensitivity),
            ("scale_factor", self.scale_factor),
            ("cursor_offset.x", self.cursor_offset.x),
            ("cursor_offset.y", self.cursor_offset.y),
            ("y_rotation_speed", self.y_rotation_speed),
            ("tilt_factor.x", self.tilt_factor.x),
            ("tilt_factor.y", self.tilt_factor.y),
            ("vertical_oscillation.speed", self.vertical_oscillation.speed),
            (
                "vertical_oscillation.amplitude",
                self.vertical_oscillation.amplitude,
            ),
            ("trigger.frequency", self.trigger.frequency),
            ("trigger.amplitude", self.trigger.amplitude),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        check_range("smoothing", self.smoothing, f32::MIN_POSITIVE, 1.0)?;
        check_range("tilt_smoothing", self.tilt_smoothing, f32::MIN_POSITIVE, 1.0)?;
        // A factor of exactly 1 would never settle, so the upper bound is open.
        check_range("drift.factor", self.drift.factor, 0.0, 1.0 - f32::EPSILON)?;
        check_range("drift.threshold", self.drift.threshold, 0.0, f32::MAX)?;
        check_range("max_depth", self.max_depth, 0.0, f32::MAX)?;
        check_range("max_tilt", self.max_tilt, 0.0, f32::MAX)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field, value });
    }
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
