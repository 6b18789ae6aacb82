use crate::dom;
use crate::node::JsNode;
use glam::Vec2;
use space_core::{CursorConfig, CursorMotionController, FrameSample, PoseRaw, TriggerOutcome};
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Overrides for the cursor controller; unset fields keep reference values.
#[wasm_bindgen]
#[derive(Clone, Copy, Default)]
pub struct CursorOptions {
    config: CursorConfig,
}

#[wasm_bindgen]
impl CursorOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CursorOptions {
        Self::default()
    }

    pub fn set_max_depth(&mut self, value: f32) {
        self.config.max_depth = value;
    }

    pub fn set_scroll_sensitivity(&mut self, value: f32) {
        self.config.scroll_sensitivity = value;
    }

    pub fn set_scale_factor(&mut self, value: f32) {
        self.config.scale_factor = value;
    }

    pub fn set_cursor_offset(&mut self, x: f32, y: f32) {
        self.config.cursor_offset = Vec2::new(x, y);
    }

    pub fn set_y_rotation_speed(&mut self, value: f32) {
        self.config.y_rotation_speed = value;
    }

    pub fn set_tilt_factor(&mut self, x: f32, y: f32) {
        self.config.tilt_factor = Vec2::new(x, y);
    }

    pub fn set_smoothing(&mut self, value: f32) {
        self.config = self.config.with_smoothing(value);
    }

    pub fn set_tilt_smoothing(&mut self, value: f32) {
        self.config.tilt_smoothing = value;
    }

    pub fn set_max_tilt(&mut self, value: f32) {
        self.config.max_tilt = value;
    }

    pub fn set_vertical_oscillation(&mut self, speed: f32, amplitude: f32) {
        self.config = self.config.with_oscillation(speed, amplitude);
    }

    pub fn set_drift(&mut self, factor: f32, threshold: f32) {
        self.config = self.config.with_drift(factor, threshold);
    }

    pub fn set_trigger(&mut self, duration_ms: u32, frequency: f32, amplitude: f32) {
        self.config = self.config.with_trigger(
            Duration::from_millis(duration_ms as u64),
            frequency,
            amplitude,
        );
    }
}

/// One floating cursor. Construct on mount; `free()` (or `release()`) on
/// unmount cancels a pending click animation.
#[wasm_bindgen]
pub struct CursorMotion {
    controller: CursorMotionController,
    cursor_hidden: bool,
}

#[wasm_bindgen]
impl CursorMotion {
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<CursorOptions>) -> Result<CursorMotion, JsValue> {
        let config = options.map(|o| o.config).unwrap_or_default();
        let controller = CursorMotionController::try_new(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            controller,
            cursor_hidden: false,
        })
    }

    /// Wheel listener entry point. Returns the clamped target depth.
    pub fn on_wheel(&self, delta_y: f32) -> f32 {
        self.controller.on_wheel(delta_y)
    }

    /// Click/tap entry point. Returns true if a new expiry timer was armed.
    pub fn trigger(&mut self) -> bool {
        self.controller.trigger_now() == TriggerOutcome::Scheduled
    }

    /// Per-frame update. Returns false (and changes nothing) while `node` is
    /// still null/undefined.
    #[allow(clippy::too_many_arguments)]
    pub fn frame(
        &mut self,
        node: &JsValue,
        pointer_x: f32,
        pointer_y: f32,
        elapsed: f64,
        delta: f32,
        viewport_half_width: f32,
        viewport_half_height: f32,
        camera_z: f32,
    ) -> bool {
        let sample = FrameSample::new(
            Vec2::new(pointer_x, pointer_y),
            elapsed,
            delta,
            Vec2::new(viewport_half_width, viewport_half_height),
            camera_z,
        );
        let mut target = JsNode::from_js(node);
        let applied = self.controller.drive(&sample, target.as_mut()).is_some();
        if applied && !self.cursor_hidden {
            match dom::set_system_cursor_hidden(true) {
                Ok(()) => self.cursor_hidden = true,
                Err(e) => log::warn!("could not hide system cursor: {e}"),
            }
        }
        applied
    }

    /// Latest pose as `[px, py, pz, rx, ry, rz]`.
    pub fn pose(&self) -> Vec<f32> {
        PoseRaw::from(self.controller.pose()).as_floats().to_vec()
    }

    pub fn snap_to(&mut self, x: f32, y: f32, z: f32) {
        self.controller.snap_to(glam::Vec3::new(x, y, z));
    }

    pub fn target_depth(&self) -> f32 {
        self.controller.target_depth()
    }

    pub fn scale_factor(&self) -> f32 {
        self.controller.scale_factor()
    }

    pub fn is_animating(&self) -> bool {
        self.controller.animation().is_animating()
    }

    pub fn is_settled(&self) -> bool {
        self.controller.is_settled()
    }

    /// Explicit unmount hook; dropping via `free()` does the same.
    pub fn release(&mut self) {
        self.controller.release();
        if self.cursor_hidden {
            if let Err(e) = dom::set_system_cursor_hidden(false) {
                log::warn!("could not restore system cursor: {e}");
            }
            self.cursor_hidden = false;
        }
    }
}

impl Drop for CursorMotion {
    fn drop(&mut self) {
        self.release();
    }
}
