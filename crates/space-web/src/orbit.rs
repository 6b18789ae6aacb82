use crate::node::JsNode;
use glam::Vec3;
use space_core::{
    poses_to_floats, AxialSpin, OrbitParameters, OrbitalMotionController, OrbitalSystem, Starfield,
    StarfieldConfig,
};
use wasm_bindgen::prelude::*;

/// Single orbit, positions only.
#[wasm_bindgen]
pub struct OrbitalMotion {
    controller: OrbitalMotionController,
}

#[wasm_bindgen]
impl OrbitalMotion {
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f32, angular_speed: f32) -> OrbitalMotion {
        Self {
            controller: OrbitalMotionController::new(OrbitParameters::new(radius, angular_speed)),
        }
    }

    /// The reference moon orbit around the Earth anchor.
    pub fn moon() -> OrbitalMotion {
        Self {
            controller: OrbitalMotionController::new(OrbitParameters::moon()),
        }
    }

    pub fn with_phase_offsets(&self, x: f32, y: f32, z: f32) -> OrbitalMotion {
        let params = self
            .controller
            .params()
            .with_phase_offsets(Vec3::new(x, y, z));
        Self {
            controller: OrbitalMotionController::new(params),
        }
    }

    pub fn with_parent_offset(&self, x: f32, y: f32, z: f32) -> OrbitalMotion {
        let params = self
            .controller
            .params()
            .with_parent_offset(Vec3::new(x, y, z));
        Self {
            controller: OrbitalMotionController::new(params),
        }
    }

    /// Anchored position `[x, y, z]` at `elapsed` seconds.
    pub fn position(&self, elapsed: f64) -> Vec<f32> {
        self.controller.anchored(elapsed).to_array().to_vec()
    }

    /// Set `node.position` for this frame. False while the node is missing.
    pub fn frame(&self, node: &JsValue, elapsed: f64) -> bool {
        match JsNode::from_js(node) {
            Some(node) => {
                let mut node = node.position_only();
                let pose = space_core::Pose::new(self.controller.anchored(elapsed), Vec3::ZERO);
                space_core::PoseTarget::apply_pose(&mut node, &pose);
                true
            }
            None => false,
        }
    }
}

/// Earth with the orbiting Moon, poses for both per frame.
#[wasm_bindgen]
pub struct EarthMoonSystem {
    system: OrbitalSystem,
    floats: Vec<f32>,
}

#[wasm_bindgen]
impl EarthMoonSystem {
    #[wasm_bindgen(constructor)]
    pub fn new(scale: f32) -> EarthMoonSystem {
        Self {
            system: OrbitalSystem::earth_moon(scale),
            floats: Vec::new(),
        }
    }

    /// Advance and return every body's pose, six floats each, in insertion
    /// order (earth, moon).
    pub fn frame(&mut self, elapsed: f64, delta: f32) -> Vec<f32> {
        let poses = self.system.update(elapsed, delta);
        poses_to_floats(poses, &mut self.floats);
        self.floats.clone()
    }

    /// Apply the current pose of `body` ("earth" or "moon") to `node`.
    pub fn apply(&self, body: &str, node: &JsValue) -> bool {
        let Some(id) = self.system.find(body) else {
            log::warn!("unknown body {body:?}");
            return false;
        };
        let mut target = JsNode::from_js(node);
        self.system.drive_body(id, target.as_mut())
    }
}

/// Spin-only helper for bodies positioned by the host.
#[wasm_bindgen]
pub struct BodySpin {
    spin: AxialSpin,
}

#[wasm_bindgen]
impl BodySpin {
    #[wasm_bindgen(constructor)]
    pub fn new(rate: f32, axial_tilt_deg: f32) -> BodySpin {
        Self {
            spin: AxialSpin::new(rate).with_axial_tilt_deg(axial_tilt_deg),
        }
    }

    /// Advance by `delta` seconds and return `[tilt, angle, 0]`.
    pub fn advance(&mut self, delta: f32) -> Vec<f32> {
        self.spin.advance(delta);
        self.spin.rotation().to_array().to_vec()
    }
}

/// Seeded star layout flattened to `[x, y, z, size]` per star.
#[wasm_bindgen]
pub fn generate_starfield(seed: u32, count: usize) -> Vec<f32> {
    let config = StarfieldConfig {
        count,
        ..StarfieldConfig::default()
    };
    Starfield::generate(&config, seed as u64).to_instance_floats()
}
