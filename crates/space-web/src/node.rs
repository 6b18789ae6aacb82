use glam::Vec3;
use js_sys::{Function, Reflect};
use space_core::{Pose, PoseTarget};
use wasm_bindgen::{JsCast, JsValue};

/// A three.js-style object exposing `position.set(x, y, z)` and
/// `rotation.set(x, y, z)`.
pub struct JsNode {
    inner: JsValue,
    apply_rotation: bool,
}

impl JsNode {
    /// `None` for `null`/`undefined`, i.e. the host has not mounted the node yet.
    pub fn from_js(value: &JsValue) -> Option<Self> {
        if value.is_null() || value.is_undefined() {
            return None;
        }
        Some(Self {
            inner: value.clone(),
            apply_rotation: true,
        })
    }

    pub fn position_only(mut self) -> Self {
        self.apply_rotation = false;
        self
    }
}

impl PoseTarget for JsNode {
    fn apply_pose(&mut self, pose: &Pose) {
        let mut result = set_vec3(&self.inner, "position", pose.position);
        if self.apply_rotation && result.is_ok() {
            result = set_vec3(&self.inner, "rotation", pose.rotation);
        }
        if let Err(e) = result {
            log::warn!("pose not applied: {e}");
        }
    }
}

fn set_vec3(node: &JsValue, key: &str, v: Vec3) -> anyhow::Result<()> {
    let target = Reflect::get(node, &JsValue::from_str(key))
        .map_err(|e| anyhow::anyhow!("reading {key}: {:?}", e))?;
    let set = Reflect::get(&target, &JsValue::from_str("set"))
        .map_err(|e| anyhow::anyhow!("reading {key}.set: {:?}", e))?
        .dyn_into::<Function>()
        .map_err(|_| anyhow::anyhow!("{key}.set is not a function"))?;
    set.call3(
        &target,
        &JsValue::from(v.x),
        &JsValue::from(v.y),
        &JsValue::from(v.z),
    )
    .map_err(|e| anyhow::anyhow!("calling {key}.set: {:?}", e))?;
    Ok(())
}
