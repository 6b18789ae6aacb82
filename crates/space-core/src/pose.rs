use glam::Vec3;

/// Position plus Euler rotation (XYZ, radians) for a renderable node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }

    pub fn to_raw(&self) -> PoseRaw {
        PoseRaw {
            position: self.position.to_array(),
            rotation: self.rotation.to_array(),
        }
    }
}

/// Flat, GPU/JS-friendly layout: `[px, py, pz, rx, ry, rz]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PoseRaw {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

impl PoseRaw {
    pub const FLOATS: usize = 6;

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

impl From<Pose> for PoseRaw {
    fn from(pose: Pose) -> Self {
        pose.to_raw()
    }
}

/// Write a batch of poses into one contiguous float buffer.
pub fn poses_to_floats(poses: &[Pose], out: &mut Vec<f32>) {
    out.clear();
    out.reserve(poses.len() * PoseRaw::FLOATS);
    for pose in poses {
        out.extend_from_slice(pose.to_raw().as_floats());
    }
}

/// Something a pose can be applied to (a scene node, a light, a test probe).
pub trait PoseTarget {
    fn apply_pose(&mut self, pose: &Pose);
}

impl PoseTarget for Pose {
    fn apply_pose(&mut self, pose: &Pose) {
        *self = *pose;
    }
}
