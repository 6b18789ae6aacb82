use crate::constants::{BODY_MOUNT_OFFSET, EARTH_ANCHOR};
use crate::error::SceneError;
use crate::orbit::{AxialSpin, OrbitParameters, OrbitalMotionController};
use crate::pose::{Pose, PoseTarget};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

#[derive(Clone, Debug)]
pub struct BodySpec {
    pub name: String,
    pub parent: Option<BodyId>,
    /// Fixed offset inside the parent frame.
    pub anchor: Vec3,
    /// The orbit's own `parent_offset` is added too; leave it zero when a
    /// parent body already supplies the anchor.
    pub orbit: Option<OrbitParameters>,
    pub spin: AxialSpin,
}

impl BodySpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            anchor: Vec3::ZERO,
            orbit: None,
            spin: AxialSpin::new(0.0),
        }
    }

    pub fn parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn anchor(mut self, anchor: Vec3) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn orbit(mut self, orbit: OrbitParameters) -> Self {
        self.orbit = Some(orbit);
        self
    }

    pub fn spin(mut self, spin: AxialSpin) -> Self {
        self.spin = spin;
        self
    }
}

#[derive(Clone, Debug)]
struct Body {
    name: String,
    parent: Option<BodyId>,
    anchor: Vec3,
    orbit: Option<OrbitalMotionController>,
    spin: AxialSpin,
}

/// Translation-only body hierarchy. A body can only name an already-added
/// parent, so one forward pass resolves every world position.
#[derive(Clone, Debug)]
pub struct OrbitalSystem {
    bodies: Vec<Body>,
    world: Vec<Vec3>,
    poses: Vec<Pose>,
    scale: f32,
}

impl Default for OrbitalSystem {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl OrbitalSystem {
    pub fn new(scale: f32) -> Self {
        Self {
            bodies: Vec::new(),
            world: Vec::new(),
            poses: Vec::new(),
            scale,
        }
    }

    /// Earth and Moon as siblings under the Earth group anchor. Both meshes
    /// are mounted at [`BODY_MOUNT_OFFSET`]; the Moon's orbit pivots on the
    /// group anchor itself.
    pub fn earth_moon(scale: f32) -> Self {
        let mut system = Self::new(scale);
        system.push(
            BodySpec::new("earth")
                .anchor(EARTH_ANCHOR + BODY_MOUNT_OFFSET)
                .spin(AxialSpin::earth()),
        );
        system.push(
            BodySpec::new("moon")
                .anchor(BODY_MOUNT_OFFSET)
                .orbit(OrbitParameters::moon())
                .spin(AxialSpin::moon()),
        );
        system
    }

    pub fn add_body(&mut self, spec: BodySpec) -> Result<BodyId, SceneError> {
        if let Some(parent) = spec.parent {
            if parent.0 >= self.bodies.len() {
                return Err(SceneError::UnknownParent {
                    child: spec.name,
                    parent: parent.0,
                });
            }
        }
        Ok(self.push(spec))
    }

    fn push(&mut self, spec: BodySpec) -> BodyId {
        let id = BodyId(self.bodies.len());
        log::debug!("orbital body {:?} added as {:?}", spec.name, id);
        self.bodies.push(Body {
            name: spec.name,
            parent: spec.parent,
            anchor: spec.anchor,
            orbit: spec.orbit.map(OrbitalMotionController::new),
            spin: spec.spin,
        });
        self.world.push(Vec3::ZERO);
        self.poses.push(Pose::IDENTITY);
        id
    }

    /// Recompute every body's pose. Positions depend on `elapsed` only;
    /// spins advance by `delta`.
    pub fn update(&mut self, elapsed: f64, delta: f32) -> &[Pose] {
        for i in 0..self.bodies.len() {
            let origin = match self.bodies[i].parent {
                Some(BodyId(p)) => self.world[p],
                None => Vec3::ZERO,
            };
            let body = &mut self.bodies[i];
            let orbital = body
                .orbit
                .as_ref()
                .map_or(Vec3::ZERO, |orbit| orbit.anchored(elapsed));
            let world = origin + body.anchor + orbital;
            body.spin.advance(delta);
            self.world[i] = world;
            self.poses[i] = Pose::new(world * self.scale, body.spin.rotation());
        }
        &self.poses
    }

    pub fn drive_body<T: PoseTarget + ?Sized>(&self, id: BodyId, node: Option<&mut T>) -> bool {
        match (self.poses.get(id.0), node) {
            (Some(pose), Some(node)) => {
                node.apply_pose(pose);
                true
            }
            _ => false,
        }
    }

    pub fn pose(&self, id: BodyId) -> Option<Pose> {
        self.poses.get(id.0).copied()
    }

    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().position(|b| b.name == name).map(BodyId)
    }

    pub fn name(&self, id: BodyId) -> Option<&str> {
        self.bodies.get(id.0).map(|b| b.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}
