use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_4;

// Reference tuning for the floating cursor and the Earth/Moon system.
// Config defaults are built from these; hosts override per instance.

// Depth (scroll-controlled Z)
pub const MAX_DEPTH: f32 = 8.0; // |targetDepth| never exceeds this
pub const SCROLL_SENSITIVITY: f32 = 0.01; // world units per wheel delta unit

// Cursor placement
pub const CURSOR_SCALE_FACTOR: f32 = 0.5; // model scale, forwarded to the host
pub const CURSOR_OFFSET: Vec2 = Vec2::new(-0.1, -1.5); // model origin is not its visual tip

// Motion response
pub const SMOOTHING: f32 = 0.08; // per-frame approach weight
pub const Y_ROTATION_SPEED: f32 = 0.01; // radians per frame
pub const TILT_FACTOR: Vec2 = Vec2::new(5.0, 1.0); // x: lateral roll, y: forward pitch
pub const MAX_TILT: f32 = FRAC_PI_4;

// Hover bob
pub const OSCILLATION_SPEED: f32 = 2.0; // rad/s
pub const OSCILLATION_AMPLITUDE: f32 = 0.1;

// Idle drift
pub const DRIFT_FACTOR: f32 = 0.97;
pub const DRIFT_THRESHOLD: f32 = 1e-4;

// Click-triggered wobble
pub const TRIGGER_DURATION_MS: u64 = 2000;
pub const TRIGGER_FREQUENCY: f32 = 10.0; // rad/s
pub const TRIGGER_AMPLITUDE: f32 = 0.35; // radians of roll

// Degenerate camera guard for the depth-scale factor
pub const MIN_CAMERA_Z: f32 = 1e-6;

// Frame timing
pub const MAX_FRAME_DELTA_SEC: f32 = 0.25; // cap after tab switches / stalls

// Earth/Moon system
pub const EARTH_ANCHOR: Vec3 = Vec3::new(13.0, 0.0, -5.0);
// Each body mesh sits this far from its group origin.
pub const BODY_MOUNT_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -10.0);
pub const EARTH_AXIAL_TILT_DEG: f32 = 23.5;
pub const EARTH_SPIN_RATE: f32 = 0.1; // rad/s
pub const MOON_SPIN_RATE: f32 = 0.05; // rad/s
pub const MOON_ORBIT_RADIUS: f32 = 8.0;
pub const MOON_ANGULAR_SPEED: f32 = 0.5; // rad/s
pub const MOON_PHASE_OFFSETS: Vec3 = Vec3::new(0.0, 1.0, 0.0); // y phase tilts the orbit

// Starfield
pub const STAR_COUNT: usize = 200;
pub const STAR_FIELD_EXTENT: f32 = 20.0; // edge of the cube, centred on origin
pub const STAR_SIZE_MIN: f32 = 0.02;
pub const STAR_SIZE_SPAN: f32 = 0.05;
pub const STAR_SEGMENTS_MIN: u32 = 6;
pub const STAR_SEGMENTS_MAX: u32 = 16;
