use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use space_core::{
    CursorConfig, CursorMotionController, FrameClock, FrameSample, OrbitalSystem, Pose,
    PoseTarget, TriggerOutcome, MAX_TILT,
};

mod script;
use script::ScriptEvent;

const FRAME_DT: Duration = Duration::from_micros(16_667);
const CAMERA_Z: f32 = 10.0;
const FOV_Y_DEG: f32 = 60.0;
const ASPECT: f32 = 16.0 / 9.0;
const LOG_EVERY_FRAMES: u64 = 30;

/// Stands in for the renderer's node; keeps what a reviewer wants to check.
#[derive(Default)]
struct ProbeNode {
    pose: Pose,
    applied: u64,
    max_abs_tilt: f32,
}

impl PoseTarget for ProbeNode {
    fn apply_pose(&mut self, pose: &Pose) {
        self.pose = *pose;
        self.applied += 1;
        self.max_abs_tilt = self
            .max_abs_tilt
            .max(pose.rotation.x.abs())
            .max(pose.rotation.z.abs());
    }
}

struct Options {
    seconds: f64,
    realtime: bool,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut opts = Options {
        seconds: 6.0,
        realtime: false,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            opts.realtime = true;
        } else {
            opts.seconds = arg
                .parse::<f64>()
                .map_err(|e| anyhow::anyhow!("invalid duration {arg:?}: {e}"))?;
            if !(opts.seconds.is_finite() && opts.seconds > 0.0) {
                anyhow::bail!("duration must be positive, got {arg}");
            }
        }
    }
    Ok(opts)
}

/// Half extents of the visible plane at z = 0 for the reference camera.
fn viewport_half() -> Vec2 {
    let half_h = CAMERA_Z * (FOV_Y_DEG.to_radians() * 0.5).tan();
    Vec2::new(half_h * ASPECT, half_h)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = parse_args()?;

    let config = CursorConfig::default();
    let mut cursor = CursorMotionController::try_new(config)?;
    let mut system = OrbitalSystem::earth_moon(1.0);
    let moon = system
        .find("moon")
        .ok_or_else(|| anyhow::anyhow!("earth_moon system has no moon"))?;

    let mut clock = FrameClock::new();
    let mut node = ProbeNode::default();
    let mut events = Vec::new();
    let half = viewport_half();
    log::info!(
        "replaying {:.1}s at {:.0} fps (realtime={})",
        opts.seconds,
        1.0 / FRAME_DT.as_secs_f64(),
        opts.realtime
    );

    while clock.elapsed() < opts.seconds {
        let frame_start = Instant::now();
        let prev = clock.elapsed();
        let (elapsed, delta) = clock.advance(FRAME_DT);

        script::events_between(prev, elapsed, &mut events);
        for ev in &events {
            match ev {
                ScriptEvent::Wheel(dy) => {
                    let depth = cursor.on_wheel(*dy);
                    log::info!("[wheel] delta={dy} target_depth={depth:.2}");
                }
                ScriptEvent::Click => match cursor.trigger(elapsed) {
                    TriggerOutcome::Scheduled => log::info!("[click] wobble started"),
                    TriggerOutcome::AlreadyPending => log::info!("[click] wobble already running"),
                },
            }
        }

        let sample = FrameSample::new(script::pointer_at(elapsed), elapsed, delta, half, CAMERA_Z);
        cursor.drive(&sample, Some(&mut node));
        system.update(elapsed, delta);

        if clock.frame() % LOG_EVERY_FRAMES == 0 {
            let p = node.pose;
            let moon_pos = system.pose(moon).map(|m| m.position).unwrap_or_default();
            log::info!(
                "t={:5.2}s cursor=({:6.2},{:6.2},{:6.2}) tilt=({:5.2},{:5.2}) depth={:5.2} moon=({:6.2},{:6.2},{:6.2})",
                elapsed,
                p.position.x,
                p.position.y,
                p.position.z,
                p.rotation.x,
                p.rotation.z,
                cursor.current_depth(),
                moon_pos.x,
                moon_pos.y,
                moon_pos.z
            );
        }

        if opts.realtime {
            if let Some(rest) = FRAME_DT.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    log::info!(
        "done: frames={} applied={} max|tilt|={:.3} (limit {:.3}) clicks={} settled={}",
        clock.frame(),
        node.applied,
        node.max_abs_tilt,
        MAX_TILT,
        cursor.animation().trigger_count(),
        cursor.is_settled()
    );
    if cursor.release() {
        log::info!("released with wobble timer still pending");
    }
    Ok(())
}
