//! Scripted input standing in for a user: a slow figure-eight pointer path,
//! periodic wheel bursts and a double click.

use glam::Vec2;

pub const WHEEL_INTERVAL_SEC: f64 = 2.0;
pub const WHEEL_DELTA: f32 = 240.0;
pub const CLICK_TIMES_SEC: [f64; 2] = [3.0, 3.5];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScriptEvent {
    Wheel(f32),
    Click,
}

pub fn pointer_at(elapsed: f64) -> Vec2 {
    let t = elapsed as f32;
    Vec2::new((t * 0.7).sin() * 0.8, (t * 1.4).sin() * 0.5)
}

/// Events whose timestamps fall in `(prev, now]`.
pub fn events_between(prev: f64, now: f64, out: &mut Vec<ScriptEvent>) {
    out.clear();
    let first = (prev / WHEEL_INTERVAL_SEC).floor() as i64 + 1;
    let last = (now / WHEEL_INTERVAL_SEC).floor() as i64;
    for k in first..=last {
        // Alternate away from / toward the viewer.
        let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
        out.push(ScriptEvent::Wheel(sign * WHEEL_DELTA));
    }
    for &t in &CLICK_TIMES_SEC {
        if t > prev && t <= now {
            out.push(ScriptEvent::Click);
        }
    }
}
