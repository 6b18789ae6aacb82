// Host-side tests for the floating cursor controller.

use glam::{Vec2, Vec3};
use space_core::*;
use std::f32::consts::TAU;

const DT: f32 = 1.0 / 60.0;
const HALF: Vec2 = Vec2::new(8.0, 4.5);
const CAMERA_Z: f32 = 10.0;

fn sample(pointer: Vec2, elapsed: f64) -> FrameSample {
    FrameSample::new(pointer, elapsed, DT, HALF, CAMERA_Z)
}

fn run(cursor: &mut CursorMotionController, pointer: Vec2, frames: usize, start: f64) -> f64 {
    let mut t = start;
    for _ in 0..frames {
        t += DT as f64;
        cursor.update(&sample(pointer, t));
    }
    t
}

#[test]
fn target_follows_pointer_with_offset() {
    let mut cursor = CursorMotionController::default();
    cursor.update(&sample(Vec2::new(0.5, 0.5), 0.0));
    let target = cursor.target_position();
    // depth 0 → depth-scale factor 1
    assert!((target.x - (0.5 * 8.0 - 0.1)).abs() < 1e-6);
    assert!((target.y - (0.5 * 4.5 - 1.5)).abs() < 1e-6);
    assert_eq!(target.z, 0.0);
}

#[test]
fn distance_shrinks_geometrically_under_fixed_target() {
    let mut cursor = CursorMotionController::default();
    let pointer = Vec2::new(0.5, 0.5);
    cursor.update(&sample(pointer, 0.0));
    let mut prev = cursor.current_position().distance(cursor.target_position());
    let mut t = 0.0;
    for _ in 0..30 {
        t += DT as f64;
        cursor.update(&sample(pointer, t));
        let dist = cursor.current_position().distance(cursor.target_position());
        let ratio = dist / prev;
        assert!(
            (ratio - (1.0 - SMOOTHING)).abs() < 1e-4,
            "ratio {ratio} at t={t}"
        );
        prev = dist;
    }
}

#[test]
fn idle_drift_settles_with_strictly_falling_velocity() {
    let mut cursor = CursorMotionController::default();
    let pointer = Vec2::new(0.5, 0.5);
    let mut t = 0.0;
    cursor.update(&sample(pointer, t));
    let mut prev_speed = cursor.velocity().length();
    let mut settled_at = None;
    for frame in 1..400 {
        t += DT as f64;
        cursor.update(&sample(pointer, t));
        let speed = cursor.velocity().length();
        if prev_speed > 1e-5 {
            assert!(speed < prev_speed, "speed rose at frame {frame}: {prev_speed} -> {speed}");
        }
        if settled_at.is_none() && cursor.is_settled() {
            settled_at = Some(frame);
        }
        prev_speed = speed;
    }
    let settled_at = settled_at.expect("controller never settled");
    assert!(settled_at < 200, "settled only at frame {settled_at}");
    assert!(cursor.is_settled());
}

#[test]
fn drift_damps_sub_threshold_velocity() {
    let config = CursorConfig::default();
    let mut cursor = CursorMotionController::new(config);
    // Rest exactly at the target the pointer will produce, then nudge it.
    let pointer = Vec2::ZERO;
    let rest = Vec3::new(config.cursor_offset.x, config.cursor_offset.y, 0.0);
    cursor.snap_to(rest + Vec3::new(0.0005, 0.0, 0.0));
    cursor.update(&sample(pointer, 0.0));
    let raw = 0.0005 * config.smoothing;
    assert!(raw < config.drift.threshold);
    let expected = raw * config.drift.factor;
    assert!((cursor.velocity().length() - expected).abs() < 1e-7);
}

#[test]
fn tilt_never_exceeds_limit() {
    let mut cursor = CursorMotionController::default();
    let huge = Vec2::new(1000.0, 1000.0);
    let mut t = 0.0;
    for i in 0..600 {
        t += DT as f64;
        if i % 50 == 0 {
            cursor.on_wheel(if i % 100 == 0 { 5000.0 } else { -5000.0 });
        }
        let pointer = if i % 2 == 0 { Vec2::ONE } else { -Vec2::ONE };
        let frame = FrameSample::new(pointer, t, DT, huge, CAMERA_Z);
        let pose = cursor.update(&frame);
        assert!(pose.rotation.x.abs() <= MAX_TILT + 1e-6, "pitch {}", pose.rotation.x);
        assert!(pose.rotation.z.abs() <= MAX_TILT + 1e-6, "roll {}", pose.rotation.z);
    }
}

#[test]
fn roll_leans_against_lateral_motion() {
    let mut cursor = CursorMotionController::default();
    let pose = cursor.update(&sample(Vec2::new(1.0, 0.0), 0.0));
    // Moving toward +x rolls negative.
    assert!(cursor.velocity().x > 0.0);
    assert!(pose.rotation.z < 0.0);
}

#[test]
fn vertical_bob_is_render_only() {
    let mut cursor = CursorMotionController::default();
    let t = 0.3;
    let pose = cursor.update(&sample(Vec2::ZERO, t));
    let bob = (t * OSCILLATION_SPEED as f64).sin() as f32 * OSCILLATION_AMPLITUDE;
    let diff = pose.position.y - cursor.current_position().y;
    assert!((diff - bob).abs() < 1e-6, "diff {diff} bob {bob}");
    assert_eq!(pose.position.x, cursor.current_position().x);
}

#[test]
fn yaw_spins_per_frame_and_wraps() {
    let mut cursor = CursorMotionController::default();
    run(&mut cursor, Vec2::ZERO, 10, 0.0);
    assert!((cursor.pose().rotation.y - 10.0 * Y_ROTATION_SPEED).abs() < 1e-5);

    run(&mut cursor, Vec2::ZERO, 690, 1.0);
    let yaw = cursor.pose().rotation.y;
    assert!((0.0..TAU).contains(&yaw));
    assert!((yaw - (700.0 * Y_ROTATION_SPEED - TAU)).abs() < 1e-3, "yaw {yaw}");
}

#[test]
fn previous_position_is_recorded() {
    let mut cursor = CursorMotionController::default();
    run(&mut cursor, Vec2::new(0.2, -0.4), 5, 0.0);
    let before = cursor.current_position();
    cursor.update(&sample(Vec2::new(0.2, -0.4), 1.0));
    assert_eq!(cursor.previous_position(), before);
    let moved = cursor.current_position() - cursor.previous_position();
    assert!((moved - cursor.velocity()).length() < 1e-6);
}

#[test]
fn camera_on_origin_plane_stays_finite() {
    let mut cursor = CursorMotionController::default();
    for i in 0..10 {
        let frame = FrameSample::new(Vec2::ONE, i as f64 * 0.1, DT, HALF, 0.0);
        let pose = cursor.update(&frame);
        assert!(pose.is_finite());
    }
    let target = cursor.target_position();
    assert_eq!(Vec2::new(target.x, target.y), CURSOR_OFFSET);
}

#[test]
fn camera_at_object_depth_collapses_to_offset() {
    let mut cursor = CursorMotionController::default();
    cursor.snap_to(Vec3::new(0.0, 0.0, 5.0));
    let frame = FrameSample::new(Vec2::new(0.9, -0.9), 0.0, DT, HALF, 5.0);
    let pose = cursor.update(&frame);
    assert!(pose.is_finite());
    assert_eq!(depth_scale_factor(5.0, 5.0), 0.0);
    let target = cursor.target_position();
    assert_eq!(Vec2::new(target.x, target.y), CURSOR_OFFSET);
}

#[test]
fn depth_scale_factor_matches_perspective() {
    assert_eq!(depth_scale_factor(10.0, 0.0), 1.0);
    assert!((depth_scale_factor(10.0, -8.0) - 1.8).abs() < 1e-6);
    assert!((depth_scale_factor(10.0, 8.0) - 0.2).abs() < 1e-6);
    assert_eq!(depth_scale_factor(0.0, 3.0), 0.0);
    assert_eq!(depth_scale_factor(1e-9, 3.0), 0.0);
}

#[test]
fn missing_node_skips_frame_without_touching_state() {
    let mut cursor = CursorMotionController::default();
    run(&mut cursor, Vec2::new(0.3, 0.3), 3, 0.0);
    let pose = cursor.pose();
    let velocity = cursor.velocity();
    let position = cursor.current_position();

    let skipped = cursor.drive(&sample(Vec2::new(-1.0, 1.0), 2.0), None::<&mut Pose>);
    assert!(skipped.is_none());
    assert_eq!(cursor.pose(), pose);
    assert_eq!(cursor.velocity(), velocity);
    assert_eq!(cursor.current_position(), position);

    let mut node = Pose::IDENTITY;
    let applied = cursor.drive(&sample(Vec2::new(-1.0, 1.0), 2.0), Some(&mut node));
    assert_eq!(applied, Some(node));
    assert_ne!(node, pose);
}

#[test]
fn scroll_depth_stays_clamped_in_state() {
    let mut cursor = CursorMotionController::default();
    assert_eq!(cursor.on_wheel(1000.0), -MAX_DEPTH);
    let mut t = 0.0;
    for _ in 0..500 {
        t += DT as f64;
        cursor.update(&sample(Vec2::ZERO, t));
        assert!(cursor.current_depth() >= -MAX_DEPTH);
        assert!(cursor.current_position().z >= -MAX_DEPTH - 1e-5);
    }
    assert!((cursor.current_depth() + MAX_DEPTH).abs() < 1e-3);
}

#[test]
fn snap_to_clamps_depth_and_rests() {
    let mut cursor = CursorMotionController::default();
    cursor.snap_to(Vec3::new(1.0, 2.0, 50.0));
    assert_eq!(cursor.current_position(), Vec3::new(1.0, 2.0, MAX_DEPTH));
    assert_eq!(cursor.target_depth(), MAX_DEPTH);
    assert_eq!(cursor.current_depth(), MAX_DEPTH);
    assert_eq!(cursor.velocity(), Vec3::ZERO);
}

#[test]
fn trigger_overrides_roll_until_expiry() {
    let mut cursor = CursorMotionController::default();
    assert_eq!(cursor.trigger(1.0), TriggerOutcome::Scheduled);
    assert_eq!(cursor.animation_state(), AnimationState::Animating);

    let pose = cursor.update(&sample(Vec2::ZERO, 1.5));
    let expected = (1.5_f64 * TRIGGER_FREQUENCY as f64).sin() as f32 * TRIGGER_AMPLITUDE;
    assert!((pose.rotation.z - expected).abs() < 1e-6);

    // Second click while the timer is pending: no new timer.
    let timer_id = cursor.animation().pending().map(|t| t.id());
    assert_eq!(cursor.trigger(2.0), TriggerOutcome::AlreadyPending);
    assert_eq!(cursor.animation().pending().map(|t| t.id()), timer_id);
    assert_eq!(cursor.animation().trigger_count(), 2);

    cursor.update(&sample(Vec2::ZERO, 1.0 + 2.0));
    assert_eq!(cursor.animation_state(), AnimationState::Idle);
    assert!(cursor.animation().pending().is_none());
}

#[test]
fn trigger_now_uses_last_frame_time() {
    let mut cursor = CursorMotionController::default();
    cursor.update(&sample(Vec2::ZERO, 4.0));
    cursor.trigger_now();
    let deadline = cursor.animation().pending().map(|t| t.deadline_sec());
    assert_eq!(deadline, Some(6.0));
}

#[test]
fn release_cancels_pending_animation() {
    let mut cursor = CursorMotionController::default();
    cursor.trigger(0.0);
    assert!(cursor.release());
    assert_eq!(cursor.animation_state(), AnimationState::Idle);
    assert!(!cursor.release());

    // Roll now follows velocity again rather than the wobble.
    let pose = cursor.update(&sample(Vec2::ZERO, 0.5));
    let wobble = (0.5_f64 * TRIGGER_FREQUENCY as f64).sin() as f32 * TRIGGER_AMPLITUDE;
    assert!((pose.rotation.z - wobble).abs() > 1e-3);
}

#[test]
fn try_new_rejects_bad_config() {
    let bad = CursorConfig::default().with_smoothing(0.0);
    assert!(CursorMotionController::try_new(bad).is_err());
    assert!(CursorMotionController::try_new(CursorConfig::default()).is_ok());
}

#[test]
fn shared_scroll_handle_feeds_controller() {
    let scroll = ScrollAccumulator::shared(MAX_DEPTH, SCROLL_SENSITIVITY);
    let mut cursor = CursorMotionController::with_scroll(CursorConfig::default(), scroll.clone());
    scroll.apply_wheel(-200.0);
    cursor.update(&sample(Vec2::ZERO, 0.0));
    assert!((cursor.target_position().z - 2.0).abs() < 1e-6);
    assert!((cursor.current_depth() - 2.0 * SMOOTHING).abs() < 1e-6);
}

#[test]
fn click_before_node_mounts_still_animates_full_duration() {
    let mut cursor = CursorMotionController::default();
    let mut t = 0.0_f64;
    for _ in 0..181 {
        t += 1.0 / 60.0;
        assert!(cursor.drive(&sample(Vec2::ZERO, t), None::<&mut Pose>).is_none());
    }
    let click_at = t;
    assert_eq!(cursor.trigger_now(), TriggerOutcome::Scheduled);
    let deadline = cursor.animation().pending().map(|p| p.deadline_sec());
    assert_eq!(deadline, Some(click_at + 2.0));

    let mut node = Pose::IDENTITY;
    t += 1.0 / 60.0;
    assert!(cursor.drive(&sample(Vec2::ZERO, t), Some(&mut node)).is_some());
    assert_eq!(cursor.animation_state(), AnimationState::Animating);
}

#[test]
fn wobble_expires_on_the_frame_reaching_duration() {
    let mut cursor = CursorMotionController::default();
    let mut t = 0.0_f64;
    for _ in 0..30 {
        t += 1.0 / 60.0;
        cursor.update(&sample(Vec2::ZERO, t));
    }
    cursor.trigger_now();

    // 2000 ms at 60 fps is 120 frames.
    for frame in 1..=120 {
        t += 1.0 / 60.0;
        cursor.update(&sample(Vec2::ZERO, t));
        let expected = if frame < 120 {
            AnimationState::Animating
        } else {
            AnimationState::Idle
        };
        assert_eq!(cursor.animation_state(), expected, "frame {frame}, t={t}");
    }
}
