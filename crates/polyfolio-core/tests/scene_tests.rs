// End-to-end frame-driver scenarios: commands in, per-frame outputs out.

use glam::{Vec2, Vec3};
use polyfolio_core::constants::{MAX_RIPPLES, TRANSITION_DURATION_SEC};
use polyfolio_core::*;

const DT: f32 = 1.0 / 60.0;

fn labels() -> Vec<String> {
    ["About", "Skills", "Experience", "Contact"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn scene() -> Scene {
    Scene::new(SceneConfig::new(labels()).with_seed(7).with_viewport(1280.0, 720.0))
}

/// Run frames until `pred` matches an emitted event; returns elapsed seconds.
fn run_until(scene: &mut Scene, max_frames: usize, pred: impl Fn(&LifecycleEvent) -> bool) -> Option<f32> {
    for frame in 0..max_frames {
        let out = scene.frame(DT);
        if out.events.iter().any(&pred) {
            return Some((frame + 1) as f32 * DT);
        }
    }
    None
}

fn open(scene: &mut Scene, section: usize) {
    scene.apply(SceneCommand::Select(section));
    run_until(scene, 400, |e| *e == LifecycleEvent::Revealed(section)).expect("section never opened");
    assert_eq!(scene.coordinator().phase(), LifecyclePhase::Open);
}

#[test]
fn mount_picks_tier_and_generates_targets() {
    let s = scene();
    assert_eq!(s.tier(), DeviceTier::Desktop);
    assert_eq!(s.targets().particle_count(), 2000);
    assert_eq!(s.targets().shape_count(), 5);

    let phone = Scene::new(SceneConfig::new(labels()).with_viewport(390.0, 844.0));
    assert_eq!(phone.tier(), DeviceTier::Mobile);
    assert_eq!(phone.targets().particle_count(), 600);

    let headless = Scene::new(SceneConfig::new(labels()));
    assert_eq!(headless.tier(), DeviceTier::Desktop);
}

#[test]
fn select_from_idle_opens_after_arrival_and_reveal_delay() {
    let mut s = scene();
    s.frame(DT);
    let start = s.rig().pose();
    s.apply(SceneCommand::Select(2));
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Opening);

    let first = s.frame(DT);
    assert_eq!(first.events.as_slice(), &[LifecycleEvent::Opening(2)]);
    assert_eq!(s.rig().state().from_pose, start);

    let arrived = run_until(&mut s, 300, |e| *e == LifecycleEvent::CameraReady(2)).expect("camera never arrived");
    let elapsed = arrived + DT;
    assert!(
        (elapsed - TRANSITION_DURATION_SEC).abs() <= 2.0 * DT,
        "arrived after {}s",
        elapsed
    );
    assert_eq!(s.coordinator().phase(), LifecyclePhase::AwaitingReveal);
    let target = s.rig().focused_target(2);
    assert!(s.rig().state().position.distance(target.position) < 1e-3);

    let reveal = run_until(&mut s, 60, |e| *e == LifecycleEvent::Revealed(2)).expect("never revealed");
    assert!((reveal - 0.2).abs() <= 1.5 * DT, "revealed {}s after arrival", reveal);
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Open);

    // arrival is not re-reported while parked on the section
    assert_eq!(run_until(&mut s, 240, |e| matches!(e, LifecycleEvent::CameraReady(_))), None);
}

#[test]
fn selecting_another_section_while_open_redirects() {
    let mut s = scene();
    open(&mut s, 2);
    let parked = s.rig().pose();
    s.apply(SceneCommand::Select(3));
    assert_eq!(s.coordinator().pending_timers(), 0);
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Opening);

    let out = s.frame(DT);
    assert_eq!(
        out.events.as_slice(),
        &[LifecycleEvent::Redirected { from: 2, to: 3 }]
    );
    assert_eq!(s.rig().state().from_pose, parked);
    assert!(s.rig().state().transition_progress < 0.02);

    let mut saw_close = false;
    for _ in 0..300 {
        let out = s.frame(DT);
        saw_close |= out
            .events
            .iter()
            .any(|e| matches!(e, LifecycleEvent::Closing(_) | LifecycleEvent::Closed(_)));
    }
    assert!(!saw_close, "section 2 must not play a close animation");
    assert_eq!(s.coordinator().state().active_section, Some(3));
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Open);
    let target = s.rig().focused_target(3);
    assert!(s.rig().state().position.distance(target.position) < 1e-2);
}

#[test]
fn cancel_and_reselect_in_one_batch_still_reveals() {
    let mut s = scene();
    s.apply(SceneCommand::Select(2));
    run_until(&mut s, 300, |e| *e == LifecycleEvent::CameraReady(2)).expect("camera never arrived");
    assert_eq!(s.coordinator().phase(), LifecyclePhase::AwaitingReveal);

    s.apply(SceneCommand::Close);
    s.apply(SceneCommand::Select(2));
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Opening);

    run_until(&mut s, 600, |e| *e == LifecycleEvent::Revealed(2)).expect("reopened section never revealed");
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Open);
}

#[test]
fn redirect_and_back_in_one_batch_still_reveals() {
    let mut s = scene();
    open(&mut s, 2);
    s.apply(SceneCommand::Select(3));
    s.apply(SceneCommand::Select(2));
    assert_eq!(s.coordinator().state().active_section, Some(2));
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Opening);

    run_until(&mut s, 600, |e| *e == LifecycleEvent::Revealed(2)).expect("section 2 never revealed again");
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Open);
}

#[test]
fn close_while_open_returns_to_idle_after_close_duration() {
    let mut s = scene();
    open(&mut s, 1);
    s.apply(SceneCommand::Close);
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Closing);
    for _ in 0..3 {
        let out = s.frame(0.1);
        assert_eq!(out.lifecycle.phase(), LifecyclePhase::Closing);
    }
    let out = s.frame(0.1);
    assert_eq!(out.lifecycle.phase(), LifecyclePhase::Idle);
    assert_eq!(out.lifecycle.active_section, None);
    assert!(!out.lifecycle.camera_ready);
    assert!(!out.lifecycle.modal_visible);
    assert!(out.events.contains(&LifecycleEvent::Closed(1)));
}

#[test]
fn nine_rapid_clicks_keep_eight_ripples() {
    let mut s = scene();
    s.frame(DT);
    for i in 0..9 {
        s.apply(SceneCommand::Click(Vec2::new(i as f32 * 0.1 - 0.4, 0.1)));
        s.frame(DT);
    }
    let ripples = s.particles().ripples();
    assert_eq!(ripples.live_count(), MAX_RIPPLES);
    // slot 0 held the first click and now holds the ninth, the youngest
    let youngest = ripples
        .slots()
        .iter()
        .map(|r| r.age)
        .fold(f32::INFINITY, f32::min);
    assert_eq!(ripples.slots()[0].age, youngest);
    let out = s.frame(DT);
    assert_eq!(out.particles.ripple_count, MAX_RIPPLES as f32);
}

#[test]
fn click_ripple_lands_near_the_scene_origin() {
    let mut s = scene();
    s.frame(DT);
    s.apply(SceneCommand::Click(Vec2::ZERO));
    let origin = s.particles().ripples().slots()[0].origin;
    assert!(origin.length() < 3.0, "ripple at {:?}", origin);
}

#[test]
fn menu_input_drives_hover_and_select() {
    let mut s = scene();
    s.frame(DT);
    assert_eq!(s.coordinator().state().hovered_section, 1);
    s.apply(SceneCommand::MenuStep(1));
    for _ in 0..200 {
        s.frame(DT);
    }
    assert_eq!(s.coordinator().state().hovered_section, 2);
    assert_eq!(s.coordinator().scene_section(), 2);

    s.apply(SceneCommand::MenuActivate);
    assert_eq!(s.coordinator().state().active_section, Some(2));

    let center = s.menu().state().center_index;
    s.apply(SceneCommand::MenuClick(center));
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Closing);
}

#[test]
fn keyboard_escape_closes_through_the_same_path() {
    let mut s = scene();
    open(&mut s, 4);
    let cmd = key_command("Escape").unwrap();
    s.apply(cmd);
    assert_eq!(s.coordinator().phase(), LifecyclePhase::Closing);
}

#[test]
fn morph_follows_scene_section() {
    let mut s = scene();
    s.apply(SceneCommand::Select(3));
    for _ in 0..300 {
        let out = s.frame(DT);
        assert!((0.0..=4.0).contains(&out.particles.morph_index));
    }
    assert!((s.particles().morph().morph_index - 3.0).abs() < 1e-2);
}

#[test]
fn grid_dims_while_a_section_is_open() {
    let mut s = scene();
    let idle = s.frame(DT).grid.opacity;
    open(&mut s, 1);
    let out = s.frame(DT);
    assert!(out.grid.opacity < idle);
    assert_eq!(out.grid.offset.y, constants::FLOOR_Y);
}

#[test]
fn resize_changes_camera_distance_not_particle_count() {
    let mut s = scene();
    for _ in 0..300 {
        s.frame(DT);
    }
    let wide = s.rig().state().position.length();
    s.apply(SceneCommand::Resize {
        width: 360.0,
        height: 740.0,
    });
    for _ in 0..300 {
        s.frame(DT);
    }
    assert!(s.rig().state().position.length() > wide * 1.3);
    assert_eq!(s.targets().particle_count(), 2000);
    assert!((s.camera().aspect - 360.0 / 740.0).abs() < 1e-6);
}

#[test]
fn out_of_range_commands_are_absorbed() {
    let mut s = scene();
    s.apply(SceneCommand::Select(9));
    s.apply(SceneCommand::Hover(42));
    s.apply(SceneCommand::MenuClick(1000));
    s.apply(SceneCommand::Resize {
        width: 0.0,
        height: 0.0,
    });
    let out = s.frame(f32::NAN);
    assert_eq!(out.lifecycle.phase(), LifecyclePhase::Idle);
    assert!(out.camera.eye.is_finite());
    let out = s.frame(100.0);
    assert!(out.camera.eye.is_finite());
    assert_ne!(out.camera.eye, Vec3::ZERO);
}

#[test]
fn sections_beyond_the_pose_table_open_on_the_hero_pose() {
    let six: Vec<String> = (1..=6).map(|i| format!("Section {}", i)).collect();
    let mut s = Scene::new(SceneConfig::new(six).with_seed(3).with_viewport(1280.0, 720.0));
    assert!(!s.rig().poses().covers(6));
    open(&mut s, 6);
    let hero = s.rig().focused_target(0);
    assert!(s.rig().state().position.distance(hero.position) < 1e-2);
}
