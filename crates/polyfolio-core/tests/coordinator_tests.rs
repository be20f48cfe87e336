// Host-side tests for the section lifecycle state machine and its timers.

use polyfolio_core::*;

fn open_section(c: &mut SceneCoordinator, section: usize) {
    c.select(section);
    c.camera_arrived(section);
    c.advance(0.2);
    assert_eq!(c.phase(), LifecyclePhase::Open);
}

#[test]
fn timer_queue_fires_in_due_order() {
    let mut q: TimerQueue<&str> = TimerQueue::default();
    q.schedule_after(0.3, "late");
    q.schedule_after(0.1, "early");
    let cancelled = q.schedule_after(0.2, "cancelled");
    q.schedule_after(0.1, "early-second");
    assert!(q.cancel(cancelled));
    assert!(!q.cancel(cancelled));
    assert!(q.advance(0.05).is_empty());
    let fired = q.advance(0.3);
    assert_eq!(fired.as_slice(), &["early", "early-second", "late"]);
    assert!(q.is_empty());
}

#[test]
fn timer_queue_clear_drops_everything() {
    let mut q: TimerQueue<u32> = TimerQueue::default();
    q.schedule_after(0.1, 1);
    q.schedule_after(0.2, 2);
    q.clear();
    assert!(q.advance(1.0).is_empty());
}

#[test]
fn full_open_sequence() {
    let mut c = SceneCoordinator::new(4);
    assert_eq!(c.phase(), LifecyclePhase::Idle);
    assert_eq!(c.select(2), Some(LifecycleEvent::Opening(2)));
    assert_eq!(c.phase(), LifecyclePhase::Opening);
    assert_eq!(c.scene_section(), 2);
    assert!(c.section_active());

    assert_eq!(c.camera_arrived(2), Some(LifecycleEvent::CameraReady(2)));
    assert_eq!(c.phase(), LifecyclePhase::AwaitingReveal);
    assert!(c.advance(0.19).is_empty());
    assert_eq!(c.phase(), LifecyclePhase::AwaitingReveal);
    assert_eq!(c.advance(0.01).as_slice(), &[LifecycleEvent::Revealed(2)]);
    assert_eq!(c.phase(), LifecyclePhase::Open);
    assert!(c.state().modal_visible);
}

#[test]
fn close_from_open_returns_to_idle_after_close_duration() {
    let mut c = SceneCoordinator::new(4);
    open_section(&mut c, 2);
    assert_eq!(c.close(), Some(LifecycleEvent::Closing(2)));
    assert_eq!(c.phase(), LifecyclePhase::Closing);
    assert!(c.advance(0.39).is_empty());
    assert_eq!(c.phase(), LifecyclePhase::Closing);
    assert_eq!(c.advance(0.01).as_slice(), &[LifecycleEvent::Closed(2)]);
    let s = c.state();
    assert_eq!(c.phase(), LifecyclePhase::Idle);
    assert_eq!(s.active_section, None);
    assert!(!s.camera_ready && !s.modal_visible && !s.modal_closing);
}

#[test]
fn close_before_open_resets_immediately() {
    let mut c = SceneCoordinator::new(4);
    c.select(1);
    assert_eq!(c.close(), Some(LifecycleEvent::Closed(1)));
    assert_eq!(c.phase(), LifecyclePhase::Idle);

    c.select(3);
    c.camera_arrived(3);
    assert_eq!(c.phase(), LifecyclePhase::AwaitingReveal);
    assert_eq!(c.close(), Some(LifecycleEvent::Closed(3)));
    assert_eq!(c.phase(), LifecyclePhase::Idle);
    assert_eq!(c.pending_timers(), 0);
    // the cancelled reveal never fires
    assert!(c.advance(1.0).is_empty());
    assert_eq!(c.phase(), LifecyclePhase::Idle);
}

#[test]
fn close_is_a_no_op_when_idle_or_closing() {
    let mut c = SceneCoordinator::new(4);
    assert_eq!(c.close(), None);
    open_section(&mut c, 4);
    c.close();
    c.advance(0.2);
    assert_eq!(c.close(), None);
    // the original close timer is still the one that finishes
    assert_eq!(c.advance(0.2).as_slice(), &[LifecycleEvent::Closed(4)]);
}

#[test]
fn reselecting_active_section_closes_it() {
    let mut c = SceneCoordinator::new(4);
    open_section(&mut c, 1);
    assert_eq!(c.select(1), Some(LifecycleEvent::Closing(1)));
    assert_eq!(c.phase(), LifecyclePhase::Closing);
    assert_eq!(c.select(1), None);
    c.advance(0.4);
    assert_eq!(c.phase(), LifecyclePhase::Idle);
}

#[test]
fn selecting_another_section_redirects_and_cancels_timers() {
    let mut c = SceneCoordinator::new(4);
    c.select(2);
    c.camera_arrived(2);
    assert_eq!(c.pending_timers(), 1);
    assert_eq!(
        c.select(3),
        Some(LifecycleEvent::Redirected { from: 2, to: 3 })
    );
    assert_eq!(c.pending_timers(), 0);
    assert_eq!(c.phase(), LifecyclePhase::Opening);
    assert_eq!(c.state().active_section, Some(3));
    // the stale reveal for 2 must not open 3
    assert!(c.advance(1.0).is_empty());
    assert_eq!(c.phase(), LifecyclePhase::Opening);
}

#[test]
fn redirect_from_closing_aborts_the_close() {
    let mut c = SceneCoordinator::new(4);
    open_section(&mut c, 2);
    c.close();
    c.select(4);
    assert_eq!(c.phase(), LifecyclePhase::Opening);
    assert!(c.advance(1.0).is_empty());
    assert_eq!(c.state().active_section, Some(4));
}

#[test]
fn stale_camera_arrival_is_ignored() {
    let mut c = SceneCoordinator::new(4);
    assert_eq!(c.camera_arrived(1), None);
    c.select(2);
    assert_eq!(c.camera_arrived(1), None);
    assert_eq!(c.phase(), LifecyclePhase::Opening);
    c.camera_arrived(2);
    assert_eq!(c.camera_arrived(2), None, "second arrival must not reschedule");
    assert_eq!(c.pending_timers(), 1);
}

#[test]
fn out_of_range_select_is_ignored() {
    let mut c = SceneCoordinator::new(4);
    assert_eq!(c.select(0), None);
    assert_eq!(c.select(5), None);
    assert_eq!(c.phase(), LifecyclePhase::Idle);
}

#[test]
fn hover_only_drives_scene_section_while_idle() {
    let mut c = SceneCoordinator::new(4);
    c.hover(3);
    assert_eq!(c.scene_section(), 3);
    c.select(1);
    c.hover(4);
    assert_eq!(c.state().hovered_section, 4);
    assert_eq!(c.scene_section(), 1);
    c.close();
    assert_eq!(c.scene_section(), 4);
    c.hover(17);
    assert_eq!(c.scene_section(), 0);
}

#[test]
fn epoch_advances_on_open_and_redirect_only() {
    let mut c = SceneCoordinator::new(4);
    assert_eq!(c.epoch(), 0);
    c.select(2);
    assert_eq!(c.epoch(), 1);
    c.camera_arrived(2);
    c.advance(0.2);
    assert_eq!(c.epoch(), 1);
    c.select(3);
    assert_eq!(c.epoch(), 2);
    c.close();
    c.select(0);
    assert_eq!(c.epoch(), 2);
    c.select(3);
    assert_eq!(c.epoch(), 3);
}
