// Host-side tests for the looping menu scroller.

use polyfolio_core::constants::{MENU_LOOP_HIGH, MENU_LOOP_LOW};
use polyfolio_core::*;

const ITEM_H: f32 = 64.0;
const VIEW_H: f32 = 320.0;

fn menu() -> MenuScroller {
    MenuScroller::new(4, ITEM_H, VIEW_H)
}

fn settle(m: &mut MenuScroller) -> Vec<MenuEvent> {
    let mut events = Vec::new();
    for _ in 0..1200 {
        events.extend(m.step());
    }
    events
}

fn assert_settled(m: &MenuScroller) {
    let s = m.state();
    assert_eq!(s.velocity, 0.0);
    assert_eq!(s.position, m.snap_target(), "not resting on an item");
    let center = s.position + VIEW_H * 0.5;
    let item_center = (s.center_index as f32 + 0.5) * ITEM_H;
    assert!((center - item_center).abs() < 1e-3);
}

#[test]
fn starts_centered_on_first_item_of_middle_copy() {
    let mut m = menu();
    assert_eq!(m.rendered_count(), 12);
    assert_eq!(m.state().center_index, 4);
    assert_eq!(m.centered_section(), 1);
    assert_eq!(m.step(), Some(MenuEvent::Hover(1)));
    assert_eq!(m.step(), None, "hover fires only on change");
}

#[test]
fn wheel_momentum_settles_on_an_item() {
    let mut m = menu();
    m.step();
    m.wheel(100.0);
    let events = settle(&mut m);
    assert!(!events.is_empty());
    assert_settled(&m);
    assert_eq!(
        events.last(),
        Some(&MenuEvent::Hover(m.centered_section()))
    );
}

#[test]
fn settled_center_is_the_nearest_item() {
    for delta in [-300.0f32, -40.0, 7.0, 55.0, 250.0, 480.0] {
        let mut m = menu();
        m.wheel(delta);
        settle(&mut m);
        assert_settled(&m);
        let center = m.state().position + VIEW_H * 0.5;
        let nearest = (0..m.rendered_count())
            .min_by(|a, b| {
                let da = (center - (*a as f32 + 0.5) * ITEM_H).abs();
                let db = (center - (*b as f32 + 0.5) * ITEM_H).abs();
                da.partial_cmp(&db).unwrap()
            })
            .unwrap();
        assert_eq!(m.state().center_index, nearest, "delta {}", delta);
    }
}

#[test]
fn position_stays_inside_the_loop_window() {
    let mut m = menu();
    let cycle = m.cycle_length();
    for i in 0..2000 {
        if i % 50 == 0 {
            m.wheel(if i % 100 == 0 { 300.0 } else { -450.0 });
        }
        m.step();
        let p = m.state().position;
        assert!(
            p >= cycle * MENU_LOOP_LOW - 1.0 && p <= cycle * MENU_LOOP_HIGH + 1.0,
            "position {} escaped at frame {}",
            p,
            i
        );
    }
}

#[test]
fn step_items_moves_one_section() {
    let mut m = menu();
    m.step();
    m.step_items(1);
    let events = settle(&mut m);
    assert_eq!(m.centered_section(), 2);
    assert_eq!(events, vec![MenuEvent::Hover(2)]);
    assert_settled(&m);

    m.step_items(-1);
    settle(&mut m);
    assert_eq!(m.centered_section(), 1);
}

#[test]
fn stepping_back_from_first_wraps_to_last() {
    let mut m = menu();
    m.step();
    m.step_items(-1);
    settle(&mut m);
    assert_eq!(m.centered_section(), 4);
    assert_settled(&m);
}

#[test]
fn activate_and_click_select_the_centered_section() {
    let mut m = menu();
    m.step();
    assert_eq!(m.activate(), MenuEvent::Select(1));
    let center = m.state().center_index;
    assert_eq!(m.click(center), Some(MenuEvent::Select(1)));

    // clicking another item scrolls to it instead
    assert_eq!(m.click(center + 2), None);
    settle(&mut m);
    assert_eq!(m.centered_section(), 3);
    assert_eq!(m.activate(), MenuEvent::Select(3));
    assert_eq!(m.click(99), None);
}

#[test]
fn touch_drag_follows_the_finger() {
    let mut m = menu();
    m.step();
    let start = m.state().position;
    m.touch_start(500.0);
    m.touch_move(480.0);
    m.touch_move(450.0);
    assert_eq!(m.state().position, start + 50.0);
    assert_eq!(m.state().velocity, 30.0);
    // no physics while the finger is down
    m.step();
    assert_eq!(m.state().velocity, 30.0);
    m.touch_end();
    settle(&mut m);
    assert_settled(&m);
}

#[test]
fn item_visuals_peak_at_the_center() {
    let mut m = menu();
    m.step();
    let visuals = m.item_visuals(Some(1));
    let c = m.state().center_index;
    let v = visuals[c];
    assert!((v.opacity - 1.0).abs() < 1e-5);
    assert!((v.scale - 1.0).abs() < 1e-5);
    assert_eq!(v.blur_px, 0.0);
    assert!(v.accent && v.active);

    let far = visuals[0];
    assert!((far.opacity - 0.08).abs() < 1e-5);
    assert!((far.scale - 0.35).abs() < 1e-5);
    assert!((far.blur_px - 3.0).abs() < 1e-5);
    assert!(!far.accent);
    assert!(far.active, "item 0 is section 1 too");
    assert!(!visuals[1].active);
}

#[test]
fn relayout_keeps_the_centered_item() {
    let mut m = menu();
    m.step_items(1);
    settle(&mut m);
    let section = m.centered_section();
    m.set_layout(48.0, 240.0);
    settle(&mut m);
    assert_eq!(m.centered_section(), section);
}
