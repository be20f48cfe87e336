// Host-side tests for the CSS strings written to the menu and fragment DOM.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod css {
    include!("../src/css.rs");
}

use css::*;
use polyfolio_core::MenuScroller;

#[test]
fn centered_item_is_sharp_and_full_size() {
    let mut menu = MenuScroller::new(4, 64.0, 320.0);
    menu.step();
    let v = menu.item_visuals(None)[menu.state().center_index];
    assert_eq!(item_transform(v.scale), "scale(1.000)");
    assert_eq!(item_filter(v.blur_px), "");
    assert_eq!(item_opacity(v.opacity), "1.000");
}

#[test]
fn far_items_blur_and_shrink() {
    let menu = MenuScroller::new(4, 64.0, 320.0);
    let v = menu.item_visuals(None)[0];
    assert_eq!(item_transform(v.scale), "scale(0.350)");
    assert_eq!(item_filter(v.blur_px), "blur(3.00px)");
    assert_eq!(item_opacity(v.opacity), "0.080");
}

#[test]
fn track_moves_opposite_to_scroll_position() {
    assert_eq!(track_transform(96.0), "translate3d(0, -96.00px, 0)");
    assert_eq!(track_transform(-12.5), "translate3d(0, 12.50px, 0)");
    assert_eq!(item_opacity(1.4), "1.000");
}

#[test]
fn fragment_labels_map_ndc_to_css_pixels() {
    assert_eq!(
        fragment_transform(0.0, 0.0, 800.0, 600.0),
        "translate3d(400.0px, 300.0px, 0) translate(-50%, -50%)"
    );
    assert_eq!(
        fragment_transform(1.0, 1.0, 800.0, 600.0),
        "translate3d(800.0px, 0.0px, 0) translate(-50%, -50%)"
    );
    assert_eq!(
        fragment_transform(-1.0, -1.0, 800.0, 600.0),
        "translate3d(0.0px, 600.0px, 0) translate(-50%, -50%)"
    );
}

#[test]
fn fragment_font_follows_perspective_scale() {
    assert_eq!(fragment_font_size(0.5, 0.2, 600.0), "30.0px");
    assert_eq!(fragment_font_size(0.5, 0.1, 600.0), "15.0px");
}
