/// CSS values written to the menu and fragment DOM each frame.
// `transform` for one menu item
#[inline]
pub fn item_transform(scale: f32) -> String {
    format!("scale({:.3})", scale)
}

// `filter` for one menu item; empty when sharp
#[inline]
pub fn item_filter(blur_px: f32) -> String {
    if blur_px > 0.0 {
        format!("blur({:.2}px)", blur_px)
    } else {
        String::new()
    }
}

#[inline]
pub fn item_opacity(opacity: f32) -> String {
    format!("{:.3}", opacity.clamp(0.0, 1.0))
}

// The track moves up as the scroll position grows
#[inline]
pub fn track_transform(position: f32) -> String {
    format!("translate3d(0, {:.2}px, 0)", -position)
}

// Center of a fragment label in CSS px; NDC y points up, CSS y down
#[inline]
pub fn fragment_transform(ndc_x: f32, ndc_y: f32, view_w: f32, view_h: f32) -> String {
    let x = (ndc_x + 1.0) * 0.5 * view_w;
    let y = (1.0 - ndc_y) * 0.5 * view_h;
    format!("translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%)", x, y)
}

#[inline]
pub fn fragment_font_size(world_size: f32, scale: f32, view_h: f32) -> String {
    format!("{:.1}px", world_size * scale * 0.5 * view_h)
}
