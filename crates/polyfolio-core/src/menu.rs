//! Momentum-scrolled looping section menu.
//!
//! Positions are in CSS pixels along the menu axis. The item list is rendered
//! three times back to back; scrolling wraps by one copy so the list never ends.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Centered item changed to this section.
    Hover(usize),
    Select(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItemVisual {
    pub opacity: f32,
    pub scale: f32,
    /// Zero when the item is close enough to the centre to be sharp.
    pub blur_px: f32,
    pub accent: bool,
    /// Item belongs to the currently open section.
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuScrollState {
    pub position: f32,
    pub velocity: f32,
    pub touching: bool,
    pub last_touch_y: f32,
    pub center_index: usize,
}

#[derive(Clone, Debug)]
pub struct MenuScroller {
    item_count: usize,
    item_height: f32,
    viewport_height: f32,
    state: MenuScrollState,
    scroll_to: Option<isize>,
    last_hovered: Option<usize>,
}

impl MenuScroller {
    pub fn new(item_count: usize, item_height: f32, viewport_height: f32) -> Self {
        let mut menu = Self {
            item_count: item_count.max(1),
            item_height: item_height.max(0.0),
            viewport_height: viewport_height.max(0.0),
            state: MenuScrollState {
                position: 0.0,
                velocity: 0.0,
                touching: false,
                last_touch_y: 0.0,
                center_index: 0,
            },
            scroll_to: None,
            last_hovered: None,
        };
        // first item of the middle copy sits in the centre
        menu.state.position =
            menu.cycle_length() + menu.item_height * 0.5 - menu.viewport_height * 0.5;
        menu.state.center_index = menu.nearest_item();
        menu
    }

    pub fn state(&self) -> &MenuScrollState {
        &self.state
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of rendered items (three copies).
    pub fn rendered_count(&self) -> usize {
        self.item_count * 3
    }

    pub fn cycle_length(&self) -> f32 {
        self.item_count as f32 * self.item_height
    }

    /// Section index (1-based) shown by rendered item `i`.
    pub fn section_of(&self, i: usize) -> usize {
        i % self.item_count + 1
    }

    pub fn centered_section(&self) -> usize {
        self.section_of(self.state.center_index)
    }

    /// Re-measure after a resize. Keeps the same item centred.
    pub fn set_layout(&mut self, item_height: f32, viewport_height: f32) {
        let center = self.state.center_index;
        self.item_height = item_height.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        self.state.position = self.item_center(center as isize) - self.viewport_height * 0.5;
        self.state.velocity = 0.0;
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y.is_finite() {
            self.state.velocity += delta_y * MENU_WHEEL_SCALE;
        }
    }

    pub fn touch_start(&mut self, y: f32) {
        self.state.touching = true;
        self.state.last_touch_y = y;
        self.state.velocity = 0.0;
    }

    /// Finger-follow: the list moves with the finger and the last delta becomes
    /// the release velocity.
    pub fn touch_move(&mut self, y: f32) {
        if !self.state.touching {
            return;
        }
        let delta = self.state.last_touch_y - y;
        self.state.last_touch_y = y;
        self.state.position += delta;
        self.state.velocity = delta;
    }

    pub fn touch_end(&mut self) {
        self.state.touching = false;
    }

    /// Request a one-item move; settles through the same snap mechanism.
    pub fn step_items(&mut self, direction: i32) {
        self.scroll_to = Some(self.state.center_index as isize + direction.signum() as isize);
    }

    pub fn activate(&self) -> MenuEvent {
        MenuEvent::Select(self.centered_section())
    }

    /// Clicking the centred item selects it; any other item scrolls to it.
    pub fn click(&mut self, item: usize) -> Option<MenuEvent> {
        if item >= self.rendered_count() {
            log::warn!("[menu] click on item {} out of range", item);
            return None;
        }
        if item == self.state.center_index {
            Some(MenuEvent::Select(self.section_of(item)))
        } else {
            self.scroll_to = Some(item as isize);
            None
        }
    }

    /// One physics frame. Returns a hover event when the centred section changes.
    pub fn step(&mut self) -> Option<MenuEvent> {
        if self.item_height <= 0.0 {
            return None;
        }
        let half_view = self.viewport_height * 0.5;
        if let Some(target) = self.scroll_to.take() {
            let container_center = self.state.position + half_view;
            self.state.velocity = (self.item_center(target) - container_center) * (1.0 - MENU_FRICTION);
        }

        let s = &mut self.state;
        if !s.touching {
            s.position += s.velocity;
            s.velocity *= MENU_FRICTION;
            if s.velocity.abs() < MENU_SNAP_THRESHOLD {
                s.velocity = 0.0;
                let target = self.snap_target();
                let s = &mut self.state;
                let diff = target - s.position;
                if diff.abs() > MENU_SNAP_EPSILON {
                    s.position += diff * MENU_SNAP_LERP;
                } else {
                    s.position = target;
                }
            }
        }

        let cycle = self.cycle_length();
        let s = &mut self.state;
        if s.position < cycle * MENU_LOOP_LOW {
            s.position += cycle;
        } else if s.position > cycle * MENU_LOOP_HIGH {
            s.position -= cycle;
        }

        self.state.center_index = self.nearest_item();
        let section = self.centered_section();
        if self.last_hovered != Some(section) {
            self.last_hovered = Some(section);
            return Some(MenuEvent::Hover(section));
        }
        None
    }

    /// Scroll position that centres the item nearest the viewport centre.
    pub fn snap_target(&self) -> f32 {
        self.item_center(self.nearest_item() as isize) - self.viewport_height * 0.5
    }

    pub fn item_visuals(&self, active_section: Option<usize>) -> Vec<MenuItemVisual> {
        let container_center = self.state.position + self.viewport_height * 0.5;
        let max_dist = (self.viewport_height * 0.5).max(f32::EPSILON);
        (0..self.rendered_count())
            .map(|i| {
                let dist = (container_center - self.item_center(i as isize)).abs();
                let t = (1.0 - dist / max_dist).max(0.0);
                MenuItemVisual {
                    opacity: 0.08 + t * 0.92,
                    scale: 0.35 + t * 0.65,
                    blur_px: if t > 0.85 { 0.0 } else { (1.0 - t) * 3.0 },
                    accent: t > 0.8,
                    active: active_section == Some(self.section_of(i)),
                }
            })
            .collect()
    }

    #[inline]
    fn item_center(&self, i: isize) -> f32 {
        (i as f32 + 0.5) * self.item_height
    }

    /// Ties go to the lower index.
    fn nearest_item(&self) -> usize {
        let container_center = self.state.position + self.viewport_height * 0.5;
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for i in 0..self.rendered_count() {
            let dist = (container_center - self.item_center(i as isize)).abs();
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        best
    }
}
