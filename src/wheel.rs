//! Picker core for the color wheel: pointer geometry and the
//! press/drag/release state machine, kept free of any Floem types beyond
//! `Point` so the whole interaction protocol is unit-testable.
//!
//! Angle convention: screen y grows downward, hue angle grows
//! counter-clockwise from 3 o'clock, so the pointer math uses `atan2(-dy, dx)`.

use floem::kurbo::Point;

use crate::color::{clamp_hue, clamp_saturation};
use crate::constants;

/// Center and radius of the wheel disk, derived from the widget size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    pub radius: f64,
}

impl WheelGeometry {
    /// Geometry for a widget of the given logical size. The radius floors at
    /// 1 so a collapsed widget still accepts input without dividing by zero.
    pub fn from_size(width: f64, height: f64) -> Self {
        let side = width.min(height);
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius: (side / 2.0 - constants::WHEEL_INSET).max(1.0),
        }
    }

    /// Map a pointer position to (hue, saturation).
    ///
    /// Positions outside the disk clamp radially onto the boundary, so a
    /// drag that leaves the disk still yields the fully-saturated edge color.
    pub fn pick(&self, pos: Point) -> (u16, u8) {
        let mut dx = pos.x - self.center.x;
        let mut dy = pos.y - self.center.y;
        let mut r = dx.hypot(dy);

        if r > self.radius && r != 0.0 {
            let scale = self.radius / r;
            dx *= scale;
            dy *= scale;
            r = self.radius;
        }

        let mut angle = (-dy).atan2(dx).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        let hue = clamp_hue(angle as i32);
        let saturation = clamp_saturation((r / self.radius * 255.0).round() as i32);
        (hue, saturation)
    }

    /// Inverse of [`pick`](Self::pick): the marker position for (hue, saturation).
    pub fn marker_position(&self, hue: u16, saturation: u8) -> Point {
        let r = saturation as f64 / 255.0 * self.radius;
        let theta = (hue as f64).to_radians();
        Point::new(
            self.center.x + r * theta.cos(),
            self.center.y - r * theta.sin(),
        )
    }
}

/// Event emitted by the wheel's user-input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    /// Provisional value while the pointer is held.
    Preview(u16, u8),
    /// Final value, fired exactly once on release.
    Commit(u16, u8),
}

/// Displayed value plus the pressed flag; Idle → Previewing → Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelCore {
    hue: u16,
    saturation: u8,
    pressed: bool,
}

impl WheelCore {
    pub fn new(hue: u16, saturation: u8) -> Self {
        Self {
            hue,
            saturation,
            pressed: false,
        }
    }

    pub fn hs(&self) -> (u16, u8) {
        (self.hue, self.saturation)
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Press: enter Previewing and pick at the pointer.
    pub fn pointer_down(&mut self, geo: &WheelGeometry, pos: Point) -> Option<WheelEvent> {
        self.pressed = true;
        let (h, s) = geo.pick(pos);
        self.set_hs(h as i32, s as i32, false).0
    }

    /// Drag: preview only while pressed.
    pub fn pointer_move(&mut self, geo: &WheelGeometry, pos: Point) -> Option<WheelEvent> {
        if !self.pressed {
            return None;
        }
        let (h, s) = geo.pick(pos);
        self.set_hs(h as i32, s as i32, false).0
    }

    /// Release: leave Previewing and commit the value at release time.
    pub fn pointer_up(&mut self, geo: &WheelGeometry, pos: Point) -> Option<WheelEvent> {
        self.pressed = false;
        let (h, s) = geo.pick(pos);
        self.set_hs(h as i32, s as i32, true).0
    }

    /// Store a value through the user-input path. Returns the event to emit
    /// (if any) and whether a repaint is needed.
    ///
    /// A commit always fires, even when the value is unchanged — release
    /// must finalize the interaction.
    pub fn set_hs(&mut self, h: i32, s: i32, commit: bool) -> (Option<WheelEvent>, bool) {
        let h = clamp_hue(h);
        let s = clamp_saturation(s);
        let changed = (h, s) != (self.hue, self.saturation);
        self.hue = h;
        self.saturation = s;

        let event = if commit {
            Some(WheelEvent::Commit(h, s))
        } else if changed {
            Some(WheelEvent::Preview(h, s))
        } else {
            None
        };
        (event, changed || commit)
    }

    /// Drop out of Previewing without committing (pointer grab lost).
    pub fn abort(&mut self) {
        self.pressed = false;
    }

    /// Programmatic update path: moves the displayed value without emitting
    /// anything. Returns whether a repaint is needed.
    pub fn set_silent(&mut self, h: i32, s: i32) -> bool {
        let h = clamp_hue(h);
        let s = clamp_saturation(s);
        let changed = (h, s) != (self.hue, self.saturation);
        self.hue = h;
        self.saturation = s;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn geo() -> WheelGeometry {
        // 204x204 widget -> center (102, 102), radius 100
        WheelGeometry::from_size(204.0, 204.0)
    }

    #[test]
    fn radius_floors_at_one_for_degenerate_sizes() {
        assert_eq!(WheelGeometry::from_size(0.0, 0.0).radius, 1.0);
        assert_eq!(WheelGeometry::from_size(3.0, 3.0).radius, 1.0);
        let g = WheelGeometry::from_size(0.0, 0.0);
        // Picking must not divide by zero even with no area.
        let (_, s) = g.pick(Point::new(0.0, 0.0));
        assert_eq!(s, 0);
    }

    #[test]
    fn center_pick_is_zero_saturation() {
        let g = geo();
        let (_, s) = g.pick(g.center);
        assert_eq!(s, 0);
    }

    #[test]
    fn boundary_and_outside_picks_saturate_fully() {
        let g = geo();
        let on_edge = Point::new(g.center.x + g.radius, g.center.y);
        assert_eq!(g.pick(on_edge), (0, 255));
        let far_out = Point::new(g.center.x + 10.0 * g.radius, g.center.y);
        assert_eq!(g.pick(far_out), (0, 255));
    }

    #[test]
    fn angle_anchors() {
        let g = geo();
        let r = g.radius;
        // Right, up, left, down in screen coordinates.
        assert_eq!(g.pick(Point::new(g.center.x + r, g.center.y)).0, 0);
        assert_eq!(g.pick(Point::new(g.center.x, g.center.y - r)).0, 90);
        assert_eq!(g.pick(Point::new(g.center.x - r, g.center.y)).0, 180);
        assert_eq!(g.pick(Point::new(g.center.x, g.center.y + r)).0, 270);
    }

    #[test]
    fn marker_position_inverts_pick() {
        let g = geo();
        for &(h, s) in &[(0u16, 255u8), (90, 128), (210, 64), (359, 255)] {
            let pos = g.marker_position(h, s);
            let (ph, ps) = g.pick(pos);
            assert!((ph as i32 - h as i32).abs() <= 1, "h {h} -> {ph}");
            assert!((ps as i32 - s as i32).abs() <= 1, "s {s} -> {ps}");
        }
    }

    #[test]
    fn drag_to_boundary_previews_then_commits_once() {
        let g = geo();
        let mut core = WheelCore::new(0, 0);
        let mut events = Vec::new();

        events.extend(core.pointer_down(&g, g.center));
        // Drag straight up toward 90° in steps.
        for step in 1..=10 {
            let y = g.center.y - g.radius * step as f64 / 10.0;
            events.extend(core.pointer_move(&g, Point::new(g.center.x, y)));
        }
        events.extend(core.pointer_up(&g, Point::new(g.center.x, g.center.y - g.radius)));

        let commits: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, WheelEvent::Commit(..)))
            .collect();
        assert_eq!(commits.len(), 1);
        assert_eq!(*commits[0], WheelEvent::Commit(90, 255));

        let previews: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                WheelEvent::Preview(_, s) => Some(*s),
                WheelEvent::Commit(..) => None,
            })
            .collect();
        assert!(!previews.is_empty());
        assert!(previews.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*previews.last().unwrap(), 255);
        for e in &events {
            if let WheelEvent::Preview(h, s) = e {
                if *s > 0 {
                    assert_eq!(*h, 90);
                }
            }
        }
    }

    #[test]
    fn release_commits_even_without_change() {
        let g = geo();
        let pos = g.marker_position(90, 255);
        let mut core = WheelCore::new(0, 0);
        core.pointer_down(&g, pos);
        let up = core.pointer_up(&g, pos);
        assert!(matches!(up, Some(WheelEvent::Commit(..))));
        assert!(!core.pressed());
    }

    #[test]
    fn silent_update_moves_value_without_events() {
        let mut core = WheelCore::new(0, 0);
        assert!(core.set_silent(10, 200));
        assert_eq!(core.hs(), (10, 200));
        // Same value again: no repaint needed either.
        assert!(!core.set_silent(10, 200));
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let g = geo();
        let mut core = WheelCore::new(0, 0);
        let ev = core.pointer_move(&g, Point::new(g.center.x + 10.0, g.center.y));
        assert_eq!(ev, None);
        assert_eq!(core.hs(), (0, 0));
    }
}
