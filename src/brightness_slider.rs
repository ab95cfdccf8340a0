//! Brightness slider (0–100 %).
//!
//! Renders a horizontal gradient from black (0 %, left) to the current color
//! at full value (100 %, right) as a rasterized image, avoiding vger's
//! broken linear gradient coordinate handling. Brightness is orthogonal to
//! the picked color; the color only drives the gradient's right end.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;

/// Event emitted by the slider's user-input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SliderEvent {
    Preview(u8),
    Commit(u8),
}

/// Percent value plus the pressed flag; same Idle → Previewing → Idle shape
/// as the wheel core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SliderCore {
    percent: u8,
    pressed: bool,
}

impl SliderCore {
    pub(crate) fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
            pressed: false,
        }
    }

    pub(crate) fn percent(&self) -> u8 {
        self.percent
    }

    pub(crate) fn pressed(&self) -> bool {
        self.pressed
    }

    /// Pointer x → percent, with the thumb radius inset on both ends.
    /// Degenerate widths keep the current value.
    pub(crate) fn percent_at(&self, x: f64, width: f64) -> u8 {
        let r = constants::THUMB_RADIUS;
        let usable = width - 2.0 * r;
        if usable <= 0.0 {
            return self.percent;
        }
        (((x - r) / usable).clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub(crate) fn pointer_down(&mut self, x: f64, width: f64) -> Option<SliderEvent> {
        self.pressed = true;
        let p = self.percent_at(x, width);
        self.set_value(p as i32, false).0
    }

    pub(crate) fn pointer_move(&mut self, x: f64, width: f64) -> Option<SliderEvent> {
        if !self.pressed {
            return None;
        }
        let p = self.percent_at(x, width);
        self.set_value(p as i32, false).0
    }

    /// Release always commits exactly once, even with no drag.
    pub(crate) fn pointer_up(&mut self, x: f64, width: f64) -> Option<SliderEvent> {
        self.pressed = false;
        let p = self.percent_at(x, width);
        self.set_value(p as i32, true).0
    }

    pub(crate) fn set_value(&mut self, percent: i32, commit: bool) -> (Option<SliderEvent>, bool) {
        let p = percent.clamp(0, 100) as u8;
        let changed = p != self.percent;
        self.percent = p;

        let event = if commit {
            Some(SliderEvent::Commit(p))
        } else if changed {
            Some(SliderEvent::Preview(p))
        } else {
            None
        };
        (event, changed || commit)
    }

    /// Drop out of Previewing without committing (pointer grab lost).
    pub(crate) fn abort(&mut self) {
        self.pressed = false;
    }

    /// Programmatic path: no events, returns whether a repaint is needed.
    pub(crate) fn set_silent(&mut self, percent: i32) -> bool {
        let p = percent.clamp(0, 100) as u8;
        let changed = p != self.percent;
        self.percent = p;
        changed
    }
}

/// Rasterize a horizontal gradient: black (left) → `(r, g, b)` (right).
fn rasterize_track_gradient(width: u32, height: u32, r: f64, g: f64, b: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64; // 0 at left, 1 at right
        let cr = (t * r * 255.0 + 0.5) as u8;
        let cg = (t * g * 255.0 + 0.5) as u8;
        let cb = (t * b * 255.0 + 0.5) as u8;
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }
    buf
}

enum SliderUpdate {
    Percent(u8),
    BaseColor(f64, f64, f64),
}

pub(crate) struct BrightnessSlider {
    id: ViewId,
    core: SliderCore,
    base_r: f64,
    base_g: f64,
    base_b: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_preview: Option<Box<dyn Fn(u8)>>,
    on_commit: Option<Box<dyn Fn(u8)>>,
    /// Cached gradient image, keyed by dims and end color.
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_color: (u8, u8, u8),
    cached_dims: (u32, u32),
}

/// Creates the brightness slider.
///
/// `percent` is the programmatic update path (silent). `hs` is read-only and
/// drives the gradient's full-brightness end color. Pointer interaction
/// emits `on_preview` while dragging and `on_commit` once on release.
pub(crate) fn brightness_slider(
    percent: RwSignal<u8>,
    hs: RwSignal<(u16, u8)>,
    on_preview: impl Fn(u8) + 'static,
    on_commit: impl Fn(u8) + 'static,
) -> BrightnessSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let p = percent.get();
        id.update_state(SliderUpdate::Percent(p));
    });

    create_effect(move |_| {
        let (h, s) = hs.get();
        let (r, g, b) = math::hsv_to_rgb_f(h as f64, s as f64 / 255.0, 1.0);
        id.update_state(SliderUpdate::BaseColor(r, g, b));
    });

    let (h0, s0) = hs.get_untracked();
    let (r, g, b) = math::hsv_to_rgb_f(h0 as f64, s0 as f64 / 255.0, 1.0);

    BrightnessSlider {
        id,
        core: SliderCore::new(percent.get_untracked()),
        base_r: r,
        base_g: g,
        base_b: b,
        size: Default::default(),
        on_preview: Some(Box::new(on_preview)),
        on_commit: Some(Box::new(on_commit)),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_color: (0, 0, 0),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl BrightnessSlider {
    fn emit(&self, event: Option<SliderEvent>) {
        match event {
            Some(SliderEvent::Preview(p)) => {
                if let Some(cb) = &self.on_preview {
                    cb(p);
                }
            }
            Some(SliderEvent::Commit(p)) => {
                if let Some(cb) = &self.on_commit {
                    cb(p);
                }
            }
            None => {}
        }
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let color_key = (
            (self.base_r * 255.0 + 0.5) as u8,
            (self.base_g * 255.0 + 0.5) as u8,
            (self.base_b * 255.0 + 0.5) as u8,
        );
        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_color == color_key {
            return;
        }

        let pixels = rasterize_track_gradient(pw, ph, self.base_r, self.base_g, self.base_b);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.grad_hash = blob.id().to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_color = color_key;
        self.cached_dims = dims;
    }
}

impl View for BrightnessSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Percent(p) => {
                    self.core.set_silent(p as i32);
                }
                SliderUpdate::BaseColor(r, g, b) => {
                    self.base_r = r;
                    self.base_g = g;
                    self.base_b = b;
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let w = self.size.width as f64;
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                let ev = self.core.pointer_down(e.pos.x, w);
                self.emit(ev);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.core.pressed() {
                    let ev = self.core.pointer_move(e.pos.x, w);
                    self.emit(ev);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                if self.core.pressed() {
                    let ev = self.core.pointer_up(e.pos.x, w);
                    self.emit(ev);
                    self.id.request_layout();
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                if self.core.pressed() {
                    self.core.abort();
                    self.id.request_layout();
                }
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        // Clip to rounded rect for rounded ends
        cx.save();
        cx.clip(&rrect);

        let scale = cx.scale();
        self.ensure_gradient_image(scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }

        cx.restore();

        // Track outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (circular ring; left = 0 %, right = 100 %)
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + self.core.percent() as f64 / 100.0 * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const W: f64 = 214.0; // usable span of 200 with the 7 px thumb inset

    #[test]
    fn pointer_x_maps_to_clamped_percent() {
        let core = SliderCore::new(0);
        assert_eq!(core.percent_at(constants::THUMB_RADIUS, W), 0);
        assert_eq!(core.percent_at(constants::THUMB_RADIUS + 100.0, W), 50);
        assert_eq!(core.percent_at(W - constants::THUMB_RADIUS, W), 100);
        assert_eq!(core.percent_at(-50.0, W), 0);
        assert_eq!(core.percent_at(W + 50.0, W), 100);
    }

    #[test]
    fn degenerate_width_keeps_current_value() {
        let core = SliderCore::new(42);
        assert_eq!(core.percent_at(10.0, 0.0), 42);
    }

    #[test]
    fn press_release_without_drag_commits_exactly_once() {
        let mut core = SliderCore::new(80);
        let x = constants::THUMB_RADIUS + 0.8 * 200.0;
        let mut events = Vec::new();
        events.extend(core.pointer_down(x, W));
        events.extend(core.pointer_up(x, W));
        assert_eq!(events, vec![SliderEvent::Commit(80)]);
    }

    #[test]
    fn drag_previews_then_commits() {
        let mut core = SliderCore::new(0);
        let mut events = Vec::new();
        events.extend(core.pointer_down(constants::THUMB_RADIUS, W));
        events.extend(core.pointer_move(constants::THUMB_RADIUS + 50.0, W));
        events.extend(core.pointer_move(constants::THUMB_RADIUS + 100.0, W));
        events.extend(core.pointer_up(constants::THUMB_RADIUS + 100.0, W));
        assert_eq!(
            events,
            vec![
                SliderEvent::Preview(25),
                SliderEvent::Preview(50),
                SliderEvent::Commit(50),
            ]
        );
    }

    #[test]
    fn set_value_clamps() {
        let mut core = SliderCore::new(0);
        core.set_value(250, false);
        assert_eq!(core.percent(), 100);
        core.set_value(-3, false);
        assert_eq!(core.percent(), 0);
    }

    #[test]
    fn silent_set_emits_nothing_and_reports_repaint() {
        let mut core = SliderCore::new(10);
        assert!(core.set_silent(60));
        assert_eq!(core.percent(), 60);
        assert!(!core.set_silent(60));
    }
}
