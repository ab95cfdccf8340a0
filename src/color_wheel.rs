//! Circular hue/saturation wheel view.
//!
//! Angle encodes hue through the six pure-hue anchors, radius encodes
//! saturation as a whitening gradient toward the center. The palette is
//! rasterized to an RGBA8 buffer regenerated only when the physical pixel
//! dimensions change; interaction and the preview/commit protocol live in
//! [`crate::wheel`].

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
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
use crate::wheel::{WheelCore, WheelEvent, WheelGeometry};

/// Feather width in raster pixels for anti-aliasing the disk edge.
const FEATHER: f64 = 3.0;

/// Rasterize the wheel disk at full value into an RGBA8 buffer.
///
/// Hue runs counter-clockwise from 3 o'clock (`atan2(-dy, dx)`), matching
/// the pointer math, so the marker always sits on the color under it.
/// Saturation clamps at the disk edge; the feather zone only fades alpha.
fn rasterize_wheel(width: u32, height: u32) -> Vec<u8> {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let radius = (cx.min(cy) - FEATHER).max(1.0);

    let mut buf = vec![0u8; (width * height * 4) as usize];

    for py in 0..height {
        let dy = py as f64 + 0.5 - cy;
        let row_offset = (py * width * 4) as usize;

        for px in 0..width {
            let dx = px as f64 + 0.5 - cx;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist > radius + FEATHER {
                continue; // fully outside
            }

            let alpha = ((radius + FEATHER - dist) / FEATHER).clamp(0.0, 1.0);
            let sat = (dist / radius).min(1.0);
            let mut angle = (-dy).atan2(dx).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }

            let (r, g, b) = math::hsv_to_rgb_f(angle, sat, 1.0);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
        }
    }

    buf
}

struct WheelUpdate(u16, u8);

pub(crate) struct ColorWheel {
    id: ViewId,
    core: WheelCore,
    size: floem::taffy::prelude::Size<f32>,
    on_preview: Option<Box<dyn Fn(u16, u8)>>,
    on_commit: Option<Box<dyn Fn(u16, u8)>>,
    /// Cached palette raster, keyed by physical pixel dimensions.
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates the hue/saturation wheel.
///
/// `hs` is the programmatic update path: writes to it move the marker
/// without firing `on_preview`/`on_commit`. Pointer interaction is the only
/// source of those events.
pub(crate) fn color_wheel(
    hs: RwSignal<(u16, u8)>,
    on_preview: impl Fn(u16, u8) + 'static,
    on_commit: impl Fn(u16, u8) + 'static,
) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let (h, s) = hs.get();
        id.update_state(WheelUpdate(h, s));
    });

    let (h0, s0) = hs.get_untracked();
    ColorWheel {
        id,
        core: WheelCore::new(h0, s0),
        size: Default::default(),
        on_preview: Some(Box::new(on_preview)),
        on_commit: Some(Box::new(on_commit)),
        wheel_img: None,
        wheel_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.aspect_ratio(1.0)
            .min_height(240.0)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColorWheel {
    fn geometry(&self) -> WheelGeometry {
        WheelGeometry::from_size(self.size.width as f64, self.size.height as f64)
    }

    fn emit(&self, event: Option<WheelEvent>) {
        match event {
            Some(WheelEvent::Preview(h, s)) => {
                if let Some(cb) = &self.on_preview {
                    cb(h, s);
                }
            }
            Some(WheelEvent::Commit(h, s)) => {
                if let Some(cb) = &self.on_commit {
                    cb(h, s);
                }
            }
            None => {}
        }
    }

    /// Re-rasterize the palette when the physical dimensions changed,
    /// otherwise reuse the cached buffer.
    fn ensure_wheel_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let side = (self.size.width as f64).min(self.size.height as f64);
        let px = (side * s).round() as u32;
        if px == 0 {
            return;
        }
        if self.cached_dims == (px, px) {
            return;
        }

        let pixels = rasterize_wheel(px, px);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, px, px);

        self.wheel_hash = blob.id().to_le_bytes().to_vec();
        self.wheel_img = Some(img);
        self.cached_dims = (px, px);
    }

    /// The square rect centered within the widget, used for drawing the disk.
    fn wheel_rect(&self) -> Rect {
        let geo = self.geometry();
        let half = (self.size.width as f64)
            .min(self.size.height as f64)
            .max(0.0)
            / 2.0;
        Rect::new(
            geo.center.x - half,
            geo.center.y - half,
            geo.center.x + half,
            geo.center.y + half,
        )
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            let WheelUpdate(h, s) = *update;
            if self.core.set_silent(h as i32, s as i32) {
                self.id.request_layout();
            }
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                let ev = self.core.pointer_down(&self.geometry(), e.pos);
                self.emit(ev);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.core.pressed() {
                    let ev = self.core.pointer_move(&self.geometry(), e.pos);
                    self.emit(ev);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                if self.core.pressed() {
                    let ev = self.core.pointer_up(&self.geometry(), e.pos);
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

        let geo = self.geometry();
        let disk = Circle::new(geo.center, geo.radius);

        cx.save();
        cx.clip(&disk);
        let scale = cx.scale();
        self.ensure_wheel_image(scale);
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                self.wheel_rect(),
            );
        }
        cx.restore();

        // Thin border around the disk
        cx.stroke(
            &disk,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Marker at the current (hue, saturation)
        let (hue, sat) = self.core.hs();
        let pt = geo.marker_position(hue, sat);
        let draw_r = if self.core.pressed() {
            constants::MARKER_RADIUS_PRESSED
        } else {
            constants::MARKER_RADIUS
        };

        let shadow = Circle::new(Point::new(pt.x + 2.0, pt.y + 2.0), draw_r);
        cx.fill(&shadow, Color::rgba8(0, 0, 0, 30), 0.0);

        let (r, g, b) = math::hsv_to_rgb(hue, sat, 255);
        let body = Circle::new(pt, draw_r - 1.0);
        cx.fill(&body, Color::rgb8(r, g, b), 0.0);
        cx.stroke(
            &body,
            Color::rgba8(255, 255, 255, 220),
            &floem::kurbo::Stroke::new(2.0),
        );
    }
}
