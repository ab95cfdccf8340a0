//! Transient notification popups.
//!
//! A `Notice` is plain data; `toast_host` renders the currently active one
//! anchored to the bottom-right of the window and auto-dismisses it after a
//! short delay. Dismiss timers are generation-counted so a newer notice is
//! never torn down by an older timer.

use std::time::Duration;

use floem::action::exec_after;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;

/// How long a notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

/// One transient popup: icon kind, bold title, body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Display slot for the active notice plus its dismiss generation.
#[derive(Clone, Copy)]
pub struct ToastSlot {
    active: RwSignal<Option<Notice>>,
    generation: RwSignal<u64>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Show a notice and schedule its dismissal. Replaces any visible one.
    pub fn show(&self, notice: Notice) {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.active.set(Some(notice));

        let active = self.active;
        let gen_signal = self.generation;
        exec_after(NOTICE_TTL, move |_| {
            if gen_signal.get_untracked() == generation {
                active.set(None);
            }
        });
    }
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new()
    }
}

fn notice_icon(kind: NoticeKind) -> lucide_icons::Icon {
    match kind {
        NoticeKind::Success => lucide_icons::Icon::CircleCheck,
        NoticeKind::Info => lucide_icons::Icon::Info,
    }
}

/// Overlay view rendering the active notice, if any.
pub fn toast_host(slot: ToastSlot) -> impl IntoView {
    dyn_container(
        move || slot.active.get(),
        move |notice| match notice {
            None => empty().into_any(),
            Some(notice) => {
                let kind = notice.kind;
                let title = notice.title.clone();
                let body = notice.body.clone();
                h_stack((
                    label(move || notice_icon(kind).unicode().to_string()).style(|s| {
                        s.font_size(18.0)
                            .font_family("lucide".to_string())
                            .color(Color::rgb8(36, 138, 61))
                    }),
                    v_stack((
                        label(move || title.clone()).style(|s| s.font_size(constants::BODY_FONT)),
                        label(move || body.clone()).style(|s| {
                            s.font_size(constants::CAPTION_FONT)
                                .color(Color::rgb8(96, 96, 96))
                        }),
                    ))
                    .style(|s| s.gap(2.0)),
                ))
                .style(|s| {
                    s.gap(constants::GAP)
                        .items_center()
                        .padding(12.0)
                        .border_radius(constants::CARD_RADIUS)
                        .border(1.0)
                        .border_color(Color::rgba8(0, 0, 0, 20))
                        .background(Color::WHITE)
                })
                .into_any()
            }
        },
    )
    .style(|s| {
        s.absolute()
            .inset_bottom(24.0)
            .inset_right(24.0)
            .z_index(10)
    })
}
