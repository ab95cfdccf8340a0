//! The static-color page: wheel and preset grid on the left, power /
//! current-color / brightness cards on the right, all mediated by one
//! [`StaticColorController`].
//!
//! Mirror closures write per-widget display signals; those signals reach
//! each widget through `create_effect` → `update_state`, which never emits
//! the widget's own change events.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::brightness_slider::brightness_slider;
use crate::color_wheel::color_wheel;
use crate::constants;
use crate::controller::{Collaborators, Mirrors, Origin, StaticColorController};
use crate::presets::preset_grid;
use crate::toast::ToastSlot;

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

fn card(child: impl IntoView + 'static) -> impl IntoView {
    container(child).style(|s| {
        s.width_full()
            .padding(16.0)
            .border_radius(constants::CARD_RADIUS)
            .border(1.0)
            .border_color(Color::rgba8(0, 0, 0, 20))
            .background(Color::WHITE)
    })
}

fn card_heading(title: &'static str, caption: &'static str) -> impl IntoView {
    v_stack((
        label(move || title).style(|s| s.font_size(constants::BODY_FONT)),
        label(move || caption).style(|s| {
            s.font_size(constants::CAPTION_FONT)
                .color(Color::rgb8(96, 96, 96))
        }),
    ))
    .style(|s| s.gap(2.0))
}

/// Hand-built pill switch. Display state lives in `checked`; only clicks go
/// through `on_toggle`, so programmatic writes to the signal stay silent.
fn power_switch(checked: RwSignal<bool>, on_toggle: impl Fn(bool) + 'static) -> impl IntoView {
    h_stack((
        label(move || if checked.get() { "On" } else { "Off" }).style(|s| {
            s.font_size(constants::CAPTION_FONT)
                .color(Color::rgb8(96, 96, 96))
        }),
        container(empty().style(move |s| {
            let on = checked.get();
            s.size(18.0, 18.0)
                .border_radius(9.0)
                .background(Color::WHITE)
                .margin_left(if on { 20.0 } else { 0.0 })
        }))
        .style(move |s| {
            let track = if checked.get() {
                Color::rgb8(0, 120, 212)
            } else {
                Color::rgb8(180, 180, 180)
            };
            s.width(44.0)
                .height(24.0)
                .border_radius(12.0)
                .padding(3.0)
                .items_center()
                .background(track)
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_click_stop(move |_| on_toggle(!checked.get_untracked())),
    ))
    .style(|s| s.gap(constants::GAP).items_center())
}

/// Small copy button in the current-color card.
fn copy_button(on_copy: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(28.0, 28.0)
            .items_center()
            .justify_center()
            .border_radius(4.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_copy();
    })
}

/// Build the static-color page and wire its mediator.
pub fn static_color_page(toasts: ToastSlot) -> impl IntoView {
    let seed = crate::controller::CanonicalState::default();

    // Per-widget display signals: the silent programmatic update paths.
    let wheel_hs = RwSignal::new((seed.color.hue(), seed.color.saturation()));
    let slider_pct = RwSignal::new(seed.brightness);
    let power_on = RwSignal::new(seed.power);
    let hex_text = RwSignal::new(seed.color.to_hex());
    let swatch_rgb = RwSignal::new(seed.color.to_rgb());
    let bright_pct = RwSignal::new(seed.brightness);

    let controller = Rc::new(RefCell::new(StaticColorController::new(
        Mirrors {
            wheel: Box::new(move |h, s| wheel_hs.set((h, s))),
            slider: Box::new(move |p| slider_pct.set(p)),
            power: Box::new(move |on| power_on.set(on)),
            readout: Box::new(move |hex, rgb| {
                hex_text.set(hex.to_string());
                swatch_rgb.set(rgb);
            }),
            brightness_label: Box::new(move |p| bright_pct.set(p)),
        },
        Collaborators {
            clipboard: Box::new(copy_to_clipboard),
            notify: Box::new(move |notice| toasts.show(notice)),
            device: Box::new(|state| {
                tracing::debug!(?state, "no device link yet, frame dropped");
            }),
        },
    )));

    let wheel = {
        let preview = controller.clone();
        let commit = controller.clone();
        color_wheel(
            wheel_hs,
            move |h, s| {
                preview
                    .borrow_mut()
                    .update_color(h as i32, s as i32, Origin::Wheel)
            },
            move |h, s| {
                commit
                    .borrow_mut()
                    .commit_color(h as i32, s as i32, Origin::Wheel)
            },
        )
        .style(|s| s.width(380.0).height(380.0))
    };

    let slider = {
        let preview = controller.clone();
        let commit = controller.clone();
        brightness_slider(
            slider_pct,
            wheel_hs,
            move |p| {
                preview
                    .borrow_mut()
                    .update_brightness(p as i32, Origin::Slider)
            },
            move |p| {
                commit
                    .borrow_mut()
                    .commit_brightness(p as i32, Origin::Slider)
            },
        )
        .style(|s| s.width_full())
    };

    let grid = {
        let c = controller.clone();
        preset_grid(hex_text, move |hex| c.borrow_mut().on_preset_selected(hex))
    };

    let power_card = card(
        h_stack((
            card_heading("Power", "Lamp power"),
            empty().style(|s| s.flex_grow(1.0)),
            power_switch(power_on, {
                let c = controller.clone();
                move |on| c.borrow_mut().update_power(on, Origin::Power)
            }),
        ))
        .style(|s| s.items_center().width_full()),
    );

    let color_card = card(
        h_stack((
            card_heading("Current color", "HEX"),
            empty().style(|s| s.flex_grow(1.0)),
            empty().style(move |s| {
                let (r, g, b) = swatch_rgb.get();
                s.size(28.0, 28.0)
                    .border_radius(8.0)
                    .border(1.0)
                    .border_color(Color::rgba8(0, 0, 0, 20))
                    .background(Color::rgb8(r, g, b))
            }),
            label(move || hex_text.get()).style(|s| {
                s.font_size(constants::BODY_FONT)
                    .font_family("monospace".to_string())
            }),
            copy_button({
                let c = controller.clone();
                move || c.borrow().on_copy_requested()
            }),
        ))
        .style(|s| s.items_center().gap(12.0).width_full()),
    );

    let brightness_card = card(
        v_stack((
            h_stack((
                card_heading("Brightness", "Global brightness"),
                empty().style(|s| s.flex_grow(1.0)),
                label(move || format!("{}%", bright_pct.get()))
                    .style(|s| s.font_size(constants::BODY_FONT)),
            ))
            .style(|s| s.items_center().width_full()),
            slider,
        ))
        .style(|s| s.gap(constants::GAP).width_full()),
    );

    v_stack((
        label(|| "Static mode").style(|s| s.font_size(constants::TITLE_FONT)),
        h_stack((
            v_stack((container(wheel).style(|s| s.justify_center().width_full()), grid))
                .style(|s| s.gap(16.0).items_center().flex_grow(3.0)),
            v_stack((power_card, color_card, brightness_card))
                .style(|s| s.gap(12.0).flex_grow(2.0).max_width(380.0)),
        ))
        .style(|s| s.gap(16.0).width_full()),
    ))
    .style(|s| {
        s.padding(constants::PAGE_PADDING)
            .gap(16.0)
            .width_full()
            .height_full()
    })
}
