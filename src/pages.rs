//! Placeholder pages. Only the static-color page has real content; these
//! hold the navigation targets until their subsystems land.

use floem::prelude::*;

use crate::constants;

fn placeholder(title: &'static str, caption: &'static str) -> impl IntoView {
    v_stack((
        label(move || title).style(|s| s.font_size(constants::TITLE_FONT)),
        label(move || caption).style(|s| {
            s.font_size(constants::BODY_FONT)
                .color(Color::rgb8(96, 96, 96))
        }),
    ))
    .style(|s| {
        s.padding(constants::PAGE_PADDING)
            .gap(12.0)
            .width_full()
            .height_full()
    })
}

pub fn home_page() -> impl IntoView {
    placeholder("Home", "Quick actions and device overview land here")
}

pub fn dynamic_page() -> impl IntoView {
    placeholder("Dynamic mode", "Animated effects land here")
}

pub fn gif_page() -> impl IntoView {
    placeholder("GIF mode", "Reserved")
}

pub fn device_page() -> impl IntoView {
    placeholder("Device", "Device info lands here")
}

pub fn connect_page() -> impl IntoView {
    placeholder("Connect", "Scanning and pairing hook up here")
}

pub fn settings_page() -> impl IntoView {
    placeholder("Settings", "Reserved")
}
