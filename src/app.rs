//! Shell window: left navigation rail plus the page area.
//!
//! Pages are constructed once and toggled with `display: none`, so page
//! state (notably the static page's canonical color state) survives
//! navigation for the window's lifetime.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use tracing::debug;

use crate::constants;
use crate::pages;
use crate::static_color::static_color_page;
use crate::toast::{toast_host, ToastSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePage {
    Home,
    Static,
    Dynamic,
    Gif,
    Device,
    Connect,
    Settings,
}

impl ActivePage {
    fn title(self) -> &'static str {
        match self {
            ActivePage::Home => "Home",
            ActivePage::Static => "Static",
            ActivePage::Dynamic => "Dynamic",
            ActivePage::Gif => "GIF",
            ActivePage::Device => "Device",
            ActivePage::Connect => "Connect",
            ActivePage::Settings => "Settings",
        }
    }

    fn icon(self) -> lucide_icons::Icon {
        match self {
            ActivePage::Home => lucide_icons::Icon::House,
            ActivePage::Static => lucide_icons::Icon::Palette,
            ActivePage::Dynamic => lucide_icons::Icon::Film,
            ActivePage::Gif => lucide_icons::Icon::Image,
            ActivePage::Device => lucide_icons::Icon::Cpu,
            ActivePage::Connect => lucide_icons::Icon::Bluetooth,
            ActivePage::Settings => lucide_icons::Icon::Settings,
        }
    }
}

fn nav_item(page: ActivePage, active: RwSignal<ActivePage>) -> impl IntoView {
    v_stack((
        label(move || page.icon().unicode().to_string())
            .style(|s| s.font_size(20.0).font_family("lucide".to_string())),
        label(move || page.title()).style(|s| s.font_size(constants::CAPTION_FONT)),
    ))
    .style(move |s| {
        let selected = active.get() == page;
        s.items_center()
            .gap(2.0)
            .width_full()
            .padding_vert(8.0)
            .border_radius(6.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .background(if selected {
                Color::rgba8(0, 0, 0, 15)
            } else {
                Color::rgba8(0, 0, 0, 0)
            })
            .hover(|s| s.background(Color::rgba8(0, 0, 0, 10)))
    })
    .on_click_stop(move |_| {
        debug!(page = page.title(), "navigate");
        active.set(page);
    })
}

fn nav_rail(active: RwSignal<ActivePage>) -> impl IntoView {
    v_stack((
        nav_item(ActivePage::Home, active),
        nav_item(ActivePage::Static, active),
        nav_item(ActivePage::Dynamic, active),
        nav_item(ActivePage::Gif, active),
        nav_item(ActivePage::Device, active),
        empty().style(|s| s.flex_grow(1.0)),
        nav_item(ActivePage::Connect, active),
        nav_item(ActivePage::Settings, active),
    ))
    .style(|s| {
        s.width(constants::NAV_WIDTH)
            .height_full()
            .padding(8.0)
            .gap(4.0)
            .border_right(1.0)
            .border_color(Color::rgba8(0, 0, 0, 20))
    })
}

/// Keep a page alive while hiding it whenever it is not the active one.
fn page_slot(
    active: RwSignal<ActivePage>,
    page: ActivePage,
    child: impl IntoView + 'static,
) -> impl IntoView {
    container(child).style(move |s| {
        let s = s.width_full().height_full();
        if active.get() == page {
            s
        } else {
            s.display(floem::taffy::style::Display::None)
        }
    })
}

/// The top-level window view.
pub fn app_view() -> impl IntoView {
    crate::load_icon_font();

    let active = RwSignal::new(ActivePage::Home);
    let toasts = ToastSlot::new();

    let content = stack((
        page_slot(active, ActivePage::Home, pages::home_page()),
        page_slot(active, ActivePage::Static, static_color_page(toasts)),
        page_slot(active, ActivePage::Dynamic, pages::dynamic_page()),
        page_slot(active, ActivePage::Gif, pages::gif_page()),
        page_slot(active, ActivePage::Device, pages::device_page()),
        page_slot(active, ActivePage::Connect, pages::connect_page()),
        page_slot(active, ActivePage::Settings, pages::settings_page()),
    ))
    .style(|s| s.flex_grow(1.0).height_full());

    stack((
        h_stack((nav_rail(active), content)).style(|s| s.size_full()),
        toast_host(toasts),
    ))
    .style(|s| s.size_full().background(Color::rgb8(242, 242, 242)))
}
