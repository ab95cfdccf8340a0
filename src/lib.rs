//! # prismfx
//!
//! Desktop control panel for PrismFX addressable-RGB lighting devices,
//! built on [Floem](https://github.com/lapce/floem).
//!
//! The functional heart is the static-color page: a circular hue/saturation
//! wheel kept in sync with a hex readout, a preset palette, a brightness
//! slider, and a power toggle, mediated by a single controller that owns the
//! canonical state and never echoes a widget's own change back into it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use prismfx::app_view;
//!
//! // Use `app_view()` as the window root in a Floem application.
//! ```

mod app;
mod brightness_slider;
mod color;
mod color_wheel;
mod constants;
mod controller;
mod math;
mod pages;
mod presets;
mod static_color;
mod toast;
mod wheel;

pub use app::app_view;
pub use color::{clamp_hue, clamp_saturation, HsColor, InvalidColorFormat};
pub use controller::{CanonicalState, Collaborators, Mirrors, Origin, StaticColorController};
pub use presets::{PresetColor, PRESET_PALETTE};
pub use toast::{Notice, NoticeKind};
pub use wheel::{WheelCore, WheelEvent, WheelGeometry};

use std::sync::Once;

use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Load the lucide icon font into Floem's font system, once.
pub(crate) fn load_icon_font() {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}
