//! Sizing, color, and styling constants for the panel.

/// Wheel disk inset from the widget edge, in logical px.
pub const WHEEL_INSET: f64 = 2.0;

/// Marker circle radius on the wheel while idle.
pub const MARKER_RADIUS: f64 = 8.0;

/// Marker circle radius while the pointer is held down.
pub const MARKER_RADIUS_PRESSED: f64 = 12.0;

/// 1D slider track height.
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on 1D sliders.
pub const THUMB_RADIUS: f64 = 7.0;

/// Corner radius for cards.
pub const CARD_RADIUS: f32 = 8.0;

/// Gap between panel elements.
pub const GAP: f32 = 8.0;

/// Padding around page content.
pub const PAGE_PADDING: f32 = 24.0;

/// Preset tile side length.
pub const TILE_SIZE: f32 = 44.0;

/// Navigation rail width.
pub const NAV_WIDTH: f32 = 88.0;

/// Title font size.
pub const TITLE_FONT: f32 = 22.0;

/// Body font size.
pub const BODY_FONT: f32 = 14.0;

/// Caption font size.
pub const CAPTION_FONT: f32 = 11.0;
