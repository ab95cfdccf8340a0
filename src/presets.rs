//! Fixed preset palette and the tile grid that exposes it.
//!
//! Every entry is a full-value color (max channel 0xFF), so converting a
//! tile's hex to hue/saturation and re-deriving the hex reproduces the tile
//! color exactly — selecting a preset shows precisely the printed color.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::color::parse_hex_rgb;
use crate::constants;

/// One palette entry: display name plus the literal tile color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColor {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn preset(name: &'static str, hex: &'static str) -> PresetColor {
    PresetColor { name, hex }
}

/// The ordered preset palette: a 12°-step vivid ring, a 30°-step tint ring,
/// and white. Immutable at runtime.
pub const PRESET_PALETTE: [PresetColor; 43] = [
    preset("Red", "#FF0000"),
    preset("Vermilion", "#FF3300"),
    preset("Orange", "#FF6600"),
    preset("Amber", "#FF9900"),
    preset("Gold", "#FFCC00"),
    preset("Yellow", "#FFFF00"),
    preset("Pear", "#CCFF00"),
    preset("Chartreuse", "#99FF00"),
    preset("Lime", "#66FF00"),
    preset("Harlequin", "#33FF00"),
    preset("Green", "#00FF00"),
    preset("Erin", "#00FF33"),
    preset("Spring Green", "#00FF66"),
    preset("Emerald", "#00FF99"),
    preset("Turquoise", "#00FFCC"),
    preset("Cyan", "#00FFFF"),
    preset("Sky", "#00CCFF"),
    preset("Azure", "#0099FF"),
    preset("Cobalt", "#0066FF"),
    preset("Ultramarine", "#0033FF"),
    preset("Blue", "#0000FF"),
    preset("Indigo", "#3300FF"),
    preset("Violet", "#6600FF"),
    preset("Purple", "#9900FF"),
    preset("Orchid", "#CC00FF"),
    preset("Magenta", "#FF00FF"),
    preset("Fuchsia", "#FF00CC"),
    preset("Hot Pink", "#FF0099"),
    preset("Rose", "#FF0066"),
    preset("Crimson", "#FF0033"),
    preset("Salmon", "#FF5555"),
    preset("Peach", "#FFAA55"),
    preset("Lemon", "#FFFF55"),
    preset("Pistachio", "#AAFF55"),
    preset("Mint", "#55FF55"),
    preset("Seafoam", "#55FFAA"),
    preset("Ice", "#55FFFF"),
    preset("Cornflower", "#55AAFF"),
    preset("Periwinkle", "#5555FF"),
    preset("Lavender", "#AA55FF"),
    preset("Pink", "#FF55FF"),
    preset("Blush", "#FF55AA"),
    preset("White", "#FFFFFF"),
];

/// Tiles per grid row.
const ROW_LEN: usize = 8;

fn tile_color(entry: &PresetColor) -> Color {
    let (r, g, b) = parse_hex_rgb(entry.hex).unwrap_or((127, 127, 127));
    Color::rgb8(r, g, b)
}

/// One clickable swatch tile. Shows a check badge while `current_hex`
/// matches the tile color.
fn preset_tile(
    entry: PresetColor,
    current_hex: RwSignal<String>,
    on_pick: Rc<dyn Fn(&'static str)>,
) -> impl IntoView {
    let fill = tile_color(&entry);
    container(
        label(|| lucide_icons::Icon::Check.unicode().to_string()).style(move |s| {
            let selected = current_hex.get() == entry.hex;
            let badge = if selected {
                Color::rgba8(0, 0, 0, 184)
            } else {
                Color::rgba8(0, 0, 0, 0)
            };
            let glyph = if selected {
                Color::WHITE
            } else {
                Color::rgba8(255, 255, 255, 0)
            };
            s.size(18.0, 18.0)
                .border_radius(9.0)
                .font_size(12.0)
                .font_family("lucide".to_string())
                .items_center()
                .justify_center()
                .color(glyph)
                .background(badge)
        }),
    )
    .style(move |s| {
        s.size(constants::TILE_SIZE, constants::TILE_SIZE)
            .border_radius(6.0)
            .border(1.0)
            .border_color(Color::rgba8(0, 0, 0, 26))
            .background(fill)
            .padding(4.0)
            .justify_content(Some(floem::taffy::AlignContent::End))
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_click_stop(move |_| on_pick(entry.hex))
}

/// The preset grid: fixed rows of tiles over [`PRESET_PALETTE`].
pub fn preset_grid(
    current_hex: RwSignal<String>,
    on_pick: impl Fn(&'static str) + 'static,
) -> impl IntoView {
    let on_pick: Rc<dyn Fn(&'static str)> = Rc::new(on_pick);
    v_stack_from_iter(PRESET_PALETTE.chunks(ROW_LEN).map(|row| {
        let on_pick = on_pick.clone();
        h_stack_from_iter(
            row.iter()
                .map(move |entry| preset_tile(*entry, current_hex, on_pick.clone())),
        )
        .style(|s| s.gap(constants::GAP))
    }))
    .style(|s| s.gap(constants::GAP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HsColor;
    use pretty_assertions::assert_eq;

    #[test]
    fn palette_has_43_entries() {
        assert_eq!(PRESET_PALETTE.len(), 43);
    }

    #[test]
    fn every_entry_parses() {
        for entry in &PRESET_PALETTE {
            parse_hex_rgb(entry.hex).unwrap();
        }
    }

    #[test]
    fn every_entry_round_trips_through_hue_saturation() {
        for entry in &PRESET_PALETTE {
            let hs = HsColor::from_hex(entry.hex).unwrap();
            assert_eq!(hs.to_hex(), entry.hex, "{}", entry.name);
        }
    }

    #[test]
    fn entries_are_unique() {
        for (i, a) in PRESET_PALETTE.iter().enumerate() {
            for b in &PRESET_PALETTE[i + 1..] {
                assert_ne!(a.hex, b.hex, "{} and {}", a.name, b.name);
            }
        }
    }
}
