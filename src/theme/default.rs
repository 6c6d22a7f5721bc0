// Default theme values
//
// New configs start from the Tango palette. The foreground, background,
// selection and opacity defaults double as the fallbacks the Kitty exporter
// writes when a record leaves them unset.

use crate::color::Color;

/// Name used when a theme has none
pub const DEFAULT_THEME_NAME: &str = "My Theme";

/// Foreground fallback (#d3d7cf)
pub const DEFAULT_FOREGROUND: Color = Color::new(0xd3, 0xd7, 0xcf);

/// Background fallback (#000000)
pub const DEFAULT_BACKGROUND: Color = Color::new(0x00, 0x00, 0x00);

/// Selection background fallback (#3465a4)
pub const DEFAULT_SELECTION_BACKGROUND: Color = Color::new(0x34, 0x65, 0xa4);

/// Background opacity fallback
pub const DEFAULT_OPACITY: f64 = 0.9;

/// Tango palette, slots 0-15
pub const DEFAULT_PALETTE: [Color; 16] = [
    Color::from_rgb24(0x000000), // black
    Color::from_rgb24(0xcc0000), // red
    Color::from_rgb24(0x4e9a06), // green
    Color::from_rgb24(0xc4a000), // yellow
    Color::from_rgb24(0x3465a4), // blue
    Color::from_rgb24(0x75507b), // magenta
    Color::from_rgb24(0x06989a), // cyan
    Color::from_rgb24(0xd3d7cf), // white
    Color::from_rgb24(0x555753), // bright black
    Color::from_rgb24(0xff5555), // bright red
    Color::from_rgb24(0x55ff55), // bright green
    Color::from_rgb24(0xffff55), // bright yellow
    Color::from_rgb24(0x5555ff), // bright blue
    Color::from_rgb24(0xff55ff), // bright magenta
    Color::from_rgb24(0x55ffff), // bright cyan
    Color::from_rgb24(0xffffff), // bright white
];

/// Conventional ANSI name of a palette slot
///
/// Returns "unknown" for indices outside 0..16.
pub fn slot_name(index: usize) -> &'static str {
    match index {
        0 => "black",
        1 => "red",
        2 => "green",
        3 => "yellow",
        4 => "blue",
        5 => "magenta",
        6 => "cyan",
        7 => "white",
        8 => "bright black",
        9 => "bright red",
        10 => "bright green",
        11 => "bright yellow",
        12 => "bright blue",
        13 => "bright magenta",
        14 => "bright cyan",
        15 => "bright white",
        _ => "unknown",
    }
}
