// Kitty terminal configuration template
//
// Layout of the generated kitty.conf:
//   header comments (product, theme name, timestamp)
//   COLORS block         color0..color15, in slot order
//   FOREGROUND & BACKGROUND block (with fallbacks)
//   OPACITY block
//   fixed tail (cursor, font, misc)

use crate::color::Color;
use crate::theme::{
    ThemeRecord, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_OPACITY,
    DEFAULT_SELECTION_BACKGROUND, PALETTE_SIZE,
};

/// Suggested download name
pub const FILE_NAME: &str = "kitty.conf";

/// Directives that do not depend on the theme
pub const TEMPLATE_TAIL: &str = "\
# ===== CURSOR =====
cursor_shape block
cursor_blink_interval 0

# ===== FONT =====
font_family      monospace
font_size        12
bold_font_style  bold

# ===== MISC =====
scrollback_lines 2000
enable_layouts   tall,stack,grid
";

/// Width the palette keys are padded to ("color15" is the longest)
const PALETTE_KEY_WIDTH: usize = 7;

/// Width the special color keys are padded to
const SPECIAL_KEY_WIDTH: usize = 19;

/// Render a complete theme; every palette slot must already be present
pub(super) fn render_complete(
    theme: &ThemeRecord,
    palette: &[Color; PALETTE_SIZE],
    timestamp: &str,
) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(48);

    lines.push("# Craneshell - Kitty Terminal Configuration".to_string());
    lines.push(format!("# Theme: {}", comment_safe(theme.display_name())));
    lines.push(format!("# Generated on {}", comment_safe(timestamp)));
    lines.push(String::new());

    lines.push("# ===== COLORS =====".to_string());
    for (index, color) in palette.iter().enumerate() {
        let key = format!("color{index}");
        lines.push(format!("{key:<PALETTE_KEY_WIDTH$} {color}"));
    }
    lines.push(String::new());

    lines.push("# ===== FOREGROUND & BACKGROUND =====".to_string());
    let specials = [
        ("foreground", theme.foreground().unwrap_or(DEFAULT_FOREGROUND)),
        ("background", theme.background().unwrap_or(DEFAULT_BACKGROUND)),
        (
            "selection_background",
            theme
                .selection_background()
                .unwrap_or(DEFAULT_SELECTION_BACKGROUND),
        ),
    ];
    for (key, color) in specials {
        lines.push(format!("{key:<SPECIAL_KEY_WIDTH$} {color}"));
    }
    lines.push(String::new());

    lines.push("# ===== OPACITY =====".to_string());
    lines.push(format!(
        "background_opacity {}",
        theme.opacity().unwrap_or(DEFAULT_OPACITY)
    ));
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str(TEMPLATE_TAIL);
    out
}

/// Keep free text on a single comment line
fn comment_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_safe_strips_line_breaks() {
        assert_eq!(comment_safe("Night\nfont_size 40"), "Night font_size 40");
        assert_eq!(comment_safe("Тема ☕"), "Тема ☕");
    }

    #[test]
    fn test_template_tail_is_newline_terminated() {
        assert!(TEMPLATE_TAIL.starts_with("# ===== CURSOR ====="));
        assert!(TEMPLATE_TAIL.ends_with("tall,stack,grid\n"));
    }

    #[test]
    fn test_key_padding_matches_kitty_layout() {
        assert_eq!(format!("{:<PALETTE_KEY_WIDTH$} x", "color0"), "color0  x");
        assert_eq!(format!("{:<PALETTE_KEY_WIDTH$} x", "color15"), "color15 x");
        assert_eq!(
            format!("{:<SPECIAL_KEY_WIDTH$} x", "foreground"),
            "foreground          x"
        );
        assert_eq!(
            format!("{:<SPECIAL_KEY_WIDTH$} x", "selection_background"),
            "selection_background x"
        );
    }
}
