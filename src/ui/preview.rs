// Theme preview rendering
//
// Builds a small mock terminal session styled with the theme's colors:
// a prompt line, the two palette rows as swatches, and a few lines of
// sample output. Works on incomplete themes so it can follow live edits.

use crate::color::Color;
use crate::theme::{
    ThemeRecord, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_SELECTION_BACKGROUND,
    PALETTE_SIZE,
};
use ratatui::{
    style::{Color as TuiColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Swatch text for a palette slot that has no color yet
pub const MISSING_SWATCH: &str = " ?? ";

/// Rows needed by [`preview_lines`] plus the border
pub const PREVIEW_HEIGHT: u16 = 10;

impl From<Color> for TuiColor {
    fn from(color: Color) -> Self {
        TuiColor::Rgb(color.r, color.g, color.b)
    }
}

/// Base style: theme foreground on theme background (with fallbacks)
pub fn base_style(theme: &ThemeRecord) -> Style {
    Style::default()
        .fg(theme.foreground().unwrap_or(DEFAULT_FOREGROUND).into())
        .bg(theme.background().unwrap_or(DEFAULT_BACKGROUND).into())
}

/// Foreground style for palette slot `index`, or the base style if unset
fn slot_style(theme: &ThemeRecord, index: usize) -> Style {
    match theme.slot(index) {
        Some(color) => base_style(theme).fg(color.into()),
        None => base_style(theme),
    }
}

/// One row of swatches for slots `range`
fn swatch_row(theme: &ThemeRecord, range: std::ops::Range<usize>) -> Line<'static> {
    let spans: Vec<Span<'static>> = range
        .map(|index| match theme.slot(index) {
            Some(color) => Span::styled("    ", Style::default().bg(color.into())),
            None => Span::styled(
                MISSING_SWATCH,
                base_style(theme).add_modifier(Modifier::DIM),
            ),
        })
        .collect();
    Line::from(spans)
}

/// Styled lines of the preview
pub fn preview_lines(theme: &ThemeRecord) -> Vec<Line<'static>> {
    let base = base_style(theme);
    let selection = theme
        .selection_background()
        .unwrap_or(DEFAULT_SELECTION_BACKGROUND);
    let half = PALETTE_SIZE / 2;

    vec![
        Line::from(vec![
            Span::styled("user@craneshell", slot_style(theme, 2).add_modifier(Modifier::BOLD)),
            Span::styled(":", base),
            Span::styled("~/themes", slot_style(theme, 4).add_modifier(Modifier::BOLD)),
            Span::styled("$ ls --color", base),
        ]),
        Line::from(vec![
            Span::styled("dracula.json  ", base),
            Span::styled("exports/  ", slot_style(theme, 12)),
            Span::styled("install.sh  ", slot_style(theme, 10)),
            Span::styled("kitty.conf", base.bg(selection.into())),
        ]),
        Line::from(vec![
            Span::styled("error: ", slot_style(theme, 1).add_modifier(Modifier::BOLD)),
            Span::styled("palette slot missing  ", base),
            Span::styled("warning: ", slot_style(theme, 3)),
            Span::styled("low contrast", base),
        ]),
        Line::from(vec![
            Span::styled("# comment ", slot_style(theme, 8)),
            Span::styled("fn ", slot_style(theme, 5)),
            Span::styled("main", slot_style(theme, 6)),
            Span::styled("() {}", base),
        ]),
        Line::from(""),
        swatch_row(theme, 0..half),
        swatch_row(theme, half..PALETTE_SIZE),
        Line::from(Span::styled(
            format!("opacity {}", theme.opacity().map_or("default".to_string(), |o| o.to_string())),
            slot_style(theme, 7).add_modifier(Modifier::ITALIC),
        )),
    ]
}

/// Draw the preview into the whole frame
pub fn render_preview(f: &mut Frame, theme: &ThemeRecord) {
    let block = Block::default()
        .title(format!(" {} ", theme.display_name()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(base_style(theme));
    let paragraph = Paragraph::new(preview_lines(theme))
        .style(base_style(theme))
        .block(block);
    f.render_widget(paragraph, f.area());
}

/// Unstyled text of the preview, for non-terminal output
pub fn preview_plain_text(theme: &ThemeRecord) -> String {
    let mut out = format!("{}\n", theme.display_name());
    for line in preview_lines(theme) {
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        out.push_str(text.trim_end());
        out.push('\n');
    }
    for index in 0..PALETTE_SIZE {
        let value = theme
            .slot(index)
            .map_or_else(|| "(missing)".to_string(), |c| c.to_hex());
        out.push_str(&format!("color{index:<2} {value}\n"));
    }
    out
}
