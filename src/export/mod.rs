// Export module - theme records to terminal emulator config files
//
// `render` is deterministic: the same record and the same clock reading
// always give byte-identical output. Incomplete palettes are rejected
// before any text is produced.

pub mod clock;
pub mod kitty;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::color::Color;
use crate::theme::{slot_name, ThemeRecord, PALETTE_SIZE};

pub use clock::{Clock, FixedClock, SystemClock, UnknownLocale};

/// Errors that block an export
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Palette slot `index` has no color
    #[error("palette slot color{index} ({name}) is missing", index = .0, name = slot_name(*.0))]
    MissingSlot(usize),

    /// Format name not recognized
    #[error("unknown config format {0:?} (supported: kitty)")]
    UnknownFormat(String),
}

/// Target terminal emulator config dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigFormat {
    /// kitty.conf ("terminal-emulator-config")
    #[default]
    #[serde(alias = "terminal-emulator-config")]
    Kitty,
}

impl ConfigFormat {
    pub fn name(self) -> &'static str {
        match self {
            ConfigFormat::Kitty => "kitty",
        }
    }

    /// Conventional file name for documents in this format
    pub fn file_name(self) -> &'static str {
        match self {
            ConfigFormat::Kitty => kitty::FILE_NAME,
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kitty" | "terminal-emulator-config" => Ok(ConfigFormat::Kitty),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// A rendered, newline-terminated UTF-8 config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    format: ConfigFormat,
    text: String,
}

impl ConfigDocument {
    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Suggested file name for saving the document
    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render `theme` as a config document in `format`
///
/// Absent foreground, background, selection background and opacity fall
/// back to the format defaults. Every palette slot is required: the first
/// missing one is reported as [`ExportError::MissingSlot`].
pub fn render(
    theme: &ThemeRecord,
    format: ConfigFormat,
    clock: &dyn Clock,
) -> Result<ConfigDocument, ExportError> {
    let palette = complete_palette(theme)?;
    let text = match format {
        ConfigFormat::Kitty => kitty::render_complete(theme, &palette, &clock.timestamp()),
    };
    debug!(
        format = format.name(),
        theme = theme.display_name(),
        bytes = text.len(),
        "Rendered theme config"
    );
    Ok(ConfigDocument { format, text })
}

/// All 16 palette colors, or the index of the first gap
fn complete_palette(theme: &ThemeRecord) -> Result<[Color; PALETTE_SIZE], ExportError> {
    let mut palette = [Color::new(0, 0, 0); PALETTE_SIZE];
    for (index, slot) in palette.iter_mut().enumerate() {
        *slot = theme.slot(index).ok_or(ExportError::MissingSlot(index))?;
    }
    Ok(palette)
}
