// Theme module - the color theme record and its defaults
//
// A ThemeRecord is assembled once (from form input, a saved config or a
// generator), validated in `ThemeRecordBuilder::build`, and then only read.
// Palette slots and the special colors may be absent: previews render what
// is there, and the exporter decides what absence means.

pub mod default;
pub mod json;

use rand::Rng;
use thiserror::Error;

use crate::color::{random_color, Color};

pub use default::*;
pub use json::ThemeJson;

/// Number of ANSI palette slots in a theme
pub const PALETTE_SIZE: usize = 16;

/// Errors raised while assembling a theme record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    /// A color field is present but not a `#rrggbb` value
    #[error("{field} has invalid color {value:?} (expected #rrggbb)")]
    InvalidColor { field: String, value: String },

    /// Opacity is NaN or outside 0.0..=1.0
    #[error("opacity {0} is outside 0.0..=1.0")]
    InvalidOpacity(f64),

    /// Palette index outside 0..16
    #[error("palette slot {0} does not exist (expected 0..16)")]
    SlotOutOfRange(usize),
}

/// A terminal color theme: 16 palette slots plus special colors
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeRecord {
    name: Option<String>,
    palette: [Option<Color>; PALETTE_SIZE],
    foreground: Option<Color>,
    background: Option<Color>,
    selection_background: Option<Color>,
    opacity: Option<f64>,
}

impl ThemeRecord {
    pub fn builder() -> ThemeRecordBuilder {
        ThemeRecordBuilder::default()
    }

    /// Complete record using the Tango palette and the standard fallbacks
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            palette: DEFAULT_PALETTE.map(Some),
            foreground: Some(DEFAULT_FOREGROUND),
            background: Some(DEFAULT_BACKGROUND),
            selection_background: Some(DEFAULT_SELECTION_BACKGROUND),
            opacity: Some(DEFAULT_OPACITY),
        }
    }

    /// Complete record with every color drawn from `rng`
    ///
    /// Opacity is left unset so exporters apply their own default.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, name: impl Into<String>) -> Self {
        let mut palette = [None; PALETTE_SIZE];
        for slot in palette.iter_mut() {
            *slot = Some(random_color(rng));
        }
        Self {
            name: Some(name.into()),
            palette,
            foreground: Some(random_color(rng)),
            background: Some(random_color(rng)),
            selection_background: Some(random_color(rng)),
            opacity: None,
        }
    }

    /// Theme name as given, `None` when unset or blank
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Theme name, falling back to "My Theme"
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(DEFAULT_THEME_NAME)
    }

    /// Color at palette slot `index`; `None` if unset or out of range
    pub fn slot(&self, index: usize) -> Option<Color> {
        self.palette.get(index).copied().flatten()
    }

    pub fn palette(&self) -> &[Option<Color>; PALETTE_SIZE] {
        &self.palette
    }

    /// Index of the first unset palette slot, if any
    pub fn first_missing_slot(&self) -> Option<usize> {
        self.palette.iter().position(Option::is_none)
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing_slot().is_none()
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn selection_background(&self) -> Option<Color> {
        self.selection_background
    }

    pub fn opacity(&self) -> Option<f64> {
        self.opacity
    }
}

/// Collects theme fields and validates them once in [`build`](Self::build)
#[derive(Debug, Clone, Default)]
pub struct ThemeRecordBuilder {
    name: Option<String>,
    palette: [Option<Color>; PALETTE_SIZE],
    foreground: Option<Color>,
    background: Option<Color>,
    selection_background: Option<Color>,
    opacity: Option<f64>,
    bad_slot: Option<usize>,
}

impl ThemeRecordBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set palette slot `index`; indices past 15 fail at build time
    pub fn slot(mut self, index: usize, color: Color) -> Self {
        match self.palette.get_mut(index) {
            Some(slot) => *slot = Some(color),
            None => {
                self.bad_slot.get_or_insert(index);
            }
        }
        self
    }

    /// Set slots 0.. from an iterator, in order
    pub fn palette(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        for (index, color) in colors.into_iter().enumerate() {
            self = self.slot(index, color);
        }
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn selection_background(mut self, color: Color) -> Self {
        self.selection_background = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn build(self) -> Result<ThemeRecord, ThemeError> {
        if let Some(index) = self.bad_slot {
            return Err(ThemeError::SlotOutOfRange(index));
        }
        if let Some(opacity) = self.opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ThemeError::InvalidOpacity(opacity));
            }
        }
        // -0.0 passes the range check but would print as "-0"
        let opacity = self.opacity.map(|o| if o == 0.0 { 0.0 } else { o });
        Ok(ThemeRecord {
            name: self.name,
            palette: self.palette,
            foreground: self.foreground,
            background: self.background,
            selection_background: self.selection_background,
            opacity,
        })
    }
}
