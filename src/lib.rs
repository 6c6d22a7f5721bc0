// craneshell - terminal color-theme configurator
//
// Core pieces:
// - color:  hex <-> RGB conversion, validation, random colors
// - theme:  the ThemeRecord snapshot, Tango defaults, JSON wire format
// - export: deterministic Kitty config rendering with an injected clock
// - ui:     ratatui preview of a (possibly incomplete) theme
// - app:    settings and command handling for the binary

pub mod app;
pub mod cli;
pub mod color;
pub mod export;
pub mod theme;
pub mod ui;

pub use color::{generate_random_color, hex_to_rgb, is_valid_hex, rgb_to_hex, Color, ColorError};
pub use export::{render, Clock, ConfigDocument, ConfigFormat, ExportError, FixedClock, SystemClock};
pub use theme::{ThemeError, ThemeRecord, ThemeRecordBuilder};
