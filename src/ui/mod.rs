// UI rendering module
//
// Terminal preview of a theme. The preview command draws it once into an
// inline viewport below the shell prompt.

pub mod preview;

pub use preview::{preview_lines, preview_plain_text, render_preview, PREVIEW_HEIGHT};
