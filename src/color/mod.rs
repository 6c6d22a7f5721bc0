// Color module - hex <-> RGB conversion for theme colors
//
// Hex strings are the interchange format between the configurator form,
// saved theme records and the exported terminal config. Parsing is lenient
// about case and the leading '#', output is always canonical `#rrggbb`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

/// Largest value representable in 24 bits (0xffffff)
pub const MAX_RGB24: u32 = 0x00ff_ffff;

/// Errors produced when a string cannot be read as a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input does not match `#?[0-9a-fA-F]{6}`
    #[error("invalid color format: {0:?} (expected #rrggbb)")]
    InvalidFormat(String),
}

/// An RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from possibly out-of-range channel values
    ///
    /// Each channel is clamped to 0..=255. Slider input can briefly overshoot,
    /// so clamping is the expected path and never an error.
    pub fn from_channels_clamped(r: i32, g: i32, b: i32) -> Self {
        let clamp = |name: &'static str, value: i32| -> u8 {
            let clamped = value.clamp(0, 255);
            if clamped != value {
                debug!(channel = name, value, clamped, "Clamped out-of-range color channel");
            }
            clamped as u8
        };
        Self::new(clamp("r", r), clamp("g", g), clamp("b", b))
    }

    /// Build a color from the low 24 bits of `value` (0xRRGGBB)
    pub const fn from_rgb24(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive
    ///
    /// Returns `None` for anything else. Partially typed input is normal
    /// during live editing, so this is not treated as an error.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let caps = hex_pattern().captures(hex)?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
        Some(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Canonical `#rrggbb` form (lowercase, zero-padded)
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an (r, g, b) tuple
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ColorError::InvalidFormat(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .unwrap_or_else(|e| unreachable!("static hex pattern is valid: {e}"))
    })
}

/// Encode channels as `#rrggbb`, clamping each channel to 0..=255 first
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    Color::from_channels_clamped(r, g, b).to_hex()
}

/// Parse a hex color; `None` if it is not exactly six hex digits
pub fn hex_to_rgb(hex: &str) -> Option<Color> {
    Color::from_hex(hex)
}

/// Whether `hex` would be accepted by [`hex_to_rgb`]
pub fn is_valid_hex(hex: &str) -> bool {
    hex_pattern().is_match(hex)
}

/// Random color from the thread-local RNG, as `#rrggbb`
pub fn generate_random_color() -> String {
    generate_random_color_with(&mut rand::thread_rng())
}

/// Random color from the given RNG, as `#rrggbb`
pub fn generate_random_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_color(rng).to_hex()
}

/// Uniformly distributed color over all 2^24 values
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_rgb24(rng.gen_range(0..=MAX_RGB24))
}
