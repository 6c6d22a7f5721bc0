// Theme wire format
//
// Saved configs come back from the API as flat JSON objects:
//   { "name": "...", "color0": "#000000", ..., "color15": "#ffffff",
//     "foreground": "#d3d7cf", "background": "#000000",
//     "selection_background": "#3465a4", "opacity": 0.9,
//     "id": 3, "user_id": 1, "created_at": "..." }
// Server-side bookkeeping fields are ignored. Public configs only carry
// color0..color7, which is fine here and only fails at export time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::{ThemeError, ThemeRecord, PALETTE_SIZE};
use crate::color::Color;

/// Flat JSON shape of a saved theme config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// `color0`..`color15` plus any fields this crate does not use, in
    /// document order
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ThemeJson {
    pub fn from_json_str(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Raw value of palette slot `index`, if present as a string
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.rest.get(&slot_key(index)).and_then(Value::as_str)
    }
}

/// JSON key of a palette slot ("color0".."color15")
pub fn slot_key(index: usize) -> String {
    format!("color{index}")
}

/// Parse an optional color field; empty and null count as absent
fn parse_field(field: &str, raw: Option<&str>) -> Result<Option<Color>, ThemeError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match Color::from_hex(raw) {
        Some(color) => Ok(Some(color)),
        None => {
            debug!(field, value = raw, "Rejected invalid color field");
            Err(ThemeError::InvalidColor {
                field: field.to_string(),
                value: raw.to_string(),
            })
        }
    }
}

impl TryFrom<&ThemeJson> for ThemeRecord {
    type Error = ThemeError;

    fn try_from(json: &ThemeJson) -> Result<Self, Self::Error> {
        let mut builder = ThemeRecord::builder();
        if let Some(name) = &json.name {
            builder = builder.name(name.clone());
        }
        for index in 0..PALETTE_SIZE {
            let key = slot_key(index);
            let raw = match json.rest.get(&key) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.as_str()),
                Some(other) => {
                    return Err(ThemeError::InvalidColor {
                        field: key,
                        value: other.to_string(),
                    })
                }
            };
            if let Some(color) = parse_field(&key, raw)? {
                builder = builder.slot(index, color);
            }
        }
        if let Some(color) = parse_field("foreground", json.foreground.as_deref())? {
            builder = builder.foreground(color);
        }
        if let Some(color) = parse_field("background", json.background.as_deref())? {
            builder = builder.background(color);
        }
        if let Some(color) =
            parse_field("selection_background", json.selection_background.as_deref())?
        {
            builder = builder.selection_background(color);
        }
        if let Some(opacity) = json.opacity {
            builder = builder.opacity(opacity);
        }
        builder.build()
    }
}

impl TryFrom<ThemeJson> for ThemeRecord {
    type Error = ThemeError;

    fn try_from(json: ThemeJson) -> Result<Self, Self::Error> {
        ThemeRecord::try_from(&json)
    }
}

impl From<&ThemeRecord> for ThemeJson {
    fn from(theme: &ThemeRecord) -> Self {
        let rest = theme
            .palette()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|c| (slot_key(index), Value::String(c.to_hex()))))
            .collect();
        Self {
            name: theme.name().map(str::to_string),
            foreground: theme.foreground().map(Color::to_hex),
            background: theme.background().map(Color::to_hex),
            selection_background: theme.selection_background().map(Color::to_hex),
            opacity: theme.opacity(),
            rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DEFAULT_PALETTE;

    const SAVED_CONFIG: &str = r##"{
        "id": 3,
        "user_id": 1,
        "name": "Dracula",
        "color0": "#21222C", "color1": "#ff5555", "color2": "#50fa7b", "color3": "#f1fa8c",
        "color4": "#bd93f9", "color5": "#ff79c6", "color6": "#8be9fd", "color7": "#f8f8f2",
        "color8": "#6272a4", "color9": "#ff6e6e", "color10": "#69ff94", "color11": "#ffffa5",
        "color12": "#d6acff", "color13": "#ff92df", "color14": "#a4ffff", "color15": "#ffffff",
        "foreground": "#f8f8f2",
        "background": "#282a36",
        "selection_background": null,
        "opacity": 0.95,
        "created_at": "2024-01-01T00:00:00"
    }"##;

    #[test]
    fn test_saved_config_parses_into_complete_record() {
        let json = ThemeJson::from_json_str(SAVED_CONFIG).unwrap();
        let theme = ThemeRecord::try_from(&json).unwrap();
        assert_eq!(theme.display_name(), "Dracula");
        assert!(theme.is_complete());
        assert_eq!(theme.slot(0), Some(Color::new(0x21, 0x22, 0x2c)));
        assert_eq!(theme.background(), Some(Color::new(0x28, 0x2a, 0x36)));
        assert_eq!(theme.selection_background(), None);
        assert_eq!(theme.opacity(), Some(0.95));
    }

    #[test]
    fn test_public_config_is_partial() {
        let json = ThemeJson::from_json_str(
            r##"{"id": 1, "name": "Public", "color0": "#000000", "color1": "#111111",
                "color2": "#222222", "color3": "#333333", "color4": "#444444",
                "color5": "#555555", "color6": "#666666", "color7": "#777777",
                "opacity": 0.8}"##,
        )
        .unwrap();
        let theme = ThemeRecord::try_from(json).unwrap();
        assert_eq!(theme.first_missing_slot(), Some(8));
    }

    #[test]
    fn test_empty_color_is_absent() {
        let json = ThemeJson::from_json_str(r#"{"color3": "", "foreground": ""}"#).unwrap();
        let theme = ThemeRecord::try_from(json).unwrap();
        assert_eq!(theme.slot(3), None);
        assert_eq!(theme.foreground(), None);
    }

    #[test]
    fn test_invalid_color_names_the_field() {
        let json = ThemeJson::from_json_str(r##"{"color5": "#12345"}"##).unwrap();
        assert_eq!(
            ThemeRecord::try_from(json),
            Err(ThemeError::InvalidColor {
                field: "color5".to_string(),
                value: "#12345".to_string(),
            })
        );

        let json = ThemeJson::from_json_str(r#"{"color2": 42}"#).unwrap();
        assert!(matches!(
            ThemeRecord::try_from(json),
            Err(ThemeError::InvalidColor { field, .. }) if field == "color2"
        ));
    }

    #[test]
    fn test_padded_color_is_rejected_not_trimmed() {
        for (field, raw) in [("color0", " #123456"), ("foreground", "#abcdef\n"), ("color9", "  ")] {
            let input = serde_json::json!({ field: raw }).to_string();
            let json = ThemeJson::from_json_str(&input).unwrap();
            assert_eq!(
                ThemeRecord::try_from(json),
                Err(ThemeError::InvalidColor {
                    field: field.to_string(),
                    value: raw.to_string(),
                }),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_out_of_range_opacity_is_rejected() {
        let json = ThemeJson::from_json_str(r#"{"opacity": 2.0}"#).unwrap();
        assert_eq!(ThemeRecord::try_from(json), Err(ThemeError::InvalidOpacity(2.0)));
    }

    #[test]
    fn test_palette_keys_serialize_in_slot_order() {
        let text = ThemeJson::from(&ThemeRecord::with_defaults("Tango"))
            .to_json_pretty()
            .unwrap();
        let positions: Vec<usize> = (0..PALETTE_SIZE)
            .map(|index| text.find(&format!("\"{}\"", slot_key(index))).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{text}");
    }

    #[test]
    fn test_record_serializes_to_flat_shape() {
        let theme = ThemeRecord::with_defaults("Tango");
        let json = ThemeJson::from(&theme);
        assert_eq!(json.slot(0), Some("#000000"));
        assert_eq!(json.slot(15), Some("#ffffff"));
        assert_eq!(json.foreground.as_deref(), Some("#d3d7cf"));

        let text = json.to_json_pretty().unwrap();
        assert!(text.contains("\"color12\": \"#5555ff\""));
        assert!(text.contains("\"name\": \"Tango\""));

        let back = ThemeRecord::try_from(ThemeJson::from_json_str(&text).unwrap()).unwrap();
        assert_eq!(back, theme);
        assert_eq!(back.slot(12), Some(DEFAULT_PALETTE[12]));
    }
}
