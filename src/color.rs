use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named entry of a palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    pub value: String,
}

impl ColorOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Which of the two palettes a color belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorKind {
    Background,
    Brush,
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Background => write!(f, "background"),
            Self::Brush => write!(f, "brush"),
        }
    }
}

/// Callback receiving `(kind, color)` whenever a palette selection changes
pub type ColorChangeHandler = Box<dyn FnMut(ColorKind, &str)>;

const NAMED_COLORS: &[(&str, Color32)] = &[
    ("black", Color32::BLACK),
    ("white", Color32::WHITE),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("grey", Color32::from_rgb(128, 128, 128)),
    ("transparent", Color32::TRANSPARENT),
];

/// Parses a fill-style color string.
///
/// Supports `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and a handful of CSS names.
pub fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    if value.starts_with('#') {
        return Color32::from_hex(value).ok();
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        let blue = Color32::from_rgb(0xa7, 0xd2, 0xcb);
        let red = Color32::from_rgb(0xc9, 0x7d, 0x7d);
        assert_eq!(parse_color("#a7d2cb"), Some(blue));
        assert_eq!(parse_color("  #C97D7D "), Some(red));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_color("#fff"), Some(Color32::WHITE));
        assert_eq!(parse_color("#0000"), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("Black"), Some(Color32::BLACK));
        assert_eq!(parse_color("periwinkle"), None);
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("a7d2cb"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ColorKind::Background.to_string(), "background");
        assert_eq!(ColorKind::Brush.to_string(), "brush");
    }
}
