//! Light/dark theming: series palettes and chart chrome colors.

use plotters::style::RGBColor;
use serde::Deserialize;

/// Ten-color series palette for light backgrounds (the classic category
/// scheme).
pub const LIGHT_PALETTE: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Ten-color series palette for dark backgrounds; disjoint from
/// `LIGHT_PALETTE`.
pub const DARK_PALETTE: [RGBColor; 10] = [
    RGBColor(0x1b, 0x9e, 0x77),
    RGBColor(0xd9, 0x5f, 0x02),
    RGBColor(0x75, 0x70, 0xb3),
    RGBColor(0xe7, 0x29, 0x8a),
    RGBColor(0x66, 0xa6, 0x1e),
    RGBColor(0xe6, 0xab, 0x02),
    RGBColor(0xa6, 0x76, 0x1d),
    RGBColor(0x66, 0x66, 0x66),
    RGBColor(0x80, 0xb1, 0xd3),
    RGBColor(0xfb, 0x80, 0x72),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Theme {
    #[serde(rename = "light")]
    #[default]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

impl Theme {
    /// Parse a theme name. Unrecognized names fall back to `Light`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(&self) -> &'static [RGBColor; 10] {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }

    /// Series color for the field at `index` in the field selection. The
    /// palette cycles, so the mapping is stable for any selection size.
    pub fn color_for(&self, index: usize) -> RGBColor {
        self.palette()[index % 10]
    }

    pub fn background(&self) -> RGBColor {
        match self {
            Theme::Light => RGBColor(0xff, 0xff, 0xff),
            Theme::Dark => RGBColor(0x12, 0x12, 0x14),
        }
    }

    pub fn axis_line(&self) -> RGBColor {
        match self {
            Theme::Light => RGBColor(0x3c, 0x3c, 0x46),
            Theme::Dark => RGBColor(0xb4, 0xb4, 0xbe),
        }
    }

    pub fn label(&self) -> RGBColor {
        match self {
            Theme::Light => RGBColor(0x14, 0x14, 0x1e),
            Theme::Dark => RGBColor(0xeb, 0xeb, 0xf5),
        }
    }
}

/// Deterministic field -> color assignment for one render pass.
///
/// Colors follow the *position* of the field in the selection, so toggling
/// the theme swaps palettes while preserving the field -> index mapping.
#[derive(Debug, Clone)]
pub struct ColorMap {
    entries: Vec<(String, RGBColor)>,
}

impl ColorMap {
    pub fn new(fields: &[String], theme: Theme) -> Self {
        let entries = fields
            .iter()
            .enumerate()
            .map(|(i, field)| (field.clone(), theme.color_for(i)))
            .collect();
        Self { entries }
    }

    pub fn color(&self, field: &str) -> Option<RGBColor> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|&(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RGBColor)> {
        self.entries.iter().map(|(name, c)| (name.as_str(), *c))
    }
}
