// Library exports for trendchart

pub mod backend;
pub mod config;
pub mod interact;
pub mod record;
pub mod render;
pub mod scale;
pub mod scene;
pub mod theme;

pub use config::{ChartConfig, ChartKind};
pub use interact::Tooltip;
pub use record::{numeric_fields, records_from_csv, records_from_json, Record};
pub use render::{build_scene, ChartView};
pub use scene::{Margins, Scene};
pub use theme::Theme;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum OutputFormat {
    #[serde(rename = "png")]
    #[default]
    Png,
    #[serde(rename = "svg")]
    Svg,
}

impl OutputFormat {
    /// Lenient name lookup; anything unrecognized falls back to PNG.
    pub fn from_name(name: &str) -> Self {
        match name {
            "svg" => OutputFormat::Svg,
            _ => OutputFormat::Png,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderOptions {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default, rename = "type")]
    pub format: OutputFormat,
    #[serde(default)]
    pub margins: Margins,
}

fn default_width() -> u32 {
    1000
}
fn default_height() -> u32 {
    600
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            format: OutputFormat::Png,
            margins: Margins::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.width, 1000);
        assert_eq!(opts.height, 600);
        assert_eq!(opts.format, OutputFormat::Png);
        assert_eq!(opts.margins.left, 60);
    }

    #[test]
    fn test_render_options_from_json() {
        let opts: RenderOptions =
            serde_json::from_str(r#"{"width": 640, "type": "svg"}"#).unwrap();
        assert_eq!(opts.width, 640);
        assert_eq!(opts.height, 600);
        assert_eq!(opts.format, OutputFormat::Svg);
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("svg"), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_name("png"), OutputFormat::Png);
        assert_eq!(OutputFormat::from_name("bmp"), OutputFormat::Png);
    }
}
