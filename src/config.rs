use serde::Deserialize;

use crate::theme::Theme;

/// Which drawing strategy renders the primary marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ChartKind {
    #[serde(rename = "bar")]
    #[default]
    Bar,
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "scatter")]
    Scatter,
    #[serde(rename = "area")]
    Area,
}

impl ChartKind {
    /// Parse a kind name. Unrecognized names fall back to `Bar`, the
    /// documented default.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "line" => ChartKind::Line,
            "scatter" => ChartKind::Scatter,
            "area" => ChartKind::Area,
            _ => ChartKind::Bar,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Area => "area",
        }
    }
}

/// The four user-controlled inputs of a render pass.
///
/// `fields` is ordered (it drives bar sub-slots and the legend) and must be
/// non-empty for anything to be drawn. An empty `records` selection means
/// "all records".
#[derive(Debug, Clone, Default)]
pub struct ChartConfig {
    pub fields: Vec<String>,
    pub records: Vec<String>,
    pub kind: ChartKind,
    pub theme: Theme,
}

impl ChartConfig {
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn with_records(mut self, records: Vec<String>) -> Self {
        self.records = records;
        self
    }

    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_kind_from_name() {
        assert_eq!(ChartKind::from_name("line"), ChartKind::Line);
        assert_eq!(ChartKind::from_name("AREA"), ChartKind::Area);
        assert_eq!(ChartKind::from_name(" scatter "), ChartKind::Scatter);
    }

    #[test]
    fn test_chart_kind_unknown_falls_back_to_bar() {
        assert_eq!(ChartKind::from_name("pie"), ChartKind::Bar);
        assert_eq!(ChartKind::from_name(""), ChartKind::Bar);
    }

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.theme, Theme::Light);
        assert!(config.records.is_empty());
    }
}
