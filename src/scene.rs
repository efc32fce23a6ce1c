//! The compiled scene: primitive marks plus axis/legend guides.
//!
//! Backends execute these blindly; the interaction layer hit-tests the data
//! marks. Everything here is rebuilt from scratch on every render pass.

use plotters::style::RGBColor;
use serde::Deserialize;

/// Screen margins around the plot area, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40,
            right: 40,
            bottom: 60,
            left: 60,
        }
    }
}

/// Identity tag attributing a data mark back to its source record and field,
/// so hover events can build tooltip content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkId {
    pub record: String,
    pub field: String,
}

impl MarkId {
    pub fn new(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            record: record.into(),
            field: field.into(),
        }
    }
}

/// A primary data mark. Coordinates are absolute canvas pixels.
#[derive(Debug, Clone)]
pub enum Mark {
    Rect {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        fill: RGBColor,
        id: MarkId,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: RGBColor,
        id: MarkId,
    },
    /// Connected value curve for one field. Not a hover target; its point
    /// markers are emitted as separate circles.
    Path {
        points: Vec<(f64, f64)>,
        stroke: RGBColor,
        width: f64,
        field: String,
    },
    /// Closed polygon bounded below by the zero baseline.
    Area {
        points: Vec<(f64, f64)>,
        fill: RGBColor,
        opacity: f64,
        stroke: RGBColor,
        field: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Axis, tick, title, and legend primitives. Guides carry no record identity
/// and are never hover targets.
#[derive(Debug, Clone)]
pub enum Guide {
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: RGBColor,
    },
    /// Legend swatch.
    Rect {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        fill: RGBColor,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        /// Degrees, counter-clockwise negative (SVG convention).
        angle: f64,
        anchor: TextAnchor,
        color: RGBColor,
    },
}

/// Horizontal pixel span allocated to one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub name: String,
    pub x0: f64,
    pub x1: f64,
}

/// The complete displayed output of one render pass.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub background: RGBColor,
    pub marks: Vec<Mark>,
    pub guides: Vec<Guide>,
    pub bands: Vec<Band>,
}

impl Scene {
    /// A blank scene: background only, nothing drawn.
    pub fn empty(width: u32, height: u32, margins: Margins, background: RGBColor) -> Self {
        Self {
            width,
            height,
            margins,
            background,
            marks: Vec::new(),
            guides: Vec::new(),
            bands: Vec::new(),
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.margins.left as f64
    }

    pub fn plot_right(&self) -> f64 {
        (self.width - self.margins.right) as f64
    }

    pub fn plot_top(&self) -> f64 {
        self.margins.top as f64
    }

    pub fn plot_bottom(&self) -> f64 {
        (self.height - self.margins.bottom) as f64
    }

    /// The band containing `px`, or the nearest one when `px` falls in
    /// inter-band padding. `None` only when the scene has no bands.
    pub fn band_at(&self, px: f64) -> Option<&Band> {
        if let Some(band) = self.bands.iter().find(|b| px >= b.x0 && px <= b.x1) {
            return Some(band);
        }
        self.bands.iter().min_by(|a, b| {
            let da = (px - (a.x0 + a.x1) / 2.0).abs();
            let db = (px - (b.x0 + b.x1) / 2.0).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scene() -> Scene {
        let mut scene = Scene::empty(1000, 600, Margins::default(), RGBColor(255, 255, 255));
        scene.bands = vec![
            Band {
                name: "A".into(),
                x0: 100.0,
                x1: 190.0,
            },
            Band {
                name: "B".into(),
                x0: 200.0,
                x1: 290.0,
            },
        ];
        scene
    }

    #[test]
    fn test_plot_rect_from_margins() {
        let scene = make_scene();
        assert_eq!(scene.plot_left(), 60.0);
        assert_eq!(scene.plot_right(), 960.0);
        assert_eq!(scene.plot_top(), 40.0);
        assert_eq!(scene.plot_bottom(), 540.0);
    }

    #[test]
    fn test_band_at_containing() {
        let scene = make_scene();
        assert_eq!(scene.band_at(150.0).unwrap().name, "A");
        assert_eq!(scene.band_at(210.0).unwrap().name, "B");
    }

    #[test]
    fn test_band_at_padding_picks_nearest() {
        let scene = make_scene();
        assert_eq!(scene.band_at(192.0).unwrap().name, "A");
        assert_eq!(scene.band_at(198.0).unwrap().name, "B");
    }

    #[test]
    fn test_band_at_empty() {
        let scene = Scene::empty(1000, 600, Margins::default(), RGBColor(0, 0, 0));
        assert!(scene.band_at(100.0).is_none());
    }
}
