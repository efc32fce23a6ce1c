//! Shared axis and legend guides, drawn identically for every chart kind.

use super::DrawContext;
use crate::scene::{Guide, Scene, TextAnchor};
use crate::theme::Theme;

const X_AXIS_TITLE: &str = "Repository Name";
const Y_AXIS_TITLE: &str = "Value";
const MAX_TICKS: usize = 5;
const TICK_LEN: f64 = 6.0;
const LABEL_SIZE: f64 = 12.0;
const TITLE_SIZE: f64 = 14.0;
const LEGEND_SWATCH: f64 = 18.0;
const LEGEND_ROW: f64 = 20.0;

/// Bottom categorical axis (record labels rotated −45°), left numeric axis
/// (≤5 SI-abbreviated ticks), both axis titles, and the field legend.
pub fn build_guides(ctx: &DrawContext<'_>, scene: &Scene, theme: Theme) -> Vec<Guide> {
    let mut guides = Vec::new();
    let axis = theme.axis_line();
    let label = theme.label();

    let left = scene.plot_left();
    let right = scene.plot_right();
    let top = scene.plot_top();
    let bottom = scene.plot_bottom();

    // axis lines
    guides.push(Guide::Line {
        x0: left,
        y0: bottom,
        x1: right,
        y1: bottom,
        color: axis,
    });
    guides.push(Guide::Line {
        x0: left,
        y0: top,
        x1: left,
        y1: bottom,
        color: axis,
    });

    // categorical ticks and rotated record labels
    for name in ctx.x.names() {
        let Some(cx) = ctx.x.center(name) else {
            continue;
        };
        guides.push(Guide::Line {
            x0: cx,
            y0: bottom,
            x1: cx,
            y1: bottom + TICK_LEN,
            color: axis,
        });
        guides.push(Guide::Text {
            x: cx,
            y: bottom + TICK_LEN + LABEL_SIZE,
            text: name.clone(),
            size: LABEL_SIZE,
            angle: -45.0,
            anchor: TextAnchor::End,
            color: label,
        });
    }

    // numeric ticks with SI-abbreviated labels
    for value in ctx.y.ticks(MAX_TICKS) {
        let py = ctx.y.scale(value);
        guides.push(Guide::Line {
            x0: left - TICK_LEN,
            y0: py,
            x1: left,
            y1: py,
            color: axis,
        });
        guides.push(Guide::Text {
            x: left - TICK_LEN - 3.0,
            y: py + LABEL_SIZE / 3.0,
            text: format_si(value),
            size: LABEL_SIZE,
            angle: 0.0,
            anchor: TextAnchor::End,
            color: label,
        });
    }

    // axis titles
    guides.push(Guide::Text {
        x: (left + right) / 2.0,
        y: scene.height as f64 - 5.0,
        text: X_AXIS_TITLE.to_string(),
        size: TITLE_SIZE,
        angle: 0.0,
        anchor: TextAnchor::Middle,
        color: label,
    });
    guides.push(Guide::Text {
        x: TITLE_SIZE,
        y: (top + bottom) / 2.0,
        text: Y_AXIS_TITLE.to_string(),
        size: TITLE_SIZE,
        angle: -90.0,
        anchor: TextAnchor::Middle,
        color: label,
    });

    // legend: swatch + label per selected field, stacked vertically
    for (i, (field, color)) in ctx.colors.iter().enumerate() {
        let y0 = top + i as f64 * LEGEND_ROW;
        guides.push(Guide::Rect {
            x0: right - LEGEND_SWATCH,
            y0,
            x1: right,
            y1: y0 + LEGEND_SWATCH,
            fill: color,
        });
        guides.push(Guide::Text {
            x: right - LEGEND_SWATCH - 6.0,
            y: y0 + LEGEND_SWATCH / 2.0 + LABEL_SIZE / 3.0,
            text: field.to_string(),
            size: LABEL_SIZE,
            angle: 0.0,
            anchor: TextAnchor::End,
            color: label,
        });
    }

    guides
}

/// Abbreviate an axis value with an SI suffix, e.g. `1200 -> "1.2k"`.
pub fn format_si(value: f64) -> String {
    let abs = value.abs();
    if abs < 1000.0 {
        return trim_trailing(value, 1);
    }
    let (divisor, suffix) = if abs >= 1e12 {
        (1e12, "T")
    } else if abs >= 1e9 {
        (1e9, "G")
    } else if abs >= 1e6 {
        (1e6, "M")
    } else {
        (1e3, "k")
    };
    let mantissa = value / divisor;
    let text = if mantissa.abs() >= 10.0 {
        trim_trailing(mantissa, 0)
    } else {
        trim_trailing(mantissa, 1)
    };
    format!("{}{}", text, suffix)
}

fn trim_trailing(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
