//! Pointer hit-testing and tooltip state.
//!
//! Hit-testing runs against the compiled scene only; it never mutates marks
//! or triggers a re-render. Tooltip content is per record, not per mark, so
//! hovering any of a record's marks shows the same lines.

use crate::record::Record;
use crate::scene::{Mark, MarkId, Scene};

/// Vertical offset between the pointer and the tooltip anchor, in pixels.
const TOOLTIP_RAISE: f64 = 28.0;

/// An active tooltip: anchor position plus pre-formatted text lines. The
/// first line is the record name, the rest are `field: value` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
}

/// Holds at most one tooltip. Enter replaces, leave destroys; there is no
/// other state to get stale.
#[derive(Debug, Default)]
pub struct InteractionLayer {
    active: Option<Tooltip>,
}

impl InteractionLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a tooltip anchored slightly above the pointer.
    pub fn enter(&mut self, px: f64, py: f64, lines: Vec<String>) {
        self.active = Some(Tooltip {
            x: px,
            y: py - TOOLTIP_RAISE,
            lines,
        });
    }

    pub fn leave(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&Tooltip> {
        self.active.as_ref()
    }
}

/// Find the data mark under `(px, py)`, topmost first. Connector paths are
/// not hover targets; area polygons attribute the hit to the band under the
/// pointer.
pub fn hit_test(scene: &Scene, px: f64, py: f64) -> Option<MarkId> {
    for mark in scene.marks.iter().rev() {
        match mark {
            Mark::Rect { x0, y0, x1, y1, id, .. } => {
                if px >= *x0 && px <= *x1 && py >= *y0 && py <= *y1 {
                    return Some(id.clone());
                }
            }
            Mark::Circle { cx, cy, r, id, .. } => {
                let dx = px - cx;
                let dy = py - cy;
                if dx * dx + dy * dy <= r * r {
                    return Some(id.clone());
                }
            }
            Mark::Area { points, field, .. } => {
                if point_in_polygon(points, px, py) {
                    let record = scene.band_at(px)?.name.clone();
                    return Some(MarkId::new(record, field.clone()));
                }
            }
            Mark::Path { .. } => {}
        }
    }
    None
}

// even-odd ray cast
fn point_in_polygon(points: &[(f64, f64)], px: f64, py: f64) -> bool {
    let mut inside = false;
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) {
            let cross_x = (xj - xi) * (py - yi) / (yj - yi) + xi;
            if px < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// The tooltip text for one record: its name, then one `field: value` line
/// per selected field the record actually carries.
pub fn tooltip_lines(record: &Record, fields: &[String]) -> Vec<String> {
    let mut lines = vec![record.name.clone()];
    for field in fields {
        if let Some(value) = record.value(field) {
            lines.push(format!("{}: {}", field, fmt_value(value)));
        }
    }
    lines
}

fn fmt_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartConfig, ChartKind};
    use crate::render::{build_scene, ChartView};
    use crate::RenderOptions;

    fn make_records() -> Vec<Record> {
        vec![
            Record::new("A")
                .with_value("stars", 100.0)
                .with_value("forks", 10.0),
            Record::new("B")
                .with_value("stars", 50.0)
                .with_value("forks", 40.0),
        ]
    }

    fn make_config(kind: ChartKind) -> ChartConfig {
        ChartConfig::new(vec!["stars".into(), "forks".into()]).with_kind(kind)
    }

    fn center_of(mark: &Mark) -> (f64, f64) {
        match mark {
            Mark::Rect { x0, y0, x1, y1, .. } => ((x0 + x1) / 2.0, (y0 + y1) / 2.0),
            Mark::Circle { cx, cy, .. } => (*cx, *cy),
            _ => panic!("not a point mark"),
        }
    }

    #[test]
    fn test_tooltip_lines_name_then_fields() {
        let record = Record::new("B")
            .with_value("stars", 50.0)
            .with_value("forks", 40.0);
        let lines = tooltip_lines(&record, &["forks".to_string()]);
        assert_eq!(lines, vec!["B".to_string(), "forks: 40".to_string()]);
    }

    #[test]
    fn test_tooltip_lines_skip_missing_fields() {
        let record = Record::new("A").with_value("stars", 100.0);
        let lines = tooltip_lines(&record, &["stars".to_string(), "forks".to_string()]);
        assert_eq!(lines, vec!["A".to_string(), "stars: 100".to_string()]);
    }

    #[test]
    fn test_fmt_value_drops_integer_decimals() {
        assert_eq!(fmt_value(40.0), "40");
        assert_eq!(fmt_value(2.5), "2.5");
    }

    #[test]
    fn test_hit_test_bar() {
        let records = make_records();
        let scene = build_scene(
            &records,
            &make_config(ChartKind::Bar),
            &RenderOptions::default(),
        );
        let target = scene
            .marks
            .iter()
            .find(|m| matches!(m, Mark::Rect { id, .. } if id.record == "B" && id.field == "forks"))
            .unwrap();
        let (px, py) = center_of(target);
        let hit = hit_test(&scene, px, py).unwrap();
        assert_eq!(hit.record, "B");
        assert_eq!(hit.field, "forks");
    }

    #[test]
    fn test_hit_test_misses_background() {
        let records = make_records();
        let scene = build_scene(
            &records,
            &make_config(ChartKind::Bar),
            &RenderOptions::default(),
        );
        // top-left corner is outside the plot area
        assert!(hit_test(&scene, 1.0, 1.0).is_none());
    }

    #[test]
    fn test_hit_test_line_path_is_not_a_target() {
        let records = make_records();
        let scene = build_scene(
            &records,
            &make_config(ChartKind::Line),
            &RenderOptions::default(),
        );
        // find a path midpoint away from any marker circle
        let Some(Mark::Path { points, .. }) = scene
            .marks
            .iter()
            .find(|m| matches!(m, Mark::Path { .. }))
        else {
            panic!("expected a path");
        };
        let mid = (
            (points[0].0 + points[1].0) / 2.0,
            (points[0].1 + points[1].1) / 2.0,
        );
        let hit = hit_test(&scene, mid.0, mid.1);
        // either nothing, or a circle that genuinely overlaps; never the path
        if let Some(id) = hit {
            let overlapping = scene.marks.iter().any(|m| {
                matches!(m, Mark::Circle { cx, cy, r, id: cid, .. }
                    if *cid == id && (mid.0 - cx).powi(2) + (mid.1 - cy).powi(2) <= r * r)
            });
            assert!(overlapping);
        }
    }

    #[test]
    fn test_hit_test_area_attributes_to_band() {
        let records = make_records();
        let scene = build_scene(
            &records,
            &make_config(ChartKind::Area),
            &RenderOptions::default(),
        );
        // a point just above the baseline inside band B is inside the stars
        // region (drawn first) and the forks region (drawn last, wins)
        let band = scene.bands.iter().find(|b| b.name == "B").unwrap();
        let px = (band.x0 + band.x1) / 2.0;
        let py = scene.plot_bottom() - 5.0;
        let hit = hit_test(&scene, px, py).unwrap();
        assert_eq!(hit.record, "B");
        assert_eq!(hit.field, "forks");
    }

    #[test]
    fn test_pointer_lifecycle() {
        let records = make_records();
        let mut view = ChartView::new(RenderOptions::default());
        view.render(&records, &make_config(ChartKind::Bar));

        let (px, py) = {
            let target = view
                .scene()
                .marks
                .iter()
                .find(|m| {
                    matches!(m, Mark::Rect { id, .. } if id.record == "B" && id.field == "forks")
                })
                .unwrap();
            center_of(target)
        };
        let marks_before = view.scene().marks.len();

        let tip = view.pointer_enter(px, py).unwrap().clone();
        assert_eq!(tip.lines[0], "B");
        assert!(tip.lines.contains(&"forks: 40".to_string()));
        assert_eq!(tip.x, px);
        assert_eq!(tip.y, py - TOOLTIP_RAISE);

        view.pointer_leave();
        assert!(view.tooltip().is_none());
        // hover never mutates the scene
        assert_eq!(view.scene().marks.len(), marks_before);
    }

    #[test]
    fn test_render_discards_active_tooltip() {
        let records = make_records();
        let mut view = ChartView::new(RenderOptions::default());
        view.render(&records, &make_config(ChartKind::Bar));
        let (px, py) = center_of(&view.scene().marks[0].clone());
        view.pointer_enter(px, py);
        assert!(view.tooltip().is_some());
        view.render(&records, &make_config(ChartKind::Line));
        assert!(view.tooltip().is_none());
    }

    #[test]
    fn test_point_in_polygon() {
        let square = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        assert!(point_in_polygon(&square, 5.0, 5.0));
        assert!(!point_in_polygon(&square, 15.0, 5.0));
        assert!(!point_in_polygon(&square, -1.0, 5.0));
    }
}
