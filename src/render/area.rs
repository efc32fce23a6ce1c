use super::{DrawContext, SeriesRenderer};
use crate::scene::Mark;

const FILL_OPACITY: f64 = 0.5;

/// One filled region per field, bounded above by the value curve through the
/// band centers and below by the zero baseline. Half-opacity fill with a
/// solid stroke; no point markers.
pub struct AreaRenderer;

impl SeriesRenderer for AreaRenderer {
    fn draw(&self, ctx: &DrawContext<'_>) -> Vec<Mark> {
        let mut marks = Vec::new();
        let baseline = ctx.y.baseline();

        for field in ctx.fields {
            let Some(color) = ctx.colors.color(field) else {
                continue;
            };

            let curve: Vec<(f64, f64)> = ctx
                .records
                .iter()
                .filter_map(|record| {
                    let cx = ctx.x.center(&record.name)?;
                    let value = record.value(field)?;
                    Some((cx, ctx.y.scale(value)))
                })
                .collect();

            if curve.len() < 2 {
                continue;
            }

            // close the region along the baseline, right to left
            let mut points = curve;
            let first_x = points[0].0;
            let last_x = points[points.len() - 1].0;
            points.push((last_x, baseline));
            points.push((first_x, baseline));

            marks.push(Mark::Area {
                points,
                fill: color,
                opacity: FILL_OPACITY,
                stroke: color,
                field: field.clone(),
            });
        }

        marks
    }
}
