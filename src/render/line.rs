use super::{DrawContext, SeriesRenderer};
use crate::scene::{Mark, MarkId};

const LINE_WIDTH: f64 = 2.0;
const MARKER_RADIUS: f64 = 4.0;

/// One connected path per field through the band centers, in filtered-record
/// order, plus a small filled marker at every data point. The markers are the
/// hover targets; the connector path is not.
pub struct LineRenderer;

impl SeriesRenderer for LineRenderer {
    fn draw(&self, ctx: &DrawContext<'_>) -> Vec<Mark> {
        let mut marks = Vec::new();

        for field in ctx.fields {
            let Some(color) = ctx.colors.color(field) else {
                continue;
            };

            let points: Vec<(String, f64, f64)> = ctx
                .records
                .iter()
                .filter_map(|record| {
                    let cx = ctx.x.center(&record.name)?;
                    let value = record.value(field)?;
                    Some((record.name.clone(), cx, ctx.y.scale(value)))
                })
                .collect();

            if points.len() >= 2 {
                marks.push(Mark::Path {
                    points: points.iter().map(|&(_, x, y)| (x, y)).collect(),
                    stroke: color,
                    width: LINE_WIDTH,
                    field: field.clone(),
                });
            }

            for (name, cx, cy) in points {
                marks.push(Mark::Circle {
                    cx,
                    cy,
                    r: MARKER_RADIUS,
                    fill: color,
                    id: MarkId::new(name, field.clone()),
                });
            }
        }

        marks
    }
}
