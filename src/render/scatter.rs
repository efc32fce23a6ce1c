use super::{DrawContext, SeriesRenderer};
use crate::scene::{Mark, MarkId};

const POINT_RADIUS: f64 = 5.0;

/// One circle per (record, field) at the band center, no connecting path.
pub struct ScatterRenderer;

impl SeriesRenderer for ScatterRenderer {
    fn draw(&self, ctx: &DrawContext<'_>) -> Vec<Mark> {
        let mut marks = Vec::new();

        for field in ctx.fields {
            let Some(fill) = ctx.colors.color(field) else {
                continue;
            };
            for record in ctx.records {
                let Some(cx) = ctx.x.center(&record.name) else {
                    continue;
                };
                let Some(value) = record.value(field) else {
                    continue;
                };
                marks.push(Mark::Circle {
                    cx,
                    cy: ctx.y.scale(value),
                    r: POINT_RADIUS,
                    fill,
                    id: MarkId::new(record.name.clone(), field.clone()),
                });
            }
        }

        marks
    }
}
