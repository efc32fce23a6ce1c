use super::{DrawContext, SeriesRenderer};
use crate::scene::{Mark, MarkId};

/// Grouped bars: each record's band is divided into one equal sub-slot per
/// selected field, ordered by the field selection.
pub struct BarRenderer;

impl SeriesRenderer for BarRenderer {
    fn draw(&self, ctx: &DrawContext<'_>) -> Vec<Mark> {
        let mut marks = Vec::new();
        let slot = ctx.x.bandwidth() / ctx.fields.len() as f64;
        let baseline = ctx.y.baseline();

        for (fi, field) in ctx.fields.iter().enumerate() {
            let Some(fill) = ctx.colors.color(field) else {
                continue;
            };
            for record in ctx.records {
                let Some(band_x) = ctx.x.position(&record.name) else {
                    continue;
                };
                let Some(value) = record.value(field) else {
                    continue;
                };
                let x0 = band_x + slot * fi as f64;
                let y = ctx.y.scale(value);
                marks.push(Mark::Rect {
                    x0,
                    y0: y.min(baseline),
                    x1: x0 + slot,
                    y1: y.max(baseline),
                    fill,
                    id: MarkId::new(record.name.clone(), field.clone()),
                });
            }
        }

        marks
    }
}
