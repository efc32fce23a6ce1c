//! Rasterize a scene to PNG with plotters' bitmap backend.
//!
//! The backend cannot rotate text at arbitrary angles, so the −45° category
//! labels are drawn unrotated (end-anchored at the tick) and only the −90°
//! axis title uses a quarter turn. The SVG backend carries the exact angles.

use anyhow::{Context, Result};
use image::ImageEncoder;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::scene::{Guide, Mark, Scene, TextAnchor};

pub fn encode(scene: &Scene) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; (scene.width * scene.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (scene.width, scene.height))
            .into_drawing_area();
        root.fill(&scene.background)
            .context("failed to fill background")?;

        for mark in &scene.marks {
            draw_mark(&root, mark)?;
        }
        for guide in &scene.guides {
            draw_guide(&root, guide)?;
        }

        root.present().context("failed to present drawing")?;
    }

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(&buffer, scene.width, scene.height, image::ColorType::Rgb8)
        .context("failed to encode PNG")?;
    Ok(png_bytes)
}

type Root<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

fn draw_mark(root: &Root<'_>, mark: &Mark) -> Result<()> {
    match mark {
        Mark::Rect {
            x0, y0, x1, y1, fill, ..
        } => {
            root.draw(&Rectangle::new(
                [(*x0 as i32, *y0 as i32), (*x1 as i32, *y1 as i32)],
                fill.filled(),
            ))
            .context("failed to draw bar")?;
        }
        Mark::Circle { cx, cy, r, fill, .. } => {
            root.draw(&Circle::new(
                (*cx as i32, *cy as i32),
                *r as i32,
                fill.filled(),
            ))
            .context("failed to draw point")?;
        }
        Mark::Path {
            points,
            stroke,
            width,
            ..
        } => {
            root.draw(&PathElement::new(
                px_points(points),
                stroke.stroke_width(*width as u32),
            ))
            .context("failed to draw line")?;
        }
        Mark::Area {
            points,
            fill,
            opacity,
            stroke,
            ..
        } => {
            root.draw(&Polygon::new(px_points(points), fill.mix(*opacity).filled()))
                .context("failed to draw area fill")?;
            let mut outline = px_points(points);
            if let Some(&first) = outline.first() {
                outline.push(first);
            }
            root.draw(&PathElement::new(outline, stroke.stroke_width(2)))
                .context("failed to draw area outline")?;
        }
    }
    Ok(())
}

fn draw_guide(root: &Root<'_>, guide: &Guide) -> Result<()> {
    match guide {
        Guide::Line { x0, y0, x1, y1, color } => {
            root.draw(&PathElement::new(
                vec![(*x0 as i32, *y0 as i32), (*x1 as i32, *y1 as i32)],
                color.stroke_width(1),
            ))
            .context("failed to draw axis line")?;
        }
        Guide::Rect { x0, y0, x1, y1, fill } => {
            root.draw(&Rectangle::new(
                [(*x0 as i32, *y0 as i32), (*x1 as i32, *y1 as i32)],
                fill.filled(),
            ))
            .context("failed to draw legend swatch")?;
        }
        Guide::Text {
            x,
            y,
            text,
            size,
            angle,
            anchor,
            color,
        } => {
            let hpos = match anchor {
                TextAnchor::Start => HPos::Left,
                TextAnchor::Middle => HPos::Center,
                TextAnchor::End => HPos::Right,
            };
            let mut style = TextStyle::from(("sans-serif", *size as i32).into_font())
                .color(color)
                .pos(Pos::new(hpos, VPos::Center));
            if *angle == -90.0 {
                style = style.transform(FontTransform::Rotate270);
            }
            root.draw(&Text::new(text.clone(), (*x as i32, *y as i32), style))
                .context("failed to draw label")?;
        }
    }
    Ok(())
}

fn px_points(points: &[(f64, f64)]) -> Vec<(i32, i32)> {
    points.iter().map(|&(x, y)| (x as i32, y as i32)).collect()
}
