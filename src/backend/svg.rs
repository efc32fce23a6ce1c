//! Serialize a scene as a standalone SVG document.
//!
//! Text angles are carried exactly via `rotate` transforms, and every tagged
//! data mark gets a `<title>` child so viewers show the record's tooltip
//! text on hover.

use crate::interact::tooltip_lines;
use crate::record::Record;
use crate::scene::{Guide, Mark, Scene, TextAnchor};
use plotters::style::RGBColor;

pub fn encode(scene: &Scene, records: &[Record], fields: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="sans-serif">"#,
        w = scene.width,
        h = scene.height
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        scene.width,
        scene.height,
        hex(scene.background)
    ));
    out.push('\n');

    for mark in &scene.marks {
        write_mark(&mut out, mark, records, fields);
    }
    for guide in &scene.guides {
        write_guide(&mut out, guide);
    }

    out.push_str("</svg>\n");
    out
}

fn write_mark(out: &mut String, mark: &Mark, records: &[Record], fields: &[String]) {
    match mark {
        Mark::Rect {
            x0, y0, x1, y1, fill, id,
        } => {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}">"#,
                x0,
                y0,
                x1 - x0,
                y1 - y0,
                hex(*fill)
            ));
            write_title(out, &id.record, records, fields);
            out.push_str("</rect>\n");
        }
        Mark::Circle { cx, cy, r, fill, id } => {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}">"#,
                cx,
                cy,
                r,
                hex(*fill)
            ));
            write_title(out, &id.record, records, fields);
            out.push_str("</circle>\n");
        }
        Mark::Path {
            points,
            stroke,
            width,
            ..
        } => {
            out.push_str(&format!(
                r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                points_attr(points),
                hex(*stroke),
                width
            ));
            out.push('\n');
        }
        Mark::Area {
            points,
            fill,
            opacity,
            stroke,
            ..
        } => {
            out.push_str(&format!(
                r#"<polygon points="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="2"/>"#,
                points_attr(points),
                hex(*fill),
                opacity,
                hex(*stroke)
            ));
            out.push('\n');
        }
    }
}

fn write_guide(out: &mut String, guide: &Guide) {
    match guide {
        Guide::Line { x0, y0, x1, y1, color } => {
            out.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                x0,
                y0,
                x1,
                y1,
                hex(*color)
            ));
            out.push('\n');
        }
        Guide::Rect { x0, y0, x1, y1, fill } => {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                x0,
                y0,
                x1 - x0,
                y1 - y0,
                hex(*fill)
            ));
            out.push('\n');
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
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" fill="{}""#,
                x,
                y,
                size,
                hex(*color)
            ));
            out.push_str(match anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            if *angle != 0.0 {
                out.push_str(&format!(r#" transform="rotate({} {} {})""#, angle, x, y));
            }
            out.push('>');
            out.push_str(&escape_xml(text));
            out.push_str("</text>\n");
        }
    }
}

/// Hover text for one tagged mark: the record's full tooltip lines.
fn write_title(out: &mut String, record_name: &str, records: &[Record], fields: &[String]) {
    let text = match records.iter().find(|r| r.name == record_name) {
        Some(record) => tooltip_lines(record, fields).join("\n"),
        None => record_name.to_string(),
    };
    out.push_str("<title>");
    out.push_str(&escape_xml(&text));
    out.push_str("</title>");
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn hex(color: RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartConfig, ChartKind};
    use crate::render::build_scene;
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

    fn fields() -> Vec<String> {
        vec!["stars".into(), "forks".into()]
    }

    #[test]
    fn test_svg_document_shape() {
        let records = make_records();
        let config = ChartConfig::new(fields());
        let scene = build_scene(&records, &config, &RenderOptions::default());
        let svg = encode(&scene, &records, &fields());

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains(r#"viewBox="0 0 1000 600""#));
        assert!(svg.contains("rotate(-45"));
        assert!(svg.contains("Repository Name"));
    }

    #[test]
    fn test_tagged_marks_carry_hover_titles() {
        let records = make_records();
        let config = ChartConfig::new(fields());
        let scene = build_scene(&records, &config, &RenderOptions::default());
        let svg = encode(&scene, &records, &fields());

        assert!(svg.contains("<title>B\nstars: 50\nforks: 40</title>"));
    }

    #[test]
    fn test_guides_carry_no_titles() {
        let records = make_records();
        let config = ChartConfig::new(fields());
        let mut scene = build_scene(&records, &config, &RenderOptions::default());
        scene.marks.clear();
        let svg = encode(&scene, &records, &fields());
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn test_area_polygon_half_opacity() {
        let records = make_records();
        let config = ChartConfig::new(fields()).with_kind(ChartKind::Area);
        let scene = build_scene(&records, &config, &RenderOptions::default());
        let svg = encode(&scene, &records, &fields());
        assert!(svg.contains(r#"fill-opacity="0.5""#));
    }

    #[test]
    fn test_xml_escaping() {
        let records = vec![
            Record::new("a<b").with_value("stars", 1.0),
            Record::new("c&d").with_value("stars", 2.0),
        ];
        let config = ChartConfig::new(vec!["stars".into()]);
        let scene = build_scene(&records, &config, &RenderOptions::default());
        let svg = encode(&scene, &records, &["stars".to_string()]);
        assert!(svg.contains("a&lt;b"));
        assert!(svg.contains("c&amp;d"));
        assert!(!svg.contains("a<b"));
    }
}
