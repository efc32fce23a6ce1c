//! Output backends. Both walk the same compiled scene: marks first, guides
//! on top, exactly as the orchestrator ordered them.

pub mod png;
pub mod svg;

use anyhow::Result;

use crate::record::Record;
use crate::scene::Scene;
use crate::OutputFormat;

/// Encode a scene in the requested format. The records and field selection
/// are only needed by the SVG backend, which embeds hover text.
pub fn encode(
    scene: &Scene,
    format: OutputFormat,
    records: &[Record],
    fields: &[String],
) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Png => png::encode(scene),
        OutputFormat::Svg => Ok(svg::encode(scene, records, fields).into_bytes()),
    }
}
